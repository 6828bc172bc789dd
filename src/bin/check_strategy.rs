use interval_spoiler::logging::init_tracing;
use interval_spoiler::strategy::graph::StrategyGraph;
use interval_spoiler::strategy::read_strategy;

const USAGE: &str = "Usage: check_strategy [--debug] [--json] [<file>|-]...";

fn main() {
    init_tracing();
    let mut debug = false;
    let mut json = false;
    let mut inputs: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--debug" => debug = true,
            "--json" => json = true,
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                return;
            }
            x if x.starts_with("--") => {
                eprintln!("Unknown option: {x}\n\n{USAGE}");
                std::process::exit(2);
            }
            _ => inputs.push(arg),
        }
    }
    if inputs.is_empty() {
        inputs.push("-".to_string());
    }

    let mut files = Vec::with_capacity(inputs.len());
    for path in &inputs {
        match read_strategy(path) {
            Ok(f) => files.push(f),
            Err(e) => {
                eprintln!("Failed to load strategy {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    let graph = match StrategyGraph::build(&files) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid strategy: {e}");
            std::process::exit(1);
        }
    };

    if debug {
        match graph.debug_lines() {
            Ok(lines) => {
                for line in lines {
                    eprintln!("{line}");
                }
            }
            Err(e) => {
                eprintln!("Failed to list strategy: {e}");
                std::process::exit(1);
            }
        }
    }

    let report = match graph.verify() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Verification failed: {e}");
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{report}");
    }

    if !report.correct {
        std::process::exit(1);
    }
}
