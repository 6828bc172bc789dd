use interval_spoiler::logging::init_tracing;
use interval_spoiler::strategy::graph::StrategyGraph;
use interval_spoiler::strategy::read_strategy;
use interval_spoiler::strategy::tikz::render_document;

fn main() {
    init_tracing();
    let mut inputs: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg.starts_with("--") {
            eprintln!("Unknown option: {arg}\n\nUsage: draw_strategy [<file>|-]...");
            std::process::exit(2);
        }
        inputs.push(arg);
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
    let report = match graph.verify() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Verification failed: {e}");
            std::process::exit(1);
        }
    };
    // Only proven strategies are drawn.
    eprint!("{report}");
    if !report.correct {
        std::process::exit(1);
    }

    match render_document(&graph) {
        Ok(doc) => print!("{doc}"),
        Err(e) => {
            eprintln!("Failed to render strategy: {e}");
            std::process::exit(1);
        }
    }
}
