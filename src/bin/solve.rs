use serde::Serialize;

use interval_spoiler::config::SolverConfig;
use interval_spoiler::game::report::{GameSummary, StateView};
use interval_spoiler::logging::init_tracing;

#[derive(Serialize)]
struct FullDump {
    summary: GameSummary,
    states: Vec<StateView>,
}

const USAGE: &str = "Usage: solve [--config <file.json>] [--clique <N>] [--colors <N>] \
[--intervals <N>] [--depth <N>] [--start <state>] [--no-prune] [--dump] [--json]";

fn parse_u8(flag: &str, value: Option<&String>) -> u8 {
    let Some(v) = value else {
        eprintln!("{flag} requires an integer argument");
        std::process::exit(2);
    };
    match v.parse() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("invalid {flag} {v}: {e}");
            std::process::exit(2);
        }
    }
}

fn required(flag: &str, value: Option<&String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            eprintln!("{flag} requires an argument");
            std::process::exit(2);
        }
    }
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<String> = None;
    let mut clique = None;
    let mut colors = None;
    let mut intervals = None;
    let mut depth = None;
    let mut start = None;
    let mut no_prune = false;
    let mut dump = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--clique" => clique = Some(parse_u8(flag, args.get(i + 1))),
            "--colors" => colors = Some(parse_u8(flag, args.get(i + 1))),
            "--intervals" => intervals = Some(parse_u8(flag, args.get(i + 1))),
            "--depth" => depth = Some(parse_u8(flag, args.get(i + 1))),
            "--start" => start = Some(required(flag, args.get(i + 1))),
            "--config" => config_path = Some(required(flag, args.get(i + 1))),
            "--no-prune" => {
                no_prune = true;
                i += 1;
                continue;
            }
            "--dump" => {
                dump = true;
                i += 1;
                continue;
            }
            "--json" => {
                json = true;
                i += 1;
                continue;
            }
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                return;
            }
            x => {
                eprintln!("Unknown option: {x}\n\n{USAGE}");
                std::process::exit(2);
            }
        }
        i += 2;
    }

    let mut cfg = match &config_path {
        Some(path) => match SolverConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(2);
            }
        },
        None => SolverConfig::default(),
    };
    if let Some(v) = clique {
        cfg.game.max_clique = v;
    }
    if let Some(v) = colors {
        cfg.game.colors = v;
    }
    if let Some(v) = intervals {
        cfg.game.max_intervals = v;
    }
    if let Some(v) = depth {
        cfg.game.max_depth = v;
    }
    if start.is_some() {
        cfg.start = start;
    }
    if no_prune {
        cfg.game.prune_on_barrier_win = false;
    }

    let mut game = match cfg.build_game() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid game: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = game.solve() {
        eprintln!("Solver failed: {e}");
        std::process::exit(1);
    }

    if json {
        let out = if dump {
            serde_json::to_string_pretty(&FullDump {
                summary: game.summary(),
                states: game.state_views(),
            })
        } else {
            serde_json::to_string_pretty(&game.summary())
        };
        match out {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize result: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if dump {
        print!("{game}");
    }
    let summary = game.summary();
    println!("Game: {}", game.config().summary());
    println!("  start: {}", summary.start);
    println!("  states: {}", summary.states);
    println!("  sweeps: {}", summary.sweeps);
    match summary.value {
        Some(moves) => println!("Spoiler wins in {moves} moves."),
        None => println!("Spoiler does not win the game."),
    }
}
