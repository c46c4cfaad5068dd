//! CLI entry point for the 8-puzzle solver.
//!
//! Usage:
//!   eight-puzzle-solver solve <instance.json> [options]
//!   eight-puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --strategy <list>     Comma-separated strategies to run (default: all)
//!   --heuristic <name>    Heuristic for A*: manhattan or euclidean
//!   --max-depth <n>       Depth ceiling for DFS expansion (default: 1000000)
//!
//! The instance JSON holds an initial and a goal board as nested rows:
//!   {"initial": [[1,2,3],[4,5,6],[7,8,0]], "goal": [[0,1,2],[3,4,5],[6,7,8]]}

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use eight_puzzle_solver::{
    astar, bfs, dfs, euclidean, is_solvable, manhattan, Heuristic, Move, PuzzleInstance,
    SearchConfig, SearchResult,
};

#[derive(Parser)]
#[command(name = "eight-puzzle-solver")]
#[command(about = "Exhaustive and heuristic-guided solver for the 8-puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance with one or more search strategies
    Solve {
        /// Path to instance JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the instance from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Strategies to run, in order (default: bfs,dfs,astar)
        #[arg(long, value_enum, value_delimiter = ',')]
        strategy: Vec<Strategy>,

        /// Heuristic used by A*
        #[arg(long, value_enum, default_value = "manhattan")]
        heuristic: HeuristicChoice,

        /// Depth ceiling for DFS expansion
        #[arg(long, default_value = "1000000")]
        max_depth: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Bfs,
    Dfs,
    #[value(name = "astar")]
    AStar,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::AStar => "astar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeuristicChoice {
    Manhattan,
    Euclidean,
}

impl HeuristicChoice {
    fn function(self) -> Heuristic {
        match self {
            HeuristicChoice::Manhattan => manhattan,
            HeuristicChoice::Euclidean => euclidean,
        }
    }
}

/// Output format for a solve invocation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solvable: bool,
    runs: Vec<RunOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunOutput {
    strategy: &'static str,
    found: bool,
    expanded: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<Move>>,
}

fn format_run(strategy: &'static str, result: SearchResult) -> RunOutput {
    RunOutput {
        strategy,
        found: result.found,
        expanded: result.expanded,
        time_elapsed_ms: result.elapsed.as_millis() as u64,
        depth: result.depth,
        moves: result
            .solution
            .map(|steps| steps.into_iter().map(|(mv, _)| mv).collect()),
    }
}

fn main() {
    // Events go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            heuristic,
            max_depth,
        } => {
            // Read instance JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse instance
            let instance: PuzzleInstance = match serde_json::from_str(&json_content) {
                Ok(i) => i,
                Err(e) => {
                    eprintln!("Error parsing instance JSON: {}", e);
                    std::process::exit(1);
                }
            };

            // Parity gate: refuse to search an unsolvable instance.
            let solvable = is_solvable(&instance.initial, &instance.goal);
            tracing::debug!(event = "solvability_check", solvable);
            if !solvable {
                let output = SolveOutput {
                    solvable: false,
                    runs: Vec::new(),
                };
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
                std::process::exit(1);
            }

            let strategies = if strategy.is_empty() {
                vec![Strategy::Bfs, Strategy::Dfs, Strategy::AStar]
            } else {
                strategy
            };
            let config = SearchConfig { max_depth };

            let runs: Vec<RunOutput> = strategies
                .into_iter()
                .map(|s| {
                    let result = match s {
                        Strategy::Bfs => bfs(&instance),
                        Strategy::Dfs => dfs(&instance, &config),
                        Strategy::AStar => astar(&instance, heuristic.function()),
                    };
                    format_run(s.name(), result)
                })
                .collect();

            let all_found = runs.iter().all(|r| r.found);
            let output = SolveOutput {
                solvable: true,
                runs,
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if all_found {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}
