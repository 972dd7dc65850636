//! CLI entry point for the puzzle searcher.
//!
//! Usage:
//!   puzzle-searcher solve <BOARD> [options]
//!   puzzle-searcher batch <FILE> [options]
//!
//! Options:
//!   --algorithm <name>     random | breadth-first | depth-first | greedy | a-star
//!   --depth-limit <n>      Depth limit for the uninformed algorithms
//!   --heuristic <name>     zero | misplaced | weighted (greedy and a-star)
//!   --timeout-secs <n>     Give up after this many seconds
//!   --show-moves           Replay the solution move by move (solve only)
//!   --json                 Emit machine-readable JSON

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use puzzle_searcher::{
    by_name, create_searcher, Board, Direction, SearchError, SearchOutcome, SearchResult,
    Searcher, SearcherParam, State,
};

#[derive(Parser)]
#[command(name = "puzzle-searcher")]
#[command(about = "State-space search strategies for the sliding eight puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single board
    Solve {
        /// Serialized board: nine digits, row-major, 0 for the blank
        #[arg(value_name = "BOARD")]
        board: String,

        /// Search algorithm
        #[arg(long, default_value = "breadth-first")]
        algorithm: String,

        /// Depth limit for the uninformed algorithms (unbounded if omitted)
        #[arg(long)]
        depth_limit: Option<u32>,

        /// Heuristic name for greedy and a-star
        #[arg(long)]
        heuristic: Option<String>,

        /// Give up after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Replay the solution move by move
        #[arg(long)]
        show_moves: bool,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Solve every board listed in a file, one per line
    Batch {
        /// Path to the board list
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Search algorithm
        #[arg(long, default_value = "breadth-first")]
        algorithm: String,

        /// Depth limit for the uninformed algorithms (unbounded if omitted)
        #[arg(long)]
        depth_limit: Option<u32>,

        /// Heuristic name for greedy and a-star
        #[arg(long)]
        heuristic: Option<String>,

        /// Give up after this many seconds, per board
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Output format for a single solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Direction>>,
    cancelled: bool,
    states_tested: usize,
    time_elapsed_ms: u64,
}

/// Output format for one batch line
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchLine {
    board: String,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<u32>,
    cancelled: bool,
    states_tested: usize,
}

/// Output format for a whole batch run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchOutput {
    results: Vec<BatchLine>,
    puzzles_solved: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_moves: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_states_tested: Option<f64>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            board,
            algorithm,
            depth_limit,
            heuristic,
            timeout_secs,
            show_moves,
            json,
        } => run_solve(
            &board,
            &algorithm,
            depth_limit,
            heuristic.as_deref(),
            timeout_secs,
            show_moves,
            json,
        ),
        Commands::Batch {
            file,
            algorithm,
            depth_limit,
            heuristic,
            timeout_secs,
            json,
        } => run_batch(
            &file,
            &algorithm,
            depth_limit,
            heuristic.as_deref(),
            timeout_secs,
            json,
        ),
    }
}

/// Build a configured searcher from CLI options: a heuristic name selects
/// the informed parameter, otherwise the depth limit is passed through.
fn build_searcher(
    algorithm: &str,
    depth_limit: Option<u32>,
    heuristic: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<Searcher, SearchError> {
    let param = match heuristic {
        Some(name) => SearcherParam::Heuristic(by_name(name)?),
        None => SearcherParam::DepthLimit(depth_limit),
    };
    let mut searcher = create_searcher(algorithm, param)?;
    if let Some(secs) = timeout_secs {
        searcher = searcher.with_timeout(Duration::from_secs(secs));
    }
    Ok(searcher)
}

fn run_solve(
    board: &str,
    algorithm: &str,
    depth_limit: Option<u32>,
    heuristic: Option<&str>,
    timeout_secs: Option<u64>,
    show_moves: bool,
    json: bool,
) {
    let initial = match Board::from_digits(board) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut searcher = match build_searcher(algorithm, depth_limit, heuristic, timeout_secs) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = searcher.find_solution(State::root(initial.clone()));

    if json {
        let output = format_solve(&result);
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        match &result.outcome {
            SearchOutcome::Solved(state) => {
                println!("Found a solution requiring {} moves.", state.num_moves);
            }
            SearchOutcome::Exhausted => println!("Failed to find a solution."),
            SearchOutcome::Cancelled => println!("Search terminated."),
        }
        println!(
            "{} states tested in {} ms.",
            result.states_tested, result.time_elapsed_ms
        );
        if show_moves {
            if let Some(state) = result.solution() {
                replay(&initial, state);
            }
        }
    }

    if result.solution().is_some() {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}

fn run_batch(
    file: &PathBuf,
    algorithm: &str,
    depth_limit: Option<u32>,
    heuristic: Option<&str>,
    timeout_secs: Option<u64>,
    json: bool,
) {
    let content = match fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", file.display(), e);
            std::process::exit(1);
        }
    };

    let mut results: Vec<BatchLine> = Vec::new();
    let mut attempted = 0usize;
    let mut puzzles_solved = 0usize;
    let mut total_moves = 0u64;
    let mut total_tested = 0u64;

    for line in content.lines() {
        let digits = line.trim();
        if digits.is_empty() {
            continue;
        }

        let board = match Board::from_digits(digits) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{digits}: {e}");
                continue;
            }
        };

        // A fresh searcher per board: every run owns its own statistics.
        let mut searcher = match build_searcher(algorithm, depth_limit, heuristic, timeout_secs) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };

        attempted += 1;
        let result = searcher.find_solution(State::root(board));
        let cancelled = matches!(result.outcome, SearchOutcome::Cancelled);

        match result.solution() {
            Some(state) => {
                if !json {
                    println!(
                        "{digits}: {} moves, {} states tested",
                        state.num_moves, result.states_tested
                    );
                }
                puzzles_solved += 1;
                total_moves += u64::from(state.num_moves);
                total_tested += result.states_tested as u64;
                results.push(BatchLine {
                    board: digits.to_string(),
                    solved: true,
                    moves: Some(state.num_moves),
                    cancelled: false,
                    states_tested: result.states_tested,
                });
            }
            None => {
                if !json {
                    if cancelled {
                        println!("{digits}: search terminated, no solution");
                    } else {
                        println!("{digits}: no solution");
                    }
                }
                results.push(BatchLine {
                    board: digits.to_string(),
                    solved: false,
                    moves: None,
                    cancelled,
                    states_tested: result.states_tested,
                });
            }
        }
    }

    if json {
        let output = BatchOutput {
            results,
            puzzles_solved,
            average_moves: (puzzles_solved > 0)
                .then(|| total_moves as f64 / puzzles_solved as f64),
            average_states_tested: (puzzles_solved > 0)
                .then(|| total_tested as f64 / puzzles_solved as f64),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!();
        if puzzles_solved > 0 {
            println!("solved {puzzles_solved} puzzles");
            println!(
                "averages: {:.1} moves, {:.1} states tested",
                total_moves as f64 / puzzles_solved as f64,
                total_tested as f64 / puzzles_solved as f64
            );
        } else {
            println!("solved 0 puzzles");
        }
    }

    if attempted > 0 && puzzles_solved == attempted {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}

fn format_solve(result: &SearchResult) -> SolveOutput {
    SolveOutput {
        solved: result.solution().is_some(),
        moves: result.solution().map(|s| s.num_moves),
        path: result.solution().map(|s| s.moves_from_root()),
        cancelled: matches!(result.outcome, SearchOutcome::Cancelled),
        states_tested: result.states_tested,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}

/// Print the solution path move by move, starting from the initial board.
fn replay(initial: &Board, goal: &State) {
    let mut board = initial.clone();
    println!("{board}");
    for direction in goal.moves_from_root() {
        board.move_blank(direction);
        println!("{direction}");
        println!("{board}");
    }
}
