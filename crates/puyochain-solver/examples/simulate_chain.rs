//! Resolves a chain on a board read from a file or standard input.
//!
//! The board is row-major text, one character code per cell. The ruleset is
//! sized to whatever board is read.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example simulate_chain -- board.txt
//! ```
//!
//! Print every recorded state instead of the final one:
//!
//! ```sh
//! cargo run --example simulate_chain -- board.txt --states
//! ```
//!
//! Read from standard input and use a smaller pop size:
//!
//! ```sh
//! cat board.txt | cargo run --example simulate_chain -- --puyo-to-pop 3
//! ```
//!
//! Set `RUST_LOG=debug` to log every link, or `RUST_LOG=trace` for every step.

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use puyochain_core::{Board, Ruleset};
use puyochain_solver::{ChainSolver, ChainSummary, ResolutionState, SolverMode};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board file. Reads standard input when omitted.
    #[arg(value_name = "FILE")]
    board: Option<PathBuf>,

    /// Keep only the latest state while resolving.
    #[arg(long)]
    in_place: bool,

    /// Print every recorded state.
    #[arg(long, conflicts_with = "in_place")]
    states: bool,

    /// Number of hidden rows at the top of the board.
    #[arg(long, value_name = "ROWS")]
    hrows: Option<usize>,

    /// Minimum group size that pops.
    #[arg(long, value_name = "COUNT")]
    puyo_to_pop: Option<usize>,

    /// Score points per garbage unit.
    #[arg(long, value_name = "POINTS")]
    target_point: Option<u32>,

    /// Let pops clear garbage in the hidden rows.
    #[arg(long)]
    clear_garbage_in_hrows: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let text = match read_board(args.board.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Failed to read board: {err}");
            process::exit(1);
        }
    };

    let board = match text.parse::<Board>() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Invalid board: {err}");
            process::exit(2);
        }
    };
    let ruleset = build_ruleset(&args, &board);
    let mode = if args.in_place {
        SolverMode::InPlace
    } else {
        SolverMode::History
    };

    let mut solver = ChainSolver::with_mode(board, ruleset, mode);
    solver.simulate_chain();

    if args.states {
        for (i, state) in solver.states().enumerate() {
            print_state(i, state);
        }
    } else {
        print_state(solver.len() - 1, solver.latest_state());
    }
    print_summary(&solver.summary());
}

fn read_board(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn build_ruleset(args: &Args, board: &Board) -> Ruleset {
    let mut ruleset = Ruleset {
        cols: board.cols(),
        rows: board.rows(),
        ..Ruleset::default()
    };
    if let Some(hrows) = args.hrows {
        ruleset.hrows = hrows;
    }
    if let Some(puyo_to_pop) = args.puyo_to_pop {
        ruleset.puyo_to_pop = puyo_to_pop;
    }
    if let Some(target_point) = args.target_point {
        ruleset.target_point = target_point;
    }
    ruleset.clear_garbage_in_hrows = args.clear_garbage_in_hrows;
    ruleset
}

fn print_state(index: usize, state: &ResolutionState) {
    println!("State {index} ({}):", state.action());
    for line in state.board().to_string().lines() {
        println!("  {line}");
    }
    if state.requires_pop() {
        let link = state.link();
        println!(
            "  link {}: {} puyo, {} colors, bonus {}, score {}, garbage {}",
            link.chain,
            link.puyo_count,
            link.colors,
            link.total_bonus,
            link.link_score,
            link.link_garbage + link.sun_bonus
        );
    }
    println!();
}

fn print_summary(summary: &ChainSummary) {
    println!("Summary:");
    println!("  chain: {}", summary.chain_length);
    println!("  score: {}", summary.total_score);
    println!("  garbage: {}", summary.total_garbage);
    for link in &summary.links {
        println!(
            "  {:>2}: score {:>6}, garbage {:>4}, leftover {:>3}",
            link.chain,
            link.link_score,
            link.link_garbage + link.sun_bonus,
            link.leftover_points
        );
    }
}
