//! Mini-Go: play a small Go-like game against a heuristic opponent.
//!
//! ## Usage
//!
//! - `mini-go` / `mini-go play` - Play Black against the computer on stdin
//! - `mini-go selfplay` - Let the computer play both sides and print the result

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mini_go::ai::Difficulty;
use mini_go::board::{Board, Color, column_label, parse_coord, str_coord};
use mini_go::constants::{DEFAULT_SIZE, MAX_GAME_LEN_FACTOR, MAX_LETTER_COLUMNS};
use mini_go::game::{Game, MoveOutcome};

/// Mini-Go: a small Go-like game with a heuristic opponent
#[derive(Parser)]
#[command(name = "mini-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE,
          value_parser = clap::value_parser!(u8).range(1..=MAX_LETTER_COLUMNS as i64).map(usize::from))]
    size: usize,

    /// Opponent strength
    #[arg(long, global = true, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Seed for the opponent's random source
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Black against the computer, reading moves from stdin
    Play,
    /// Let the computer play both sides
    Selfplay,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let game = match cli.seed {
        Some(seed) => Game::seeded(cli.size, cli.difficulty, seed),
        None => Game::new(cli.size, cli.difficulty),
    };

    match cli.command {
        Some(Commands::Selfplay) => run_selfplay(game),
        Some(Commands::Play) | None => run_play(game),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Interactive loop: the human plays Black, the computer answers as White.
fn run_play(mut game: Game) -> Result<()> {
    let size = game.board().size();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Mini-Go {size}x{size}. Enter moves as D4 or row,col; 'new' restarts, 'quit' exits.\n");
    print_state(&game);

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" | "reset" => {
                game.reset();
                print_state(&game);
                continue;
            }
            _ => {}
        }

        let outcome = parse_coord(input, size).and_then(|pt| game.play(pt));
        match outcome {
            Ok(outcome) => report(&outcome, size)?,
            Err(err) => {
                println!("? {err}");
                stdout.flush()?;
                continue;
            }
        }

        if game.is_computer_turn() {
            match game.computer_move()? {
                Some(outcome) => report(&outcome, size)?,
                None => println!("{} has no move", game.computer()),
            }
        }
        print_state(&game);
        stdout.flush()?;
    }
    Ok(())
}

/// Computer vs computer until the board fills or the move cap is reached.
fn run_selfplay(mut game: Game) -> Result<()> {
    let size = game.board().size();
    let max_moves = size * size * MAX_GAME_LEN_FACTOR;

    let mut moves = 0;
    while !game.is_over() && moves < max_moves {
        if let Some(outcome) = game.auto_move()? {
            report(&outcome, size)?;
        }
        moves += 1;
    }

    print_state(&game);
    if !game.is_over() {
        println!("Stopped after {moves} moves without a result");
    }
    Ok(())
}

fn report(outcome: &MoveOutcome, size: usize) -> Result<()> {
    print!("{} plays {}", outcome.color, str_coord(outcome.point, size)?);
    if outcome.captured > 0 {
        print!(" capturing {}", outcome.captured);
    }
    println!();
    Ok(())
}

fn print_state(game: &Game) {
    print_board(game.board());
    for color in [Color::Black, Color::White] {
        let score = game.score(color);
        println!(
            "{color}: captured {} territory {}",
            score.captured, score.territory
        );
    }
    println!("{}\n", game.status());
}

/// Print the board with Go-style coordinate labels.
fn print_board(board: &Board) {
    let size = board.size();
    for (i, line) in board.to_string().lines().enumerate() {
        println!("{:>2} {line}", size - i);
    }
    let letters: Vec<String> = (0..size)
        .map(|col| column_label(col).map_or_else(|| col.to_string(), String::from))
        .collect();
    println!("   {}", letters.join(" "));
}
