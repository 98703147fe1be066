//! Deterministic replay of a seeded slide game.
//!
//! Usage:
//!   # Final board after a move list
//!   slide-replay --seed 7 --moves "RRDLU"
//!
//!   # Every intermediate board on a 5x5 grid
//!   slide-replay --seed 7 --tiles 25 --moves "right down left" --every
//!
//!   # JSON frames, one per line, settings from a TOML file
//!   slide-replay --config game.toml --moves "UUDD" --json

mod notation;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use serde::Serialize;
use slide_core::{Coord, Direction, GameConfig, GameState};

use crate::notation::{format_moves, parse_moves};

#[derive(Debug, Parser)]
#[command(author, version, about = "Replay a seeded slide game and print the boards")]
struct Cli {
    /// Seed for tile spawning (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of cells, a perfect square (overrides the config file)
    #[arg(long, value_name = "N")]
    tiles: Option<usize>,

    /// TOML file with tile_count / seed / board
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Moves as letters (L R U D) or words, separated by spaces or commas
    #[arg(long, default_value = "")]
    moves: String,

    /// Print the board after every move, not just the last one
    #[arg(long)]
    every: bool,

    /// Emit JSON frames instead of text grids
    #[arg(long)]
    json: bool,
}

/// One replay step as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct Frame {
    step: usize,
    direction: Option<Direction>,
    board: Vec<Option<u32>>,
    spawned: Option<Coord>,
    slides: usize,
    merges: usize,
}

impl Frame {
    fn capture(step: usize, direction: Option<Direction>, game: &GameState) -> Frame {
        let report = game.last_report().unwrap_or_default();
        Frame {
            step,
            direction,
            board: game.values(),
            spawned: game.last_spawn(),
            slides: report.slides,
            merges: report.merges,
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GameConfig::from_toml_str(&source)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(tiles) = cli.tiles {
        config.tile_count = tiles;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate().context("invalid game settings")?;
    Ok(config)
}

fn emit(frame: &Frame, game: &GameState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
    } else {
        match frame.direction {
            Some(direction) => println!("move {} ({direction}):", frame.step),
            None => println!("start:"),
        }
        println!("{}\n", game.board());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config(&cli)?;
    let moves = parse_moves(&cli.moves)?;
    if config.seed.is_none() {
        warn!("no seed given; this run cannot be reproduced");
    }

    let mut game = GameState::new(config).context("failed to start game")?;
    info!(
        "replaying {} moves on a {}x{} board",
        moves.len(),
        game.side_length(),
        game.side_length()
    );

    if cli.every || moves.is_empty() {
        emit(&Frame::capture(0, None, &game), &game, cli.json)?;
    }

    let mut total_merges = 0;
    let mut idle_moves = 0;
    for (i, &direction) in moves.iter().enumerate() {
        game.apply(direction);
        let frame = Frame::capture(i + 1, Some(direction), &game);
        total_merges += frame.merges;
        if frame.slides == 0 && frame.merges == 0 {
            idle_moves += 1;
        }
        if frame.spawned.is_none() {
            warn!("move {} ({direction}): board full, nothing spawned", i + 1);
        }
        if cli.every || i + 1 == moves.len() {
            emit(&frame, &game, cli.json)?;
        }
    }

    info!(
        "moves {}: {} merges, {} idle, max tile {}, tile sum {}",
        format_moves(&moves),
        total_merges,
        idle_moves,
        game.board().max_value().unwrap_or(0),
        game.board().tile_sum()
    );
    Ok(())
}
