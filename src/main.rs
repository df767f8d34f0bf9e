//! Brickfall headless driver
//!
//! Runs the game at a fixed 60 Hz with the autopilot standing in for the
//! player, logging what happens and printing a summary at the end.
//!
//! Usage:
//!   cargo run --release -- --frames 7200 --seed 42
//!   RUST_LOG=debug cargo run -- --classic --restarts 2

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brickfall::autopilot::Autopilot;
use brickfall::consts::FRAME_DT;
use brickfall::input::InputEvent;
use brickfall::{Game, GameConfig, PlayEvent, WavePolicy};

#[derive(Parser)]
#[command(name = "brickfall")]
#[command(about = "Play Breakout headlessly with the autopilot")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to run
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// JSON config file
    #[arg(long, conflicts_with = "classic")]
    config: Option<PathBuf>,

    /// Use the classic ruleset (auto grid, bricks revive on clear)
    #[arg(long)]
    classic: bool,

    /// Start a new session this many times after game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,

    /// Override the wave-clear policy ("advanceLevel" or "reviveAll")
    #[arg(long, value_parser = parse_wave_policy)]
    wave_policy: Option<WavePolicy>,

    /// Autopilot pointer speed in px/s
    #[arg(long, default_value_t = 450.0)]
    autopilot_speed: f32,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn parse_wave_policy(s: &str) -> Result<WavePolicy, String> {
    WavePolicy::from_str(s).ok_or_else(|| format!("unknown wave policy '{s}'"))
}

fn time_seed() -> Result<u64> {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("system clock is before the epoch")?;
    Ok(since_epoch.as_millis() as u64)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None if args.classic => GameConfig::classic(),
        None => GameConfig::default(),
    };
    if let Some(policy) = args.wave_policy {
        config.wave_policy = policy;
    }
    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }
    let seed = match args.seed {
        Some(seed) => seed,
        None => time_seed()?,
    };
    log::info!("Brickfall starting, seed {seed}");

    let mut game = Game::new(config, seed);
    let mut pilot = Autopilot::new(args.autopilot_speed);
    let mut restarts_left = args.restarts;
    let mut final_scores = Vec::new();
    let mut best_level = 1;

    while game.frames() < args.frames {
        if let Some(play) = game.play() {
            let action = pilot.plan(play, FRAME_DT);
            let y = game.pointer().y;
            game.pointer_move(action.pointer_x, y);
            if action.launch {
                game.input(InputEvent::PointerDown);
            }
        } else if restarts_left > 0 {
            restarts_left -= 1;
            pilot.reset();
            game.input(InputEvent::PointerDown);
            continue;
        } else {
            break;
        }

        game.frame();

        for event in game.drain_events() {
            match event {
                PlayEvent::WaveCleared { level, score } => {
                    best_level = best_level.max(level);
                    log::info!("Wave cleared at frame {}: level {level}, score {score}", game.frames());
                }
                PlayEvent::GameOver { score } => final_scores.push(score),
                other => log::trace!("{other:?}"),
            }
        }
    }

    println!("=== BRICKFALL ===");
    println!("  Seed:       {seed}");
    println!("  Frames:     {}", game.frames());
    println!("  Sessions:   {}", game.sessions());
    println!("  Best level: {best_level}");
    for (i, score) in final_scores.iter().enumerate() {
        println!("  Game {}:     {score}", i + 1);
    }
    match (game.play(), game.game_over()) {
        (Some(play), _) => println!(
            "  Running:    score {}, lives {}, level {}",
            play.score(),
            play.lives(),
            play.level()
        ),
        (None, Some(over)) => println!("  Ended:      score {}", over.score()),
        (None, None) => {}
    }

    Ok(())
}
