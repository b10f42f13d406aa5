//! Headless Volley2D runner
//!
//! Plays a match at a fixed tick with a bot on the player's keys and the
//! trajectory predictor on the other side of the net.

mod bot;
mod input;
mod simulation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use volley_core::Config;

use bot::{Bot, BotKind};
use simulation::HeadlessMatch;

#[derive(Debug, Parser)]
#[command(name = "volley_headless", about = "Run a Volley2D match without a window")]
struct Args {
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 60_000)]
    ticks: u64,

    /// Seed for the random bot
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Who presses the player's keys
    #[arg(long, value_enum, default_value_t = BotKind::Chase)]
    bot: BotKind,

    /// JSON file overriding tuning values; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON instead of a one-line summary
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let mut headless = HeadlessMatch::new(config, Bot::new(args.bot, args.seed))
        .context("invalid match configuration")?;

    info!("running {} ticks with the {:?} bot", args.ticks, args.bot);
    let snapshot = headless.run(args.ticks);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&headless.summary_json())?);
    } else {
        println!(
            "after {} ticks: player {} - {} ai ({} rallies, longest {} ticks)",
            snapshot.tick,
            snapshot.score.player,
            snapshot.score.ai,
            headless.rallies(),
            headless.longest_rally()
        );
    }
    Ok(())
}
