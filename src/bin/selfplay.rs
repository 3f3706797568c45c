//! Headless self-play: the player kingdom is driven by the same random
//! policy as the computer kingdoms. Useful for eyeballing balance and for
//! feeding a renderer recorded snapshots.

use std::error::Error;

use clap::Parser;
use four_winds::sim::{GameConfig, PaceConfig, SeededRandom, choose_action};
use four_winds::{Game, LogCategory};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play Four Winds with every kingdom on autopilot")]
struct Args {
    /// Seed for the engine's random source.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of turns to play.
    #[arg(long, default_value_t = 20)]
    turns: u32,

    /// Pause between steps the way the animated client does.
    #[arg(long)]
    pace: bool,

    /// Print the final snapshot as JSON instead of the scoreboard.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("four_winds=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = GameConfig::new(args.seed);
    if args.pace {
        config = config.paced(PaceConfig::default());
    }

    let mut game = Game::new(config);
    // Separate stream so the player's picks don't shift the engine's draws.
    let mut player_rng = SeededRandom::new(args.seed.wrapping_add(1));

    for _ in 0..args.turns {
        let Some(action) = choose_action(game.world().player(), &mut player_rng) else {
            tracing::warn!(turn = game.turn(), "player has no affordable action");
            break;
        };
        let report = game.submit_player_action(action.id)?;
        game.drain_signals();
        if !args.json {
            for entry in &report.entries {
                let marker = match entry.category {
                    LogCategory::Success => "+",
                    LogCategory::Error => "!",
                    _ => " ",
                };
                println!("[turn {:>3}] {marker} {}", entry.turn, entry.text);
            }
        }
    }

    let snapshot = game.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!();
    println!("Standings after {} turns:", snapshot.turn.saturating_sub(1));
    for standing in snapshot.standings() {
        let kingdom = &snapshot.kingdoms[standing.kingdom];
        println!(
            "  {}. {:<11} total {:>4}  (M {} / I {} / G {})  buff +{}/+{}/+{}  alliances {}",
            standing.rank,
            standing.name,
            standing.total,
            kingdom.resources.money,
            kingdom.resources.influence,
            kingdom.resources.goods,
            kingdom.income_buff.money,
            kingdom.income_buff.influence,
            kingdom.income_buff.goods,
            kingdom.alliances.len(),
        );
    }
    Ok(())
}
