//! Snakes and Ladders — Observer Demonstration
//!
//! Run with: cargo run -p playground-games --example snakes_and_ladders
//!
//! Set `RUST_LOG=playground_games=debug` to see every turn.
//!
//! This example demonstrates:
//! - A seeded game that replays identically every run
//! - Observers registered through weak handles
//! - Loading a custom board from JSON

use std::sync::Arc;

use playground_core::{describe_all, TextRepresentable};
use playground_games::{
    Dice, DiceGameTracker, GameConfig, LoggingObserver, SnakesAndLadders, TurnOutcome,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playground_games=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Snakes and Ladders ===\n");

    // -------------------------------------------------------------------------
    // 1. The classic board
    // -------------------------------------------------------------------------
    println!("1. The Classic Board");
    println!("--------------------\n");

    let mut game = SnakesAndLadders::classic();
    println!("{}\n", game.pretty_textual_description());

    // -------------------------------------------------------------------------
    // 2. Observers
    // -------------------------------------------------------------------------
    println!("2. Playing With Observers");
    println!("-------------------------\n");

    let tracker = Arc::new(DiceGameTracker::new());
    let logger = Arc::new(LoggingObserver::new());
    game.register_observer(&tracker);
    game.register_observer(&logger);

    let summary = game.play()?;
    println!("  Turns:    {}", summary.turns);
    println!("  Forfeits: {}", summary.forfeits);
    println!("  Tracker counted {} turns\n", tracker.turns());

    for record in game.history() {
        let what = match record.outcome {
            TurnOutcome::Moved { .. } if record.to > record.from + record.roll as usize => "ladder",
            TurnOutcome::Moved { .. } if record.to < record.from + record.roll as usize => "snake",
            TurnOutcome::Moved { .. } => "",
            TurnOutcome::Forfeited { .. } => "overshoot",
            TurnOutcome::Won { .. } => "win",
        };
        println!(
            "  #{:<2} rolled {} : {:>2} → {:>2} {}",
            record.turn, record.roll, record.from, record.to, what
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. Custom board from JSON
    // -------------------------------------------------------------------------
    println!("3. A Custom Board");
    println!("-----------------\n");

    let config = GameConfig::from_json(
        r#"{ "final_square": 12, "board": [0, 0, 6, 0, 0, 0, 0, 0, 0, -7, 0, 0, 0], "sides": 4 }"#,
    )?;
    let mut custom = SnakesAndLadders::from_config(&config)?;
    println!("{}", custom.pretty_textual_description());
    let summary = custom.play()?;
    println!("  Finished in {} turns\n", summary.turns);

    // -------------------------------------------------------------------------
    // 4. Dice as descriptions
    // -------------------------------------------------------------------------
    println!("4. Dice");
    println!("-------\n");

    let dice = vec![Dice::seeded(6, 42.0)?, Dice::seeded(12, 42.0)?];
    println!("  {}", describe_all(&dice));

    Ok(())
}
