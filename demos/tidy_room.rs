//! Tidy Room
//!
//! This example drives one cleaning episode with a scripted oracle standing
//! in for a language model.
//!
//! Key concepts:
//! - Tool catalog handed to the decision-maker
//! - Text observations threaded between tool calls
//! - Step budget and goal check
//!
//! Run with: RUST_LOG=debug cargo run --example tidy_room

use tidyroom::actions::catalog;
use tidyroom::episode::ScriptedOracle;
use tidyroom::{EpisodeBuilder, EpisodeOutcome};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Tidy Room ===\n");

    println!("Available tools:");
    for tool in catalog() {
        println!("  {:<24} {}", tool.name, tool.description);
    }

    let mut episode = match EpisodeBuilder::new().max_steps(10).build() {
        Ok(episode) => episode,
        Err(err) => {
            eprintln!("could not start episode: {err}");
            return;
        }
    };
    println!("\nInitial state: {}\n", episode.observe());

    let mut oracle = ScriptedOracle::chained(&[
        "pick_up_clothes",
        "put_clothes_in_hamper",
        "pick_up_books",
        "place_books_on_shelf",
        "empty_wastebin",
        "check_final_step",
    ]);

    match episode.run(&mut oracle) {
        EpisodeOutcome::Finished { answer, steps, .. } => {
            println!("Finished after {steps} steps: {answer}");
        }
        EpisodeOutcome::BudgetExhausted { steps, violations, .. } => {
            println!("Stopped after {steps} steps: {violations:?}");
        }
    }

    println!("\nPath:");
    for transition in episode.history().transitions() {
        println!("  {:>2}. {:<24} -> {}", transition.step, transition.action, transition.to);
    }

    println!("\n=== Example Complete ===");
}
