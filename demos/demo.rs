//! Console play-through of a full game.
//!
//! Run with: `cargo run --example demo`
//!
//! The "human" here is a simple scripted player: it holds fives and sixes,
//! banks any roll worth 20 or more, and otherwise rerolls. Every step prints
//! the same scoreboard a UI would render from `to_view_state`.
//!
//! Pass a seed as the first argument to replay a specific game:
//! `cargo run --example demo -- 7`
//!
//! An optional second argument is a JSON game config:
//! `cargo run --example demo -- 7 '{"target_score": 60}'`

use dice_duel::{to_view_state, GameConfig, GameEngine, GameState, Phase};

fn print_board(state: &GameState) {
    let view = to_view_state(state);
    println!(
        "  {}   {}   [{}]",
        view["tally"].as_str().unwrap_or(""),
        view["score_line"].as_str().unwrap_or(""),
        state.phase()
    );
    if let Some(roll) = state.human.roll {
        let marks: String = (0..5)
            .map(|i| if state.kept.contains(&i) { '^' } else { ' ' })
            .map(|c| format!("{c} "))
            .collect();
        println!("  You:      {roll}   (rolls used {}/3)", state.human.rolls_used);
        println!("            {marks}");
    }
    if let Some(roll) = state.computer.roll {
        println!("  Computer: {roll}   (rolls used {}/3)", state.computer.rolls_used);
    }
}

/// Hold fives and sixes; bank at 20+.
fn play_turn(engine: &mut GameEngine) {
    let Some(roll) = engine.state().human.roll else { return };
    if roll.sum() >= 20 {
        println!("  -> scoring {}", roll.sum());
        engine.score_roll();
        return;
    }
    for (i, &v) in roll.values().iter().enumerate() {
        if v >= 5 && !engine.state().kept.contains(&i) {
            engine.toggle_dice_selection(i);
        }
    }
    println!("  -> rerolling");
    engine.throw_dice();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .get(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2024);
    let config = match args.get(2).map(|raw| GameConfig::from_json(raw)) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            println!("Ignoring config ({e}), playing to the default target");
            GameConfig::default()
        }
        None => GameConfig::default(),
    };
    let mut engine = GameEngine::seeded(seed);
    engine.start_configured(&config);
    println!("══ New game to {} (seed {seed}) ══", engine.state().target_score);

    let mut round = 0;
    while !engine.state().game_over() {
        match engine.state().phase() {
            Phase::AwaitingFirstRoll => {
                round += 1;
                println!();
                println!("── Round {round} ──");
                engine.throw_dice();
            }
            Phase::RerollWindow => play_turn(&mut engine),
            Phase::TieBreaker => {
                println!();
                println!("── Tie-breaker ──");
                engine.throw_dice();
            }
            Phase::GameOver => break,
        }
        print_board(engine.state());
    }

    let state = engine.state();
    println!();
    println!("══ {} ══", state.result_message());
    println!("{}", serde_json::to_string_pretty(&to_view_state(state)).unwrap_or_default());
}
