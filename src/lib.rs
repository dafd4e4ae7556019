//! # dice_duel
//!
//! Game core for a two-player dice race: a human against the computer,
//! first to a target score.
//!
//! ## How it works
//!
//! Each round both players roll five dice. The human may reroll up to twice,
//! holding any dice they choose; every human reroll also gives the computer a
//! chance to reroll under its own heuristic. When the human scores (or uses
//! the third roll) the computer finishes its turn and both roll sums are
//! added to the players' scores.
//!
//! The first player at or past the target wins. If both get there in the
//! same round the higher score wins, and an exact tie goes to sudden-death
//! tie-breaker rolls until one sum beats the other.
//!
//! ## Key features
//!
//! - **Inert on misuse**: every operation is a no-op (returning `false`) when
//!   its preconditions are not met, so a UI can forward clicks blindly.
//! - **Deterministic**: `GameEngine::seeded(u64)` replays the same game, and
//!   any [`DieSource`] (e.g. [`ScriptedDice`]) can drive the dice in tests.
//! - **Render-ready**: [`to_view_state`] turns a [`GameState`] into JSON with
//!   the enabled controls already worked out.
//!
//! ## Quick start
//!
//! ```rust
//! use dice_duel::GameEngine;
//!
//! let mut engine = GameEngine::seeded(42);
//! engine.start_new_game(101);
//!
//! engine.roll_dice(false);
//! engine.toggle_dice_selection(0);
//! engine.roll_dice(true);
//! engine.score_roll();
//!
//! let state = engine.state();
//! println!("Score: {} - {}", state.human.score, state.computer.score);
//! assert_eq!(state.human.rolls_used, 0);
//! ```

pub mod game_engine;
pub mod view;

// Convenience re-exports so callers can use `dice_duel::GameEngine`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    config::{parse_target_score, target_score_or_default},
    ConfigError, Controls, DieSource, GameConfig, GameEngine, GameResult, GameState,
    Phase, Player, PlayerState, RngDice, Roll, ScriptedDice, DEFAULT_TARGET_SCORE,
};
pub use view::to_view_state;
