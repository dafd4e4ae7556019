//! Core game engine: dice, computer strategy, and the round state machine.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: rolls, player/game state, results, controls |
//! | `dice`     | `DieSource` seam, seeded/scripted dice, roll and reroll helpers |
//! | `strategy` | Computer reroll and keep heuristics |
//! | `config`   | Target-score configuration and validation |
//! | `engine`   | `GameEngine`: every state transition of a game |

pub mod config;
pub mod dice;
pub mod engine;
pub mod models;
pub mod strategy;

// Re-export the public API surface so callers can use
// `game_engine::GameEngine` without reaching into sub-modules.
pub use config::{ConfigError, GameConfig};
pub use dice::{DieSource, RngDice, ScriptedDice};
pub use engine::GameEngine;
pub use models::{
    Controls, GameResult, GameState, Phase, Player, PlayerState, Roll,
    DEFAULT_TARGET_SCORE, DICE_PER_ROLL, MAX_ROLLS,
};
