//! Computer opponent heuristic.
//!
//! Both decisions read the same score context: how far the computer trails
//! (`human - computer`) and how far it is from the target
//! (`target - computer`). The computer plays aggressively when the deficit
//! exceeds half the remaining distance and conservatively once it is within
//! 20 points of the target. Everything here is stateless; randomness for the
//! keep decisions comes from the caller.

use std::collections::BTreeSet;
use rand::Rng;
use crate::game_engine::models::{Roll, MAX_ROLLS};

/// Distance from the target at which the computer starts playing safe.
const CLOSE_TO_TARGET: i64 = 20;

/// Score situation the computer decides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stance {
    /// Trailing by more than half the remaining distance.
    Behind,
    /// Within `CLOSE_TO_TARGET` of the target.
    Closing,
    Neutral,
}

fn stance(computer_score: u32, human_score: u32, target_score: u32) -> Stance {
    let diff = human_score as i64 - computer_score as i64;
    let remaining = target_score as i64 - computer_score as i64;
    // i64 division truncates toward zero.
    if diff > remaining / 2 {
        Stance::Behind
    } else if remaining <= CLOSE_TO_TARGET {
        Stance::Closing
    } else {
        Stance::Neutral
    }
}

/// Should the computer spend another roll on `roll`?
pub fn should_reroll(
    roll: &Roll,
    rolls_used: u8,
    computer_score: u32,
    human_score: u32,
    target_score: u32,
) -> bool {
    if rolls_used >= MAX_ROLLS {
        return false;
    }

    let sum = roll.sum();
    match stance(computer_score, human_score, target_score) {
        Stance::Behind  => sum < 15,
        Stance::Closing => sum < 16,
        Stance::Neutral => match rolls_used {
            1 => sum < 12,
            2 => sum < 15,
            _ => false,
        },
    }
}

/// Chance of holding a 5.
fn keep_five_probability(stance: Stance) -> f64 {
    match stance {
        Stance::Behind  => 0.8,
        Stance::Closing => 0.6,
        Stance::Neutral => 0.7,
    }
}

/// Chance of holding a 4.
fn keep_four_probability(stance: Stance) -> f64 {
    match stance {
        Stance::Behind => 0.4,
        _              => 0.2,
    }
}

/// Pick which dice the computer holds before rerolling.
///
/// Sixes are always kept and faces of 3 or less never are. Fives and fours
/// each get an independent draw from `rng`, so any number of dice (zero to
/// five) may come back. `rolls_used` is accepted for symmetry with
/// [`should_reroll`] and does not affect the choice.
pub fn dice_to_keep<R: Rng>(
    rng: &mut R,
    roll: &Roll,
    _rolls_used: u8,
    computer_score: u32,
    human_score: u32,
    target_score: u32,
) -> BTreeSet<usize> {
    let stance = stance(computer_score, human_score, target_score);
    let mut keep = BTreeSet::new();

    for (index, &value) in roll.values().iter().enumerate() {
        let kept = match value {
            6 => true,
            5 => rng.gen::<f64>() < keep_five_probability(stance),
            4 => rng.gen::<f64>() < keep_four_probability(stance),
            _ => false,
        };
        if kept {
            keep.insert(index);
        }
    }
    keep
}
