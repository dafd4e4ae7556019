use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Dice in every roll.
pub const DICE_PER_ROLL: usize = 5;
/// Rolls (first roll plus rerolls) each player gets per round.
pub const MAX_ROLLS: u8 = 3;
/// Target used when no valid target score is supplied.
pub const DEFAULT_TARGET_SCORE: u32 = 101;

// ---------------------------------------------------------------------------
// Dice primitives
// ---------------------------------------------------------------------------

/// Five die values, each in 1..=6, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll(pub [u8; DICE_PER_ROLL]);

impl Roll {
    pub fn values(&self) -> &[u8; DICE_PER_ROLL] {
        &self.0
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&v| v as u32).sum()
    }

    /// Die value at `index`, or `None` past the fifth die.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", faces.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human    => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-player round and game progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cumulative score for the current game.
    pub score: u32,
    /// `None` until the player's first roll of the game.
    pub roll: Option<Roll>,
    /// Rolls consumed in the current round, 0..=3.
    pub rolls_used: u8,
}

impl PlayerState {
    /// Sum of the current roll, 0 before the first roll.
    pub fn roll_sum(&self) -> u32 {
        self.roll.map(|r| r.sum()).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Game outcome / phase
// ---------------------------------------------------------------------------

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    /// Decided by a dedicated tie-breaker roll; selects the "dice game" wording.
    pub by_tie_breaker: bool,
}

impl GameResult {
    pub fn human_won(&self) -> bool {
        self.winner == Player::Human
    }

    /// Message shown to the human player.
    pub fn message(&self) -> &'static str {
        match (self.winner, self.by_tie_breaker) {
            (Player::Human, false)    => "You win!",
            (Player::Computer, false) => "You lose",
            (Player::Human, true)     => "You win the dice game!",
            (Player::Computer, true)  => "You lose the dice game",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Where the game currently sits in the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingFirstRoll,
    RerollWindow,
    TieBreaker,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::AwaitingFirstRoll => "Awaiting first roll",
            Phase::RerollWindow      => "Reroll window",
            Phase::TieBreaker        => "Tie-breaker",
            Phase::GameOver          => "Game over",
        };
        write!(f, "{}", s)
    }
}

/// Which controls a presentation layer should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// First roll, reroll, or tie-breaker roll.
    pub can_throw: bool,
    pub can_score: bool,
    pub can_select_dice: bool,
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// Full observable state of one game plus the session's win counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub target_score: u32,
    pub human: PlayerState,
    pub computer: PlayerState,
    /// Human's kept-die indices, each < 5.
    pub kept: BTreeSet<usize>,
    pub human_wins: u32,
    pub computer_wins: u32,
    pub tie_breaker: bool,
    /// Set exactly when the game is over.
    pub result: Option<GameResult>,
}

impl GameState {
    /// Fresh game carrying over the session's win counters.
    pub fn new(target_score: u32, human_wins: u32, computer_wins: u32) -> Self {
        GameState {
            target_score,
            human: PlayerState::default(),
            computer: PlayerState::default(),
            kept: BTreeSet::new(),
            human_wins,
            computer_wins,
            tie_breaker: false,
            result: None,
        }
    }

    pub fn game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Terminal message, empty while the game is running.
    pub fn result_message(&self) -> &'static str {
        self.result.map(|r| r.message()).unwrap_or("")
    }

    pub fn player(&self, who: Player) -> &PlayerState {
        match who {
            Player::Human    => &self.human,
            Player::Computer => &self.computer,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over() {
            Phase::GameOver
        } else if self.tie_breaker {
            Phase::TieBreaker
        } else if self.human.rolls_used == 0 {
            Phase::AwaitingFirstRoll
        } else {
            Phase::RerollWindow
        }
    }

    /// Inside the reroll window: dice may be kept, rerolled, or scored.
    pub fn in_reroll_window(&self) -> bool {
        !self.game_over() && self.human.rolls_used > 0 && self.human.rolls_used < MAX_ROLLS
    }

    pub fn controls(&self) -> Controls {
        let over = self.game_over();
        let used = self.human.rolls_used;
        Controls {
            can_throw: !over && (used == 0 || (used < MAX_ROLLS && !self.tie_breaker)),
            can_score: self.in_reroll_window() && !self.tie_breaker,
            can_select_dice: self.in_reroll_window(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(DEFAULT_TARGET_SCORE, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_sum_and_display() {
        let roll = Roll([6, 5, 1, 2, 3]);
        assert_eq!(roll.sum(), 17);
        assert_eq!(roll.to_string(), "6 5 1 2 3");
        assert_eq!(roll.get(4), Some(3));
        assert_eq!(roll.get(5), None);
    }

    #[test]
    fn result_messages_follow_perspective() {
        let win = GameResult { winner: Player::Human, by_tie_breaker: false };
        let loss = GameResult { winner: Player::Computer, by_tie_breaker: true };
        assert_eq!(win.message(), "You win!");
        assert_eq!(loss.message(), "You lose the dice game");
        assert!(win.human_won());
        assert!(!loss.human_won());
    }

    #[test]
    fn fresh_state_awaits_first_roll() {
        let s = GameState::default();
        assert_eq!(s.phase(), Phase::AwaitingFirstRoll);
        assert_eq!(s.result_message(), "");
        assert_eq!(
            s.controls(),
            Controls { can_throw: true, can_score: false, can_select_dice: false }
        );
    }

    #[test]
    fn tie_breaker_only_allows_throwing() {
        let mut s = GameState::new(101, 2, 1);
        s.tie_breaker = true;
        assert_eq!(s.phase(), Phase::TieBreaker);
        let c = s.controls();
        assert!(c.can_throw);
        assert!(!c.can_score);
        assert!(!c.can_select_dice);
    }

    #[test]
    fn game_over_disables_everything() {
        let mut s = GameState::default();
        s.human.rolls_used = 1;
        s.result = Some(GameResult { winner: Player::Human, by_tie_breaker: false });
        assert_eq!(s.phase(), Phase::GameOver);
        assert_eq!(
            s.controls(),
            Controls { can_throw: false, can_score: false, can_select_dice: false }
        );
    }
}
