//! Round and game state machine.
//!
//! [`GameEngine`] is the only thing that mutates a [`GameState`]. Every
//! operation either applies one complete transition or leaves the state
//! untouched and returns `false`; nothing here is an error. The computer
//! never acts on its own: its rerolls run inline inside the human-triggered
//! call, so both players have finished rolling whenever a round is scored.
//!
//! ```text
//! AwaitingFirstRoll ──roll──▶ RerollWindow ──reroll / score──▶ round scored
//!        ▲                                                        │
//!        └──────────── nobody at target ◀─────────────────────────┤
//!                      tied at target ──▶ TieBreaker ──▶ GameOver ◀┘
//! ```

use std::cmp::Ordering;
use rand::{rngs::StdRng, Rng, SeedableRng};
use crate::game_engine::{
    config::{self, GameConfig},
    dice::{reroll_keeping, roll_fresh, DieSource, RngDice},
    models::{Controls, GameResult, GameState, Player, DICE_PER_ROLL, MAX_ROLLS},
    strategy,
};

/// Owns one game's state plus the dice and keep-decision randomness.
pub struct GameEngine<D = RngDice<StdRng>, R = StdRng> {
    state: GameState,
    dice: D,
    rng: R,
}

impl GameEngine {
    /// Engine with entropy-seeded dice, ready for a game to 101.
    pub fn new() -> Self {
        GameEngine::with_sources(RngDice::from_entropy(), StdRng::from_entropy())
    }

    /// Fully reproducible engine: same seed, same game for the same inputs.
    pub fn seeded(seed: u64) -> Self {
        GameEngine::with_sources(
            RngDice::seeded(seed),
            StdRng::seed_from_u64(seed ^ 0x5EED),
        )
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}

impl<D: DieSource, R: Rng> GameEngine<D, R> {
    /// Engine on a fresh game to 101 driven by the given dice and keep randomness.
    pub fn with_sources(dice: D, rng: R) -> Self {
        GameEngine::with_state(GameState::default(), dice, rng)
    }

    /// Resume from a previously captured snapshot; `dice` and `rng` drive
    /// everything after it.
    pub fn with_state(state: GameState, dice: D, rng: R) -> Self {
        GameEngine { state, dice, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn controls(&self) -> Controls {
        self.state.controls()
    }

    /// Reset everything but the win counters. Non-positive targets fall back to 101.
    pub fn start_new_game(&mut self, target: i64) {
        let target_score = config::target_or_default(target);
        self.state = GameState::new(target_score, self.state.human_wins, self.state.computer_wins);
        log::info!(
            "New game to {target_score} (wins H:{} C:{})",
            self.state.human_wins, self.state.computer_wins
        );
    }

    /// Start a new game from a loaded [`GameConfig`].
    pub fn start_configured(&mut self, config: &GameConfig) {
        self.start_new_game(i64::from(config.target_score));
    }

    /// Change the target mid-session; ignored unless positive.
    pub fn update_target_score(&mut self, score: i64) -> bool {
        match config::validate_target_score(score) {
            Ok(target) => {
                self.state.target_score = target;
                true
            }
            Err(e) => {
                log::debug!("Target update ignored: {e}");
                false
            }
        }
    }

    /// Fresh roll for both players (`is_reroll == false`) or a human reroll.
    ///
    /// A fresh roll always starts the round over at one roll used. A reroll
    /// redraws every die outside the kept set and gives the computer one
    /// chance to reroll too. Reaching the third roll scores the round.
    pub fn roll_dice(&mut self, is_reroll: bool) -> bool {
        if self.state.game_over() {
            log::debug!("Roll ignored: game is over");
            return false;
        }

        if is_reroll {
            if !self.human_reroll() {
                return false;
            }
        } else {
            self.first_roll();
        }

        if self.state.human.rolls_used >= MAX_ROLLS {
            self.perform_scoring();
        }
        true
    }

    /// Flip whether the human keeps die `index` on the next reroll.
    pub fn toggle_dice_selection(&mut self, index: usize) -> bool {
        if !self.state.in_reroll_window() {
            log::debug!("Selection ignored: not in the reroll window");
            return false;
        }
        if index >= DICE_PER_ROLL {
            log::debug!("Selection ignored: die index {index} out of range");
            return false;
        }
        if !self.state.kept.remove(&index) {
            self.state.kept.insert(index);
        }
        true
    }

    /// Bank the human's roll: the computer finishes its turn, then the round is scored.
    pub fn score_roll(&mut self) -> bool {
        if self.state.game_over() || self.state.human.rolls_used == 0 {
            log::debug!("Score ignored: nothing to score");
            return false;
        }
        while self.computer_reroll() {}
        self.perform_scoring();
        true
    }

    /// One sudden-death roll each; the higher sum takes the game.
    pub fn roll_tie_breaker(&mut self) -> bool {
        let s = &mut self.state;
        if !s.tie_breaker || s.game_over() || s.human.rolls_used != 0 {
            log::debug!("Tie-breaker roll ignored");
            return false;
        }
        s.human.rolls_used = 1;
        s.computer.rolls_used = 1;
        s.human.roll = Some(roll_fresh(&mut self.dice));
        s.computer.roll = Some(roll_fresh(&mut self.dice));
        self.compare_rolls(true);
        true
    }

    /// The single "throw" control: tie-breaker roll, first roll, or reroll.
    pub fn throw_dice(&mut self) -> bool {
        if self.state.tie_breaker {
            self.roll_tie_breaker()
        } else {
            let is_reroll = self.state.human.rolls_used > 0;
            self.roll_dice(is_reroll)
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    fn first_roll(&mut self) {
        let s = &mut self.state;
        s.human.rolls_used = 1;
        s.computer.rolls_used = 1;
        s.human.roll = Some(roll_fresh(&mut self.dice));
        s.computer.roll = Some(roll_fresh(&mut self.dice));
        s.kept.clear();
    }

    fn human_reroll(&mut self) -> bool {
        let s = &mut self.state;
        let Some(previous) = s.human.roll else {
            log::debug!("Reroll ignored: nothing rolled yet");
            return false;
        };
        if s.human.rolls_used == 0 || s.human.rolls_used >= MAX_ROLLS {
            log::debug!("Reroll ignored: {} rolls used", s.human.rolls_used);
            return false;
        }
        s.human.rolls_used += 1;
        s.human.roll = Some(reroll_keeping(&mut self.dice, &previous, &s.kept));

        self.computer_reroll();
        true
    }

    /// One computer decision. Returns `true` if it rerolled.
    fn computer_reroll(&mut self) -> bool {
        let s = &mut self.state;
        let Some(previous) = s.computer.roll else {
            return false;
        };
        if s.computer.rolls_used >= MAX_ROLLS {
            return false;
        }
        let (computer_score, human_score, target) =
            (s.computer.score, s.human.score, s.target_score);

        if !strategy::should_reroll(&previous, s.computer.rolls_used, computer_score, human_score, target) {
            log::debug!("Computer stands on {previous} ({})", previous.sum());
            return false;
        }

        s.computer.rolls_used += 1;
        let keep = strategy::dice_to_keep(
            &mut self.rng,
            &previous,
            s.computer.rolls_used,
            computer_score,
            human_score,
            target,
        );
        let next = reroll_keeping(&mut self.dice, &previous, &keep);
        log::debug!("Computer keeps {keep:?} from {previous}, rolls {next}");
        s.computer.roll = Some(next);
        true
    }

    fn perform_scoring(&mut self) {
        if self.state.tie_breaker {
            // Scored tie-breaker rolls end the game like a normal round.
            self.compare_rolls(false);
            return;
        }

        let s = &mut self.state;
        let human_gain = s.human.roll_sum();
        let computer_gain = s.computer.roll_sum();
        s.human.score += human_gain;
        s.computer.score += computer_gain;
        s.human.rolls_used = 0;
        s.computer.rolls_used = 0;
        s.kept.clear();
        log::info!(
            "Round scored: human +{human_gain} ({}), computer +{computer_gain} ({})",
            s.human.score, s.computer.score
        );

        let (human, computer) = (s.human.score, s.computer.score);
        let target = s.target_score;
        match (human >= target, computer >= target) {
            (false, false) => {}
            (true, false) => self.finish(Player::Human, false),
            (false, true) => self.finish(Player::Computer, false),
            (true, true) => match human.cmp(&computer) {
                Ordering::Greater => self.finish(Player::Human, false),
                Ordering::Less => self.finish(Player::Computer, false),
                Ordering::Equal => {
                    self.state.tie_breaker = true;
                    log::info!("Both players tied on {human}: tie-breaker");
                }
            },
        }
    }

    /// Tie-breaker comparison of the current rolls; a draw re-arms it.
    /// `sudden_death` picks the "dice game" wording of `roll_tie_breaker`.
    fn compare_rolls(&mut self, sudden_death: bool) {
        let human = self.state.human.roll_sum();
        let computer = self.state.computer.roll_sum();
        match human.cmp(&computer) {
            Ordering::Greater => self.finish(Player::Human, sudden_death),
            Ordering::Less => self.finish(Player::Computer, sudden_death),
            Ordering::Equal => {
                let s = &mut self.state;
                s.human.rolls_used = 0;
                s.computer.rolls_used = 0;
                s.kept.clear();
                log::info!("Tie-breaker drawn at {human}: roll again");
            }
        }
    }

    fn finish(&mut self, winner: Player, by_tie_breaker: bool) {
        let s = &mut self.state;
        match winner {
            Player::Human => s.human_wins += 1,
            Player::Computer => s.computer_wins += 1,
        }
        s.kept.clear();
        s.result = Some(GameResult { winner, by_tie_breaker });
        log::info!(
            "Game over: {winner} wins {} - {} (H:{} C:{})",
            s.human.score, s.computer.score, s.human_wins, s.computer_wins
        );
    }
}
