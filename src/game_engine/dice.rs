use std::collections::BTreeSet;
use rand::{rngs::StdRng, Rng, SeedableRng};
use crate::game_engine::models::{Roll, DICE_PER_ROLL};

/// Source of uniform die faces.
pub trait DieSource {
    /// Draw one face in 1..=6.
    fn draw(&mut self) -> u8;
}

/// Fair dice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<StdRng> {
    pub fn from_entropy() -> Self {
        RngDice::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        RngDice::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DieSource for RngDice<R> {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Replays a fixed sequence of faces; panics once the script runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "Scripted die faces must be in 1..=6"
        );
        ScriptedDice { faces, cursor: 0 }
    }

    /// Faces not yet drawn.
    pub fn remaining(&self) -> usize {
        self.faces.len() - self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn draw(&mut self) -> u8 {
        assert!(self.cursor < self.faces.len(), "Dice script exhausted");
        let face = self.faces[self.cursor];
        self.cursor += 1;
        face
    }
}

/// Draw five fresh dice in table order.
pub fn roll_fresh<D: DieSource + ?Sized>(dice: &mut D) -> Roll {
    let mut faces = [0u8; DICE_PER_ROLL];
    for f in &mut faces {
        *f = dice.draw();
    }
    Roll(faces)
}

/// Keep the faces at `keep` and redraw every other position, left to right.
pub fn reroll_keeping<D: DieSource + ?Sized>(
    dice: &mut D,
    previous: &Roll,
    keep: &BTreeSet<usize>,
) -> Roll {
    let mut faces = previous.0;
    for (i, f) in faces.iter_mut().enumerate() {
        if !keep.contains(&i) {
            *f = dice.draw();
        }
    }
    Roll(faces)
}
