// Automatic guesser. Keeps every code still consistent with the feedback seen
// so far and plays the first one in lexicographic order.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::{
    code::Code,
    common::Score,
    config::{CODE_LENGTH, TOTAL_CODES},
    scoring::score,
};

/// Opening guess; two pairs split the candidate space well.
const OPENING: [u8; CODE_LENGTH] = [1, 1, 2, 2];

pub struct Solver {
    candidates: Vec<Code>,
    guesses: usize,
}

impl Solver {
    pub fn new() -> Self {
        let candidates = (0..TOTAL_CODES).filter_map(Code::from_index).collect();
        Self {
            candidates,
            guesses: 0,
        }
    }

    /// Next code to play, or `None` if the feedback received is contradictory.
    pub fn next_guess(&self) -> Option<Code> {
        if self.guesses == 0 {
            return Code::new(OPENING).ok();
        }
        self.candidates.first().copied()
    }

    /// Discard every candidate that would not have produced `result` for `guess`.
    pub fn record(&mut self, guess: &Code, result: Score) {
        self.guesses += 1;
        self.candidates.retain(|c| score(c, guess) == result);
    }

    /// Codes still consistent with all feedback.
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    pub fn guesses(&self) -> usize {
        self.guesses
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
