//! Common types for Mastermind: scores, pegs and guess errors.

use crate::config::{CODE_LENGTH, MAX_DIGIT, MIN_DIGIT};

/// Outcome of scoring one guess against a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Right digit in the right position (black pegs).
    pub exact: u8,
    /// Right digit in the wrong position (white pegs).
    pub partial: u8,
}

impl Score {
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// `true` when every position matched.
    pub fn is_win(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Pegs in display order, exact pegs first.
    pub fn pegs(&self) -> impl Iterator<Item = Peg> {
        core::iter::repeat(Peg::Exact)
            .take(self.exact as usize)
            .chain(core::iter::repeat(Peg::Partial).take(self.partial as usize))
    }
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} black, {} white", self.exact, self.partial)
    }
}

/// A single position's scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peg {
    /// Digit and position both match.
    Exact,
    /// Digit appears elsewhere in the secret.
    Partial,
}

impl Peg {
    pub fn symbol(&self) -> char {
        match self {
            Peg::Exact => 'B',
            Peg::Partial => 'W',
        }
    }
}

/// Reasons a line of input is not a valid guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Wrong number of digits; carries the count found.
    WrongLength(usize),
    /// A character that is not a decimal digit.
    NotADigit(char),
    /// A digit outside the allowed range.
    OutOfRange(u8),
}

impl core::fmt::Display for GuessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GuessError::WrongLength(n) => write!(
                f,
                "Expected {} digits, got {}",
                CODE_LENGTH, n
            ),
            GuessError::NotADigit(c) => write!(f, "'{}' is not a digit", c),
            GuessError::OutOfRange(d) => write!(
                f,
                "Digit {} out of range - must be {}-{}",
                d, MIN_DIGIT, MAX_DIGIT
            ),
        }
    }
}

/// Errors returned by `GameEngine` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has already been won or aborted.
    Finished,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Finished => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GuessError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
