//! Fixed-length digit codes used both as secrets and as guesses.

use rand::Rng;

use crate::{
    common::GuessError,
    config::{CODE_LENGTH, MAX_DIGIT, MIN_DIGIT, NUM_DIGITS},
};

/// An ordered sequence of `CODE_LENGTH` digits, each in `MIN_DIGIT..=MAX_DIGIT`.
///
/// Every constructor validates, so holding a `Code` means holding a valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Build a code from raw digits, checking the range of each.
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, GuessError> {
        for &d in digits.iter() {
            if !(MIN_DIGIT..=MAX_DIGIT).contains(&d) {
                return Err(GuessError::OutOfRange(d));
            }
        }
        Ok(Self(digits))
    }

    /// Draw a code with each position chosen uniformly and independently.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        for d in digits.iter_mut() {
            *d = rng.random_range(MIN_DIGIT..=MAX_DIGIT);
        }
        Self(digits)
    }

    /// The code at position `index` in lexicographic order (`0` is `1111`).
    /// Returns `None` past the last code.
    pub fn from_index(mut index: usize) -> Option<Self> {
        if index >= crate::config::TOTAL_CODES {
            return None;
        }
        let mut digits = [MIN_DIGIT; CODE_LENGTH];
        for d in digits.iter_mut().rev() {
            *d = MIN_DIGIT + (index % NUM_DIGITS) as u8;
            index /= NUM_DIGITS;
        }
        Some(Self(digits))
    }

    /// Strict parse: exactly `CODE_LENGTH` characters, each a digit in range.
    ///
    /// Leading and trailing whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let input = input.trim();
        let len = input.chars().count();
        if len != CODE_LENGTH {
            return Err(GuessError::WrongLength(len));
        }
        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(input.chars()) {
            let d = ch.to_digit(10).ok_or(GuessError::NotADigit(ch))?;
            *slot = d as u8;
        }
        Self::new(digits)
    }

    /// Lenient parse: keep only the decimal digits of `input`, then validate
    /// what remains. `"1-2-3-4"` parses, `"12a4"` fails with three digits.
    pub fn parse_digits(input: &str) -> Result<Self, GuessError> {
        let mut digits = [0u8; CODE_LENGTH];
        let mut count = 0usize;
        for d in input.chars().filter_map(|c| c.to_digit(10)) {
            if count < CODE_LENGTH {
                digits[count] = d as u8;
            }
            count += 1;
        }
        if count != CODE_LENGTH {
            return Err(GuessError::WrongLength(count));
        }
        Self::new(digits)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl core::fmt::Display for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for d in self.0.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Code {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
