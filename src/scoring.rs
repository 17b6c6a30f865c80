// Peg scoring. Each secret slot and each guess slot takes part in at most
// one match; consumed slots become `None` so they can never equal a digit.

use crate::{code::Code, common::Score, config::CODE_LENGTH};

/// Score `guess` against `secret`.
///
/// The first pass counts exact matches and consumes both slots. The second
/// pass walks the remaining guess slots in order and consumes the earliest
/// unconsumed secret slot holding the same digit, so repeated digits in the
/// guess are never counted more often than they occur in the secret.
pub fn score(secret: &Code, guess: &Code) -> Score {
    let mut secret_slots: [Option<u8>; CODE_LENGTH] = (*secret.digits()).map(Some);
    let mut guess_slots: [Option<u8>; CODE_LENGTH] = (*guess.digits()).map(Some);
    let mut exact = 0u8;
    let mut partial = 0u8;

    for i in 0..CODE_LENGTH {
        if guess_slots[i] == secret_slots[i] {
            exact += 1;
            secret_slots[i] = None;
            guess_slots[i] = None;
        }
    }

    for g in guess_slots.iter().flatten() {
        if let Some(slot) = secret_slots.iter_mut().find(|s| **s == Some(*g)) {
            partial += 1;
            *slot = None;
        }
    }

    Score::new(exact, partial)
}
