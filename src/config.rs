/// Number of pegs in a secret code and in every guess.
pub const CODE_LENGTH: usize = 4;

/// Smallest digit a peg may take.
pub const MIN_DIGIT: u8 = 1;

/// Largest digit a peg may take.
pub const MAX_DIGIT: u8 = 6;

/// Number of distinct digits ("colours") available.
pub const NUM_DIGITS: usize = (MAX_DIGIT - MIN_DIGIT + 1) as usize;

/// Total number of distinct codes, `NUM_DIGITS ^ CODE_LENGTH`.
pub const TOTAL_CODES: usize = NUM_DIGITS.pow(CODE_LENGTH as u32);

/// Console command that ends the current game.
pub const EXIT_COMMAND: &str = "exit";

/// Remote service used by `mastermind remote` when no `--url` is given.
pub const DEFAULT_BASE_URL: &str = "https://mastermind.darkube.app";
