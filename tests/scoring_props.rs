use mastermind::{score, Code, GameEngine, GameStatus, Score, CODE_LENGTH};
use proptest::prelude::*;

fn arb_code() -> impl Strategy<Value = Code> {
    prop::array::uniform4(1u8..=6).prop_map(|d| Code::new(d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Pegs never exceed the code length.
    #[test]
    fn peg_total_is_bounded(secret in arb_code(), guess in arb_code()) {
        let s = score(&secret, &guess);
        prop_assert!((s.exact + s.partial) as usize <= CODE_LENGTH);
    }

    /// A code scored against itself is always a win with no partial pegs.
    #[test]
    fn self_score_is_perfect(code in arb_code()) {
        prop_assert_eq!(score(&code, &code), Score::new(4, 0));
    }

    /// Only an identical guess wins.
    #[test]
    fn win_iff_identical(secret in arb_code(), guess in arb_code()) {
        prop_assert_eq!(score(&secret, &guess).is_win(), secret == guess);
    }

    /// Exact counts and total pegs agree whichever code is the secret.
    #[test]
    fn exact_and_total_are_order_independent(a in arb_code(), b in arb_code()) {
        let ab = score(&a, &b);
        let ba = score(&b, &a);
        prop_assert_eq!(ab.exact, ba.exact);
        prop_assert_eq!(ab.exact + ab.partial, ba.exact + ba.partial);
    }

    /// Total pegs equal the per-digit overlap of the two codes.
    #[test]
    fn total_matches_digit_overlap(secret in arb_code(), guess in arb_code()) {
        let mut overlap = 0u8;
        for d in 1..=6u8 {
            let in_secret = secret.digits().iter().filter(|&&x| x == d).count();
            let in_guess = guess.digits().iter().filter(|&&x| x == d).count();
            overlap += in_secret.min(in_guess) as u8;
        }
        let s = score(&secret, &guess);
        prop_assert_eq!(s.exact + s.partial, overlap);
    }

    /// Malformed input never reaches the engine, so the round count is unchanged.
    #[test]
    fn malformed_guess_leaves_engine_untouched(secret in arb_code(), text in "[0-9a-z]{0,6}") {
        let mut engine = GameEngine::with_secret(secret);
        if let Ok(guess) = Code::parse(&text) {
            engine.guess(&guess).unwrap();
            prop_assert_eq!(engine.attempts(), 1);
        } else {
            prop_assert_eq!(engine.attempts(), 0);
            prop_assert_eq!(engine.status(), GameStatus::InProgress);
        }
    }
}

#[test]
fn documented_examples() {
    let c = |s: &str| Code::parse(s).unwrap();
    assert_eq!(score(&c("1123"), &c("1111")), Score::new(2, 0));
    assert_eq!(score(&c("1234"), &c("4321")), Score::new(0, 4));
    assert!(score(&c("1234"), &c("1234")).is_win());
    assert!(Code::parse("12a4").is_err());
    assert!(Code::parse("123").is_err());
}
