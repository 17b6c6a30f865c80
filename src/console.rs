#![cfg(feature = "std")]
//! Console interaction loops shared by the local game and the remote client.
//!
//! Both loops read one line per prompt, score it (locally or through a
//! `GameApi`) and print the result. They are generic over input and output
//! so tests can drive them with in-memory buffers.

use std::io::{BufRead, Write};

use log::warn;

use crate::{
    code::Code,
    common::Score,
    config::{CODE_LENGTH, EXIT_COMMAND, MAX_DIGIT, MIN_DIGIT},
    game::{GameEngine, GameStatus},
    protocol::{ApiError, GameApi},
    session::RemoteSession,
};

/// What a line of console input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// End the session.
    Exit,
    /// Blank line; prompt again.
    Empty,
    /// Anything else, as a candidate guess.
    Guess(&'a str),
}

/// Classify one line of input. `exit` matches case-insensitively.
pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        Command::Empty
    } else if line.eq_ignore_ascii_case(EXIT_COMMAND) {
        Command::Exit
    } else {
        Command::Guess(line)
    }
}

/// Score line with peg symbols, e.g. `2 black, 1 white [BBW]`.
pub fn render_score(score: &Score) -> String {
    let pegs: String = score.pegs().map(|p| p.symbol()).collect();
    format!("{} [{}]", score, pegs)
}

fn prompt<W: Write>(out: &mut W) -> anyhow::Result<()> {
    write!(
        out,
        "\nEnter your guess ({} digits {}-{}, type '{}' to quit): ",
        CODE_LENGTH, MIN_DIGIT, MAX_DIGIT, EXIT_COMMAND
    )?;
    out.flush()?;
    Ok(())
}

/// Read one line; `None` at end of input. Bytes that are not UTF-8 become
/// replacement characters, so they fail guess parsing like any other junk.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Play `engine` to completion on the console. End of input counts as quitting.
pub fn run_local<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<GameStatus> {
    writeln!(
        out,
        "I'm thinking of a {}-digit code using digits {}-{}.",
        CODE_LENGTH, MIN_DIGIT, MAX_DIGIT
    )?;
    while engine.status() == GameStatus::InProgress {
        prompt(out)?;
        let line = read_line(input)?;
        let command = line.as_deref().map_or(Command::Exit, parse_command);
        match command {
            Command::Empty => continue,
            Command::Exit => {
                let secret = engine.quit();
                writeln!(out, "\nGame over. The code was {}.", secret)?;
            }
            Command::Guess(text) => {
                let guess = match Code::parse(text) {
                    Ok(guess) => guess,
                    Err(e) => {
                        writeln!(out, "Invalid guess: {}", e)?;
                        continue;
                    }
                };
                let score = engine.guess(&guess)?;
                writeln!(out, "Result: {}", render_score(&score))?;
                if score.is_win() {
                    writeln!(
                        out,
                        "Congratulations! You guessed the code in {} attempt{}!",
                        engine.attempts(),
                        if engine.attempts() == 1 { "" } else { "s" }
                    )?;
                }
            }
        }
    }
    Ok(engine.status())
}

/// How a remote session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutcome {
    /// `Won` or `Aborted`.
    pub status: GameStatus,
    /// Guesses the service scored.
    pub guesses: usize,
    /// Whether the closing delete succeeded.
    pub deleted: bool,
}

/// Create a game on `api`, play it on the console, then delete it.
///
/// Fails when the game cannot be created, or when the console itself fails;
/// in the latter case the game is still deleted before the error is
/// returned. Every failure of a remote operation is reported on `out` and
/// play continues.
pub async fn run_remote<A: GameApi, R: BufRead, W: Write>(
    api: A,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<RemoteOutcome> {
    writeln!(out, "Starting game...")?;
    let mut session = match RemoteSession::start(api).await {
        Ok(session) => session,
        Err(e) => {
            writeln!(out, "Failed to start game: {}", e)?;
            return Err(anyhow::anyhow!("Failed to start game: {}", e));
        }
    };

    let played = play_remote_rounds(&mut session, input, out).await;

    let guesses = session.guesses();
    let (_, deleted) = session.finish().await;
    let reported = match &deleted {
        Ok(()) => writeln!(out, "Game deleted successfully."),
        Err(e) => writeln!(out, "Failed to delete game: {}", e),
    };
    if let Err(e) = &deleted {
        warn!("Delete failed: {}", e);
    }
    let status = played?;
    reported?;
    Ok(RemoteOutcome {
        status,
        guesses,
        deleted: deleted.is_ok(),
    })
}

/// Prompt, read and submit until the player wins or quits.
async fn play_remote_rounds<A: GameApi, R: BufRead, W: Write>(
    session: &mut RemoteSession<A>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<GameStatus> {
    writeln!(out, "Game started! GameID: {}", session.id())?;
    loop {
        prompt(out)?;
        let line = read_line(input)?;
        let command = line.as_deref().map_or(Command::Exit, parse_command);
        let text = match command {
            Command::Empty => continue,
            Command::Exit => return Ok(GameStatus::Aborted),
            Command::Guess(text) => text,
        };
        let guess = match Code::parse_digits(text) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(out, "Invalid guess: {}", e)?;
                continue;
            }
        };
        match session.guess(&guess).await {
            Ok(score) => {
                writeln!(out, "Result: {}", render_score(&score))?;
                if score.is_win() {
                    writeln!(out, "Congratulations! You guessed the code!")?;
                    return Ok(GameStatus::Won);
                }
            }
            Err(ApiError::Server(msg)) => {
                writeln!(out, "Server error: {}", msg)?;
            }
            Err(e) => {
                warn!("Guess {} failed: {}", guess, e);
                writeln!(out, "Error making guess: {}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn play_local(secret: &str, input: &str) -> (GameEngine, GameStatus, String) {
        let mut engine = GameEngine::with_secret(code(secret));
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let status = run_local(&mut engine, &mut reader, &mut out).unwrap();
        (engine, status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_is_case_insensitive() {
        assert_eq!(parse_command("exit"), Command::Exit);
        assert_eq!(parse_command("  EXIT \n"), Command::Exit);
        assert_eq!(parse_command("Exit"), Command::Exit);
        assert_eq!(parse_command("exits"), Command::Guess("exits"));
        assert_eq!(parse_command("\n"), Command::Empty);
    }

    #[test]
    fn render_lists_exact_pegs_first() {
        assert_eq!(render_score(&Score::new(2, 1)), "2 black, 1 white [BBW]");
        assert_eq!(render_score(&Score::new(0, 0)), "0 black, 0 white []");
    }

    #[test]
    fn local_win_reports_attempts() {
        let (engine, status, out) = play_local("1234", "4321\n1234\n");
        assert_eq!(status, GameStatus::Won);
        assert_eq!(engine.attempts(), 2);
        assert!(out.contains("Result: 0 black, 4 white"));
        assert!(out.contains("guessed the code in 2 attempts"));
    }

    #[test]
    fn local_invalid_input_does_not_consume_round() {
        let (engine, status, out) = play_local("1234", "12a4\n123\n7777\n\n1234\n");
        assert_eq!(status, GameStatus::Won);
        assert_eq!(engine.attempts(), 1);
        assert_eq!(out.matches("Invalid guess").count(), 3);
    }

    #[test]
    fn local_exit_reveals_secret() {
        let (engine, status, out) = play_local("6512", "1111\nEXIT\n");
        assert_eq!(status, GameStatus::Aborted);
        assert_eq!(engine.attempts(), 1);
        assert!(out.contains("The code was 6512"));
    }

    #[test]
    fn local_non_utf8_line_is_an_invalid_guess() {
        let mut engine = GameEngine::with_secret(code("1234"));
        let mut reader = Cursor::new(b"\xff\xfe\n1234\n".to_vec());
        let mut out = Vec::new();
        let status = run_local(&mut engine, &mut reader, &mut out).unwrap();
        assert_eq!(status, GameStatus::Won);
        assert_eq!(engine.attempts(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Invalid guess"));
    }

    #[test]
    fn local_end_of_input_quits() {
        let (_, status, out) = play_local("6512", "");
        assert_eq!(status, GameStatus::Aborted);
        assert!(out.contains("The code was 6512"));
    }
}
