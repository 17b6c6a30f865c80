use std::io::Write;
use std::process::{Command, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mastermind"))
        .args(args)
        .env("MASTERMIND_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start mastermind");
    if let Some(mut pipe) = child.stdin.take() {
        // The process may already have exited on startup failure.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn local_exit_reveals_code() {
    let output = run_cli(&["local", "--seed", "12345"], "12a4\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using fixed seed: 12345"));
    assert!(stdout.contains("Invalid guess"));
    assert!(stdout.contains("The code was"));
}

#[test]
fn local_seed_is_reproducible() {
    let a = run_cli(&["local", "--seed", "7"], "exit\n");
    let b = run_cli(&["local", "--seed", "7"], "exit\n");
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn offline_game_creates_and_deletes() {
    let output = run_cli(&["offline", "--seed", "3"], "1122\nEXIT\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Game started! GameID: game-1"));
    assert!(stdout.contains("Result:"));
    assert!(stdout.contains("Game deleted successfully."));
}

#[test]
fn remote_startup_failure_exits_nonzero() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}", addr);
    let output = run_cli(&["remote", "--url", &url], "exit\n");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to start game"));
}
