use mastermind::{GameEngine, GameStatus, Solver};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut attempts = Vec::with_capacity(games);

    for _ in 0..games {
        let mut engine = GameEngine::new(&mut rng);
        let mut solver = Solver::new();
        while engine.status() == GameStatus::InProgress {
            let guess = solver
                .next_guess()
                .ok_or_else(|| anyhow::anyhow!("solver ran out of candidates"))?;
            let result = engine.guess(&guess)?;
            solver.record(&guess, result);
        }
        attempts.push(engine.attempts());
    }

    let total: usize = attempts.iter().sum();
    let result = json!({
        "seed": seed,
        "games": games,
        "attempts": attempts,
        "max": attempts.iter().max(),
        "mean": if games == 0 { 0.0 } else { total as f64 / games as f64 },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
