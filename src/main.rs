#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use mastermind::{
    init_logging, run_local, run_remote, GameEngine, GameStatus, HttpGameApi, InMemoryGameApi,
    DEFAULT_BASE_URL,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against a secret code generated on this machine.
    Local {
        #[arg(long, help = "Fix RNG seed for a reproducible secret (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play a game hosted by a remote Mastermind service.
    Remote {
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        url: String,
    },
    /// Run the remote client against a service hosted in this process.
    Offline {
        #[arg(long, help = "Fix RNG seed for a reproducible secret (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Local { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut engine = GameEngine::new(&mut rng);
            let status = run_local(&mut engine, &mut input, &mut out)?;
            log::info!("Local game ended: {:?} after {} attempts", status, engine.attempts());
        }
        Commands::Remote { url } => {
            let api = HttpGameApi::new(url);
            let outcome = run_remote(api, &mut input, &mut out).await?;
            log::info!("Remote game ended: {:?}", outcome);
        }
        Commands::Offline { seed } => {
            let api = match seed {
                Some(s) => InMemoryGameApi::seeded(s),
                None => InMemoryGameApi::new(),
            };
            let outcome = run_remote(api, &mut input, &mut out).await?;
            if outcome.status == GameStatus::Won {
                log::info!("Offline game won after {} guesses", outcome.guesses);
            }
        }
    }
    Ok(())
}
