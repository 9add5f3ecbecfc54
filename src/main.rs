use amazing::{input, maze::Maze};
use docopt::Docopt;
use error_chain::quick_main;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Amazing

Usage:
    amazing -h | --help
    amazing [--rows=<m> --columns=<n>] [--seed=<s>] [--no-banner]

--rows and --columns go together. Without them the maze dimensions are read from
standard input as `m, n`.

Options:
    -h --help          Show this screen.
    --rows=<m>         Number of maze rows, at least 2.
    --columns=<n>      Number of maze columns, at least 2.
    --seed=<s>         Seed for the random generator. The same seed and dimensions always give the same maze.
    --no-banner        Do not print the program title.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: Option<usize>,
    flag_columns: Option<usize>,
    flag_seed: Option<u64>,
    flag_no_banner: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::amazing::errors::Error, ::amazing::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

quick_main!(run);

fn run() -> Result<()> {
    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    init_logging();

    if !args.flag_no_banner {
        print_banner();
    }

    let (rows, columns) = match input::dimensions_from_flags(args.flag_rows, args.flag_columns)? {
        Some(dimensions) => dimensions,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            input::prompt_for_dimensions(&mut stdin.lock(), &mut stdout.lock())?
        }
    };

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Generating a {}x{} maze with seed {}", rows.0, columns.0, seed);

    let mut rng = XorShiftRng::seed_from_u64(seed);
    let maze = Maze::new(rows, columns, &mut rng)
        .chain_err(|| format!("Failed to generate a {}x{} maze", rows.0, columns.0))?;
    debug!("Carved maze {:?}: {:?}", maze.entrances(), maze.summary());

    print!("{}", maze);
    Ok(())
}

/// Log to stderr so stdout carries only the maze. `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_banner() {
    println!("{}AMAZING PROGRAM", " ".repeat(28));
    println!("{}CREATIVE COMPUTING  MORRISTOWN, NEW JERSEY\n\n\n", " ".repeat(15));
}
