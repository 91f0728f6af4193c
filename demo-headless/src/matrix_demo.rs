//! Tour of dense matrices: fixed and dynamic sizes, basic operations, symmetric
//! eigen-decomposition, and a timing comparison of linear solvers.
//!
//! ```bash
//! cargo run --release --bin matrix-demo -- --solver cholesky
//! cargo run --release --bin matrix-demo -- --compare --size 1000
//! ```

mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use linalg_tour_core::{matrix_tour, MatrixTourConfig, SolverKind};
use tracing::debug;

/// Dense matrix tour with a linear-solver timing comparison
#[derive(Parser, Debug)]
#[command(name = "matrix-demo")]
#[command(about = "Dense matrix and linear-solver tour", long_about = None)]
struct Args {
    /// Dimension N of the N×N system used for solver timing
    #[arg(short = 'n', long, default_value_t = 500)]
    size: usize,

    /// Seed for every random matrix
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Solver to time (inverse, cholesky, qr); repeat to time several in order
    #[arg(
        short,
        long = "solver",
        required_unless_present = "compare",
        conflicts_with = "compare"
    )]
    solvers: Vec<SolverKind>,

    /// Time every solver on the same system
    #[arg(short, long)]
    compare: bool,

    /// Significant digits for printed numbers
    #[arg(short, long, default_value_t = 6)]
    precision: usize,
}

impl From<Args> for MatrixTourConfig {
    fn from(args: Args) -> Self {
        let solvers = if args.compare {
            SolverKind::ALL.to_vec()
        } else {
            args.solvers
        };
        MatrixTourConfig {
            system_size: args.size,
            seed: args.seed,
            solvers,
            precision: args.precision,
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");
    let config = MatrixTourConfig::from(args);

    match matrix_tour(&mut io::stdout().lock(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("matrix-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
