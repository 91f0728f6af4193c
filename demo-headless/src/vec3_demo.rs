//! Adds two hand-written 3D vectors and prints the sum.
//!
//! ```bash
//! cargo run --bin vec3-demo
//! # (5,7,9)
//! ```

mod logging;

use std::io;
use std::process::ExitCode;

use linalg_tour_core::vector_tour;

fn main() -> ExitCode {
    logging::init();

    match vector_tour(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vec3-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
