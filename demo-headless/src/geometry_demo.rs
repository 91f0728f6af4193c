//! Tour of 3D geometry: rotation matrices, angle-axis, Euler angles, rigid transforms and
//! quaternions, all rotating the same probe vector.
//!
//! ```bash
//! cargo run --bin geometry-demo
//! cargo run --bin geometry-demo -- --angle-deg 90 --axis 1,1,0 --probe -1,0,2
//! ```

mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use linalg_tour_core::{geometry_tour, GeometryTourConfig, Vec3};
use tracing::debug;

/// 3D rotation and transform tour
#[derive(Parser, Debug)]
#[command(name = "geometry-demo")]
#[command(about = "Rotation, Euler angle, isometry and quaternion tour", long_about = None)]
struct Args {
    /// Rotation angle in degrees
    #[arg(short, long, default_value_t = 45.0, allow_hyphen_values = true)]
    angle_deg: f64,

    /// Rotation axis as x,y,z (normalized before use)
    #[arg(long, default_value = "0,0,1", allow_hyphen_values = true)]
    axis: Vec3,

    /// Translation of the rigid transform as x,y,z
    #[arg(short, long, default_value = "1,3,4", allow_hyphen_values = true)]
    translation: Vec3,

    /// Vector to rotate as x,y,z
    #[arg(long, default_value = "1,0,0", allow_hyphen_values = true)]
    probe: Vec3,

    /// Significant digits for printed numbers
    #[arg(short, long, default_value_t = 3)]
    precision: usize,
}

impl From<Args> for GeometryTourConfig {
    fn from(args: Args) -> Self {
        GeometryTourConfig {
            angle: args.angle_deg.to_radians(),
            axis: args.axis,
            translation: args.translation,
            probe: args.probe,
            precision: args.precision,
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");
    let config = GeometryTourConfig::from(args);

    match geometry_tour(&mut io::stdout().lock(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("geometry-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
