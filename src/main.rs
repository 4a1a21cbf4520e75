//! hash-diffusion CLI entry point
//!
//! Runs avalanche, bit-bias and runs diagnostics on hash adapters.

use hash_diffusion::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
