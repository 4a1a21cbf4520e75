//! List command handler
//!
//! Shows what the driver can run.

use crate::error::Result;
use crate::format::available_formats;
use crate::hash::available_hashes;
use crate::source::available_sources;

/// Run the list command
pub fn run() -> Result<()> {
    println!("Hash functions:");
    for hash in available_hashes() {
        println!(
            "  {:10} {:>4} bits  {}",
            hash.name, hash.output_bits, hash.description
        );
    }
    println!();

    println!("Message sources:");
    for source in available_sources() {
        println!("  {:10} {}", source.name, source.description);
    }
    println!();

    println!("Output formats:");
    for format in available_formats() {
        println!("  {:10} {}", format.name, format.description);
    }

    Ok(())
}
