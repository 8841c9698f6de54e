//! Generation Two release bundler.
//!
//! Builds the platform release artifacts (.exe, .deb, .dmg) for the
//! Generation Two GUI by driving PyInstaller, stdeb and create-dmg.

use generation_two_bundler::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
