//! surfspot CLI entry point
//!
//! Surf-spot picker bot - webhook server + CLI

use surfspot::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
