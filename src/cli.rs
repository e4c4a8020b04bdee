//! Command-line flags and logging setup shared by every binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Name used when `--name` is not given.
pub const DEFAULT_NAME: &str = "folks";

#[derive(Parser, Debug)]
#[command(about = "Greets a participant of the Golang CWB meetup")]
pub struct Args {
    /// Name of the meetup participant
    #[arg(short, long, env = "GREET_NAME", default_value = DEFAULT_NAME)]
    pub name: String,
}

/// Logs go to stderr so stdout carries only the greeting.
/// Set RUST_LOG=debug for verbose logging.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
