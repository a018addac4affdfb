use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::CommandLine;
use dbobjects::database::Database;

mod cli;
mod dbobjects;
mod error;

pub use error::{Error, Result};

fn main() -> Result<()> {
    let _args = CommandLine::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut db = Database::new();
    db.add("Alice", 30);
    db.add("Bob", 25);
    db.add("Charlie", 40);

    let stdout = std::io::stdout();
    db.print_all(&mut stdout.lock())?;

    Ok(())
}
