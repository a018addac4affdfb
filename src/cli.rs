use clap::Parser;

/// Builds the demo record set and prints every record in insertion order.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CommandLine {}
