//! `prereq`: check, explain and score course prerequisites from the command
//! line.

mod cli;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
