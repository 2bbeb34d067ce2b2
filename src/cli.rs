use std::{fs::File, io::BufReader, path::{Path, PathBuf}};

mod check;
mod config;
mod difficulty;
mod eligible;
mod parse;
mod suggest;
mod terminal;

use anyhow::Context;
use check::Check;
use clap::ArgAction;
use difficulty::Difficulty;
use eligible::Eligible;
use parse::Parse;
use prereqs::{Config, CourseSummary, StudentContext, Validator};
use suggest::Suggest;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        self.command.run(Validator::new(config))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check whether a student satisfies a prerequisite string
    Check(Check),

    /// Show how a prerequisite string is parsed
    Parse(Parse),

    /// Estimate a course's difficulty from its level and prerequisites
    Difficulty(Difficulty),

    /// List the courses still needed before taking a course
    Suggest(Suggest),

    /// Check a student against every course in a catalog file
    Eligible(Eligible),

    /// Show the effective configuration, or write it to a file
    Config(config::Command),
}

impl Command {
    fn run(self, validator: Validator) -> anyhow::Result<()> {
        match self {
            Self::Check(command) => command.run(&validator)?,
            Self::Parse(command) => command.run(&validator)?,
            Self::Difficulty(command) => command.run(&validator),
            Self::Suggest(command) => command.run(&validator)?,
            Self::Eligible(command) => command.run(&validator)?,
            Self::Config(command) => command.run(validator.config())?,
        }
        Ok(())
    }
}

/// The student being checked.
#[derive(Debug, clap::Args)]
pub struct StudentArgs {
    /// Completed course codes, comma separated (e.g. "CS 135,MATH135")
    #[arg(long, short = 'C', value_delimiter = ',')]
    completed: Vec<String>,

    /// Current year of study
    #[arg(long, short, default_value_t = 1)]
    year: u8,

    /// Program of study (e.g. "Computer Science")
    #[arg(long, short, default_value = "")]
    program: String,
}

impl StudentArgs {
    fn student(&self) -> StudentContext {
        StudentContext::new(&self.completed, self.year, self.program.as_str())
    }
}

/// Output format shared by the reporting commands.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Reads a catalog file: a JSON array of course records.
fn load_catalog(path: &Path) -> anyhow::Result<Vec<CourseSummary>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open catalog {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse catalog {}", path.display()))
}
