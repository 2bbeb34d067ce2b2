use std::path::PathBuf;

use prereqs::Config;
use tracing::instrument;

use crate::cli::terminal::{Tone, paint};

#[derive(Debug, clap::Parser)]
/// Show the effective configuration, or write it to a file
///
/// The effective configuration is the file given with --config, or the
/// built-in defaults.
pub struct Command {
    /// Write the effective configuration to this path instead of printing it
    #[arg(long, value_name = "PATH")]
    init: Option<PathBuf>,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        if let Some(path) = self.init {
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            config.save(&path)?;
            println!("{}", paint(format_args!("Wrote {}", path.display()), Tone::Met));
            return Ok(());
        }

        println!("Configuration:");
        println!("  baseline_difficulty: {}", config.baseline_difficulty);
        println!(
            "  level_divisor: {} {}",
            config.level_divisor,
            paint("(level component = (level - 1) / divisor)", Tone::Note)
        );
        println!("  max_level_component: {}", config.max_level_component);
        println!("  prerequisite_weight: {}", config.prerequisite_weight);
        println!(
            "  max_prerequisite_component: {}",
            config.max_prerequisite_component
        );
        println!(
            "  max_prerequisite_length: {}",
            config.max_prerequisite_length
        );
        Ok(())
    }
}
