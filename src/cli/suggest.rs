use std::path::PathBuf;

use clap::Parser;
use prereqs::Validator;
use tracing::instrument;

use super::{
    load_catalog,
    terminal::{Tone, paint},
};

#[derive(Debug, Parser)]
#[command(about = "List the courses still needed before taking a course")]
pub struct Suggest {
    /// The course the student wants to take
    course: String,

    /// The course's prerequisite text
    prerequisites: String,

    /// Completed course codes, comma separated
    #[arg(long, short = 'C', value_delimiter = ',')]
    completed: Vec<String>,

    /// Catalog file (JSON array of course records)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl Suggest {
    #[instrument(level = "debug", skip(self, validator))]
    pub fn run(self, validator: &Validator) -> anyhow::Result<()> {
        let catalog = match &self.catalog {
            Some(path) => load_catalog(path)?,
            None => Vec::new(),
        };

        let path = validator.suggest_path(
            &self.course,
            &self.prerequisites,
            &self.completed,
            &catalog,
        );

        if path.is_empty() {
            println!(
                "{}",
                paint(
                    format_args!("✓ No further courses needed for {}", self.course),
                    Tone::Met
                )
            );
            return Ok(());
        }

        println!("Take before {}:", paint(&self.course, Tone::Course));
        for (i, code) in path.iter().enumerate() {
            println!("{}. {code}", i + 1);
        }

        Ok(())
    }
}
