use std::process;

use clap::Parser;
use prereqs::{ValidationResult, Validator};
use tracing::instrument;

use super::{
    OutputFormat, StudentArgs,
    terminal::{Tone, paint},
};

#[derive(Debug, Parser)]
#[command(about = "Check whether a student satisfies a prerequisite string")]
pub struct Check {
    /// The prerequisite text, exactly as published
    prerequisites: String,

    #[command(flatten)]
    pub(super) student: StudentArgs,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Check {
    #[instrument(level = "debug", skip(self, validator))]
    pub fn run(self, validator: &Validator) -> anyhow::Result<()> {
        let result = validator.validate(&self.prerequisites, &self.student.student());

        match self.output {
            OutputFormat::Table => Self::output_table(&result),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }

        // Exit with a non-zero code so scripts can branch on eligibility.
        if !result.is_satisfied {
            process::exit(2);
        }

        Ok(())
    }

    fn output_table(result: &ValidationResult) {
        if result.is_satisfied {
            println!("{}", paint("✓ Prerequisites satisfied", Tone::Met));
        } else {
            println!("{}", paint("✗ Prerequisites not satisfied", Tone::Unmet));
            println!();
            println!("Missing:");
            for missing in result.missing_prereqs() {
                println!("  - {missing}");
            }
        }

        if !result.warnings.is_empty() {
            println!();
            for warning in &result.warnings {
                println!("{}", paint(format_args!("⚠️  {warning}"), Tone::Note));
            }
        }
    }
}
