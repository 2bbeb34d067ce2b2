use std::path::PathBuf;

use clap::Parser;
use prereqs::{CourseSummary, ValidationResult, Validator};
use serde_json::json;
use tracing::instrument;

use super::{
    OutputFormat, StudentArgs, load_catalog,
    terminal::{Tone, missing_column_fits, paint},
};

#[derive(Debug, Parser)]
#[command(about = "Check a student against every course in a catalog file")]
pub struct Eligible {
    /// Catalog file (JSON array of course records)
    #[arg(long)]
    catalog: PathBuf,

    #[command(flatten)]
    student: StudentArgs,

    /// Only list courses the student can take
    #[arg(long)]
    only_eligible: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Eligible {
    #[instrument(level = "debug", skip(self, validator))]
    pub fn run(self, validator: &Validator) -> anyhow::Result<()> {
        let catalog = load_catalog(&self.catalog)?;
        let student = self.student.student();

        let results: Vec<_> = validator
            .check_catalog(&catalog, &student)
            .into_iter()
            .filter(|(_, result)| !self.only_eligible || result.is_satisfied)
            .collect();

        match self.output {
            OutputFormat::Table => Self::output_table(&results),
            OutputFormat::Json => Self::output_json(&results)?,
        }

        Ok(())
    }

    fn output_table(results: &[(&CourseSummary, ValidationResult)]) {
        if results.is_empty() {
            println!("No courses to show.");
            return;
        }

        let width = results
            .iter()
            .map(|(course, _)| course.code.len())
            .max()
            .unwrap_or_default();
        let show_missing = missing_column_fits(width);

        for (course, result) in results {
            let code = format!("{:<width$}", course.code.as_str());
            if result.is_satisfied {
                println!("{}  {}", paint("✓", Tone::Met), code);
            } else if show_missing {
                let missing = result.missing_prereqs().join(", ");
                println!(
                    "{}  {}  {}",
                    paint("✗", Tone::Unmet),
                    code,
                    paint(format_args!("needs {missing}"), Tone::Note)
                );
            } else {
                println!("{}  {}", paint("✗", Tone::Unmet), code);
            }
        }

        let eligible = results.iter().filter(|(_, r)| r.is_satisfied).count();
        println!("\n{eligible} of {} courses available", results.len());
    }

    fn output_json(results: &[(&CourseSummary, ValidationResult)]) -> anyhow::Result<()> {
        let courses: Vec<_> = results
            .iter()
            .map(|(course, result)| {
                json!({
                    "code": course.code,
                    "title": course.title,
                    "result": result,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&courses)?);
        Ok(())
    }
}
