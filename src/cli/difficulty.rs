use clap::Parser;
use prereqs::Validator;

#[derive(Debug, Parser)]
#[command(about = "Estimate a course's difficulty from its level and prerequisites")]
pub struct Difficulty {
    /// The course code (e.g. "CS 240")
    course: String,

    /// The course's prerequisite text
    #[arg(default_value = "")]
    prerequisites: String,
}

impl Difficulty {
    pub fn run(self, validator: &Validator) {
        let score = validator.difficulty_score(&self.course, &self.prerequisites);
        println!("{score:.2}");
    }
}
