use clap::Parser;
use prereqs::{PrerequisiteNode, Validator};
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(about = "Show how a prerequisite string is parsed")]
pub struct Parse {
    /// The prerequisite text, exactly as published
    prerequisites: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "outline")]
    output: TreeFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum TreeFormat {
    /// An indented outline, one node per line
    #[default]
    Outline,
    /// The tree as nested JSON objects
    Json,
}

impl Parse {
    pub fn run(self, validator: &Validator) -> anyhow::Result<()> {
        let parsed = validator.parse(&self.prerequisites);

        match self.output {
            TreeFormat::Outline => {
                match &parsed.tree {
                    Some(tree) => print!("{}", outline(tree)),
                    None => println!("(no prerequisites)"),
                }
                for warning in &parsed.warnings {
                    println!("warning: {warning}");
                }
            }
            TreeFormat::Json => {
                let output = json!({
                    "tree": parsed.tree.as_ref().map(tree_json),
                    "warnings": parsed.warnings,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }
}

fn outline(tree: &PrerequisiteNode) -> String {
    fn render(node: &PrerequisiteNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match node.requirement() {
            Some(requirement) => out.push_str(&format!("{indent}{requirement}\n")),
            None => {
                if let Some(operator) = node.operator() {
                    out.push_str(&format!("{indent}{operator}\n"));
                }
                for child in node.children() {
                    render(child, depth + 1, out);
                }
            }
        }
    }

    let mut out = String::new();
    render(tree, 0, &mut out);
    out
}

fn tree_json(node: &PrerequisiteNode) -> Value {
    match node.requirement() {
        Some(requirement) => json!({ "requirement": requirement }),
        None => json!({
            "operator": node.operator().map(|operator| operator.to_string()),
            "children": node.children().map(tree_json).collect::<Vec<_>>(),
        }),
    }
}
