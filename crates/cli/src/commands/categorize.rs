//! CLI handler for the `categorize` command.

use super::print_json;
use anyhow::Result;
use serde::Serialize;
use skillstack_intelligence::{classify, suggest_category, ClassificationResult};
use skillstack_state::{load_settings, resolve_format, OutputFormat};

#[derive(Serialize)]
struct CategorizeOutput<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: ClassificationResult,
    /// Whether the result is confident enough to offer as a tag.
    suggested: bool,
}

/// Handle the `categorize` command.
pub(crate) fn handle_categorize_command(
    name: String,
    description: Option<String>,
    tags: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let description = description.as_deref();
    let tags = tags.as_deref();
    let result = classify(&name, description, tags);
    let suggested = suggest_category(&name, description, tags).is_some();

    match resolve_format(format, &load_settings) {
        OutputFormat::Json => print_json(&CategorizeOutput {
            name: &name,
            result,
            suggested,
        }),
        OutputFormat::Text => {
            print_categorization_human(&name, &result, suggested);
            Ok(())
        }
    }
}

fn print_categorization_human(name: &str, result: &ClassificationResult, suggested: bool) {
    println!("Skill: {}", name);
    println!("Category: {}", result.category);
    println!("Confidence: {}", result.confidence);
    if suggested {
        println!(
            "\nThis skill appears to be related to {}. Consider adding it as a tag.",
            result.category
        );
    }
}
