//! CLI handler for the `path` command.

use super::print_json;
use anyhow::Result;
use serde::Serialize;
use skillstack_intelligence::{classify, path_for_category, Category};
use skillstack_state::{load_settings, resolve_format, OutputFormat};

#[derive(Serialize)]
struct PathOutput<'a> {
    name: &'a str,
    category: Category,
    steps: &'static [&'static str],
}

/// Handle the `path` command.
pub(crate) fn handle_path_command(
    name: String,
    description: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let category = classify(&name, description.as_deref(), None).category;
    let steps = path_for_category(category);

    match resolve_format(format, &load_settings) {
        OutputFormat::Json => print_json(&PathOutput {
            name: &name,
            category,
            steps,
        }),
        OutputFormat::Text => {
            println!("Learning path for {} ({})", name, category);
            for (i, step) in steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            Ok(())
        }
    }
}
