//! CLI command handlers for the skillstack application.

mod categorize;
mod path;
mod recommend;
mod stats;
mod timeline;

pub(crate) use categorize::handle_categorize_command;
pub(crate) use path::handle_path_command;
pub(crate) use recommend::handle_recommend_command;
pub(crate) use stats::handle_stats_command;
pub(crate) use timeline::handle_timeline_command;

use anyhow::Result;
use serde::Serialize;
use skillstack_intelligence::Skill;
use skillstack_state::{load_catalog, load_settings, resolve_skills_file};
use std::path::PathBuf;

/// Resolve the catalog location and load it.
fn load_skills(skills_file: Option<PathBuf>) -> Result<Vec<Skill>> {
    let path = resolve_skills_file(skills_file, &load_settings)?;
    load_catalog(&path)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
