//! Loading skill catalogs and activity logs exported from the skills API.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use skillstack_intelligence::{Activity, Skill};
use std::path::Path;
use tracing::debug;

/// Accepted export layouts: a bare array or a paginated `{ "results": [...] }` page.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    List(Vec<T>),
    Page { results: Vec<T> },
}

fn parse_listing<T: DeserializeOwned>(text: &str, what: &str) -> Result<Vec<T>> {
    let items = match serde_json::from_str::<Listing<T>>(text).with_context(|| {
        format!("{what} must be a JSON array or an object with a `results` array")
    })? {
        Listing::List(items) => items,
        Listing::Page { results } => results,
    };
    Ok(items)
}

fn load_listing<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} {}", path.display()))?;
    let items = parse_listing(&text, what)
        .with_context(|| format!("invalid {what} {}", path.display()))?;
    debug!(path = %path.display(), count = items.len(), "loaded {}", what);
    Ok(items)
}

/// Parse a skills catalog from JSON text.
pub fn parse_catalog(text: &str) -> Result<Vec<Skill>> {
    parse_listing(text, "skills catalog")
}

/// Read and parse a skills catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<Skill>> {
    load_listing(path, "skills catalog")
}

/// Parse an activity log from JSON text.
pub fn parse_activities(text: &str) -> Result<Vec<Activity>> {
    parse_listing(text, "activity log")
}

/// Read and parse an activity log file.
pub fn load_activities(path: &Path) -> Result<Vec<Activity>> {
    load_listing(path, "activity log")
}

/// Find a skill by its backend id.
pub fn skill_by_id(skills: &[Skill], id: u64) -> Option<&Skill> {
    skills.iter().find(|s| s.id == Some(id))
}

/// Find a skill by name, ignoring case and surrounding whitespace.
pub fn find_skill<'a>(skills: &'a [Skill], name: &str) -> Option<&'a Skill> {
    let wanted = name.trim();
    skills
        .iter()
        .find(|s| s.name.trim().eq_ignore_ascii_case(wanted))
}
