use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format '{other}' (expected text or json)"),
        }
    }
}

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the catalog path from `SKILLSTACK_SKILLS_FILE`, if set.
pub fn env_skills_file() -> Option<PathBuf> {
    std::env::var("SKILLSTACK_SKILLS_FILE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns the activity log path from `SKILLSTACK_ACTIVITIES_FILE`, if set.
pub fn env_activities_file() -> Option<PathBuf> {
    std::env::var("SKILLSTACK_ACTIVITIES_FILE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns the output format from `SKILLSTACK_FORMAT`, ignoring unparseable values.
pub fn env_format() -> Option<OutputFormat> {
    std::env::var("SKILLSTACK_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
}

/// Returns the path to the config file.
pub fn config_file() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var("SKILLSTACK_CONFIG") {
        return Some(PathBuf::from(custom));
    }
    home_dir().ok().map(|h| h.join(".skillstack/config.toml"))
}

/// Settings parsed from `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub skills_file: Option<PathBuf>,
    #[serde(default)]
    pub activities_file: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Loads settings from disk if available.
pub fn load_settings() -> Result<Settings> {
    let Some(path) = config_file() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let settings: Settings = toml::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Resolves the catalog path: explicit flag, then env var, then config file.
pub fn resolve_skills_file(
    flag: Option<PathBuf>,
    settings: &dyn Fn() -> Result<Settings>,
) -> Result<PathBuf> {
    if let Some(path) = flag.or_else(env_skills_file) {
        return Ok(path);
    }
    settings()?
        .skills_file
        .map(expand_home)
        .transpose()?
        .context("no skills catalog given; pass --skills, set SKILLSTACK_SKILLS_FILE, or add skills_file to config.toml")
}

/// Resolves the activity log path: explicit flag, then env var, then config file.
pub fn resolve_activities_file(
    flag: Option<PathBuf>,
    settings: &dyn Fn() -> Result<Settings>,
) -> Result<PathBuf> {
    if let Some(path) = flag.or_else(env_activities_file) {
        return Ok(path);
    }
    settings()?
        .activities_file
        .map(expand_home)
        .transpose()?
        .context("no activity log given; pass --activities, set SKILLSTACK_ACTIVITIES_FILE, or add activities_file to config.toml")
}

/// Resolves the output format: explicit flag, then env var, then config file, then text.
pub fn resolve_format(
    flag: Option<OutputFormat>,
    settings: &dyn Fn() -> Result<Settings>,
) -> OutputFormat {
    flag.or_else(env_format)
        .or_else(|| settings().ok().and_then(|s| s.format))
        .unwrap_or_default()
}

/// Expands a leading `~/` against the home directory.
fn expand_home(path: PathBuf) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn settings_parse_from_toml() {
        let settings: Settings =
            toml::from_str("skills_file = \"/tmp/skills.json\"\nactivities_file = \"/tmp/log.json\"\nformat = \"json\"\n").unwrap();
        assert_eq!(settings.skills_file, Some(PathBuf::from("/tmp/skills.json")));
        assert_eq!(settings.activities_file, Some(PathBuf::from("/tmp/log.json")));
        assert_eq!(settings.format, Some(OutputFormat::Json));
    }

    #[test]
    fn empty_settings_are_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
