//! Shared test utilities for skillstack crates.
//!
//! This crate provides common fixtures used across the workspace: a
//! builder for [`Skill`] values, guards for process-global environment
//! variables, and temporary skill catalog and activity log files.

use chrono::NaiveDate;
use skillstack_intelligence::{Activity, Platform, ResourceType, Skill, SkillStatus};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, HOME, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = skillstack_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Fluent builder for test skills.
///
/// ```
/// use skillstack_test_utils::SkillBuilder;
/// use skillstack_intelligence::SkillStatus;
///
/// let skill = SkillBuilder::new("Rust Basics").completed().build();
/// assert_eq!(skill.status, SkillStatus::Completed);
/// ```
#[derive(Debug, Clone)]
pub struct SkillBuilder {
    skill: Skill,
}

impl SkillBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            skill: Skill::new(name),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.skill.id = Some(id);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.skill.description = description.to_string();
        self
    }

    pub fn tags(mut self, tags: &str) -> Self {
        self.skill.tags = tags.to_string();
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.skill.platform = platform;
        self
    }

    pub fn resource_type(mut self, resource_type: ResourceType) -> Self {
        self.skill.resource_type = resource_type;
        self
    }

    pub fn status(mut self, status: SkillStatus) -> Self {
        self.skill.status = status;
        self
    }

    pub fn completed(self) -> Self {
        self.status(SkillStatus::Completed)
    }

    pub fn hours(mut self, spent: f64, estimated: u32) -> Self {
        self.skill.hours_spent = spent;
        self.skill.estimated_hours = estimated;
        self
    }

    pub fn build(self) -> Skill {
        self.skill
    }
}

/// A temporary home directory with a skills catalog written into it.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct CatalogFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to the written catalog JSON.
    pub catalog: PathBuf,
}

impl CatalogFixture {
    /// Write `skills` as a JSON array to `<tempdir>/skills.json`.
    pub fn new(skills: &[Skill]) -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let catalog = tempdir.path().join("skills.json");
        let json = serde_json::to_string_pretty(skills).map_err(std::io::Error::other)?;
        std::fs::write(&catalog, json)?;
        Ok(Self { tempdir, catalog })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home_path().to_str().unwrap()))
    }

    /// Write `activities` as a JSON array to `<tempdir>/activities.json` and return its path.
    pub fn write_activities(&self, activities: &[Activity]) -> std::io::Result<PathBuf> {
        let path = self.home_path().join("activities.json");
        let json = serde_json::to_string_pretty(activities).map_err(std::io::Error::other)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Write a `config.toml` under `<home>/.skillstack/` and return its path.
    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let dir = self.home_path().join(".skillstack");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// A small, varied collection used by several tests.
pub fn sample_skills() -> Vec<Skill> {
    vec![
        SkillBuilder::new("JavaScript Fundamentals")
            .id(1)
            .description("DOM manipulation in the browser")
            .platform(Platform::Youtube)
            .resource_type(ResourceType::Video)
            .completed()
            .hours(12.0, 10)
            .build(),
        SkillBuilder::new("React hooks tutorial")
            .id(2)
            .tags("react, hooks")
            .platform(Platform::Youtube)
            .resource_type(ResourceType::Tutorial)
            .status(SkillStatus::InProgress)
            .hours(3.5, 20)
            .build(),
        SkillBuilder::new("Docker and Kubernetes on AWS")
            .id(3)
            .platform(Platform::Udemy)
            .resource_type(ResourceType::Video)
            .build(),
    ]
}

/// Study sessions logged against [`sample_skills`], plus one for a skill id
/// the catalog does not contain.
///
/// By day: 2024-03-02 has 2.25h over two sessions, 2024-03-01 has 2h, and
/// 2024-02-28 has 1h on the unknown skill 99.
pub fn sample_activities() -> Vec<Activity> {
    let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
    let mut closures = Activity::new(1, date(3, 1), 2.0);
    closures.notes = "Closures and scope".to_string();
    vec![
        closures,
        Activity::new(2, date(3, 2), 1.5),
        Activity::new(99, date(2, 28), 1.0),
        Activity::new(1, date(3, 2), 0.75),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let skill = SkillBuilder::new("x")
            .description("d")
            .tags("t")
            .platform(Platform::Edx)
            .resource_type(ResourceType::Book)
            .hours(1.0, 2)
            .build();
        assert_eq!(skill.description, "d");
        assert_eq!(skill.tags, "t");
        assert_eq!(skill.platform, Platform::Edx);
        assert_eq!(skill.resource_type, ResourceType::Book);
        assert_eq!(skill.estimated_hours, 2);
    }

    #[test]
    fn catalog_fixture_round_trips() {
        let fixture = CatalogFixture::new(&sample_skills()).unwrap();
        let text = std::fs::read_to_string(&fixture.catalog).unwrap();
        let parsed: Vec<Skill> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample_skills());
    }

    #[test]
    fn activity_log_is_written_next_to_catalog() {
        let fixture = CatalogFixture::new(&sample_skills()).unwrap();
        let path = fixture.write_activities(&sample_activities()).unwrap();
        assert_eq!(path.parent(), fixture.catalog.parent());
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Activity> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample_activities());
    }
}
