//! Narrowing a skill collection by attribute and free-text search.

use crate::skill::{Platform, ResourceType, Skill, SkillStatus};
use serde::{Deserialize, Serialize};

/// Criteria a skill must meet. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFilter {
    pub status: Option<SkillStatus>,
    pub platform: Option<Platform>,
    pub resource_type: Option<ResourceType>,
    /// Case-insensitive substring of name, description or tags.
    pub search: Option<String>,
}

impl SkillFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: SkillStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        if self.status.is_some_and(|s| s != skill.status) {
            return false;
        }
        if self.platform.is_some_and(|p| p != skill.platform) {
            return false;
        }
        if self.resource_type.is_some_and(|r| r != skill.resource_type) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                [&skill.name, &skill.description, &skill.tags]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        skills.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{completed, skill, skill_on};

    #[test]
    fn test_empty_filter_matches_all() {
        let skills = vec![skill("a"), completed("b", "")];
        let filter = SkillFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&skills).len(), 2);
    }

    #[test]
    fn test_status_and_platform_combine() {
        let mut done_on_edx = completed("Rust", "");
        done_on_edx.platform = Platform::Edx;
        let skills = vec![
            done_on_edx,
            completed("Go", ""),
            skill_on("Zig", Platform::Edx, ResourceType::Book),
        ];
        let filter = SkillFilter::new()
            .with_status(SkillStatus::Completed)
            .with_platform(Platform::Edx);
        let names: Vec<_> = filter.apply(&skills).into_iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust"]);
    }

    #[test]
    fn test_search_covers_description_and_tags() {
        let mut tagged = skill("Week 2");
        tagged.tags = "Hooks, state".to_string();
        let skills = vec![
            completed("Intro", "All about HOOKS"),
            tagged,
            skill("Unrelated"),
        ];
        let filter = SkillFilter::new().with_search("hooks");
        assert_eq!(filter.apply(&skills).len(), 2);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let skills = vec![skill("x")];
        assert_eq!(SkillFilter::new().with_search("  ").apply(&skills).len(), 1);
    }

    #[test]
    fn test_resource_type_filter() {
        let skills = vec![
            skill_on("a", Platform::Udemy, ResourceType::Book),
            skill_on("b", Platform::Udemy, ResourceType::Video),
        ];
        let filter = SkillFilter::new().with_resource_type(ResourceType::Video);
        assert_eq!(filter.apply(&skills)[0].name, "b");
    }
}
