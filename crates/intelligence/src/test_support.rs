//! Test utilities for the intelligence crate.

use crate::skill::{Platform, ResourceType, Skill, SkillStatus};

/// A not-started skill with only a name.
pub(crate) fn skill(name: &str) -> Skill {
    Skill::new(name)
}

/// A skill on a specific platform and format.
pub(crate) fn skill_on(name: &str, platform: Platform, resource_type: ResourceType) -> Skill {
    Skill {
        platform,
        resource_type,
        ..Skill::new(name)
    }
}

/// A completed skill with a description.
pub(crate) fn completed(name: &str, description: &str) -> Skill {
    Skill {
        description: description.to_string(),
        status: SkillStatus::Completed,
        ..Skill::new(name)
    }
}
