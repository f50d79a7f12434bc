//! Aggregate learning preferences across a skill collection.

use crate::categorize::Category;
use crate::skill::{Platform, ResourceType, Skill};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::debug;

/// The platform, format and category a user gravitates towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPreferences {
    pub platform: Platform,
    pub resource_type: ResourceType,
    pub top_category: Category,
}

impl Default for LearningPreferences {
    fn default() -> Self {
        Self {
            platform: Platform::Udemy,
            resource_type: ResourceType::Course,
            top_category: Category::General,
        }
    }
}

impl LearningPreferences {
    /// Tally platform, resource type and category over `skills` in one pass.
    ///
    /// Each preference is the most frequent value. The defaults (`udemy`,
    /// `course`, `General`) seed the reduction and are only displaced by a
    /// strictly higher count, so they win any tie they take part in. Other
    /// ties go to the key seen last.
    pub fn from_skills(skills: &[Skill]) -> Self {
        let mut platforms: IndexMap<Platform, usize> = IndexMap::new();
        let mut resource_types: IndexMap<ResourceType, usize> = IndexMap::new();
        let mut categories: IndexMap<Category, usize> = IndexMap::new();

        for skill in skills {
            *platforms.entry(skill.platform).or_default() += 1;
            *resource_types.entry(skill.resource_type).or_default() += 1;
            *categories.entry(skill.classify().category).or_default() += 1;
        }

        let defaults = Self::default();
        let prefs = Self {
            platform: most_frequent(&platforms, defaults.platform),
            resource_type: most_frequent(&resource_types, defaults.resource_type),
            top_category: most_frequent(&categories, defaults.top_category),
        };

        debug!(
            skills = skills.len(),
            platform = %prefs.platform,
            resource_type = %prefs.resource_type,
            top_category = %prefs.top_category,
            "aggregated learning preferences"
        );
        prefs
    }
}

/// Highest-count key, seeded with `seed`.
///
/// A tie never displaces the seed, but between two non-seed keys the later
/// one wins.
fn most_frequent<K: Copy + Eq + Hash>(counts: &IndexMap<K, usize>, seed: K) -> K {
    counts.iter().fold(seed, |best, (&key, &count)| {
        let best_count = counts.get(&best).copied().unwrap_or(0);
        if count > best_count || (count == best_count && best != seed) {
            key
        } else {
            best
        }
    })
}
