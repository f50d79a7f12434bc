//! Rule-based suggestions for what to learn next.
//!
//! Three strategies feed one list: skills related to the one being viewed,
//! progression from completed skills, and categories that complement the
//! user's strongest area. The merged list is deduplicated by name and capped
//! at [`MAX_RECOMMENDATIONS`].

mod explainer;
mod preferences;
mod strategies;

pub use explainer::summarize_recommendations;
pub use preferences::LearningPreferences;

use crate::skill::{Platform, ResourceType, Skill};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Upper bound on the number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// A suggested next skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Skill name; unique within a result list.
    pub name: String,
    pub description: String,
    pub platform: Platform,
    pub resource_type: ResourceType,
    /// Why this was suggested.
    pub reason: String,
    /// Strategy that produced the suggestion.
    pub source: RecommendationSource,
}

impl Recommendation {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        prefs: &LearningPreferences,
        reason: impl Into<String>,
        source: RecommendationSource,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            platform: prefs.platform,
            resource_type: prefs.resource_type,
            reason: reason.into(),
            source,
        }
    }
}

/// Which strategy a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Related to the skill currently being viewed.
    Related,
    /// Next step after completed skills.
    Progression,
    /// Complements the user's top category.
    Complementary,
}

impl RecommendationSource {
    /// Get a short label for this source.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Related => "related",
            Self::Progression => "progression",
            Self::Complementary => "complementary",
        }
    }
}

/// Recommend skills to learn next from a user's collection.
///
/// `current` is the skill being viewed or edited, if any. Returns an empty
/// list for an empty collection.
///
/// ```
/// use skillstack_intelligence::{recommend, Skill};
///
/// assert!(recommend(&[], None).is_empty());
///
/// let recs = recommend(&[Skill::new("Docker in practice")], None);
/// assert_eq!(recs[0].name, "Backend Development Fundamentals");
/// ```
pub fn recommend(skills: &[Skill], current: Option<&Skill>) -> Vec<Recommendation> {
    if skills.is_empty() {
        return Vec::new();
    }

    let prefs = LearningPreferences::from_skills(skills);
    let completed: Vec<&Skill> = skills.iter().filter(|s| s.is_completed()).collect();

    let mut candidates = Vec::new();

    if let Some(current) = current {
        let related = strategies::related_to_current(current, &prefs);
        debug!(current = %current.name, count = related.len(), "related suggestions");
        candidates.extend(related);
    }

    if !completed.is_empty() {
        let next = strategies::progression(&completed, &prefs);
        debug!(completed = completed.len(), count = next.len(), "progression suggestions");
        candidates.extend(next);
    }

    let complementary = strategies::complementary(&prefs);
    debug!(count = complementary.len(), "complementary suggestions");
    candidates.extend(complementary);

    let merged = dedup_by_name(candidates, MAX_RECOMMENDATIONS);
    debug!(count = merged.len(), "recommendations ready");
    merged
}

/// Keep the first occurrence of each name, up to `limit` entries.
fn dedup_by_name(candidates: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|rec| seen.insert(rec.name.clone()))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{completed, skill, skill_on};

    fn names(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_collection() {
        assert!(recommend(&[], None).is_empty());
        assert!(recommend(&[], Some(&skill("React"))).is_empty());
    }

    #[test]
    fn test_complementary_only_without_current_or_completed() {
        let recs = recommend(&[skill("Docker"), skill("Kubernetes")], None);
        assert_eq!(
            names(&recs),
            vec![
                "Backend Development Fundamentals",
                "Database & Storage Fundamentals"
            ]
        );
        assert!(recs
            .iter()
            .all(|r| r.source == RecommendationSource::Complementary));
    }

    #[test]
    fn test_strategy_order_is_related_progression_complementary() {
        let skills = vec![
            completed("Vue components", "building single page apps"),
            skill("Angular routing"),
        ];
        let current = skill("Flutter widgets");
        let recs = recommend(&skills, Some(&current));
        assert_eq!(
            names(&recs),
            vec![
                "Cross-Platform Development",
                "Mobile UI/UX Design",
                "Testing & Quality Assurance",
                "Backend Development Fundamentals",
                "Design & Creative Fundamentals",
            ]
        );
        assert_eq!(recs[0].source, RecommendationSource::Related);
        assert_eq!(recs[2].source, RecommendationSource::Progression);
        assert_eq!(recs[4].source, RecommendationSource::Complementary);
    }

    #[test]
    fn test_results_use_preferred_platform_and_format() {
        let skills = vec![
            skill_on("Docker", Platform::Pluralsight, ResourceType::Tutorial),
            skill_on("Ansible", Platform::Pluralsight, ResourceType::Tutorial),
        ];
        let recs = recommend(&skills, None);
        assert!(recs.iter().all(|r| r.platform == Platform::Pluralsight));
        assert!(recs.iter().all(|r| r.resource_type == ResourceType::Tutorial));
    }

    #[test]
    fn test_dedup_keeps_first_and_caps_length() {
        let prefs = LearningPreferences::default();
        let make = |name: &str, source| {
            Recommendation::new(name, "first", &prefs, "r", source)
        };
        let mut candidates = vec![make("A", RecommendationSource::Related)];
        let mut dup = make("A", RecommendationSource::Complementary);
        dup.description = "second".to_string();
        candidates.push(dup);
        for name in ["B", "C", "D", "E", "F", "G"] {
            candidates.push(make(name, RecommendationSource::Complementary));
        }

        let merged = dedup_by_name(candidates, MAX_RECOMMENDATIONS);
        assert_eq!(names(&merged), vec!["A", "B", "C", "D", "E", "F"]);
        assert_eq!(merged[0].description, "first");
        assert_eq!(merged[0].source, RecommendationSource::Related);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let skills = vec![
            completed("Python Basics", "intro to pandas"),
            skill("Figma prototyping"),
        ];
        let current = skill("React");
        assert_eq!(
            recommend(&skills, Some(&current)),
            recommend(&skills, Some(&current))
        );
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(RecommendationSource::Related.label(), "related");
        assert_eq!(RecommendationSource::Progression.label(), "progression");
        assert_eq!(RecommendationSource::Complementary.label(), "complementary");
    }
}
