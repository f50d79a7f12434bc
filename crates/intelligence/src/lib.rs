//! Categorization and learning recommendations for tracked skills.
//!
//! This crate provides:
//! - The skill data model shared with the skills REST API
//! - Keyword-based categorization of skill text into a fixed taxonomy
//! - Rule-based recommendations of what to learn next
//! - Learning paths, progress, aggregate statistics and filtering
//! - A per-day timeline of logged study sessions
//!
//! Everything here is a pure function of its inputs. The lookup tables are
//! `static` data, so all entry points are safe to call from any thread.

pub mod activity;
pub mod categorize;
pub mod filter;
pub mod path;
pub mod recommend;
pub mod skill;
pub mod stats;
mod types;

#[cfg(test)]
mod test_support;

pub use activity::{activities_for_skill, timeline, Activity, TimelineDay};
pub use categorize::{classify, suggest_category, Category, ClassificationResult, SUGGESTION_THRESHOLD};
pub use filter::SkillFilter;
pub use path::{learning_path, path_for_category};
pub use recommend::{
    recommend, summarize_recommendations, LearningPreferences, Recommendation,
    RecommendationSource, MAX_RECOMMENDATIONS,
};
pub use skill::{Difficulty, Platform, ResourceType, Skill, SkillStatus};
pub use stats::SkillStats;
pub use types::{Confidence, ParseEnumError};
