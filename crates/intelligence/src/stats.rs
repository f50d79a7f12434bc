//! Aggregate statistics over a skill collection.

use crate::skill::{Difficulty, Platform, Skill, SkillStatus};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dashboard summary of a skill collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillStats {
    pub total_skills: usize,
    pub completed_skills: usize,
    pub in_progress_skills: usize,
    /// Percentage of skills completed, rounded to two decimals.
    pub completion_rate: f64,
    pub total_hours: f64,
    /// Platform label to count, non-zero entries only.
    pub platform_breakdown: IndexMap<String, usize>,
    /// Status label to count, non-zero entries only.
    pub status_breakdown: IndexMap<String, usize>,
    /// Difficulty label to count, non-zero entries only.
    pub difficulty_breakdown: IndexMap<String, usize>,
}

impl SkillStats {
    pub fn from_skills<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> Self {
        let skills: Vec<&Skill> = skills.into_iter().collect();
        let total_skills = skills.len();
        let count_status =
            |status: SkillStatus| skills.iter().filter(|s| s.status == status).count();

        let completed_skills = count_status(SkillStatus::Completed);
        let in_progress_skills = count_status(SkillStatus::InProgress);
        let total_hours = skills.iter().map(|s| s.hours_spent).sum();

        let completion_rate = if total_skills > 0 {
            round2(completed_skills as f64 / total_skills as f64 * 100.0)
        } else {
            0.0
        };

        let platform_breakdown = Platform::ALL
            .into_iter()
            .map(|p| (p.label().to_string(), skills.iter().filter(|s| s.platform == p).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        let status_breakdown = SkillStatus::ALL
            .into_iter()
            .map(|st| (st.label().to_string(), count_status(st)))
            .filter(|(_, count)| *count > 0)
            .collect();

        let difficulty_breakdown = Difficulty::ALL
            .into_iter()
            .map(|d| (d.label().to_string(), skills.iter().filter(|s| s.difficulty == d).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            total_skills,
            completed_skills,
            in_progress_skills,
            completion_rate,
            total_hours,
            platform_breakdown,
            status_breakdown,
            difficulty_breakdown,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
