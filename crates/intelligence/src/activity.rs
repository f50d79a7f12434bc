//! Logged study sessions and the per-day timeline built from them.

use crate::skill::deserialize_hours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Time spent on a skill on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Id of the skill this session was logged against.
    pub skill: u64,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_hours")]
    pub hours_spent: f64,
    #[serde(default)]
    pub notes: String,
}

impl Activity {
    pub fn new(skill: u64, date: NaiveDate, hours_spent: f64) -> Self {
        Self {
            id: None,
            skill,
            date,
            hours_spent,
            notes: String::new(),
        }
    }
}

/// All activities logged on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub activities: Vec<Activity>,
}

/// Activities logged against `skill_id`, in their original order.
pub fn activities_for_skill(activities: &[Activity], skill_id: u64) -> Vec<&Activity> {
    activities.iter().filter(|a| a.skill == skill_id).collect()
}

/// Group activities by date, newest day first.
///
/// Activities within a day keep their input order.
pub fn timeline<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> Vec<TimelineDay> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Activity>> = BTreeMap::new();
    for activity in activities {
        by_date
            .entry(activity.date)
            .or_default()
            .push(activity.clone());
    }

    let days: Vec<TimelineDay> = by_date
        .into_iter()
        .rev()
        .map(|(date, activities)| TimelineDay {
            date,
            total_hours: activities.iter().map(|a| a.hours_spent).sum(),
            activities,
        })
        .collect();

    debug!(days = days.len(), "built activity timeline");
    days
}
