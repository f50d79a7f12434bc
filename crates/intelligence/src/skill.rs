//! Tracked skills and their enumerated attributes.
//!
//! Field names and wire values match the skills REST API, so a `GET /skills/`
//! export deserializes directly into [`Skill`].

use crate::categorize::{classify, ClassificationResult};
use crate::types::{parse_variant, ParseEnumError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Learning platform a skill is studied on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Udemy,
    Youtube,
    Coursera,
    Edx,
    Linkedin,
    Pluralsight,
    Codecademy,
    Freecodecamp,
    Other,
}

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 9] = [
        Self::Udemy,
        Self::Youtube,
        Self::Coursera,
        Self::Edx,
        Self::Linkedin,
        Self::Pluralsight,
        Self::Codecademy,
        Self::Freecodecamp,
        Self::Other,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Udemy => "udemy",
            Self::Youtube => "youtube",
            Self::Coursera => "coursera",
            Self::Edx => "edx",
            Self::Linkedin => "linkedin",
            Self::Pluralsight => "pluralsight",
            Self::Codecademy => "codecademy",
            Self::Freecodecamp => "freecodecamp",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Udemy => "Udemy",
            Self::Youtube => "YouTube",
            Self::Coursera => "Coursera",
            Self::Edx => "edX",
            Self::Linkedin => "LinkedIn Learning",
            Self::Pluralsight => "Pluralsight",
            Self::Codecademy => "Codecademy",
            Self::Freecodecamp => "FreeCodeCamp",
            Self::Other => "Other",
        }
    }
}

/// Format of a learning resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    #[default]
    Course,
    Article,
    Book,
    Tutorial,
    Certification,
}

impl ResourceType {
    /// Every resource type, in declaration order.
    pub const ALL: [ResourceType; 6] = [
        Self::Video,
        Self::Course,
        Self::Article,
        Self::Book,
        Self::Tutorial,
        Self::Certification,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Course => "course",
            Self::Article => "article",
            Self::Book => "book",
            Self::Tutorial => "tutorial",
            Self::Certification => "certification",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Course => "Course",
            Self::Article => "Article",
            Self::Book => "Book",
            Self::Tutorial => "Tutorial",
            Self::Certification => "Certification",
        }
    }
}

/// Where a skill stands in the learning lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

impl SkillStatus {
    /// Every status, in declaration order.
    pub const ALL: [SkillStatus; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Paused,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Paused => "Paused",
        }
    }
}

/// Self-assessed difficulty, serialized as its integer level (1-4).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    #[default]
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ParseEnumError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Advanced),
            4 => Ok(Self::Expert),
            other => Err(ParseEnumError {
                kind: "difficulty",
                value: other.to_string(),
                expected: "1, 2, 3, 4".to_string(),
            }),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d as u8
    }
}

impl FromStr for Platform {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("platform", &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for ResourceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("resource type", &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for SkillStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("status", &Self::ALL, Self::as_str, s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked learning resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Backend primary key, when the skill came from the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated tags.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub status: SkillStatus,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub resource_url: String,
    #[serde(default)]
    pub estimated_hours: u32,
    #[serde(default, deserialize_with = "deserialize_hours")]
    pub hours_spent: f64,
    #[serde(default)]
    pub notes: String,
}

impl Skill {
    /// Create a skill with the given name and default attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Classify this skill on its name, description and tags.
    pub fn classify(&self) -> ClassificationResult {
        classify(&self.name, Some(&self.description), Some(&self.tags))
    }

    /// Progress towards completion as a percentage.
    ///
    /// With an estimate, this is hours spent over estimated hours (capped at
    /// 100). Without one it falls back to the status: 0 before starting,
    /// 100 once completed, 50 otherwise.
    pub fn progress_percentage(&self) -> f64 {
        if self.estimated_hours > 0 {
            return (self.hours_spent / f64::from(self.estimated_hours) * 100.0).min(100.0);
        }
        match self.status {
            SkillStatus::NotStarted => 0.0,
            SkillStatus::Completed => 100.0,
            SkillStatus::InProgress | SkillStatus::Paused => 50.0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == SkillStatus::Completed
    }
}

/// Decimal fields arrive either as JSON numbers or as strings like `"12.50"`.
pub(crate) fn deserialize_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hours {
        Number(f64),
        Text(String),
    }

    match Hours::deserialize(deserializer)? {
        Hours::Number(n) => Ok(n),
        Hours::Text(s) if s.trim().is_empty() => Ok(0.0),
        Hours::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
