//! Keyword-based categorization of free-text skill descriptions.
//!
//! Matching is plain substring search over the lowercased text, so a keyword
//! also hits inside longer words ("java" matches "javascript").

mod keywords;

use crate::types::{parse_variant, Confidence, ParseEnumError};
use keywords::CATEGORY_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Minimum confidence (exclusive) before a category is offered to the user.
pub const SUGGESTION_THRESHOLD: f64 = 30.0;

/// Names this short are still being typed and never get a suggestion.
const MIN_SUGGESTION_NAME_LEN: usize = 3;

/// Fixed skill taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Frontend Development")]
    FrontendDevelopment,
    #[serde(rename = "Backend Development")]
    BackendDevelopment,
    #[serde(rename = "Database & Storage")]
    DatabaseStorage,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "DevOps & Cloud")]
    DevOpsCloud,
    #[serde(rename = "Data Science & Analytics")]
    DataScience,
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Testing & Quality")]
    TestingQuality,
    #[serde(rename = "Design & Creative")]
    DesignCreative,
    #[serde(rename = "Business & Management")]
    BusinessManagement,
    /// Fallback when no keyword matches.
    #[default]
    General,
}

impl Category {
    /// Every category in table order, `General` last.
    pub const ALL: [Category; 11] = [
        Self::FrontendDevelopment,
        Self::BackendDevelopment,
        Self::DatabaseStorage,
        Self::MobileDevelopment,
        Self::DevOpsCloud,
        Self::DataScience,
        Self::ProgrammingLanguages,
        Self::TestingQuality,
        Self::DesignCreative,
        Self::BusinessManagement,
        Self::General,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::FrontendDevelopment => "Frontend Development",
            Self::BackendDevelopment => "Backend Development",
            Self::DatabaseStorage => "Database & Storage",
            Self::MobileDevelopment => "Mobile Development",
            Self::DevOpsCloud => "DevOps & Cloud",
            Self::DataScience => "Data Science & Analytics",
            Self::ProgrammingLanguages => "Programming Languages",
            Self::TestingQuality => "Testing & Quality",
            Self::DesignCreative => "Design & Creative",
            Self::BusinessManagement => "Business & Management",
            Self::General => "General",
        }
    }

    /// Whether this is one of the "... Development" categories.
    pub fn is_development(self) -> bool {
        self.label().contains("Development")
    }

    /// Keywords that vote for this category. Empty for `General`.
    pub fn keywords(self) -> &'static [&'static str] {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("category", &Self::ALL, Self::label, s)
    }
}

/// Best-guess category for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: Confidence,
}

/// Classify a skill from its name, description and tags.
///
/// Each category scores one point per keyword found in the combined text.
/// The strictly highest score wins, earlier categories win ties, and no
/// hits at all yields `General` with zero confidence.
///
/// ```
/// use skillstack_intelligence::{classify, Category};
///
/// let result = classify("Docker and Kubernetes on AWS", None, None);
/// assert_eq!(result.category, Category::DevOpsCloud);
/// assert_eq!(result.confidence.value(), 100.0);
/// ```
pub fn classify(name: &str, description: Option<&str>, tags: Option<&str>) -> ClassificationResult {
    let text = format!(
        "{} {} {}",
        name,
        description.unwrap_or_default(),
        tags.unwrap_or_default()
    )
    .to_lowercase();

    let mut best = Category::General;
    let mut max_matches = 0;

    for (category, keywords) in CATEGORY_KEYWORDS {
        let matches = keywords.iter().filter(|kw| text.contains(*kw)).count();
        if matches > max_matches {
            max_matches = matches;
            best = *category;
        }
    }

    trace!(skill = name, category = %best, matches = max_matches, "classified skill text");

    ClassificationResult {
        category: best,
        confidence: Confidence::from_matches(max_matches),
    }
}

/// Category to offer while a skill is being entered, if one is convincing.
///
/// Returns `None` until the name is at least three characters and the
/// confidence is above [`SUGGESTION_THRESHOLD`].
pub fn suggest_category(
    name: &str,
    description: Option<&str>,
    tags: Option<&str>,
) -> Option<ClassificationResult> {
    if name.chars().count() < MIN_SUGGESTION_NAME_LEN {
        return None;
    }
    let result = classify(name, description, tags);
    (result.confidence.value() > SUGGESTION_THRESHOLD).then_some(result)
}
