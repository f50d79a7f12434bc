//! Human-readable reasons attached to recommendations.

use crate::categorize::Category;

pub(crate) const NEXT_LEVEL_REASON: &str = "Next level progression";
pub(crate) const ESSENTIAL_DEVELOPMENT_REASON: &str = "Essential development skill";

pub(crate) fn related_reason(category: Category) -> String {
    format!("Related to your {category} skills")
}

pub(crate) fn complements_reason(top_category: Category) -> String {
    format!("Complements {top_category}")
}

/// Generate a one-line summary of a recommendation run.
pub fn summarize_recommendations(count: usize, current: Option<&str>, has_completed: bool) -> String {
    let mut parts = Vec::new();

    parts.push(match count {
        1 => "Found 1 recommendation".to_string(),
        n => format!("Found {n} recommendations"),
    });

    if let Some(name) = current {
        parts.push(format!("related to \"{name}\""));
    }

    if has_completed {
        parts.push("including next steps from completed skills".to_string());
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons() {
        assert_eq!(
            related_reason(Category::MobileDevelopment),
            "Related to your Mobile Development skills"
        );
        assert_eq!(complements_reason(Category::General), "Complements General");
    }

    #[test]
    fn test_summarize() {
        assert_eq!(
            summarize_recommendations(4, Some("Flutter"), true),
            "Found 4 recommendations, related to \"Flutter\", including next steps from completed skills"
        );
        assert_eq!(
            summarize_recommendations(1, None, false),
            "Found 1 recommendation"
        );
    }
}
