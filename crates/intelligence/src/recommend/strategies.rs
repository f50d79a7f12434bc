//! The three suggestion strategies and their static tables.

use super::{explainer, Recommendation, RecommendationSource};
use crate::categorize::{classify, Category};
use crate::recommend::LearningPreferences;
use crate::skill::Skill;

/// How many related skills are taken from a category's list.
const RELATED_LIMIT: usize = 2;

/// Name fragments that mark an introductory skill.
const INTRODUCTORY_MARKERS: &[&str] = &["basic", "fundamentals", "introduction"];

const TESTING_SUGGESTION: (&str, &str) = (
    "Testing & Quality Assurance",
    "Learn to write tests for your applications",
);

const FRONTEND_RELATED: &[(&str, &str)] = &[
    (
        "Advanced React Patterns",
        "Learn advanced React patterns and hooks",
    ),
    (
        "TypeScript Fundamentals",
        "Add type safety to your JavaScript",
    ),
    (
        "Modern CSS Grid & Flexbox",
        "Master modern CSS layout techniques",
    ),
    ("JavaScript ES6+ Features", "Learn latest JavaScript features"),
    (
        "Web Performance Optimization",
        "Optimize web application performance",
    ),
];

const BACKEND_RELATED: &[(&str, &str)] = &[
    ("RESTful API Design", "Build scalable REST APIs"),
    ("Database Design Patterns", "Learn efficient database design"),
    ("Authentication & Security", "Implement secure authentication"),
    ("Microservices Architecture", "Build distributed systems"),
    ("Server Deployment & DevOps", "Deploy and manage servers"),
];

const DATA_SCIENCE_RELATED: &[(&str, &str)] = &[
    ("Machine Learning Fundamentals", "Introduction to ML algorithms"),
    (
        "Data Visualization with Python",
        "Create compelling data visualizations",
    ),
    ("Statistical Analysis", "Learn statistical methods for data"),
    ("Big Data Processing", "Work with large datasets"),
    ("Deep Learning Basics", "Introduction to neural networks"),
];

const MOBILE_RELATED: &[(&str, &str)] = &[
    (
        "Cross-Platform Development",
        "Build apps for multiple platforms",
    ),
    ("Mobile UI/UX Design", "Design great mobile interfaces"),
    ("App Store Optimization", "Optimize apps for app stores"),
    ("Mobile Performance", "Optimize mobile app performance"),
    ("Push Notifications", "Implement push notification systems"),
];

/// Related-skill list for `category`, falling back to the frontend list.
pub(crate) fn related_skills(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::FrontendDevelopment => FRONTEND_RELATED,
        Category::BackendDevelopment => BACKEND_RELATED,
        Category::DataScience => DATA_SCIENCE_RELATED,
        Category::MobileDevelopment => MOBILE_RELATED,
        _ => FRONTEND_RELATED,
    }
}

/// Categories that round out `category`, defaulting to Programming Languages.
pub(crate) fn complementary_categories(category: Category) -> &'static [Category] {
    use Category::*;
    match category {
        FrontendDevelopment => &[BackendDevelopment, DesignCreative],
        BackendDevelopment => &[DatabaseStorage, DevOpsCloud],
        DataScience => &[ProgrammingLanguages, DatabaseStorage],
        MobileDevelopment => &[DesignCreative, BackendDevelopment],
        DevOpsCloud => &[BackendDevelopment, DatabaseStorage],
        DesignCreative => &[FrontendDevelopment, BusinessManagement],
        _ => &[ProgrammingLanguages],
    }
}

/// Skills related to the one currently being viewed.
pub(crate) fn related_to_current(
    current: &Skill,
    prefs: &LearningPreferences,
) -> Vec<Recommendation> {
    let category = current.classify().category;
    related_skills(category)
        .iter()
        .take(RELATED_LIMIT)
        .map(|(name, description)| {
            Recommendation::new(
                *name,
                *description,
                prefs,
                explainer::related_reason(category),
                RecommendationSource::Related,
            )
        })
        .collect()
}

/// Next steps implied by what the user has already completed.
pub(crate) fn progression(completed: &[&Skill], prefs: &LearningPreferences) -> Vec<Recommendation> {
    let mut suggestions = Vec::new();
    let top = prefs.top_category;

    let has_introductory = completed.iter().any(|skill| {
        let name = skill.name.to_lowercase();
        INTRODUCTORY_MARKERS.iter().any(|marker| name.contains(marker))
    });
    if has_introductory {
        suggestions.push(Recommendation::new(
            format!("Advanced {top}"),
            format!("Take your {top} skills to the next level"),
            prefs,
            explainer::NEXT_LEVEL_REASON,
            RecommendationSource::Progression,
        ));
    }

    // Tags are left out of this check.
    let has_development = completed.iter().any(|skill| {
        classify(&skill.name, Some(&skill.description), None)
            .category
            .is_development()
    });
    let has_testing = completed
        .iter()
        .any(|skill| skill.name.to_lowercase().contains("test"));
    if has_development && !has_testing {
        let (name, description) = TESTING_SUGGESTION;
        suggestions.push(Recommendation::new(
            name,
            description,
            prefs,
            explainer::ESSENTIAL_DEVELOPMENT_REASON,
            RecommendationSource::Progression,
        ));
    }

    suggestions
}

/// Fundamentals of the categories that pair with the user's top category.
pub(crate) fn complementary(prefs: &LearningPreferences) -> Vec<Recommendation> {
    let top = prefs.top_category;
    complementary_categories(top)
        .iter()
        .map(|category| {
            Recommendation::new(
                format!("{category} Fundamentals"),
                format!("Complement your {top} skills with {category}"),
                prefs,
                explainer::complements_reason(top),
                RecommendationSource::Complementary,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{Platform, ResourceType};
    use crate::test_support::{completed, skill};

    fn prefs(top_category: Category) -> LearningPreferences {
        LearningPreferences {
            platform: Platform::Youtube,
            resource_type: ResourceType::Video,
            top_category,
        }
    }

    #[test]
    fn test_related_takes_first_two_with_preferences() {
        let recs = related_to_current(&skill("Django REST framework"), &prefs(Category::General));
        let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["RESTful API Design", "Database Design Patterns"]);
        assert!(recs.iter().all(|r| r.platform == Platform::Youtube));
        assert!(recs.iter().all(|r| r.resource_type == ResourceType::Video));
        assert_eq!(recs[0].reason, "Related to your Backend Development skills");
    }

    #[test]
    fn test_related_falls_back_to_frontend_list_but_keeps_category_in_reason() {
        let recs = related_to_current(&skill("Kanban"), &prefs(Category::General));
        assert_eq!(recs[0].name, "Advanced React Patterns");
        assert_eq!(recs[0].reason, "Related to your Business & Management skills");
    }

    #[test]
    fn test_every_related_list_has_five_entries() {
        for category in Category::ALL {
            assert_eq!(related_skills(category).len(), 5);
        }
    }

    #[test]
    fn test_progression_suggests_advanced_after_introductory_skill() {
        let done = completed("Introduction to Pottery", "");
        let recs = progression(&[&done], &prefs(Category::DesignCreative));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Advanced Design & Creative");
        assert_eq!(
            recs[0].description,
            "Take your Design & Creative skills to the next level"
        );
        assert_eq!(recs[0].reason, "Next level progression");
    }

    #[test]
    fn test_progression_suggests_testing_for_development_skills() {
        let done = completed("Vue components", "");
        let recs = progression(&[&done], &prefs(Category::FrontendDevelopment));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Testing & Quality Assurance");
        assert_eq!(recs[0].reason, "Essential development skill");
    }

    #[test]
    fn test_progression_skips_testing_when_already_tested() {
        let dev = completed("Vue components", "");
        let tested = completed("Unit Testing Vue", "");
        let recs = progression(&[&dev, &tested], &prefs(Category::FrontendDevelopment));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_progression_ignores_tags_for_development_check() {
        let mut done = completed("Week one", "");
        done.tags = "react, vue, angular".to_string();
        assert!(progression(&[&done], &prefs(Category::General)).is_empty());
    }

    #[test]
    fn test_complementary_uses_table() {
        let recs = complementary(&prefs(Category::FrontendDevelopment));
        let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Backend Development Fundamentals",
                "Design & Creative Fundamentals"
            ]
        );
        assert_eq!(recs[0].reason, "Complements Frontend Development");
        assert_eq!(
            recs[1].description,
            "Complement your Frontend Development skills with Design & Creative"
        );
    }

    #[test]
    fn test_complementary_defaults_to_programming_languages() {
        let recs = complementary(&prefs(Category::General));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Programming Languages Fundamentals");
        assert_eq!(recs[0].reason, "Complements General");
    }
}
