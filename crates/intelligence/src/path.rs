//! Suggested learning paths per category.

use crate::categorize::{classify, Category};

const FRONTEND_PATH: &[&str] = &[
    "HTML & CSS Basics",
    "JavaScript Fundamentals",
    "React.js",
    "Advanced React",
    "Testing & Deployment",
];

const BACKEND_PATH: &[&str] = &[
    "Programming Language Basics",
    "Database Fundamentals",
    "API Development",
    "Authentication & Security",
    "Deployment & DevOps",
];

const DATA_SCIENCE_PATH: &[&str] = &[
    "Python/R Basics",
    "Statistics & Math",
    "Data Manipulation",
    "Data Visualization",
    "Machine Learning",
];

const GENERIC_PATH: &[&str] = &[
    "Fundamentals",
    "Intermediate Concepts",
    "Advanced Topics",
    "Real-world Projects",
    "Best Practices",
];

/// Ordered milestones for a category.
pub fn path_for_category(category: Category) -> &'static [&'static str] {
    match category {
        Category::FrontendDevelopment => FRONTEND_PATH,
        Category::BackendDevelopment => BACKEND_PATH,
        Category::DataScience => DATA_SCIENCE_PATH,
        _ => GENERIC_PATH,
    }
}

/// Ordered milestones for a skill, classified on its name and description.
pub fn learning_path(name: &str, description: Option<&str>) -> &'static [&'static str] {
    path_for_category(classify(name, description, None).category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_path() {
        assert_eq!(learning_path("Tailwind CSS", None)[0], "HTML & CSS Basics");
    }

    #[test]
    fn test_data_science_path() {
        let path = learning_path("Pandas and NumPy", Some("jupyter notebooks"));
        assert_eq!(path.last(), Some(&"Machine Learning"));
    }

    #[test]
    fn test_uncategorized_gets_generic_path() {
        assert_eq!(learning_path("Pottery", None), GENERIC_PATH);
        assert_eq!(path_for_category(Category::DevOpsCloud), GENERIC_PATH);
    }
}
