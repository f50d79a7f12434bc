//! Property and scenario tests for the classifier and recommender.

use proptest::prelude::*;
use skillstack_intelligence::{
    classify, recommend, Category, Platform, ResourceType, Skill, SkillStatus,
    MAX_RECOMMENDATIONS,
};
use skillstack_test_utils::{sample_skills, SkillBuilder};
use std::collections::HashSet;

const CONFIDENCE_STEPS: [f64; 4] = [0.0, 100.0 / 3.0, 200.0 / 3.0, 100.0];

fn arb_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "react", "docker", "python", "basics", "testing", "figma", "kanban", "pottery",
        "fundamentals", "introduction", "flutter", "sql", "test", "rust", "", "Java",
    ]);
    prop::collection::vec(words, 0..6).prop_map(|w| w.join(" "))
}

fn arb_status() -> impl Strategy<Value = SkillStatus> {
    prop::sample::select(SkillStatus::ALL.to_vec())
}

fn arb_skill() -> impl Strategy<Value = Skill> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        prop::sample::select(Platform::ALL.to_vec()),
        prop::sample::select(ResourceType::ALL.to_vec()),
        arb_status(),
    )
        .prop_map(|(name, description, tags, platform, resource_type, status)| Skill {
            description,
            tags,
            platform,
            resource_type,
            status,
            ..Skill::new(name)
        })
}

proptest! {
    #[test]
    fn confidence_is_a_fixed_step(name in ".{0,40}", description in arb_text(), tags in arb_text()) {
        let result = classify(&name, Some(&description), Some(&tags));
        let value = result.confidence.value();
        prop_assert!((0.0..=100.0).contains(&value));
        prop_assert!(CONFIDENCE_STEPS.iter().any(|step| (step - value).abs() < 1e-9));
        if value == 0.0 {
            prop_assert_eq!(result.category, Category::General);
        }
    }

    #[test]
    fn recommendations_are_unique_and_capped(
        skills in prop::collection::vec(arb_skill(), 0..8),
        current in prop::option::of(arb_skill()),
    ) {
        let recs = recommend(&skills, current.as_ref());
        prop_assert!(recs.len() <= MAX_RECOMMENDATIONS);
        let names: HashSet<_> = recs.iter().map(|r| r.name.as_str()).collect();
        prop_assert_eq!(names.len(), recs.len());
        if skills.is_empty() {
            prop_assert!(recs.is_empty());
        } else {
            prop_assert!(!recs.is_empty());
        }
    }

    #[test]
    fn recommend_is_deterministic(skills in prop::collection::vec(arb_skill(), 0..6)) {
        prop_assert_eq!(recommend(&skills, None), recommend(&skills, None));
    }
}

#[test]
fn completed_fundamentals_yield_testing_and_advanced_suggestions() {
    let skills = vec![SkillBuilder::new("JavaScript Fundamentals")
        .description("DOM manipulation in the browser")
        .completed()
        .build()];

    let recs = recommend(&skills, None);
    let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Advanced Frontend Development",
            "Testing & Quality Assurance",
            "Backend Development Fundamentals",
            "Design & Creative Fundamentals",
        ]
    );
}

#[test]
fn bare_javascript_fundamentals_is_not_a_development_skill() {
    // "java" also matches inside "javascript", tipping the text towards
    // Programming Languages.
    let skills = vec![SkillBuilder::new("JavaScript Fundamentals").completed().build()];
    let recs = recommend(&skills, None);
    assert!(recs.iter().all(|r| r.name != "Testing & Quality Assurance"));
    assert_eq!(recs[0].name, "Advanced Programming Languages");
}

#[test]
fn all_three_strategies_fill_six_slots() {
    let skills = vec![
        SkillBuilder::new("Flutter basics").completed().build(),
        SkillBuilder::new("Swift for iOS").build(),
    ];
    let current = SkillBuilder::new("Django REST").build();

    let recs = recommend(&skills, Some(&current));
    let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "RESTful API Design",
            "Database Design Patterns",
            "Advanced Mobile Development",
            "Testing & Quality Assurance",
            "Design & Creative Fundamentals",
            "Backend Development Fundamentals",
        ]
    );
}

#[test]
fn sample_collection_prefers_youtube_videos() {
    let recs = recommend(&sample_skills(), None);
    assert!(recs.iter().all(|r| r.platform == Platform::Youtube));
    assert!(recs.iter().all(|r| r.resource_type == ResourceType::Video));
}
