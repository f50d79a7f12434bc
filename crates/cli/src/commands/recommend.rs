//! CLI handler for the `recommend` command.

use super::{load_skills, print_json};
use anyhow::Result;
use serde::Serialize;
use skillstack_intelligence::{
    recommend, summarize_recommendations, LearningPreferences, Recommendation,
};
use skillstack_state::{find_skill, load_settings, resolve_format, OutputFormat};
use std::path::PathBuf;

#[derive(Serialize)]
struct RecommendOutput<'a> {
    current: Option<&'a str>,
    preferences: LearningPreferences,
    recommendations: Vec<Recommendation>,
}

/// Handle the `recommend` command.
pub(crate) fn handle_recommend_command(
    skills_file: Option<PathBuf>,
    current: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let skills = load_skills(skills_file)?;
    let format = resolve_format(format, &load_settings);

    if skills.is_empty() {
        match format {
            OutputFormat::Json => print_json(&Vec::<Recommendation>::new())?,
            OutputFormat::Text => println!("No skills found."),
        }
        return Ok(());
    }

    let current_skill = match current.as_deref() {
        Some(name) => match find_skill(&skills, name) {
            Some(skill) => Some(skill),
            None => {
                println!("Skill not found: {}", name);
                println!("\nAvailable skills:");
                for skill in skills.iter().take(10) {
                    println!("  {}", skill.name);
                }
                if skills.len() > 10 {
                    println!("  ... and {} more", skills.len() - 10);
                }
                return Ok(());
            }
        },
        None => None,
    };

    let recommendations = recommend(&skills, current_skill);
    tracing::debug!(count = recommendations.len(), "computed recommendations");

    let result = RecommendOutput {
        current: current_skill.map(|s| s.name.as_str()),
        preferences: LearningPreferences::from_skills(&skills),
        recommendations,
    };

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            let has_completed = skills.iter().any(|s| s.is_completed());
            print_recommendations_human(&result, has_completed);
        }
    }

    Ok(())
}

/// Print recommendations in human-readable format.
fn print_recommendations_human(result: &RecommendOutput<'_>, has_completed: bool) {
    println!("Skill Recommendations");
    println!("=====================\n");

    println!(
        "{}\n",
        summarize_recommendations(result.recommendations.len(), result.current, has_completed)
    );
    println!(
        "Preferences: {} on {}, mostly {}\n",
        result.preferences.resource_type.label(),
        result.preferences.platform.label(),
        result.preferences.top_category
    );

    for (i, rec) in result.recommendations.iter().enumerate() {
        println!("{}. {}", i + 1, rec.name);
        println!("   {}", rec.description);
        println!(
            "   {} ({}) - {}",
            rec.reason,
            rec.source.label(),
            rec.platform.label()
        );
    }
}
