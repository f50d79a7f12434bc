//! CLI handler for the `timeline` command.

use super::print_json;
use anyhow::Result;
use skillstack_intelligence::{activities_for_skill, timeline, Skill, TimelineDay};
use skillstack_state::{
    load_activities, load_catalog, load_settings, resolve_activities_file, resolve_format,
    resolve_skills_file, skill_by_id, OutputFormat,
};
use std::path::PathBuf;

/// Handle the `timeline` command.
///
/// The skills catalog is optional here; without one every session is shown
/// under "Unknown Skill".
pub(crate) fn handle_timeline_command(
    activities_file: Option<PathBuf>,
    skills_file: Option<PathBuf>,
    skill: Option<u64>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let activities = load_activities(&resolve_activities_file(activities_file, &load_settings)?)?;
    let skills = match resolve_skills_file(skills_file, &load_settings) {
        Ok(path) => load_catalog(&path)?,
        Err(err) => {
            tracing::debug!(error = %err, "no skills catalog; timeline shows skill ids only");
            Vec::new()
        }
    };

    let days = match skill {
        Some(id) => timeline(activities_for_skill(&activities, id)),
        None => timeline(&activities),
    };

    match resolve_format(format, &load_settings) {
        OutputFormat::Json => print_json(&days),
        OutputFormat::Text => {
            print_timeline_human(&days, &skills);
            Ok(())
        }
    }
}

fn print_timeline_human(days: &[TimelineDay], skills: &[Skill]) {
    println!("Learning Timeline");
    println!("=================\n");

    if days.is_empty() {
        println!("No learning activities yet");
        return;
    }

    for day in days {
        println!(
            "{} ({:.1}h total)",
            day.date.format("%A, %B %-d, %Y"),
            day.total_hours
        );
        for activity in &day.activities {
            let skill = skill_by_id(skills, activity.skill);
            let name = skill.map_or("Unknown Skill", |s| s.name.as_str());
            println!("  {} - {}h", name, activity.hours_spent);
            if activity.notes.is_empty() {
                println!("    No notes provided");
            } else {
                println!("    {}", activity.notes);
            }
            if let Some(skill) = skill {
                println!(
                    "    {} / {}",
                    skill.platform.label(),
                    skill.resource_type.label()
                );
            }
        }
        println!();
    }
}
