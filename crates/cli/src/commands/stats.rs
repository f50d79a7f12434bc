//! CLI handler for the `stats` command.

use super::{load_skills, print_json};
use anyhow::Result;
use skillstack_intelligence::{SkillFilter, SkillStats};
use skillstack_state::{load_settings, resolve_format, OutputFormat};
use std::path::PathBuf;

/// Handle the `stats` command.
pub(crate) fn handle_stats_command(
    skills_file: Option<PathBuf>,
    filter: SkillFilter,
    format: Option<OutputFormat>,
) -> Result<()> {
    let skills = load_skills(skills_file)?;
    let selected = filter.apply(&skills);
    tracing::debug!(
        total = skills.len(),
        selected = selected.len(),
        filtered = !filter.is_empty(),
        "filtered skills catalog"
    );
    let stats = SkillStats::from_skills(selected);

    match resolve_format(format, &load_settings) {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Text => {
            print_stats_human(&stats);
            Ok(())
        }
    }
}

fn print_stats_human(stats: &SkillStats) {
    println!("Skill Statistics");
    println!("================\n");
    println!("Total skills:     {}", stats.total_skills);
    println!("Completed:        {}", stats.completed_skills);
    println!("In progress:      {}", stats.in_progress_skills);
    println!("Completion rate:  {:.2}%", stats.completion_rate);
    println!("Hours logged:     {:.2}", stats.total_hours);

    if !stats.platform_breakdown.is_empty() {
        println!("\nBy platform:");
        for (platform, count) in &stats.platform_breakdown {
            println!("  {}: {}", platform, count);
        }
    }

    if !stats.status_breakdown.is_empty() {
        println!("\nBy status:");
        for (status, count) in &stats.status_breakdown {
            println!("  {}: {}", status, count);
        }
    }

    if !stats.difficulty_breakdown.is_empty() {
        println!("\nBy difficulty:");
        for (difficulty, count) in &stats.difficulty_breakdown {
            println!("  {}: {}", difficulty, count);
        }
    }
}
