use clap::{Parser, Subcommand};
use skillstack_intelligence::{Platform, ResourceType, SkillStatus};
use skillstack_state::OutputFormat;
use std::path::PathBuf;

/// Command-line interface for the `skillstack` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillstack",
    version,
    about = "Categorize tracked skills and recommend what to learn next"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skillstack` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggests a category for a skill from its name, description and tags.
    Categorize {
        /// Skill name.
        #[arg(required = true)]
        name: String,
        /// Free-text description.
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated tags.
        #[arg(long)]
        tags: Option<String>,
        /// Output format: text or json (overrides `SKILLSTACK_FORMAT`).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// Recommends skills to learn next from a skills catalog.
    Recommend {
        /// Skills catalog JSON (overrides `SKILLSTACK_SKILLS_FILE`).
        #[arg(long = "skills", value_name = "FILE")]
        skills_file: Option<PathBuf>,
        /// Name of the skill currently being viewed.
        #[arg(long, value_name = "NAME")]
        current: Option<String>,
        /// Output format: text or json (overrides `SKILLSTACK_FORMAT`).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// Shows the suggested learning path for a skill.
    Path {
        /// Skill name.
        #[arg(required = true)]
        name: String,
        /// Free-text description.
        #[arg(long)]
        description: Option<String>,
        /// Output format: text or json (overrides `SKILLSTACK_FORMAT`).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// Summarizes a skills catalog, optionally filtered.
    Stats {
        /// Skills catalog JSON (overrides `SKILLSTACK_SKILLS_FILE`).
        #[arg(long = "skills", value_name = "FILE")]
        skills_file: Option<PathBuf>,
        /// Only count skills with this status.
        #[arg(long)]
        status: Option<SkillStatus>,
        /// Only count skills on this platform.
        #[arg(long)]
        platform: Option<Platform>,
        /// Only count skills of this resource type.
        #[arg(long = "resource-type")]
        resource_type: Option<ResourceType>,
        /// Only count skills whose name, description or tags contain this text.
        #[arg(long)]
        search: Option<String>,
        /// Output format: text or json (overrides `SKILLSTACK_FORMAT`).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// Shows logged study sessions grouped by day, newest first.
    Timeline {
        /// Activity log JSON (overrides `SKILLSTACK_ACTIVITIES_FILE`).
        #[arg(long = "activities", value_name = "FILE")]
        activities_file: Option<PathBuf>,
        /// Skills catalog JSON used for skill names (overrides `SKILLSTACK_SKILLS_FILE`).
        #[arg(long = "skills", value_name = "FILE")]
        skills_file: Option<PathBuf>,
        /// Only show sessions logged against this skill id.
        #[arg(long, value_name = "ID")]
        skill: Option<u64>,
        /// Output format: text or json (overrides `SKILLSTACK_FORMAT`).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_stats_filters() {
        let cli = Cli::try_parse_from([
            "skillstack",
            "stats",
            "--skills",
            "s.json",
            "--status",
            "completed",
            "--platform",
            "youtube",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Stats {
                status,
                platform,
                format,
                ..
            } => {
                assert_eq!(status, Some(SkillStatus::Completed));
                assert_eq!(platform, Some(Platform::Youtube));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_timeline_skill_id() {
        let cli = Cli::try_parse_from(["skillstack", "timeline", "--skill", "4"]).unwrap();
        match cli.command {
            Commands::Timeline {
                skill,
                activities_file,
                ..
            } => {
                assert_eq!(skill, Some(4));
                assert_eq!(activities_file, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["skillstack", "timeline", "--skill", "react"]).is_err());
    }

    #[test]
    fn rejects_unknown_platform() {
        assert!(Cli::try_parse_from(["skillstack", "stats", "--platform", "myspace"]).is_err());
    }
}
