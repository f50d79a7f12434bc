//! Command plumbing for the `skillstack` binary.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::{
    handle_categorize_command, handle_path_command, handle_recommend_command,
    handle_stats_command, handle_timeline_command,
};
use skillstack_intelligence::SkillFilter;

/// The main entry point for the `skillstack` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categorize {
            name,
            description,
            tags,
            format,
        } => handle_categorize_command(name, description, tags, format),
        Commands::Recommend {
            skills_file,
            current,
            format,
        } => handle_recommend_command(skills_file, current, format),
        Commands::Path {
            name,
            description,
            format,
        } => handle_path_command(name, description, format),
        Commands::Stats {
            skills_file,
            status,
            platform,
            resource_type,
            search,
            format,
        } => {
            let filter = SkillFilter {
                status,
                platform,
                resource_type,
                search,
            };
            handle_stats_command(skills_file, filter, format)
        }
        Commands::Timeline {
            activities_file,
            skills_file,
            skill,
            format,
        } => handle_timeline_command(activities_file, skills_file, skill, format),
    }
}
