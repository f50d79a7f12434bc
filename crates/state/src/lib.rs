//! Configuration and input handling for skillstack.
//!
//! This crate provides utilities for:
//! - Reading environment variables and `config.toml` settings.
//! - Loading skill catalogs and activity logs exported from the skills API.

pub mod catalog;
pub mod env;

pub use catalog::{
    find_skill, load_activities, load_catalog, parse_activities, parse_catalog, skill_by_id,
};
pub use env::{
    config_file, env_activities_file, env_format, env_skills_file, home_dir, load_settings,
    resolve_activities_file, resolve_format, resolve_skills_file, OutputFormat, Settings,
};
