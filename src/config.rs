//! Configuration management for the questionnaire tools.
//!
//! Handles:
//! - Command-line argument parsing for both binaries
//! - Project configuration (`.questionnaire.toml`)
//! - Profile directories and profile selection

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, ValueEnum};
use serde::Deserialize;

use crate::profile::{Profile, ProfileRegistry};

/// File name of the per-project configuration
pub const PROJECT_CONFIG_FILE: &str = ".questionnaire.toml";

/// Profile selection options
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// Questionnaire profile to use
    #[arg(long, help = "Questionnaire profile to use (e.g., 'hse-announce')")]
    pub profile: Option<String>,

    /// Additional directory searched for profile files
    #[arg(long, help = "Directory containing profile TOML files")]
    pub profile_dir: Option<PathBuf>,
}

/// Output format of the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// Command-line arguments of the converter
#[derive(Debug, Clone, Parser)]
#[command(name = "qn-convert")]
#[command(about = "Convert a questionnaire markdown file to HTML")]
#[command(version)]
pub struct ConvertArgs {
    /// Questionnaire markdown file
    pub input: PathBuf,

    /// Output file
    pub output: PathBuf,

    /// Custom HTML template
    #[arg(long, help = "HTML template with {{ title }} and {{ blocks }} placeholders")]
    pub template: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Command-line arguments of the validator
#[derive(Debug, Clone, Parser)]
#[command(name = "qn-validate")]
#[command(about = "Check the structure of a questionnaire markdown file")]
#[command(version)]
pub struct ValidateArgs {
    /// Questionnaire markdown file
    pub file: PathBuf,

    /// Override the project name required in the header
    #[arg(long, help = "Project name required in the questionnaire header")]
    pub project: Option<String>,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of `.questionnaire.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub profile: Option<String>,
    pub template: Option<PathBuf>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile name explicitly set via command line
    pub cli_profile: Option<String>,
    /// Profile name from the project config
    pub project_profile: Option<String>,
    /// Path of the project config, if one was found
    pub project_config_path: Option<PathBuf>,
    /// User-global profile directory
    pub user_profile_dir: Option<PathBuf>,
    /// Workspace profile directories, lowest priority first
    pub workspace_profile_dirs: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from explicit arguments and working directory
    ///
    /// `user_profile_dir` is the user-global profile directory, usually
    /// `config::user_profile_dir()`. `None` disables user-global profiles.
    pub fn resolve(
        args: &ProfileArgs,
        workdir: &Path,
        user_profile_dir: Option<PathBuf>,
    ) -> Result<Self> {
        // Workspace directory: ./.questionnaire/profiles/, then --profile-dir
        let mut workspace_profile_dirs = vec![workdir.join(".questionnaire").join("profiles")];
        if let Some(custom_dir) = &args.profile_dir {
            workspace_profile_dirs.push(workdir.join(custom_dir));
        }

        let (project, project_config_path) = match ProjectConfig::discover(workdir)? {
            Some((project, path)) => (project, Some(path)),
            None => (ProjectConfig::default(), None),
        };

        Ok(Config {
            cli_profile: args.profile.clone(),
            project_profile: project.profile,
            project_config_path,
            user_profile_dir,
            workspace_profile_dirs,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }

    /// Load every profile visible from this configuration
    pub fn profile_registry(&self) -> Result<ProfileRegistry> {
        ProfileRegistry::load(
            self.user_profile_dir.as_deref(),
            &self.workspace_profile_dirs,
        )
    }

    /// Pick the profile: CLI > project config > built-in default
    pub fn select_profile(&self, registry: &ProfileRegistry) -> Result<Profile> {
        let candidates = self
            .cli_profile
            .iter()
            .chain(self.project_profile.iter())
            .map(String::as_str);

        let profile = registry
            .select(candidates)
            .context("No questionnaire profile available")?;
        log::debug!("Using profile '{}'", profile.name);
        Ok(profile.clone())
    }
}

impl ProjectConfig {
    /// Load `.questionnaire.toml` from `workdir` if it exists
    pub fn discover(workdir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let path = workdir.join(PROJECT_CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let config = Self::load(&path)?;
        Ok(Some((config, path)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }
}

/// User-global profile directory: `<config dir>/questionnaire/profiles`
pub fn user_profile_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("questionnaire").join("profiles"))
}

/// Initialize `env_logger`, `RUST_LOG` takes precedence over the given level
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
