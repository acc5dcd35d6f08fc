//! Profile Schema Types
//!
//! A profile fixes the wording of the mandatory questionnaire header.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

/// Root profile file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileFile {
    pub profile: ProfileMeta,
    pub header: HeaderSpec,
}

/// Profile metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Pieces of the required header line
///
/// The line reads `# <title> №<n> по проекту "<project>"`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeaderSpec {
    pub title: String,
    pub project: String,
}

/// Runtime profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub header: HeaderSpec,
}

impl From<ProfileFile> for Profile {
    fn from(file: ProfileFile) -> Self {
        Self {
            name: file.profile.name,
            version: file.profile.version,
            description: file.profile.description,
            header: file.header,
        }
    }
}

impl Profile {
    /// Parse a profile from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ProfileFile = toml::from_str(content).context("Failed to parse profile TOML")?;
        Ok(Self::from(file))
    }

    /// Copy of this profile with a different project name
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.header.project = project.into();
        self
    }

    /// Regex matching the whole required header line
    ///
    /// Capture group 1 holds the questionnaire number.
    pub fn header_regex(&self) -> Result<Regex> {
        let pattern = format!(
            r#"^# {} №([1-9][0-9]*) по проекту "{}"$"#,
            regex::escape(&self.header.title),
            regex::escape(&self.header.project)
        );
        Regex::new(&pattern)
            .with_context(|| format!("Invalid header pattern for profile '{}'", self.name))
    }

    /// Human readable form of the required header, used in error messages
    pub fn header_template(&self) -> String {
        format!(
            r#"# {} №<number> по проекту "{}""#,
            self.header.title, self.header.project
        )
    }
}
