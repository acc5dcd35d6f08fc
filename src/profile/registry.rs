//! Profile Registry
//!
//! In-memory registry filled from the embedded profile and from profile
//! directories. Loading priority: built-in < user-global < workspace.

use super::schema::Profile;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the embedded default profile
pub const DEFAULT_PROFILE: &str = "hse-announce";

const EMBEDDED_PROFILE: &str = include_str!("../../resources/profiles/hse-announce.toml");

/// Where a profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfilePriority {
    BuiltIn = 0,
    UserGlobal = 1,
    Workspace = 2,
}

/// A loaded profile with its source and priority
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub priority: ProfilePriority,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, LoadedProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the embedded profile
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.add_builtin_profile()?;
        Ok(registry)
    }

    /// Registry with the embedded profile and every profile directory
    pub fn load(user_dir: Option<&Path>, workspace_dirs: &[PathBuf]) -> Result<Self> {
        let mut registry = Self::with_builtin()?;

        if let Some(dir) = user_dir {
            registry.load_directory(dir, ProfilePriority::UserGlobal)?;
        }
        for dir in workspace_dirs {
            registry.load_directory(dir, ProfilePriority::Workspace)?;
        }

        log::debug!("Loaded {} questionnaire profiles", registry.profiles.len());
        Ok(registry)
    }

    /// Add the profile embedded in the binary
    pub fn add_builtin_profile(&mut self) -> Result<()> {
        let profile =
            Profile::from_toml(EMBEDDED_PROFILE).context("Failed to parse built-in profile")?;
        self.insert(profile, ProfilePriority::BuiltIn, None);
        Ok(())
    }

    /// Insert a profile unless one with a higher priority is already known
    pub fn insert(
        &mut self,
        profile: Profile,
        priority: ProfilePriority,
        source_path: Option<PathBuf>,
    ) -> bool {
        let should_load = match self.profiles.get(&profile.name) {
            Some(existing) => priority >= existing.priority,
            None => true,
        };

        if should_load {
            self.profiles.insert(
                profile.name.clone(),
                LoadedProfile {
                    profile,
                    priority,
                    source_path,
                },
            );
        }
        should_load
    }

    /// Load every `*.toml` file of a directory
    ///
    /// A missing directory is not an error. Broken files are logged and
    /// skipped so one bad profile does not hide the others.
    pub fn load_directory(&mut self, dir: &Path, priority: ProfilePriority) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read profile directory: {}", dir.display()))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("toml"))
            .collect();
        paths.sort();

        for path in paths {
            if let Err(e) = self.load_file(&path, priority) {
                log::warn!("Skipping profile file {}: {:#}", path.display(), e);
            }
        }

        Ok(())
    }

    /// Load a single profile file
    pub fn load_file(&mut self, path: &Path, priority: ProfilePriority) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        let profile = Profile::from_toml(&content)
            .with_context(|| format!("Failed to parse profile file: {}", path.display()))?;

        log::debug!("Loaded profile '{}' from {}", profile.name, path.display());
        self.insert(profile, priority, Some(path.to_path_buf()));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&LoadedProfile> {
        self.profiles.get(name)
    }

    /// List all available profile names, sorted
    pub fn list_profiles(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Pick the first known profile among the candidates, else the default
    ///
    /// Candidates are given highest priority first (CLI, then project
    /// config). Unknown names are logged and skipped.
    pub fn select<'a, I>(&self, candidates: I) -> Option<&Profile>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in candidates {
            if let Some(loaded) = self.profiles.get(name) {
                return Some(&loaded.profile);
            }
            log::warn!("Profile '{}' not found, falling back", name);
        }

        self.profiles.get(DEFAULT_PROFILE).map(|l| &l.profile)
    }
}
