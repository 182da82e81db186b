//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment variables;
//! the binaries read them once and hand the values in here.

use crate::scoring::ScoringPolicy;
use crate::{CoreError, CoreResult};
use roster::Roster;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    roster_file: Option<PathBuf>,
    policy: ScoringPolicy,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `roster_file` is given but is not a regular file.
    pub fn new(roster_file: Option<PathBuf>, policy: ScoringPolicy) -> CoreResult<Self> {
        if let Some(path) = &roster_file {
            if !path.is_file() {
                return Err(CoreError::InvalidInput(format!(
                    "roster file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(Self {
            roster_file,
            policy,
        })
    }

    /// The configured roster file, or `None` when the built-in sample roster is used.
    pub fn roster_file(&self) -> Option<&Path> {
        self.roster_file.as_deref()
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Load and validate the configured roster.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Roster`] if the roster file cannot be read or fails validation.
    pub fn load_roster(&self) -> CoreResult<Roster> {
        let roster = match &self.roster_file {
            Some(path) => Roster::load(path)?,
            None => Roster::sample()?,
        };

        match &self.roster_file {
            Some(path) => tracing::info!(
                "loaded {} doctors from roster file {}",
                roster.len(),
                path.display()
            ),
            None => tracing::info!("loaded {} doctors from built-in sample roster", roster.len()),
        }

        Ok(roster)
    }
}

/// Parse the roster file override from an optional environment value.
///
/// `None` or an empty/whitespace value selects the built-in sample roster.
pub fn roster_file_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
