use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::helpdesk::{ServiceState, StaticCatalog, StaticDirectory, UserRecord, UserStatus};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Seed data for the mock backend.
///
/// Built once at startup and handed to whatever needs it; nothing in the
/// crate keeps a global copy.
///
/// ```toml
/// [[users]]
/// email = "alice@example.com"
/// name = "Alice Johnson"
/// department = "Engineering"
/// status = "active"
///
/// [services]
/// email = "operational"
/// vpn = "degraded"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpdeskConfig {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub services: BTreeMap<String, ServiceState>,
}

impl Default for HelpdeskConfig {
    fn default() -> Self {
        let user = |email: &str, name: &str, department: &str, status| UserRecord {
            email: email.into(),
            name: name.into(),
            department: department.into(),
            status,
        };
        Self {
            users: vec![
                user("alice@example.com", "Alice Johnson", "Engineering", UserStatus::Active),
                user("bob@example.com", "Bob Smith", "Finance", UserStatus::Active),
                user("carol@example.com", "Carol Lee", "HR", UserStatus::Locked),
            ],
            services: BTreeMap::from([
                ("email".to_string(), ServiceState::Operational),
                ("vpn".to_string(), ServiceState::Degraded),
                ("gitlab".to_string(), ServiceState::Outage),
                ("wifi".to_string(), ServiceState::Operational),
            ]),
        }
    }
}

impl HelpdeskConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingConfig(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading helpdesk config");
        Self::from_toml_str(&raw)
    }

    /// Normalize keys and reject empty or duplicate entries.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for user in &mut self.users {
            user.email = user.email.trim().to_lowercase();
            if user.email.is_empty() {
                let msg = format!("user '{}' has an empty email", user.name);
                return Err(ConfigError::InvalidConfig(msg));
            }
            if !seen.insert(user.email.clone()) {
                let msg = format!("duplicate user email '{}'", user.email);
                return Err(ConfigError::InvalidConfig(msg));
            }
        }

        let mut services = BTreeMap::new();
        for (name, state) in self.services {
            let key = name.trim().to_lowercase();
            if key.is_empty() {
                return Err(ConfigError::InvalidConfig("empty service name".into()));
            }
            if services.insert(key, state).is_some() {
                return Err(ConfigError::InvalidConfig(format!("duplicate service '{name}'")));
            }
        }
        self.services = services;
        Ok(self)
    }

    pub fn directory(&self) -> StaticDirectory {
        StaticDirectory::new(self.users.iter().cloned())
    }

    pub fn catalog(&self) -> StaticCatalog {
        StaticCatalog::new(self.services.iter().map(|(name, state)| (name.clone(), *state)))
    }
}
