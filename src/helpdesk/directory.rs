use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::LookupError;
use super::normalize_key;

/// Account state of a directory user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Locked,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Locked => "locked",
        };
        f.write_str(s)
    }
}

/// A user as returned by `lookup_user`. `email` is always normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub department: String,
    pub status: UserStatus,
}

/// Read-only source of user records.
pub trait UserDirectory: Send + Sync {
    /// Find a user by an already-normalized email.
    fn find(&self, email: &str) -> Option<UserRecord>;
}

/// In-memory directory seeded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: HashMap<String, UserRecord>,
}

impl StaticDirectory {
    /// Build a directory from records. Emails are normalized; a later record
    /// with the same email replaces an earlier one.
    pub fn new(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|mut record| {
                record.email = normalize_key(&record.email);
                (record.email.clone(), record)
            })
            .collect();
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for StaticDirectory {
    fn find(&self, email: &str) -> Option<UserRecord> {
        self.users.get(email).cloned()
    }
}

/// Look up a user by email, ignoring case and surrounding whitespace.
pub fn lookup_user(directory: &dyn UserDirectory, email: &str) -> Result<UserRecord, LookupError> {
    let normalized = normalize_key(email);
    tracing::debug!(email = %normalized, "looking up user");
    directory
        .find(&normalized)
        .ok_or_else(|| LookupError::UserNotFound(email.to_string()))
}
