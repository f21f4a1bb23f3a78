use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::error::ValidationError;
use super::normalize_key;

/// Impact level of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Severity {
    type Err = ValidationError;

    /// Exact match only; `"High"` and `" high "` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::InvalidSeverity(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Where a ticket is in the helpdesk workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

/// An IT helpdesk ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Human-readable id, e.g. `IT-1A2B3C4D`.
    pub ticket_id: String,
    pub summary: String,
    /// Affected service, lowercased.
    pub service: String,
    /// Reporter's work email, lowercased.
    pub user_email: String,
    pub severity: Severity,
    pub status: TicketStatus,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Arguments of the `create_ticket` tool as they arrive on the wire.
///
/// Nothing here is trusted; convert into a [`TicketRequest`] to validate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTicketArgs {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub user_email: String,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<Option<String>>,
    #[serde(default)]
    pub department: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Validated ticket-creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    summary: String,
    service: String,
    user_email: String,
    severity: Severity,
    department: Option<String>,
}

impl TicketRequest {
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
}

/// Rejects blank values; the text itself is kept as given.
fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

impl TryFrom<CreateTicketArgs> for TicketRequest {
    type Error = ValidationError;

    fn try_from(args: CreateTicketArgs) -> Result<Self, Self::Error> {
        let summary = required(args.summary, "summary")?;
        let service = required(args.service, "service")?;
        let user_email = required(args.user_email, "user_email")?;
        let severity = match args.severity {
            Some(Some(raw)) => raw.parse()?,
            Some(None) => return Err(ValidationError::InvalidSeverity("null".into())),
            None => Severity::default(),
        };
        let department = args
            .department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            summary,
            service,
            user_email,
            severity,
            department,
        })
    }
}

/// Produces ticket identifiers.
pub trait TicketIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `IT-` followed by 8 uppercase hex digits taken from a random v4 UUID.
///
/// Needs no shared state, so concurrent callers never coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTicketIds;

impl TicketIdGenerator for RandomTicketIds {
    fn next_id(&self) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("IT-{}", hex[..8].to_uppercase())
    }
}

/// Source of the creation timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Stamps validated requests into tickets. Keeps nothing it creates.
#[derive(Clone)]
pub struct TicketFactory {
    ids: Arc<dyn TicketIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl TicketFactory {
    pub fn new(ids: Arc<dyn TicketIdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    pub fn create(&self, request: TicketRequest) -> Ticket {
        let ticket = Ticket {
            ticket_id: self.ids.next_id(),
            summary: request.summary,
            service: normalize_key(&request.service),
            user_email: normalize_key(&request.user_email),
            severity: request.severity,
            status: TicketStatus::Open,
            department: request.department,
            created_at: self.clock.now(),
        };
        tracing::info!(
            ticket_id = %ticket.ticket_id,
            service = %ticket.service,
            severity = %ticket.severity,
            "created ticket"
        );
        ticket
    }
}

impl Default for TicketFactory {
    fn default() -> Self {
        Self::new(Arc::new(RandomTicketIds), Arc::new(SystemClock))
    }
}

impl fmt::Debug for TicketFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketFactory").finish_non_exhaustive()
    }
}
