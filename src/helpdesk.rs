//! Mock helpdesk backend: a user directory, a service status catalog and
//! ticket creation. All tables are read-only and built once from
//! [`crate::config::HelpdeskConfig`].

pub mod directory;
pub mod error;
pub mod services;
pub mod ticket;

pub use directory::{StaticDirectory, UserDirectory, UserRecord, UserStatus, lookup_user};
pub use error::{LookupError, ValidationError};
pub use services::{
    ServiceCatalog, ServiceState, ServiceStatus, StaticCatalog, check_service_status,
};
pub use ticket::{
    Clock, CreateTicketArgs, RandomTicketIds, Severity, SystemClock, Ticket, TicketFactory,
    TicketIdGenerator, TicketRequest, TicketStatus,
};

/// Lookup keys (emails, service names) are compared trimmed and lowercased.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
