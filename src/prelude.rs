pub use crate::agent::{error::AgentError, types::Agent};
pub use crate::agents::{hello_agent, helpdesk_agent, helpdesk_agent_with};
pub use crate::config::{ConfigError, HelpdeskConfig};
pub use crate::error::{Error, Result};
pub use crate::helpdesk::{
    CreateTicketArgs, LookupError, ServiceState, Severity, Ticket, TicketFactory,
    TicketIdGenerator, TicketRequest, TicketStatus, UserRecord, UserStatus, ValidationError,
};
pub use crate::tools::{ArgSchema, Tool, ToolError, ToolOutcome, ToolSchema};
