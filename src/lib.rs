//! Demo LLM agent declarations for an internal IT helpdesk.
//!
//! The crate declares agents (model, instruction, tools) and implements the
//! mock tools they call: a user directory lookup, a service status check and
//! ticket creation. Running a model is left to an external agent runtime,
//! which lists [`agent::types::Agent::tool_schemas`] and calls
//! [`agent::types::Agent::invoke`].

pub mod agent;
pub mod agents;
pub mod config;
pub mod error;
pub mod helpdesk;
pub mod prelude;
pub mod tools;

// re-export the proc-macro attribute for convenient use: `use helpdesk_agent::tool;` or `#[helpdesk_agent::tool(...)]`
pub use helpdesk_agent_macros::tool;

// paths the `#[tool]` expansion refers to
#[doc(hidden)]
pub use async_trait;
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
