pub mod error;
pub mod hello;
pub mod helpdesk;
pub mod outcome;
pub mod schema;
pub mod traits;

pub use error::ToolError;
pub use outcome::ToolOutcome;
pub use schema::{ArgSchema, ToolSchema};
pub use traits::Tool;
