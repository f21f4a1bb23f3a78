use crate::agent::error::AgentError;
use crate::config::ConfigError;
use crate::tools::error::ToolError;


#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
