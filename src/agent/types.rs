use std::collections::BTreeMap;
use std::sync::Arc;

use crate::tools::traits::Tool;

/// Model every demo agent is declared against.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Declaration of an LLM agent: identity, instructions and the tools it may call.
///
/// Nothing here talks to a model. An external runtime reads the instruction
/// and tool schemas, and calls back through [`Agent::invoke`].
pub struct Agent {
    /// A short, machine-friendly name for the agent.
    pub name: String,

    /// Model identifier the runtime should use.
    pub model: String,

    /// One-line description shown to routers / parent agents.
    pub description: String,

    /// System instruction describing the agent's role and behavior.
    pub instruction: String,

    /// Registered tools the agent may call by name, kept sorted.
    pub tools: BTreeMap<String, Arc<dyn Tool>>,
}
