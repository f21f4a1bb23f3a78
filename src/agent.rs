use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::tools::{schema::ToolSchema, traits::Tool};

pub mod error;
pub mod types;

use error::AgentError;
use types::{Agent, DEFAULT_MODEL};

impl Agent {
    /// Create a new Agent with the provided name on [`DEFAULT_MODEL`]. Tools start empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: DEFAULT_MODEL.to_string(),
            description: String::new(),
            instruction: String::new(),
            tools: BTreeMap::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Register a tool under the given name. Replaces any existing tool with the same name. Returns &mut Self for chaining.
    pub fn register_tool(&mut self, name: Option<&str>, tool: Arc<dyn Tool>) -> &mut Self {
        // If no name is provided, use the tool's own name.
        let name = name.unwrap_or_else(|| tool.name()).to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::debug!(agent = %self.name, tool = %name, "replaced tool");
        }
        self
    }

    /// Look up a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Registered tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Schemas of every registered tool, under their registered names.
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|(name, tool)| ToolSchema {
                name: name.clone(),
                ..tool.schema()
            })
            .collect()
    }

    /// Dispatch a tool call by name, the way an agent runtime would.
    pub async fn invoke(&self, name: &str, args: Value) -> Result<Value, AgentError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AgentError::ToolNotFound(name.to_string()))?;
        tracing::debug!(agent = %self.name, tool = %name, "invoking tool");
        Ok(tool.run(args).await?)
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("tools", &self.tool_names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::hello::{GetCurrentTimeTool, GetWeatherTool};
    use serde_json::json;

    fn agent() -> Agent {
        let mut agent = Agent::new("weather_agent").with_instruction("Answer weather questions.");
        agent
            .register_tool(None, Arc::new(GetWeatherTool))
            .register_tool(Some("clock"), Arc::new(GetCurrentTimeTool));
        agent
    }

    #[test]
    fn registers_under_own_or_given_name() {
        let agent = agent();
        assert_eq!(agent.tool_names(), ["clock", "get_weather"]);
        assert!(agent.get_tool("get_current_time").is_none());
        assert_eq!(agent.model, DEFAULT_MODEL);
    }

    #[test]
    fn schemas_use_registered_names() {
        let names: Vec<_> = agent().tool_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["clock", "get_weather"]);
    }

    #[test]
    fn invoke_dispatches_by_name() {
        let agent = agent();
        let call = agent.invoke("clock", json!({ "city": "Paris" }));
        let got = tokio_test::block_on(call).unwrap();
        assert_eq!(got["current_time"], "2024-06-01 12:00:00");
    }

    #[test]
    fn invoke_unknown_tool() {
        let err = tokio_test::block_on(agent().invoke("send_email", json!({}))).unwrap_err();
        assert!(matches!(err, AgentError::ToolNotFound(name) if name == "send_email"));
    }

    #[test]
    fn invoke_surfaces_param_errors() {
        let err = tokio_test::block_on(agent().invoke("get_weather", json!({}))).unwrap_err();
        assert!(matches!(err, AgentError::ToolExecutionError(_)));
    }
}
