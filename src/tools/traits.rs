use super::error::ToolError;

// re-export ArgSchema for macros use
pub use super::schema::ArgSchema;
use super::schema::ToolSchema;

/// A named function an agent may call with JSON arguments.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn args(&self) -> Vec<ArgSchema>;

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            args: self.args(),
        }
    }

    async fn run(&self, input: serde_json::Value) -> Result<serde_json::Value, ToolError>;
}
