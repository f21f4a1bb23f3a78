/// Failures of the tool machinery itself.
///
/// Expected domain outcomes (unknown user, invalid severity) are not errors
/// at this level; helpdesk tools return them as a [`super::ToolOutcome::Error`].
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool execution error in '{name}': {reason}")]
    ExecutionError {
        name: String,
        reason: String,
    },

    #[error("Tool parameters do not match: {0}")]
    ParamsNotMatched(String),
}
