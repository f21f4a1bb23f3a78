use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSchema {
    pub name: String,
    pub arg_type: String,
    pub description: String,
    pub required: bool,
}

impl ArgSchema {
    pub fn new(
        name: impl Into<String>,
        arg_type: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            arg_type: arg_type.into(),
            description: description.into(),
            required,
        }
    }
}

/// What an agent runtime needs to advertise a tool to a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSchema>,
}
