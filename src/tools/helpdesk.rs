//! The three helpdesk tools.
//!
//! Each tool owns `Arc` handles to the backend it reads, so one backend can
//! be shared by any number of agents. Not-found and validation failures are
//! reported as `{"status":"error"}` payloads; `run` only returns `Err` when
//! the result cannot be serialized.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ToolError;
use super::outcome::ToolOutcome;
use super::schema::ArgSchema;
use super::traits::Tool;
use crate::helpdesk::{
    CreateTicketArgs, ServiceCatalog, ServiceStatus, Ticket, TicketFactory, TicketRequest,
    UserDirectory, UserRecord, ValidationError, check_service_status, lookup_user,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub user: UserRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPayload {
    pub ticket: Ticket,
}

#[derive(Debug, Deserialize)]
struct LookupUserParams {
    email: String,
}

#[derive(Debug, Deserialize)]
struct CheckServiceStatusParams {
    service_name: String,
}

fn parse_params<P: DeserializeOwned>(tool: &str, input: Value) -> Result<P, ValidationError> {
    serde_json::from_value(input).map_err(|e| {
        tracing::warn!(tool, error = %e, "rejected tool arguments");
        ValidationError::Malformed(e.to_string())
    })
}

fn encode<T: Serialize>(tool: &str, outcome: ToolOutcome<T>) -> Result<Value, ToolError> {
    serde_json::to_value(outcome).map_err(|e| ToolError::ExecutionError {
        name: tool.to_string(),
        reason: e.to_string(),
    })
}

/// `lookup_user(email)`
pub struct LookupUserTool {
    directory: Arc<dyn UserDirectory>,
}

impl LookupUserTool {
    pub const NAME: &'static str = "lookup_user";

    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub fn lookup(&self, email: &str) -> ToolOutcome<UserPayload> {
        lookup_user(self.directory.as_ref(), email)
            .map(|user| UserPayload { user })
            .into()
    }
}

#[async_trait::async_trait]
impl Tool for LookupUserTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Look up a user in the internal directory by work email. Returns the user's name, department and account status."
    }

    fn args(&self) -> Vec<ArgSchema> {
        vec![ArgSchema::new(
            "email",
            "string",
            "The user's work email address.",
            true,
        )]
    }

    async fn run(&self, input: Value) -> Result<Value, ToolError> {
        let outcome = match parse_params::<LookupUserParams>(Self::NAME, input) {
            Ok(params) => self.lookup(&params.email),
            Err(e) => ToolOutcome::error(e.to_string()),
        };
        encode(Self::NAME, outcome)
    }
}

/// `check_service_status(service_name)`
pub struct CheckServiceStatusTool {
    catalog: Arc<dyn ServiceCatalog>,
}

impl CheckServiceStatusTool {
    pub const NAME: &'static str = "check_service_status";

    pub fn new(catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn check(&self, service_name: &str) -> ToolOutcome<ServiceStatus> {
        check_service_status(self.catalog.as_ref(), service_name).into()
    }
}

#[async_trait::async_trait]
impl Tool for CheckServiceStatusTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Check the current status of a named IT service, e.g. 'email', 'vpn', 'gitlab', 'wifi'."
    }

    fn args(&self) -> Vec<ArgSchema> {
        vec![ArgSchema::new(
            "service_name",
            "string",
            "Name of the service, e.g. 'email', 'vpn', 'gitlab', 'wifi'.",
            true,
        )]
    }

    async fn run(&self, input: Value) -> Result<Value, ToolError> {
        let outcome = match parse_params::<CheckServiceStatusParams>(Self::NAME, input) {
            Ok(params) => self.check(&params.service_name),
            Err(e) => ToolOutcome::error(e.to_string()),
        };
        encode(Self::NAME, outcome)
    }
}

/// `create_ticket(summary, service, user_email, severity?, department?)`
pub struct CreateTicketTool {
    factory: TicketFactory,
}

impl CreateTicketTool {
    pub const NAME: &'static str = "create_ticket";

    pub fn new(factory: TicketFactory) -> Self {
        Self { factory }
    }

    pub fn create(&self, args: CreateTicketArgs) -> ToolOutcome<TicketPayload> {
        TicketRequest::try_from(args)
            .map(|request| TicketPayload {
                ticket: self.factory.create(request),
            })
            .inspect_err(|e| tracing::warn!(error = %e, "rejected ticket"))
            .into()
    }
}

#[async_trait::async_trait]
impl Tool for CreateTicketTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Create a new IT helpdesk ticket. Use when the issue is serious enough to track, the user asks for a ticket, or troubleshooting did not resolve the problem."
    }

    fn args(&self) -> Vec<ArgSchema> {
        vec![
            ArgSchema::new(
                "summary",
                "string",
                "Short summary of the issue, in the user's own words.",
                true,
            ),
            ArgSchema::new(
                "service",
                "string",
                "The affected service, e.g. 'email', 'vpn', 'gitlab', 'wifi'.",
                true,
            ),
            ArgSchema::new(
                "user_email",
                "string",
                "The user's work email address.",
                true,
            ),
            ArgSchema::new(
                "severity",
                "string",
                "One of 'low', 'medium' or 'high'. Defaults to 'medium'.",
                false,
            ),
            ArgSchema::new(
                "department",
                "string",
                "User's department, if known.",
                false,
            ),
        ]
    }

    async fn run(&self, input: Value) -> Result<Value, ToolError> {
        let outcome = match parse_params::<CreateTicketArgs>(Self::NAME, input) {
            Ok(args) => self.create(args),
            Err(e) => ToolOutcome::error(e.to_string()),
        };
        encode(Self::NAME, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelpdeskConfig;
    use futures::executor::block_on;
    use serde_json::json;

    fn config() -> HelpdeskConfig {
        HelpdeskConfig::default()
    }

    #[test]
    fn lookup_user_success_shape() {
        let tool = LookupUserTool::new(Arc::new(config().directory()));
        let got = block_on(tool.run(json!({ "email": "BOB@example.com" }))).unwrap();
        assert_eq!(
            got,
            json!({
                "status": "success",
                "user": {
                    "email": "bob@example.com",
                    "name": "Bob Smith",
                    "department": "Finance",
                    "status": "active"
                }
            })
        );
    }

    #[test]
    fn lookup_user_error_shape() {
        let tool = LookupUserTool::new(Arc::new(config().directory()));
        let got = block_on(tool.run(json!({ "email": "eve@example.com" }))).unwrap();
        assert_eq!(
            got,
            json!({
                "status": "error",
                "error_message": "No user found for email 'eve@example.com'."
            })
        );
    }

    #[test]
    fn missing_argument_is_an_error_payload() {
        let tool = LookupUserTool::new(Arc::new(config().directory()));
        let got = block_on(tool.run(json!({ "mail": "bob@example.com" }))).unwrap();
        assert_eq!(got["status"], "error");
        assert!(got["error_message"].as_str().unwrap().contains("email"));
    }

    #[test]
    fn service_status_shapes() {
        let tool = CheckServiceStatusTool::new(Arc::new(config().catalog()));

        let got = block_on(tool.run(json!({ "service_name": " GitLab " }))).unwrap();
        assert_eq!(
            got,
            json!({ "status": "success", "service": "gitlab", "status_text": "outage" })
        );

        let got = block_on(tool.run(json!({ "service_name": "printer" }))).unwrap();
        assert_eq!(
            got,
            json!({
                "status": "error",
                "error_message": "Unknown service 'printer'. Known services: email, gitlab, vpn, wifi."
            })
        );
    }

    #[test]
    fn create_ticket_success_shape() {
        let tool = CreateTicketTool::new(TicketFactory::default());
        let got = block_on(tool.run(json!({
            "summary": "Outlook keeps asking for my password",
            "service": "EMAIL",
            "user_email": "Carol@Example.com",
            "severity": "high",
            "department": "HR"
        })))
        .unwrap();

        assert_eq!(got["status"], "success");
        let ticket = &got["ticket"];
        assert_eq!(ticket["service"], "email");
        assert_eq!(ticket["user_email"], "carol@example.com");
        assert_eq!(ticket["severity"], "high");
        assert_eq!(ticket["status"], "open");
        assert_eq!(ticket["department"], "HR");
        assert!(ticket["ticket_id"].as_str().unwrap().starts_with("IT-"));
        assert!(ticket["created_at"].is_string());
    }

    #[test]
    fn create_ticket_defaults_severity() {
        let tool = CreateTicketTool::new(TicketFactory::default());
        let got = block_on(tool.run(json!({
            "summary": "wifi drops",
            "service": "wifi",
            "user_email": "alice@example.com"
        })))
        .unwrap();
        assert_eq!(got["ticket"]["severity"], "medium");
        assert_eq!(got["ticket"]["department"], Value::Null);
    }

    #[test]
    fn create_ticket_rejects_invalid_severity() {
        let tool = CreateTicketTool::new(TicketFactory::default());
        let got = block_on(tool.run(json!({
            "summary": "everything is down",
            "service": "vpn",
            "user_email": "alice@example.com",
            "severity": "urgent"
        })))
        .unwrap();
        assert_eq!(
            got,
            json!({
                "status": "error",
                "error_message": "Invalid severity 'urgent'. Expected one of: low, medium, high."
            })
        );
    }

    #[test]
    fn create_ticket_rejects_null_and_padded_severity() {
        let tool = CreateTicketTool::new(TicketFactory::default());
        for severity in [Value::Null, json!(" high ")] {
            let got = block_on(tool.run(json!({
                "summary": "everything is down",
                "service": "vpn",
                "user_email": "alice@example.com",
                "severity": severity
            })))
            .unwrap();
            assert_eq!(got["status"], "error", "{got}");
            assert!(got.get("ticket").is_none());
        }
    }

    #[test]
    fn create_ticket_rejects_wrong_types() {
        let tool = CreateTicketTool::new(TicketFactory::default());
        let got = block_on(tool.run(json!({
            "summary": 42,
            "service": "vpn",
            "user_email": "alice@example.com"
        })))
        .unwrap();
        assert_eq!(got["status"], "error");
        assert!(
            got["error_message"]
                .as_str()
                .unwrap()
                .starts_with("Malformed arguments:")
        );
    }

    #[test]
    fn schemas_mark_optional_ticket_fields() {
        let tool = CreateTicketTool::new(TicketFactory::default());
        let schema = tool.schema();
        assert_eq!(schema.name, "create_ticket");
        let optional: Vec<_> = schema
            .args
            .iter()
            .filter(|a| !a.required)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(optional, ["severity", "department"]);
    }
}
