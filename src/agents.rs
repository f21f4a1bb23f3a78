//! The two demo agent declarations.

use std::sync::Arc;

use crate::agent::types::Agent;
use crate::config::HelpdeskConfig;
use crate::helpdesk::TicketFactory;
use crate::tools::hello::{GetCurrentTimeTool, GetWeatherTool};
use crate::tools::helpdesk::{CheckServiceStatusTool, CreateTicketTool, LookupUserTool};

pub const HELPDESK_AGENT_NAME: &str = "helpdesk_root_agent";
pub const HELLO_AGENT_NAME: &str = "root_agent";

const HELPDESK_INSTRUCTION: &str = "\
You are a friendly but efficient IT helpdesk assistant for an internal company.

Goals:
1. Quickly understand the user's problem.
2. Ask one or two clarifying questions if needed.
3. Give clear, step-by-step instructions they can follow.
4. Keep answers concise and practical.

Tools:
- Use `lookup_user` to confirm who you are talking to. If their account is locked, say so before troubleshooting.
- Use `check_service_status` before troubleshooting a service. If it reports an outage, tell the user instead of walking them through fixes.
- Use `create_ticket` when the issue is serious, the user asks for a ticket, or your steps did not resolve it. Pick severity 'low', 'medium' or 'high' and share the ticket id.
- Every tool returns a `status` field. When it is 'error', read `error_message` and recover, e.g. suggest one of the known services.
";

const HELLO_INSTRUCTION: &str = "You are a helpful assistant that provides the current time and weather for a given city. \
Use `get_current_time` to get the current time and `get_weather` to get the weather information.";

/// The IT helpdesk agent, with its tools reading from `config`.
pub fn helpdesk_agent(config: &HelpdeskConfig) -> Agent {
    helpdesk_agent_with(config, TicketFactory::default())
}

/// Same as [`helpdesk_agent`] with a caller-supplied ticket factory.
pub fn helpdesk_agent_with(config: &HelpdeskConfig, tickets: TicketFactory) -> Agent {
    let mut agent = Agent::new(HELPDESK_AGENT_NAME)
        .with_description("Smart IT Helpdesk assistant that helps troubleshoot basic IT issues.")
        .with_instruction(HELPDESK_INSTRUCTION);
    agent
        .register_tool(None, Arc::new(LookupUserTool::new(Arc::new(config.directory()))))
        .register_tool(None, Arc::new(CheckServiceStatusTool::new(Arc::new(config.catalog()))))
        .register_tool(None, Arc::new(CreateTicketTool::new(tickets)));
    agent
}

/// Answers time and weather questions with canned data.
pub fn hello_agent() -> Agent {
    let mut agent = Agent::new(HELLO_AGENT_NAME)
        .with_description("Tell the current time and weather in a specified city")
        .with_instruction(HELLO_INSTRUCTION);
    agent
        .register_tool(None, Arc::new(GetCurrentTimeTool))
        .register_tool(None, Arc::new(GetWeatherTool));
    agent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::types::DEFAULT_MODEL;

    #[test]
    fn helpdesk_declaration() {
        let agent = helpdesk_agent(&HelpdeskConfig::default());
        assert_eq!(agent.name, HELPDESK_AGENT_NAME);
        assert_eq!(agent.model, DEFAULT_MODEL);
        assert_eq!(
            agent.tool_names(),
            ["check_service_status", "create_ticket", "lookup_user"]
        );
        for tool in agent.tool_names() {
            assert!(agent.instruction.contains(tool), "instruction omits {tool}");
        }
    }

    #[test]
    fn hello_declaration() {
        let agent = hello_agent();
        assert_eq!(agent.name, HELLO_AGENT_NAME);
        assert_eq!(agent.tool_names(), ["get_current_time", "get_weather"]);
    }
}
