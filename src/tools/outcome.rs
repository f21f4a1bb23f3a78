use serde::{Deserialize, Serialize};

/// The result shape every helpdesk tool returns.
///
/// Serialized with a `status` discriminator: `{"status":"success", ...}`
/// with the payload's fields inlined, or
/// `{"status":"error","error_message":"..."}`. The payload must serialize
/// as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome<T> {
    Success(T),
    Error { error_message: String },
}

impl<T> ToolOutcome<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ToolOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        service: String,
    }

    #[test]
    fn success_inlines_payload() {
        let outcome = ToolOutcome::Success(Payload {
            service: "vpn".into(),
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "status": "success", "service": "vpn" })
        );
    }

    #[test]
    fn error_carries_message() {
        let outcome: ToolOutcome<Payload> = Err::<Payload, _>("boom").into();
        assert!(!outcome.is_success());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "status": "error", "error_message": "boom" })
        );
    }

    #[test]
    fn parses_back_from_runtime_json() {
        let outcome: ToolOutcome<Payload> =
            serde_json::from_value(json!({ "status": "success", "service": "wifi" })).unwrap();
        assert_eq!(
            outcome,
            ToolOutcome::Success(Payload {
                service: "wifi".into()
            })
        );
    }
}
