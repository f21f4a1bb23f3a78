use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::LookupError;
use super::normalize_key;

/// Reported health of an IT service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Operational,
    Degraded,
    Outage,
    PartialOutage,
    MajorOutage,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Operational => "operational",
            Self::Degraded => "degraded",
            Self::Outage => "outage",
            Self::PartialOutage => "partial_outage",
            Self::MajorOutage => "major_outage",
        };
        f.write_str(s)
    }
}

/// Successful result of a status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Normalized service name.
    pub service: String,
    pub status_text: ServiceState,
}

/// Read-only source of service states.
pub trait ServiceCatalog: Send + Sync {
    /// State of an already-normalized service name.
    fn status(&self, name: &str) -> Option<ServiceState>;

    /// All known service names, sorted ascending.
    fn names(&self) -> Vec<String>;
}

/// In-memory catalog seeded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    services: BTreeMap<String, ServiceState>,
}

impl StaticCatalog {
    pub fn new(services: impl IntoIterator<Item = (String, ServiceState)>) -> Self {
        let services = services
            .into_iter()
            .map(|(name, state)| (normalize_key(&name), state))
            .collect();
        Self { services }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceCatalog for StaticCatalog {
    fn status(&self, name: &str) -> Option<ServiceState> {
        self.services.get(name).copied()
    }

    fn names(&self) -> Vec<String> {
        // BTreeMap keys iterate in order
        self.services.keys().cloned().collect()
    }
}

/// Check a service by free-text name, ignoring case and surrounding whitespace.
pub fn check_service_status(
    catalog: &dyn ServiceCatalog,
    service_name: &str,
) -> Result<ServiceStatus, LookupError> {
    let normalized = normalize_key(service_name);
    tracing::debug!(service = %normalized, "checking service status");
    match catalog.status(&normalized) {
        Some(status_text) => Ok(ServiceStatus {
            service: normalized,
            status_text,
        }),
        None => {
            let mut known = catalog.names();
            known.sort();
            Err(LookupError::UnknownService {
                name: service_name.to_string(),
                known,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelpdeskConfig;

    fn seeded() -> StaticCatalog {
        HelpdeskConfig::default().catalog()
    }

    #[test]
    fn known_services_in_any_casing() {
        let catalog = seeded();
        let cases = [
            ("email", ServiceState::Operational),
            (" VPN ", ServiceState::Degraded),
            ("GitLab", ServiceState::Outage),
            ("\twifi\n", ServiceState::Operational),
        ];
        for (query, expected) in cases {
            let status = check_service_status(&catalog, query).unwrap();
            assert_eq!(status.service, query.trim().to_lowercase());
            assert_eq!(status.status_text, expected);
        }
    }

    #[test]
    fn unknown_service_enumerates_sorted_catalog() {
        let catalog = seeded();
        let err = check_service_status(&catalog, "Jira").unwrap_err();
        match &err {
            LookupError::UnknownService { name, known } => {
                assert_eq!(name, "Jira");
                assert_eq!(known, &catalog.names());
                assert_eq!(known, &["email", "gitlab", "vpn", "wifi"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Unknown service 'Jira'. Known services: email, gitlab, vpn, wifi."
        );
    }

    #[test]
    fn catalog_normalizes_seed_names() {
        let catalog = StaticCatalog::new([
            ("  Zoom ".to_string(), ServiceState::PartialOutage),
            ("Slack".to_string(), ServiceState::MajorOutage),
        ]);
        assert_eq!(catalog.names(), ["slack", "zoom"]);
        assert_eq!(
            check_service_status(&catalog, "ZOOM").unwrap().status_text,
            ServiceState::PartialOutage
        );
    }

    #[test]
    fn state_serializes_snake_case() {
        assert_eq!(ServiceState::PartialOutage.to_string(), "partial_outage");
        assert_eq!(
            serde_json::to_value(ServiceState::MajorOutage).unwrap(),
            serde_json::json!("major_outage")
        );
    }
}
