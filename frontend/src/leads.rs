use std::fmt;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Where on the site a lead was captured.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    HeroSection,
    ContactSection,
    Footer,
    PricingPage,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::HeroSection => "hero_section",
            LeadSource::ContactSection => "contact_section",
            LeadSource::Footer => "footer",
            LeadSource::PricingPage => "pricing_page",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("lead service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to encode lead: {0}")]
    Encode(String),
}

/// Persists leads somewhere outside the page. Implementations only have to
/// report whether the record was accepted.
pub trait LeadStore {
    fn create(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), LeadError>>;
}

/// Posts leads as JSON to the backend lead endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeadStore {
    endpoint: String,
}

impl HttpLeadStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpLeadStore {
    fn default() -> Self {
        Self::new(config::leads_endpoint())
    }
}

impl LeadStore for HttpLeadStore {
    fn create(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), LeadError>> {
        let endpoint = self.endpoint.clone();
        async move {
            log::debug!("Posting {} lead to {}", lead.source, endpoint);
            let response = Request::post(&endpoint)
                .json(&lead)
                .map_err(|e| LeadError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| LeadError::Network(e.to_string()))?;

            if !response.ok() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(LeadError::Status { status, body });
            }
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared handle so a store can travel through component props.
#[derive(Clone)]
pub struct LeadStoreHandle(Rc<dyn LeadStore>);

impl LeadStoreHandle {
    pub fn new<S: LeadStore + 'static>(store: S) -> Self {
        Self(Rc::new(store))
    }
}

impl LeadStore for LeadStoreHandle {
    fn create(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), LeadError>> {
        self.0.create(lead)
    }
}

impl PartialEq for LeadStoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LeadStoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LeadStoreHandle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_lead_serializes_with_snake_case_source() {
        let lead = Lead {
            full_name: "Dana Levi".to_string(),
            email: "dana@example.com".to_string(),
            phone: String::new(),
            source: LeadSource::HeroSection,
        };

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "full_name": "Dana Levi",
                "email": "dana@example.com",
                "phone": "",
                "source": "hero_section",
            })
        );
    }

    #[test]
    fn source_display_matches_wire_name() {
        for source in [
            LeadSource::HeroSection,
            LeadSource::ContactSection,
            LeadSource::Footer,
            LeadSource::PricingPage,
        ] {
            let wire = serde_json::to_string(&source).unwrap();
            assert_eq!(wire, format!("\"{}\"", source));
        }
    }

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = LeadError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "lead service returned 503: maintenance");
    }

    #[test]
    fn default_store_targets_configured_endpoint() {
        let store = HttpLeadStore::default();
        assert_eq!(store.endpoint(), config::leads_endpoint());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = LeadStoreHandle::new(HttpLeadStore::new("/a"));
        let b = LeadStoreHandle::new(HttpLeadStore::new("/a"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
