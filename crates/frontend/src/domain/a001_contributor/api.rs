//! Data access for the contributors API
//!
//! One request per call, no local caching and no retry. Views depend on the
//! [`DataService`] trait so the HTTP implementation can be swapped out.

use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::a001_contributor::{OrgQuery, OrgResponse};
use gloo_net::http::Request;
use thiserror::Error;

/// Why a contributors request failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
    /// The body was not a valid page of contributors
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The query string could not be built
    #[error("Failed to build request: {0}")]
    Encode(String),
}

impl FetchError {
    /// HTTP status, or 0 when no status was received
    pub fn code(&self) -> u16 {
        match self {
            FetchError::Status { status, .. } => *status,
            _ => 0,
        }
    }

    /// Status text for HTTP errors, the error description otherwise
    pub fn message(&self) -> String {
        match self {
            FetchError::Status { status_text, .. } => status_text.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == 404
    }
}

#[async_trait(?Send)]
pub trait DataService: Send + Sync {
    /// Fetch one page of contributors of `org`
    async fn fetch_org(&self, org: &str, query: OrgQuery) -> Result<OrgResponse, FetchError>;
}

pub type SharedDataService = Arc<dyn DataService>;

/// Build `{base}/{org}?page=..&per_page=..&cache=..`
pub fn org_url(base: &str, org: &str, query: &OrgQuery) -> Result<String, FetchError> {
    let qs = query
        .to_query_string()
        .map_err(|e| FetchError::Encode(e.to_string()))?;
    Ok(format!(
        "{}/{}?{}",
        base.trim_end_matches('/'),
        urlencoding::encode(org),
        qs
    ))
}

/// [`DataService`] backed by the browser fetch API
#[derive(Clone, Debug)]
pub struct HttpDataService {
    base_url: String,
}

impl HttpDataService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl DataService for HttpDataService {
    async fn fetch_org(&self, org: &str, query: OrgQuery) -> Result<OrgResponse, FetchError> {
        let url = org_url(&self.base_url, org, &query)?;
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_str::<OrgResponse>(&text).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::CacheMode;

    const BASE: &str = "https://gocontributor.herokuapp.com";

    #[test]
    fn test_first_load_url() {
        let url = org_url(BASE, "octocat", &OrgQuery::default()).unwrap();
        assert_eq!(
            url,
            "https://gocontributor.herokuapp.com/octocat?page=1&per_page=20&cache=true"
        );
    }

    #[test]
    fn test_url_encodes_org_segment() {
        let q = OrgQuery::new(2, 20, Some(CacheMode::Cached));
        let url = org_url("http://localhost:5000/", "a b/c", &q).unwrap();
        assert_eq!(url, "http://localhost:5000/a%20b%2Fc?page=2&per_page=20&cache=cached");
    }

    #[test]
    fn test_error_code_and_message() {
        let not_found = FetchError::Status {
            status: 404,
            status_text: "NOT FOUND".to_string(),
        };
        assert!(not_found.is_not_found());
        assert_eq!(not_found.code(), 404);
        assert_eq!(not_found.message(), "NOT FOUND");

        let offline = FetchError::Transport("network unreachable".to_string());
        assert_eq!(offline.code(), 0);
        assert_eq!(offline.message(), "network unreachable");
        assert!(!offline.is_not_found());

        let bad_body = FetchError::Decode("expected value".to_string());
        assert_eq!(bad_body.message(), "Failed to parse response: expected value");
    }
}
