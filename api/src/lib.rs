//! Typed HTTP client for the DegenScope scanner service.
//!
//! The scanner itself (risk scoring, data-provider integration, storage) is
//! an external service; this crate only speaks its JSON contract:
//! `POST {base}/api/analyze` and `GET {base}/api/history?limit=N`.

pub mod chain;
pub mod risk;
pub mod types;

use thiserror::Error;

use crate::types::AnalysisRequest;
use crate::types::AnalysisResult;
use crate::types::HistoryEntry;

/// Failures of a scanner call, split by domain.
///
/// A non-2xx status is deliberately opaque: the body is not read for
/// detail, so every rejection surfaces the same way to the caller.
#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("scanner returned status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Where the scanner lives. An empty `base_url` means same-origin,
/// which is the deployed default behind the reverse proxy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    pub base_url: String,
}

/// HTTP client for the scanner service.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection
/// pool across clones. No timeout is set beyond the transport default.
#[derive(Clone, Debug)]
pub struct ScannerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScannerClient {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submits a contract for analysis and returns the scanner's verdict.
    ///
    /// Any non-2xx response is returned as [`ScannerError::Status`] without
    /// inspecting the body; network and decode failures come back as
    /// [`ScannerError::Transport`].
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ScannerError> {
        let response = self
            .http
            .post(self.url("/api/analyze"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScannerError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Fetches the most recent analyses, newest first.
    ///
    /// `limit` is advisory; the server decides how many rows actually
    /// come back and the caller renders whatever it gets.
    pub async fn recent_history(&self, limit: usize) -> Result<Vec<HistoryEntry>, ScannerError> {
        let response = self
            .http
            .get(self.url("/api/history"))
            .query(&[("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScannerError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_yields_same_origin_paths() {
        let client = ScannerClient::new(ScannerConfig::default());
        assert_eq!(client.url("/api/analyze"), "/api/analyze");
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let client = ScannerClient::new(ScannerConfig {
            base_url: "http://scanner:8000/".to_string(),
        });
        assert_eq!(client.url("/api/history"), "http://scanner:8000/api/history");
    }

    #[test]
    fn status_error_is_opaque_but_numbered() {
        let err = ScannerError::Status(502);
        assert_eq!(err.to_string(), "scanner returned status 502");
    }
}
