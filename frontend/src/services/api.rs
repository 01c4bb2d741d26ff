//! REST client for the lead backend.
//!
//! One thin wrapper per endpoint, with no retries or timeouts. Failures
//! come back as [`ApiError`]; deciding whether a failure deserves an
//! alert or only a console line is the dispatcher's business, not this
//! module's.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use leadboard_core::{BatchOutcome, BatchRequest, CreatedLead, Lead, LogEntry, Metrics, NewLead};

/// Errors surfaced by the lead backend client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// HTTP client for the six lead endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (a trailing slash is tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /leads` - every known lead, in backend order.
    pub async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        self.get_json("/leads").await
    }

    /// `GET /metrics` - aggregate outreach counters.
    pub async fn metrics(&self) -> Result<Metrics, ApiError> {
        self.get_json("/metrics").await
    }

    /// `POST /leads` - inject a lead into the pipeline.
    pub async fn create_lead(&self, lead: &NewLead) -> Result<CreatedLead, ApiError> {
        self.post_json("/leads", lead).await
    }

    /// `POST /leads/{id}/approve` - approve a single drafted email.
    pub async fn approve_lead(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/leads/{}/approve", id));
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::checked(response).await?;
        Ok(())
    }

    /// `POST /leads/batch-approve` - approve several leads at once.
    pub async fn batch_approve(&self, request: &BatchRequest) -> Result<BatchOutcome, ApiError> {
        self.post_json("/leads/batch-approve", request).await
    }

    /// `GET /leads/{id}/logs` - a lead's activity history.
    pub async fn logs(&self, id: &str) -> Result<Vec<LogEntry>, ApiError> {
        self.get_json(&format!("/leads/{}/logs", id)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::checked(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::checked(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Passes 2xx responses through; turns anything else into
    /// [`ApiError::Status`] with the best message the body offers.
    async fn checked(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let code = response.status();
        let message = match response.text().await {
            Ok(body) => error_message_from_body(&body),
            Err(_) => "Unknown error".to_string(),
        };
        Err(ApiError::Status { code, message })
    }
}

/// Extracts a readable message from an error response body.
///
/// The backend wraps errors as `{"detail": "..."}`; other bodies pass
/// through verbatim.
fn error_message_from_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/leads"), "http://localhost:8000/leads");

        let bare = ApiClient::new("http://localhost:8000");
        assert_eq!(
            bare.url("/leads/42/approve"),
            "http://localhost:8000/leads/42/approve"
        );
    }

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            error_message_from_body(r#"{"detail": "Lead not found"}"#),
            "Lead not found"
        );
        // Non-JSON bodies pass through untouched.
        assert_eq!(
            error_message_from_body("502 Bad Gateway"),
            "502 Bad Gateway"
        );
        assert_eq!(error_message_from_body(""), "Unknown error");
        // JSON without a detail field is kept verbatim too.
        assert_eq!(
            error_message_from_body(r#"{"error": "nope"}"#),
            r#"{"error": "nope"}"#
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            code: 404,
            message: "Lead not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Lead not found");

        let err = ApiError::Request("network down".to_string());
        assert_eq!(err.to_string(), "request failed: network down");
    }
}
