use std::env;

use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::models::{
    self, ActivitySample, PerformanceMetric, SessionSample, UserProfile,
};
use super::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// One-shot GET client for the SportSee backend. No retries, no timeouts,
/// no caching: every call is a single attempt whose outcome is final.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reads `SPORTSEE_API_URL`, falling back to the local mock backend.
    pub fn from_env() -> Self {
        let base_url =
            env::var("SPORTSEE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }

    pub async fn fetch_profile(&self, user_id: u32) -> Result<UserProfile, ApiError> {
        let value = self.get_json(&format!("/user/{user_id}")).await?;
        models::parse_profile(value)
    }

    pub async fn fetch_activity(&self, user_id: u32) -> Result<Vec<ActivitySample>, ApiError> {
        let value = self.get_json(&format!("/user/{user_id}/activity")).await?;
        models::parse_activity(value)
    }

    pub async fn fetch_average_sessions(
        &self,
        user_id: u32,
    ) -> Result<Vec<SessionSample>, ApiError> {
        let value = self
            .get_json(&format!("/user/{user_id}/average-sessions"))
            .await?;
        models::parse_average_sessions(value)
    }

    pub async fn fetch_performance(
        &self,
        user_id: u32,
    ) -> Result<Vec<PerformanceMetric>, ApiError> {
        let value = self.get_json(&format!("/user/{user_id}/performance")).await?;
        models::parse_performance(value)
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let result = interpret_response(status, &content_type, &body);
        if let Err(err) = &result {
            warn!(%url, %err, "request failed");
        }
        result
    }
}

/// Pure response interpretation: a non-2xx status is always a failure, a
/// non-JSON body is surfaced as a format error carrying the body text.
fn interpret_response(
    status: StatusCode,
    content_type: &str,
    body: &str,
) -> Result<Value, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Network(format!(
            "{} {}",
            status.as_str(),
            status.canonical_reason().unwrap_or("request failed"),
        )));
    }

    if !content_type.contains("application/json") {
        return Err(ApiError::Format(body.trim().to_owned()));
    }

    serde_json::from_str(body).map_err(|err| ApiError::Format(err.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn non_success_status_is_a_network_error_with_status_text() {
        let result = interpret_response(StatusCode::NOT_FOUND, "application/json", "{}");

        match result {
            Err(ApiError::Network(message)) => {
                assert!(message.contains("404"), "{message}");
                assert!(message.contains("Not Found"), "{message}");
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn status_is_checked_before_content_type() {
        // A 500 with an HTML error page is still a network failure, not a
        // format failure.
        let result = interpret_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "text/html",
            "<html>boom</html>",
        );
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn non_json_content_type_surfaces_the_body_text() {
        let result = interpret_response(StatusCode::OK, "text/plain", "user not found\n");

        match result {
            Err(ApiError::Format(message)) => assert_eq!(message, "user not found"),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn json_body_is_parsed() {
        let value =
            interpret_response(StatusCode::OK, "application/json; charset=utf-8", r#"{"a":1}"#)
                .unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let result = interpret_response(StatusCode::OK, "application/json", "{not json");
        assert!(matches!(result, Err(ApiError::Format(_))));
    }
}
