pub mod client;
pub mod models;

pub use client::ApiClient;

/// The two failure modes the dashboard distinguishes. Anything transport or
/// status related is `Network`; a response that arrived but does not carry
/// the expected nested shape is `Format`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response format: {0}")]
    Format(String),
}
