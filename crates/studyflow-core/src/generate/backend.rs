//! Text-generation backend abstraction and the Hugging Face client.
//!
//! The backend is an inherently fallible external capability, so it sits
//! behind the [`GenerationBackend`] trait; the orchestrator and its tests
//! run against deterministic substitutes without touching the network.
//!
//! The hosted inference service answers in several envelope shapes. Instead
//! of nested conditionals, extraction is an ordered list of pure rules tried
//! in sequence, so new shapes are one line, away from the retry logic.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Default hosted model endpoint.
pub const DEFAULT_API_URL: &str =
    "https://router.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3";

/// Request timeout for a single generation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors a generation backend can produce.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service is up but the model is still loading; retry after the
    /// hinted wait.
    #[error("service temporarily unavailable, model is loading")]
    Unavailable {
        /// Backend-provided wait before the next attempt
        wait_hint: Option<Duration>,
    },
    /// The response decoded but carried no generated text in any known
    /// envelope shape.
    #[error("no generated text in response")]
    EmptyResponse,
    /// Transport-level failure (connection, timeout, TLS, bad body).
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with an error of its own.
    #[error("{0}")]
    Backend(String),
}

/// A text-generation capability: prompt in, generated text out.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Sends the prompt and returns the generated text, retrying transient
    /// failures per the implementation's policy.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Bounded-retry policy shared by backend implementations.
///
/// `max_retries` failed calls may be retried, so at most `max_retries + 1`
/// calls are made in total. A loading failure waits the backend's hint (or
/// `loading_wait`); any other failure waits `base_delay × attempt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub loading_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(2),
            loading_wait: Duration::from_secs(20),
        }
    }
}

impl RetryPolicy {
    /// Linear backoff delay before the retry following `attempt`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Runs `call` under the retry policy, surfacing the final error when the
/// shared retry counter is exhausted.
pub(crate) async fn call_with_retries<F, Fut>(
    policy: &RetryPolicy,
    mut call: F,
) -> Result<String, GenerationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, GenerationError>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match call().await {
            Ok(text) => return Ok(text),
            Err(err) if attempt > policy.max_retries => return Err(err),
            Err(GenerationError::Unavailable { wait_hint }) => {
                let wait = wait_hint.unwrap_or(policy.loading_wait);
                debug!("generation backend loading, waiting {wait:?} (attempt {attempt})");
                tokio::time::sleep(wait).await;
            }
            Err(err) => {
                let wait = policy.delay_for_attempt(attempt);
                warn!("generation attempt {attempt} failed: {err}; retrying in {wait:?}");
                tokio::time::sleep(wait).await;
            }
        }
    }
}

/// One envelope-extraction rule: returns the generated text if the value
/// matches the rule's shape.
type ExtractRule = fn(&Value) -> Option<String>;

/// Rules are tried in order; first match wins.
const EXTRACTION_RULES: &[ExtractRule] = &[array_envelope, object_envelope, nested_envelope];

/// `[{"generated_text": "..."}]`
fn array_envelope(value: &Value) -> Option<String> {
    text_field(value.as_array()?.first()?)
}

/// `{"generated_text": "..."}`
fn object_envelope(value: &Value) -> Option<String> {
    text_field(value)
}

/// `{"data": [{"generated_text": "..."}]}`
fn nested_envelope(value: &Value) -> Option<String> {
    text_field(value.get("data")?.as_array()?.first()?)
}

fn text_field(value: &Value) -> Option<String> {
    value
        .get("generated_text")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Extracts generated text from whichever documented envelope is present.
pub(crate) fn extract_generated_text(value: &Value) -> Option<String> {
    EXTRACTION_RULES.iter().find_map(|rule| rule(value))
}

/// Client for the Hugging Face hosted inference endpoint.
pub struct HuggingFaceBackend {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
    policy: RetryPolicy,
}

impl HuggingFaceBackend {
    /// Creates a client for the default endpoint. A missing token is
    /// allowed; the service will reject the call and the caller degrades to
    /// the fallback planner.
    pub fn new(token: Option<String>) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            token,
            policy: RetryPolicy::default(),
        })
    }

    /// Overrides the endpoint URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Overrides the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// One generation call, no retries.
    async fn request(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": 2048,
                "temperature": 0.7,
                "top_p": 0.9,
                "do_sample": true,
                "return_full_text": false,
            },
        });

        let mut request = self.client.post(&self.api_url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::SERVICE_UNAVAILABLE {
            let detail: Value = response.json().await.unwrap_or(Value::Null);
            let wait_hint = detail
                .get("estimated_time")
                .and_then(Value::as_f64)
                .map(Duration::from_secs_f64);
            return Err(GenerationError::Unavailable { wait_hint });
        }

        if !status.is_success() {
            let detail: Value = response.json().await.unwrap_or(Value::Null);
            let message = detail
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| format!("generation backend returned HTTP {status}"));
            return Err(GenerationError::Backend(message));
        }

        let payload: Value = response.json().await?;
        extract_generated_text(&payload).ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl GenerationBackend for HuggingFaceBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        call_with_retries(&self.policy, || self.request(prompt)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_envelope() {
        let value = json!([{"generated_text": "hello"}]);
        assert_eq!(extract_generated_text(&value).as_deref(), Some("hello"));
    }

    #[test]
    fn test_object_envelope() {
        let value = json!({"generated_text": "hello"});
        assert_eq!(extract_generated_text(&value).as_deref(), Some("hello"));
    }

    #[test]
    fn test_nested_envelope() {
        let value = json!({"data": [{"generated_text": "hello"}]});
        assert_eq!(extract_generated_text(&value).as_deref(), Some("hello"));
    }

    #[test]
    fn test_unknown_envelope_yields_none() {
        for value in [
            json!({"text": "hello"}),
            json!([]),
            json!({"data": []}),
            json!({"generated_text": 42}),
            Value::Null,
        ] {
            assert_eq!(extract_generated_text(&value), None);
        }
    }

    #[test]
    fn test_backoff_scales_linearly() {
        let policy = RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            loading_wait: Duration::from_secs(1),
        };
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(300));
    }
}
