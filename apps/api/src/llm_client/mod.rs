/// LLM client: the single point of entry for Gemini API calls.
///
/// No other module talks to the Gemini endpoint directly. Calls are made once:
/// callers own the fallback policy, so there is no retry loop here.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Builds the HTTP client shared by every Gemini call.
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.gemini_timeout_secs))
        .build()
}

/// A Gemini client bound to one caller-supplied API key.
/// The key is only ever sent as a query parameter and never logged.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(client: Client, api_key: String, config: &Config) -> Self {
        Self {
            client,
            api_key,
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Sends a single prompt and returns the generated text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(redact)?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!(model = %self.model, chars = text.len(), "Gemini call succeeded");
        Ok(text)
    }
}

/// Drops the request URL from a transport error: it carries the API key.
fn redact(err: reqwest::Error) -> LlmError {
    LlmError::Http(err.without_url())
}

#[cfg(test)]
pub(crate) mod stub_server {
    //! Local stand-in for the Gemini endpoint, for tests.

    use std::sync::{Arc, Mutex};

    use axum::{
        http::{header, StatusCode, Uri},
        Router,
    };

    pub(crate) struct StubGemini {
        pub base_url: String,
        /// Request URIs (path and query) in arrival order.
        pub seen: Arc<Mutex<Vec<String>>>,
    }

    /// Answers every request with `status` and the JSON `body`.
    pub(crate) async fn spawn(status: StatusCode, body: &'static str) -> StubGemini {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = seen.clone();
        let app = Router::new().fallback(move |uri: Uri| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(uri.to_string());
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubGemini {
            base_url: format!("http://{addr}"),
            seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "- Built APIs\n"}, {"text": "- Shipped features"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "- Built APIs\n- Shipped features");
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_blank_text_counts_as_empty() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_endpoint_uses_configured_model() {
        let config = Config {
            gemini_base_url: "http://localhost:9".to_string(),
            gemini_model: "gemini-test".to_string(),
            ..Config::default()
        };
        let client = LlmClient::new(Client::new(), "k".to_string(), &config);
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let config = Config {
            gemini_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        let client = LlmClient::new(Client::new(), "secret".to_string(), &config);
        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
        assert!(!err.to_string().contains("key="), "API key leaked: {err}");
    }

    fn client_for(base_url: &str) -> LlmClient {
        let config = Config {
            gemini_base_url: base_url.to_string(),
            gemini_model: "gemini-test".to_string(),
            ..Config::default()
        };
        LlmClient::new(Client::new(), "secret".to_string(), &config)
    }

    #[tokio::test]
    async fn test_generate_text_returns_candidate_text() {
        let stub = stub_server::spawn(
            StatusCode::OK,
            r#"{"candidates":[{"content":{"parts":[{"text":"- Cut p99 latency by 40%\n- Led migration"}]}}]}"#,
        )
        .await;

        let text = client_for(&stub.base_url)
            .generate_text("Generate bullets")
            .await
            .unwrap();
        assert_eq!(text, "- Cut p99 latency by 40%\n- Led migration");

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("/v1beta/models/gemini-test:generateContent?"));
        assert!(seen[0].contains("key=secret"));
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let stub = stub_server::spawn(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded"}}"#,
        )
        .await;

        let err = client_for(&stub.base_url)
            .generate_text("hello")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ok_without_candidates_is_empty_content() {
        let stub = stub_server::spawn(StatusCode::OK, r#"{"candidates":[]}"#).await;
        let err = client_for(&stub.base_url)
            .generate_text("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
