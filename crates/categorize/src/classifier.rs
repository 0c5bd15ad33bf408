use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("classifier returned no usable text")]
    EmptyReply,
    #[error("no classifier configured")]
    Unavailable,
}

/// A remote categorization capability. Implementations receive the merchant
/// and description text and return a free-text category guess; callers
/// normalize the reply and absorb every failure.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, merchant: &str, description: &str) -> Result<String, ClassifyError>;
}

// ── Mock classifier (always available, used for tests) ────────────────────────

/// Returns a preset reply or a preset failure.
pub struct MockClassifier {
    reply: Option<String>,
}

impl MockClassifier {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self { reply: Some(reply.into()) }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, _merchant: &str, _description: &str) -> Result<String, ClassifyError> {
        self.reply.clone().ok_or(ClassifyError::Unavailable)
    }
}

/// Placeholder type for categorizers built without any classifier attached.
pub struct NoClassifier;

#[async_trait]
impl Classifier for NoClassifier {
    async fn classify(&self, _merchant: &str, _description: &str) -> Result<String, ClassifyError> {
        Err(ClassifyError::Unavailable)
    }
}

// ── Gemini classifier ─────────────────────────────────────────────────────────

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Per-request cap; categorization must degrade, not hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Classifier backed by the Google Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClassifier {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClassifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_GEMINI_MODEL)
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Point at a different API host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build from `GEMINI_API_KEY` / `GEMINI_MODEL`. Returns `None` when the
    /// key is unset; an absent classifier is a normal runtime condition.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())?;
        match std::env::var("GEMINI_MODEL") {
            Ok(model) if !model.is_empty() => Some(Self::with_model(api_key, model)),
            _ => Some(Self::new(api_key)),
        }
    }

    fn prompt(merchant: &str, description: &str) -> String {
        format!(
            "Classify the following transaction into one of the categories:\n\
             Food, Travel, Shopping, Bills, Investments, Other.\n\n\
             Transaction: {description}\n\
             Merchant: {merchant}\n\
             Only return the category name, nothing else."
        )
    }
}

#[async_trait]
impl Classifier for GeminiClassifier {
    async fn classify(&self, merchant: &str, description: &str) -> Result<String, ClassifyError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: Self::prompt(merchant, description) }] }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let reply: GenerateResponse = response.json().await?;
        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ClassifyError::EmptyReply)
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}
