//! Report generation through a hosted text-generation API.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anything that turns a prompt into report text.
pub trait ReportBackend {
    fn generate(&self, model: &str, prompt: &str) -> AppResult<String>;
}

/// One request, one response. The text comes back unmodified.
pub fn generate_report<B: ReportBackend + ?Sized>(
    backend: &B,
    model: &str,
    prompt: &str,
) -> AppResult<String> {
    if prompt.trim().is_empty() {
        return Err(AppError::Generation("empty prompt".into()));
    }
    backend.generate(model, prompt)
}

// ---------------------------
// Gemini wire format
// ---------------------------

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Extract the report text from a `generateContent` response body:
/// the first candidate's text parts, concatenated.
pub fn parse_generate_response(body: &str) -> AppResult<String> {
    let resp: GenerateResponse = serde_json::from_str(body)?;

    let Some(candidate) = resp.candidates.into_iter().next() else {
        let reason = resp
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(AppError::Generation(format!("prompt blocked: {reason}")));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(AppError::Generation(format!(
            "empty response (finish reason: {reason})"
        )));
    }

    Ok(text)
}

/// Turn a non-2xx body into a readable message.
pub fn describe_api_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(e) => {
            let code = if e.error.code == 0 { status } else { e.error.code };
            if e.error.status.is_empty() {
                format!("HTTP {code}: {}", e.error.message)
            } else {
                format!("HTTP {code} {}: {}", e.error.status, e.error.message)
            }
        }
        Err(_) => format!("HTTP {status}: {}", body.trim()),
    }
}

/// Gemini `generateContent` client (blocking, no retry).
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, api_key: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

impl ReportBackend for GeminiClient {
    fn generate(&self, model: &str, prompt: &str) -> AppResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            return Err(AppError::Generation(describe_api_error(
                status.as_u16(),
                &body,
            )));
        }

        parse_generate_response(&body)
    }
}
