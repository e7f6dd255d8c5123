// src/generator/client.rs
use crate::utils::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
// Report generation is slow; allow the model plenty of time before bailing.
const REQUEST_TIMEOUT_SECS: u64 = 180;

// --- Wire Types ---
// Minimal subset of the generateContent request/response shapes.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Creates a reqwest client configured for the generator API.
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Sends the prompt to the generator and returns the raw report text.
///
/// The API key travels in the `x-goog-api-key` header so it never appears in
/// URLs or logs. An HTTP 429 maps to [`GeneratorError::RateLimited`]; a
/// well-formed response with no usable text maps to
/// [`GeneratorError::EmptyResponse`].
pub async fn generate_report(
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, GeneratorError> {
    let client = build_client()?; // Propagate client build error if any
    let url = format!("{}/{}:generateContent", API_BASE, model);

    tracing::info!("Requesting report from model: {}", model);
    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await?; // Propagates reqwest::Error as GeneratorError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} from generator", status);
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeneratorError::RateLimited);
        }
        return Err(GeneratorError::Http(status));
    }

    let parsed: GenerateResponse = response
        .json()
        .await
        .map_err(|e| GeneratorError::Parse(e.to_string()))?;

    let text = flatten_response(parsed);
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }

    tracing::debug!("Generator returned {} bytes of report text", text.len());
    Ok(text)
}

/// Joins the text parts of the first candidate, matching the convenience
/// accessor the upstream SDKs expose.
fn flatten_response(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}
