use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::evaluator::{EvaluatorError, IdeaEvaluator};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Google Generative Language `generateContent` endpoint.
/// One request per evaluation, no retries, no streaming.
pub struct GeminiEvaluator {
	client: reqwest::Client,
	base_url: String,
	model: String,
	api_key: String,
}

impl GeminiEvaluator {
	pub fn new(api_key: String) -> Self {
		Self::with_base_url(DEFAULT_BASE_URL.to_owned(), api_key)
	}

	// base_url is injectable so tests never touch the live API
	pub fn with_base_url(base_url: String, api_key: String) -> Self {
		Self { client: reqwest::Client::new(), base_url, model: DEFAULT_MODEL.to_owned(), api_key }
	}

	fn request_url(&self) -> String {
		format!("{}/v1beta/models/{}:generateContent?key={}", self.base_url, self.model, self.api_key)
	}
}

#[async_trait]
impl IdeaEvaluator for GeminiEvaluator {
	async fn evaluate(&self, prompt: &str) -> Result<String, EvaluatorError> {
		let request = GenerateContentRequest { contents: vec![Content { parts: vec![Part { text: prompt.to_owned() }] }] };

		let response = self.client.post(self.request_url()).json(&request).send().await?;

		if !response.status().is_success() {
			let status = response.status();
			let body = response.text().await.unwrap_or_default();
			return Err(EvaluatorError::Api { status, body });
		}

		let response = response.json::<GenerateContentResponse>().await?;
		response_text(&response).ok_or(EvaluatorError::EmptyResponse)
	}
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
	contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
	parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
	text: String,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateContentResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
	content: Option<Content>,
}

/// The reply is the concatenated text parts of the first candidate.
fn response_text(response: &GenerateContentResponse) -> Option<String> {
	let content = response.candidates.first()?.content.as_ref()?;
	let text: String = content.parts.iter().map(|part| part.text.as_str()).collect();
	if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_body_matches_the_generate_content_shape() {
		let request = GenerateContentRequest { contents: vec![Content { parts: vec![Part { text: "Evaluate this startup idea: a thing".to_owned() }] }] };
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json, serde_json::json!({"contents": [{"parts": [{"text": "Evaluate this startup idea: a thing"}]}]}));
	}

	#[test]
	fn request_url_includes_model_and_key() {
		let evaluator = GeminiEvaluator::with_base_url("http://localhost:9090".to_owned(), "secret".to_owned());
		assert_eq!(evaluator.request_url(), "http://localhost:9090/v1beta/models/gemini-1.5-flash:generateContent?key=secret");
	}

	#[test]
	fn response_text_concatenates_the_first_candidate_parts() {
		let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
			"candidates": [
				{"content": {"role": "model", "parts": [{"text": "This is "}, {"text": "a promising idea..."}]}},
				{"content": {"role": "model", "parts": [{"text": "ignored second candidate"}]}}
			]
		}))
		.unwrap();
		assert_eq!(response_text(&response).as_deref(), Some("This is a promising idea..."));
	}

	#[test]
	fn missing_candidates_yield_no_text() {
		let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
		assert!(response_text(&response).is_none());
	}

	#[test]
	fn candidate_without_content_yields_no_text() {
		let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
		assert!(response_text(&response).is_none());
	}

	#[test]
	fn empty_part_text_yields_no_text() {
		let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]})).unwrap();
		assert!(response_text(&response).is_none());
	}
}
