use async_trait::async_trait;
use thiserror::Error;

/// The fixed instruction prepended to every submission before it is sent
/// to the model.
pub const PROMPT_PREFIX: &str = "Evaluate this startup idea: ";

#[derive(Debug, Error)]
pub enum EvaluatorError {
	#[error("request to the model backend failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("model backend returned {status}: {body}")]
	Api { status: reqwest::StatusCode, body: String },
	#[error("model backend returned an empty response")]
	EmptyResponse,
}

/// A hosted text-generation capability: one prompt in, one block of text
/// out. The endpoint treats implementations as opaque, so tests can swap in
/// a deterministic stub for the live Gemini client.
#[async_trait]
pub trait IdeaEvaluator: Send + Sync {
	async fn evaluate(&self, prompt: &str) -> Result<String, EvaluatorError>;
}

pub fn evaluation_prompt(idea: &str) -> String {
	format!("{PROMPT_PREFIX}{idea}")
}
