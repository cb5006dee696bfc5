use common::{AppError, ValidateIdeaRequest, ValidateIdeaResponse};
use reqwest::Client;

const FALLBACK_SERVER_MESSAGE: &str = "Something went wrong. Please try again.";

// reqwest needs an absolute URL even under wasm
fn endpoint_url() -> String {
	let origin = web_sys::window().and_then(|window| window.location().origin().ok()).unwrap_or_default();
	format!("{origin}/api/validate")
}

/// One round trip to the validate endpoint. Returns the generated
/// evaluation text, or the message the user should see instead.
pub async fn validate_idea(idea: &str) -> Result<String, AppError> {
	let response = Client::new().post(endpoint_url()).json(&ValidateIdeaRequest { idea: idea.to_owned() }).send().await.map_err(|_| AppError::Network)?;

	if !response.status().is_success() {
		let message = match response.json::<ValidateIdeaResponse>().await {
			Ok(envelope) if !envelope.message.is_empty() => envelope.message,
			_ => FALLBACK_SERVER_MESSAGE.to_owned(),
		};
		return Err(AppError::Server(message));
	}

	let envelope = response.json::<ValidateIdeaResponse>().await.map_err(|_| AppError::Network)?;
	Ok(envelope.message)
}
