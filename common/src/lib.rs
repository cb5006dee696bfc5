use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Errors the web client can surface to the user. Low-level transport
/// detail never makes it into these messages.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Network error. Please try again later.")]
	Network,
	#[error("{0}")]
	Server(String),
}

/// One idea submission. The field is serde-defaulted so a missing `idea`
/// key deserializes to the empty string and fails the length rule the same
/// way a too-short value does.
///
/// The length rule counts raw characters, whitespace included. A
/// whitespace-padded idea that is long enough passes.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ValidateIdeaRequest {
	#[serde(default)]
	#[validate(length(min = 10))]
	pub idea: String,
}

/// The normalized envelope returned by the validate endpoint regardless of
/// outcome. `success=true` carries the generated evaluation, `success=false`
/// a human-readable error description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidateIdeaResponse {
	pub success: bool,
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idea_shorter_than_ten_chars_fails_validation() {
		let request = ValidateIdeaRequest { idea: "app".to_owned() };
		assert!(request.validate().is_err());
	}

	#[test]
	fn idea_of_exactly_ten_chars_passes_validation() {
		let request = ValidateIdeaRequest { idea: "0123456789".to_owned() };
		assert!(request.validate().is_ok());
	}

	#[test]
	fn empty_idea_fails_validation() {
		let request = ValidateIdeaRequest { idea: String::new() };
		assert!(request.validate().is_err());
	}

	// raw length check, no trimming
	#[test]
	fn whitespace_padded_idea_passes_validation() {
		let request = ValidateIdeaRequest { idea: " ".repeat(12) };
		assert!(request.validate().is_ok());
	}

	#[test]
	fn missing_idea_field_deserializes_to_empty_string() {
		let request: ValidateIdeaRequest = serde_json::from_str("{}").unwrap();
		assert_eq!(request.idea, "");
		assert!(request.validate().is_err());
	}

	#[test]
	fn response_envelope_uses_success_and_message_keys() {
		let envelope = ValidateIdeaResponse { success: true, message: "This is a promising idea...".to_owned() };
		let json = serde_json::to_value(&envelope).unwrap();
		assert_eq!(json["success"], true);
		assert_eq!(json["message"], "This is a promising idea...");
	}

	#[test]
	fn network_error_has_a_fixed_user_facing_message() {
		assert_eq!(AppError::Network.to_string(), "Network error. Please try again later.");
	}

	#[test]
	fn server_error_passes_the_server_message_through() {
		let error = AppError::Server("API key is missing. Please check your environment variables.".to_owned());
		assert_eq!(error.to_string(), "API key is missing. Please check your environment variables.");
	}
}
