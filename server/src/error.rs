use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use common::ValidateIdeaResponse;
use thiserror::Error;

use crate::evaluator::EvaluatorError;

/// Everything the validate endpoint can fail with. The display strings are
/// the exact client-facing messages; upstream detail only reaches the
/// operator log.
#[derive(Debug, Error)]
pub enum ServerAppError {
	#[error("Please provide more details about your idea.")]
	IdeaTooShort,
	#[error("API key is missing. Please check your environment variables.")]
	MissingApiKey,
	#[error("Failed to get a response from the AI model.")]
	EmptyModelResponse,
	#[error("Something went wrong. Please try again later.")]
	Evaluation(#[source] EvaluatorError),
}

impl From<EvaluatorError> for ServerAppError {
	fn from(err: EvaluatorError) -> Self {
		match err {
			EvaluatorError::EmptyResponse => Self::EmptyModelResponse,
			other => Self::Evaluation(other),
		}
	}
}

impl IntoResponse for ServerAppError {
	fn into_response(self) -> Response {
		let status = match &self {
			Self::IdeaTooShort => StatusCode::BAD_REQUEST,
			Self::MissingApiKey => {
				tracing::warn!("rejected request: no API key was configured at startup");
				StatusCode::INTERNAL_SERVER_ERROR
			},
			Self::EmptyModelResponse => {
				tracing::error!("the model returned no usable response");
				StatusCode::INTERNAL_SERVER_ERROR
			},
			Self::Evaluation(source) => {
				tracing::error!("error validating the idea: {source}");
				StatusCode::INTERNAL_SERVER_ERROR
			},
		};
		(status, Json(ValidateIdeaResponse { success: false, message: self.to_string() })).into_response()
	}
}
