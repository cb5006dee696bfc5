use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use common::{ValidateIdeaRequest, ValidateIdeaResponse};
use validator::Validate;

use crate::{
	error::ServerAppError,
	evaluator::{IdeaEvaluator, evaluation_prompt},
};

#[derive(Clone)]
pub struct AppState {
	/// `None` when no API key was available at startup. The endpoint then
	/// reports a configuration error per request instead of refusing to boot.
	pub evaluator: Option<Arc<dyn IdeaEvaluator>>,
}

pub fn router(state: AppState) -> Router {
	Router::new().route("/api/validate", post(validate_handler)).with_state(state)
}

pub async fn validate_handler(
	State(state): State<AppState>,
	Json(payload): Json<ValidateIdeaRequest>,
) -> Result<Json<ValidateIdeaResponse>, ServerAppError> {
	payload.validate().map_err(|_| ServerAppError::IdeaTooShort)?;

	let evaluator = state.evaluator.clone().ok_or(ServerAppError::MissingApiKey)?;
	let message = evaluator.evaluate(&evaluation_prompt(&payload.idea)).await?;

	Ok(Json(ValidateIdeaResponse { success: true, message }))
}
