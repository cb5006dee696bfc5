use std::{env, net::SocketAddr, sync::Arc};

use server::{
	api::{AppState, router},
	evaluator::IdeaEvaluator,
	gemini::GeminiEvaluator,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
	dotenvy::dotenv().ok();

	// A missing key is reported per request, not a startup failure.
	let evaluator = match env::var("GOOGLE_GEMINI_API_KEY") {
		Ok(key) if !key.is_empty() => Some(Arc::new(GeminiEvaluator::new(key)) as Arc<dyn IdeaEvaluator>),
		_ => {
			warn!("GOOGLE_GEMINI_API_KEY is not set; validation requests will be rejected");
			None
		},
	};

	let port: u16 = env::var("SERVER_PORT").unwrap_or_else(|_| "3001".to_string()).parse().expect("SERVER_PORT must be a number");

	let addr = SocketAddr::from(([0, 0, 0, 0], port));
	info!("Server listening on {}", addr);
	let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
	axum::serve(listener, router(AppState { evaluator })).await.unwrap();
}
