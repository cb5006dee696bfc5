use common::AppError;
use dioxus::prelude::*;

mod api;
mod markdown;

#[derive(Clone, PartialEq, Eq)]
enum FormState {
	Idle,
	Loading,
	Success(String),
	Error(AppError),
}

fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("dioxus logger");
	dioxus::launch(App);
}

#[component]
fn App() -> Element {
	let mut idea = use_signal(String::new);
	let mut form_state = use_signal(|| FormState::Idle);

	let on_validate = move |_| async move {
		// moving to Loading clears any previous result or error
		form_state.set(FormState::Loading);
		match api::validate_idea(&idea()).await {
			Ok(message) => form_state.set(FormState::Success(message)),
			Err(e) => form_state.set(FormState::Error(e)),
		}
	};

	let is_loading = matches!(form_state(), FormState::Loading);

	rsx! {
		div { class: "min-h-screen bg-white flex items-center justify-center p-8",
			div { class: "w-full max-w-2xl mx-auto bg-white border border-gray-200 rounded-lg shadow-md",
				div { class: "p-6 border-b border-gray-200",
					h1 { class: "text-2xl font-bold text-gray-800", "Startup Idea Validator" }
					p { class: "mt-1 text-sm text-gray-500", "Enter your startup idea and get instant feedback" }
				}
				div { class: "p-6 space-y-4",
					textarea {
						class: "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
						placeholder: "Describe your startup idea here...",
						rows: 5,
						value: "{idea}",
						oninput: move |evt| idea.set(evt.value()),
					}
					button {
						class: "px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
						disabled: is_loading,
						onclick: on_validate,
						if is_loading {
							"Validating..."
						} else {
							"Validate Idea"
						}
					}
					match form_state() {
						FormState::Idle => rsx! {},
						FormState::Loading => rsx! {
							div { class: "flex items-center justify-center p-4",
								div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
							}
						},
						FormState::Success(message) => rsx! {
							ResultView { message }
						},
						FormState::Error(error) => rsx! {
							div { class: "p-3 bg-red-50 border border-red-200 rounded-md",
								p { class: "font-medium text-red-700", "Error" }
								p { class: "mt-1 text-sm text-red-600", "{error}" }
							}
						},
					}
				}
				div { class: "p-6 border-t border-gray-200 text-sm text-gray-500",
					"Remember, this is a simple validator. Thorough market research is essential for any startup idea."
				}
			}
		}
	}
}

#[component]
fn ResultView(message: String) -> Element {
	rsx! {
		div { class: "p-3 bg-gray-50 border border-gray-200 rounded-md text-gray-700 text-sm leading-relaxed",
			p { class: "font-medium text-gray-800", "Validation Result" }
			div { class: "mt-1 prose prose-sm max-w-none", dangerous_inner_html: markdown::to_html(&message) }
		}
	}
}
