//! Error types surfaced to visitors and admins.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the projects API.
#[derive(Error, Debug)]
pub enum ApiError {
	/// Request never completed (offline, CORS, aborted).
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Server answered with a non-2xx status.
	#[error("{message} (HTTP {status})")]
	Server { status: u16, message: String },

	/// Response body was not the expected JSON.
	#[error("Unexpected response: {0}")]
	Decode(#[from] serde_json::Error),

	/// A browser API call failed.
	#[error("Browser error: {0}")]
	Browser(String),

	/// No admin password has been entered this session.
	#[error("Enter the admin password first")]
	MissingPassword,
}

impl From<JsValue> for ApiError {
	fn from(value: JsValue) -> Self {
		ApiError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

/// Project form validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
	#[error("{0} is required")]
	MissingField(&'static str),

	#[error("A live link is required unless the project is in development")]
	MissingLink,

	#[error("Choose a main image for the project")]
	MissingImage,

	#[error("Progress must be between 0 and 100, got {0}")]
	ProgressOutOfRange(u32),
}

/// API result type
pub type Result<T> = std::result::Result<T, ApiError>;
