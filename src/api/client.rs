use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::project::{Project, ProjectPayload, UploadedImage};
use crate::error::{ApiError, Result};

const PROJECTS_PATH: &str = "/api/projects";
const UPLOAD_PATH: &str = "/api/upload";

#[derive(Deserialize)]
struct ErrorBody {
	#[serde(default)]
	error: Option<String>,
}

/// Thin client for the portfolio's projects and upload endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::Client,
	base_url: String,
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: base_url.into().trim_end_matches('/').to_string(),
		}
	}

	/// Client for the origin serving the current page.
	pub fn from_window() -> Result<Self> {
		let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".into()))?;
		let origin = window.location().origin()?;
		Ok(Self::new(origin))
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	pub async fn list_projects(&self) -> Result<Vec<Project>> {
		let resp = self.http.get(self.url(PROJECTS_PATH)).send().await?;
		let body = check(resp).await?;
		Ok(serde_json::from_str(&body)?)
	}

	pub async fn create_project(&self, payload: &ProjectPayload) -> Result<()> {
		if payload.password.is_empty() {
			return Err(ApiError::MissingPassword);
		}
		let resp = self
			.http
			.post(self.url(PROJECTS_PATH))
			.json(payload)
			.send()
			.await?;
		check(resp).await?;
		log::info!("project '{}' created", payload.project.title);
		Ok(())
	}

	pub async fn upload_image(
		&self,
		file_name: &str,
		mime: &str,
		bytes: Vec<u8>,
		password: &str,
	) -> Result<UploadedImage> {
		if password.is_empty() {
			return Err(ApiError::MissingPassword);
		}
		let mime = if mime.is_empty() {
			"application/octet-stream"
		} else {
			mime
		};
		let size = bytes.len();
		let part = Part::bytes(bytes)
			.file_name(file_name.to_string())
			.mime_str(mime)?;
		let form = Form::new()
			.part("file", part)
			.text("password", password.to_string());

		let resp = self
			.http
			.post(self.url(UPLOAD_PATH))
			.multipart(form)
			.send()
			.await?;
		let body = check(resp).await?;
		let uploaded: UploadedImage = serde_json::from_str(&body)?;
		log::debug!(
			"uploaded {} ({} bytes) -> {}{}",
			file_name,
			size,
			uploaded.image_path,
			if uploaded.is_placeholder { " [placeholder]" } else { "" }
		);
		Ok(uploaded)
	}
}

async fn check(resp: reqwest::Response) -> Result<String> {
	let status = resp.status();
	let body = resp.text().await?;
	if status.is_success() {
		Ok(body)
	} else {
		Err(ApiError::Server {
			status: status.as_u16(),
			message: error_message(&body, status.canonical_reason()),
		})
	}
}

fn error_message(body: &str, reason: Option<&str>) -> String {
	serde_json::from_str::<ErrorBody>(body)
		.ok()
		.and_then(|b| b.error)
		.filter(|e| !e.trim().is_empty())
		.unwrap_or_else(|| reason.unwrap_or("Request failed").to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_joins_without_double_slashes() {
		let client = ApiClient::new("https://studio.example/");
		assert_eq!(client.url(PROJECTS_PATH), "https://studio.example/api/projects");
		assert_eq!(client.url("api/upload"), "https://studio.example/api/upload");
	}

	#[test]
	fn error_field_wins_over_status_text() {
		assert_eq!(
			error_message(r#"{"error": "Invalid password"}"#, Some("Unauthorized")),
			"Invalid password"
		);
	}

	#[test]
	fn status_text_used_for_non_json_or_blank_errors() {
		assert_eq!(error_message("<html>", Some("Bad Gateway")), "Bad Gateway");
		assert_eq!(error_message(r#"{"error": " "}"#, Some("Bad Request")), "Bad Request");
		assert_eq!(error_message("{}", None), "Request failed");
	}

	#[test]
	fn server_error_display_includes_status() {
		let err = ApiError::Server {
			status: 401,
			message: "Invalid password".into(),
		};
		assert_eq!(err.to_string(), "Invalid password (HTTP 401)");
	}
}
