//! Projects API: wire types, form drafts and the HTTP client.

mod client;
mod project;
pub mod session;

pub use client::ApiClient;
pub use project::{
	LINK_PLACEHOLDER, Project, ProjectDraft, ProjectStatus, UploadedImage, VisualEffect,
	visible_projects,
};
