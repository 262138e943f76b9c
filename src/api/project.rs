use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Placeholder shown in the empty link field. Never sent to the API.
pub const LINK_PLACEHOLDER: &str = "https://example.com";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
	#[default]
	Completed,
	#[serde(rename = "In Development")]
	InDevelopment,
}

impl ProjectStatus {
	pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Completed, ProjectStatus::InDevelopment];

	pub fn label(self) -> &'static str {
		match self {
			ProjectStatus::Completed => "Completed",
			ProjectStatus::InDevelopment => "In Development",
		}
	}

	pub fn from_label(label: &str) -> Self {
		Self::ALL
			.into_iter()
			.find(|s| s.label() == label)
			.unwrap_or_default()
	}
}

/// Effect preset drawn over a project card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualEffect {
	#[default]
	None,
	Glow,
	NeuralNetwork,
	LightLines,
	Gradient,
}

impl VisualEffect {
	pub const ALL: [VisualEffect; 5] = [
		VisualEffect::None,
		VisualEffect::Glow,
		VisualEffect::NeuralNetwork,
		VisualEffect::LightLines,
		VisualEffect::Gradient,
	];

	pub fn key(self) -> &'static str {
		match self {
			VisualEffect::None => "none",
			VisualEffect::Glow => "glow",
			VisualEffect::NeuralNetwork => "neural-network",
			VisualEffect::LightLines => "light-lines",
			VisualEffect::Gradient => "gradient",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			VisualEffect::None => "None",
			VisualEffect::Glow => "Glow",
			VisualEffect::NeuralNetwork => "Neural network",
			VisualEffect::LightLines => "Light lines",
			VisualEffect::Gradient => "Gradient",
		}
	}

	pub fn from_key(key: &str) -> Self {
		Self::ALL
			.into_iter()
			.find(|e| e.key() == key)
			.unwrap_or_default()
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
	pub visual_effect: VisualEffect,
	/// Load the card image eagerly.
	pub image_priority: bool,
	pub show_code_screenshot: bool,
	pub is_placeholder_image: bool,
}

/// A portfolio entry as stored by the projects API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	pub title: String,
	pub description: String,
	pub category: String,
	pub technologies: Vec<String>,
	pub image: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary_image: Option<String>,
	pub features: Vec<String>,
	pub link: String,
	pub status: ProjectStatus,
	pub display: DisplayOptions,
	pub priority: u32,
	pub progress: u32,
}

/// POST body for `/api/projects`.
#[derive(Clone, Debug, Serialize)]
pub struct ProjectPayload {
	#[serde(flatten)]
	pub project: Project,
	pub password: String,
}

/// Path returned by `/api/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
	pub image_path: String,
	#[serde(default)]
	pub is_placeholder: bool,
}

/// Raw values of the admin project form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
	pub title: String,
	pub description: String,
	pub category: String,
	/// Comma separated.
	pub technologies: String,
	/// One per line.
	pub features: String,
	pub link: String,
	pub status: ProjectStatus,
	pub visual_effect: VisualEffect,
	pub image_priority: bool,
	pub show_code_screenshot: bool,
	pub priority: u32,
	pub progress: u32,
	pub has_image: bool,
}

fn split_list(raw: &str, sep: char) -> Vec<String> {
	raw.split(sep)
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(String::from)
		.collect()
}

impl ProjectDraft {
	pub fn validate(&self) -> Result<(), FormError> {
		let required = [
			("Title", &self.title),
			("Description", &self.description),
			("Category", &self.category),
		];
		if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
			return Err(FormError::MissingField(*name));
		}
		if split_list(&self.technologies, ',').is_empty() {
			return Err(FormError::MissingField("Technologies"));
		}
		if self.status != ProjectStatus::InDevelopment && self.link.trim().is_empty() {
			return Err(FormError::MissingLink);
		}
		if !self.has_image {
			return Err(FormError::MissingImage);
		}
		// Completed projects always send 100.
		if self.status == ProjectStatus::InDevelopment && self.progress > 100 {
			return Err(FormError::ProgressOutOfRange(self.progress));
		}
		Ok(())
	}

	pub fn to_payload(
		&self,
		image: UploadedImage,
		secondary_image: Option<UploadedImage>,
		password: &str,
	) -> ProjectPayload {
		let progress = match self.status {
			ProjectStatus::Completed => 100,
			ProjectStatus::InDevelopment => self.progress.min(100),
		};
		ProjectPayload {
			project: Project {
				id: None,
				title: self.title.trim().to_string(),
				description: self.description.trim().to_string(),
				category: self.category.trim().to_string(),
				technologies: split_list(&self.technologies, ','),
				image: image.image_path,
				secondary_image: secondary_image.map(|s| s.image_path),
				features: split_list(&self.features, '\n'),
				link: self.link.trim().to_string(),
				status: self.status,
				display: DisplayOptions {
					visual_effect: self.visual_effect,
					image_priority: self.image_priority,
					show_code_screenshot: self.show_code_screenshot,
					is_placeholder_image: image.is_placeholder,
				},
				priority: self.priority,
				progress,
			},
			password: password.to_string(),
		}
	}
}

/// Projects whose category contains `query` (case-insensitive), highest
/// priority first.
pub fn visible_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
	let query = query.trim().to_lowercase();
	let mut out: Vec<&Project> = projects
		.iter()
		.filter(|p| query.is_empty() || p.category.to_lowercase().contains(&query))
		.collect();
	out.sort_by(|a, b| match b.priority.cmp(&a.priority) {
		Ordering::Equal => a.title.cmp(&b.title),
		other => other,
	});
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft() -> ProjectDraft {
		ProjectDraft {
			title: " Atlas ".into(),
			description: "Booking platform".into(),
			category: "Web Development".into(),
			technologies: "Rust, Leptos, ,Postgres".into(),
			features: "Calendar sync\n\n Payments \n".into(),
			link: "https://atlas.example".into(),
			has_image: true,
			..ProjectDraft::default()
		}
	}

	fn uploaded(path: &str) -> UploadedImage {
		UploadedImage {
			image_path: path.into(),
			is_placeholder: false,
		}
	}

	#[test]
	fn in_development_without_link_serializes_empty_link() {
		let d = ProjectDraft {
			link: String::new(),
			status: ProjectStatus::InDevelopment,
			progress: 40,
			..draft()
		};
		assert_eq!(d.validate(), Ok(()));

		let json = serde_json::to_value(d.to_payload(uploaded("/uploads/a.png"), None, "pw"))
			.expect("payload serializes");
		assert_eq!(json["link"], "");
		assert_ne!(json["link"], LINK_PLACEHOLDER);
		assert_eq!(json["status"], "In Development");
		assert_eq!(json["progress"], 40);
		assert_eq!(json["password"], "pw");
	}

	#[test]
	fn completed_project_requires_link() {
		let d = ProjectDraft {
			link: "   ".into(),
			..draft()
		};
		assert_eq!(d.validate(), Err(FormError::MissingLink));
	}

	#[test]
	fn validation_reports_first_missing_field() {
		let d = ProjectDraft {
			description: " ".into(),
			category: String::new(),
			..draft()
		};
		assert_eq!(d.validate(), Err(FormError::MissingField("Description")));

		let d = ProjectDraft {
			technologies: " , ".into(),
			..draft()
		};
		assert_eq!(d.validate(), Err(FormError::MissingField("Technologies")));

		let d = ProjectDraft {
			has_image: false,
			..draft()
		};
		assert_eq!(d.validate(), Err(FormError::MissingImage));

		let d = ProjectDraft {
			status: ProjectStatus::InDevelopment,
			progress: 140,
			..draft()
		};
		assert_eq!(d.validate(), Err(FormError::ProgressOutOfRange(140)));
	}

	#[test]
	fn completed_project_ignores_stale_progress() {
		let d = ProjectDraft {
			status: ProjectStatus::Completed,
			progress: 150,
			..draft()
		};
		assert_eq!(d.validate(), Ok(()));
		assert_eq!(d.to_payload(uploaded("/uploads/a.png"), None, "pw").project.progress, 100);
	}

	#[test]
	fn payload_trims_and_splits_lists() {
		let d = ProjectDraft {
			visual_effect: VisualEffect::NeuralNetwork,
			show_code_screenshot: true,
			priority: 7,
			..draft()
		};
		let payload = d.to_payload(
			UploadedImage {
				image_path: "/placeholder.png".into(),
				is_placeholder: true,
			},
			Some(uploaded("/uploads/b.png")),
			"pw",
		);
		let p = &payload.project;
		assert_eq!(p.title, "Atlas");
		assert_eq!(p.technologies, ["Rust", "Leptos", "Postgres"]);
		assert_eq!(p.features, ["Calendar sync", "Payments"]);
		assert_eq!(p.progress, 100);
		assert!(p.display.is_placeholder_image);

		let json = serde_json::to_value(&payload).expect("payload serializes");
		assert_eq!(json["secondaryImage"], "/uploads/b.png");
		assert_eq!(json["display"]["visualEffect"], "neural-network");
		assert_eq!(json["display"]["showCodeScreenshot"], true);
		assert!(json.get("_id").is_none());
	}

	#[test]
	fn project_decodes_with_missing_fields() {
		let raw = r#"[
			{"_id": "1", "title": "A", "category": "AI Integration", "status": "In Development"},
			{"title": "B", "category": "web", "technologies": ["Rust"], "priority": 3,
			 "display": {"visualEffect": "glow"}}
		]"#;
		let projects: Vec<Project> = serde_json::from_str(raw).expect("projects decode");
		assert_eq!(projects[0].id.as_deref(), Some("1"));
		assert_eq!(projects[0].status, ProjectStatus::InDevelopment);
		assert_eq!(projects[1].display.visual_effect, VisualEffect::Glow);
		assert!(projects[1].link.is_empty());
	}

	#[test]
	fn upload_response_decodes() {
		let img: UploadedImage =
			serde_json::from_str(r#"{"imagePath": "/uploads/x.webp", "isPlaceholder": false}"#)
				.expect("upload decodes");
		assert_eq!(img, uploaded("/uploads/x.webp"));
	}

	#[test]
	fn category_filter_is_case_insensitive_and_ordered() {
		let mk = |title: &str, category: &str, priority| Project {
			title: title.into(),
			category: category.into(),
			priority,
			..Project::default()
		};
		let projects = vec![
			mk("Chatbot", "AI Integration", 2),
			mk("Shop", "Web Development", 5),
			mk("Agent", "ai automation", 2),
			mk("Blog", "Web development", 1),
		];

		let titles = |q: &str| -> Vec<String> {
			visible_projects(&projects, q)
				.into_iter()
				.map(|p| p.title.clone())
				.collect()
		};
		assert_eq!(titles("AI"), ["Agent", "Chatbot"]);
		assert_eq!(titles(" web "), ["Shop", "Blog"]);
		assert_eq!(titles(""), ["Shop", "Agent", "Chatbot", "Blog"]);
		assert!(titles("mobile").is_empty());
	}

	#[test]
	fn enum_keys_round_trip_through_labels() {
		for effect in VisualEffect::ALL {
			assert_eq!(VisualEffect::from_key(effect.key()), effect);
		}
		assert_eq!(ProjectStatus::from_label("In Development"), ProjectStatus::InDevelopment);
		assert_eq!(ProjectStatus::from_label("???"), ProjectStatus::Completed);
	}
}
