use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::api::{
	ApiClient, LINK_PLACEHOLDER, ProjectDraft, ProjectStatus, UploadedImage, VisualEffect, session,
};
use crate::components::toast::use_toasts;
use crate::error::{ApiError, FormError};

type FileRef = NodeRef<leptos::html::Input>;

fn chosen_file(input: &FileRef) -> Option<File> {
	input.get_untracked()?.files()?.get(0)
}

fn clear_file(input: &FileRef) {
	if let Some(el) = input.get_untracked() {
		el.set_value("");
	}
}

async fn upload(client: &ApiClient, file: File, password: &str) -> Result<UploadedImage, ApiError> {
	let buffer = JsFuture::from(file.array_buffer()).await?;
	let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
	client
		.upload_image(&file.name(), &file.type_(), bytes, password)
		.await
}

// Primary image, then the optional secondary one, then the record itself.
async fn submit(
	draft: &ProjectDraft,
	image: File,
	secondary: Option<File>,
	password: &str,
) -> Result<(), ApiError> {
	let client = ApiClient::from_window()?;
	let image = upload(&client, image, password).await?;
	let secondary = match secondary {
		Some(file) => Some(upload(&client, file, password).await?),
		None => None,
	};
	client
		.create_project(&draft.to_payload(image, secondary, password))
		.await
}

/// Admin form for adding a portfolio project.
#[component]
pub fn AdminProjects() -> impl IntoView {
	let toasts = use_toasts();
	let draft = RwSignal::new(ProjectDraft::default());
	let password = RwSignal::new(session::load_password().unwrap_or_default());
	let submitting = RwSignal::new(false);
	let image_ref: FileRef = NodeRef::new();
	let secondary_ref: FileRef = NodeRef::new();
	let in_development = move || draft.with(|d| d.status == ProjectStatus::InDevelopment);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if submitting.get_untracked() {
			return;
		}
		let current = draft.get_untracked();
		if let Err(e) = current.validate() {
			toasts.error(e.to_string());
			return;
		}
		let pw = password.get_untracked();
		if pw.trim().is_empty() {
			toasts.error(ApiError::MissingPassword.to_string());
			return;
		}
		let Some(image) = chosen_file(&image_ref) else {
			toasts.error(FormError::MissingImage.to_string());
			return;
		};
		let secondary = chosen_file(&secondary_ref);
		session::store_password(&pw);
		submitting.set(true);

		spawn_local(async move {
			match submit(&current, image, secondary, &pw).await {
				Ok(()) => {
					toasts.success(format!("Added \"{}\" to the portfolio", current.title.trim()));
					draft.set(ProjectDraft::default());
					clear_file(&image_ref);
					clear_file(&secondary_ref);
				}
				Err(e) => {
					if matches!(e, ApiError::Server { status: 401, .. }) {
						session::clear_password();
						password.set(String::new());
					}
					toasts.error(format!("Could not save project: {}", e));
				}
			}
			submitting.set(false);
		});
	};

	view! {
		<section class="admin">
			<h1>"Add a project"</h1>
			<form class="project-form" on:submit=on_submit>
				<label>
					"Admin password"
					<input
						type="password"
						prop:value=move || password.get()
						on:input=move |ev| password.set(event_target_value(&ev))
					/>
				</label>

				<label>
					"Title"
					<input
						type="text"
						prop:value=move || draft.with(|d| d.title.clone())
						on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
					/>
				</label>
				<label>
					"Description"
					<textarea
						prop:value=move || draft.with(|d| d.description.clone())
						on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
					/>
				</label>
				<label>
					"Category"
					<input
						type="text"
						placeholder="AI Integration, Web Development..."
						prop:value=move || draft.with(|d| d.category.clone())
						on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
					/>
				</label>
				<label>
					"Technologies (comma separated)"
					<input
						type="text"
						prop:value=move || draft.with(|d| d.technologies.clone())
						on:input=move |ev| draft.update(|d| d.technologies = event_target_value(&ev))
					/>
				</label>
				<label>
					"Features (one per line)"
					<textarea
						prop:value=move || draft.with(|d| d.features.clone())
						on:input=move |ev| draft.update(|d| d.features = event_target_value(&ev))
					/>
				</label>

				<label>
					"Status"
					<select
						prop:value=move || draft.with(|d| d.status.label())
						on:change=move |ev| {
							draft.update(|d| d.status = ProjectStatus::from_label(&event_target_value(&ev)))
						}
					>
						{ProjectStatus::ALL
							.into_iter()
							.map(|s| view! { <option value=s.label()>{s.label()}</option> })
							.collect_view()}
					</select>
				</label>
				<label>
					{move || {
						if in_development() { "Live link (optional while in development)" } else { "Live link" }
					}}
					<input
						type="url"
						placeholder=LINK_PLACEHOLDER
						prop:value=move || draft.with(|d| d.link.clone())
						on:input=move |ev| draft.update(|d| d.link = event_target_value(&ev))
					/>
				</label>
				<Show when=in_development>
					<label>
						"Progress (%)"
						<input
							type="number"
							min="0"
							max="100"
							prop:value=move || draft.with(|d| d.progress.to_string())
							on:input=move |ev| {
								draft.update(|d| d.progress = event_target_value(&ev).parse().unwrap_or(0))
							}
						/>
					</label>
				</Show>
				<label>
					"Priority (higher shows first)"
					<input
						type="number"
						min="0"
						prop:value=move || draft.with(|d| d.priority.to_string())
						on:input=move |ev| {
							draft.update(|d| d.priority = event_target_value(&ev).parse().unwrap_or(0))
						}
					/>
				</label>

				<fieldset>
					<legend>"Display"</legend>
					<label>
						"Visual effect"
						<select
							prop:value=move || draft.with(|d| d.visual_effect.key())
							on:change=move |ev| {
								draft.update(|d| d.visual_effect = VisualEffect::from_key(&event_target_value(&ev)))
							}
						>
							{VisualEffect::ALL
								.into_iter()
								.map(|e| view! { <option value=e.key()>{e.label()}</option> })
								.collect_view()}
						</select>
					</label>
					<label class="checkbox">
						<input
							type="checkbox"
							prop:checked=move || draft.with(|d| d.image_priority)
							on:change=move |ev| draft.update(|d| d.image_priority = event_target_checked(&ev))
						/>
						"Load image with priority"
					</label>
					<label class="checkbox">
						<input
							type="checkbox"
							prop:checked=move || draft.with(|d| d.show_code_screenshot)
							on:change=move |ev| {
								draft.update(|d| d.show_code_screenshot = event_target_checked(&ev))
							}
						/>
						"Show secondary image as a code screenshot"
					</label>
				</fieldset>

				<label>
					"Main image"
					<input
						type="file"
						accept="image/*"
						node_ref=image_ref
						on:change=move |_| {
							let chosen = chosen_file(&image_ref).is_some();
							draft.update(|d| d.has_image = chosen)
						}
					/>
				</label>
				<label>
					"Secondary image"
					<input
						type="file"
						accept="image/*"
						node_ref=secondary_ref
					/>
				</label>

				<button type="submit" disabled=move || submitting.get()>
					{move || if submitting.get() { "Saving..." } else { "Add project" }}
				</button>
			</form>
		</section>
	}
}
