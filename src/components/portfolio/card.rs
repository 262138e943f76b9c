use leptos::prelude::*;

use crate::api::{Project, ProjectStatus, VisualEffect};
use crate::components::light_lines::LightLines;
use crate::components::particle_network::{NetworkConfig, ParticleNetworkCanvas};

fn effect_class(effect: VisualEffect) -> String {
	format!("project-card effect-{}", effect.key())
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
	let Project {
		title,
		description,
		category,
		technologies,
		image,
		secondary_image,
		features,
		link,
		status,
		display,
		progress,
		..
	} = project;

	let overlay = match display.visual_effect {
		VisualEffect::NeuralNetwork => Some(
			view! {
				<div class="card-effect">
					<ParticleNetworkCanvas config=NetworkConfig::title().with_node_count(14) />
				</div>
			}
			.into_any(),
		),
		VisualEffect::LightLines => Some(view! { <LightLines count=3 /> }.into_any()),
		_ => None,
	};
	let loading = if display.image_priority { "eager" } else { "lazy" };
	let screenshot = secondary_image
		.filter(|_| display.show_code_screenshot)
		.map(|src| {
			view! {
				<figure class="code-screenshot">
					<div class="code-window-bar">
						<span class="dot dot-red" />
						<span class="dot dot-yellow" />
						<span class="dot dot-green" />
					</div>
					<img src=src alt="Code screenshot" loading="lazy" />
				</figure>
			}
		});
	let progress_bar = (status == ProjectStatus::InDevelopment).then(|| {
		view! {
			<div class="progress" title=format!("{}% complete", progress)>
				<div class="progress-fill" style=format!("width: {}%;", progress.min(100)) />
			</div>
		}
	});
	let live_link = (!link.is_empty()).then(|| {
		view! {
			<a class="project-link" href=link target="_blank" rel="noopener noreferrer">
				"Visit project"
			</a>
		}
	});

	view! {
		<li class=effect_class(display.visual_effect)>
			<div class="project-media">
				<img src=image alt=title.clone() loading=loading />
				{overlay}
			</div>
			<div class="project-body">
				<span class="project-category">{category}</span>
				<h3>{title}</h3>
				<span class="project-status">{status.label()}</span>
				<p>{description}</p>
				<ul class="tech-tags">
					{technologies
						.into_iter()
						.map(|t| view! { <li>{t}</li> })
						.collect_view()}
				</ul>
				<ul class="feature-list">
					{features
						.into_iter()
						.map(|f| view! { <li>{f}</li> })
						.collect_view()}
				</ul>
				{progress_bar}
				{screenshot}
				{live_link}
			</div>
		</li>
	}
}
