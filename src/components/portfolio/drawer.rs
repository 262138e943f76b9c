use leptos::prelude::*;
use leptos::task::spawn_local;

use super::card::ProjectCard;
use crate::api::{ApiClient, Project, visible_projects};
use crate::components::toast::use_toasts;

/// Slide-out list of portfolio projects, fetched on first open.
#[component]
pub fn PortfolioDrawer() -> impl IntoView {
	let toasts = use_toasts();
	let (open, set_open) = signal(false);
	let projects = RwSignal::new(Vec::<Project>::new());
	let loading = RwSignal::new(false);
	let loaded = StoredValue::new(false);
	let query = RwSignal::new(String::new());

	let load = move || {
		if loaded.get_value() {
			return;
		}
		loaded.set_value(true);
		loading.set(true);
		spawn_local(async move {
			let result = match ApiClient::from_window() {
				Ok(client) => client.list_projects().await,
				Err(e) => Err(e),
			};
			match result {
				Ok(list) => {
					log::info!("loaded {} projects", list.len());
					projects.set(list);
				}
				Err(e) => {
					// Allow the next open to retry.
					loaded.set_value(false);
					toasts.error(format!("Could not load projects: {}", e));
				}
			}
			loading.set(false);
		});
	};

	let toggle = move |_| {
		let next = !open.get_untracked();
		set_open.set(next);
		if next {
			load();
		}
	};

	view! {
		<aside class="portfolio-drawer" class:open=move || open.get()>
			<button class="drawer-toggle" on:click=toggle>
				{move || if open.get() { "Close portfolio" } else { "View our work" }}
			</button>
			<Show when=move || open.get()>
				<input
					class="drawer-filter"
					type="search"
					placeholder="Filter by category"
					prop:value=move || query.get()
					on:input=move |ev| query.set(event_target_value(&ev))
				/>
				<Show
					when=move || !loading.get()
					fallback=|| view! { <p class="drawer-loading">"Loading projects..."</p> }
				>
					{move || {
						let q = query.get();
						let cards: Vec<Project> = projects
							.with(|all| visible_projects(all, &q).into_iter().cloned().collect());
						if cards.is_empty() {
							view! { <p class="drawer-empty">"No projects in this category yet."</p> }
								.into_any()
						} else {
							view! {
								<ul class="project-list">
									{cards
										.into_iter()
										.map(|project| view! { <ProjectCard project /> })
										.collect_view()}
								</ul>
							}
								.into_any()
						}
					}}
				</Show>
			</Show>
		</aside>
	}
}
