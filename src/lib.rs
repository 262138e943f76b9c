//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Linked only for its `js` feature, which `rand` needs on wasm.
use getrandom as _;

// Modules
mod api;
mod components;
mod error;
mod pages;

use crate::components::toast::{ToastHost, provide_toasts};

// Top-Level pages
use crate::pages::admin::AdminProjects;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::web_development::WebDevelopment;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The site router: landing pages, the admin form and a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_toasts();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Studio | AI integration and web development" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/web-development") view=WebDevelopment />
				<Route path=path!("/admin/projects") view=AdminProjects />
			</Routes>
		</Router>
		<ToastHost />
	}
}
