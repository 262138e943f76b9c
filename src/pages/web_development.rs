use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::code_window::CodeWindow;
use crate::components::light_lines::LightLines;
use crate::components::particle_network::{ColorScheme, NetworkConfig, ParticleNetworkCanvas, Rgb};

const OFFERINGS: &[(&str, &str)] = &[
	("Marketing sites", "Fast, accessible pages that rank and convert."),
	("Web applications", "Dashboards, portals and booking systems built to last."),
	("E-commerce", "Storefronts wired to payments, stock and shipping."),
	("Maintenance", "Updates, monitoring and small changes on a monthly plan."),
];

const PROCESS: &[&str] = &[
	"Discovery call and written scope",
	"Design in the browser, reviewed weekly",
	"Build, test and launch",
	"Hand-over with docs and training",
];

const COMPONENT_SNIPPET: &str = r#"#[component]
pub fn Hero(title: &'static str) -> impl IntoView {
    let (count, set_count) = signal(0);
    view! {
        <h1>{title}</h1>
        <button on:click=move |_| set_count.update(|n| *n += 1)>
            "Clicked " {count} " times"
        </button>
    }
}"#;

fn hero_network() -> NetworkConfig {
	NetworkConfig::hero().with_colors(ColorScheme {
		node: Rgb(56, 189, 248),
		edge: Rgb(14, 165, 233),
		glow: Rgb(125, 211, 252),
		..ColorScheme::default()
	})
}

/// Web-development services page.
#[component]
pub fn WebDevelopment() -> impl IntoView {
	view! {
		<section class="hero hero-web">
			<div class="hero-network">
				<ParticleNetworkCanvas config=hero_network() />
			</div>
			<LightLines count=6 />
			<div class="hero-content">
				<h1>"Websites that pull their weight"</h1>
				<p class="subtitle">"Design and development for small businesses that need more than a template."</p>
				<A href="/">"Looking for AI integration?"</A>
			</div>
		</section>

		<section class="services">
			<h2>"What we offer"</h2>
			<div class="service-grid">
				{OFFERINGS
					.iter()
					.map(|(title, body)| {
						view! {
							<article class="service-card">
								<h3>{*title}</h3>
								<p>{*body}</p>
							</article>
						}
					})
					.collect_view()}
			</div>
		</section>

		<section class="process">
			<h2>"Process"</h2>
			<ol>{PROCESS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}</ol>
			<CodeWindow title="hero.rs" code=COMPONENT_SNIPPET />
		</section>
	}
}
