use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::code_window::CodeWindow;
use crate::components::light_lines::LightLines;
use crate::components::particle_network::{NetworkConfig, ParticleNetworkCanvas};
use crate::components::portfolio::PortfolioDrawer;

struct Service {
	title: &'static str,
	body: &'static str,
}

struct Tier {
	name: &'static str,
	price: &'static str,
	blurb: &'static str,
	features: &'static [&'static str],
	featured: bool,
}

struct Milestone {
	phase: &'static str,
	title: &'static str,
	body: &'static str,
}

const SERVICES: &[Service] = &[
	Service {
		title: "Process automation",
		body: "Agents that read your inbox, fill your CRM and hand off to a human when it matters.",
	},
	Service {
		title: "Knowledge assistants",
		body: "Answer staff and customer questions from your own documents, with sources.",
	},
	Service {
		title: "Data pipelines",
		body: "Turn invoices, forms and PDFs into clean structured records.",
	},
	Service {
		title: "Custom integrations",
		body: "Connect language models to the tools you already pay for.",
	},
];

const TIERS: &[Tier] = &[
	Tier {
		name: "Pilot",
		price: "from $2,500",
		blurb: "One workflow, proven in two weeks.",
		features: &["Discovery workshop", "Single automation", "Usage report"],
		featured: false,
	},
	Tier {
		name: "Integration",
		price: "from $8,000",
		blurb: "AI woven into a department.",
		features: &[
			"Up to five workflows",
			"Private knowledge base",
			"Staff training",
			"30 days of support",
		],
		featured: true,
	},
	Tier {
		name: "Partner",
		price: "monthly",
		blurb: "An ongoing AI team on call.",
		features: &["Continuous improvements", "Monitoring", "Priority support"],
		featured: false,
	},
];

const ROADMAP: &[Milestone] = &[
	Milestone {
		phase: "01",
		title: "Audit",
		body: "Map where time goes and which tasks are repetitive enough to hand over.",
	},
	Milestone {
		phase: "02",
		title: "Prototype",
		body: "A working assistant on real data, measured against the manual process.",
	},
	Milestone {
		phase: "03",
		title: "Integrate",
		body: "Wire it into your systems with access control and audit logs.",
	},
	Milestone {
		phase: "04",
		title: "Scale",
		body: "Roll out across teams and keep tuning as usage grows.",
	},
];

const AGENT_SNIPPET: &str = r#"import { createAgent } from "@studio/agents";

// Triage incoming support mail
const agent = createAgent({
  model: "gpt-4o",
  tools: [crm.lookup, tickets.create],
  temperature: 0.2,
});

export async function handle(mail) {
  const result = await agent.run(mail.body);
  return result.escalate ? notifyHuman(mail) : result.reply;
}"#;

/// AI business-integration landing page.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<section class="hero">
				<div class="hero-network">
					<ParticleNetworkCanvas config=NetworkConfig::hero() />
				</div>
				<LightLines count=8 />
				<div class="hero-content">
					<div class="title-network-wrap">
						<ParticleNetworkCanvas config=NetworkConfig::title() class="title-network" />
						<h1>"AI that works inside your business"</h1>
					</div>
					<p class="subtitle">
						"We design, build and integrate AI assistants into the tools your team already uses."
					</p>
					<div class="hero-actions">
						<a class="button primary" href="#pricing">"See plans"</a>
						<A href="/web-development">"Need a website instead?"</A>
					</div>
				</div>
			</section>

			<section class="services">
				<h2>"What we build"</h2>
				<div class="service-grid">
					{SERVICES
						.iter()
						.map(|s| {
							view! {
								<article class="service-card">
									<h3>{s.title}</h3>
									<p>{s.body}</p>
								</article>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="integration-demo">
				<div class="demo-copy">
					<h2>"Plugged into real workflows"</h2>
					<p>"A few lines connect an agent to your CRM and ticketing system."</p>
				</div>
				<CodeWindow title="support-agent.ts" code=AGENT_SNIPPET />
			</section>

			<section id="pricing" class="pricing">
				<div class="section-network">
					<ParticleNetworkCanvas config=NetworkConfig::pricing() />
				</div>
				<h2>"Pricing"</h2>
				<div class="tier-grid">
					{TIERS
						.iter()
						.map(|t| {
							view! {
								<article class="tier" class:featured=t.featured>
									<h3>{t.name}</h3>
									<p class="price">{t.price}</p>
									<p>{t.blurb}</p>
									<ul>
										{t.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
									</ul>
								</article>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="roadmap">
				<div class="section-network">
					<ParticleNetworkCanvas config=NetworkConfig::roadmap() />
				</div>
				<h2>"How an engagement runs"</h2>
				<ol class="milestones">
					{ROADMAP
						.iter()
						.map(|m| {
							view! {
								<li>
									<span class="phase">{m.phase}</span>
									<h3>{m.title}</h3>
									<p>{m.body}</p>
								</li>
							}
						})
						.collect_view()}
				</ol>
			</section>

			<PortfolioDrawer />
		</ErrorBoundary>
	}
}
