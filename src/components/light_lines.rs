use leptos::prelude::*;
use rand::Rng;

/// One horizontal streak; percentages are of the container.
#[derive(Clone, Debug, PartialEq)]
pub struct LightLine {
	pub top: f64,
	pub width: f64,
	pub delay: f64,
	pub duration: f64,
	pub opacity: f64,
}

impl LightLine {
	pub fn style(&self) -> String {
		format!(
			"top: {:.2}%; width: {:.2}%; opacity: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
			self.top, self.width, self.opacity, self.delay, self.duration
		)
	}
}

/// Lines spread over equal horizontal bands, jittered inside each band so
/// they never stack.
pub fn layout_lines<R: Rng>(count: usize, rng: &mut R) -> Vec<LightLine> {
	if count == 0 {
		return Vec::new();
	}
	let band = 100.0 / count as f64;
	(0..count)
		.map(|i| LightLine {
			top: band * (i as f64 + rng.gen_range(0.1..0.9)),
			width: rng.gen_range(20.0..45.0),
			delay: rng.gen_range(0.0..6.0),
			duration: rng.gen_range(5.0..10.0),
			opacity: rng.gen_range(0.2..0.6),
		})
		.collect()
}

#[component]
pub fn LightLines(
	#[prop(default = 6)] count: usize,
	#[prop(default = "light-lines")] class: &'static str,
) -> impl IntoView {
	let lines = layout_lines(count, &mut rand::thread_rng());

	view! {
		<div class=class aria-hidden="true">
			{lines
				.into_iter()
				.map(|line| view! { <span class="light-line" style=line.style() /> })
				.collect_view()}
		</div>
	}
}
