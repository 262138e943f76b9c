use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;

pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	match state.config.colors.background {
		Some(bg) => {
			ctx.set_fill_style_str(&bg.rgba(1.0));
			ctx.fill_rect(0.0, 0.0, state.width, state.height);
		}
		None => ctx.clear_rect(0.0, 0.0, state.width, state.height),
	}
	draw_connections(state, ctx);
	draw_points(state, ctx);
}

fn draw_connections(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	let colors = &state.config.colors;
	ctx.set_line_width(1.0);

	for c in &state.connections {
		let (a, b) = (&state.points[c.a], &state.points[c.b]);
		ctx.set_stroke_style_str(&colors.edge.rgba(c.opacity * colors.edge_alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_points(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	let colors = &state.config.colors;

	for p in &state.points {
		let radius = state.pulse_radius(p);

		// Glow first so the core sits on top of it.
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius * state.config.glow_scale, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&colors.glow.rgba(colors.glow_alpha));
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&colors.node.rgba(0.9));
		ctx.fill();
	}
}
