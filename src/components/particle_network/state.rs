use std::f64::consts::TAU;

use rand::Rng;

use super::types::NetworkConfig;

/// Milliseconds between accepted frames (60 Hz).
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
/// Largest integration step, in frames, after a stall.
pub const MAX_STEP: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub phase: f64,
	pub connections: u32,
	/// Rejection-sampling tries used to place this point.
	pub attempts: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	pub opacity: f64,
}

/// Padded drawing area; `lo..=hi` on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
	lo_x: f64,
	hi_x: f64,
	lo_y: f64,
	hi_y: f64,
}

impl Bounds {
	fn new(width: f64, height: f64, padding: f64) -> Self {
		let (lo_x, hi_x) = axis(width, padding);
		let (lo_y, hi_y) = axis(height, padding);
		Self {
			lo_x,
			hi_x,
			lo_y,
			hi_y,
		}
	}
}

// Collapses to the centre line when the dimension is smaller than both paddings.
fn axis(len: f64, padding: f64) -> (f64, f64) {
	let len = len.max(0.0);
	if len <= 2.0 * padding {
		(len / 2.0, len / 2.0)
	} else {
		(padding, len - padding)
	}
}

fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	(dx * dx + dy * dy).sqrt()
}

/// Owned animation state of one network instance.
pub struct NetworkState {
	pub config: NetworkConfig,
	pub points: Vec<Point>,
	pub connections: Vec<Connection>,
	pub width: f64,
	pub height: f64,
	bounds: Bounds,
}

impl NetworkState {
	pub fn generate<R: Rng>(
		config: &NetworkConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let bounds = Bounds::new(width, height, config.padding);
		let mut points: Vec<Point> = Vec::with_capacity(config.node_count);

		if width > 0.0 && height > 0.0 {
			for _ in 0..config.node_count {
				if let Some(point) = place_point(config, &bounds, &points, rng) {
					points.push(point);
				}
			}
		}

		if points.len() < config.node_count {
			log::debug!(
				"placed {} of {} points in {}x{}",
				points.len(),
				config.node_count,
				width,
				height
			);
		}

		Self {
			config: config.clone(),
			points,
			connections: Vec::new(),
			width,
			height,
			bounds,
		}
	}

	/// Rebuild this frame's edge set from current positions.
	pub fn update_connections(&mut self) {
		self.connections.clear();
		for p in &mut self.points {
			p.connections = 0;
		}

		let (radius, cap) = (self.config.connection_radius, self.config.max_connections);
		for i in 0..self.points.len() {
			for j in (i + 1)..self.points.len() {
				if self.points[i].connections >= cap {
					break;
				}
				if self.points[j].connections >= cap {
					continue;
				}
				let (a, b) = (&self.points[i], &self.points[j]);
				let d = distance(a.x, a.y, b.x, b.y);
				if d < radius {
					self.connections.push(Connection {
						a: i,
						b: j,
						distance: d,
						opacity: 1.0 - d / radius,
					});
					self.points[i].connections += 1;
					self.points[j].connections += 1;
				}
			}
		}
	}

	/// Integrate positions and pulse phases by `step` 60 Hz frames.
	pub fn advance(&mut self, step: f64) {
		let Bounds {
			lo_x,
			hi_x,
			lo_y,
			hi_y,
		} = self.bounds;
		let (damping, min_speed) = (self.config.bounce_damping, self.config.min_speed);

		for p in &mut self.points {
			p.phase = (p.phase + self.config.pulse_speed * step) % TAU;
			p.x += p.vx * step;
			p.y += p.vy * step;

			let mut bounced = false;
			if p.x < lo_x || p.x > hi_x {
				p.x = p.x.clamp(lo_x, hi_x);
				p.vx = -p.vx * damping;
				bounced = true;
			}
			if p.y < lo_y || p.y > hi_y {
				p.y = p.y.clamp(lo_y, hi_y);
				p.vy = -p.vy * damping;
				bounced = true;
			}

			if bounced {
				let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
				if speed > 0.0 && speed < min_speed {
					let scale = min_speed / speed;
					p.vx *= scale;
					p.vy *= scale;
				}
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		if width == self.width && height == self.height {
			return;
		}
		self.width = width;
		self.height = height;
		self.bounds = Bounds::new(width, height, self.config.padding);
		let b = self.bounds;
		for p in &mut self.points {
			p.x = p.x.clamp(b.lo_x, b.hi_x);
			p.y = p.y.clamp(b.lo_y, b.hi_y);
		}
	}

	pub fn pulse_radius(&self, point: &Point) -> f64 {
		self.config.point_radius * (1.0 + 0.3 * point.phase.sin())
	}
}

fn place_point<R: Rng>(
	config: &NetworkConfig,
	bounds: &Bounds,
	placed: &[Point],
	rng: &mut R,
) -> Option<Point> {
	let budget = config.placement_attempts.max(1);
	let mut candidate = (bounds.lo_x, bounds.lo_y);

	for attempt in 1..=budget {
		candidate = (
			sample(rng, bounds.lo_x, bounds.hi_x),
			sample(rng, bounds.lo_y, bounds.hi_y),
		);
		let clear = placed
			.iter()
			.all(|p| distance(p.x, p.y, candidate.0, candidate.1) >= config.min_distance);
		if clear {
			return Some(new_point(config, candidate, attempt, rng));
		}
	}

	config
		.keep_exhausted
		.then(|| new_point(config, candidate, budget, rng))
}

fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..=hi) } else { lo }
}

fn new_point<R: Rng>(
	config: &NetworkConfig,
	(x, y): (f64, f64),
	attempts: u32,
	rng: &mut R,
) -> Point {
	let angle = rng.gen_range(0.0..TAU);
	let magnitude = config.speed * rng.gen_range(0.5..=1.0);
	Point {
		x,
		y,
		vx: angle.cos() * magnitude,
		vy: angle.sin() * magnitude,
		phase: rng.gen_range(0.0..TAU),
		connections: 0,
		attempts,
	}
}

/// Caps redraws at the display rate using rAF timestamps.
#[derive(Clone, Debug, Default)]
pub struct FrameThrottle {
	last: Option<f64>,
	step: f64,
}

impl FrameThrottle {
	pub fn ready(&mut self, now_ms: f64) -> bool {
		match self.last {
			None => {
				self.last = Some(now_ms);
				self.step = 1.0;
				true
			}
			Some(last) if now_ms - last >= FRAME_INTERVAL_MS => {
				self.step = ((now_ms - last) / FRAME_INTERVAL_MS).clamp(0.0, MAX_STEP);
				self.last = Some(now_ms);
				true
			}
			Some(_) => false,
		}
	}

	/// Frames elapsed at the last accepted tick.
	pub fn step(&self) -> f64 {
		self.step
	}

	pub fn reset(&mut self) {
		self.last = None;
	}
}

/// Backing-store size for a canvas shown at `css_w` x `css_h`.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
	let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
	let px = |css: f64| (css.max(0.0) * dpr).round().max(1.0) as u32;
	(px(css_w), px(css_h))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn spaced_ok(state: &NetworkState) -> bool {
		let cap = state.config.placement_attempts;
		let pts = &state.points;
		(0..pts.len()).all(|i| {
			((i + 1)..pts.len()).all(|j| {
				distance(pts[i].x, pts[i].y, pts[j].x, pts[j].y) >= state.config.min_distance
					|| pts[i].attempts == cap
					|| pts[j].attempts == cap
			})
		})
	}

	fn in_bounds(state: &NetworkState) -> bool {
		let pad = state.config.padding;
		state.points.iter().all(|p| {
			p.x >= pad && p.x <= state.width - pad && p.y >= pad && p.y <= state.height - pad
		})
	}

	#[test]
	fn twenty_points_in_500_square_respect_min_distance() {
		let config = NetworkConfig {
			node_count: 20,
			min_distance: 18.0,
			..NetworkConfig::default()
		};
		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let state = NetworkState::generate(&config, 500.0, 500.0, &mut rng);
			assert_eq!(state.points.len(), 20, "seed {seed}");
			assert!(spaced_ok(&state), "seed {seed}");
		}
	}

	#[test]
	fn dense_request_drops_points_silently() {
		let config = NetworkConfig {
			node_count: 200,
			min_distance: 40.0,
			padding: 0.0,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(7);
		let state = NetworkState::generate(&config, 100.0, 100.0, &mut rng);
		assert!(state.points.len() < 200);
		assert!(!state.points.is_empty());
		assert!(spaced_ok(&state));
		assert!(state.points.iter().all(|p| p.attempts <= config.placement_attempts));
	}

	#[test]
	fn keep_exhausted_marks_forced_points() {
		let config = NetworkConfig {
			node_count: 60,
			min_distance: 40.0,
			padding: 0.0,
			keep_exhausted: true,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(11);
		let state = NetworkState::generate(&config, 100.0, 100.0, &mut rng);
		assert_eq!(state.points.len(), 60);
		assert!(
			state
				.points
				.iter()
				.any(|p| p.attempts == config.placement_attempts)
		);
		assert!(spaced_ok(&state));
	}

	#[test]
	fn zero_nodes_or_empty_area_is_empty() {
		let mut rng = StdRng::seed_from_u64(1);
		let none = NetworkState::generate(
			&NetworkConfig::default().with_node_count(0),
			300.0,
			300.0,
			&mut rng,
		);
		assert!(none.points.is_empty());

		let mut flat = NetworkState::generate(&NetworkConfig::default(), 0.0, 300.0, &mut rng);
		assert!(flat.points.is_empty());
		flat.update_connections();
		flat.advance(1.0);
		assert!(flat.connections.is_empty());
	}

	#[test]
	fn connections_are_within_radius_and_capped() {
		let config = NetworkConfig {
			node_count: 80,
			min_distance: 10.0,
			connection_radius: 120.0,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(3);
		let mut state = NetworkState::generate(&config, 400.0, 300.0, &mut rng);

		for _ in 0..120 {
			state.update_connections();
			assert!(!state.connections.is_empty());
			for c in &state.connections {
				let (a, b) = (&state.points[c.a], &state.points[c.b]);
				assert!(c.a < c.b);
				assert!(distance(a.x, a.y, b.x, b.y) < config.connection_radius);
				assert!((c.opacity - (1.0 - c.distance / config.connection_radius)).abs() < 1e-12);
				assert!(c.opacity > 0.0 && c.opacity <= 1.0);
			}
			assert!(state.points.iter().all(|p| p.connections <= config.max_connections));
			state.advance(1.0);
		}
	}

	#[test]
	fn degree_cap_limits_a_tight_cluster() {
		let config = NetworkConfig {
			node_count: 6,
			max_connections: 3,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(5);
		let mut state = NetworkState::generate(&config, 400.0, 400.0, &mut rng);
		for (i, p) in state.points.iter_mut().enumerate() {
			p.x = 100.0 + i as f64;
			p.y = 100.0;
		}
		state.update_connections();
		// Six points, everyone in range, cap three: at most 6 * 3 / 2 edges.
		assert!(state.connections.len() <= 9);
		assert!(state.points.iter().all(|p| p.connections <= 3));
		assert_eq!(state.connections[0].a, 0);
		assert_eq!(state.connections[0].b, 1);
	}

	#[test]
	fn connection_counters_reset_each_frame() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut state = NetworkState::generate(&NetworkConfig::hero(), 800.0, 600.0, &mut rng);
		state.update_connections();
		let first = state.connections.clone();
		let degrees: Vec<u32> = state.points.iter().map(|p| p.connections).collect();
		state.update_connections();
		assert_eq!(state.connections, first);
		assert_eq!(
			state.points.iter().map(|p| p.connections).collect::<Vec<_>>(),
			degrees
		);
	}

	#[test]
	fn points_stay_inside_padding_while_bouncing() {
		let config = NetworkConfig {
			node_count: 30,
			speed: 9.0,
			padding: 10.0,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(21);
		let mut state = NetworkState::generate(&config, 320.0, 240.0, &mut rng);
		for i in 0..500 {
			state.advance(if i % 7 == 0 { MAX_STEP } else { 1.0 });
			assert!(in_bounds(&state), "escaped at frame {i}");
		}
	}

	#[test]
	fn bounce_inverts_and_damps_velocity() {
		let config = NetworkConfig {
			node_count: 1,
			padding: 10.0,
			min_speed: 0.0,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(2);
		let mut state = NetworkState::generate(&config, 100.0, 100.0, &mut rng);
		let p = &mut state.points[0];
		(p.x, p.y, p.vx, p.vy) = (89.0, 50.0, 2.0, 0.0);

		state.advance(1.0);
		let p = &state.points[0];
		assert_eq!(p.x, 90.0);
		assert!((p.vx + 2.0 * config.bounce_damping).abs() < 1e-12);
	}

	#[test]
	fn bounce_respects_speed_floor() {
		let config = NetworkConfig {
			node_count: 1,
			padding: 0.0,
			min_speed: 0.5,
			..NetworkConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(2);
		let mut state = NetworkState::generate(&config, 100.0, 100.0, &mut rng);
		let p = &mut state.points[0];
		(p.x, p.y, p.vx, p.vy) = (0.1, 50.0, -0.2, 0.0);

		state.advance(1.0);
		let p = &state.points[0];
		assert!(p.vx > 0.0);
		assert!(((p.vx * p.vx + p.vy * p.vy).sqrt() - 0.5).abs() < 1e-9);
	}

	#[test]
	fn resize_clamps_and_is_stable() {
		let mut rng = StdRng::seed_from_u64(4);
		let mut state = NetworkState::generate(&NetworkConfig::default(), 600.0, 400.0, &mut rng);
		state.resize(200.0, 150.0);
		assert!(in_bounds(&state));
		let snapshot = state.points.clone();
		for _ in 0..5 {
			state.resize(200.0, 150.0);
		}
		assert_eq!(state.points, snapshot);
		assert_eq!((state.width, state.height), (200.0, 150.0));
	}

	#[test]
	fn backing_size_is_idempotent() {
		let first = backing_size(333.4, 120.2, 2.0);
		assert_eq!(first, (667, 240));
		for _ in 0..10 {
			assert_eq!(backing_size(333.4, 120.2, 2.0), first);
		}
		assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
		assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
	}

	#[test]
	fn throttle_skips_fast_ticks() {
		let mut throttle = FrameThrottle::default();
		assert!(throttle.ready(1000.0));
		assert_eq!(throttle.step(), 1.0);
		assert!(!throttle.ready(1008.0));
		assert!(throttle.ready(1017.0));
		assert!((throttle.step() - 1.02).abs() < 1e-9);
		assert!(throttle.ready(5000.0));
		assert_eq!(throttle.step(), MAX_STEP);

		throttle.reset();
		assert!(throttle.ready(5001.0));
		assert_eq!(throttle.step(), 1.0);
	}

	#[test]
	fn pulse_radius_oscillates_around_base() {
		let mut rng = StdRng::seed_from_u64(8);
		let state = NetworkState::generate(&NetworkConfig::title(), 300.0, 200.0, &mut rng);
		let base = state.config.point_radius;
		for p in &state.points {
			let r = state.pulse_radius(p);
			assert!(r >= base * 0.7 - 1e-9 && r <= base * 1.3 + 1e-9);
		}
	}
}
