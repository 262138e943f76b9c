/// An opaque RGB colour, formatted for canvas styles with a per-draw alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub fn rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {:.3})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
	pub node: Rgb,
	pub edge: Rgb,
	pub glow: Rgb,
	/// Peak alpha of an edge between two coincident points.
	pub edge_alpha: f64,
	pub glow_alpha: f64,
	/// `None` leaves the canvas transparent so page backgrounds show through.
	pub background: Option<Rgb>,
}

impl Default for ColorScheme {
	fn default() -> Self {
		Self {
			node: Rgb(96, 165, 250),
			edge: Rgb(96, 165, 250),
			glow: Rgb(147, 197, 253),
			edge_alpha: 0.45,
			glow_alpha: 0.15,
			background: None,
		}
	}
}

/// Parameters of one decorative network instance.
///
/// Distances and speeds are in CSS pixels (per 60 Hz frame for speeds).
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	pub node_count: usize,
	pub min_distance: f64,
	pub connection_radius: f64,
	pub speed: f64,
	pub max_connections: u32,
	pub padding: f64,
	pub placement_attempts: u32,
	pub bounce_damping: f64,
	pub min_speed: f64,
	pub point_radius: f64,
	pub glow_scale: f64,
	pub pulse_speed: f64,
	/// Place the last candidate when the attempt budget runs out instead of
	/// dropping the point.
	pub keep_exhausted: bool,
	pub colors: ColorScheme,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			node_count: 40,
			min_distance: 40.0,
			connection_radius: 140.0,
			speed: 0.35,
			max_connections: 3,
			padding: 8.0,
			placement_attempts: 50,
			bounce_damping: 0.9,
			min_speed: 0.1,
			point_radius: 2.0,
			glow_scale: 3.0,
			pulse_speed: 0.03,
			keep_exhausted: false,
			colors: ColorScheme::default(),
		}
	}
}

impl NetworkConfig {
	/// Full-bleed background behind the landing hero.
	pub fn hero() -> Self {
		Self {
			node_count: 70,
			min_distance: 50.0,
			connection_radius: 160.0,
			speed: 0.3,
			..Self::default()
		}
	}

	/// Dense, small network sitting behind a headline.
	pub fn title() -> Self {
		Self {
			node_count: 24,
			min_distance: 18.0,
			connection_radius: 90.0,
			speed: 0.2,
			padding: 4.0,
			point_radius: 1.5,
			placement_attempts: 40,
			colors: ColorScheme {
				node: Rgb(167, 139, 250),
				edge: Rgb(139, 92, 246),
				glow: Rgb(196, 181, 253),
				..ColorScheme::default()
			},
			..Self::default()
		}
	}

	pub fn pricing() -> Self {
		Self {
			node_count: 30,
			min_distance: 45.0,
			connection_radius: 130.0,
			speed: 0.25,
			colors: ColorScheme {
				node: Rgb(52, 211, 153),
				edge: Rgb(16, 185, 129),
				glow: Rgb(110, 231, 183),
				edge_alpha: 0.3,
				..ColorScheme::default()
			},
			..Self::default()
		}
	}

	pub fn roadmap() -> Self {
		Self {
			node_count: 36,
			min_distance: 35.0,
			connection_radius: 120.0,
			speed: 0.4,
			max_connections: 2,
			colors: ColorScheme {
				node: Rgb(251, 191, 36),
				edge: Rgb(245, 158, 11),
				glow: Rgb(253, 230, 138),
				..ColorScheme::default()
			},
			..Self::default()
		}
	}

	pub fn with_node_count(mut self, node_count: usize) -> Self {
		self.node_count = node_count;
		self
	}

	pub fn with_colors(mut self, colors: ColorScheme) -> Self {
		self.colors = colors;
		self
	}
}
