//! Visual theming for the starfield.
//!
//! Provides the color type, star palettes, and the per-layer style
//! configuration consumed by the simulation and the renderer.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Fully transparent version of this color (keeps the hue for gradient stops).
	pub fn transparent(self) -> Self {
		self.with_alpha(0.0)
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Gold used for every bright star.
pub const BRIGHT_STAR_GOLD: Color = Color::rgb(255, 215, 0);

/// A curated set of star tints.
#[derive(Clone, Debug)]
pub struct StarPalette {
	pub colors: Vec<Color>,
}

impl StarPalette {
	/// Near-white tints with a faint cool/warm spread (default)
	pub fn pale() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 255, 255), // White
				Color::rgb(240, 248, 255), // Alice blue
				Color::rgb(255, 250, 240), // Floral white
				Color::rgb(248, 248, 255), // Ghost white
				Color::rgb(230, 230, 250), // Lavender
				Color::rgb(255, 240, 245), // Lavender blush
				Color::rgb(176, 224, 230), // Powder blue
				Color::rgb(240, 255, 255), // Azure
				Color::rgb(245, 255, 250), // Mint cream
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

/// How the surface is prepared at the start of every frame.
#[derive(Clone, Debug)]
pub enum BackdropFill {
	/// Clear to transparent, letting the page show through.
	Clear,
	/// Vertical linear gradient, top to bottom, as `(offset, color)` stops.
	Gradient(Vec<(f64, Color)>),
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub fill: BackdropFill,
}

/// Nebula blobs painted once beneath the stars.
#[derive(Clone, Debug)]
pub struct NebulaStyle {
	/// Number of blobs (0 disables nebulae)
	pub count: usize,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Candidate hues; each blob picks one at random
	pub colors: Vec<Color>,
	/// Center alpha range of the radial fade
	pub alpha_min: f64,
	pub alpha_max: f64,
}

/// Star population, motion, twinkle and flash parameters.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Surface pixels per star (count = floor(w * h / density))
	pub density: f64,
	/// Maximum distance for a connecting line
	pub connection_distance: f64,
	/// Maximum absolute velocity component, pixels per frame
	pub max_speed: f64,
	/// Radius range for regular stars
	pub radius_min: f64,
	pub radius_max: f64,
	/// Probability that a star is created bright (larger, gold)
	pub bright_chance: f64,
	/// Radius range for bright stars
	pub bright_radius_min: f64,
	pub bright_radius_max: f64,
	pub sparkle_speed_min: f64,
	pub sparkle_speed_max: f64,
	/// Initial flash timer range, frames
	pub flash_timer_initial: (i32, i32),
	/// Flash duration range, frames
	pub flash_duration: (i32, i32),
	/// Flash timer re-arm range, frames
	pub flash_timer_reset: (i32, i32),
	/// Halo rings drawn above the glow threshold as `(radius multiple, alpha factor)`
	pub halos: Vec<(f64, f64)>,
	/// Sparkle above which halo rings appear
	pub glow_threshold: f64,
	/// Sparkle above which the burst glyph appears
	pub burst_threshold: f64,
	/// Burst arms: 4 draws a cross, 8 adds the diagonals
	pub burst_points: u8,
	pub palette: StarPalette,
}

/// Shooting star spawn and motion parameters.
#[derive(Clone, Debug)]
pub struct ShootingStarStyle {
	/// Whether the spawn policy runs at all
	pub enabled: bool,
	/// Per-frame spawn probability
	pub spawn_chance: f64,
	/// Maximum concurrent shooting stars
	pub max_concurrent: usize,
	pub speed_min: f64,
	pub speed_max: f64,
	pub length_min: f64,
	pub length_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Direction range in radians (0 = right, PI/2 = straight down)
	pub angle_min: f64,
	pub angle_max: f64,
	pub color: Color,
	pub line_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub nebula: NebulaStyle,
	pub stars: StarStyle,
	pub shooting_stars: ShootingStarStyle,
}

impl Theme {
	/// Deep space backdrop with nebulae and gold bright stars (default)
	pub fn nebula() -> Self {
		Self {
			name: "nebula",
			background: BackgroundStyle {
				fill: BackdropFill::Gradient(vec![
					(0.0, Color::rgb(3, 3, 12)),
					(0.5, Color::rgb(12, 10, 38)),
					(1.0, Color::rgb(26, 14, 48)),
				]),
			},
			nebula: NebulaStyle {
				count: 5,
				radius_min: 120.0,
				radius_max: 320.0,
				colors: vec![
					Color::rgb(120, 60, 200),  // Violet
					Color::rgb(60, 90, 200),   // Indigo
					Color::rgb(200, 70, 160),  // Magenta
					Color::rgb(50, 140, 190),  // Teal blue
				],
				alpha_min: 0.05,
				alpha_max: 0.15,
			},
			stars: StarStyle {
				bright_chance: 0.05,
				halos: vec![(2.0, 0.1), (3.0, 0.05)],
				burst_threshold: 0.88,
				burst_points: 8,
				..StarStyle::base()
			},
			shooting_stars: ShootingStarStyle::default(),
		}
	}

	/// Plain starfield on a transparent surface
	pub fn classic() -> Self {
		Self {
			name: "classic",
			background: BackgroundStyle {
				fill: BackdropFill::Clear,
			},
			nebula: NebulaStyle {
				count: 0,
				radius_min: 0.0,
				radius_max: 0.0,
				colors: Vec::new(),
				alpha_min: 0.0,
				alpha_max: 0.0,
			},
			stars: StarStyle::base(),
			shooting_stars: ShootingStarStyle::default(),
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"nebula" => Some(Self::nebula()),
			"classic" => Some(Self::classic()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::nebula()
	}
}

impl StarStyle {
	fn base() -> Self {
		Self {
			density: 15000.0,
			connection_distance: 150.0,
			max_speed: 0.15,
			radius_min: 0.5,
			radius_max: 2.0,
			bright_chance: 0.0,
			bright_radius_min: 2.0,
			bright_radius_max: 3.5,
			sparkle_speed_min: 0.01,
			sparkle_speed_max: 0.04,
			flash_timer_initial: (0, 200),
			flash_duration: (5, 15),
			flash_timer_reset: (100, 400),
			halos: vec![(2.0, 0.1)],
			glow_threshold: 0.7,
			burst_threshold: 0.9,
			burst_points: 4,
			palette: StarPalette::pale(),
		}
	}
}

impl Default for ShootingStarStyle {
	fn default() -> Self {
		Self {
			enabled: false,
			spawn_chance: 0.004,
			max_concurrent: 2,
			speed_min: 4.0,
			speed_max: 10.0,
			length_min: 60.0,
			length_max: 140.0,
			opacity_min: 0.7,
			opacity_max: 1.0,
			angle_min: std::f64::consts::FRAC_PI_6,
			angle_max: 5.0 * std::f64::consts::FRAC_PI_6,
			color: Color::rgb(255, 255, 255),
			line_width: 1.5,
		}
	}
}
