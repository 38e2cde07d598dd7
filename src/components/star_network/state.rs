//! Simulation context for the starfield.
//!
//! Owns everything that changes from frame to frame: the star population,
//! this frame's edges, shooting stars, the viewport extents and the random
//! source. Nothing here touches a drawing surface, so whole runs can be
//! stepped and inspected in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::field::{self, Star, uniform};
use super::paint::Painter;
use super::proximity::{self, Edge};
use super::render;
use super::shooting::ShootingStars;
use super::surface::Viewport;
use super::theme::{Color, NebulaStyle, Theme};

/// Milliseconds per frame at the nominal 60 Hz refresh.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// A soft color blob painted once beneath the stars.
#[derive(Clone, Debug, PartialEq)]
pub struct Nebula {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Center color; alpha carries the blob's strength
	pub color: Color,
}

/// Place `style.count` nebulae at random over the surface.
pub fn scatter_nebulae<R: Rng>(rng: &mut R, width: f64, height: f64, style: &NebulaStyle) -> Vec<Nebula> {
	if style.colors.is_empty() {
		return Vec::new();
	}
	(0..style.count)
		.map(|_| {
			let color = style.colors[rng.random_range(0..style.colors.len())];
			Nebula {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				radius: uniform(rng, style.radius_min, style.radius_max),
				color: color.with_alpha(uniform(rng, style.alpha_min, style.alpha_max)),
			}
		})
		.collect()
}

/// Everything the animation mutates, stepped once per frame.
pub struct StarfieldState {
	pub theme: Theme,
	pub viewport: Viewport,
	pub stars: Vec<Star>,
	/// Links computed for the current frame
	pub edges: Vec<Edge>,
	pub shooting: ShootingStars,
	pub nebulae: Vec<Nebula>,
	/// Frames completed since start
	pub frame: u64,
	rng: SmallRng,
}

impl StarfieldState {
	/// Seed a fresh field sized to the viewport.
	pub fn new(theme: Theme, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let stars = field::initialize(&mut rng, width, height, &theme.stars);
		let nebulae = scatter_nebulae(&mut rng, width, height, &theme.nebula);

		Self {
			theme,
			viewport: Viewport { width, height },
			edges: Vec::with_capacity(stars.len()),
			stars,
			shooting: ShootingStars::default(),
			nebulae,
			frame: 0,
			rng,
		}
	}

	/// Clock for time-based effects, derived from the frame counter.
	pub fn time_ms(&self) -> f64 {
		self.frame as f64 * FRAME_MS
	}

	/// Record new surface extents. Star positions are left untouched.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport { width, height };
	}

	/// Rebuild this frame's edges and `connected` flags.
	pub fn link(&mut self) {
		proximity::link(
			&mut self.stars,
			self.theme.stars.connection_distance,
			&mut self.edges,
		);
	}

	/// Spawn, move and cull shooting stars.
	pub fn update_shooting_stars(&mut self) {
		let Viewport { width, height } = self.viewport;
		self.shooting
			.update(&mut self.rng, width, height, &self.theme.shooting_stars);
	}

	/// Integrate every star against the current viewport.
	pub fn advance_stars(&mut self) {
		let Viewport { width, height } = self.viewport;
		for star in &mut self.stars {
			field::advance(star, &mut self.rng, width, height, &self.theme.stars);
		}
	}

	/// Run one full frame, painting to `painter` between linking and integration.
	pub fn tick<P: Painter>(&mut self, painter: &P) {
		self.link();
		self.update_shooting_stars();
		render::render(self, painter);
		self.advance_stars();
		self.frame += 1;
	}

	/// Run one frame without drawing.
	pub fn step(&mut self) {
		self.link();
		self.update_shooting_stars();
		self.advance_stars();
		self.frame += 1;
	}
}
