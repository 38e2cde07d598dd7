//! The star population: creation from surface area and per-frame integration.

use rand::Rng;

use super::sparkle::{Flash, Sparkle, draw_frames};
use super::theme::{BRIGHT_STAR_GOLD, Color, StarStyle};

/// A single drifting, twinkling star.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
	/// Created from the rare bright range (larger, gold)
	pub bright: bool,
	pub sparkle: Sparkle,
	pub flash: Flash,
	/// Linked to at least one neighbor this frame
	pub connected: bool,
}

/// Upper bound on the field size; the link scan is quadratic in it.
pub const MAX_STARS: usize = 4000;

/// Number of stars for a surface: `floor(width * height / density)`, capped
/// at [`MAX_STARS`].
pub fn star_count(width: f64, height: f64, density: f64) -> usize {
	if !(width > 0.0 && height > 0.0 && density > 0.0) {
		return 0;
	}
	let count = (width * height / density).floor();
	if count.is_nan() {
		return 0;
	}
	count.min(MAX_STARS as f64) as usize
}

/// Populate a surface with randomly placed stars.
pub fn initialize<R: Rng>(rng: &mut R, width: f64, height: f64, style: &StarStyle) -> Vec<Star> {
	let count = star_count(width, height, style.density);
	(0..count)
		.map(|_| spawn_star(rng, width, height, style))
		.collect()
}

fn spawn_star<R: Rng>(rng: &mut R, width: f64, height: f64, style: &StarStyle) -> Star {
	let bright = style.bright_chance > 0.0 && rng.random_bool(style.bright_chance.min(1.0));
	let (radius, color) = if bright {
		(
			uniform(rng, style.bright_radius_min, style.bright_radius_max),
			BRIGHT_STAR_GOLD,
		)
	} else {
		let color = if style.palette.is_empty() {
			Color::rgb(255, 255, 255)
		} else {
			style.palette.get(rng.random_range(0..style.palette.len()))
		};
		(uniform(rng, style.radius_min, style.radius_max), color)
	};

	Star {
		x: rng.random::<f64>() * width,
		y: rng.random::<f64>() * height,
		vx: (rng.random::<f64>() - 0.5) * 2.0 * style.max_speed,
		vy: (rng.random::<f64>() - 0.5) * 2.0 * style.max_speed,
		radius,
		color,
		bright,
		sparkle: Sparkle {
			value: rng.random::<f64>(),
			speed: uniform(rng, style.sparkle_speed_min, style.sparkle_speed_max),
			rising: rng.random_bool(0.5),
		},
		flash: Flash::new(draw_frames(rng, style.flash_timer_initial)),
		connected: false,
	}
}

/// Uniform draw from `[lo, hi)`; collapses to `lo` for an empty range.
pub(crate) fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Advance one star by a frame: flash, sparkle, then motion and bounce.
pub fn advance<R: Rng>(star: &mut Star, rng: &mut R, width: f64, height: f64, style: &StarStyle) {
	star.flash
		.step(rng, style.flash_duration, style.flash_timer_reset);
	star.sparkle.step();

	star.x += star.vx;
	star.y += star.vy;

	// Reflect only; a star may sit up to one frame past the edge.
	if star.x < 0.0 || star.x > width {
		star.vx = -star.vx;
	}
	if star.y < 0.0 || star.y > height {
		star.vy = -star.vy;
	}
}
