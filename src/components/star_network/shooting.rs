//! Short-lived shooting stars entering from the top edge.

use std::collections::VecDeque;

use rand::Rng;

use super::field::uniform;
use super::theme::ShootingStarStyle;

/// Maximum trail points kept per shooting star.
pub const TRAIL_CAP: usize = 20;

/// A streak crossing the sky.
#[derive(Clone, Debug)]
pub struct ShootingStar {
	pub x: f64,
	pub y: f64,
	/// Heading in radians (0 = right, PI/2 = down)
	pub angle: f64,
	/// Pixels per frame along `angle`
	pub speed: f64,
	/// Visual length hint; the trail itself is bounded by [`TRAIL_CAP`]
	pub length: f64,
	pub opacity: f64,
	pub active: bool,
	/// Past positions, oldest first
	pub trail: VecDeque<(f64, f64)>,
}

impl ShootingStar {
	pub fn new(x: f64, y: f64, angle: f64, speed: f64, length: f64, opacity: f64) -> Self {
		Self {
			x,
			y,
			angle,
			speed,
			length,
			opacity,
			active: true,
			trail: VecDeque::with_capacity(TRAIL_CAP + 1),
		}
	}

	/// Move one frame and record the new position.
	pub fn advance(&mut self) {
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed;
		self.trail.push_back((self.x, self.y));
		while self.trail.len() > TRAIL_CAP {
			self.trail.pop_front();
		}
	}

	/// Left the surface through the left, right or bottom edge.
	pub fn is_off_surface(&self, width: f64, height: f64) -> bool {
		self.x < 0.0 || self.x > width || self.y > height
	}
}

/// The active set of shooting stars and its spawn policy.
#[derive(Clone, Debug, Default)]
pub struct ShootingStars {
	pub stars: Vec<ShootingStar>,
}

impl ShootingStars {
	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}

	/// Roll the per-frame spawn chance and add one star if under the cap.
	pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R, width: f64, style: &ShootingStarStyle) -> bool {
		if !style.enabled || self.stars.len() >= style.max_concurrent {
			return false;
		}
		if !rng.random_bool(style.spawn_chance.clamp(0.0, 1.0)) {
			return false;
		}

		self.stars.push(ShootingStar::new(
			rng.random::<f64>() * width,
			0.0,
			uniform(rng, style.angle_min, style.angle_max),
			uniform(rng, style.speed_min, style.speed_max),
			uniform(rng, style.length_min, style.length_max),
			uniform(rng, style.opacity_min, style.opacity_max),
		));
		true
	}

	/// Spawn, advance every star, then drop the ones that left the surface.
	pub fn update<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64, style: &ShootingStarStyle) {
		self.maybe_spawn(rng, width, style);

		for star in &mut self.stars {
			star.advance();
			if star.is_off_surface(width, height) {
				star.active = false;
			}
		}
		self.stars.retain(|s| s.active);
	}
}
