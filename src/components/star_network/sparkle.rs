//! Twinkle and flash state machines.
//!
//! Every star carries two independent brightness signals: a slow triangle-wave
//! sparkle that never leaves `[SPARKLE_FLOOR, SPARKLE_CEIL]`, and an
//! intermittent flash driven by two frame counters. Both step once per frame.
//! Brightness and visual size are derived from this state at draw time.

use rand::Rng;

/// Lower bound of the sparkle triangle wave.
pub const SPARKLE_FLOOR: f64 = 0.2;
/// Upper bound of the sparkle triangle wave.
pub const SPARKLE_CEIL: f64 = 1.0;

/// Slow twinkle oscillator.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
	pub value: f64,
	pub speed: f64,
	/// `true` while ascending towards the ceiling
	pub rising: bool,
}

impl Sparkle {
	/// Advance one frame. The value is clamped to the wave bounds and the
	/// direction flips on reaching either one.
	pub fn step(&mut self) {
		if self.rising {
			self.value = (self.value + self.speed).clamp(SPARKLE_FLOOR, SPARKLE_CEIL);
			if self.value >= SPARKLE_CEIL {
				self.rising = false;
			}
		} else {
			self.value = (self.value - self.speed).clamp(SPARKLE_FLOOR, SPARKLE_CEIL);
			if self.value <= SPARKLE_FLOOR {
				self.rising = true;
			}
		}
	}
}

/// Intermittent flash pulse, counted in frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
	/// Frames until the next flash may begin
	pub timer: i32,
	/// Frames remaining in the active flash
	pub duration: i32,
	pub active: bool,
}

impl Flash {
	pub fn new(timer: i32) -> Self {
		Self {
			timer,
			duration: 0,
			active: false,
		}
	}

	/// Advance one frame.
	///
	/// A flash starts on the frame the timer runs out, and that same frame
	/// already counts against its duration. When the duration is spent the
	/// timer is re-armed from `reset`.
	pub fn step<R: Rng>(&mut self, rng: &mut R, duration: (i32, i32), reset: (i32, i32)) {
		self.timer -= 1;
		if self.timer <= 0 && !self.active {
			self.active = true;
			self.duration = draw_frames(rng, duration);
		}

		if self.active {
			self.duration -= 1;
			if self.duration <= 0 {
				self.active = false;
				self.timer = draw_frames(rng, reset);
			}
		}
	}
}

/// Draw a frame count from a half-open range, tolerating an empty range.
pub fn draw_frames<R: Rng>(rng: &mut R, (lo, hi): (i32, i32)) -> i32 {
	if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Fill alpha for a star core.
///
/// Flashing stars shimmer quickly near full brightness regardless of sparkle;
/// connected stars read brighter than isolated ones.
pub fn brightness(sparkle: f64, connected: bool, flashing: bool, time_ms: f64) -> f64 {
	if flashing {
		0.95 + (time_ms * 0.05).sin() * 0.05
	} else if connected {
		0.6 + sparkle * 0.4
	} else {
		0.2 + sparkle * 0.3
	}
}

/// Drawn core radius for a given base radius and sparkle.
pub fn visual_radius(radius: f64, sparkle: f64) -> f64 {
	radius * (0.8 + sparkle * 0.5)
}

/// Burst glyph opacity: 0 at `threshold`, 1 at full sparkle, `None` below.
pub fn burst_opacity(sparkle: f64, threshold: f64) -> Option<f64> {
	if sparkle <= threshold || threshold >= SPARKLE_CEIL {
		return None;
	}
	Some(((sparkle - threshold) / (SPARKLE_CEIL - threshold)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn sparkle_stays_in_band_from_any_start() {
		for start in [0.0, 0.05, 0.19, 0.5, 0.99, 1.0] {
			for rising in [true, false] {
				let mut s = Sparkle {
					value: start,
					speed: 0.037,
					rising,
				};
				for _ in 0..500 {
					s.step();
					assert!(
						(SPARKLE_FLOOR..=SPARKLE_CEIL).contains(&s.value),
						"sparkle {} escaped band",
						s.value
					);
				}
			}
		}
	}

	#[test]
	fn sparkle_flips_at_bounds() {
		let mut s = Sparkle {
			value: 0.98,
			speed: 0.03,
			rising: true,
		};
		s.step();
		assert_eq!(s.value, SPARKLE_CEIL);
		assert!(!s.rising);

		let mut s = Sparkle {
			value: 0.21,
			speed: 0.03,
			rising: false,
		};
		s.step();
		assert_eq!(s.value, SPARKLE_FLOOR);
		assert!(s.rising);
	}

	#[test]
	fn flash_runs_for_its_duration_then_rearms() {
		let mut rng = SmallRng::seed_from_u64(7);
		let mut flash = Flash::new(0);

		flash.step(&mut rng, (5, 15), (100, 400));
		assert!(flash.active);
		let remaining = flash.duration;
		assert!((4..14).contains(&remaining));

		for _ in 0..remaining - 1 {
			flash.step(&mut rng, (5, 15), (100, 400));
			assert!(flash.active);
		}
		flash.step(&mut rng, (5, 15), (100, 400));
		assert!(!flash.active);
		assert!((100..400).contains(&flash.timer));
	}

	#[test]
	fn flash_does_not_restart_while_active() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut flash = Flash {
			timer: -50,
			duration: 3,
			active: true,
		};
		flash.step(&mut rng, (5, 15), (100, 400));
		assert!(flash.active);
		assert_eq!(flash.duration, 2);
	}

	#[test]
	fn brightness_tiers() {
		assert!((brightness(0.5, false, false, 0.0) - 0.35).abs() < 1e-9);
		assert!((brightness(0.5, true, false, 0.0) - 0.8).abs() < 1e-9);
		for t in 0..200 {
			let b = brightness(0.2, false, true, t as f64 * 16.7);
			assert!(b >= 0.9 - 1e-9 && b <= 1.0 + 1e-9);
		}
	}

	#[test]
	fn burst_opacity_scales_linearly() {
		assert_eq!(burst_opacity(0.85, 0.9), None);
		assert_eq!(burst_opacity(1.0, 0.9), Some(1.0));
		let mid = burst_opacity(0.95, 0.9).unwrap();
		assert!((mid - 0.5).abs() < 1e-9);
	}

	#[test]
	fn visual_radius_grows_with_sparkle() {
		assert!((visual_radius(2.0, 0.2) - 1.8).abs() < 1e-9);
		assert!((visual_radius(2.0, 1.0) - 2.6).abs() < 1e-9);
	}
}
