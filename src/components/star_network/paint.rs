//! Minimal 2D drawing surface used by the renderer.
//!
//! The renderer only ever needs rectangles, filled circles and stroked lines,
//! each painted with a solid color or a linear/radial gradient. Keeping that
//! behind a trait lets the canvas backend live in one place and lets frames be
//! rendered headless.

use super::theme::Color;

/// Fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	Solid(Color),
	/// Gradient along the line `(x0, y0) -> (x1, y1)`.
	Linear {
		from: (f64, f64),
		to: (f64, f64),
		stops: Vec<(f64, Color)>,
	},
	/// Gradient between two circles sharing a center.
	Radial {
		center: (f64, f64),
		inner_radius: f64,
		outer_radius: f64,
		stops: Vec<(f64, Color)>,
	},
}

/// A drawable 2D surface.
pub trait Painter {
	/// Reset a rectangle to fully transparent.
	fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, paint: &Paint);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, paint: &Paint);
	/// Stroke one connected path through `points`.
	fn stroke_polyline(&self, points: &[(f64, f64)], width: f64, paint: &Paint);
	/// Stroke disjoint segments as a single path.
	fn stroke_segments(&self, segments: &[((f64, f64), (f64, f64))], width: f64, paint: &Paint);
}
