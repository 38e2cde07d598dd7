//! [`Painter`] backend for the browser's 2D canvas context.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::paint::{Paint, Painter};
use super::theme::Color;

fn css(color: &Color) -> String {
	color.to_css()
}

fn add_stops(gradient: &CanvasGradient, stops: &[(f64, Color)]) {
	for (offset, color) in stops {
		let _ = gradient.add_color_stop(offset.clamp(0.0, 1.0) as f32, &css(color));
	}
}

/// Resolve a [`Paint`] into something the context accepts as a style.
fn style(ctx: &CanvasRenderingContext2d, paint: &Paint) -> Option<JsValue> {
	match paint {
		Paint::Solid(color) => Some(JsValue::from_str(&css(color))),
		Paint::Linear { from, to, stops } => {
			let gradient = ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
			add_stops(&gradient, stops);
			Some(gradient.into())
		}
		Paint::Radial {
			center,
			inner_radius,
			outer_radius,
			stops,
		} => {
			let gradient = ctx
				.create_radial_gradient(
					center.0,
					center.1,
					*inner_radius,
					center.0,
					center.1,
					*outer_radius,
				)
				.ok()?;
			add_stops(&gradient, stops);
			Some(gradient.into())
		}
	}
}

impl Painter for CanvasRenderingContext2d {
	fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
	}

	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
		let Some(style) = style(self, paint) else {
			return;
		};
		#[allow(deprecated)]
		self.set_fill_style(&style);
		CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, paint: &Paint) {
		let Some(style) = style(self, paint) else {
			return;
		};
		self.begin_path();
		let _ = self.arc(x, y, radius.max(0.0), 0.0, PI * 2.0);
		#[allow(deprecated)]
		self.set_fill_style(&style);
		self.fill();
	}

	fn stroke_polyline(&self, points: &[(f64, f64)], width: f64, paint: &Paint) {
		let Some((&(x0, y0), rest)) = points.split_first() else {
			return;
		};
		let Some(style) = style(self, paint) else {
			return;
		};
		self.begin_path();
		self.move_to(x0, y0);
		for &(x, y) in rest {
			self.line_to(x, y);
		}
		#[allow(deprecated)]
		self.set_stroke_style(&style);
		self.set_line_width(width);
		self.stroke();
	}

	fn stroke_segments(&self, segments: &[((f64, f64), (f64, f64))], width: f64, paint: &Paint) {
		if segments.is_empty() {
			return;
		}
		let Some(style) = style(self, paint) else {
			return;
		};
		self.begin_path();
		for &((x0, y0), (x1, y1)) in segments {
			self.move_to(x0, y0);
			self.line_to(x1, y1);
		}
		#[allow(deprecated)]
		self.set_stroke_style(&style);
		self.set_line_width(width);
		self.stroke();
	}
}
