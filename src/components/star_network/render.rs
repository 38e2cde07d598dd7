//! Layered drawing of the starfield.
//!
//! Each frame is painted back to front:
//! 1. Backdrop (gradient fill, or a clear for transparent themes)
//! 2. Connection lines
//! 3. Star cores, halos and burst glyphs
//! 4. Shooting star trails
//!
//! Nebulae are painted once at startup and then left to be overdrawn.

use std::f64::consts::FRAC_1_SQRT_2;

use super::field::Star;
use super::paint::{Paint, Painter};
use super::proximity::Edge;
use super::shooting::ShootingStar;
use super::sparkle;
use super::state::{Nebula, StarfieldState};
use super::theme::{BackdropFill, StarStyle, Theme};

/// Fill the whole surface for a new frame.
pub fn draw_background<P: Painter>(painter: &P, width: f64, height: f64, theme: &Theme) {
	match &theme.background.fill {
		BackdropFill::Clear => painter.clear_rect(0.0, 0.0, width, height),
		BackdropFill::Gradient(stops) => painter.fill_rect(
			0.0,
			0.0,
			width,
			height,
			&Paint::Linear {
				from: (0.0, 0.0),
				to: (0.0, height),
				stops: stops.clone(),
			},
		),
	}
}

/// Paint soft radial blobs that fade to transparent at their rim.
pub fn draw_nebulae<P: Painter>(painter: &P, nebulae: &[Nebula]) {
	for n in nebulae {
		painter.fill_circle(
			n.x,
			n.y,
			n.radius,
			&Paint::Radial {
				center: (n.x, n.y),
				inner_radius: 0.0,
				outer_radius: n.radius,
				stops: vec![
					(0.0, n.color),
					(0.5, n.color.with_alpha(n.color.a * 0.4)),
					(1.0, n.color.transparent()),
				],
			},
		);
	}
}

/// Stroke every edge with a gradient between its two stars' colors.
pub fn draw_connections<P: Painter>(painter: &P, stars: &[Star], edges: &[Edge]) {
	for edge in edges {
		let (s1, s2) = (&stars[edge.a], &stars[edge.b]);
		painter.stroke_polyline(
			&[(s1.x, s1.y), (s2.x, s2.y)],
			edge.width,
			&Paint::Linear {
				from: (s1.x, s1.y),
				to: (s2.x, s2.y),
				stops: vec![
					(0.0, s1.color.with_alpha(edge.opacity)),
					(1.0, s2.color.with_alpha(edge.opacity)),
				],
			},
		);
	}
}

/// Draw every star glyph; `time_ms` drives the flash shimmer.
pub fn draw_stars<P: Painter>(painter: &P, stars: &[Star], style: &StarStyle, time_ms: f64) {
	for star in stars {
		draw_star(painter, star, style, time_ms);
	}
}

fn draw_star<P: Painter>(painter: &P, star: &Star, style: &StarStyle, time_ms: f64) {
	let s = star.sparkle.value;
	let radius = sparkle::visual_radius(star.radius, s);
	let alpha = sparkle::brightness(s, star.connected, star.flash.active, time_ms);

	painter.fill_circle(
		star.x,
		star.y,
		radius,
		&Paint::Solid(star.color.with_alpha(alpha)),
	);

	if s <= style.glow_threshold {
		return;
	}

	for &(scale, factor) in &style.halos {
		painter.fill_circle(
			star.x,
			star.y,
			radius * scale,
			&Paint::Solid(star.color.with_alpha(s * factor)),
		);
	}

	if let Some(opacity) = sparkle::burst_opacity(s, style.burst_threshold) {
		let arm = star.radius * 0.5;
		painter.stroke_segments(
			&burst_segments(star.x, star.y, arm, style.burst_points),
			arm * 0.5,
			&Paint::Solid(star.color.with_alpha(opacity)),
		);
	}
}

/// Arms of the burst glyph: a cross, plus shorter diagonals for 8 points.
pub fn burst_segments(x: f64, y: f64, arm: f64, points: u8) -> Vec<((f64, f64), (f64, f64))> {
	let long = arm * 2.0;
	let mut segments = vec![
		((x - long, y), (x + long, y)),
		((x, y - long), (x, y + long)),
	];
	if points >= 8 {
		let d = arm * FRAC_1_SQRT_2;
		segments.push(((x - d, y - d), (x + d, y + d)));
		segments.push(((x - d, y + d), (x + d, y - d)));
	}
	segments
}

/// Stroke each trail from transparent (oldest) to full opacity (newest).
pub fn draw_shooting_stars<P: Painter>(painter: &P, stars: &[ShootingStar], theme: &Theme) {
	let style = &theme.shooting_stars;
	for star in stars {
		let (Some(&oldest), Some(&newest)) = (star.trail.front(), star.trail.back()) else {
			continue;
		};
		if star.trail.len() < 2 {
			continue;
		}
		let points: Vec<(f64, f64)> = star.trail.iter().copied().collect();
		painter.stroke_polyline(
			&points,
			style.line_width,
			&Paint::Linear {
				from: oldest,
				to: newest,
				stops: vec![
					(0.0, style.color.transparent()),
					(1.0, style.color.with_alpha(star.opacity)),
				],
			},
		);
	}
}

/// Paint the current state without advancing it.
pub fn render<P: Painter>(state: &StarfieldState, painter: &P) {
	let (width, height) = (state.viewport.width, state.viewport.height);
	draw_background(painter, width, height, &state.theme);
	draw_connections(painter, &state.stars, &state.edges);
	draw_stars(painter, &state.stars, &state.theme.stars, state.time_ms());
	draw_shooting_stars(painter, &state.shooting.stars, &state.theme);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::star_network::sparkle::{Flash, Sparkle};
	use crate::components::star_network::testing::{DrawOp, RecordingPainter};
	use crate::components::star_network::theme::Color;

	fn star(x: f64, sparkle: f64) -> Star {
		Star {
			x,
			y: 10.0,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			color: Color::rgb(255, 255, 255),
			bright: false,
			sparkle: Sparkle {
				value: sparkle,
				speed: 0.01,
				rising: true,
			},
			flash: Flash::new(100),
			connected: false,
		}
	}

	#[test]
	fn gradient_backdrop_fills_full_surface() {
		let painter = RecordingPainter::default();
		draw_background(&painter, 640.0, 480.0, &Theme::nebula());
		let ops = painter.ops();
		assert_eq!(ops.len(), 1);
		match &ops[0] {
			DrawOp::FillRect { x, y, w, h, paint } => {
				assert_eq!((*x, *y, *w, *h), (0.0, 0.0, 640.0, 480.0));
				let Paint::Linear { to, stops, .. } = paint else {
					panic!("expected linear gradient");
				};
				assert_eq!(*to, (0.0, 480.0));
				assert_eq!(stops.len(), 3);
			}
			other => panic!("unexpected op {other:?}"),
		}
	}

	#[test]
	fn classic_backdrop_clears() {
		let painter = RecordingPainter::default();
		draw_background(&painter, 10.0, 10.0, &Theme::classic());
		assert_eq!(painter.ops(), vec![DrawOp::Clear { w: 10.0, h: 10.0 }]);
	}

	#[test]
	fn dim_star_draws_core_only() {
		let painter = RecordingPainter::default();
		draw_stars(&painter, &[star(5.0, 0.5)], &Theme::nebula().stars, 0.0);
		assert_eq!(painter.ops().len(), 1);
	}

	#[test]
	fn bright_sparkle_adds_halos_and_burst() {
		let style = Theme::nebula().stars;
		let painter = RecordingPainter::default();
		draw_stars(&painter, &[star(5.0, 1.0)], &style, 0.0);
		let ops = painter.ops();
		let circles = ops
			.iter()
			.filter(|op| matches!(op, DrawOp::FillCircle { .. }))
			.count();
		assert_eq!(circles, 1 + style.halos.len());
		let Some(DrawOp::StrokeSegments { segments, width, .. }) = ops.last() else {
			panic!("expected burst glyph last");
		};
		assert_eq!(segments.len(), 4);
		// Radius 2: the long arms reach one radius out, strokes are half an arm wide.
		assert_eq!(segments[0], ((3.0, 10.0), (7.0, 10.0)));
		assert_eq!(*width, 0.5);
	}

	#[test]
	fn cross_has_two_arms() {
		assert_eq!(burst_segments(0.0, 0.0, 1.0, 4).len(), 2);
	}

	#[test]
	fn edges_use_gradient_between_star_colors() {
		let mut stars = vec![star(0.0, 0.5), star(50.0, 0.5)];
		stars[1].color = Color::rgb(255, 215, 0);
		let edges = vec![Edge {
			a: 0,
			b: 1,
			distance: 50.0,
			opacity: 0.25,
			width: 0.75,
		}];
		let painter = RecordingPainter::default();
		draw_connections(&painter, &stars, &edges);
		let ops = painter.ops();
		let DrawOp::StrokePolyline { points, width, paint } = &ops[0] else {
			panic!("expected polyline");
		};
		assert_eq!(points.len(), 2);
		assert_eq!(*width, 0.75);
		let Paint::Linear { stops, .. } = paint else {
			panic!("expected linear gradient");
		};
		assert_eq!(stops[1].1, Color::rgba(255, 215, 0, 0.25));
	}

	#[test]
	fn trail_fades_from_transparent_to_opacity() {
		let mut s = ShootingStar::new(0.0, 0.0, 0.5, 3.0, 80.0, 0.8);
		s.advance();
		s.advance();
		s.advance();
		let painter = RecordingPainter::default();
		draw_shooting_stars(&painter, &[s], &Theme::nebula());
		let ops = painter.ops();
		let DrawOp::StrokePolyline { points, paint, .. } = &ops[0] else {
			panic!("expected polyline");
		};
		assert_eq!(points.len(), 3);
		let Paint::Linear { stops, .. } = paint else {
			panic!("expected linear gradient");
		};
		assert_eq!(stops[0].1.a, 0.0);
		assert_eq!(stops[1].1.a, 0.8);
	}

	#[test]
	fn nebulae_fade_to_transparent() {
		let painter = RecordingPainter::default();
		draw_nebulae(
			&painter,
			&[Nebula {
				x: 10.0,
				y: 10.0,
				radius: 100.0,
				color: Color::rgba(120, 60, 200, 0.1),
			}],
		);
		let DrawOp::FillCircle { x, y, radius, paint } = &painter.ops()[0] else {
			panic!("expected circle");
		};
		assert_eq!((*x, *y, *radius), (10.0, 10.0, 100.0));
		let Paint::Radial { stops, .. } = paint else {
			panic!("expected radial gradient");
		};
		assert_eq!(stops.last().map(|s| s.1.a), Some(0.0));
	}
}
