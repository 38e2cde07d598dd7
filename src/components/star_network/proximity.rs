//! Per-frame proximity links between stars.
//!
//! Every unordered pair is tested, so cost grows with the square of the star
//! count. The density setting keeps typical viewports at a few hundred stars.

use super::field::Star;

/// A connecting line between two stars, valid for one frame only.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Index of the first star (always lower than `b`)
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	pub opacity: f64,
	pub width: f64,
}

/// Line opacity for a pair at `distance` whose sparkle values average to `combined`.
pub fn edge_opacity(distance: f64, connection_distance: f64, combined: f64) -> f64 {
	(1.0 - distance / connection_distance) * (0.1 + combined * 0.2)
}

/// Recompute links from scratch.
///
/// Clears every `connected` flag and the `edges` buffer, then marks both ends
/// of each pair closer than `connection_distance`.
pub fn link(stars: &mut [Star], connection_distance: f64, edges: &mut Vec<Edge>) {
	edges.clear();
	for star in stars.iter_mut() {
		star.connected = false;
	}

	for i in 0..stars.len() {
		for j in (i + 1)..stars.len() {
			let (dx, dy) = (stars[i].x - stars[j].x, stars[i].y - stars[j].y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance >= connection_distance {
				continue;
			}

			let combined = (stars[i].sparkle.value + stars[j].sparkle.value) / 2.0;
			edges.push(Edge {
				a: i,
				b: j,
				distance,
				opacity: edge_opacity(distance, connection_distance, combined),
				width: 0.5 + combined * 0.5,
			});
			stars[i].connected = true;
			stars[j].connected = true;
		}
	}
}
