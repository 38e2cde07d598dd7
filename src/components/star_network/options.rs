//! Page-supplied overrides for the starfield.
//!
//! The host page may embed a JSON document to pick a preset and tune a few
//! knobs without rebuilding:
//!
//! ```json
//! { "preset": "classic", "density": 12000, "shooting_stars": true, "seed": 42 }
//! ```

use log::warn;
use serde::Deserialize;

use super::theme::Theme;

/// Smallest accepted `density` override, in surface pixels per star.
pub const MIN_DENSITY: f64 = 1000.0;

/// Optional overrides layered on top of a [`Theme`] preset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldOptions {
	/// Preset name (`"nebula"` or `"classic"`)
	pub preset: Option<String>,
	/// Surface pixels per star
	pub density: Option<f64>,
	/// Maximum link length in pixels
	pub connection_distance: Option<f64>,
	/// Enable the shooting star spawn policy
	pub shooting_stars: Option<bool>,
	/// Fixed seed for reproducible layouts
	pub seed: Option<u64>,
}

impl StarfieldOptions {
	/// Parse the overrides. Unknown fields are ignored.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Resolve the preset and apply every valid override.
	pub fn theme(&self) -> Theme {
		let mut theme = match self.preset.as_deref() {
			None => Theme::default(),
			Some(name) => Theme::by_name(name).unwrap_or_else(|| {
				warn!("starfield: unknown preset {:?}, using default", name);
				Theme::default()
			}),
		};

		if let Some(density) = self.density {
			if density.is_finite() && density >= MIN_DENSITY {
				theme.stars.density = density;
			} else {
				warn!(
					"starfield: density {} below {} px per star, keeping {}",
					density, MIN_DENSITY, theme.stars.density
				);
			}
		}
		if let Some(distance) = self
			.connection_distance
			.filter(|d| d.is_finite() && *d > 0.0)
		{
			theme.stars.connection_distance = distance;
		}
		if let Some(enabled) = self.shooting_stars {
			theme.shooting_stars.enabled = enabled;
		}
		theme
	}
}
