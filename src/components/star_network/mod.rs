//! Animated star network backdrop.
//!
//! Draws a full-viewport canvas of drifting stars with:
//! - Proximity lines between nearby stars, brighter for twinkling pairs
//! - A slow per-star twinkle plus occasional independent flashes
//! - Halo and burst glyphs on the brightest stars
//! - A gradient backdrop with nebulae painted once at startup
//! - Optional shooting stars with fading trails
//!
//! The simulation ([`StarfieldState`]) is independent of the browser. Drawing
//! goes through [`Painter`], frame timing through [`FrameScheduler`] and size
//! changes through [`ResizeNotifier`], so whole runs can be stepped in tests.
//!
//! # Example
//!
//! ```ignore
//! use starfield::{StarNetworkCanvas, StarfieldOptions};
//!
//! view! { <StarNetworkCanvas options=StarfieldOptions::default() /> }
//! ```

mod canvas;
mod component;
pub mod driver;
pub mod field;
pub mod options;
pub mod paint;
pub mod proximity;
mod render;
pub mod scheduler;
pub mod shooting;
pub mod sparkle;
pub mod state;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod theme;

pub use component::StarNetworkCanvas;
pub use driver::{FrameDriver, Phase, Surface};
pub use options::StarfieldOptions;
pub use paint::{Paint, Painter};
pub use scheduler::{FrameScheduler, TickHandle};
pub use state::StarfieldState;
pub use surface::{ResizeNotifier, Viewport};
pub use theme::Theme;
