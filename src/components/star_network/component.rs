//! Leptos component wrapping the starfield canvas.
//!
//! Once the canvas is mounted an effect sizes it to the window, acquires the
//! 2D context and starts a [`FrameDriver`] on `requestAnimationFrame`. The
//! driver is stopped when the component's owner is cleaned up.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::driver::{FrameDriver, Surface};
use super::options::StarfieldOptions;
use super::scheduler::AnimationFrameScheduler;
use super::surface::{WindowResize, window_size};

type CanvasDriver = FrameDriver<AnimationFrameScheduler, WindowResize, CanvasRenderingContext2d>;

/// Size the canvas to the window and fetch its 2D context.
fn acquire_surface(
	window: &Window,
	canvas: &HtmlCanvasElement,
) -> Option<Surface<CanvasRenderingContext2d>> {
	let (width, height) = window_size(window)?;
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);

	let painter: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
	Some(Surface {
		painter,
		width,
		height,
	})
}

/// Random seed from the host when none is configured.
fn host_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Full-viewport animated star network, drawn behind page content.
///
/// The canvas ignores pointer events. Pass `options` to pick a preset or
/// override density, link distance, shooting stars or the seed.
#[component]
pub fn StarNetworkCanvas(#[prop(optional)] options: StarfieldOptions) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let driver: StoredValue<Option<CanvasDriver>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if driver.with_value(|d| d.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let starfield = FrameDriver::new(
			AnimationFrameScheduler::new(window.clone()),
			WindowResize::new(window.clone(), canvas.clone()),
			options.theme(),
			options.seed.unwrap_or_else(host_seed),
		);
		starfield.start(acquire_surface(&window, &canvas));
		driver.set_value(Some(starfield));
	});

	on_cleanup(move || {
		let _ = driver.try_update_value(|d| {
			if let Some(d) = d.take() {
				d.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="star-network"
			style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none;"
		/>
	}
}
