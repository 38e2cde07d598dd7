//! Frame scheduling capability.
//!
//! The driver never calls `requestAnimationFrame` directly; it asks a
//! [`FrameScheduler`] for the next tick and can withdraw that request.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Identifies one outstanding tick request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub i32);

/// Runs a callback once on the host's next frame.
pub trait FrameScheduler {
	/// Queue `callback` for the next frame. `None` means the host refused.
	fn request_tick(&self, callback: Rc<dyn Fn()>) -> Option<TickHandle>;
	/// Withdraw a pending request. Unknown or already-run handles are ignored.
	fn cancel(&self, handle: TickHandle);
}

/// `requestAnimationFrame`-backed scheduler.
pub struct AnimationFrameScheduler {
	window: Window,
}

impl AnimationFrameScheduler {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn request_tick(&self, callback: Rc<dyn Fn()>) -> Option<TickHandle> {
		// Freed by wasm-bindgen when invoked; a cancelled frame leaks one small closure.
		let frame = Closure::once_into_js(move || callback());
		self.window
			.request_animation_frame(frame.unchecked_ref())
			.ok()
			.map(TickHandle)
	}

	fn cancel(&self, handle: TickHandle) {
		let _ = self.window.cancel_animation_frame(handle.0);
	}
}
