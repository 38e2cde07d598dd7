//! Drawable extents and the host's resize notifications.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

/// Current drawable size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Source of viewport size changes.
///
/// Handlers run synchronously between frames and receive the new width and
/// height.
pub trait ResizeNotifier {
	fn subscribe(&self, on_resize: Rc<dyn Fn(f64, f64)>);
	/// Remove the handler installed by [`ResizeNotifier::subscribe`], if any.
	fn unsubscribe(&self);
}

/// Inner size of the browser window, if it can be read.
pub fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Window `resize` listener that keeps a canvas backing store matched to the
/// viewport before forwarding the new size.
pub struct WindowResize {
	window: Window,
	canvas: HtmlCanvasElement,
	listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl WindowResize {
	pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
		Self {
			window,
			canvas,
			listener: RefCell::new(None),
		}
	}
}

impl ResizeNotifier for WindowResize {
	fn subscribe(&self, on_resize: Rc<dyn Fn(f64, f64)>) {
		self.unsubscribe();

		let (window, canvas) = (self.window.clone(), self.canvas.clone());
		let listener: Closure<dyn FnMut()> = Closure::new(move || {
			let Some((w, h)) = window_size(&window) else {
				return;
			};
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			on_resize(w, h);
		});
		let _ = self
			.window
			.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
		*self.listener.borrow_mut() = Some(listener);
	}

	fn unsubscribe(&self) {
		if let Some(listener) = self.listener.borrow_mut().take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
		}
	}
}
