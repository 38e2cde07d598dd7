//! Headless stand-ins for the browser: a hand-cranked scheduler, a resize
//! source fired on demand, and a painter that records what it was asked to draw.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::paint::{Paint, Painter};
use super::scheduler::{FrameScheduler, TickHandle};
use super::surface::ResizeNotifier;

#[derive(Default)]
struct Queue {
	next_id: i32,
	pending: Vec<(TickHandle, Rc<dyn Fn()>)>,
}

/// Scheduler whose frames only advance when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
	queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
	pub fn pending(&self) -> usize {
		self.queue.borrow().pending.len()
	}

	/// Remove queued callbacks without running them.
	pub fn take_pending(&self) -> Vec<Rc<dyn Fn()>> {
		self.queue
			.borrow_mut()
			.pending
			.drain(..)
			.map(|(_, cb)| cb)
			.collect()
	}

	/// Run everything queued so far (not what those callbacks queue).
	pub fn run_pending(&self) -> usize {
		let due = self.take_pending();
		for cb in &due {
			cb();
		}
		due.len()
	}
}

impl FrameScheduler for ManualScheduler {
	fn request_tick(&self, callback: Rc<dyn Fn()>) -> Option<TickHandle> {
		let mut queue = self.queue.borrow_mut();
		queue.next_id += 1;
		let handle = TickHandle(queue.next_id);
		queue.pending.push((handle, callback));
		Some(handle)
	}

	fn cancel(&self, handle: TickHandle) {
		self.queue.borrow_mut().pending.retain(|(h, _)| *h != handle);
	}
}

/// Resize source fired explicitly with [`ManualResize::fire`].
#[derive(Clone, Default)]
pub struct ManualResize {
	handler: Rc<RefCell<Option<Rc<dyn Fn(f64, f64)>>>>,
	subscriptions: Rc<Cell<usize>>,
}

impl ManualResize {
	pub fn is_subscribed(&self) -> bool {
		self.handler.borrow().is_some()
	}

	pub fn subscriptions(&self) -> usize {
		self.subscriptions.get()
	}

	pub fn fire(&self, width: f64, height: f64) {
		let handler = self.handler.borrow().clone();
		if let Some(handler) = handler {
			handler(width, height);
		}
	}
}

impl ResizeNotifier for ManualResize {
	fn subscribe(&self, on_resize: Rc<dyn Fn(f64, f64)>) {
		self.subscriptions.set(self.subscriptions.get() + 1);
		*self.handler.borrow_mut() = Some(on_resize);
	}

	fn unsubscribe(&self) {
		self.handler.borrow_mut().take();
	}
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear {
		w: f64,
		h: f64,
	},
	FillRect {
		x: f64,
		y: f64,
		w: f64,
		h: f64,
		paint: Paint,
	},
	FillCircle {
		x: f64,
		y: f64,
		radius: f64,
		paint: Paint,
	},
	StrokePolyline {
		points: Vec<(f64, f64)>,
		width: f64,
		paint: Paint,
	},
	StrokeSegments {
		segments: Vec<((f64, f64), (f64, f64))>,
		width: f64,
		paint: Paint,
	},
}

/// Painter that records every call; clones share one log.
#[derive(Clone, Default)]
pub struct RecordingPainter {
	ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingPainter {
	pub fn ops(&self) -> Vec<DrawOp> {
		self.ops.borrow().clone()
	}
}

impl Painter for RecordingPainter {
	fn clear_rect(&self, _x: f64, _y: f64, w: f64, h: f64) {
		self.ops.borrow_mut().push(DrawOp::Clear { w, h });
	}

	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
		self.ops.borrow_mut().push(DrawOp::FillRect {
			x,
			y,
			w,
			h,
			paint: paint.clone(),
		});
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, paint: &Paint) {
		self.ops.borrow_mut().push(DrawOp::FillCircle {
			x,
			y,
			radius,
			paint: paint.clone(),
		});
	}

	fn stroke_polyline(&self, points: &[(f64, f64)], width: f64, paint: &Paint) {
		self.ops.borrow_mut().push(DrawOp::StrokePolyline {
			points: points.to_vec(),
			width,
			paint: paint.clone(),
		});
	}

	fn stroke_segments(&self, segments: &[((f64, f64), (f64, f64))], width: f64, paint: &Paint) {
		self.ops.borrow_mut().push(DrawOp::StrokeSegments {
			segments: segments.to_vec(),
			width,
			paint: paint.clone(),
		});
	}
}
