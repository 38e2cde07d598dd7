//! Start/stop lifecycle and the per-frame loop.
//!
//! The driver is `Stopped` until [`FrameDriver::start`] is given a drawable
//! surface, then `Running` until [`FrameDriver::stop`]. While running, each
//! tick paints and steps the [`StarfieldState`] once and asks the scheduler for
//! the next tick. Stopping withdraws the pending request and drops the resize
//! subscription; every tick also checks the phase first, so a tick that was
//! already in flight when teardown happened does nothing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use super::paint::Painter;
use super::render;
use super::scheduler::{FrameScheduler, TickHandle};
use super::state::StarfieldState;
use super::surface::ResizeNotifier;
use super::theme::Theme;

/// Lifecycle phase of a [`FrameDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Stopped,
	Running,
}

/// An acquired drawing surface and its initial size.
pub struct Surface<P> {
	pub painter: P,
	pub width: f64,
	pub height: f64,
}

struct Inner<S, R, P> {
	scheduler: S,
	resize: R,
	theme: Theme,
	seed: u64,
	phase: Cell<Phase>,
	/// Set by the first `start`, successful or not
	started: Cell<bool>,
	pending: Cell<Option<TickHandle>>,
	painter: RefCell<Option<P>>,
	state: RefCell<Option<StarfieldState>>,
	on_tick: RefCell<Option<Rc<dyn Fn()>>>,
}

/// Drives a starfield from a frame scheduler.
pub struct FrameDriver<S, R, P>
where
	S: FrameScheduler,
	R: ResizeNotifier,
	P: Painter,
{
	inner: Rc<Inner<S, R, P>>,
}

impl<S, R, P> FrameDriver<S, R, P>
where
	S: FrameScheduler,
	R: ResizeNotifier,
	P: Painter,
{
	pub fn new(scheduler: S, resize: R, theme: Theme, seed: u64) -> Self {
		Self {
			inner: Rc::new(Inner {
				scheduler,
				resize,
				theme,
				seed,
				phase: Cell::new(Phase::Stopped),
				started: Cell::new(false),
				pending: Cell::new(None),
				painter: RefCell::new(None),
				state: RefCell::new(None),
				on_tick: RefCell::new(None),
			}),
		}
	}

	pub fn phase(&self) -> Phase {
		self.inner.phase.get()
	}

	/// Leave `Running`: withdraw the pending tick and drop the resize handler.
	/// Safe to call at any time, any number of times.
	pub fn stop(&self) {
		let inner = &self.inner;
		let was_running = inner.phase.replace(Phase::Stopped) == Phase::Running;
		if let Some(handle) = inner.pending.take() {
			inner.scheduler.cancel(handle);
		}
		inner.on_tick.borrow_mut().take();
		if was_running {
			inner.resize.unsubscribe();
			debug!("starfield: stopped");
		}
	}

	/// Record a new viewport size; applied from the next tick on.
	pub fn resize(&self, width: f64, height: f64) {
		if let Some(state) = self.inner.state.borrow_mut().as_mut() {
			state.resize(width, height);
		}
	}

	/// Inspect the simulation, if one was started.
	pub fn with_state<T>(&self, f: impl FnOnce(&StarfieldState) -> T) -> Option<T> {
		self.inner.state.borrow().as_ref().map(f)
	}

	fn tick(inner: &Inner<S, R, P>) {
		if inner.phase.get() != Phase::Running {
			return;
		}
		inner.pending.set(None);

		{
			let painter = inner.painter.borrow();
			let mut state = inner.state.borrow_mut();
			let (Some(painter), Some(state)) = (painter.as_ref(), state.as_mut()) else {
				return;
			};
			state.tick(painter);
		}

		Self::schedule(inner);
	}

	fn schedule(inner: &Inner<S, R, P>) {
		if inner.phase.get() != Phase::Running {
			return;
		}
		let Some(on_tick) = inner.on_tick.borrow().clone() else {
			return;
		};
		match inner.scheduler.request_tick(on_tick) {
			Some(handle) => inner.pending.set(Some(handle)),
			None => {
				warn!("starfield: frame request refused, stopping");
				inner.phase.set(Phase::Stopped);
				inner.resize.unsubscribe();
			}
		}
	}
}

impl<S, R, P> FrameDriver<S, R, P>
where
	S: FrameScheduler + 'static,
	R: ResizeNotifier + 'static,
	P: Painter + 'static,
{
	/// Seed the field on `surface` and enter `Running`.
	///
	/// Without a surface the driver stays `Stopped` for good. Only the first
	/// call has any effect.
	pub fn start(&self, surface: Option<Surface<P>>) -> Phase {
		let inner = &self.inner;
		if inner.started.replace(true) {
			return inner.phase.get();
		}
		let Some(Surface {
			painter,
			width,
			height,
		}) = surface
		else {
			warn!("starfield: no 2d drawing surface, animation disabled");
			return Phase::Stopped;
		};

		let state = StarfieldState::new(inner.theme.clone(), width, height, inner.seed);
		render::draw_nebulae(&painter, &state.nebulae);
		info!(
			"starfield: started with {} stars on {}x{}",
			state.stars.len(),
			width,
			height
		);
		*inner.state.borrow_mut() = Some(state);
		*inner.painter.borrow_mut() = Some(painter);

		let weak = Rc::downgrade(inner);
		inner.resize.subscribe(Rc::new(move |w: f64, h: f64| {
			if let Some(inner) = weak.upgrade() {
				if let Some(state) = inner.state.borrow_mut().as_mut() {
					state.resize(w, h);
				}
			}
		}));

		let weak: Weak<Inner<S, R, P>> = Rc::downgrade(inner);
		let on_tick: Rc<dyn Fn()> = Rc::new(move || {
			if let Some(inner) = weak.upgrade() {
				Self::tick(&inner);
			}
		});
		*inner.on_tick.borrow_mut() = Some(on_tick);

		inner.phase.set(Phase::Running);
		Self::schedule(inner);
		Phase::Running
	}
}

impl<S, R, P> Drop for FrameDriver<S, R, P>
where
	S: FrameScheduler,
	R: ResizeNotifier,
	P: Painter,
{
	fn drop(&mut self) {
		self.stop();
	}
}
