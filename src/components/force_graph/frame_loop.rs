use std::cell::RefCell;
use std::rc::Rc;

/// Owner of a self-rescheduling animation callback.
///
/// The callback may only hold a [`std::rc::Weak`] handle back to its loop.
/// The one strong handle stays with the component, so [`FrameLoop::stop`]
/// (or dropping that handle) frees the callback and everything it captured.
pub struct FrameLoop<F> {
	callback: Option<F>,
	pending: Option<i32>,
}

pub type SharedLoop<F> = Rc<RefCell<FrameLoop<F>>>;

impl<F> FrameLoop<F> {
	pub fn shared() -> SharedLoop<F> {
		Rc::new(RefCell::new(Self {
			callback: None,
			pending: None,
		}))
	}

	pub fn is_running(&self) -> bool {
		self.callback.is_some()
	}

	pub fn start(&mut self, callback: F) {
		self.callback = Some(callback);
	}

	/// Requests the next frame, remembering its id for cancellation.
	pub fn schedule(&mut self, request: impl FnOnce(&F) -> Option<i32>) {
		self.pending = self.callback.as_ref().and_then(request);
	}

	/// Drops the callback and returns the id of a frame still pending.
	pub fn stop(&mut self) -> Option<i32> {
		self.callback = None;
		self.pending.take()
	}
}
