//! Tracker - binds pointer events on one element to per-frame tilt output
//!
//! Pointer moves only record the latest client position and (re)schedule a
//! frame; the frame callback measures the element, runs the mapper and
//! hands the result to the sink. A `TiltBinding` owns the listeners and
//! tears everything down on drop: pending frame first, then listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::primitives::{Position, Rect};

use super::config::EffectConfig;
use super::frame::{FrameScheduler, FrameSlot};
use super::mapper::{PointerSample, compute_frame};
use super::motion::MotionPreference;
use super::style::TiltFrame;

/// Receives every frame the tracker produces; `None` clears the effect's
/// styles back to the static state
pub type FrameSink = Rc<dyn Fn(Option<TiltFrame>)>;

/// An element that can be measured and can deliver pointer events
pub trait PointerTarget {
    /// Dropping the listener unregisters the handler
    type Listener;

    /// Current on-screen bounds, in the same space as pointer client positions
    fn bounding_rect(&self) -> Rect;

    /// Handler receives the pointer's client position
    fn on_pointer_move(&self, handler: Box<dyn FnMut(Position)>) -> Self::Listener;

    fn on_pointer_leave(&self, handler: Box<dyn FnMut()>) -> Self::Listener;
}

struct TrackerState<T: PointerTarget, S: FrameScheduler> {
    target: T,
    scheduler: S,
    config: EffectConfig,
    pending: RefCell<FrameSlot<S::Handle>>,
    latest: Cell<Option<Position>>,
    sink: FrameSink,
}

impl<T: PointerTarget, S: FrameScheduler> TrackerState<T, S> {
    fn run_frame(&self) {
        drop(self.pending.borrow_mut().complete());

        let Some(client) = self.latest.get() else {
            return;
        };
        // measured here, not at bind time: layout may have moved since
        let rect = self.target.bounding_rect();
        let sample = PointerSample::from_client(client, rect);
        match compute_frame(&sample, &self.config) {
            Some(frame) => (self.sink)(Some(frame)),
            None => debug!(width = rect.width, height = rect.height, "skipping frame for zero-sized element"),
        }
    }
}

/// Pointer-to-frame state machine for one element
pub struct TiltTracker<T: PointerTarget, S: FrameScheduler> {
    state: Rc<TrackerState<T, S>>,
}

impl<T: PointerTarget, S: FrameScheduler> Clone for TiltTracker<T, S> {
    fn clone(&self) -> Self {
        Self { state: self.state.clone() }
    }
}

impl<T, S> TiltTracker<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    pub fn new(target: T, scheduler: S, config: EffectConfig, sink: FrameSink) -> Self {
        Self {
            state: Rc::new(TrackerState {
                target,
                scheduler,
                config,
                pending: RefCell::new(FrameSlot::empty()),
                latest: Cell::new(None),
                sink,
            }),
        }
    }

    /// Record the position and schedule a frame, superseding any pending one
    pub fn pointer_move(&self, client: Position) {
        self.state.latest.set(Some(client));

        let weak = Rc::downgrade(&self.state);
        let handle = self.state.scheduler.schedule(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.run_frame();
            }
        }));
        self.state.pending.borrow_mut().replace(handle);
    }

    /// Cancel pending work and settle back to the neutral pose
    pub fn pointer_leave(&self) {
        self.cancel();
        (self.state.sink)(Some(TiltFrame::resting()));
    }

    /// Cancel the pending frame; true if there was one
    pub fn cancel(&self) -> bool {
        self.state.pending.borrow_mut().cancel()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.state.pending.borrow().is_pending()
    }
}

/// Live listeners on one element; dropping it deactivates the effect
pub struct TiltBinding<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    tracker: TiltTracker<T, S>,
    listeners: Vec<T::Listener>,
}

impl<T, S> TiltBinding<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    /// Bind to `target` unless motion is reduced or the target isn't resolved yet
    pub fn attach(
        target: Option<T>,
        preference: MotionPreference,
        config: EffectConfig,
        scheduler: S,
        sink: FrameSink,
    ) -> Option<Self> {
        if preference.is_reduced() {
            debug!("reduced motion requested, tilt stays static");
            return None;
        }
        let Some(target) = target else {
            debug!("container not mounted yet, skipping bind");
            return None;
        };

        let tracker = TiltTracker::new(target, scheduler, config, sink);

        let on_move = tracker.clone();
        let move_listener = tracker
            .state
            .target
            .on_pointer_move(Box::new(move |client| on_move.pointer_move(client)));
        let on_leave = tracker.clone();
        let leave_listener = tracker
            .state
            .target
            .on_pointer_leave(Box::new(move || on_leave.pointer_leave()));

        debug!(max_rotation = config.max_rotation, "tilt bound");
        Some(Self {
            tracker,
            listeners: vec![move_listener, leave_listener],
        })
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &TiltTracker<T, S> {
        &self.tracker
    }
}

impl<T, S> Drop for TiltBinding<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    fn drop(&mut self) {
        self.tracker.cancel();
        self.listeners.clear();
        debug!("tilt unbound");
    }
}

/// Slot holding the current binding, rebuilt whenever an input changes
pub struct TiltSession<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    binding: Option<TiltBinding<T, S>>,
}

impl<T, S> TiltSession<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    pub const fn new() -> Self {
        Self { binding: None }
    }

    /// Tear down the old binding, then bind again with the new inputs.
    /// Reduced motion also clears any frame still on screen.
    /// Returns whether listeners are now attached.
    pub fn rebind(
        &mut self,
        target: Option<T>,
        preference: MotionPreference,
        config: EffectConfig,
        scheduler: S,
        sink: FrameSink,
    ) -> bool {
        self.unbind();
        if preference.is_reduced() {
            sink(None);
        }
        self.binding = TiltBinding::attach(target, preference, config, scheduler, sink);
        self.binding.is_some()
    }

    pub fn unbind(&mut self) {
        self.binding = None;
    }

    #[cfg(test)]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

impl<T, S> Default for TiltSession<T, S>
where
    T: PointerTarget + 'static,
    S: FrameScheduler + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
