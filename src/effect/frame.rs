//! Frame scheduling - at most one pending computation per display frame
//!
//! A scheduler hands back a handle per scheduled task. Dropping the handle
//! cancels the task if it has not run yet, which is how
//! `gloo_render::AnimationFrame` behaves. `FrameSlot` owns at most one such
//! handle: scheduling into an occupied slot drops (cancels) the old one.

/// Something that can run a task on the next display frame
pub trait FrameScheduler {
    /// Dropping the handle cancels the task
    type Handle;

    fn schedule(&self, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Single pending-task slot
pub struct FrameSlot<H> {
    pending: Option<H>,
}

impl<H> FrameSlot<H> {
    pub const fn empty() -> Self {
        Self { pending: None }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Store `handle`, cancelling whatever was pending. Returns true if
    /// something was superseded.
    pub fn replace(&mut self, handle: H) -> bool {
        self.pending.replace(handle).is_some()
    }

    /// Cancel the pending task, if any
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Forget the handle of a task that is running now
    pub fn complete(&mut self) -> Option<H> {
        self.pending.take()
    }
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::testing::ManualFrames;

    #[test]
    fn replace_cancels_previous() {
        let frames = ManualFrames::default();
        let mut slot = FrameSlot::empty();

        assert!(!slot.replace(frames.schedule(Box::new(|| {}))));
        assert!(slot.replace(frames.schedule(Box::new(|| {}))));

        assert_eq!(frames.cancelled(), 1);
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn cancel_empties_slot() {
        let frames = ManualFrames::default();
        let mut slot = FrameSlot::empty();
        slot.replace(frames.schedule(Box::new(|| {})));

        assert!(slot.cancel());
        assert!(!slot.is_pending());
        assert!(!slot.cancel());
        assert_eq!(frames.flush(), 0);
    }

    #[test]
    fn cancelled_task_never_runs() {
        use std::cell::Cell;
        use std::rc::Rc;

        let frames = ManualFrames::default();
        let ran = Rc::new(Cell::new(0));
        let mut slot = FrameSlot::empty();

        for _ in 0..3 {
            let ran = ran.clone();
            slot.replace(frames.schedule(Box::new(move || ran.set(ran.get() + 1))));
        }
        assert_eq!(frames.flush(), 1);
        assert_eq!(ran.get(), 1);
    }
}
