//! Test doubles for the environment seams

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::primitives::{Position, Rect};

use super::frame::FrameScheduler;
use super::motion::MotionQuery;
use super::tracker::PointerTarget;

type Task = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

#[derive(Default)]
struct FrameStats {
    scheduled: Cell<usize>,
    cancelled: Cell<usize>,
}

/// Frame scheduler driven by hand: tasks run only on `flush()`
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<Vec<Task>>>,
    stats: Rc<FrameStats>,
}

pub struct ManualHandle {
    task: Task,
    stats: Rc<FrameStats>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if self.task.borrow_mut().take().is_some() {
            self.stats.cancelled.set(self.stats.cancelled.get() + 1);
        }
    }
}

impl FrameScheduler for ManualFrames {
    type Handle = ManualHandle;

    fn schedule(&self, task: Box<dyn FnOnce()>) -> ManualHandle {
        let task = Rc::new(RefCell::new(Some(task)));
        self.queue.borrow_mut().push(task.clone());
        self.stats.scheduled.set(self.stats.scheduled.get() + 1);
        ManualHandle { task, stats: self.stats.clone() }
    }
}

impl ManualFrames {
    /// Run one display frame; returns how many tasks executed
    pub fn flush(&self) -> usize {
        let queue = std::mem::take(&mut *self.queue.borrow_mut());
        let mut ran = 0;
        for slot in queue {
            let task = slot.borrow_mut().take();
            if let Some(task) = task {
                task();
                ran += 1;
            }
        }
        ran
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().iter().filter(|t| t.borrow().is_some()).count()
    }

    pub fn scheduled(&self) -> usize {
        self.stats.scheduled.get()
    }

    pub fn cancelled(&self) -> usize {
        self.stats.cancelled.get()
    }
}

type MoveHandler = Rc<RefCell<Box<dyn FnMut(Position)>>>;
type LeaveHandler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct TargetState {
    rect: Cell<Rect>,
    measured: Cell<usize>,
    next_id: Cell<u64>,
    moves: RefCell<Vec<(u64, MoveHandler)>>,
    leaves: RefCell<Vec<(u64, LeaveHandler)>>,
}

/// Element stand-in with a settable rect and countable listeners
#[derive(Clone, Default)]
pub struct FakeTarget {
    state: Rc<TargetState>,
}

pub struct FakeListener {
    id: u64,
    state: Rc<TargetState>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.state.moves.borrow_mut().retain(|(id, _)| *id != self.id);
        self.state.leaves.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

impl FakeTarget {
    pub fn new(rect: Rect) -> Self {
        let target = Self::default();
        target.state.rect.set(rect);
        target
    }

    pub fn set_rect(&self, rect: Rect) {
        self.state.rect.set(rect);
    }

    pub fn listener_count(&self) -> usize {
        self.state.moves.borrow().len() + self.state.leaves.borrow().len()
    }

    pub fn times_measured(&self) -> usize {
        self.state.measured.get()
    }

    pub fn move_to(&self, x: f32, y: f32) {
        let handlers: Vec<MoveHandler> =
            self.state.moves.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            (handler.borrow_mut())(Position::new(x, y));
        }
    }

    pub fn leave(&self) {
        let handlers: Vec<LeaveHandler> =
            self.state.leaves.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        id
    }
}

impl PointerTarget for FakeTarget {
    type Listener = FakeListener;

    fn bounding_rect(&self) -> Rect {
        self.state.measured.set(self.state.measured.get() + 1);
        self.state.rect.get()
    }

    fn on_pointer_move(&self, handler: Box<dyn FnMut(Position)>) -> FakeListener {
        let id = self.next_id();
        self.state.moves.borrow_mut().push((id, Rc::new(RefCell::new(handler))));
        FakeListener { id, state: self.state.clone() }
    }

    fn on_pointer_leave(&self, handler: Box<dyn FnMut()>) -> FakeListener {
        let id = self.next_id();
        self.state.leaves.borrow_mut().push((id, Rc::new(RefCell::new(handler))));
        FakeListener { id, state: self.state.clone() }
    }
}

type ChangeHandler = Rc<RefCell<Box<dyn FnMut(bool)>>>;

#[derive(Default)]
struct QueryState {
    matches: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, ChangeHandler)>>,
}

/// `matchMedia` stand-in whose value the test flips
#[derive(Clone, Default)]
pub struct FakeMediaQuery {
    state: Rc<QueryState>,
}

pub struct FakeSubscription {
    id: u64,
    state: Rc<QueryState>,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        self.state.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

impl FakeMediaQuery {
    pub fn new(reduced: bool) -> Self {
        let query = Self::default();
        query.state.matches.set(reduced);
        query
    }

    /// Flip the OS setting; every listener sees a change event
    pub fn set_reduced(&self, reduced: bool) {
        self.state.matches.set(reduced);
        let handlers: Vec<ChangeHandler> =
            self.state.listeners.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            (handler.borrow_mut())(reduced);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

impl MotionQuery for FakeMediaQuery {
    type Subscription = FakeSubscription;

    fn matches(&self) -> bool {
        self.state.matches.get()
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> FakeSubscription {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state.listeners.borrow_mut().push((id, Rc::new(RefCell::new(on_change))));
        FakeSubscription { id, state: self.state.clone() }
    }
}
