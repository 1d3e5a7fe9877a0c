//! Motion preference - the reduced-motion accessibility signal
//!
//! The environment owns the value. `MotionWatch` reads it once on
//! activation, then mirrors change notifications pushed by the environment
//! until the watch is dropped, which releases the subscription.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    /// Motion allowed; also the answer when the environment can't be asked
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub const fn from_matches(reduce_matches: bool) -> Self {
        if reduce_matches { Self::Reduce } else { Self::NoPreference }
    }

    pub const fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduce)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::NoPreference => "motion allowed",
            Self::Reduce => "reduced motion",
        }
    }
}

/// A live media query for the reduced-motion signal
pub trait MotionQuery {
    /// Dropping the subscription unregisters the listener
    type Subscription;

    fn matches(&self) -> bool;

    /// `on_change` receives the new `matches` value
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Self::Subscription;
}

/// Mirrored preference plus the subscription keeping it current
pub struct MotionWatch<Q: MotionQuery> {
    current: Rc<Cell<MotionPreference>>,
    subscription: Option<Q::Subscription>,
}

impl<Q: MotionQuery> MotionWatch<Q> {
    /// Read the query once and subscribe to changes. `on_change` only fires
    /// when the preference actually flips.
    ///
    /// With no query the watch reports `NoPreference` and never fires.
    pub fn activate(
        query: Option<&Q>,
        mut on_change: impl FnMut(MotionPreference) + 'static,
    ) -> Self {
        let Some(query) = query else {
            debug!("no media query support, assuming motion is allowed");
            return Self {
                current: Rc::new(Cell::new(MotionPreference::NoPreference)),
                subscription: None,
            };
        };

        let current = Rc::new(Cell::new(MotionPreference::from_matches(query.matches())));
        let mirror = current.clone();
        let subscription = query.subscribe(Box::new(move |matches| {
            let preference = MotionPreference::from_matches(matches);
            if mirror.replace(preference) != preference {
                debug!(preference = preference.describe(), "motion preference changed");
                on_change(preference);
            }
        }));

        Self { current, subscription: Some(subscription) }
    }

    pub fn current(&self) -> MotionPreference {
        self.current.get()
    }

    #[cfg(test)]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unregister now rather than at drop
    pub fn release(&mut self) {
        self.subscription = None;
    }
}
