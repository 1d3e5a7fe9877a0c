//! Dioxus hooks wiring the tilt effect into signals
//!
//! `use_card_tilt` is the host-facing entry point: hand it a signal that
//! gets the container element once mounted, and render the three style
//! strings from `CardTilt::output()`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::effect::{
    EffectConfig, EffectOutput, FrameSink, MotionPreference, MotionWatch, TiltFrame, TiltSession,
};
use crate::web::{AnimationFrames, MediaMotionQuery};

/// Reduced-motion preference, kept current for the component's lifetime
pub fn use_motion_preference() -> Signal<MotionPreference> {
    let mut preference = use_signal(MotionPreference::default);

    let watch = use_hook(move || {
        let query = MediaMotionQuery::detect();
        let watch = MotionWatch::activate(query.as_ref(), move |p| preference.set(p));
        if watch.current() != MotionPreference::default() {
            preference.set(watch.current());
        }
        Rc::new(RefCell::new(Some(watch)))
    });

    use_drop(move || {
        if let Some(mut watch) = watch.borrow_mut().take() {
            watch.release();
        }
    });

    preference
}

/// Signals behind one card's tilt; cheap to copy into closures
#[derive(Clone, Copy, PartialEq)]
pub struct CardTilt {
    frame: Signal<Option<TiltFrame>>,
    config: Signal<EffectConfig>,
    preference: Signal<MotionPreference>,
}

impl CardTilt {
    pub fn output(&self) -> EffectOutput {
        EffectOutput::new(self.config.read().perspective).with_frame(*self.frame.read())
    }

    pub fn preference(&self) -> MotionPreference {
        *self.preference.read()
    }
}

/// Bind the tilt effect to `container` once it resolves.
///
/// Rebinds whenever the element, the config or the motion preference
/// changes; unbinds when the component is dropped.
pub fn use_card_tilt(
    container: Signal<Option<web_sys::Element>>,
    config: EffectConfig,
) -> CardTilt {
    let preference = use_motion_preference();
    let mut frame = use_signal(|| None::<TiltFrame>);

    let mut active_config = use_signal(|| config);
    if *active_config.peek() != config {
        active_config.set(config);
    }

    let session = use_hook(|| {
        Rc::new(RefCell::new(TiltSession::<web_sys::Element, AnimationFrames>::new()))
    });

    let effect_session = session.clone();
    use_effect(move || {
        let preference = preference();
        let config = active_config();
        let target = container();

        let sink: FrameSink = Rc::new(move |next: Option<TiltFrame>| {
            let mut frame = frame;
            frame.set(next);
        });
        effect_session
            .borrow_mut()
            .rebind(target, preference, config, AnimationFrames, sink);
    });

    use_drop(move || session.borrow_mut().unbind());

    CardTilt {
        frame,
        config: active_config,
        preference,
    }
}
