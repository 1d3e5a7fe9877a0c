//! Card tilt effect - pointer position to 3D transform and shine
//!
//! Layered so the math can be tested without a browser:
//! - `mapper`: pure `(sample, config) -> TiltFrame`
//! - `style`: CSS descriptors the host renders
//! - `frame`, `motion`, `tracker`: scheduling, reduced-motion watch and
//!   event binding, generic over the environment traits
//!
//! The browser implementations of those traits live in `crate::web`.

pub mod config;
pub mod frame;
pub mod mapper;
pub mod motion;
pub mod style;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{EffectConfig, EffectOptions};
pub use frame::FrameScheduler;
pub use motion::{MotionPreference, MotionQuery, MotionWatch, REDUCED_MOTION_QUERY};
pub use style::{EffectOutput, TiltFrame};
pub use tracker::{FrameSink, PointerTarget, TiltSession};
