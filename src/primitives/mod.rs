//! Style primitives - the value types the tilt effect is built from
//!
//! Each primitive renders its own CSS fragment via `to_css()`; the effect
//! layer only composes fragments.

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod opacity;
pub mod position;
pub mod scale;
pub mod transition;

pub use angle::{Angle, Axis};
pub use opacity::Opacity;
pub use position::{Position, Rect};
pub use scale::Scale;
pub use transition::Transition;
