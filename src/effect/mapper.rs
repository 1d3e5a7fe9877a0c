//! Mapper - pointer position to card tilt and shine, as pure functions
//!
//! Nothing here touches the DOM; the tracker measures the element and feeds
//! a `PointerSample` in, and gets a `TiltFrame` back.

use crate::primitives::{Angle, Opacity, Position, Rect, Transition};

use super::config::EffectConfig;
use super::style::{CardTransform, HOVER_LIFT, ShineVisual, TiltFrame};

/// Pointer position relative to the element's top-left, with the element size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PointerSample {
    pub fn from_client(client: Position, rect: Rect) -> Self {
        let local = rect.to_local(client);
        Self {
            x: local.x,
            y: local.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn local(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Offset from the element centre in half-extents; [-1, 1] inside the element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedOffset {
    pub x: f32,
    pub y: f32,
}

impl NormalizedOffset {
    /// `None` for a zero-sized element, which has no centre to tilt around
    pub fn of(sample: &PointerSample) -> Option<Self> {
        let rect = Rect::new(0.0, 0.0, sample.width, sample.height);
        if rect.is_degenerate() {
            return None;
        }
        let center = rect.local_center();
        Some(Self {
            x: (sample.x - center.x) / center.x,
            y: (sample.y - center.y) / center.y,
        })
    }

    /// Distance from centre; 1 at the edge midpoints, sqrt(2) at the corners
    pub fn radius(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Rotation pair for an offset: (about X, about Y)
///
/// The X rotation is negated so the edge nearest the pointer tips toward
/// the viewer.
pub fn tilt(offset: NormalizedOffset, max_rotation: f32) -> (Angle, Angle) {
    let rotate_x = Angle::new(-offset.y * max_rotation);
    let rotate_y = Angle::new(offset.x * max_rotation);
    (rotate_x, rotate_y)
}

/// Radial falloff from the centre, capped at `max`
pub fn shine_opacity(offset: NormalizedOffset, max: Opacity) -> Opacity {
    Opacity::clamped(offset.radius() * max.value()).min(max)
}

/// Full frame for a pointer sample, or `None` when the element has no area
pub fn compute_frame(sample: &PointerSample, config: &EffectConfig) -> Option<TiltFrame> {
    let offset = NormalizedOffset::of(sample)?;
    let (rotate_x, rotate_y) = tilt(offset, config.max_rotation);

    let card = CardTransform {
        scale: config.scale_on_hover,
        lift: HOVER_LIFT,
        rotate_x,
        rotate_y,
        transition: Transition::track("transform"),
    };
    let shine = ShineVisual {
        opacity: shine_opacity(offset, config.max_shine_opacity),
        center: Some(sample.local()),
        transition: None,
    };
    Some(TiltFrame { card, shine })
}
