//! Transition - CSS transitions applied to the card and shine
//!
//! Tracking uses a very short ease-out so the card follows the pointer
//! without lag; settling uses a longer decelerating curve so the card
//! glides back to rest when the pointer leaves.

/// Timing function of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    /// Fast start, long soft landing
    Decelerate,
}

impl Easing {
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::Decelerate => "cubic-bezier(0.23, 1, 0.32, 1)",
        }
    }
}

/// A `transition:` entry for one CSS property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: &'static str,
    pub seconds: f32,
    pub easing: Easing,
}

impl Transition {
    pub const TRACK_SECONDS: f32 = 0.05;
    pub const SETTLE_SECONDS: f32 = 0.4;

    /// Responsive follow while the pointer moves
    pub const fn track(property: &'static str) -> Self {
        Self { property, seconds: Self::TRACK_SECONDS, easing: Easing::EaseOut }
    }

    /// Settle-back after the pointer leaves
    pub const fn settle(property: &'static str) -> Self {
        Self { property, seconds: Self::SETTLE_SECONDS, easing: Easing::Decelerate }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transition: {} {}s {};",
            self.property,
            self.seconds,
            self.easing.to_css(),
        )
    }
}
