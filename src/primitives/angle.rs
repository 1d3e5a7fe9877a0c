//! Angle - card rotation about one screen axis with CSS transform output

use std::fmt;

/// Screen axis a rotation turns about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis; positive tips the top edge away from the viewer
    X,
    /// Vertical axis; positive swings the right edge away from the viewer
    Y,
}

impl Axis {
    fn css_function(&self) -> &'static str {
        match self {
            Self::X => "rotateX",
            Self::Y => "rotateY",
        }
    }
}

/// Angle in degrees, kept as given; a full turn is not folded away
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub fn new(degrees: f32) -> Self {
        // `+ 0.0` folds -0.0 into 0.0 so a centred pointer renders "0deg"
        Self(degrees + 0.0)
    }

    pub const fn degrees(&self) -> f32 {
        self.0
    }

    /// `rotateX(12deg)` / `rotateY(-4.5deg)`; zero is written out, never elided
    pub fn to_css(&self, axis: Axis) -> String {
        format!("{}({}deg)", axis.css_function(), self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}
