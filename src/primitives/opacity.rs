//! Opacity - shine overlay strength with CSS output

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    #[cfg(test)]
    pub const FULL: Self = Self::new(1.0);
    pub const ZERO: Self = Self::new(0.0);

    /// Smaller of the two; used to cap the shine at the configured maximum
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    pub fn to_css(&self) -> String {
        format!("opacity: {};", self.0)
    }
}
