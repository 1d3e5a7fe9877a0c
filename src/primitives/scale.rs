//! Scale - CSS transform scale factor applied while the card is hovered

use super::bounded::bounded_f32;

bounded_f32!(Scale, 0.25, 3.0);

impl Scale {
    pub const NORMAL: Self = Self::new(1.0);
    pub const HOVER: Self = Self::new(1.05);

    pub fn to_css(&self) -> String {
        format!("scale({})", self.0)
    }
}
