//! Position and Rect - pointer coordinates and element bounds
//!
//! Client positions come straight from mouse events (viewport pixels).
//! Rects come from `getBoundingClientRect()` and share that space, so a
//! client position minus the rect origin is element-local.

/// Point in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// `circle at 150px 40px` fragment for radial gradients
    pub fn to_css(&self) -> String {
        format!("{}px {}px", self.x, self.y)
    }
}

/// Axis-aligned bounding box in client-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Centre in element-local coordinates
    pub fn local_center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Translate a client-space point into this rect's local space
    pub fn to_local(&self, client: Position) -> Position {
        client.translate(-self.left, -self.top)
    }

    /// Collapsed on either axis (display: none, detached, zero-size layout)
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
