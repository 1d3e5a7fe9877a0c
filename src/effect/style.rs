//! Style descriptors handed to the host
//!
//! Three nested elements receive styles: the container (perspective), the
//! card (transform) and the shine overlay (opacity + gradient). The host
//! pastes the strings into `style:` attributes verbatim.

use crate::primitives::{Angle, Axis, Opacity, Position, Scale, Transition};

/// Card depth offset while hovered, in pixels
pub const HOVER_LIFT: f32 = 20.0;

/// Gradient stop where the shine fades to transparent
const SHINE_FALLOFF: &str = "transparent 40%";
const SHINE_COLOR: &str = "rgba(255, 255, 255, 0.8)";

/// Transform applied to the card element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub scale: Scale,
    pub lift: f32,
    pub rotate_x: Angle,
    pub rotate_y: Angle,
    pub transition: Transition,
}

impl CardTransform {
    /// Neutral pose, gliding back with the settle transition
    pub const fn resting() -> Self {
        Self {
            scale: Scale::NORMAL,
            lift: 0.0,
            rotate_x: Angle::ZERO,
            rotate_y: Angle::ZERO,
            transition: Transition::settle("transform"),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: {} translateZ({}px) {} {}; will-change: transform; {}",
            self.scale.to_css(),
            self.lift,
            self.rotate_x.to_css(Axis::X),
            self.rotate_y.to_css(Axis::Y),
            self.transition.to_css(),
        )
    }
}

/// Radial highlight overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShineVisual {
    pub opacity: Opacity,
    /// Gradient centre in element-local pixels; `None` writes no background at all
    pub center: Option<Position>,
    pub transition: Option<Transition>,
}

impl ShineVisual {
    pub const fn hidden() -> Self {
        Self {
            opacity: Opacity::ZERO,
            center: None,
            transition: Some(Transition::settle("opacity")),
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = self.opacity.to_css();
        match self.center {
            Some(center) => {
                css.push_str(&format!(
                    " background: radial-gradient(circle at {}, {}, {}); will-change: opacity, background;",
                    center.to_css(),
                    SHINE_COLOR,
                    SHINE_FALLOFF,
                ));
            }
            None => css.push_str(" will-change: opacity;"),
        }
        if let Some(transition) = self.transition {
            css.push(' ');
            css.push_str(&transition.to_css());
        }
        css
    }
}

/// Perspective applied to the container so the card's 3D transform reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveSetting {
    pub pixels: f32,
}

impl PerspectiveSetting {
    pub fn to_css(&self) -> String {
        format!("perspective: {}px;", self.pixels)
    }
}

/// One frame's worth of card + shine styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    pub card: CardTransform,
    pub shine: ShineVisual,
}

impl TiltFrame {
    /// What pointer-leave emits regardless of where the pointer was
    pub const fn resting() -> Self {
        Self {
            card: CardTransform::resting(),
            shine: ShineVisual::hidden(),
        }
    }
}

/// Everything the host renders; `None` is the untouched initial state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectOutput {
    pub transform: Option<CardTransform>,
    pub shine: Option<ShineVisual>,
    pub container: PerspectiveSetting,
}

impl EffectOutput {
    pub fn new(perspective: f32) -> Self {
        Self {
            transform: None,
            shine: None,
            container: PerspectiveSetting { pixels: perspective },
        }
    }

    pub fn with_frame(mut self, frame: Option<TiltFrame>) -> Self {
        self.transform = frame.map(|f| f.card);
        self.shine = frame.map(|f| f.shine);
        self
    }

    pub fn style(&self) -> String {
        self.transform.map(|t| t.to_css()).unwrap_or_default()
    }

    pub fn shine_style(&self) -> String {
        self.shine.map(|s| s.to_css()).unwrap_or_default()
    }

    pub fn container_style(&self) -> String {
        self.container.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_card_css() {
        assert_eq!(
            CardTransform::resting().to_css(),
            "transform: scale(1) translateZ(0px) rotateX(0deg) rotateY(0deg); will-change: transform; \
             transition: transform 0.4s cubic-bezier(0.23, 1, 0.32, 1);"
        );
    }

    #[test]
    fn tracking_card_css() {
        let card = CardTransform {
            scale: Scale::HOVER,
            lift: HOVER_LIFT,
            rotate_x: Angle::new(12.0),
            rotate_y: Angle::new(-6.0),
            transition: Transition::track("transform"),
        };
        assert_eq!(
            card.to_css(),
            "transform: scale(1.05) translateZ(20px) rotateX(12deg) rotateY(-6deg); will-change: transform; \
             transition: transform 0.05s ease-out;"
        );
    }

    #[test]
    fn shine_with_gradient_css() {
        let shine = ShineVisual {
            opacity: Opacity::new(0.5),
            center: Some(Position::new(200.0, 0.0)),
            transition: None,
        };
        assert_eq!(
            shine.to_css(),
            "opacity: 0.5; background: radial-gradient(circle at 200px 0px, rgba(255, 255, 255, 0.8), transparent 40%); \
             will-change: opacity, background;"
        );
    }

    #[test]
    fn hidden_shine_css() {
        assert_eq!(
            ShineVisual::hidden().to_css(),
            "opacity: 0; will-change: opacity; transition: opacity 0.4s cubic-bezier(0.23, 1, 0.32, 1);"
        );
    }

    #[test]
    fn settling_shine_drops_the_gradient() {
        let lit = ShineVisual {
            opacity: Opacity::new(0.5),
            center: Some(Position::new(20.0, 30.0)),
            transition: None,
        };
        assert!(lit.to_css().contains("background:"));
        assert!(!TiltFrame::resting().shine.to_css().contains("background"));
    }

    #[test]
    fn initial_output_is_empty_except_container() {
        let out = EffectOutput::new(1000.0);
        assert_eq!(out.style(), "");
        assert_eq!(out.shine_style(), "");
        assert_eq!(out.container_style(), "perspective: 1000px;");
    }

    #[test]
    fn with_frame_fills_both_styles() {
        let out = EffectOutput::new(800.0).with_frame(Some(TiltFrame::resting()));
        assert!(out.style().starts_with("transform: scale(1)"));
        assert!(out.shine_style().starts_with("opacity: 0;"));
        assert_eq!(out.with_frame(None).style(), "");
    }
}
