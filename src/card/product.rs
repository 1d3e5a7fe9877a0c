//! Product card - the tilting card the effect is built for
//!
//! Structure:
//!   container div (perspective, receives pointer events)
//!     card div (3D transform)
//!       shine div (radial highlight overlay)
//!       content (image, title, copy, button)
//!
//! The current tilt state is mirrored into data-* attributes for DOM queries.

use dioxus::prelude::*;

use crate::effect::EffectConfig;
use crate::hooks::use_card_tilt;
use crate::primitives::{Opacity, Scale};

const PRODUCT_IMAGE: &str = "https://m.media-amazon.com/images/I/71T+O83TLfL.jpg_BO30,255,255,255_UF900,850_SR1910,1000,0,C_QL100_.jpg";

const CONTAINER_STYLE: &str = "width: 320px; padding: 24px; display: flex; justify-content: center;";
const CARD_STYLE: &str = "position: relative; width: 100%; border-radius: 16px; background: #ffffff; box-shadow: 0 20px 40px rgba(0,0,0,0.35); transform-style: preserve-3d; overflow: hidden;";
const SHINE_STYLE: &str = "position: absolute; inset: 0; border-radius: 16px; pointer-events: none; z-index: 2; opacity: 0;";

/// Tuning used by the storefront card
pub fn product_config() -> EffectConfig {
    EffectConfig::default()
        .with_max_rotation(12.0)
        .with_max_shine_opacity(Opacity::new(0.5))
        .with_scale_on_hover(Scale::HOVER)
}

#[component]
pub fn ProductCard(config: EffectConfig) -> Element {
    let mut container = use_signal(|| None::<web_sys::Element>);
    let tilt = use_card_tilt(container, config);

    let output = tilt.output();
    let container_style = format!("{CONTAINER_STYLE} {}", output.container_style());
    let card_style = format!("{CARD_STYLE} {}", output.style());
    let shine_style = format!("{SHINE_STYLE} {}", output.shine_style());

    let motion = tilt.preference().describe();
    let (rotate_x, rotate_y) = output
        .transform
        .map(|t| (t.rotate_x.degrees(), t.rotate_y.degrees()))
        .unwrap_or_default();
    let shine = output.shine.map(|s| s.opacity.value()).unwrap_or_default();
    let rotate_x = format!("{rotate_x:.1}");
    let rotate_y = format!("{rotate_y:.1}");
    let shine = format!("{shine:.2}");

    rsx! {
        div {
            style: "{container_style}",
            "data-motion": "{motion}",
            "data-rotate-x": "{rotate_x}",
            "data-rotate-y": "{rotate_y}",
            "data-shine": "{shine}",
            onmounted: move |event: Event<MountedData>| {
                container.set(event.data().downcast::<web_sys::Element>().cloned());
            },

            div {
                style: "{card_style}",

                div { style: "{shine_style}" }

                div {
                    style: "position: relative; z-index: 1; padding: 20px; display: flex; flex-direction: column; gap: 12px; font-family: system-ui, sans-serif;",
                    img {
                        src: PRODUCT_IMAGE,
                        alt: "Product",
                        style: "width: 100%; height: 200px; object-fit: contain; border-radius: 10px; background: #f3f4f6;",
                    }
                    h3 {
                        style: "margin: 0; color: #111827; font-size: 20px;",
                        "Aura Wireless Headset"
                    }
                    p {
                        style: "margin: 0; color: #4b5563; font-size: 14px; line-height: 1.5;",
                        "Experience crystal-clear audio with our new noise-cancelling wireless headphones."
                    }
                    button {
                        style: "padding: 10px 16px; background: #4f46e5; color: white; border: none; border-radius: 8px; font-size: 15px; font-weight: 600; cursor: pointer;",
                        "Add to Cart"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_tuning() {
        let config = product_config();
        assert_eq!(config.max_rotation, 12.0);
        assert_eq!(config.max_shine_opacity.value(), 0.5);
        assert_eq!(config.scale_on_hover.value(), 1.05);
        assert_eq!(config.perspective, 1000.0);
    }
}
