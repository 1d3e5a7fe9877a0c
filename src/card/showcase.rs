use dioxus::prelude::*;

use crate::Route;
use crate::hooks::use_motion_preference;
use super::product::{ProductCard, product_config};

#[component]
pub fn Showcase() -> Element {
    let preference = use_motion_preference();
    let (badge_color, badge_text) = if preference().is_reduced() {
        ("#f59e0b", "Reduced motion: card stays still")
    } else {
        ("#22c55e", "Move the pointer over the card")
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 24px; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            ProductCard { config: product_config() }

            span {
                style: "color: {badge_color}; font-size: 13px; font-family: monospace;",
                "{badge_text}"
            }

            Link {
                to: Route::Tuner {},
                style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                "Tune the effect \u{2192}"
            }
        }
    }
}
