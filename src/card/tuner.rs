//! Tuner - live sliders over the effect config, with JSON export/import
//!
//! Every slider change hands the card a new config, which rebinds the
//! effect. The JSON box round-trips `EffectOptions` so a tuning can be
//! copied into another host.

use dioxus::prelude::*;
use tracing::warn;

use crate::Route;
use crate::effect::{EffectConfig, EffectOptions};
use crate::primitives::{Opacity, Scale};
use super::product::{ProductCard, product_config};

const PANEL_STYLE: &str = "width: 360px; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 20px; display: flex; flex-direction: column; gap: 14px;";
const MONO_LABEL: &str = "color: #9ca3af; font-size: 13px; font-family: monospace;";

#[component]
fn TuneSlider(
    label: &'static str,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    on_change: EventHandler<f32>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "{MONO_LABEL}",
                "{label}: {value}"
            }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                style: "width: 100%; accent-color: #3b82f6;",
                oninput: move |e: Event<FormData>| {
                    if let Ok(v) = e.value().parse::<f32>() {
                        on_change(v);
                    }
                },
            }
        }
    }
}

/// Parse pasted options; errors are shown next to the box
fn import_options(text: &str) -> Result<EffectConfig, String> {
    EffectOptions::from_json(text)
        .map(|options| options.resolve())
        .map_err(|err| {
            warn!(%err, "rejected pasted tilt options");
            err.to_string()
        })
}

#[component]
pub fn Tuner() -> Element {
    let mut config = use_signal(product_config);
    let mut draft = use_signal(String::new);
    let mut import_error = use_signal(|| None::<String>);

    let current = config();
    let exported = current
        .to_options()
        .to_json()
        .unwrap_or_else(|err| err.to_string());

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 20px; gap: 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center;",
                Link {
                    to: Route::Showcase {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Card"
                }
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "Tune the tilt"
                }
            }

            div {
                style: "display: flex; gap: 32px; align-items: flex-start; flex-wrap: wrap; justify-content: center;",

                ProductCard { config: current }

                div {
                    style: "{PANEL_STYLE}",

                    TuneSlider {
                        label: "max rotation (deg)",
                        min: 0.0,
                        max: 45.0,
                        step: 1.0,
                        value: current.max_rotation,
                        on_change: move |v: f32| config.set(current.with_max_rotation(v)),
                    }
                    TuneSlider {
                        label: "max shine opacity",
                        min: 0.0,
                        max: 1.0,
                        step: 0.05,
                        value: current.max_shine_opacity.value(),
                        on_change: move |v: f32| config.set(current.with_max_shine_opacity(Opacity::clamped(v))),
                    }
                    TuneSlider {
                        label: "scale on hover",
                        min: 1.0,
                        max: 1.2,
                        step: 0.01,
                        value: current.scale_on_hover.value(),
                        on_change: move |v: f32| config.set(current.with_scale_on_hover(Scale::clamped(v))),
                    }
                    TuneSlider {
                        label: "perspective (px)",
                        min: 200.0,
                        max: 2000.0,
                        step: 50.0,
                        value: current.perspective,
                        on_change: move |v: f32| config.set(current.with_perspective(v)),
                    }

                    button {
                        style: "padding: 8px 16px; background: #374151; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 13px;",
                        onclick: move |_| config.set(EffectConfig::default()),
                        "Reset to defaults"
                    }

                    label { style: "{MONO_LABEL}", "current options" }
                    pre {
                        style: "margin: 0; padding: 10px; background: #111827; color: #e5e7eb; border-radius: 6px; font-size: 12px;",
                        "{exported}"
                    }

                    label { style: "{MONO_LABEL}", "paste options JSON" }
                    textarea {
                        rows: "5",
                        value: "{draft}",
                        style: "background: #111827; color: #e5e7eb; border: 1px solid #2a2a4a; border-radius: 6px; padding: 8px; font-family: monospace; font-size: 12px;",
                        oninput: move |e: Event<FormData>| draft.set(e.value()),
                    }
                    button {
                        style: "padding: 8px 16px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 13px;",
                        onclick: move |_| {
                            match import_options(&draft.read()) {
                                Ok(imported) => {
                                    config.set(imported);
                                    import_error.set(None);
                                }
                                Err(message) => import_error.set(Some(message)),
                            }
                        },
                        "Apply"
                    }
                    if let Some(message) = import_error() {
                        span {
                            style: "color: #ef4444; font-size: 12px; font-family: monospace;",
                            "{message}"
                        }
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
    fn import_accepts_partial_options() {
        let config = import_options(r#"{"perspective": 600}"#).unwrap();
        assert_eq!(config, EffectConfig::default().with_perspective(600.0));
    }

    #[test]
    fn import_reports_bad_json() {
        let message = import_options("not json").unwrap_err();
        assert!(message.starts_with("invalid tilt options"));
    }
}
