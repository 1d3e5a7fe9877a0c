//! Effect configuration - host options resolved into a validated config
//!
//! Hosts hand over a loose option bag (every key optional, possibly JSON
//! pasted into the tuner). `EffectOptions::resolve` fills in defaults and
//! clamps anything unusable, so an `EffectConfig` is always safe to use.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::primitives::{Opacity, Scale};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tilt options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolved, immutable-per-activation effect parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectConfig {
    /// Degrees of tilt at the element edge
    pub max_rotation: f32,
    pub max_shine_opacity: Opacity,
    pub scale_on_hover: Scale,
    /// CSS perspective distance in pixels
    pub perspective: f32,
}

impl EffectConfig {
    pub const DEFAULT_MAX_ROTATION: f32 = 10.0;
    pub const DEFAULT_MAX_SHINE_OPACITY: Opacity = Opacity::new(0.6);
    pub const DEFAULT_SCALE_ON_HOVER: Scale = Scale::HOVER;
    pub const DEFAULT_PERSPECTIVE: f32 = 1000.0;

    /// Tilt beyond a quarter turn shows the back of the card
    pub const ROTATION_LIMIT: f32 = 90.0;

    pub fn with_max_rotation(mut self, degrees: f32) -> Self {
        self.max_rotation = degrees;
        self
    }

    pub fn with_max_shine_opacity(mut self, opacity: Opacity) -> Self {
        self.max_shine_opacity = opacity;
        self
    }

    pub fn with_scale_on_hover(mut self, scale: Scale) -> Self {
        self.scale_on_hover = scale;
        self
    }

    pub fn with_perspective(mut self, pixels: f32) -> Self {
        self.perspective = pixels;
        self
    }

    /// Back to the option-bag form, for export
    pub fn to_options(&self) -> EffectOptions {
        EffectOptions {
            max_rotation: Some(self.max_rotation),
            max_shine_opacity: Some(self.max_shine_opacity.value()),
            scale_on_hover: Some(self.scale_on_hover.value()),
            perspective: Some(self.perspective),
        }
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            max_rotation: Self::DEFAULT_MAX_ROTATION,
            max_shine_opacity: Self::DEFAULT_MAX_SHINE_OPACITY,
            scale_on_hover: Self::DEFAULT_SCALE_ON_HOVER,
            perspective: Self::DEFAULT_PERSPECTIVE,
        }
    }
}

/// Host-facing option bag; absent keys take the defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shine_opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_on_hover: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<f32>,
}

impl EffectOptions {
    /// Parse `{"maxRotation": 12, ...}`; unknown keys are ignored
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fill defaults and clamp out-of-range values
    pub fn resolve(&self) -> EffectConfig {
        let defaults = EffectConfig::default();

        let max_rotation = match self.max_rotation {
            None => defaults.max_rotation,
            Some(v) if v.is_finite() && (0.0..=EffectConfig::ROTATION_LIMIT).contains(&v) => v,
            Some(v) if v.is_finite() => {
                let clamped = v.clamp(0.0, EffectConfig::ROTATION_LIMIT);
                warn!(value = v, clamped, "maxRotation out of range");
                clamped
            }
            Some(v) => {
                warn!(value = v, "maxRotation is not a number, using default");
                defaults.max_rotation
            }
        };

        let max_shine_opacity = match self.max_shine_opacity {
            None => defaults.max_shine_opacity,
            Some(v) => {
                if !Opacity::contains(v) {
                    warn!(value = v, "maxShineOpacity outside [0, 1]");
                }
                Opacity::clamped(v)
            }
        };

        let scale_on_hover = match self.scale_on_hover {
            None => defaults.scale_on_hover,
            Some(v) => {
                if !Scale::contains(v) {
                    warn!(value = v, "scaleOnHover out of range");
                }
                Scale::clamped(v)
            }
        };

        let perspective = match self.perspective {
            None => defaults.perspective,
            Some(v) if v.is_finite() && v > 0.0 => v,
            Some(v) => {
                warn!(value = v, "perspective must be a positive length, using default");
                defaults.perspective
            }
        };

        EffectConfig { max_rotation, max_shine_opacity, scale_on_hover, perspective }
    }
}

impl From<EffectOptions> for EffectConfig {
    fn from(options: EffectOptions) -> Self {
        options.resolve()
    }
}
