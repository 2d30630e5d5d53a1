//! Engine configuration.

use std::fmt;

use pinchzoom_animation::AnimationSpec;

pub const DEFAULT_MINIMUM_ZOOM_SCALE: f32 = 1.0;
pub const DEFAULT_MAXIMUM_ZOOM_SCALE: f32 = 8.0;

/// Zoom limits and behavior switches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Resting scale of un-zoomed content.
    pub minimum_zoom_scale: f32,
    /// Upper bound applied while pinching.
    pub maximum_zoom_scale: f32,
    /// Ignore all gestures.
    pub disabled: bool,
    /// Timing of every settle transition.
    pub settle_animation: AnimationSpec,
    /// Height of the hosting window. Defaults to the viewport height.
    pub window_height: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            minimum_zoom_scale: DEFAULT_MINIMUM_ZOOM_SCALE,
            maximum_zoom_scale: DEFAULT_MAXIMUM_ZOOM_SCALE,
            disabled: false,
            settle_animation: AnimationSpec::default(),
            window_height: None,
        }
    }
}

impl ZoomConfig {
    pub fn new(minimum_zoom_scale: f32, maximum_zoom_scale: f32) -> Result<Self, ConfigError> {
        let config = Self {
            minimum_zoom_scale,
            maximum_zoom_scale,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_settle_animation(mut self, spec: AnimationSpec) -> Self {
        self.settle_animation = spec;
        self
    }

    pub fn with_window_height(mut self, height: f32) -> Self {
        self.window_height = Some(height);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let minimum = self.minimum_zoom_scale;
        let maximum = self.maximum_zoom_scale;
        if !minimum.is_finite() {
            return Err(ConfigError::NonFiniteScale {
                name: "minimum_zoom_scale",
                value: minimum,
            });
        }
        if !maximum.is_finite() {
            return Err(ConfigError::NonFiniteScale {
                name: "maximum_zoom_scale",
                value: maximum,
            });
        }
        if minimum <= 0.0 {
            return Err(ConfigError::NonPositiveMinimum { minimum });
        }
        if maximum < minimum {
            return Err(ConfigError::MaximumBelowMinimum { minimum, maximum });
        }
        if let Some(height) = self.window_height {
            if !height.is_finite() || height < 0.0 {
                return Err(ConfigError::InvalidWindowHeight { height });
            }
        }
        Ok(())
    }

    /// Scale a double tap zooms to: half the maximum, never below the minimum.
    pub fn double_tap_scale(&self) -> f32 {
        (self.maximum_zoom_scale / 2.0).max(self.minimum_zoom_scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonFiniteScale { name: &'static str, value: f32 },
    NonPositiveMinimum { minimum: f32 },
    MaximumBelowMinimum { minimum: f32, maximum: f32 },
    InvalidWindowHeight { height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFiniteScale { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            ConfigError::NonPositiveMinimum { minimum } => {
                write!(f, "minimum_zoom_scale must be positive, got {minimum}")
            }
            ConfigError::MaximumBelowMinimum { minimum, maximum } => write!(
                f,
                "maximum_zoom_scale {maximum} is below minimum_zoom_scale {minimum}"
            ),
            ConfigError::InvalidWindowHeight { height } => {
                write!(f, "window height must be finite and non-negative, got {height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
