//! Carousel tuning: drag threshold, panel scales and the spring profile handed
//! to the host's animation layer.

use crate::error::{CarouselError, Result};

/// Spring easing parameters for the track and panel transitions.
///
/// The carousel does not integrate the spring itself; these values are passed
/// through to whatever animation layer the host uses.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringOptions {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self {
            mass: 3.0,
            stiffness: 400.0,
            damping: 50.0,
        }
    }
}

impl SpringOptions {
    fn validate(&self) -> Result<()> {
        positive("spring.mass", self.mass)?;
        positive("spring.stiffness", self.stiffness)?;
        positive("spring.damping", self.damping)
    }
}

/// Configuration for a [`Carousel`](crate::Carousel).
///
/// All fields are optional in serialized form; missing values fall back to
/// the defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Minimum drag distance in pixels that changes the slide on release
    pub drag_threshold: f64,
    /// Scale of the active panel
    pub active_scale: f64,
    /// Scale of every other panel
    pub inactive_scale: f64,
    /// Spring profile for track and panel transitions
    pub spring: SpringOptions,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 50.0,
            active_scale: 0.95,
            inactive_scale: 0.85,
            spring: SpringOptions::default(),
        }
    }
}

impl CarouselConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML string into a validated `CarouselConfig`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # #[cfg(feature = "toml")]
    /// # {
    /// use swipe_carousel_core::CarouselConfig;
    ///
    /// let config = CarouselConfig::from_toml_str("drag_threshold = 80.0\n").unwrap();
    /// assert_eq!(config.drag_threshold, 80.0);
    /// assert_eq!(config.active_scale, 0.95);
    /// # }
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        positive("drag_threshold", self.drag_threshold)?;
        positive("active_scale", self.active_scale)?;
        positive("inactive_scale", self.inactive_scale)?;
        self.spring.validate()
    }

    /// Scale for a panel given whether it is the active one.
    #[inline]
    pub fn scale(&self, active: bool) -> f64 {
        if active {
            self.active_scale
        } else {
            self.inactive_scale
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CarouselError::InvalidConfig {
            field,
            reason: format!("expected a finite number, got {value}"),
        });
    }
    if value <= 0.0 {
        return Err(CarouselError::InvalidConfig {
            field,
            reason: format!("expected a positive number, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.drag_threshold, 50.0);
        assert_eq!(config.scale(true), 0.95);
        assert_eq!(config.scale(false), 0.85);
        assert_eq!(config.spring.mass, 3.0);
        assert_eq!(config.spring.stiffness, 400.0);
        assert_eq!(config.spring.damping, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let config = CarouselConfig {
            drag_threshold: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CarouselError::InvalidConfig {
                field: "drag_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_nan_scale() {
        let config = CarouselConfig {
            inactive_scale: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidConfig {
                field: "inactive_scale",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_spring() {
        let config = CarouselConfig {
            spring: SpringOptions {
                damping: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config value for `spring.damping`: expected a positive number, got -1"
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_partial() {
        let config = CarouselConfig::from_toml_str(
            "active_scale = 1.0\n\n[spring]\nstiffness = 300.0\n",
        )
        .unwrap();
        assert_eq!(config.active_scale, 1.0);
        assert_eq!(config.inactive_scale, 0.85);
        assert_eq!(config.spring.stiffness, 300.0);
        assert_eq!(config.spring.mass, 3.0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            CarouselConfig::from_toml_str("drag_threshold = -5.0"),
            Err(CarouselError::InvalidConfig { .. })
        ));
        assert!(matches!(
            CarouselConfig::from_toml_str("drag_threshold = \"far\""),
            Err(CarouselError::Toml(_))
        ));
    }
}
