//! Configuration for a measurement session.
//!
//! One engine covers both the full controller (live height slider, unit
//! buttons) and the simplified line-only flow; the differences are switches
//! on [`EngineConfig`].
//!
//! # Example
//!
//! ```
//! use measure_types::{EngineConfig, Unit, YawMode};
//!
//! let config = EngineConfig::default()
//!     .with_initial_unit(Unit::Centimeter)
//!     .with_default_height(0.05)
//!     .with_yaw_mode(YawMode::FourQuadrant);
//!
//! assert!(config.validate().is_ok());
//! assert!(config.live_height_adjustment());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{MeasureError, Result, Unit};

/// Height given to a freshly completed box, in meters.
pub const DEFAULT_HEIGHT: f64 = 0.02;

/// How the yaw of a segment is derived from its direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YawMode {
    /// `atan(dx / dz)`.
    ///
    /// Range is limited to (-π/2, π/2), so a segment and its reverse get
    /// the same yaw. That is harmless for a symmetric cylinder.
    #[default]
    Reference,

    /// `atan2(dx, dz)`, covering the full circle.
    FourQuadrant,
}

/// Feature switches and defaults for a measurement session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Whether the box height follows an external input after completion.
    live_height_adjustment: bool,
    /// Whether the display unit may change during a session.
    unit_switching_enabled: bool,
    /// Height used for a freshly completed box, in meters.
    default_height: f64,
    /// Display unit at session start.
    initial_unit: Unit,
    /// Yaw computation for segments.
    yaw_mode: YawMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Creates a configuration with every feature enabled.
    ///
    /// Defaults:
    /// - Live height adjustment: on
    /// - Unit switching: on
    /// - Default height: 0.02 m
    /// - Initial unit: inches
    /// - Yaw: [`YawMode::Reference`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live_height_adjustment: true,
            unit_switching_enabled: true,
            default_height: DEFAULT_HEIGHT,
            initial_unit: Unit::Inch,
            yaw_mode: YawMode::Reference,
        }
    }

    /// Configuration for the simplified flow: fixed height, fixed unit.
    #[must_use]
    pub const fn line_only() -> Self {
        Self::new()
            .with_live_height_adjustment(false)
            .with_unit_switching(false)
    }

    /// Sets whether the height follows an external input.
    #[must_use]
    pub const fn with_live_height_adjustment(mut self, enable: bool) -> Self {
        self.live_height_adjustment = enable;
        self
    }

    /// Sets whether the display unit may be changed.
    #[must_use]
    pub const fn with_unit_switching(mut self, enable: bool) -> Self {
        self.unit_switching_enabled = enable;
        self
    }

    /// Sets the default box height in meters.
    #[must_use]
    pub const fn with_default_height(mut self, height: f64) -> Self {
        self.default_height = height;
        self
    }

    /// Sets the display unit at session start.
    #[must_use]
    pub const fn with_initial_unit(mut self, unit: Unit) -> Self {
        self.initial_unit = unit;
        self
    }

    /// Sets the yaw computation.
    #[must_use]
    pub const fn with_yaw_mode(mut self, mode: YawMode) -> Self {
        self.yaw_mode = mode;
        self
    }

    /// Returns whether live height adjustment is enabled.
    #[must_use]
    pub const fn live_height_adjustment(&self) -> bool {
        self.live_height_adjustment
    }

    /// Returns whether unit switching is enabled.
    #[must_use]
    pub const fn unit_switching_enabled(&self) -> bool {
        self.unit_switching_enabled
    }

    /// Returns the default box height in meters.
    #[must_use]
    pub const fn default_height(&self) -> f64 {
        self.default_height
    }

    /// Returns the initial display unit.
    #[must_use]
    pub const fn initial_unit(&self) -> Unit {
        self.initial_unit
    }

    /// Returns the yaw computation.
    #[must_use]
    pub const fn yaw_mode(&self) -> YawMode {
        self.yaw_mode
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidConfig`] if the default height is
    /// negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.default_height.is_finite() {
            return Err(MeasureError::invalid_config(format!(
                "default height must be finite, got {}",
                self.default_height
            )));
        }
        if self.default_height < 0.0 {
            return Err(MeasureError::invalid_config(format!(
                "default height must be non-negative, got {}",
                self.default_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert!(config.live_height_adjustment());
        assert!(config.unit_switching_enabled());
        assert_eq!(config.default_height(), DEFAULT_HEIGHT);
        assert_eq!(config.initial_unit(), Unit::Inch);
        assert_eq!(config.yaw_mode(), YawMode::Reference);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn line_only_disables_switches() {
        let config = EngineConfig::line_only();
        assert!(!config.live_height_adjustment());
        assert!(!config.unit_switching_enabled());
        assert_eq!(config.default_height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn builder_chain() {
        let config = EngineConfig::new()
            .with_default_height(0.1)
            .with_initial_unit(Unit::Meter)
            .with_yaw_mode(YawMode::FourQuadrant)
            .with_unit_switching(false);
        assert_eq!(config.default_height(), 0.1);
        assert_eq!(config.initial_unit(), Unit::Meter);
        assert_eq!(config.yaw_mode(), YawMode::FourQuadrant);
        assert!(!config.unit_switching_enabled());
        assert!(config.live_height_adjustment());
    }

    #[test]
    fn validate_rejects_bad_height() {
        let negative = EngineConfig::new().with_default_height(-0.01);
        assert!(matches!(
            negative.validate(),
            Err(MeasureError::InvalidConfig(_))
        ));

        let nan = EngineConfig::new().with_default_height(f64::NAN);
        assert!(nan.validate().is_err());

        let inf = EngineConfig::new().with_default_height(f64::INFINITY);
        assert!(inf.validate().is_err());

        let zero = EngineConfig::new().with_default_height(0.0);
        assert!(zero.validate().is_ok());
    }
}
