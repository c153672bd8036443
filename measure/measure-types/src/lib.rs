//! Data types for augmented-reality surface measurement.
//!
//! This crate provides the value types exchanged between a tracking/rendering
//! host and the measurement engine in `measure-engine`:
//!
//! - [`Unit`] - Display unit for measurements (storage is always meters)
//! - [`MeasurementResult`] - Width, length, and height of the measured box
//! - [`SegmentDescriptor`] - A renderable line segment laid flat on the surface
//! - [`VolumeDescriptor`] - A renderable box sitting on the measured footprint
//! - [`EngineConfig`] - Feature switches for the measurement session
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero renderer dependencies**. It can be used in:
//! - Mobile AR hosts
//! - Desktop viewers
//! - Headless replay and test harnesses
//!
//! # Example
//!
//! ```
//! use measure_types::{MeasurementResult, Unit, format_measurement};
//!
//! assert_eq!(format_measurement(1.0, Unit::Inch), "39.4 in");
//!
//! let result = MeasurementResult::new(1.0, 2.0, 0.5);
//! assert!(result.summary(Unit::Meter).starts_with("Width = 1.0 m"));
//! ```
//!
//! # Coordinate System
//!
//! Points come straight from the tracking session's world space, in meters.
//! The detected surface is horizontal, so segments lie in the XZ plane and
//! Y is up.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod descriptor;
mod error;
mod result;
mod unit;

pub use config::{DEFAULT_HEIGHT, EngineConfig, YawMode};
pub use descriptor::{SegmentDescriptor, VolumeDescriptor};
pub use error::{MeasureError, Result};
pub use result::MeasurementResult;
pub use unit::{Unit, format_measurement, to_display_unit};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
