//! Measurement engine for tap-to-place AR box measurement.
//!
//! A tracking host detects a horizontal surface and reports hit positions
//! on it. The user commits three corners; this crate turns them into a
//! width, a length, and an adjustable height, and describes the segments
//! and box the host should draw.
//!
//! # Components
//!
//! - **Geometry**: [`distance`], [`midpoint`], [`direction`], [`yaw_angle`]
//! - **Descriptors**: [`build_segment`], [`build_volume`]
//! - **Session**: [`MeasurementSession`] state machine over a [`CornerSet`]
//! - **Host boundary**: [`HitTest`] for hit sources, [`SharedSession`] for
//!   hosts that call in from more than one thread
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero renderer dependencies**. The host
//! owns the camera, plane detection, and drawing.
//!
//! # Example
//!
//! ```
//! use measure_engine::{MeasurementSession, SessionState};
//! use measure_types::{EngineConfig, Unit};
//! use nalgebra::Point3;
//!
//! let mut session = MeasurementSession::new(EngineConfig::default()).unwrap();
//!
//! // The host reports a hit every frame and on every tap.
//! session.tap(&Some(Point3::new(0.0, 0.0, 0.0)));
//! session.frame(&Some(Point3::new(0.8, 0.0, 0.0)));
//! session.tap(&Some(Point3::new(1.0, 0.0, 0.0)));
//! session.tap(&Some(Point3::new(1.0, 0.0, 2.0)));
//!
//! assert_eq!(session.state(), SessionState::Complete);
//! let diagonal = session.diagonal_segment().unwrap();
//! assert_eq!(diagonal.from, Point3::new(1.0, 0.0, 2.0));
//! assert_eq!(diagonal.to, Point3::new(0.0, 0.0, 0.0));
//!
//! session.set_unit(Unit::Centimeter);
//! assert!(session.display_text().unwrap().starts_with("Width = 100.0 cm"));
//! ```
//!
//! # Logging
//!
//! Uses `tracing`: completions and resets at `info`, commits and ignored
//! operations at `debug`, live previews at `trace`. No subscriber is
//! installed.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod corners;
mod geometry;
mod session;
mod shared;

pub use builder::{build_segment, build_segment_with, build_volume};
pub use corners::{CornerSet, MAX_CORNERS};
pub use geometry::{
    SEGMENT_PITCH, direction, distance, midpoint, segment_yaw, yaw_angle, yaw_angle_four_quadrant,
};
pub use hit_test::HitTest;
pub use session::{MeasurementSession, SessionState};
pub use shared::SharedSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        CornerSet, HitTest, MeasurementSession, SessionState, SharedSession, build_segment,
        build_volume, distance, midpoint,
    };
    pub use measure_types::{
        EngineConfig, MeasurementResult, Point3, SegmentDescriptor, Unit, VolumeDescriptor,
        YawMode,
    };
}
