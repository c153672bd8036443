//! Corner-placement state machine.
//!
//! A [`MeasurementSession`] owns the committed corners and the computed
//! dimensions for one measurement attempt. All mutation goes through its
//! methods; operations issued in the wrong state are ignored and report
//! that through their return value.

use tracing::{debug, info, trace};

use measure_types::{
    EngineConfig, MeasurementResult, Point3, Result, SegmentDescriptor, Unit, VolumeDescriptor,
};

use crate::builder::{build_segment_with, build_volume};
use crate::corners::CornerSet;
use crate::geometry::distance;
use crate::hit_test::HitTest;

/// Progress of a measurement, by number of committed corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No corner committed.
    #[default]
    Empty,
    /// First corner committed; the live preview measures the width.
    OneCorner,
    /// Two corners committed; the live preview measures the length.
    TwoCorners,
    /// All three corners committed.
    Complete,
}

impl SessionState {
    /// State for a given number of committed corners.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::OneCorner,
            2 => Self::TwoCorners,
            _ => Self::Complete,
        }
    }

    /// Returns true while a live preview is meaningful.
    #[must_use]
    pub const fn accepts_preview(self) -> bool {
        matches!(self, Self::OneCorner | Self::TwoCorners)
    }
}

/// One measurement attempt: up to three corners and the derived box.
///
/// # Example
///
/// ```
/// use measure_engine::{MeasurementSession, SessionState};
/// use measure_types::{EngineConfig, Unit};
/// use nalgebra::Point3;
///
/// let mut session = MeasurementSession::new(EngineConfig::default()).unwrap();
/// session.commit_corner(Point3::new(0.0, 0.0, 0.0));
/// session.commit_corner(Point3::new(1.0, 0.0, 0.0));
/// session.commit_corner(Point3::new(1.0, 0.0, 2.0));
///
/// assert_eq!(session.state(), SessionState::Complete);
/// assert!((session.result().width - 1.0).abs() < 1e-12);
/// assert!((session.result().length - 2.0).abs() < 1e-12);
///
/// session.set_height(0.5);
/// session.set_unit(Unit::Meter);
/// assert_eq!(
///     session.display_text().as_deref(),
///     Some("Width = 1.0 m\nLength = 2.0 m\nHeight = 0.5 m")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    config: EngineConfig,
    corners: CornerSet,
    result: MeasurementResult,
    unit: Unit,
    /// Value of the external height input, in meters.
    height_input: f64,
    /// Built once on completion; only its height changes afterwards.
    volume: Option<VolumeDescriptor>,
    preview: Option<SegmentDescriptor>,
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}

impl MeasurementSession {
    /// Creates an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`measure_types::MeasureError::InvalidConfig`] if the
    /// configuration does not validate.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        Self {
            unit: config.initial_unit(),
            height_input: config.default_height(),
            config,
            corners: CornerSet::new(),
            result: MeasurementResult::zero(),
            volume: None,
            preview: None,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState::from_count(self.corners.len())
    }

    /// Returns true once three corners are committed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.corners.is_full()
    }

    /// Committed corners.
    #[must_use]
    pub const fn corners(&self) -> &CornerSet {
        &self.corners
    }

    /// Current measurements in meters.
    #[must_use]
    pub const fn result(&self) -> MeasurementResult {
        self.result
    }

    /// Active display unit.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Current value of the height input, in meters.
    #[must_use]
    pub const fn height_input(&self) -> f64 {
        self.height_input
    }

    /// Returns true when the host should show the height input.
    #[must_use]
    pub fn height_input_visible(&self) -> bool {
        self.is_complete() && self.config.live_height_adjustment()
    }

    /// Commits a corner at `point`.
    ///
    /// Returns the new state, or `None` if the session was already complete.
    /// Committing the third corner fixes the width and length, applies the
    /// height input, and builds the box.
    pub fn commit_corner(&mut self, point: Point3<f64>) -> Option<SessionState> {
        let Some(index) = self.corners.push(point) else {
            debug!("Ignoring corner commit on a complete measurement");
            return None;
        };
        self.preview = None;

        debug!(
            corner = index,
            x = point.x,
            y = point.y,
            z = point.z,
            "Committed corner"
        );

        match (self.corners.get(0), self.corners.get(1), self.corners.triple()) {
            (_, _, Some(triple)) => self.complete(&triple),
            (Some(p0), Some(p1), None) => self.result.width = distance(p0, p1),
            _ => {}
        }

        Some(self.state())
    }

    fn complete(&mut self, triple: &[Point3<f64>; 3]) {
        let height = if self.config.live_height_adjustment() {
            self.height_input.max(0.0)
        } else {
            self.config.default_height()
        };
        let volume = build_volume(triple, height);

        self.result = MeasurementResult::new(volume.width, volume.length, height);
        self.volume = Some(volume);

        info!(
            width = volume.width,
            length = volume.length,
            height,
            "Measurement complete"
        );
    }

    /// Updates the live preview towards an uncommitted `candidate` point.
    ///
    /// The preview runs from the last committed corner to `candidate`. With
    /// one corner committed it updates the width, with two the length.
    /// Returns `None` when there is no corner to anchor on or the
    /// measurement is complete.
    pub fn update_live_preview(&mut self, candidate: Point3<f64>) -> Option<SegmentDescriptor> {
        let state = self.state();
        if !state.accepts_preview() {
            return None;
        }
        let anchor = self.corners.last()?;
        let segment = build_segment_with(anchor, candidate, self.config.yaw_mode());

        match state {
            SessionState::OneCorner => self.result.width = segment.length,
            SessionState::TwoCorners => self.result.length = segment.length,
            SessionState::Empty | SessionState::Complete => {}
        }
        trace!(?state, distance = segment.length, "Live preview updated");

        self.preview = Some(segment);
        Some(segment)
    }

    /// Most recent live preview segment, cleared on commit and reset.
    #[must_use]
    pub const fn live_preview(&self) -> Option<SegmentDescriptor> {
        self.preview
    }

    /// Sets the box height from the height input.
    ///
    /// Negative and NaN values clamp to zero. Width and length are not
    /// touched. Returns the applied height, or `None` if the measurement is
    /// not complete or live height adjustment is disabled.
    pub fn set_height(&mut self, value: f64) -> Option<f64> {
        if !self.height_input_visible() {
            debug!(value, "Ignoring height input");
            return None;
        }
        let height = value.max(0.0);
        self.height_input = height;
        self.result.height = height;
        if let Some(volume) = self.volume.as_mut() {
            volume.height = height;
        }
        Some(height)
    }

    /// Switches the display unit.
    ///
    /// Stored measurements are unchanged; only [`display_text`](Self::display_text)
    /// is affected. Returns `false` if unit switching is disabled.
    pub fn set_unit(&mut self, unit: Unit) -> bool {
        if !self.config.unit_switching_enabled() {
            debug!(%unit, "Ignoring unit change");
            return false;
        }
        self.unit = unit;
        true
    }

    /// Readout of the current measurements in the active unit.
    ///
    /// `None` until a width or length has been measured.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        self.result
            .has_footprint()
            .then(|| self.result.summary(self.unit))
    }

    /// Box for the completed footprint, `None` until complete.
    #[must_use]
    pub const fn current_volume_descriptor(&self) -> Option<VolumeDescriptor> {
        self.volume
    }

    /// Segments along the committed edges, P0→P1 then P1→P2.
    #[must_use]
    pub fn edge_segments(&self) -> Vec<SegmentDescriptor> {
        let mode = self.config.yaw_mode();
        self.corners
            .edges()
            .map(|(a, b)| build_segment_with(a, b, mode))
            .collect()
    }

    /// Diagonal segment from the third corner back to the first.
    #[must_use]
    pub fn diagonal_segment(&self) -> Option<SegmentDescriptor> {
        let [p0, _, p2] = self.corners.triple()?;
        Some(build_segment_with(p2, p0, self.config.yaw_mode()))
    }

    /// Commits a corner at the collaborator's current hit.
    ///
    /// The hit test is skipped entirely once the measurement is complete.
    /// A miss leaves the session unchanged and returns `None`.
    pub fn tap(&mut self, source: &impl HitTest) -> Option<SessionState> {
        if self.is_complete() {
            debug!("Ignoring tap on a complete measurement");
            return None;
        }
        let point = source.hit_test()?;
        self.commit_corner(point)
    }

    /// Refreshes the live preview from the collaborator's current hit.
    ///
    /// The hit test is skipped when there is nothing to preview.
    pub fn frame(&mut self, source: &impl HitTest) -> Option<SegmentDescriptor> {
        if !self.state().accepts_preview() {
            return None;
        }
        let candidate = source.hit_test()?;
        self.update_live_preview(candidate)
    }

    /// Discards the current measurement and returns to [`SessionState::Empty`].
    pub fn reset(&mut self) {
        self.corners.clear();
        self.result = MeasurementResult::zero();
        self.height_input = self.config.default_height();
        self.volume = None;
        self.preview = None;
        info!("Measurement reset");
    }
}
