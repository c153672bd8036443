//! Thread-safe handle to a measurement session.
//!
//! Hosts that deliver per-frame updates on a render thread and taps on a
//! UI thread share one [`SharedSession`]. Every operation runs under a
//! single lock, so the session is always observed between operations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use measure_types::{EngineConfig, MeasurementResult, Result};

use crate::session::MeasurementSession;

/// Cloneable, lock-protected [`MeasurementSession`].
///
/// # Example
///
/// ```
/// use measure_engine::SharedSession;
/// use measure_types::EngineConfig;
/// use nalgebra::Point3;
///
/// let shared = SharedSession::new(EngineConfig::default()).unwrap();
/// let render = shared.clone();
///
/// shared.with(|s| s.commit_corner(Point3::origin()));
/// render.with(|s| s.update_live_preview(Point3::new(0.5, 0.0, 0.0)));
///
/// assert!((shared.result().width - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<MeasurementSession>>,
}

impl SharedSession {
    /// Creates a shared empty session.
    ///
    /// # Errors
    ///
    /// Returns [`measure_types::MeasureError::InvalidConfig`] if the
    /// configuration does not validate.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self::from_session(MeasurementSession::new(config)?))
    }

    /// Wraps an existing session.
    #[must_use]
    pub fn from_session(session: MeasurementSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // Session operations never panic midway, so a poisoned lock still
    // guards a consistent session.
    fn lock(&self) -> MutexGuard<'_, MeasurementSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut MeasurementSession) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the current measurements.
    #[must_use]
    pub fn result(&self) -> MeasurementResult {
        self.lock().result()
    }

    /// Copy of the whole session state.
    #[must_use]
    pub fn snapshot(&self) -> MeasurementSession {
        self.lock().clone()
    }
}
