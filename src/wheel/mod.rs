//! Spin physics, slice resolution and team selection.
//!
//! Everything here is pure: the session model in `crate::models` owns the
//! state and calls into these functions.

mod assign;
mod physics;
mod resolver;

pub use assign::{first_open_team, has_open_team};
pub use physics::{normalize, Spin, Step};
pub use resolver::{resolve, slice_angle, POINTER_ANGLE};

use crate::error::WheelError;
use chrono::{DateTime, Utc};

/// A committed pick.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinEvent {
    pub name: String,
    pub team: String,
    pub team_index: usize,
    pub rotation: f64,
    pub at: DateTime<Utc>,
}

/// What one frame did to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinOutcome {
    /// Not spinning; nothing happened.
    Idle,
    Rolling,
    Landed(SpinEvent),
    /// The wheel stopped but the pick could not be committed.
    Discarded(WheelError),
}

impl SpinOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, SpinOutcome::Landed(_) | SpinOutcome::Discarded(_))
    }
}
