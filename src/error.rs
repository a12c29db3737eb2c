//! Errors raised by the wheel engine.
//!
//! The `Display` text of every variant is what the status bar shows, so keep
//! messages short and user-facing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("The wheel is already spinning")]
    AlreadySpinning,

    #[error("This wheel is locked")]
    SessionLocked,

    #[error("All wheels are locked by the admin")]
    RegistryLocked,

    #[error("No names left in the pool")]
    EmptyPool,

    #[error("There are no teams yet")]
    NoTeams,

    #[error("All teams are full")]
    AllTeamsFull,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("At least one wheel must remain")]
    LastSession,

    #[error("Wheel {0} is spinning")]
    SessionBusy(u64),

    #[error("Wheel {0} not found")]
    SessionNotFound(u64),

    #[error("Index {index} is out of range (len {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error(
        "Members per team must be between 1 and {max} (got {0})",
        max = crate::models::MAX_MEMBERS_PER_TEAM
    )]
    InvalidCapacity(usize),

    #[error("Name cannot be empty")]
    EmptyName,
}

pub type WheelResult<T> = Result<T, WheelError>;
