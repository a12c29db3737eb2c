pub mod editing;
pub mod input;
pub mod spin;
pub mod wheels;

#[cfg(test)]
mod handler_tests;

use crate::app::AppState;
use crate::error::WheelResult;

/// Apply the bookkeeping every engine call needs: success marks the state
/// for saving, failure lands in the status bar.
pub(crate) fn settle<T>(state: &mut AppState, result: WheelResult<T>) -> Option<T> {
    match result {
        Ok(value) => {
            state.mark_dirty();
            state.clamp_selection();
            Some(value)
        }
        Err(e) => {
            state.report(&e);
            None
        }
    }
}
