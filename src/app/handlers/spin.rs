use crate::app::AppState;
use crate::audio::Cue;
use crate::wheel::SpinOutcome;
use rand::Rng;
use tracing::debug;

use super::settle;

pub fn handle_spin(state: &mut AppState) {
    let AppState {
        registry, system, ..
    } = &mut *state;
    let result = registry
        .active_unlocked_mut()
        .and_then(|session| session.begin_spin(&mut system.rng));

    if settle(state, result).is_some() {
        state.ui.result = None;
        state.ui.notice = None;
        state.system.cues.push(Cue::SpinStart);
    }
}

pub fn handle_undo(state: &mut AppState) {
    let result = state
        .registry
        .active_unlocked_mut()
        .and_then(|session| session.undo());

    if settle(state, result).is_some() {
        state.ui.result = None;
        state.notify("Undone");
    }
}

/// Run `frames` physics frames across every spinning wheel.
pub fn advance_frames(state: &mut AppState, frames: u32) {
    for _ in 0..frames {
        let outcomes = state.registry.tick_all();
        if outcomes.is_empty() {
            return;
        }

        let mut rolling = false;
        for (session_id, outcome) in outcomes {
            if outcome.is_finished() {
                state.mark_dirty();
            }
            match outcome {
                SpinOutcome::Idle => {}
                SpinOutcome::Rolling => rolling = true,
                SpinOutcome::Landed(event) => {
                    debug!(
                        session = session_id,
                        team_index = event.team_index,
                        rotation = event.rotation,
                        "spin landed"
                    );
                    state.system.cues.push(Cue::Result);
                    if session_id == state.active_id() {
                        state.notify(format!("{} joins {}", event.name, event.team));
                        state.ui.result = Some(event);
                        state.clamp_selection();
                    }
                }
                SpinOutcome::Discarded(e) => {
                    debug!(session = session_id, error = %e, "spin discarded");
                    if session_id == state.active_id() {
                        state.report(&e);
                    } else {
                        state.notify(format!("Wheel {}: {}", session_id, e));
                    }
                }
            }
        }

        if rolling {
            let chance = state.system.tick_cue_chance;
            if state.system.rng.gen_bool(chance) {
                state.system.cues.push(Cue::Tick);
            }
        }
    }
}
