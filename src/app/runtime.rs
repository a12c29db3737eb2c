use crate::app::{Action, AppState};
use crate::audio::{self, CueSink};
use crate::models::Registry;
use crate::persistence::{AutoSave, GlobalConfig, JsonStore};
use crate::tui;
use crate::tui::event::EventHandler;
use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use super::clock::FrameClock;
use super::handler::process_action;

pub struct RunOptions {
    pub store: JsonStore,
    pub config: GlobalConfig,
    /// Share token to import at startup
    pub import: Option<String>,
    pub muted: bool,
}

/// Registry from the state file, or the starter wheels if there is none.
pub fn load_registry(store: &JsonStore) -> Registry {
    let mut registry = Registry::new();
    match store.load() {
        Ok(Some(snapshot)) => registry.restore(snapshot),
        Ok(None) => {}
        Err(e) => {
            warn!(path = %store.path().display(), error = %e, "could not read saved state");
        }
    }
    registry
}

pub async fn run_tui(options: RunOptions) -> Result<()> {
    let RunOptions {
        store,
        config,
        import,
        muted,
    } = options;

    let mut state = AppState::new(load_registry(&store));
    state
        .registry
        .set_new_session_capacity(config.default_members_per_team);
    state.system.tick_cue_chance = config.tick_cue_chance.clamp(0.0, 1.0);

    if let Some(token) = import {
        process_action(&mut state, Action::ImportToken(token))?;
    }

    let cues = audio::open(config.sound_enabled && !muted);

    // Initialize terminal
    let mut terminal = tui::init()?;
    let size = terminal.size()?;
    state.system.terminal_size = (size.width, size.height);

    let mut events = EventHandler::new();

    info!(wheels = state.registry.len(), "teamwheel started");
    let result = run_main_loop(&mut terminal, &mut state, &mut events, cues.as_ref(), &store, &config).await;

    // Restore terminal
    tui::restore()?;

    // Final save regardless of the debounce
    if let Err(e) = store.save(&state.registry.snapshot()) {
        warn!(error = %e, "could not save state on exit");
    }

    result
}

async fn run_main_loop(
    terminal: &mut tui::Terminal,
    state: &mut AppState,
    events: &mut EventHandler,
    cues: &dyn CueSink,
    store: &JsonStore,
    config: &GlobalConfig,
) -> Result<()> {
    let mut clock = FrameClock::new(config.frame_rate, Instant::now());
    let mut autosave = AutoSave::new(config.autosave_delay());

    loop {
        terminal.draw(|frame| tui::ui::draw(frame, state))?;

        let action = events.next(state).await?;
        let is_tick = action == Action::Tick;
        process_action(state, action)?;

        let now = Instant::now();
        if is_tick {
            if state.registry.any_spinning() {
                let frames = clock.advance(now);
                if frames > 0 {
                    process_action(state, Action::Frames(frames))?;
                }
            } else {
                clock.reset(now);
            }
        }

        for cue in state.system.take_cues() {
            cues.play(cue);
        }

        if std::mem::take(&mut state.system.dirty) {
            autosave.trigger(now);
        }
        if autosave.due(now) {
            if let Err(e) = store.save(&state.registry.snapshot()) {
                warn!(error = %e, "autosave failed");
            }
        }

        if state.system.should_quit {
            break;
        }
    }

    Ok(())
}
