mod handlers;

use crate::app::{Action, AppState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// Roughly one 60 Hz frame, so spins animate smoothly when idle.
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Internal event type for terminal events
enum TerminalEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    terminal_rx: mpsc::UnboundedReceiver<TerminalEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (terminal_tx, terminal_rx) = mpsc::unbounded_channel();

        // Spawn dedicated thread for terminal events
        std::thread::spawn(move || loop {
            let event = if event::poll(POLL_TIMEOUT).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                        TerminalEvent::Key(key)
                    }
                    Ok(Event::Resize(w, h)) => TerminalEvent::Resize(w, h),
                    Ok(Event::Paste(data)) => TerminalEvent::Paste(data),
                    _ => TerminalEvent::Tick,
                }
            } else {
                TerminalEvent::Tick
            };

            if terminal_tx.send(event).is_err() {
                break; // Channel closed, exit thread
            }
        });

        Self { terminal_rx }
    }

    pub async fn next(&mut self, state: &AppState) -> Result<Action> {
        match self.terminal_rx.recv().await {
            Some(TerminalEvent::Key(key)) => Ok(Self::handle_key_event(key, state)),
            Some(TerminalEvent::Paste(data)) => Ok(Action::Paste(data)),
            Some(TerminalEvent::Resize(w, h)) => Ok(Action::Resize(w, h)),
            Some(TerminalEvent::Tick) => Ok(Action::Tick),
            // The input thread is gone; nothing more can arrive
            None => Ok(Action::Quit),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
