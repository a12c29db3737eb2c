use crate::audio::Cue;
use crate::persistence::GlobalConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SystemState {
    /// Terminal size
    pub terminal_size: (u16, u16),
    /// Should quit flag
    pub should_quit: bool,
    /// Set by every mutation; the runtime turns it into an autosave trigger
    pub dirty: bool,
    /// Cues queued by the handler, drained by the runtime
    pub cues: Vec<Cue>,
    /// Chance per frame of a tick cue while any wheel spins
    pub tick_cue_chance: f64,
    pub rng: StdRng,
}

impl SystemState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            terminal_size: (80, 24),
            should_quit: false,
            dirty: false,
            cues: Vec::new(),
            tick_cue_chance: GlobalConfig::default().tick_cue_chance,
            rng,
        }
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}
