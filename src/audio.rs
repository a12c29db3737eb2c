use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Sound effects the app can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    SpinStart,
    Tick,
    Result,
}

impl Cue {
    /// Frequency (Hz), length and volume of the tone.
    fn tone(self) -> (f32, Duration, f32) {
        match self {
            Cue::SpinStart => (440.0, Duration::from_millis(120), 0.20),
            Cue::Tick => (1200.0, Duration::from_millis(15), 0.08),
            Cue::Result => (660.0, Duration::from_millis(300), 0.25),
        }
    }
}

/// Somewhere to send cues. Playing is fire-and-forget.
pub trait CueSink {
    fn play(&self, cue: Cue);
}

/// Used when sound is muted or no output device is available.
#[derive(Debug, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn play(&self, _cue: Cue) {}
}

/// Plays cues as short sine tones on the default output device.
pub struct AudioPlayer {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl AudioPlayer {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }
}

impl CueSink for AudioPlayer {
    fn play(&self, cue: Cue) {
        let (freq, duration, volume) = cue.tone();
        let source = SineWave::new(freq).take_duration(duration).amplify(volume);
        if let Err(e) = self.stream_handle.play_raw(source) {
            debug!(?cue, error = %e, "cue dropped");
        }
    }
}

/// Real player when `enabled` and a device opens, silence otherwise.
pub fn open(enabled: bool) -> Box<dyn CueSink> {
    if !enabled {
        return Box::new(Silent);
    }
    match AudioPlayer::new() {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!(error = %e, "no audio output, cues disabled");
            Box::new(Silent)
        }
    }
}
