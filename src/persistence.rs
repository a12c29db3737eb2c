use crate::models::{RegistrySnapshot, DEFAULT_MEMBERS_PER_TEAM};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const APP_DIR: &str = "teamwheel";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Chance per frame of a tick cue while a wheel spins
    #[serde(default = "default_tick_cue_chance")]
    pub tick_cue_chance: f64,
    #[serde(default = "default_members_per_team")]
    pub default_members_per_team: usize,
}

fn default_sound_enabled() -> bool {
    true
}

fn default_autosave_delay_ms() -> u64 {
    2000
}

fn default_frame_rate() -> u32 {
    60
}

fn default_tick_cue_chance() -> f64 {
    0.3
}

fn default_members_per_team() -> usize {
    DEFAULT_MEMBERS_PER_TEAM
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            sound_enabled: default_sound_enabled(),
            autosave_delay_ms: default_autosave_delay_ms(),
            frame_rate: default_frame_rate(),
            tick_cue_chance: default_tick_cue_chance(),
            default_members_per_team: default_members_per_team(),
        }
    }
}

impl GlobalConfig {
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
        .join(APP_DIR);

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn default_state_path() -> Result<PathBuf> {
    Ok(app_config_dir()?.join("state.json"))
}

/// Load the global config. A missing file gives the defaults; a malformed
/// one is logged and also gives the defaults.
pub fn load_config() -> Result<GlobalConfig> {
    load_config_from(&app_config_dir()?.join("config.json"))
}

pub fn load_config_from(path: &Path) -> Result<GlobalConfig> {
    if !path.exists() {
        return Ok(GlobalConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    match serde_json::from_str(&contents) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            Ok(GlobalConfig::default())
        }
    }
}

/// The registry state file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when there is nothing usable on disk.
    pub fn load(&self) -> Result<Option<RegistrySnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed state file ignored");
                Ok(None)
            }
        }
    }

    pub fn save(&self, snapshot: &RegistrySnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(snapshot)?;

        // Write beside the target, then rename over it
        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = fs::File::create(&tmp_path)?;
        tmp_file.write_all(contents.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), sessions = snapshot.sessions.len(), "state saved");
        Ok(())
    }
}

/// Debounce for saves: every mutation pushes the deadline out, and a save is
/// due once the deadline passes without further mutations.
#[derive(Debug, Clone)]
pub struct AutoSave {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutoSave {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True once per quiet period. Clears the pending save.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
