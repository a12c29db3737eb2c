use super::session::{Session, SessionConfig, DEFAULT_MEMBERS_PER_TEAM};
use crate::error::{WheelError, WheelResult};
use crate::wheel::SpinOutcome;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What gets written to the state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub active_id: u64,
    #[serde(default)]
    pub global_lock: bool,
}

/// All open wheels, in tab order.
#[derive(Debug, Clone)]
pub struct Registry {
    sessions: Vec<Session>,
    next_id: u64,
    active_id: u64,
    global_lock: bool,
    /// Capacity given to sessions created from now on.
    new_session_capacity: usize,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// The two starter wheels.
    pub fn new() -> Self {
        let team_names: Vec<String> = ["Team 1", "Team 2", "Team 3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let first = ["Alex", "Bella", "Charlie", "Diana", "Evan", "Fara"];
        let second = ["Gamma", "Hani", "Indra", "Joko", "Kiki", "Lulu"];

        let sessions = vec![
            Session::new(1, "Wheel 1", to_strings(&first), team_names.clone()),
            Session::new(2, "Wheel 2", to_strings(&second), team_names),
        ];

        Self {
            sessions,
            next_id: 3,
            active_id: 1,
            global_lock: false,
            new_session_capacity: DEFAULT_MEMBERS_PER_TEAM,
        }
    }

    /// Rebuild a registry from persisted data, repairing whatever is out of
    /// range. An empty snapshot yields the starter wheels.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Self {
        if snapshot.sessions.is_empty() {
            warn!("persisted state has no sessions, using defaults");
            return Self::new();
        }

        let mut sessions = snapshot.sessions;
        let max_id = sessions.iter().map(Session::id).max().unwrap_or(0);
        let mut next_id = snapshot.next_id.max(max_id + 1);

        // Entries saved without an id get fresh ones
        for session in &mut sessions {
            if session.id() == 0 {
                session.set_id(next_id);
                next_id += 1;
            }
            session.repair();
        }

        let active_id = if sessions.iter().any(|s| s.id() == snapshot.active_id) {
            snapshot.active_id
        } else {
            sessions[0].id()
        };

        if snapshot.global_lock {
            for session in &mut sessions {
                session.set_locked(true);
            }
        }

        info!(sessions = sessions.len(), next_id, active_id, "registry restored");
        Self {
            sessions,
            next_id,
            active_id,
            global_lock: snapshot.global_lock,
            new_session_capacity: DEFAULT_MEMBERS_PER_TEAM,
        }
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            sessions: self.sessions.iter().map(Session::persisted).collect(),
            next_id: self.next_id,
            active_id: self.active_id,
            global_lock: self.global_lock,
        }
    }

    pub fn restore(&mut self, snapshot: RegistrySnapshot) {
        let capacity = self.new_session_capacity;
        *self = Self::from_snapshot(snapshot);
        self.new_session_capacity = capacity;
    }

    pub fn set_new_session_capacity(&mut self, capacity: usize) {
        self.new_session_capacity = capacity.max(1);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn active_id(&self) -> u64 {
        self.active_id
    }

    pub fn is_globally_locked(&self) -> bool {
        self.global_lock
    }

    pub fn get(&self, id: u64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.sessions.iter().position(|s| s.id() == id)
    }

    pub fn active(&self) -> Option<&Session> {
        self.get(self.active_id)
    }

    pub fn active_index(&self) -> usize {
        self.position(self.active_id).unwrap_or(0)
    }

    pub fn total_spins(&self) -> u64 {
        self.sessions.iter().map(|s| s.stats().total_spins).sum()
    }

    pub fn any_spinning(&self) -> bool {
        self.sessions.iter().any(Session::is_spinning)
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    /// Append a wheel with synthetic defaults and return its id.
    pub fn add_session(&mut self) -> u64 {
        let id = self.allocate_id();
        let session = Session::with_defaults(id).with_members_per_team(self.new_session_capacity);
        self.push(session)
    }

    /// Append a wheel built from a share token's config and make it active.
    pub fn import_session(&mut self, config: SessionConfig) -> u64 {
        let id = self.allocate_id();
        let mut session = Session::from_config(id, config.clone());
        if config.members_per_team == 0 {
            session = session.with_members_per_team(self.new_session_capacity);
        }
        let id = self.push(session);
        self.active_id = id;
        id
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(&mut self, mut session: Session) -> u64 {
        let id = session.id();
        session.set_locked(self.global_lock);
        info!(session = id, label = session.label(), "session added");
        self.sessions.push(session);
        id
    }

    pub fn remove_session(&mut self, id: u64) -> WheelResult<Session> {
        let index = self.position(id).ok_or(WheelError::SessionNotFound(id))?;
        if self.sessions.len() <= 1 {
            return Err(WheelError::LastSession);
        }
        if self.sessions[index].is_spinning() {
            return Err(WheelError::SessionBusy(id));
        }

        let removed = self.sessions.remove(index);
        if self.active_id == id {
            self.active_id = self.sessions[0].id();
        }
        info!(session = id, active = self.active_id, "session removed");
        Ok(removed)
    }

    pub fn set_active(&mut self, id: u64) -> WheelResult<()> {
        if self.get(id).is_none() {
            return Err(WheelError::SessionNotFound(id));
        }
        self.active_id = id;
        Ok(())
    }

    pub fn select_next(&mut self) {
        if self.is_empty() {
            return;
        }
        let next = (self.active_index() + 1) % self.sessions.len();
        self.active_id = self.sessions[next].id();
    }

    pub fn select_prev(&mut self) {
        if self.is_empty() {
            return;
        }
        let len = self.sessions.len();
        let prev = (self.active_index() + len - 1) % len;
        self.active_id = self.sessions[prev].id();
    }

    pub fn set_global_lock(&mut self, locked: bool) {
        self.global_lock = locked;
        for session in &mut self.sessions {
            session.set_locked(locked);
        }
        info!(locked, "global lock toggled");
    }

    // ------------------------------------------------------------------
    // Gated access
    // ------------------------------------------------------------------

    /// Mutable access to a session, honoring the global lock.
    pub fn unlocked_mut(&mut self, id: u64) -> WheelResult<&mut Session> {
        if self.global_lock {
            return Err(WheelError::RegistryLocked);
        }
        self.sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(WheelError::SessionNotFound(id))
    }

    pub fn active_unlocked_mut(&mut self) -> WheelResult<&mut Session> {
        self.unlocked_mut(self.active_id)
    }

    pub fn rename_session(&mut self, id: u64, label: &str) -> WheelResult<()> {
        self.unlocked_mut(id)?.rename(label)
    }

    /// Advance every spinning session by one frame.
    pub fn tick_all(&mut self) -> Vec<(u64, SpinOutcome)> {
        self.sessions
            .iter_mut()
            .filter(|s| s.is_spinning())
            .map(|s| (s.id(), s.tick()))
            .collect()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
