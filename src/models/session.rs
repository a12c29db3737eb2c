use super::stats::{push_history, HistoryEntry, Stats};
use super::undo::{Snapshot, UndoStack};
use crate::error::{WheelError, WheelResult};
use crate::wheel::{self, Spin, SpinEvent, SpinOutcome, Step};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_MEMBERS_PER_TEAM: usize = 2;

/// Largest capacity offered by the UI. The engine itself only requires >= 1.
pub const MAX_MEMBERS_PER_TEAM: usize = 10;

fn default_members_per_team() -> usize {
    DEFAULT_MEMBERS_PER_TEAM
}

/// The shareable part of a session: what a share token carries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default, alias = "tabName")]
    pub label: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub team_names: Vec<String>,
    #[serde(default)]
    pub members_per_team: usize,
}

/// One team as the renderer sees it.
#[derive(Debug, Clone, Copy)]
pub struct TeamTile<'a> {
    pub index: usize,
    pub label: &'a str,
    pub members: &'a [String],
    pub capacity: usize,
}

impl TeamTile<'_> {
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }
}

/// One wheel ("tab"): a pool of names, its teams, and everything needed to
/// spin and undo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    id: u64,
    #[serde(default, alias = "tabName")]
    label: String,
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    team_names: Vec<String>,
    #[serde(default)]
    teams: Vec<Vec<String>>,
    #[serde(default = "default_members_per_team")]
    members_per_team: usize,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    locked: bool,
    #[serde(default, rename = "spinHistory")]
    history: Vec<HistoryEntry>,
    #[serde(default)]
    stats: Stats,
    #[serde(skip)]
    undo: UndoStack,
    #[serde(skip)]
    spin: Option<Spin>,
}

impl Session {
    pub fn new(id: u64, label: impl Into<String>, names: Vec<String>, team_names: Vec<String>) -> Self {
        let teams = team_names.iter().map(|_| Vec::new()).collect();
        Self {
            id,
            label: label.into(),
            names,
            team_names,
            teams,
            members_per_team: DEFAULT_MEMBERS_PER_TEAM,
            rotation: 0.0,
            locked: false,
            history: Vec::new(),
            stats: Stats::default(),
            undo: UndoStack::default(),
            spin: None,
        }
    }

    /// Session with synthetic names and teams derived from its id.
    pub fn with_defaults(id: u64) -> Self {
        Self::new(id, format!("Wheel {}", id), default_names(id), default_team_names(id))
    }

    /// Session built from an imported config. Missing parts fall back to the
    /// synthetic defaults for `id`.
    pub fn from_config(id: u64, config: SessionConfig) -> Self {
        let label = match config.label.trim() {
            "" => format!("Import {}", id),
            label => label.to_string(),
        };
        let names = if config.names.is_empty() {
            default_names(id)
        } else {
            config.names
        };
        let team_names = if config.team_names.is_empty() {
            default_team_names(id)
        } else {
            config.team_names
        };

        let mut session = Self::new(id, label, names, team_names);
        if config.members_per_team > 0 {
            session.members_per_team = config.members_per_team;
        }
        session
    }

    pub fn with_members_per_team(mut self, capacity: usize) -> Self {
        self.members_per_team = capacity.max(1);
        self
    }

    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            label: self.label.clone(),
            names: self.names.clone(),
            team_names: self.team_names.clone(),
            members_per_team: self.members_per_team,
        }
    }

    /// Copy of the persisted fields, without undo history or spin state.
    pub fn persisted(&self) -> Self {
        Self {
            id: self.id,
            label: self.label.clone(),
            names: self.names.clone(),
            team_names: self.team_names.clone(),
            teams: self.teams.clone(),
            members_per_team: self.members_per_team,
            rotation: self.rotation,
            locked: self.locked,
            history: self.history.clone(),
            stats: self.stats.clone(),
            undo: UndoStack::default(),
            spin: None,
        }
    }

    /// Bring a freshly deserialized session back within its invariants.
    pub(crate) fn repair(&mut self) {
        if self.label.trim().is_empty() {
            self.label = format!("Wheel {}", self.id);
        }
        if self.members_per_team == 0 {
            self.members_per_team = DEFAULT_MEMBERS_PER_TEAM;
        }
        if self.teams.len() != self.team_names.len() {
            warn!(
                session = self.id,
                teams = self.teams.len(),
                team_names = self.team_names.len(),
                "team list out of sync with team names, resizing"
            );
            self.teams.resize_with(self.team_names.len(), Vec::new);
        }
        if !self.rotation.is_finite() {
            self.rotation = 0.0;
        }
        self.rotation = wheel::normalize(self.rotation);
        self.history.truncate(super::stats::HISTORY_LIMIT);
        self.stats.last_picked.truncate(super::stats::LAST_PICKED_LIMIT);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn team_names(&self) -> &[String] {
        &self.team_names
    }

    pub fn teams(&self) -> &[Vec<String>] {
        &self.teams
    }

    pub fn members_per_team(&self) -> usize {
        self.members_per_team
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn velocity(&self) -> f64 {
        self.spin.map(|s| s.velocity()).unwrap_or(0.0)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn assigned_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }

    pub fn all_teams_full(&self) -> bool {
        !wheel::has_open_team(&self.teams, self.members_per_team)
    }

    /// Whether the spin and undo controls should be enabled.
    pub fn controls_enabled(&self, global_lock: bool) -> bool {
        !(self.locked || global_lock)
    }

    pub fn team_tiles(&self) -> impl Iterator<Item = TeamTile<'_>> {
        self.teams.iter().enumerate().map(move |(index, members)| TeamTile {
            index,
            label: self.team_names.get(index).map(String::as_str).unwrap_or(""),
            members,
            capacity: self.members_per_team,
        })
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    // ------------------------------------------------------------------
    // Undo
    // ------------------------------------------------------------------

    pub fn push_state(&mut self) {
        self.undo.push(Snapshot {
            names: self.names.clone(),
            team_names: self.team_names.clone(),
            teams: self.teams.clone(),
            rotation: self.rotation,
            stats: self.stats.clone(),
            history: self.history.clone(),
        });
    }

    pub fn undo(&mut self) -> WheelResult<()> {
        self.ensure_idle()?;
        let snapshot = self.undo.pop().ok_or(WheelError::NothingToUndo)?;

        self.names = snapshot.names;
        self.team_names = snapshot.team_names;
        self.teams = snapshot.teams;
        self.rotation = snapshot.rotation;
        self.stats = snapshot.stats;
        self.history = snapshot.history;

        info!(session = self.id, remaining = self.undo.len(), "undo");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Spinning
    // ------------------------------------------------------------------

    pub fn begin_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WheelResult<()> {
        self.begin_spin_with(Spin::random(rng).velocity())
    }

    /// Start a spin with a known initial velocity.
    pub fn begin_spin_with(&mut self, velocity: f64) -> WheelResult<()> {
        self.check_can_spin()?;
        self.start(Spin::with_velocity(velocity));
        Ok(())
    }

    fn check_can_spin(&self) -> WheelResult<()> {
        self.ensure_idle()?;
        if self.names.is_empty() {
            return Err(WheelError::EmptyPool);
        }
        if self.teams.is_empty() {
            return Err(WheelError::NoTeams);
        }
        if self.all_teams_full() {
            return Err(WheelError::AllTeamsFull);
        }
        Ok(())
    }

    fn start(&mut self, spin: Spin) {
        self.push_state();
        info!(session = self.id, velocity = spin.velocity(), "spin started");
        self.spin = Some(spin);
    }

    /// Advance the wheel by one frame. On the frame the wheel comes to rest
    /// the pick is resolved and committed.
    pub fn tick(&mut self) -> SpinOutcome {
        let Some(spin) = self.spin.as_mut() else {
            return SpinOutcome::Idle;
        };

        match spin.step(&mut self.rotation) {
            Step::Rolling => SpinOutcome::Rolling,
            Step::Rest => {
                let frames = spin.frames();
                self.spin = None;
                debug!(session = self.id, frames, rotation = self.rotation, "wheel at rest");

                let Some(index) = wheel::resolve(self.rotation, self.names.len()) else {
                    warn!(session = self.id, "wheel stopped with an empty pool");
                    return SpinOutcome::Discarded(WheelError::EmptyPool);
                };

                match self.commit(index) {
                    Ok(event) => SpinOutcome::Landed(event),
                    Err(e) => {
                        warn!(session = self.id, error = %e, "pick discarded");
                        SpinOutcome::Discarded(e)
                    }
                }
            }
        }
    }

    /// Move the name at `index` into the first team with room, recording
    /// stats and history. Nothing changes on error.
    pub fn commit(&mut self, index: usize) -> WheelResult<SpinEvent> {
        if index >= self.names.len() {
            return Err(WheelError::InvalidIndex {
                index,
                len: self.names.len(),
            });
        }
        let team_index = wheel::first_open_team(&self.teams, self.members_per_team)
            .ok_or(WheelError::AllTeamsFull)?;

        let name = self.names.remove(index);
        self.teams[team_index].push(name.clone());

        let team = self.team_names[team_index].clone();
        let at = Utc::now();
        self.stats.record(&name, team_index);
        push_history(&mut self.history, HistoryEntry::new(name.clone(), team.clone(), at));

        info!(session = self.id, name = %name, team = %team, "pick committed");
        Ok(SpinEvent {
            name,
            team,
            team_index,
            rotation: self.rotation,
            at,
        })
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    pub fn add_name(&mut self, name: &str) -> WheelResult<()> {
        let name = non_empty(name)?;
        self.ensure_idle()?;
        self.push_state();
        self.names.push(name);
        Ok(())
    }

    pub fn remove_name(&mut self, index: usize) -> WheelResult<String> {
        self.ensure_idle()?;
        check_index(index, self.names.len())?;
        self.push_state();
        Ok(self.names.remove(index))
    }

    pub fn add_team(&mut self, name: &str) -> WheelResult<()> {
        let name = non_empty(name)?;
        self.ensure_idle()?;
        self.push_state();
        self.team_names.push(name);
        self.teams.push(Vec::new());
        Ok(())
    }

    /// Remove a team; its members go back to the end of the pool.
    pub fn remove_team(&mut self, index: usize) -> WheelResult<String> {
        self.ensure_idle()?;
        check_index(index, self.teams.len())?;
        self.push_state();
        let members = self.teams.remove(index);
        self.names.extend(members);
        self.stats.remove_team(index);
        Ok(self.team_names.remove(index))
    }

    /// Empty every team, returning members to the pool in team order.
    pub fn reset_teams(&mut self) -> WheelResult<()> {
        self.ensure_idle()?;
        self.push_state();
        for team in &mut self.teams {
            self.names.append(team);
        }
        Ok(())
    }

    /// Empty every team, discarding the members.
    pub fn clear_teams(&mut self) -> WheelResult<()> {
        self.ensure_idle()?;
        self.push_state();
        for team in &mut self.teams {
            team.clear();
        }
        Ok(())
    }

    /// Change the shared team capacity. Allowed mid-spin; the commit
    /// re-checks capacity when the wheel stops.
    pub fn set_members_per_team(&mut self, capacity: usize) -> WheelResult<()> {
        if capacity == 0 {
            return Err(WheelError::InvalidCapacity(capacity));
        }
        self.ensure_unlocked()?;
        self.members_per_team = capacity;
        Ok(())
    }

    pub fn rename(&mut self, label: &str) -> WheelResult<()> {
        let label = non_empty(label)?;
        self.ensure_unlocked()?;
        self.label = label;
        Ok(())
    }

    fn ensure_unlocked(&self) -> WheelResult<()> {
        if self.locked {
            return Err(WheelError::SessionLocked);
        }
        Ok(())
    }

    fn ensure_idle(&self) -> WheelResult<()> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }
        self.ensure_unlocked()
    }
}

fn non_empty(s: &str) -> WheelResult<String> {
    match s.trim() {
        "" => Err(WheelError::EmptyName),
        s => Ok(s.to_string()),
    }
}

fn check_index(index: usize, len: usize) -> WheelResult<()> {
    if index >= len {
        return Err(WheelError::InvalidIndex { index, len });
    }
    Ok(())
}

fn default_names(id: u64) -> Vec<String> {
    ["A", "B", "C", "D", "E"]
        .iter()
        .map(|suffix| format!("User{}{}", id, suffix))
        .collect()
}

fn default_team_names(id: u64) -> Vec<String> {
    ["A", "B", "C"]
        .iter()
        .map(|suffix| format!("Team {} {}", id, suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::HISTORY_LIMIT;
    use crate::models::undo::UNDO_LIMIT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn test_session() -> Session {
        Session::new(
            1,
            "Test",
            strings(&["Alex", "Bella", "Charlie", "Diana", "Evan", "Fara"]),
            strings(&["Team 1", "Team 2", "Team 3"]),
        )
    }

    fn spin_to_rest(session: &mut Session) -> SpinOutcome {
        loop {
            let outcome = session.tick();
            if outcome.is_finished() {
                return outcome;
            }
            assert!(matches!(outcome, SpinOutcome::Rolling));
        }
    }

    fn pool_plus_assigned(session: &Session) -> usize {
        session.names().len() + session.assigned_count()
    }

    #[test]
    fn test_defaults_follow_id() {
        let session = Session::with_defaults(7);
        assert_eq!(session.label(), "Wheel 7");
        assert_eq!(session.names()[0], "User7A");
        assert_eq!(session.names().len(), 5);
        assert_eq!(session.team_names(), &strings(&["Team 7 A", "Team 7 B", "Team 7 C"])[..]);
        assert_eq!(session.teams().len(), 3);
        assert_eq!(session.members_per_team(), DEFAULT_MEMBERS_PER_TEAM);
    }

    #[test]
    fn test_from_config_fills_gaps() {
        let session = Session::from_config(
            4,
            SessionConfig {
                label: "  ".into(),
                names: strings(&["X", "Y"]),
                team_names: Vec::new(),
                members_per_team: 0,
            },
        );
        assert_eq!(session.label(), "Import 4");
        assert_eq!(session.names(), &strings(&["X", "Y"])[..]);
        assert_eq!(session.team_names().len(), 3);
        assert_eq!(session.members_per_team(), DEFAULT_MEMBERS_PER_TEAM);
    }

    #[test]
    fn test_commit_is_atomic() {
        let mut session = test_session();
        let before_len = session.names().len();
        let before_spins = session.stats().total_spins;

        let event = session.commit(2).unwrap();

        assert_eq!(event.name, "Charlie");
        assert_eq!(event.team, "Team 1");
        assert_eq!(event.team_index, 0);
        assert_eq!(session.names().len(), before_len - 1);
        assert!(!session.names().contains(&"Charlie".to_string()));
        assert_eq!(session.teams()[0], vec!["Charlie"]);
        assert_eq!(session.assigned_count(), 1);
        assert_eq!(session.stats().total_spins, before_spins + 1);
        assert_eq!(session.stats().assigned_to(0), 1);
        assert_eq!(session.stats().last_picked, vec!["Charlie"]);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].team, "Team 1");
    }

    #[test]
    fn test_commit_fills_teams_in_order() {
        let mut session = test_session();
        for _ in 0..6 {
            session.commit(0).unwrap();
        }
        assert_eq!(session.teams()[0], vec!["Alex", "Bella"]);
        assert_eq!(session.teams()[1], vec!["Charlie", "Diana"]);
        assert_eq!(session.teams()[2], vec!["Evan", "Fara"]);
        assert!(session.names().is_empty());
        assert_eq!(session.history().len(), HISTORY_LIMIT);
        assert_eq!(session.stats().last_picked.len(), 5);
    }

    #[test]
    fn test_commit_rejected_when_all_full() {
        let mut session = test_session();
        session.set_members_per_team(1).unwrap();
        for _ in 0..3 {
            session.commit(0).unwrap();
        }
        let names = session.names().to_vec();
        let teams = session.teams().to_vec();
        let stats = session.stats().clone();

        assert_eq!(session.commit(0), Err(WheelError::AllTeamsFull));
        assert_eq!(session.names(), &names[..]);
        assert_eq!(session.teams(), &teams[..]);
        assert_eq!(session.stats(), &stats);
        for team in session.teams() {
            assert!(team.len() <= session.members_per_team());
        }
    }

    #[test]
    fn test_commit_rejects_bad_index() {
        let mut session = test_session();
        assert_eq!(
            session.commit(6),
            Err(WheelError::InvalidIndex { index: 6, len: 6 })
        );
        assert_eq!(session.stats().total_spins, 0);
    }

    #[test]
    fn test_overfull_team_tolerated_after_capacity_drop() {
        let mut session = test_session();
        session.commit(0).unwrap();
        session.commit(0).unwrap();
        session.set_members_per_team(1).unwrap();

        assert_eq!(session.teams()[0].len(), 2);
        let event = session.commit(0).unwrap();
        assert_eq!(event.team_index, 1);
        assert_eq!(session.teams()[0].len(), 2);
    }

    #[test]
    fn test_undo_round_trip_after_commit() {
        let mut session = test_session();
        session.commit(1).unwrap();
        session.rotation = 1.25;

        let names = session.names().to_vec();
        let teams = session.teams().to_vec();
        let stats = session.stats().clone();
        let history = session.history().to_vec();

        session.push_state();
        session.rotation = 4.0;
        session.commit(3).unwrap();
        session.undo().unwrap();

        assert_eq!(session.names(), &names[..]);
        assert_eq!(session.teams(), &teams[..]);
        assert_eq!(session.rotation(), 1.25);
        assert_eq!(session.stats(), &stats);
        assert_eq!(session.history(), &history[..]);
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut session = test_session();
        assert_eq!(session.undo(), Err(WheelError::NothingToUndo));
    }

    #[test]
    fn test_undo_does_not_push() {
        let mut session = test_session();
        session.add_name("Gina").unwrap();
        session.add_name("Hugo").unwrap();
        assert_eq!(session.undo_depth(), 2);
        session.undo().unwrap();
        assert_eq!(session.undo_depth(), 1);
        assert_eq!(session.names().last().unwrap(), "Gina");
    }

    #[test]
    fn test_undo_stack_is_bounded() {
        let mut session = test_session();
        for i in 0..25 {
            session.add_name(&format!("extra{}", i)).unwrap();
        }
        assert_eq!(session.undo_depth(), UNDO_LIMIT);
        for _ in 0..UNDO_LIMIT {
            session.undo().unwrap();
        }
        assert_eq!(session.undo(), Err(WheelError::NothingToUndo));
        assert_eq!(session.names().len(), 6 + 15);
    }

    #[test]
    fn test_spin_runs_to_a_commit() {
        let mut session = test_session();
        let mut rng = StdRng::seed_from_u64(42);
        session.begin_spin(&mut rng).unwrap();
        assert!(session.is_spinning());
        assert_eq!(session.undo_depth(), 1);

        let outcome = spin_to_rest(&mut session);
        let SpinOutcome::Landed(event) = outcome else {
            panic!("expected a landing, got {:?}", outcome);
        };

        assert!(!session.is_spinning());
        assert_eq!(session.names().len(), 5);
        assert_eq!(session.teams()[0], vec![event.name.clone()]);
        assert_eq!(session.stats().total_spins, 1);
        assert!((0.0..std::f64::consts::TAU).contains(&session.rotation()));
        assert_eq!(session.tick(), SpinOutcome::Idle);
    }

    #[test]
    fn test_landing_matches_resolver() {
        let mut session = test_session();
        let names = session.names().to_vec();
        session.begin_spin_with(1.5).unwrap();
        let SpinOutcome::Landed(event) = spin_to_rest(&mut session) else {
            panic!("expected a landing");
        };
        let index = wheel::resolve(session.rotation(), names.len()).unwrap();
        assert_eq!(event.name, names[index]);
        assert_eq!(event.rotation, session.rotation());
    }

    #[test]
    fn test_undo_reverts_whole_spin() {
        let mut session = test_session();
        let names = session.names().to_vec();
        let teams = session.teams().to_vec();
        let stats = session.stats().clone();
        let rotation = session.rotation();

        session.begin_spin_with(1.9).unwrap();
        spin_to_rest(&mut session);
        session.undo().unwrap();

        assert_eq!(session.names(), &names[..]);
        assert_eq!(session.teams(), &teams[..]);
        assert_eq!(session.stats(), &stats);
        assert_eq!(session.rotation(), rotation);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_spin_preconditions() {
        let mut session = test_session();
        session.begin_spin_with(1.2).unwrap();
        assert_eq!(session.begin_spin_with(1.2), Err(WheelError::AlreadySpinning));
        assert_eq!(session.undo(), Err(WheelError::AlreadySpinning));
        assert_eq!(session.undo_depth(), 1);

        let mut empty = Session::new(2, "Empty", Vec::new(), strings(&["T"]));
        assert_eq!(empty.begin_spin_with(1.2), Err(WheelError::EmptyPool));

        let mut no_teams = Session::new(3, "No teams", strings(&["A"]), Vec::new());
        assert_eq!(no_teams.begin_spin_with(1.2), Err(WheelError::NoTeams));

        let mut locked = test_session();
        locked.set_locked(true);
        assert_eq!(locked.begin_spin_with(1.2), Err(WheelError::SessionLocked));
        assert_eq!(locked.undo_depth(), 0);
    }

    #[test]
    fn test_spin_rejected_when_full() {
        let mut session = test_session();
        session.set_members_per_team(1).unwrap();
        for _ in 0..3 {
            session.commit(0).unwrap();
        }
        assert_eq!(session.begin_spin_with(1.5), Err(WheelError::AllTeamsFull));
        assert!(!session.is_spinning());
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_capacity_exhausted_mid_spin_discards_pick() {
        let mut session = test_session();
        session.set_members_per_team(1).unwrap();
        session.commit(0).unwrap();
        session.commit(0).unwrap();

        session.begin_spin_with(1.5).unwrap();
        session.commit(0).unwrap();
        let names = session.names().to_vec();

        assert_eq!(
            spin_to_rest(&mut session),
            SpinOutcome::Discarded(WheelError::AllTeamsFull)
        );
        assert_eq!(session.names(), &names[..]);
        assert_eq!(session.stats().total_spins, 3);
        assert!(!session.is_spinning());
    }

    #[test]
    fn test_conservation_across_many_spins() {
        let mut session = test_session();
        session.set_members_per_team(3).unwrap();
        let total = pool_plus_assigned(&session);
        let mut rng = StdRng::seed_from_u64(9);

        while session.begin_spin(&mut rng).is_ok() {
            let before = session.names().len();
            if let SpinOutcome::Landed(_) = spin_to_rest(&mut session) {
                assert_eq!(session.names().len(), before - 1);
            }
            assert_eq!(pool_plus_assigned(&session), total);
            assert!(session.history().len() <= HISTORY_LIMIT);
            assert!(session.undo_depth() <= UNDO_LIMIT);
        }
        assert!(session.names().is_empty());
    }

    #[test]
    fn test_edits_push_snapshots_and_validate() {
        let mut session = test_session();
        assert_eq!(session.add_name("   "), Err(WheelError::EmptyName));
        assert_eq!(session.undo_depth(), 0);

        session.add_name("  Gina ").unwrap();
        assert_eq!(session.names().last().unwrap(), "Gina");

        assert_eq!(session.remove_name(0).unwrap(), "Alex");
        assert!(session.remove_name(99).is_err());

        session.add_team("Team 4").unwrap();
        assert_eq!(session.teams().len(), 4);
        assert_eq!(session.team_names().len(), 4);
        assert_eq!(session.undo_depth(), 3);

        session.undo().unwrap();
        assert_eq!(session.teams().len(), 3);
        assert_eq!(session.team_names().len(), 3);
    }

    #[test]
    fn test_remove_team_returns_members() {
        let mut session = test_session();
        session.commit(0).unwrap();
        session.commit(0).unwrap();
        let total = pool_plus_assigned(&session);

        assert_eq!(session.remove_team(0).unwrap(), "Team 1");
        assert_eq!(session.team_names(), &strings(&["Team 2", "Team 3"])[..]);
        assert_eq!(session.names().last().unwrap(), "Bella");
        assert_eq!(pool_plus_assigned(&session), total);
    }

    #[test]
    fn test_remove_team_keeps_per_team_counts_aligned() {
        let mut session = Session::new(1, "Test", strings(&["A", "B"]), strings(&["T1", "T2"]))
            .with_members_per_team(1);
        session.commit(0).unwrap();

        session.remove_team(0).unwrap();
        assert_eq!(session.team_names(), &strings(&["T2"])[..]);
        assert_eq!(session.stats().assigned_to(0), 0);
        assert_eq!(session.stats().total_spins, 1);

        session.undo().unwrap();
        assert_eq!(session.stats().assigned_to(0), 1);
    }

    #[test]
    fn test_reset_returns_members_clear_discards() {
        let mut session = test_session();
        session.commit(0).unwrap();
        session.commit(0).unwrap();
        session.commit(0).unwrap();

        session.reset_teams().unwrap();
        assert_eq!(session.assigned_count(), 0);
        assert_eq!(session.names().len(), 6);
        assert_eq!(&session.names()[3..], &strings(&["Alex", "Bella", "Charlie"])[..]);

        session.commit(0).unwrap();
        session.clear_teams().unwrap();
        assert_eq!(session.assigned_count(), 0);
        assert_eq!(session.names().len(), 5);
        assert_eq!(session.teams().len(), 3);
    }

    #[test]
    fn test_locked_session_rejects_edits() {
        let mut session = test_session();
        session.set_locked(true);
        assert_eq!(session.add_name("Gina"), Err(WheelError::SessionLocked));
        assert_eq!(session.add_team("X"), Err(WheelError::SessionLocked));
        assert_eq!(session.reset_teams(), Err(WheelError::SessionLocked));
        assert_eq!(session.set_members_per_team(3), Err(WheelError::SessionLocked));
        assert_eq!(session.undo_depth(), 0);
        assert!(!session.controls_enabled(false));
        assert!(!test_session().controls_enabled(true));
        assert!(test_session().controls_enabled(false));
    }

    #[test]
    fn test_capacity_must_be_positive() {
        let mut session = test_session();
        assert_eq!(session.set_members_per_team(0), Err(WheelError::InvalidCapacity(0)));
        assert_eq!(session.members_per_team(), DEFAULT_MEMBERS_PER_TEAM);
    }

    #[test]
    fn test_repair_restores_invariants() {
        let json = r#"{
            "id": 5,
            "tabName": "Old",
            "names": ["A"],
            "teamNames": ["T1", "T2"],
            "teams": [["B"]],
            "membersPerTeam": 0,
            "rotation": 20.0
        }"#;
        let mut session: Session = serde_json::from_str(json).unwrap();
        session.repair();

        assert_eq!(session.label(), "Old");
        assert_eq!(session.teams().len(), 2);
        assert_eq!(session.teams()[0], vec!["B"]);
        assert_eq!(session.members_per_team(), DEFAULT_MEMBERS_PER_TEAM);
        assert!((0.0..std::f64::consts::TAU).contains(&session.rotation()));
    }

    #[test]
    fn test_persisted_copy_drops_undo_and_spin() {
        let mut session = test_session();
        session.add_name("Gina").unwrap();
        session.begin_spin_with(1.5).unwrap();

        let copy = session.persisted();
        assert_eq!(copy.undo_depth(), 0);
        assert!(!copy.is_spinning());
        assert_eq!(copy.names(), session.names());

        let json = serde_json::to_string(&copy).unwrap();
        assert!(json.contains("spinHistory"));
        assert!(!json.contains("undo"));
    }
}
