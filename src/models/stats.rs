use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entries kept in the spin history.
pub const HISTORY_LIMIT: usize = 5;

/// Names kept in `Stats::last_picked`.
pub const LAST_PICKED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_spins: u64,
    /// Assignments per team index
    #[serde(default)]
    pub team_distribution: BTreeMap<usize, u64>,
    /// Most recent first
    #[serde(default)]
    pub last_picked: Vec<String>,
}

impl Stats {
    pub fn record(&mut self, name: &str, team_index: usize) {
        self.total_spins += 1;
        *self.team_distribution.entry(team_index).or_insert(0) += 1;
        self.last_picked.insert(0, name.to_string());
        self.last_picked.truncate(LAST_PICKED_LIMIT);
    }

    /// Forget a removed team's count; later teams move down one slot.
    pub fn remove_team(&mut self, team_index: usize) {
        self.team_distribution = std::mem::take(&mut self.team_distribution)
            .into_iter()
            .filter(|&(index, _)| index != team_index)
            .map(|(index, count)| if index > team_index { (index - 1, count) } else { (index, count) })
            .collect();
    }

    pub fn assigned_to(&self, team_index: usize) -> u64 {
        self.team_distribution.get(&team_index).copied().unwrap_or(0)
    }
}

/// One line of the "recent spins" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub team: String,
    pub time: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(name: impl Into<String>, team: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            time,
        }
    }

    pub fn local_time_string(&self) -> String {
        self.time.with_timezone(&Local).format("%H:%M:%S").to_string()
    }
}

/// Prepend `entry`, dropping the oldest beyond the limit.
pub fn push_history(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.insert(0, entry);
    history.truncate(HISTORY_LIMIT);
}
