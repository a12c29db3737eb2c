/// First team (lowest index) with room for another member.
///
/// Teams already over capacity, e.g. after the capacity was lowered, are
/// skipped but otherwise left alone.
pub fn first_open_team(teams: &[Vec<String>], capacity: usize) -> Option<usize> {
    teams.iter().position(|members| members.len() < capacity)
}

pub fn has_open_team(teams: &[Vec<String>], capacity: usize) -> bool {
    first_open_team(teams, capacity).is_some()
}
