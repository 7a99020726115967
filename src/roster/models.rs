use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One player on one team, in canonical form.
///
/// Serializes with the exported CSV header names so that written rosters can be
/// read back field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Firstname")]
    pub first_name: String,
    #[serde(rename = "Lastname")]
    pub last_name: String,
    #[serde(rename = "Team")]
    pub team_name: String,
    #[serde(rename = "Sweater")]
    pub sweater_number: String,
}

impl PlayerRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        team_name: impl Into<String>,
        sweater_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            team_name: team_name.into(),
            sweater_number: sweater_number.into(),
        }
    }

    /// "First Last" for log messages
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Players bucketed by canonical team name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    teams: IndexMap<String, Vec<PlayerRecord>>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a player to the bucket named by its `team_name`, creating the
    /// bucket on first sight.
    pub fn push(&mut self, record: PlayerRecord) {
        self.teams
            .entry(record.team_name.clone())
            .or_default()
            .push(record);
    }

    pub fn get(&self, team_name: &str) -> Option<&[PlayerRecord]> {
        self.teams.get(team_name).map(Vec::as_slice)
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PlayerRecord])> {
        self.teams
            .iter()
            .map(|(name, players)| (name.as_str(), players.as_slice()))
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.teams.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Merges another roster into this one, appending to existing buckets.
    pub fn extend(&mut self, other: TeamRoster) {
        for (_, players) in other.teams {
            for player in players {
                self.push(player);
            }
        }
    }

    /// All players across teams, team by team.
    pub fn into_players(self) -> Vec<PlayerRecord> {
        self.teams.into_values().flatten().collect()
    }
}
