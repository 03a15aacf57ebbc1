use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AppError;

const EMBEDDED_TEAMS: &str = include_str!("../data/teams.json");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub location_name: String,
}

impl TeamInfo {
    /// Placeholder for ids missing from the table, so lookups never fail.
    #[must_use]
    pub fn unknown(id: i64) -> Self {
        Self {
            id,
            name: "Unknown".to_string(),
            abbreviation: "???".to_string(),
            team_name: String::new(),
            location_name: String::new(),
        }
    }
}

/// Read-only id -> team table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct TeamTable {
    teams: HashMap<i64, TeamInfo>,
}

impl TeamTable {
    /// # Errors
    ///
    /// Will return `Err` if the embedded team list is not valid json
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_TEAMS)
    }

    /// # Errors
    ///
    /// Will return `Err` if `json` is not an array of teams
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let teams: Vec<TeamInfo> = serde_json::from_str(json)?;
        Ok(Self::from_teams(teams))
    }

    #[must_use]
    pub fn from_teams(teams: Vec<TeamInfo>) -> Self {
        Self {
            teams: teams.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    #[must_use]
    pub fn lookup(&self, id: i64) -> TeamInfo {
        self.teams
            .get(&id)
            .cloned()
            .unwrap_or_else(|| TeamInfo::unknown(id))
    }

    /// Resolve an operator-supplied team: numeric id, abbreviation, full name or club name.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<TeamInfo> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Ok(id) = query.parse::<i64>() {
            return self.teams.get(&id).cloned();
        }

        let mut candidates: Vec<&TeamInfo> = self.teams.values().collect();
        // deterministic when two clubs share a club name
        candidates.sort_by_key(|t| t.id);
        candidates
            .into_iter()
            .find(|t| {
                t.abbreviation.eq_ignore_ascii_case(query)
                    || t.name.eq_ignore_ascii_case(query)
                    || t.team_name.eq_ignore_ascii_case(query)
            })
            .cloned()
    }
}
