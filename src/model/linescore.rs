use serde::{Deserialize, Serialize};

/// Response body of `/api/v1/game/{gamePk}/linescore`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    // true when the home side won without batting in the final inning
    #[serde(default)]
    pub is_top_inning: bool,
    #[serde(default)]
    pub innings: Vec<Inning>,
    #[serde(default)]
    pub teams: LinescoreTeams,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LinescoreTeams {
    #[serde(default)]
    pub home: InningStats,
    #[serde(default)]
    pub away: InningStats,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Inning {
    #[serde(default)]
    pub num: i32,
    #[serde(default)]
    pub home: InningStats,
    #[serde(default)]
    pub away: InningStats,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InningStats {
    #[serde(default)]
    pub runs: i32,
    #[serde(default)]
    pub hits: i32,
    #[serde(default)]
    pub errors: i32,
    #[serde(default)]
    pub left_on_base: i32,
}

/// Box-score row for one side, ready for rendering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LinescoreRow {
    pub abbr: String,
    /// Runs per inning; `None` is an inning the side did not bat.
    pub innings: Vec<Option<i32>>,
    pub runs: i32,
    pub hits: i32,
    pub errors: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LinescoreTable {
    pub away: LinescoreRow,
    pub home: LinescoreRow,
}

impl LinescoreTable {
    #[must_use]
    pub fn from_linescore(linescore: &Linescore, home_abbr: &str, away_abbr: &str) -> Self {
        let mut home_innings: Vec<Option<i32>> =
            linescore.innings.iter().map(|i| Some(i.home.runs)).collect();
        let away_innings = linescore.innings.iter().map(|i| Some(i.away.runs)).collect();

        if linescore.is_top_inning {
            if let Some(last) = home_innings.last_mut() {
                *last = None;
            }
        }

        Self {
            away: LinescoreRow {
                abbr: away_abbr.to_string(),
                innings: away_innings,
                runs: linescore.teams.away.runs,
                hits: linescore.teams.away.hits,
                errors: linescore.teams.away.errors,
            },
            home: LinescoreRow {
                abbr: home_abbr.to_string(),
                innings: home_innings,
                runs: linescore.teams.home.runs,
                hits: linescore.teams.home.hits,
                errors: linescore.teams.home.errors,
            },
        }
    }
}
