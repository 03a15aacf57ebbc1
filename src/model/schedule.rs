use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Response body of `/api/v1/schedule/games`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

/// One calendar day of the schedule. The API omits days without games.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDate {
    pub date: NaiveDate,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_pk: i64,
    #[serde(default)]
    pub game_type: String,
    pub game_date: DateTime<Utc>,
    #[serde(default)]
    pub status: Status,
    pub teams: Teams,
    #[serde(default)]
    pub venue: Venue,
    #[serde(default)]
    pub game_number: i32,
    #[serde(default)]
    pub double_header: String,
    #[serde(default)]
    pub day_night: String,
    #[serde(default)]
    pub series_description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default)]
    pub abstract_game_state: String,
    #[serde(default)]
    pub detailed_state: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    Postponed,
    Final,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Teams {
    pub away: GameTeam,
    pub home: GameTeam,
}

/// One side of a game. Score and winner flag are absent until the game starts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameTeam {
    pub team: TeamSummary,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub is_winner: bool,
    #[serde(default)]
    pub league_record: LeagueRecord,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TeamSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LeagueRecord {
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub pct: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Venue {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Game {
    #[must_use]
    pub fn status_kind(&self) -> GameStatus {
        if self.status.detailed_state == "Postponed" {
            GameStatus::Postponed
        } else if self.status.abstract_game_state == "Final" {
            GameStatus::Final
        } else {
            GameStatus::Scheduled
        }
    }

    #[must_use]
    pub fn involves(&self, team_id: i64) -> bool {
        self.teams.home.team.id == team_id || self.teams.away.team.id == team_id
    }
}

impl Schedule {
    /// Games on the given calendar day, or an empty slice when the day is absent.
    #[must_use]
    pub fn games_on(&self, date: NaiveDate) -> &[Game] {
        self.dates
            .iter()
            .find(|d| d.date == date)
            .map_or(&[], |d| d.games.as_slice())
    }
}
