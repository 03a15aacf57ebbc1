use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::model::linescore::LinescoreTable;
use crate::model::schedule::{GameTeam, Venue};

/// Slots in the upcoming-games table; slot 0 is today.
pub const FUTURE_DAYS: usize = 8;

/// Base of the permalink; yesterday's date is appended as `YYYYMMDD`.
pub const BASEBALL_THEATER_GAMES: &str = "https://baseball.theater/games/";
pub const BASEBALL_THEATER_DATE_FORMAT: &str = "%Y%m%d";

/// Yesterday's game, seen from whoever won it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PastGame {
    pub game_pk: i64,
    /// Empty unless the game was postponed.
    pub postpone_reason: String,
    /// Empty unless the game neither finished nor was postponed, e.g. `Suspended: Rain`.
    pub unfinished_state: String,
    pub venue: Venue,
    pub is_winner_home: bool,
    /// Final with equal scores and no winner flag; the home side sits in `winner`.
    pub is_tie: bool,
    pub winner: GameTeam,
    pub loser: GameTeam,
    pub linescore: Option<LinescoreTable>,
}

impl PastGame {
    #[must_use]
    pub fn is_postponed(&self) -> bool {
        !self.postpone_reason.is_empty()
    }

    /// No decision yet; neither side counts as winner.
    #[must_use]
    pub fn is_unfinished(&self) -> bool {
        !self.unfinished_state.is_empty()
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        !self.is_postponed() && !self.is_unfinished()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FutureGame {
    /// Start time in the feed's timezone, `HH:MM`.
    pub game_time_local: String,
    pub is_my_team_home: bool,
    pub against_abbr: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FutureDay {
    /// Su, Mo, Tu, ...
    pub day_abbr: String,
    pub date: NaiveDate,
    pub games: Vec<FutureGame>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Report {
    pub headline: String,
    pub link: String,
    pub when: DateTime<Tz>,
    /// Abbreviation of the feed's zone on `when`, e.g. EDT.
    pub timezone: String,
    pub my_team_name: String,
    pub past_games: Vec<PastGame>,
    pub future_days: [FutureDay; FUTURE_DAYS],
}
