#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use mlb_rss::AppError;
use mlb_rss::controller::mlb::MlbApi;
use mlb_rss::model::{
    Game, GameTeam, LeagueRecord, Linescore, Schedule, ScheduleDate, Status, TeamInfo, TeamSummary,
    TeamTable, Teams, Venue,
};

pub const BAL: i64 = 110;
pub const NYY: i64 = 147;
pub const CIN: i64 = 113;

pub const SCHEDULE_FIXTURE: &str = include_str!("../fixtures/schedule_20240615.json");
pub const LINESCORE_FIXTURE: &str = include_str!("../fixtures/linescore_745001.json");

pub fn eastern() -> Tz {
    chrono_tz::America::New_York
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// 08:00 Eastern on the given day.
pub fn morning_of(y: i32, m: u32, d: u32) -> DateTime<Tz> {
    eastern()
        .with_ymd_and_hms(y, m, d, 8, 0, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn teams() -> TeamTable {
    TeamTable::embedded().expect("embedded team table parses")
}

pub fn orioles() -> TeamInfo {
    teams().lookup(BAL)
}

pub fn schedule_fixture() -> Schedule {
    serde_json::from_str(SCHEDULE_FIXTURE).expect("schedule fixture parses")
}

pub fn linescore_fixture() -> Linescore {
    serde_json::from_str(LINESCORE_FIXTURE).expect("linescore fixture parses")
}

pub fn side(id: i64, score: i32, is_winner: bool) -> GameTeam {
    GameTeam {
        team: TeamSummary {
            id,
            name: format!("Team {id}"),
        },
        score,
        is_winner,
        league_record: LeagueRecord::default(),
    }
}

pub fn final_status() -> Status {
    Status {
        abstract_game_state: "Final".to_string(),
        detailed_state: "Final".to_string(),
        reason: String::new(),
    }
}

pub fn scheduled_status() -> Status {
    Status {
        abstract_game_state: "Preview".to_string(),
        detailed_state: "Scheduled".to_string(),
        reason: String::new(),
    }
}

pub fn postponed_status(reason: &str) -> Status {
    Status {
        abstract_game_state: "Final".to_string(),
        detailed_state: "Postponed".to_string(),
        reason: reason.to_string(),
    }
}

pub fn suspended_status(detail: &str) -> Status {
    Status {
        abstract_game_state: "Live".to_string(),
        detailed_state: detail.to_string(),
        reason: String::new(),
    }
}

pub fn game(game_pk: i64, start: DateTime<Utc>, away: GameTeam, home: GameTeam, status: Status) -> Game {
    Game {
        game_pk,
        game_type: "R".to_string(),
        game_date: start,
        status,
        teams: Teams { away, home },
        venue: Venue {
            id: 1,
            name: "Test Park".to_string(),
        },
        game_number: 1,
        double_header: "N".to_string(),
        day_night: "night".to_string(),
        series_description: "Regular Season".to_string(),
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid utc time")
}

pub fn schedule(dates: Vec<(NaiveDate, Vec<Game>)>) -> Schedule {
    Schedule {
        dates: dates
            .into_iter()
            .map(|(date, games)| ScheduleDate { date, games })
            .collect(),
    }
}

/// Canned api: a fixed schedule response plus per-game linescores.
pub struct FakeApi {
    schedule: Result<Schedule, AppError>,
    linescores: HashMap<i64, Linescore>,
    schedule_calls: AtomicUsize,
    requested: Mutex<Vec<(NaiveDate, NaiveDate, i64)>>,
}

impl FakeApi {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Ok(schedule),
            linescores: HashMap::new(),
            schedule_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: AppError) -> Self {
        Self {
            schedule: Err(err),
            linescores: HashMap::new(),
            schedule_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_linescore(mut self, game_pk: i64, linescore: Linescore) -> Self {
        self.linescores.insert(game_pk, linescore);
        self
    }

    pub fn schedule_calls(&self) -> usize {
        self.schedule_calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<(NaiveDate, NaiveDate, i64)> {
        self.requested.lock().expect("lock").clone()
    }
}

#[async_trait]
impl MlbApi for FakeApi {
    async fn fetch_schedule(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        team_id: i64,
    ) -> Result<Schedule, AppError> {
        self.schedule_calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .expect("lock")
            .push((start_date, end_date, team_id));
        self.schedule.clone()
    }

    async fn fetch_linescore(&self, game_pk: i64) -> Result<Linescore, AppError> {
        self.linescores
            .get(&game_pk)
            .cloned()
            .ok_or_else(|| AppError::Fetch(format!("no linescore for {game_pk}")))
    }
}
