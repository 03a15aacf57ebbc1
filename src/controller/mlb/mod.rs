pub mod client;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::model::{Linescore, Schedule, ScheduleDate};

pub use client::StatsApiClient;

#[async_trait]
pub trait MlbApi: Send + Sync {
    /// Schedule for `team_id` over the inclusive date range.
    async fn fetch_schedule(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        team_id: i64,
    ) -> Result<Schedule, AppError>;

    async fn fetch_linescore(&self, game_pk: i64) -> Result<Linescore, AppError>;
}

/// Keep only games involving `team_id`. Dates are kept even when emptied.
#[must_use]
pub fn filter_my_team(dates: &[ScheduleDate], team_id: i64) -> Vec<ScheduleDate> {
    dates
        .iter()
        .map(|d| ScheduleDate {
            date: d.date,
            games: d
                .games
                .iter()
                .filter(|g| g.involves(team_id))
                .cloned()
                .collect(),
        })
        .collect()
}
