use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use super::MlbApi;
use crate::error::AppError;
use crate::model::{Linescore, Schedule};

pub const DEFAULT_API_BASE: &str = "https://statsapi.mlb.com";
const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Client for statsapi.mlb.com. One attempt per call, bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    client: Client,
    api_base: String,
}

impl StatsApiClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn schedule_url(&self, start_date: NaiveDate, end_date: NaiveDate, team_id: i64) -> String {
        format!(
            "{}/api/v1/schedule/games?sportId=1&startDate={}&endDate={}&teamId={}",
            self.api_base,
            start_date.format(API_DATE_FORMAT),
            end_date.format(API_DATE_FORMAT),
            team_id
        )
    }

    #[must_use]
    pub fn linescore_url(&self, game_pk: i64) -> String {
        format!("{}/api/v1/game/{}/linescore", self.api_base, game_pk)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        debug!(url = %url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("{url} returned {status}")));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MlbApi for StatsApiClient {
    #[instrument(level = "info", skip(self))]
    async fn fetch_schedule(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        team_id: i64,
    ) -> Result<Schedule, AppError> {
        let url = self.schedule_url(start_date, end_date, team_id);
        self.get_json(&url).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_linescore(&self, game_pk: i64) -> Result<Linescore, AppError> {
        let url = self.linescore_url(game_pk);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_url_has_window_and_team() {
        let client = StatsApiClient::new("https://example.test/", Duration::from_secs(1)).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 22).unwrap();
        assert_eq!(
            client.schedule_url(start, end, 110),
            "https://example.test/api/v1/schedule/games?sportId=1&startDate=2024-06-14&endDate=2024-06-22&teamId=110"
        );
        assert_eq!(
            client.linescore_url(745_000),
            "https://example.test/api/v1/game/745000/linescore"
        );
    }
}
