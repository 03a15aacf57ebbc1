use chrono::{DateTime, Days};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::analyze::{analyze_future_games, analyze_past_games};
use super::headline::make_headline;
use crate::controller::cache::ReportCache;
use crate::controller::mlb::{MlbApi, filter_my_team};
use crate::error::AppError;
use crate::model::{
    BASEBALL_THEATER_DATE_FORMAT, BASEBALL_THEATER_GAMES, LinescoreTable, PastGame, Report,
    Schedule, TeamInfo, TeamTable,
};

/// Days past today included in each fetch.
const LOOKAHEAD_DAYS: u64 = 7;

pub struct ReportGenerator {
    my_team: TeamInfo,
    teams: Arc<TeamTable>,
    api: Arc<dyn MlbApi>,
    tz: Tz,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated,
    SkippedOffseason,
    Failed(AppError),
}

impl ReportGenerator {
    #[must_use]
    pub fn new(my_team: TeamInfo, teams: Arc<TeamTable>, api: Arc<dyn MlbApi>, tz: Tz) -> Self {
        Self {
            my_team,
            teams,
            api,
            tz,
        }
    }

    /// Fetch `[yesterday, today + 7]` and build the report for `now`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the schedule cannot be fetched or decoded
    #[instrument(level = "info", skip(self), fields(team = %self.my_team.abbreviation))]
    pub async fn generate_report(&self, now: DateTime<Tz>) -> Result<Report, AppError> {
        let now = now.with_timezone(&self.tz);
        let today = now.date_naive();
        let yesterday = today - Days::new(1);
        let end = today + Days::new(LOOKAHEAD_DAYS);

        let schedule = self
            .api
            .fetch_schedule(yesterday, end, self.my_team.id)
            .await?;
        let schedule = Schedule {
            dates: filter_my_team(&schedule.dates, self.my_team.id),
        };

        let mut past_games = analyze_past_games(&schedule, today);
        self.attach_linescores(&mut past_games).await;

        let future_days =
            analyze_future_games(&schedule, today, self.my_team.id, &self.teams, self.tz);

        let headline = make_headline(&past_games, today, &self.my_team);
        let link = format!(
            "{BASEBALL_THEATER_GAMES}{}",
            yesterday.format(BASEBALL_THEATER_DATE_FORMAT)
        );

        Ok(Report {
            headline,
            link,
            when: now,
            timezone: now.format("%Z").to_string(),
            my_team_name: self.my_team.name.clone(),
            past_games,
            future_days,
        })
    }

    // A missing linescore leaves the game without a box score; it never fails the report.
    async fn attach_linescores(&self, past_games: &mut [PastGame]) {
        for game in past_games.iter_mut().filter(|g| !g.is_postponed()) {
            match self.api.fetch_linescore(game.game_pk).await {
                Ok(linescore) => {
                    let (home, away) = if game.is_winner_home {
                        (&game.winner, &game.loser)
                    } else {
                        (&game.loser, &game.winner)
                    };
                    let home_abbr = self.teams.lookup(home.team.id).abbreviation;
                    let away_abbr = self.teams.lookup(away.team.id).abbreviation;
                    game.linescore = Some(LinescoreTable::from_linescore(
                        &linescore, &home_abbr, &away_abbr,
                    ));
                }
                Err(e) => {
                    warn!(game_pk = game.game_pk, err = %e, "Failed to fetch linescore");
                }
            }
        }
    }
}

/// One scheduler tick: regenerate and publish, or leave the cache as it was.
pub async fn refresh_tick(
    generator: &ReportGenerator,
    cache: &ReportCache,
    offseason: bool,
    now: DateTime<Tz>,
) -> RefreshOutcome {
    if offseason {
        info!(now = %now, "Offseason, skipping refresh");
        return RefreshOutcome::SkippedOffseason;
    }

    info!(now = %now, "Updating cache");
    match generator.generate_report(now).await {
        Ok(report) => {
            info!(headline = %report.headline, "Report generated");
            cache.set(report);
            RefreshOutcome::Updated
        }
        Err(e) => {
            error!(err = %e, "Failed to generate report");
            RefreshOutcome::Failed(e)
        }
    }
}
