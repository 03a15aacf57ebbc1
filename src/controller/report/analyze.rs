use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use tracing::info;

use crate::model::{
    FUTURE_DAYS, FutureDay, FutureGame, Game, GameStatus, GameTeam, PastGame, Schedule, TeamTable,
    Venue,
};

const UNKNOWN_POSTPONE_REASON: &str = "unknown reasons";
const UNKNOWN_GAME_STATE: &str = "In Progress";

/// Every game the schedule lists for the day before `today`.
///
/// `schedule` is expected to be filtered to the followed team already.
#[must_use]
pub fn analyze_past_games(schedule: &Schedule, today: NaiveDate) -> Vec<PastGame> {
    let yesterday = today - Days::new(1);
    let games = schedule.games_on(yesterday);

    if games.is_empty() {
        info!(yesterday = %yesterday, "No game played yesterday");
    } else {
        info!(date = %yesterday, games = games.len(), "Analyzing yesterday's games");
    }

    games.iter().map(past_game).collect()
}

fn past_game(game: &Game) -> PastGame {
    let home = &game.teams.home;
    let away = &game.teams.away;

    match game.status_kind() {
        GameStatus::Postponed => {
            let reason = if game.status.reason.trim().is_empty() {
                UNKNOWN_POSTPONE_REASON.to_string()
            } else {
                game.status.reason.clone()
            };
            // only the reason is meaningful; venue and sides stay empty
            return PastGame {
                game_pk: game.game_pk,
                postpone_reason: reason,
                unfinished_state: String::new(),
                venue: Venue::default(),
                is_winner_home: false,
                is_tie: false,
                winner: GameTeam::default(),
                loser: GameTeam::default(),
                linescore: None,
            };
        }
        GameStatus::Scheduled => {
            // suspended or still live: no decision, home side sits in `winner`
            return PastGame {
                game_pk: game.game_pk,
                postpone_reason: String::new(),
                unfinished_state: unfinished_state(game),
                venue: game.venue.clone(),
                is_winner_home: true,
                is_tie: false,
                winner: home.clone(),
                loser: away.clone(),
                linescore: None,
            };
        }
        GameStatus::Final => {}
    }

    // Winner flag first; a final without one goes to the higher score, and
    // equal scores are a tie with the home side in the winner slot.
    let (is_winner_home, is_tie) = if home.is_winner {
        (true, false)
    } else if away.is_winner || away.score > home.score {
        (false, false)
    } else {
        (true, home.score == away.score)
    };

    let (winner, loser) = if is_winner_home {
        (home.clone(), away.clone())
    } else {
        (away.clone(), home.clone())
    };

    PastGame {
        game_pk: game.game_pk,
        postpone_reason: String::new(),
        unfinished_state: String::new(),
        venue: game.venue.clone(),
        is_winner_home,
        is_tie,
        winner,
        loser,
        linescore: None,
    }
}

fn unfinished_state(game: &Game) -> String {
    [&game.status.detailed_state, &game.status.abstract_game_state]
        .into_iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_GAME_STATE)
        .to_string()
}

/// One slot per day from `today` through `today + 7`; days without games are empty.
#[must_use]
pub fn analyze_future_games(
    schedule: &Schedule,
    today: NaiveDate,
    my_team_id: i64,
    teams: &TeamTable,
    tz: Tz,
) -> [FutureDay; FUTURE_DAYS] {
    let days: [FutureDay; FUTURE_DAYS] = std::array::from_fn(|offset| {
        let date = today + Days::new(offset as u64);
        let games = schedule
            .games_on(date)
            .iter()
            .map(|g| future_game(g, my_team_id, teams, tz))
            .collect();
        FutureDay {
            day_abbr: day_abbr(date),
            date,
            games,
        }
    });

    let days_with_games = days.iter().filter(|d| !d.games.is_empty()).count();
    info!(days_with_games, "Upcoming games analyzed");

    days
}

fn future_game(game: &Game, my_team_id: i64, teams: &TeamTable, tz: Tz) -> FutureGame {
    let is_my_team_home = game.teams.home.team.id == my_team_id;
    let opponent = if is_my_team_home {
        &game.teams.away
    } else {
        &game.teams.home
    };

    FutureGame {
        game_time_local: game.game_date.with_timezone(&tz).format("%H:%M").to_string(),
        is_my_team_home,
        against_abbr: teams.lookup(opponent.team.id).abbreviation,
    }
}

fn day_abbr(date: NaiveDate) -> String {
    date.format("%a").to_string().chars().take(2).collect()
}
