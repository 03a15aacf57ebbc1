use chrono::NaiveDate;
use tracing::warn;

use crate::model::{PastGame, TeamInfo};

/// Returned when more games were played yesterday than a doubleheader allows.
pub const HEADLINE_ANOMALY: &str = "error";

/// Summarise yesterday for the feed item title.
#[must_use]
pub fn make_headline(past_games: &[PastGame], today: NaiveDate, my_team: &TeamInfo) -> String {
    let name = &my_team.name;

    match past_games {
        [] => format!("Baseball report {}", today.format("%A %Y-%m-%d")),
        [game] => {
            if game.is_postponed() {
                format!("Game was postponed due to {}", game.postpone_reason)
            } else if game.is_unfinished() {
                format!(
                    "The {name} game is not final ({}), {} to {}",
                    game.unfinished_state,
                    my_score(game, my_team.id),
                    their_score(game, my_team.id)
                )
            } else if game.is_tie || game.winner.score == game.loser.score {
                format!(
                    "The {name} tie, {} to {}",
                    game.winner.score, game.loser.score
                )
            } else if game.winner.team.id == my_team.id {
                format!(
                    "The {name} win! {} to {}",
                    game.winner.score, game.loser.score
                )
            } else {
                format!(
                    "The {name} lose, {} to {}",
                    game.loser.score, game.winner.score
                )
            }
        }
        [_, _] => {
            let (wins, losses) = doubleheader_record(past_games, my_team.id);
            format!("Doubleheader! The {name} go {wins} - {losses}")
        }
        _ => {
            warn!(
                past_games = past_games.len(),
                "Failed to make headline, too many games played"
            );
            HEADLINE_ANOMALY.to_string()
        }
    }
}

// postponed, unfinished and tied games count toward neither side
fn doubleheader_record(past_games: &[PastGame], my_team_id: i64) -> (usize, usize) {
    past_games
        .iter()
        .filter(|g| g.is_decided() && !g.is_tie)
        .fold((0, 0), |(wins, losses), g| {
            if g.winner.team.id == my_team_id {
                (wins + 1, losses)
            } else if g.loser.team.id == my_team_id {
                (wins, losses + 1)
            } else {
                (wins, losses)
            }
        })
}

fn my_score(game: &PastGame, my_team_id: i64) -> i32 {
    if game.winner.team.id == my_team_id {
        game.winner.score
    } else {
        game.loser.score
    }
}

fn their_score(game: &PastGame, my_team_id: i64) -> i32 {
    if game.winner.team.id == my_team_id {
        game.loser.score
    } else {
        game.winner.score
    }
}
