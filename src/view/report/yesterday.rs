use maud::{Markup, html};

use crate::model::{GameTeam, PastGame, Report};
use crate::view::report::linescore::render_linescore;

#[must_use]
pub fn render_yesterday(report: &Report) -> Markup {
    html! {
        h3 { "Yesterday" }
        @if report.past_games.is_empty() {
            p { "No " (report.my_team_name) " game yesterday." }
        }
        @for game in &report.past_games {
            (render_past_game(game))
        }
        p {
            a href=(report.link) { "Watch on baseball.theater" }
        }
    }
}

fn render_past_game(game: &PastGame) -> Markup {
    html! {
        div class="past-game" {
            @if game.is_postponed() {
                p { "Postponed due to " (game.postpone_reason) }
            } @else {
                p {
                    @if game.is_unfinished() {
                        "Not final (" (game.unfinished_state) "): "
                    } @else if game.is_tie {
                        "Tie: "
                    } @else {
                        "Final: "
                    }
                    (team_line(&game.winner)) ", " (team_line(&game.loser))
                    @if !game.venue.name.is_empty() {
                        " at " (game.venue.name)
                    }
                }
                @if let Some(linescore) = &game.linescore {
                    (render_linescore(linescore))
                }
            }
        }
    }
}

fn team_line(team: &GameTeam) -> Markup {
    html! {
        b { (team.team.name) " " (team.score) }
        " (" (team.league_record.wins) "-" (team.league_record.losses) ")"
    }
}
