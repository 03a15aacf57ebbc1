use maud::{Markup, html};

use crate::model::{FutureDay, FutureGame, Report};

#[must_use]
pub fn render_upcoming(report: &Report) -> Markup {
    html! {
        h3 { "Upcoming (" (report.timezone) ")" }
        table class="upcoming" {
            tbody {
                @for day in &report.future_days {
                    (render_future_day(day))
                }
            }
        }
    }
}

fn render_future_day(day: &FutureDay) -> Markup {
    html! {
        tr {
            td class="day" { (day.day_abbr) }
            td {
                @if day.games.is_empty() {
                    "-"
                }
                @for (idx, game) in day.games.iter().enumerate() {
                    @if idx > 0 { ", " }
                    (future_game_label(game))
                }
            }
        }
    }
}

/// `vs NYY 19:05` at home, `@ NYY 19:05` away.
#[must_use]
pub fn future_game_label(game: &FutureGame) -> String {
    let prefix = if game.is_my_team_home { "vs" } else { "@" };
    format!("{prefix} {} {}", game.against_abbr, game.game_time_local)
}
