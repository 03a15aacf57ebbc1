use maud::{Markup, html};

use crate::model::{LinescoreRow, LinescoreTable};

#[must_use]
pub fn render_linescore(table: &LinescoreTable) -> Markup {
    let innings = table.away.innings.len().max(table.home.innings.len());

    html! {
        table class="linescore" {
            thead {
                tr {
                    th {}
                    @for inning in 1..=innings {
                        th { (inning) }
                    }
                    th { "R" }
                    th { "H" }
                    th { "E" }
                }
            }
            tbody {
                (linescore_row(&table.away, innings))
                (linescore_row(&table.home, innings))
            }
        }
    }
}

fn linescore_row(row: &LinescoreRow, innings: usize) -> Markup {
    html! {
        tr {
            td class="abbr" { (row.abbr) }
            @for idx in 0..innings {
                @match row.innings.get(idx) {
                    Some(Some(runs)) => td { (runs) },
                    // home side didn't need its last at-bat
                    Some(None) => td { "x" },
                    None => td {},
                }
            }
            td class="total" { (row.runs) }
            td class="total" { (row.hits) }
            td class="total" { (row.errors) }
        }
    }
}
