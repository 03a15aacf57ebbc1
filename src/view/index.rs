use maud::{Markup, html};

use crate::model::Report;
use crate::view::report::render_report;

pub const DEFAULT_INDEX_TITLE: &str = "MLB RSS";

#[must_use]
pub fn render_index(report: &Report) -> Markup {
    page(
        &report.headline,
        html! {
            h2 { (report.headline) }
            (render_report(report))
            p class="generated" {
                "Generated " (report.when.format("%Y-%m-%d %H:%M %Z"))
            }
        },
    )
}

/// Shown until the first refresh has succeeded.
#[must_use]
pub fn render_not_ready() -> Markup {
    page(
        DEFAULT_INDEX_TITLE,
        html! {
            h2 { "Report not yet available" }
            p { "The first refresh hasn't finished yet. Try again shortly." }
        },
    )
}

fn page(title: &str, body: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            link rel="alternate" type="application/rss+xml" title=(DEFAULT_INDEX_TITLE) href="rss.xml";
            title { (title) }
        }
        body {
            (body)
        }
    }
}
