use maud::{PreEscaped, html};

use crate::model::{BASEBALL_THEATER_DATE_FORMAT, Report};
use crate::view::report::render_report;

pub const FEED_TITLE: &str = "MLB RSS";
pub const FEED_LINK: &str = "https://baseball.theater";
pub const FEED_DESCRIPTION: &str = "Feed generated from statsapi.mlb.com";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Stable per-day item id, so readers treat a re-generated report as the same item.
#[must_use]
pub fn feed_guid(report: &Report) -> String {
    format!(
        "mlb-rss-{}",
        report.when.format(BASEBALL_THEATER_DATE_FORMAT)
    )
}

/// RSS 2.0 document with a single item for `report`. The html body is
/// carried escaped in the item description.
#[must_use]
pub fn render_feed(report: &Report) -> String {
    let body = render_report(report).into_string();

    html! {
        (PreEscaped(XML_DECLARATION))
        rss version="2.0" {
            channel {
                title { (FEED_TITLE) }
                link { (FEED_LINK) }
                description { (FEED_DESCRIPTION) }
                item {
                    title { (report.headline) }
                    link { (report.link) }
                    description { (body) }
                    guid isPermaLink="false" { (feed_guid(report)) }
                    pubDate { (report.when.to_rfc2822()) }
                }
            }
        }
    }
    .into_string()
}
