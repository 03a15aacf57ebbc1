use maud::{Markup, html};

use crate::error::AppError;
use crate::model::Report;
use crate::view::report::{render_upcoming, render_yesterday};

/// Report body shared by the web page and the feed item.
#[must_use]
pub fn render_report(report: &Report) -> Markup {
    html! {
        div class="report" {
            (render_yesterday(report))
            (render_upcoming(report))
        }
    }
}

/// # Errors
///
/// Will return `Err` if the report cannot be serialised
pub fn render_json(report: &Report) -> Result<String, AppError> {
    serde_json::to_string_pretty(report).map_err(|e| AppError::Render(e.to_string()))
}
