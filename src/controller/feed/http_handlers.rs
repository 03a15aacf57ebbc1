use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use serde_json::json;
use tracing::{error, warn};

use crate::controller::cache::ReportCache;
use crate::view::index::{render_index, render_not_ready};
use crate::view::report::render_json;
use crate::view::rss::render_feed;

pub const NOT_READY: &str = "report not yet available";

/// Routes served from the report cache. Handlers never touch the network.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/rss.xml", web::get().to(rss_feed))
        .route("/report.json", web::get().to(report_json))
        .route("/health", web::get().to(HttpResponse::Ok));
}

pub async fn rss_feed(cache: Data<ReportCache>) -> HttpResponse {
    let Some(report) = cache.get() else {
        warn!("Cache not populated yet");
        return HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(NOT_READY);
    };

    HttpResponse::Ok()
        .content_type("application/rss+xml")
        .body(render_feed(&report))
}

pub async fn index(cache: Data<ReportCache>) -> HttpResponse {
    match cache.get() {
        Some(report) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_index(&report).into_string()),
        None => HttpResponse::NotFound()
            .content_type("text/html")
            .body(render_not_ready().into_string()),
    }
}

pub async fn report_json(cache: Data<ReportCache>) -> HttpResponse {
    let Some(report) = cache.get() else {
        return HttpResponse::NotFound().json(json!({"error": NOT_READY}));
    };

    match render_json(&report) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            error!(err = %e, "Failed to render report json");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
