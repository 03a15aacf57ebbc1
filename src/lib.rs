pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod feed;
    pub mod mlb;
    pub mod report;
    pub mod scheduler;
}
pub mod view {
    pub mod index;
    pub mod report;
    pub mod rss;
}
pub mod logging;

pub use controller::cache::ReportCache;
pub use error::AppError;
