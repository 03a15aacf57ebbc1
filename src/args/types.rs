use chrono_tz::Tz;
use clap::Parser;

use crate::controller::mlb::client::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interface and port to listen on
    #[arg(long, env = "MLB_RSS_ADDR", value_name = "ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Hour of the day (0-23, feed timezone) to refresh the report
    #[arg(
        long,
        env = "MLB_RSS_REFRESH_HOUR",
        value_name = "HOUR",
        default_value = "7",
        value_parser = crate::args::validation::parse_refresh_hour
    )]
    pub refresh_hour: u32,

    /// Team to follow: id, abbreviation, full name or club name
    #[arg(long, env = "MLB_RSS_MY_TEAM", value_name = "TEAM", default_value = "BAL")]
    pub my_team: String,

    /// IANA timezone used for dates and game times in the feed
    #[arg(
        long,
        env = "MLB_RSS_TIMEZONE",
        value_name = "TZ",
        default_value = "America/New_York",
        value_parser = crate::args::validation::parse_timezone
    )]
    pub timezone: Tz,

    /// Skip fetching on every refresh; the last report keeps being served
    #[arg(long, env = "MLB_RSS_OFFSEASON", default_value_t = false)]
    pub offseason: bool,

    /// Emit json log lines
    #[arg(long, env = "MLB_RSS_JSON_LOG", default_value_t = false)]
    pub json_log: bool,

    #[arg(long, env = "MLB_RSS_API_BASE", value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, env = "MLB_RSS_FETCH_TIMEOUT_SECS", value_name = "SECS", default_value = "5")]
    pub fetch_timeout_secs: u64,

    /// How long in-flight requests get to finish on shutdown
    #[arg(long, env = "MLB_RSS_SHUTDOWN_GRACE_SECS", value_name = "SECS", default_value = "3")]
    pub shutdown_grace_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub addr: String,
    pub refresh_hour: u32,
    pub my_team: String,
    pub timezone: Tz,
    pub offseason: bool,
    pub json_log: bool,
    pub api_base: String,
    pub fetch_timeout_secs: u64,
    pub shutdown_grace_secs: u64,
}
