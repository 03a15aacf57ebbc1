use chrono_tz::Tz;

/// # Errors
///
/// Will return `Err` if `value` is not an IANA timezone name
pub fn parse_timezone(value: &str) -> Result<Tz, String> {
    value
        .trim()
        .parse::<Tz>()
        .map_err(|_| format!("'{value}' is not a known IANA timezone, e.g. America/New_York."))
}

/// # Errors
///
/// Will return `Err` if `value` is not an hour in 0..=23
pub fn parse_refresh_hour(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(hour) if hour <= 23 => Ok(hour),
        _ => Err(format!("The refresh hour '{value}' must be between 0 and 23.")),
    }
}

/// # Errors
///
/// Will return `Err` if `value` is not an http(s) url
pub fn check_api_base(value: &str) -> Result<(), String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("The api base '{value}' must start with http:// or https://."))
    }
}
