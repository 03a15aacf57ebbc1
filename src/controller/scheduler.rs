use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Next `hour:00:00` in `now`'s zone strictly after `now`.
#[must_use]
pub fn next_fire(now: DateTime<Tz>, hour: u32) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    let candidate = local_at(tz, today, hour);
    if candidate > now {
        candidate
    } else {
        local_at(tz, today + Days::new(1), hour)
    }
}

/// Like `next_fire`, but never returns a time at or before `previous`.
///
/// The sleep runs on the monotonic clock, so the wall clock can still read
/// just before `previous` when it ends.
#[must_use]
pub fn next_fire_after(
    now: DateTime<Tz>,
    previous: Option<DateTime<Tz>>,
    hour: u32,
) -> DateTime<Tz> {
    let floor = previous.map_or(now, |prev| prev.max(now));
    next_fire(floor, hour)
}

fn local_at(tz: Tz, date: NaiveDate, hour: u32) -> DateTime<Tz> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    let naive = NaiveDateTime::new(date, time);
    // a DST gap swallows the hour; fire at the first instant after it
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// Run `callback` now and then daily at `hour` in `tz` until `token` is cancelled.
///
/// Cancellation is observed between ticks; a running callback is never interrupted.
pub fn spawn_daily<F, Fut>(
    hour: u32,
    tz: Tz,
    token: CancellationToken,
    mut callback: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut previous = None;
        loop {
            if token.is_cancelled() {
                break;
            }
            callback().await;

            let now = Utc::now().with_timezone(&tz);
            let next = next_fire_after(now, previous, hour);
            previous = Some(next);
            let wait = (next - now).to_std().unwrap_or_default();
            info!(next = %next, "Next refresh scheduled");

            tokio::select! {
                () = token.cancelled() => break,
                () = tokio::time::sleep(wait) => {}
            }
        }
        info!("Scheduler stopped");
    })
}
