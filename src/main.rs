use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use mlb_rss::AppError;
use mlb_rss::args;
use mlb_rss::controller::cache::ReportCache;
use mlb_rss::controller::feed;
use mlb_rss::controller::mlb::{MlbApi, StatsApiClient};
use mlb_rss::controller::report::{ReportGenerator, refresh_tick};
use mlb_rss::controller::scheduler::spawn_daily;
use mlb_rss::logging::init_logging;
use mlb_rss::model::TeamTable;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to parse config: {e}");
            std::process::exit(2);
        }
    };
    init_logging(args.json_log);

    let teams = Arc::new(TeamTable::embedded()?);
    let Some(my_team) = teams.find(&args.my_team) else {
        let err = AppError::TeamNotFound(args.my_team.clone());
        error!(team = %args.my_team, err = %err, "Failed to find team");
        std::process::exit(1);
    };
    info!(team = %my_team.name, id = my_team.id, tz = %args.timezone, "Following team");

    let api: Arc<dyn MlbApi> = Arc::new(StatsApiClient::new(
        &args.api_base,
        Duration::from_secs(args.fetch_timeout_secs),
    )?);
    let generator = Arc::new(ReportGenerator::new(my_team, teams, api, args.timezone));
    let cache = Arc::new(ReportCache::new());

    let token = CancellationToken::new();
    let scheduler = {
        let generator = Arc::clone(&generator);
        let cache = Arc::clone(&cache);
        let tz = args.timezone;
        let offseason = args.offseason;
        spawn_daily(args.refresh_hour, tz, token.clone(), move || {
            let generator = Arc::clone(&generator);
            let cache = Arc::clone(&cache);
            async move {
                let now = Utc::now().with_timezone(&tz);
                refresh_tick(&generator, &cache, offseason, now).await;
            }
        })
    };

    let cache_data = Data::from(cache);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(cache_data.clone())
            .configure(feed::configure)
            .service(Files::new("/static", "./static"))
    })
    .disable_signals()
    .shutdown_timeout(args.shutdown_grace_secs)
    .bind(args.addr.as_str())?
    .run();
    let server_handle = server.handle();
    let server_task = actix_web::rt::spawn(server);

    info!(addr = %args.addr, "mlb-rss ready");
    shutdown_signal().await;
    info!("Shutting down");

    token.cancel();
    server_handle.stop(true).await;

    if let Err(e) = scheduler.await {
        error!(err = %e, "Scheduler task failed");
    }
    match server_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(err = %e, "Http server failed"),
        Err(e) => error!(err = %e, "Http server task failed"),
    }

    info!("Shutdown finished");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(err = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(err = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
