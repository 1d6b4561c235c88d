// src/main.rs
//
// Line-delimited JSON request loop.
// Each stdin line is `{"action": ..., "body": {...}}`; each stdout line is
// the matching ResultStatus, in request order.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use workoutlog::application::{ApiRouter, AppState, ResultStatus};
use workoutlog::config::AppConfig;
use workoutlog::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use workoutlog::metrics::LogMetrics;

/// In-flight requests allowed ahead of the writer
const PENDING_RESPONSES: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION & LOGGING
    let config = AppConfig::load().context("loading configuration")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    // 2. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool(&config).context("opening database")?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn).context("checking database integrity")?;
        let stats = get_database_stats(&conn)?;
        log::info!(
            "Database ready: {} users, {} workouts, {} bytes ({} pages of {})",
            stats.user_count,
            stats.workout_count,
            stats.size_bytes,
            stats.page_count,
            stats.page_size
        );
    }

    // 3. APPLICATION STATE
    let metrics = Arc::new(LogMetrics::new());
    let state = AppState::new(pool, metrics.clone());
    let router = Arc::new(ApiRouter::new(&state));

    // 4. REQUEST LOOP
    let (tx, mut rx) = mpsc::channel::<JoinHandle<ResultStatus>>(PENDING_RESPONSES);

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(pending) = rx.recv().await {
            let status = pending.await?;
            let mut line = serde_json::to_string(&status)?;
            line.push('\n');
            stdout.write_all(line.as_bytes()).await?;
            stdout.flush().await?;
        }
        anyhow::Ok(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let router = router.clone();
        let pending = tokio::task::spawn_blocking(move || router.handle_line(&line));
        if tx.send(pending).await.is_err() {
            break;
        }
    }
    drop(tx);
    writer.await??;

    for (operation, counts) in metrics.snapshot() {
        log::info!(
            "{}: {} ok, {} failed",
            operation,
            counts.succeeded,
            counts.failed
        );
    }
    Ok(())
}
