//! Real-time driver for the monitoring core.
//!
//! Owns the actual timer: a tokio interval advances the monitor by one period
//! per tick and renders whatever it emitted. The core itself stays on virtual
//! time, so the feed is reproducible from the seed alone.
//!
//! Configuration is taken from the environment:
//! - `MONITOR_SEED` - RNG seed (default: current unix time)
//! - `MONITOR_PERIOD_MS` - emission period (default: 3000)
//! - `MONITOR_CAPACITY` - retained events (default: 50)
//! - `MONITOR_RUN_MS` - stop after this long (default: run until Ctrl+C)
//! - `MONITOR_JSON` - set to emit events as JSON lines instead of log lines

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Duration as ChronoDuration, Local};
use fraud_monitor_core_rs::{LiveEvent, Monitor, MonitorConfig};
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Map a virtual event timestamp onto the wall clock of this run.
fn wall_time(started_at: DateTime<Local>, timestamp_ms: u64) -> DateTime<Local> {
    started_at + ChronoDuration::milliseconds(timestamp_ms as i64)
}

fn render_event(event: &LiveEvent, started_at: DateTime<Local>, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("failed to serialize event {}: {}", event.id, e),
        }
    } else {
        info!(
            "[{}] {} {} account={} {}",
            event.severity.label(),
            wall_time(started_at, event.timestamp_ms).format("%H:%M:%S"),
            event.message,
            event.account,
            event.detail
        );
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing. Log lines go to stderr so JSON event output on
    // stdout stays parseable for piped consumers.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let default_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1);

    let defaults = MonitorConfig::default();
    let config = MonitorConfig {
        period_ms: env_u64("MONITOR_PERIOD_MS", defaults.period_ms),
        capacity: env_u64("MONITOR_CAPACITY", defaults.capacity as u64) as usize,
        rng_seed: env_u64("MONITOR_SEED", default_seed),
        accounts: defaults.accounts,
    };
    let json_output = std::env::var("MONITOR_JSON").map(|v| v != "0").unwrap_or(false);
    let run_ms = env_u64("MONITOR_RUN_MS", 0);

    let mut monitor = match Monitor::new(config.clone()) {
        Ok(m) => m,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let started_at = Local::now();
    monitor.start();
    info!(
        "monitoring started: period={}ms seed={} capacity={}",
        config.period_ms, config.rng_seed, config.capacity
    );

    let mut interval = tokio::time::interval(Duration::from_millis(config.period_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick resolves immediately; consume it so the first
    // event appears only after one full period, matching the core.
    interval.tick().await;

    let run_deadline = async {
        if run_ms > 0 {
            tokio::time::sleep(Duration::from_millis(run_ms)).await;
        } else {
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(run_deadline);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let emitted = monitor.advance(config.period_ms);
                let new_events: Vec<LiveEvent> =
                    monitor.log().iter().take(emitted as usize).cloned().collect();
                // Newest-first in the log; print oldest of the batch first.
                for event in new_events.iter().rev() {
                    render_event(event, started_at, json_output);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
            _ = &mut run_deadline => {
                info!("Run duration elapsed, shutting down...");
                break;
            }
        }
    }

    monitor.stop();
    let snapshot = monitor.snapshot();
    info!(
        "monitoring stopped: {} generated, {} retained (critical={} high={} medium={} low={})",
        snapshot.total_generated,
        snapshot.events.len(),
        snapshot.counts.critical,
        snapshot.counts.high,
        snapshot.counts.medium,
        snapshot.counts.low
    );
}
