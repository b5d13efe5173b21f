//! Logging Infrastructure
//!
//! Structured logging for the listing core and its host:
//! - Console output, pretty in development and JSON in production
//! - Optional daily rotating files split by target:
//!   `app/` (deleted after [`APP_LOG_RETENTION_DAYS`]), `audit/` and
//!   `security/` (kept)

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, filter::filter_fn, fmt, prelude::*};

/// Days an application log file is kept
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

const AUDIT_TARGET: &str = "audit";
const SECURITY_TARGET: &str = "security";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Date encoded in a rotated application log name (`app.YYYY-MM-DD.log`)
fn app_log_date(name: &str) -> Option<NaiveDate> {
    let date = name.strip_prefix("app.")?.strip_suffix(".log")?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Delete application log files older than the retention window
///
/// Audit and security logs are never touched. Returns the number of
/// deleted files.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = Local::now() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let mut deleted = 0;

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(date) = app_log_date(name) else {
            continue;
        };
        if let Some(day_start) = Local.from_local_datetime(&date.and_time(NaiveTime::MIN)).single()
            && day_start < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            deleted += 1;
        }
    }

    Ok(deleted)
}

/// Daily appender writing `<prefix>.YYYY-MM-DD.log`
fn daily_appender(dir: &Path, prefix: &str) -> anyhow::Result<RollingFileAppender> {
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)?)
}

/// Level filter; `RUST_LOG` wins over the configured level
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// JSON file layers for app, audit and security logs
fn file_layers(log_dir: &Path, level: &str) -> anyhow::Result<Vec<BoxedLayer>> {
    let app_dir = log_dir.join("app");
    let audit_dir = log_dir.join(AUDIT_TARGET);
    let security_dir = log_dir.join(SECURITY_TARGET);
    for dir in [&app_dir, &audit_dir, &security_dir] {
        fs::create_dir_all(dir)?;
    }

    let app_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::sync::Mutex::new(daily_appender(&app_dir, "app")?))
        .with_filter(filter_fn(|meta| {
            meta.target() != AUDIT_TARGET && meta.target() != SECURITY_TARGET
        }))
        .with_filter(level_filter(level))
        .boxed();

    let audit_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::sync::Mutex::new(daily_appender(&audit_dir, AUDIT_TARGET)?))
        .with_filter(filter_fn(|meta| meta.target() == AUDIT_TARGET))
        .boxed();

    let security_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::sync::Mutex::new(daily_appender(
            &security_dir,
            SECURITY_TARGET,
        )?))
        .with_filter(filter_fn(|meta| meta.target() == SECURITY_TARGET))
        .boxed();

    Ok(vec![app_layer, audit_layer, security_layer])
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON console output (production)
/// * `log_dir` - Optional directory for rotating file logs
///
/// # Examples
/// ```no_run
/// use listing_core::init_logger_with_file;
///
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let console_layer: BoxedLayer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(level_filter(level))
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(level_filter(level))
            .boxed()
    };

    let mut layers = vec![console_layer];
    if let Some(dir) = log_dir {
        layers.extend(file_layers(Path::new(dir), level)?);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    if let Some(dir) = log_dir
        && let Ok(handle) = tokio::runtime::Handle::try_current()
    {
        handle.spawn(periodic_cleanup(PathBuf::from(dir)));
    }

    Ok(())
}

/// Periodic cleanup task - runs every hour
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

/// Initialize console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Audit log helper - records administrative changes
///
/// Written to the `audit` target, which is kept permanently when file
/// logging is enabled.
///
/// # Examples
/// ```no_run
/// listing_core::audit_log!("root", "assign_role", "actor:u1", "role=admin");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            details = $details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}
