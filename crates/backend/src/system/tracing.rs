use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise tracing.
///
/// Logs go to:
/// - stderr (with colours), keeping stdout for the report
/// - logs/backend.log next to the executable (without colours)
pub fn initialize() -> anyhow::Result<()> {
    let log_dir = match std::env::current_exe() {
        Ok(exe_path) => match exe_path.parent() {
            Some(exe_dir) => exe_dir.join("logs"),
            None => std::path::Path::new("target").join("logs"),
        },
        Err(_) => std::path::Path::new("target").join("logs"),
    };

    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e))?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e))?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn".into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!("Logging to {} (level: {})", log_file_path.display(), log_level);
    Ok(())
}
