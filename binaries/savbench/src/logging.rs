use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initializes the `tracing` logger.
pub(crate) fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .init();

    tracing::debug!("Log level: {level}");
}
