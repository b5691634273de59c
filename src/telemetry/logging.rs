use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::Settings;
use crate::error::Error;

/// Initialize the logging system
///
/// Output goes to stderr; stdout is reserved for command output.
pub fn init_logging(settings: &Settings) -> Result<(), Error> {
    let log_level = settings.log_level()?;

    // Create environment filter
    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let result = if settings.telemetry.structured_logging {
        let fmt_layer = fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();

        Registry::default().with(filter).with(fmt_layer).try_init()
    } else {
        let fmt_layer = fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(true);

        Registry::default().with(filter).with(fmt_layer).try_init()
    };

    result.map_err(|e| Error::Internal(format!("Failed to set global default subscriber: {}", e)))
}
