use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::CliError;
use crate::settings::LogFormat;

/// Filter used when `RUST_LOG` is unset. Progress goes to stdout through the
/// summary reporter, so diagnostics stay quiet by default.
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging(format: LogFormat) -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|err| CliError::Logging(err.to_string()))
}
