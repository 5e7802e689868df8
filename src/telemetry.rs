use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Supported
/// formats are `pretty`, `compact` and `full`; anything else falls back
/// to `full`.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&settings.level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true);

    let result = match settings.format.as_str() {
        "pretty" => subscriber.pretty().try_init(),
        "compact" => subscriber.compact().try_init(),
        _ => subscriber.try_init(),
    };

    result.map_err(TelemetryError::Subscriber)
}

fn parse_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("helper_match=trace,info").is_ok());

        let err = parse_filter("helper_match=loud").unwrap_err();
        assert!(err.to_string().contains("helper_match=loud"));
    }

    #[test]
    fn test_init_only_once() {
        let settings = LoggingSettings::default();
        let _ = init(&settings);
        assert!(matches!(init(&settings), Err(TelemetryError::Subscriber(_))));
    }
}
