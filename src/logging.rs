//! Tracing setup shared by the binaries

use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::LoggingConfig;

/// Install the global subscriber, logging to stdout.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &LoggingConfig) {
    init_with_writer(config, std::io::stdout);
}

/// Install the global subscriber, logging to `writer`
pub fn init_with_writer<W>(config: &LoggingConfig, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let (pretty, json) = if config.is_json() {
        (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(writer)),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_writer(writer)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

fn default_directive(config: &LoggingConfig) -> String {
    format!("inflamm={level},tower_http={level}", level = config.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        assert_eq!(default_directive(&config), "inflamm=debug,tower_http=debug");
    }
}
