use crate::core::config::{LogFormat, LoggingConfig};
use anyhow::{anyhow, Result};
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Output layer for the configured format
fn output_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Console => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(output_layer(config.format))
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::subscriber::with_default;

    #[test]
    fn test_both_formats_build_a_subscriber() {
        for format in [LogFormat::Console, LogFormat::Json] {
            let subscriber = tracing_subscriber::registry().with(output_layer(format));
            with_default(subscriber, || tracing::info!(?format, "layer ready"));
        }
    }
}
