use thiserror::Error;
use tracing::{level_filters::LevelFilter, subscriber::SetGlobalDefaultError};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

#[derive(Debug, Error)]
pub enum TracerError {
    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] SetGlobalDefaultError),
}

pub struct TracerOptions {
    /// Used when `RUST_LOG` is unset or does not parse.
    pub default_level: LevelFilter,
}

impl TracerOptions {
    pub fn new(default_level: LevelFilter) -> Self {
        Self { default_level }
    }
}

/// This object initialises the stderr tracer, given a TracerOptions struct.
/// Stdout is left free for component output.
pub struct TracerEngine {
    service_name: String,
}

impl TracerEngine {
    /// Initialises the stderr tracer for the crate
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the component, attached to the root span.
    /// #Returns
    /// An instance of TracerEngine, or an error if a subscriber was already set.
    pub fn new(options: TracerOptions, service_name: &str) -> Result<Self, TracerError> {
        let stderr_tracer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        let log_filter = EnvFilter::builder()
            .with_default_directive(options.default_level.into())
            .from_env_lossy();

        let subscriber =
            tracing_subscriber::Registry::default().with(stderr_tracer.with_filter(log_filter));

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(Self {
            service_name: service_name.to_owned(),
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Creates the span under which the whole component runs.
    pub fn root_span(&self) -> tracing::Span {
        tracing::info_span!("component", service = %self.service_name)
    }
}
