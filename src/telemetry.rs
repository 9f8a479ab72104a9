use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Compose the log filter and formatter into a `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `env_filter` when it is set.
pub fn get_subscriber(
    env_filter: &str,
    sink: impl for<'a> MakeWriter<'a> + Send + Sync + 'static,
) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = fmt::layer().with_target(false).with_writer(sink);
    Registry::default().with(env_filter).with(formatting_layer)
}

/// Register a subscriber as global default to process span data.
///
/// Records emitted through `log` (as reqwest does) are forwarded to the
/// subscriber. Fails if a logger or subscriber is already installed.
pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
