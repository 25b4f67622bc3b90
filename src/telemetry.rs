use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};
use tracing_tree::HierarchicalLayer;

use crate::config::LogFormat;

/// Installs the global subscriber. `RUST_LOG` filters, defaulting to `info`.
///
/// When Sentry is enabled its layer turns error events into Sentry issues and the
/// rest into breadcrumbs.
pub fn init(format: LogFormat, sentry_enabled: bool) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Tree => HierarchicalLayer::new(2).with_targets(true).boxed(),
    };
    let sentry_layer = sentry_enabled.then(sentry_tracing::layer);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(sentry_layer)
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Starts the Sentry client if a DSN is configured. Keep the guard alive for the
/// lifetime of the process so pending events are flushed on exit.
pub fn init_sentry(dsn: Option<&str>) -> Option<sentry::ClientInitGuard> {
    dsn.map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    })
}
