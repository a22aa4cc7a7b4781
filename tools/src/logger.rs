use anyhow::Context;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt::Layer,
    prelude::*,
};

/// Holds `EnvFilter` directives, e.g. `TOX_LOG=numerica=debug`.
pub const LOG_ENV: &str = "TOX_LOG";

/// Filter built from `TOX_LOG` directives, `warn` everywhere when unset.
pub fn filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives {
        Some(d) => EnvFilter::try_new(d),
        None => Ok(EnvFilter::new("warn")),
    }
}

/// Installs a stderr subscriber. `log` records from the libraries are
/// forwarded to it.
pub fn init() -> anyhow::Result<()> {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = filter(directives.as_deref())
        .with_context(|| format!("invalid {} directives", LOG_ENV))?;

    tracing_subscriber::registry()
        .with(Layer::new()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
        )
        .try_init()
        .context("cannot install logger")?;
    Ok(())
}
