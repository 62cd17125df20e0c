use eyre::Context;
use mumble_config::logging::Configuration;
use std::env;
use tracing::Dispatch;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    Layer, Registry,
};

fn filter(config: &Configuration) -> eyre::Result<Targets> {
    match env::var("RUST_LOG") {
        Ok(targets) => targets.parse().context("Failed to parse RUST_LOG value"),
        Err(..) => {
            let level: LevelFilter = config
                .level
                .parse()
                .context("Failed to parse the configured log level")?;

            Ok(Targets::default().with_default(level))
        }
    }
}

/// Build the dispatcher components log through
///
/// Disabled logging yields a dispatcher that drops everything
pub fn dispatch(config: &Configuration) -> eyre::Result<Dispatch> {
    if !config.enabled {
        return Ok(Dispatch::none());
    }

    let subscriber = Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(filter(config)?),
    );

    Ok(Dispatch::new(subscriber))
}

/// Install the dispatcher as the process-wide default
pub fn initialise(config: &Configuration) -> eyre::Result<Dispatch> {
    let dispatch = dispatch(config)?;
    tracing::dispatcher::set_global_default(dispatch.clone())
        .context("Couldn't install the global tracing subscriber")?;

    Ok(dispatch)
}

#[cfg(test)]
mod test {
    use super::dispatch;
    use mumble_config::logging::Configuration;

    #[test]
    fn disabled_is_noop() {
        let dispatch = dispatch(&Configuration::default()).unwrap();
        assert!(dispatch.is::<tracing::subscriber::NoSubscriber>());
    }

    #[test]
    fn invalid_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let config = Configuration {
            enabled: true,
            level: "loudest".into(),
        };
        assert!(dispatch(&config).is_err());
    }
}
