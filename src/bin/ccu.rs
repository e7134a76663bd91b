use std::error::Error;
use std::io::{self, IsTerminal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ccu::constants::ENV_LOG;
use ccu::formatting::{set_color_enabled, usage_summary};
use ccu::{Settings, UpdateOutcome, Updater};

// Best-effort: every failure is logged and the exit status stays 0
fn main() {
    // Diagnostics go to stderr, so color follows stderr rather than stdout
    let color = io::stderr().is_terminal();
    set_color_enabled(color);
    setup_logging(color);

    info!("Usage auto-update");

    let settings = Settings::from_env();
    let updater = Updater::from_settings(settings);

    match updater.run() {
        Ok(UpdateOutcome::Updated(snapshot)) => {
            info!("Usage updated: {}", usage_summary(&snapshot));
        }
        Ok(UpdateOutcome::NotHostContext { .. }) | Ok(UpdateOutcome::NoEstimate) => {
            warn!("Could not extract usage - keeping last values");
        }
        Err(err) => {
            warn!("{}", error_chain(&err));
            warn!("Could not extract usage - keeping last values");
        }
    }
}

fn setup_logging(ansi: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("ccu=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(io::stderr),
        )
        .init();
}

// "outer: inner: root" for a thiserror chain
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
