//! HandFlow - Hand-Gesture Media Control
//!
//! Reads landmark frames from an external hand tracker, classifies them
//! into gestures, and drives playback, volume and brightness through an
//! action performer. Optionally serves a web feed of emitted gestures.

#![warn(missing_docs)]

mod config;
mod demo;
mod logging_setup;

use anyhow::{Context, Result};
use config::{AppConfig, SourceConfig};
use handflow_control::{
    spawn_source, Dispatcher, JsonlSource, LogObserver, LogPerformer, ScriptedSource, Session,
    WebFeed,
};
use handflow_core::GestureClassifier;
use std::time::Duration;
use tracing::{error, info};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "handflow.toml".to_string());
    let config = AppConfig::load(&config_path)?;

    let _log_guard = logging_setup::init(&config.log)?;

    info!(version = env!("CARGO_PKG_VERSION"), "HandFlow starting");

    let classifier = GestureClassifier::new(config.classifier.clone());
    let dispatcher = Dispatcher::with_steps(
        Box::new(LogPerformer),
        config.dispatch.seek_step,
        config.dispatch.volume_step,
    );
    let mut session = Session::new(classifier, dispatcher);
    session.add_observer(Box::new(LogObserver));

    if config.web.enabled {
        let feed = WebFeed::new(config.web.feed.clone());
        session.add_observer(Box::new(feed.observer()));

        // The session loop is synchronous; the feed gets its own runtime
        // on its own thread.
        std::thread::Builder::new()
            .name("web-feed".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(error) => {
                        error!(%error, "failed to build web feed runtime");
                        return;
                    }
                };
                if let Err(error) = runtime.block_on(feed.serve()) {
                    error!(%error, "web feed stopped");
                }
            })
            .context("failed to spawn web feed thread")?;
    }

    let frames = match &config.source {
        SourceConfig::Stdin => spawn_source(JsonlSource::from_stdin()),
        SourceConfig::File { path } => spawn_source(JsonlSource::from_path(path)),
        SourceConfig::Demo => spawn_source(ScriptedSource::new(
            demo::demo_frames(),
            Duration::from_millis(33),
        )),
    }
    .context("failed to start landmark source")?;

    session.run(&frames);

    info!("session ended");
    Ok(())
}
