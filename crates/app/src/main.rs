//! `faraway` — an interactive packing list on the terminal.

use std::io;

use anyhow::Context;

use faraway_app::{AppConfig, Dispatcher, Session};

fn main() -> anyhow::Result<()> {
    faraway_observability::init();

    let config = AppConfig::from_env();
    tracing::info!(seed = config.seed, sort_by = %config.sort_by, "starting session");

    let dispatcher = Dispatcher::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(dispatcher, stdin.lock(), stdout.lock());

    session.run().context("terminal session failed")?;
    Ok(())
}
