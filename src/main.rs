// Entrypoint for the NoteKeeper demo client.
// Keeps `main` small: load config, build the client and hand both to the
// driver, then turn its outcome into the exit status.

use std::io;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use notekeeper_client::{app, config::Config, NoteClient};

/// Use RUST_LOG to control log level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::from_env();
    let mut client = NoteClient::new(&config.base_url)?;

    let stdout = io::stdout();
    let outcome = app::run(&mut client, &config.credentials, &mut stdout.lock())?;

    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
