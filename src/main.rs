mod drills;     // brings `drills.rs` in as `crate::drills`
mod logging;    // brings `logging.rs` in as `crate::logging`
mod settings;   // brings `settings.rs` in as `crate::settings`

use std::io;

use settings::{DEFAULT_CONFIG_PATH, Settings};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    logging::init();

    info!("gridbot started");

    let path = std::env::var("GRIDBOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let settings = settings::load_config(&path).unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default settings");
        Settings::default()
    });

    drills::run_all(
        &settings,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    info!("gridbot finished");
    Ok(())
}
