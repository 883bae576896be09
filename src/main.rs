use anyhow::Result;
use palletkit::{console, init_logging, Config, BUILD_DATE, VERSION};
use tracing::{info, warn};

fn main() -> Result<()> {
    init_logging()?;
    info!("palletkit {} (built {})", VERSION, BUILD_DATE);

    let config_path = Config::default_config_path();
    let mut config = if config_path.exists() {
        Config::load_from_file(&config_path)?
    } else {
        Config::default()
    };

    console::run(&mut config)?;

    // Remember the session's last layout file for the next run.
    if let Some(parent) = config_path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            warn!("Could not create {}: {}", parent.display(), err);
            return Ok(());
        }
    }
    if let Err(err) = config.save_to_file(&config_path) {
        warn!("Could not save {}: {}", config_path.display(), err);
    }
    Ok(())
}
