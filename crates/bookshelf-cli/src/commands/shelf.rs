use anyhow::Result;

use crate::config::Config;

/// Open the interactive shelf.
pub fn run_shelf(config: &Config) -> Result<()> {
    log::info!("opening shelf");
    crate::tui::run_tui(config.shelf.clone())
}
