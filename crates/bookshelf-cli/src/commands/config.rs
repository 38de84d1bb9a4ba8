use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config, config_path: &Path) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());

    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    for key in config::KEYS {
        println!("  {}: {}", key, config.value_of(key).unwrap_or_default());
    }

    println!("\nPriority: ENV vars (BOOKSHELF_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the whole file.
pub fn get_config(config: &Config, config_path: &Path, key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let value = config
            .value_of(&key)
            .ok_or_else(|| config::unknown_key(&key))?;
        println!("{}", value);
    } else if config_path.exists() {
        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;
        print!("{}", contents);
    } else {
        println!("Config file does not exist: {}", config_path.display());
        println!("\nRun 'bookshelf config init' to create it.");
    }

    Ok(())
}

/// Set a config value in the config file, creating the file if needed.
pub fn set_config(config_path: &Path, key: String, value: String) -> Result<()> {
    config::ensure_config_file(config_path)?;

    let contents = std::fs::read_to_string(config_path).context("Failed to read config file")?;
    let updated = config::set_value(&contents, &key, &value)?;
    std::fs::write(config_path, updated).context("Failed to write config file")?;

    println!("\u{2713} Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config(config_path: &Path) -> Result<()> {
    if config::ensure_config_file(config_path)? {
        println!("\u{2713} Created config file: {}", config_path.display());
        println!("\nEdit this file to configure bookshelf.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
