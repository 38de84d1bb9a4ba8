use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for bookshelf.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (BOOKSHELF_* prefix)
/// 2. Config file (~/.config/bookshelf/config.toml, or `--config`)
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub shelf: ShelfConfig,
}

/// Logger settings handed to twyg at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    #[serde(deserialize_with = "native_or_str")]
    pub coloured: bool,
    #[serde(deserialize_with = "native_or_str")]
    pub report_caller: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            coloured: true,
            report_caller: false,
        }
    }
}

/// What the shelf screen shows around the books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    pub heading: String,
    pub subheading: String,

    /// Month label next to the subheading. Defaults to the current month.
    pub month: Option<String>,

    /// Name signed under every note.
    pub signature: String,

    /// Cards per grid row.
    #[serde(deserialize_with = "native_or_str")]
    pub columns: u16,

    /// How long the status toast stays up.
    #[serde(deserialize_with = "native_or_str")]
    pub toast_millis: u64,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            heading: String::from("My Bookshelf"),
            subheading: String::from("On Shelf this Month"),
            month: None,
            signature: String::from("Ankush"),
            columns: 5,
            toast_millis: 2000,
        }
    }
}

/// Logger verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => anyhow::bail!(
                "unknown log level: {} (expected trace, debug, info, warn or error)",
                s
            ),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Accept either the native TOML type or its string form.
///
/// Environment overrides always arrive as strings.
fn native_or_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Native(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Native(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}

/// Keys accepted by `config get` and `config set`.
pub const KEYS: [&str; 9] = [
    "logging.level",
    "logging.coloured",
    "logging.report_caller",
    "shelf.heading",
    "shelf.subheading",
    "shelf.month",
    "shelf.signature",
    "shelf.columns",
    "shelf.toast_millis",
];

impl Config {
    /// Load configuration from `path` (if it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if path.exists() {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let mut env_opts = env::Options::with_top_level("bookshelf");
        env_opts.add_section("logging").add_section("shelf");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        log::debug!("configuration loaded (file: {})", path.display());
        Ok(config)
    }

    /// The effective value of one of [`KEYS`], rendered for display.
    pub fn value_of(&self, key: &str) -> Option<String> {
        let value = match key {
            "logging.level" => self.logging.level.to_string(),
            "logging.coloured" => self.logging.coloured.to_string(),
            "logging.report_caller" => self.logging.report_caller.to_string(),
            "shelf.heading" => self.shelf.heading.clone(),
            "shelf.subheading" => self.shelf.subheading.clone(),
            "shelf.month" => self
                .shelf
                .month
                .clone()
                .unwrap_or_else(|| String::from("<current month>")),
            "shelf.signature" => self.shelf.signature.clone(),
            "shelf.columns" => self.shelf.columns.to_string(),
            "shelf.toast_millis" => self.shelf.toast_millis.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/bookshelf/config.toml
/// - macOS: ~/Library/Application Support/bookshelf/config.toml
/// - Windows: %APPDATA%\bookshelf\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookshelf")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Bookshelf Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. Environment variables (BOOKSHELF_* prefix)
# 2. This config file
# 3. Built-in defaults (lowest priority)

[logging]
# One of: trace, debug, info, warn, error
level = "warn"
coloured = true
report_caller = false

[shelf]
heading = "My Bookshelf"
subheading = "On Shelf this Month"

# Month shown next to the subheading. Defaults to the current month.
#month = "February"

# Name signed under each note
signature = "Ankush"

# Cards per row in the shelf grid
columns = 5

# How long the "Status Updated" toast stays on screen
toast_millis = 2000
"#
}

/// Create the config file at `path` if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path, example_config()).context("Failed to write config file")?;
    log::info!("wrote default config to {}", path.display());

    Ok(true)
}

/// Set `key` to `raw` in the TOML document `contents`, keeping comments.
pub fn set_value(contents: &str, key: &str, raw: &str) -> Result<String> {
    let (section, field) = key
        .split_once('.')
        .filter(|_| KEYS.contains(&key))
        .ok_or_else(|| unknown_key(key))?;

    let value = match key {
        "logging.level" => toml_edit::value(raw.parse::<LogLevel>()?.as_str()),
        "logging.coloured" | "logging.report_caller" => toml_edit::value(
            raw.parse::<bool>()
                .with_context(|| format!("{} expects true or false", key))?,
        ),
        "shelf.columns" | "shelf.toast_millis" => {
            let number = raw
                .parse::<u64>()
                .with_context(|| format!("{} expects a whole number", key))?;
            if number == 0 || (key == "shelf.columns" && number > u64::from(u16::MAX)) {
                anyhow::bail!("{} is out of range: {}", key, number);
            }
            toml_edit::value(i64::try_from(number).context("number too large")?)
        }
        _ => toml_edit::value(raw),
    };

    let mut doc = contents
        .parse::<toml_edit::DocumentMut>()
        .context("Config file is not valid TOML")?;
    let table = doc
        .entry(section)
        .or_insert(toml_edit::table())
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("[{}] in config file is not a table", section))?;
    table[field] = value;

    Ok(doc.to_string())
}

pub fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown config key: {}\n\nValid keys: {}", key, KEYS.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests that read the environment must not overlap with ones that set it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.shelf.heading, "My Bookshelf");
        assert_eq!(config.shelf.signature, "Ankush");
        assert_eq!(config.shelf.columns, 5);
        assert_eq!(config.shelf.toast_millis, 2000);
        assert!(config.shelf.month.is_none());
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from(&temp_dir.path().join("absent.toml"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[shelf]\nsignature = \"Tester\"\ncolumns = 3\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.shelf.signature, "Tester");
        assert_eq!(config.shelf.columns, 3);
        assert_eq!(config.shelf.heading, "My Bookshelf");
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[shelf]\nsignature = \"Tester\"\ncolumns = 3\n").unwrap();

        std::env::set_var("BOOKSHELF_SHELF_SIGNATURE", "EnvName");
        std::env::set_var("BOOKSHELF_SHELF_COLUMNS", "4");
        std::env::set_var("BOOKSHELF_SHELF_TOAST_MILLIS", "500");
        std::env::set_var("BOOKSHELF_LOGGING_COLOURED", "false");
        std::env::set_var("BOOKSHELF_LOGGING_LEVEL", "debug");
        let from_file = Config::load_from(&path);
        let from_defaults = Config::load_from(&temp_dir.path().join("absent.toml"));
        for key in [
            "BOOKSHELF_SHELF_SIGNATURE",
            "BOOKSHELF_SHELF_COLUMNS",
            "BOOKSHELF_SHELF_TOAST_MILLIS",
            "BOOKSHELF_LOGGING_COLOURED",
            "BOOKSHELF_LOGGING_LEVEL",
        ] {
            std::env::remove_var(key);
        }

        for config in [from_file.unwrap(), from_defaults.unwrap()] {
            assert_eq!(config.shelf.signature, "EnvName");
            assert_eq!(config.shelf.columns, 4);
            assert_eq!(config.shelf.toast_millis, 500);
            assert!(!config.logging.coloured);
            assert_eq!(config.logging.level, LogLevel::Debug);
            assert_eq!(config.shelf.heading, "My Bookshelf");
        }
    }

    #[test]
    fn test_numbers_and_flags_accept_strings() {
        let parsed: Config = toml::from_str(
            "[logging]\nlevel = \" Info \"\ncoloured = \"false\"\n\n[shelf]\ncolumns = \"3\"\ntoast_millis = 750\n",
        )
        .unwrap();
        assert_eq!(parsed.logging.level, LogLevel::Info);
        assert!(!parsed.logging.coloured);
        assert_eq!(parsed.shelf.columns, 3);
        assert_eq!(parsed.shelf.toast_millis, 750);

        assert!(toml::from_str::<Config>("[shelf]\ncolumns = \"many\"\n").is_err());
        assert!(toml::from_str::<Config>("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" TRACE ".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_ensure_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        assert!(ensure_config_file(&path).unwrap());
        assert!(!ensure_config_file(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), example_config());
    }

    #[test]
    fn test_value_of() {
        let config = Config::default();
        assert_eq!(config.value_of("shelf.columns").as_deref(), Some("5"));
        assert_eq!(config.value_of("logging.coloured").as_deref(), Some("true"));
        assert_eq!(
            config.value_of("shelf.month").as_deref(),
            Some("<current month>")
        );
        assert!(config.value_of("shelf.colour").is_none());
        for key in KEYS {
            assert!(config.value_of(key).is_some(), "{}", key);
        }
    }

    #[test]
    fn test_set_value_keeps_comments() {
        let updated = set_value(example_config(), "shelf.signature", "Reader").unwrap();
        assert!(updated.contains("signature = \"Reader\""));
        assert!(updated.contains("# Name signed under each note"));

        let parsed: Config = toml::from_str(&updated).unwrap();
        assert_eq!(parsed.shelf.signature, "Reader");
    }

    #[test]
    fn test_set_value_typed() {
        let updated = set_value("", "shelf.columns", "4").unwrap();
        let updated = set_value(&updated, "logging.coloured", "false").unwrap();
        let parsed: Config = toml::from_str(&updated).unwrap();
        assert_eq!(parsed.shelf.columns, 4);
        assert!(!parsed.logging.coloured);
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        assert!(set_value("", "shelf.colour", "red").is_err());
        assert!(set_value("", "shelf", "x").is_err());
        assert!(set_value("", "shelf.columns", "many").is_err());
        assert!(set_value("", "shelf.columns", "0").is_err());
        assert!(set_value("", "logging.coloured", "yes").is_err());
        assert!(set_value(example_config(), "logging.level", "loud").is_err());
    }

    #[test]
    fn test_set_value_log_level_round_trips_through_load() {
        let updated = set_value(example_config(), "logging.level", "Warning").unwrap();
        assert!(updated.contains("level = \"warn\""));
        let parsed: Config = toml::from_str(&updated).unwrap();
        assert_eq!(parsed.logging.level, LogLevel::Warn);
    }
}
