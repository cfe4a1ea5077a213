//! Settings and their persistence
//!
//! [`Settings`] is an immutable value: every change goes through a `with_*`
//! method that consumes the old value and returns a new one. The pipeline only
//! ever reads a snapshot.

use crate::error::{Error, Result};
use crate::types::Network;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "NOTEDRAFT_CONFIG";

/// Per-network enable flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformToggles {
    /// X (Twitter)
    pub x: bool,
    /// `LinkedIn`
    pub linkedin: bool,
    /// Threads
    pub threads: bool,
    /// Bluesky
    pub bluesky: bool,
    /// Mastodon
    pub mastodon: bool,
}

impl Default for PlatformToggles {
    fn default() -> Self {
        Self {
            x: true,
            linkedin: false,
            threads: false,
            bluesky: false,
            mastodon: false,
        }
    }
}

impl PlatformToggles {
    /// Every network enabled
    pub const fn all() -> Self {
        Self {
            x: true,
            linkedin: true,
            threads: true,
            bluesky: true,
            mastodon: true,
        }
    }

    /// Every network disabled
    pub const fn none() -> Self {
        Self {
            x: false,
            linkedin: false,
            threads: false,
            bluesky: false,
            mastodon: false,
        }
    }

    /// Whether `network` is enabled
    pub const fn is_enabled(&self, network: Network) -> bool {
        match network {
            Network::X => self.x,
            Network::Linkedin => self.linkedin,
            Network::Threads => self.threads,
            Network::Bluesky => self.bluesky,
            Network::Mastodon => self.mastodon,
        }
    }

    /// Copy with `network` set to `enabled`
    #[must_use]
    pub fn with(mut self, network: Network, enabled: bool) -> Self {
        match network {
            Network::X => self.x = enabled,
            Network::Linkedin => self.linkedin = enabled,
            Network::Threads => self.threads = enabled,
            Network::Bluesky => self.bluesky = enabled,
            Network::Mastodon => self.mastodon = enabled,
        }
        self
    }

    /// Enabled networks in canonical order
    pub fn selected(&self) -> Vec<Network> {
        Network::ALL
            .into_iter()
            .filter(|n| self.is_enabled(*n))
            .collect()
    }

    /// Whether at least one network is enabled
    pub fn any(&self) -> bool {
        Network::ALL.into_iter().any(|n| self.is_enabled(n))
    }

    fn every(&self) -> bool {
        Network::ALL.into_iter().all(|n| self.is_enabled(n))
    }
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Typefully API key (may be empty)
    pub api_key: String,
    /// Social set to publish under; empty means "first available"
    pub social_set_id: String,
    /// Stored for parity with the account's AutoRT option
    pub auto_retweet: bool,
    /// Stored for parity with the account's AutoPlug option
    pub auto_plug: bool,
    /// Split content into a thread on four newlines
    pub threadify: bool,
    /// Schedule in the next free slot instead of saving a draft
    pub auto_schedule: bool,
    /// Append the note's tags to the content
    pub append_tags: bool,
    /// Convenience flag mirroring "every network enabled"
    pub enable_all_platforms: bool,
    /// Target networks
    pub platforms: PlatformToggles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            social_set_id: String::new(),
            auto_retweet: false,
            auto_plug: false,
            threadify: false,
            auto_schedule: false,
            append_tags: false,
            enable_all_platforms: false,
            platforms: PlatformToggles::default(),
        }
    }
}

impl Settings {
    /// New value with the API key replaced
    #[must_use]
    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..self
        }
    }

    /// New value with the social set id replaced
    #[must_use]
    pub fn with_social_set_id(self, social_set_id: impl Into<String>) -> Self {
        Self {
            social_set_id: social_set_id.into(),
            ..self
        }
    }

    /// New value with thread splitting toggled
    #[must_use]
    pub fn with_threadify(self, threadify: bool) -> Self {
        Self { threadify, ..self }
    }

    /// New value with auto scheduling toggled
    #[must_use]
    pub fn with_auto_schedule(self, auto_schedule: bool) -> Self {
        Self {
            auto_schedule,
            ..self
        }
    }

    /// New value with tag appending toggled
    #[must_use]
    pub fn with_append_tags(self, append_tags: bool) -> Self {
        Self {
            append_tags,
            ..self
        }
    }

    /// New value with auto retweet toggled
    #[must_use]
    pub fn with_auto_retweet(self, auto_retweet: bool) -> Self {
        Self {
            auto_retweet,
            ..self
        }
    }

    /// New value with auto plug toggled
    #[must_use]
    pub fn with_auto_plug(self, auto_plug: bool) -> Self {
        Self { auto_plug, ..self }
    }

    /// New value with one network toggled.
    ///
    /// Disabling any network clears `enable_all_platforms`; enabling the last
    /// disabled one sets it.
    #[must_use]
    pub fn with_platform(self, network: Network, enabled: bool) -> Self {
        let platforms = self.platforms.with(network, enabled);
        let enable_all_platforms = if enabled {
            self.enable_all_platforms || platforms.every()
        } else {
            false
        };
        Self {
            platforms,
            enable_all_platforms,
            ..self
        }
    }

    /// New value with the "all networks" flag toggled.
    ///
    /// Turning it on enables every network; turning it off leaves the
    /// individual flags as they are.
    #[must_use]
    pub fn with_all_platforms(self, enabled: bool) -> Self {
        let platforms = if enabled {
            PlatformToggles::all()
        } else {
            self.platforms
        };
        Self {
            platforms,
            enable_all_platforms: enabled,
            ..self
        }
    }

    /// Networks the draft targets
    pub fn selected_networks(&self) -> Vec<Network> {
        self.platforms.selected()
    }

    /// Apply a `key = value` update, as given on the command line.
    ///
    /// Keys use the file names (`threadify`, `platforms.bluesky`, ...).
    pub fn apply(self, key: &str, value: &str) -> Result<Self> {
        let flag = || parse_bool(key, value);

        match key {
            "api_key" => Ok(self.with_api_key(value)),
            "social_set_id" => Ok(self.with_social_set_id(value)),
            "threadify" => Ok(self.with_threadify(flag()?)),
            "auto_schedule" => Ok(self.with_auto_schedule(flag()?)),
            "append_tags" => Ok(self.with_append_tags(flag()?)),
            "auto_retweet" => Ok(self.with_auto_retweet(flag()?)),
            "auto_plug" => Ok(self.with_auto_plug(flag()?)),
            "enable_all_platforms" => Ok(self.with_all_platforms(flag()?)),
            other => {
                let network = other
                    .strip_prefix("platforms.")
                    .and_then(Network::from_key)
                    .ok_or_else(|| Error::Config(format!("unknown setting: {other}")))?;
                Ok(self.with_platform(network, flag()?))
            }
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(Error::Config(format!(
            "{key} expects true or false, got '{value}'"
        ))),
    }
}

/// Persistence for [`Settings`]
pub trait ConfigStore: Send + Sync {
    /// Load saved settings; `None` when nothing was saved yet
    fn load(&self) -> Result<Option<Settings>>;

    /// Persist settings
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings stored as a TOML file
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Store backed by an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$NOTEDRAFT_CONFIG`, or `<config dir>/notedraft/config.toml`
    pub fn default_location() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Ok(Self::new(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?;

        Ok(Self::new(config_dir.join("notedraft").join("config.toml")))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults.
    ///
    /// The returned flag is true when the file is missing or lacks some keys,
    /// i.e. when it should be rewritten with the full settings.
    pub fn load_or_default(&self) -> Result<(Settings, bool)> {
        let Some(raw) = self.read_raw()? else {
            debug!("Using default settings");
            return Ok((Settings::default(), true));
        };

        let table: toml::Table = toml::from_str(&raw)?;
        let needs_save = has_missing_keys(&table)?;
        let settings: Settings = toml::from_str(&raw)?;

        debug!(needs_save, "Settings loaded");
        Ok((settings, needs_save))
    }

    fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<Option<Settings>> {
        self.read_raw()?
            .map(|raw| toml::from_str(&raw).map_err(Error::from))
            .transpose()
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        debug!(path = %self.path.display(), "Saving settings");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(settings)?)?;
        Ok(())
    }
}

/// Whether `loaded` lacks any key that a full [`Settings`] would write
fn has_missing_keys(loaded: &toml::Table) -> Result<bool> {
    let toml::Value::Table(defaults) = toml::Value::try_from(Settings::default())? else {
        return Err(Error::Internal("settings did not serialize to a table".to_string()));
    };

    Ok(defaults.iter().any(|(key, default)| {
        match (loaded.get(key), default) {
            (None, _) => true,
            (Some(toml::Value::Table(found)), toml::Value::Table(expected)) => {
                expected.keys().any(|k| !found.contains_key(k))
            }
            _ => false,
        }
    }))
}
