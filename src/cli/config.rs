//! Config command - inspect and update settings

use crate::cli::style::{check, secret_state, setting_key, Stylize};
use anstream::println;
use notedraft::auth::get_api_key;
use notedraft::config::{ConfigStore, Settings, TomlConfigStore};
use notedraft::error::Result;
use notedraft::types::Network;
use tracing::debug;

/// Load settings from the default location.
///
/// A settings file missing some keys is rewritten with the defaults filled
/// in. A missing file is left alone.
pub fn load_settings() -> Result<(TomlConfigStore, Settings)> {
    let store = TomlConfigStore::default_location()?;
    let (settings, needs_save) = store.load_or_default()?;

    if needs_save && store.path().exists() {
        debug!("Settings file is missing keys, rewriting it");
        store.save(&settings)?;
    }

    Ok((store, settings))
}

/// Settings with the API key from [`get_api_key`] applied, if any
pub fn with_effective_api_key(settings: Settings) -> Settings {
    match get_api_key(&settings) {
        Ok(config) => settings.with_api_key(config.api_key),
        Err(_) => settings,
    }
}

/// Run `config show`
pub fn run_config_show() -> Result<()> {
    let (store, settings) = load_settings()?;

    println!("{}", "Settings".emphasis());
    println!("  {} {}", setting_key("file"), store.path().display());
    println!(
        "  {} {}",
        setting_key("api_key"),
        secret_state(!settings.api_key.is_empty())
    );
    println!(
        "  {} {}",
        setting_key("social_set_id"),
        if settings.social_set_id.is_empty() {
            "(first available)".to_string()
        } else {
            settings.social_set_id.accent().to_string()
        }
    );
    println!("  {} {}", setting_key("threadify"), settings.threadify);
    println!("  {} {}", setting_key("auto_schedule"), settings.auto_schedule);
    println!("  {} {}", setting_key("append_tags"), settings.append_tags);
    println!("  {} {}", setting_key("auto_retweet"), settings.auto_retweet);
    println!("  {} {}", setting_key("auto_plug"), settings.auto_plug);
    println!(
        "  {} {}",
        setting_key("enable_all_platforms"),
        settings.enable_all_platforms
    );
    for network in Network::ALL {
        println!(
            "  {} {}",
            setting_key(&format!("platforms.{}", network.key())),
            settings.platforms.is_enabled(network)
        );
    }

    Ok(())
}

/// Run `config path`
pub fn run_config_path() -> Result<()> {
    let store = TomlConfigStore::default_location()?;
    println!("{}", store.path().display());
    Ok(())
}

/// Run `config set KEY VALUE`
pub fn run_config_set(key: &str, value: &str) -> Result<()> {
    let (store, settings) = load_settings()?;
    let updated = settings.apply(key, value)?;
    store.save(&updated)?;

    let shown = if key == "api_key" { "********" } else { value };
    println!("{} {} = {}", check(), key.accent(), shown);
    Ok(())
}
