//! Social sets command - list accounts and pick the default one

use crate::cli::config::{load_settings, with_effective_api_key};
use crate::cli::style::{check, marker, Stylize};
use anstream::println;
use dialoguer::Select;
use notedraft::config::ConfigStore;
use notedraft::error::{Error, Result};
use notedraft::platform::TypefullyService;
use notedraft::submit::{fetch_social_sets, MSG_API_KEY_CONFIGURATION_REQUIRED, MSG_NO_SOCIAL_SETS};

/// Run `social-sets [--select]`
pub async fn run_social_sets(select: bool) -> Result<()> {
    let (store, stored) = load_settings()?;
    let settings = with_effective_api_key(stored.clone());
    if settings.api_key.is_empty() {
        return Err(Error::Auth(MSG_API_KEY_CONFIGURATION_REQUIRED.to_string()));
    }

    let service = TypefullyService::from_env()?;
    let sets = fetch_social_sets(&service, &settings.api_key).await?;
    if sets.results.is_empty() {
        return Err(Error::Resolution(MSG_NO_SOCIAL_SETS.to_string()));
    }

    if !select {
        for set in &sets.results {
            println!(
                "{} {} {} {}",
                marker(set.id.to_string() == settings.social_set_id),
                set.id.to_string().accent(),
                set.name.emphasis(),
                format!("@{}", set.username).muted()
            );
        }
        return Ok(());
    }

    let items: Vec<String> = sets
        .results
        .iter()
        .map(|s| format!("{} (@{}) [{}]", s.name, s.username, s.id))
        .collect();
    let default = sets
        .results
        .iter()
        .position(|s| s.id.to_string() == settings.social_set_id)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Social set to publish under")
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    let chosen = &sets.results[choice];
    store.save(&stored.with_social_set_id(chosen.id.to_string()))?;
    println!(
        "{} Publishing under {} ({})",
        check(),
        chosen.name.emphasis(),
        chosen.id.to_string().accent()
    );

    Ok(())
}
