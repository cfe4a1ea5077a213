//! Auth command - test and manage the API key

use crate::cli::config::load_settings;
use crate::cli::style::{check, Stylize};
use anstream::println;
use notedraft::auth::{get_api_key, test_api_key, API_KEY_ENV};
use notedraft::error::Result;
use notedraft::platform::TypefullyService;

/// Run the auth test command
pub async fn run_auth_test() -> Result<()> {
    println!("Testing Typefully authentication...");
    let (_, settings) = load_settings()?;
    let config = get_api_key(&settings)?;

    let service = TypefullyService::from_env()?;
    let sets = test_api_key(&service, &config).await?;

    println!(
        "{} API key valid, {} social set{} available",
        check(),
        sets.results.len().to_string().accent(),
        if sets.results.len() == 1 { "" } else { "s" }
    );
    println!("Key source: {}", config.source.to_string().muted());
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "Typefully Authentication Setup".emphasis());
    println!("==============================");
    println!();
    println!("Create an API key in Typefully under Settings > API.");
    println!();
    println!("Option 1: Settings file (recommended)");
    println!("  Run: notedraft config set api_key <KEY>");
    println!();
    println!("Option 2: Environment variable");
    println!("  Set {API_KEY_ENV}");
    println!();
    println!("Then pick the account to publish under:");
    println!("  Run: notedraft social-sets --select");
}
