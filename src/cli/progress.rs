//! Shared CLI progress callback with styled output and spinners

use crate::cli::style::{arrow, cross, network_list, network_spinner, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use notedraft::error::Error;
use notedraft::submit::{Phase, ProgressCallback};
use notedraft::types::Network;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints to stdout with styled output
///
/// Two modes:
/// - verbose: prints every phase
/// - compact: shows a spinner while waiting on the network
pub struct CliProgress {
    /// Verbose mode shows all phases and detailed output
    pub verbose: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create verbose progress (`-v`)
    pub const fn verbose() -> Self {
        Self {
            verbose: true,
            spinner: Mutex::new(None),
        }
    }

    /// Create compact progress
    pub const fn compact() -> Self {
        Self {
            verbose: false,
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(network_spinner());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        *slot = Some(spinner);
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        if self.verbose {
            println!("{}...", phase.to_string().emphasis());
            return;
        }

        match phase {
            Phase::ResolvingAccount | Phase::Submitting => {
                self.start_spinner(format!("{phase}..."));
            }
            Phase::Complete => self.stop_spinner(),
            Phase::Sanitizing | Phase::Composing => {}
        }
    }

    async fn on_targets(&self, networks: &[Network]) {
        if self.verbose {
            println!("  {} Targets: {}", arrow(), network_list(networks));
        }
    }

    async fn on_social_set_resolved(&self, social_set_id: &str) {
        if self.verbose {
            println!(
                "  {} Using social set {}",
                arrow(),
                social_set_id.accent()
            );
        }
    }

    async fn on_error(&self, err: &Error) {
        self.stop_spinner();
        if self.verbose {
            eprintln!("{} {}", cross(), err.to_string().error());
        }
    }

    async fn on_message(&self, message: &str) {
        if self.verbose {
            println!("{message}");
        } else {
            println!("  {}", message.muted());
        }
    }
}
