//! Publish commands - send a note or a piece of text to Typefully

use crate::cli::config::{load_settings, with_effective_api_key};
use crate::cli::progress::CliProgress;
use crate::cli::style::{
    check, draft_id, draft_link, dry_run_banner, network_list, post_heading, Stylize,
};
use anstream::println;
use notedraft::config::Settings;
use notedraft::error::{Error, Result};
use notedraft::platform::TypefullyService;
use notedraft::submit::prepare_draft;
use notedraft::types::{Document, DraftPayload, SubmissionResult};
use notedraft::vault::{
    check_document, ExcalidrawDetector, FrontMatterIndex, FsDocumentStore, Vault,
};
use std::io::Read;
use std::path::Path;

/// Run `publish FILE`
pub async fn run_publish(file: &Path, dry_run: bool, verbose: bool) -> Result<()> {
    let (_, settings) = load_settings()?;
    let settings = with_effective_api_key(settings);

    let document = Document::from_path(file);
    check_document(&document)?;
    let store = FsDocumentStore::new();
    let index = FrontMatterIndex::scan(&store, std::slice::from_ref(&document)).await?;
    let vault = Vault::new(store)
        .with_index(index)
        .with_detector(ExcalidrawDetector);

    if dry_run {
        let payload = vault.prepare_document(&document, &settings).await?;
        report_dry_run(&payload, &settings);
        return Ok(());
    }

    let service = TypefullyService::from_env()?;
    let progress = progress(verbose);
    let result = vault
        .publish_document(&document, &settings, &service, &progress)
        .await?;

    report_result(&result)
}

/// Run `publish-text [TEXT]`
///
/// Text `-` or no text reads stdin. Tags come from `tags_from` when given.
pub async fn run_publish_text(
    text: Option<&str>,
    tags_from: Option<&Path>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let (_, settings) = load_settings()?;
    let settings = with_effective_api_key(settings);

    let text = match text {
        Some(text) if text != "-" => text.to_string(),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let source = tags_from.map(Document::from_path);
    let store = FsDocumentStore::new();
    let index = match &source {
        Some(document) => FrontMatterIndex::scan(&store, std::slice::from_ref(document)).await?,
        None => FrontMatterIndex::new(),
    };
    let vault = Vault::new(store).with_index(index);

    if dry_run {
        let payload = prepare_draft(&text, &vault.tags(source.as_ref()), &settings)?;
        report_dry_run(&payload, &settings);
        return Ok(());
    }

    let service = TypefullyService::from_env()?;
    let progress = progress(verbose);
    let result = vault
        .publish_selection(&text, source.as_ref(), &settings, &service, &progress)
        .await?;

    report_result(&result)
}

const fn progress(verbose: bool) -> CliProgress {
    if verbose {
        CliProgress::verbose()
    } else {
        CliProgress::compact()
    }
}

fn report_dry_run(payload: &DraftPayload, settings: &Settings) {
    println!("{}", dry_run_banner());
    println!();

    println!("{} {}", "Targets:".emphasis(), network_list(&payload.networks()));
    if payload.publish_at.is_some() {
        println!("{} next free slot", "Schedule:".emphasis());
    }
    if settings.social_set_id.is_empty() {
        println!("{} first available", "Social set:".emphasis());
    } else {
        println!("{} {}", "Social set:".emphasis(), settings.social_set_id.accent());
    }

    let posts = payload.posts();
    for (i, post) in posts.iter().enumerate() {
        println!();
        println!("{}", post_heading(i, posts.len()));
        println!("{}", post.text);
    }
}

fn report_result(result: &SubmissionResult) -> Result<()> {
    match result {
        SubmissionResult::Success(details) => {
            let what = match details.scheduled_at() {
                Some(when) => format!("scheduled for {}", when.format("%Y-%m-%d %H:%M UTC")),
                None => "saved as draft".to_string(),
            };
            let posts = if details.post_count == 1 {
                "1 post".to_string()
            } else {
                format!("{} posts", details.post_count)
            };

            println!(
                "{} Typefully draft {} {} ({})",
                check(),
                draft_id(details),
                what,
                posts
            );
            if let Some(url) = &details.private_url {
                println!("  {}", draft_link(url));
            }
            Ok(())
        }
        SubmissionResult::Failure(failure) => Err(Error::from(failure)),
    }
}
