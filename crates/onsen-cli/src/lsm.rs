//! `lsm` command: print episode manifest URLs.
//!
//! Inaccessible or unknown targets are reported on stderr so stdout stays a
//! clean list of URLs for piping into a downloader.

use std::collections::HashSet;
use std::sync::OnceLock;

use onsen_core::{Catalog, EpisodeId, RadioShow};
use regex::Regex;

static TARGET: OnceLock<Regex> = OnceLock::new();

fn target_re() -> &'static Regex {
    TARGET.get_or_init(|| Regex::new("^[^/]+/([0-9]+)$").expect("valid regex"))
}

pub(crate) fn run(html: &str, targets: &[String]) -> anyhow::Result<()> {
    let catalog = Catalog::new(onsen_scraper::parse_page(html)?);

    if targets.is_empty() {
        for show in catalog.radio_shows() {
            print_manifests_of(&show);
        }
        return Ok(());
    }

    for target in unique(targets) {
        match parse_target(target) {
            Some(id) => print_one(&catalog, id, target),
            None => match catalog.show(target) {
                Some(show) => print_manifests_of(&show),
                None => eprintln!("{target}: not found"),
            },
        }
    }
    Ok(())
}

fn print_one(catalog: &Catalog, id: EpisodeId, target: &str) {
    match catalog.episode(id) {
        Ok(Some(episode)) => match episode.manifest() {
            Some(url) => println!("{url}"),
            None => eprintln!("{target}: empty manifest, may be inaccessible"),
        },
        Ok(None) => eprintln!("{target}: not found"),
        Err(error) => {
            tracing::warn!(%error, "skipping malformed episode record");
            eprintln!("{target}: not listable");
        }
    }
}

fn print_manifests_of(show: &RadioShow<'_>) {
    for episode in show.episodes() {
        match episode {
            Ok(episode) => {
                if let Some(url) = episode.manifest() {
                    println!("{url}");
                }
            }
            Err(error) => {
                tracing::warn!(show = show.name(), %error, "skipping episode record");
            }
        }
    }
}

/// The episode id of a `name/id` target; `None` for plain show names.
fn parse_target(target: &str) -> Option<EpisodeId> {
    let captures = target_re().captures(target)?;
    captures[1].parse().ok().map(EpisodeId)
}

/// First-seen order with duplicates dropped, so a repeated target prints its
/// manifest once.
fn unique(targets: &[String]) -> Vec<&String> {
    let mut seen = HashSet::new();
    targets
        .iter()
        .filter(|target| seen.insert(target.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "lsm_test.rs"]
mod tests;
