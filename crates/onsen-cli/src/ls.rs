//! `ls` command: tabular listing of shows and episodes.
//!
//! Malformed episode records are logged and skipped rather than propagated,
//! so one bad record never aborts a listing.

use chrono::{DateTime, FixedOffset};
use onsen_core::{Catalog, Episode, RadioShow};

pub(crate) fn run(html: &str, recursive: bool, names: &[String]) -> anyhow::Result<()> {
    let catalog = Catalog::new(onsen_scraper::parse_page(html)?);

    if names.is_empty() {
        list_catalog(&catalog, recursive);
    } else {
        list_named(&catalog, names);
    }
    Ok(())
}

/// All shows, least-recently-updated first. The sort is stable and dateless
/// (pre-announced) shows order before any dated show.
fn sorted_shows(catalog: &Catalog) -> Vec<RadioShow<'_>> {
    let mut shows = catalog.radio_shows();
    shows.sort_by_key(|show| show.jst_updated_at());
    shows
}

fn list_catalog(catalog: &Catalog, recursive: bool) {
    let shows = sorted_shows(catalog);

    if recursive {
        for show in &shows {
            println!(
                "d---- {:>3} {} {:<20} {}",
                show.episode_count(),
                fmt_guessed(show.jst_updated_at()),
                show.name(),
                show.title()
            );
            print_episode_rows(show, 20);
        }
    } else {
        let count_width = shows
            .iter()
            .map(|show| show.episode_count().to_string().len())
            .max()
            .unwrap_or(1);
        let name_width = shows.iter().map(|show| show.name().len()).max().unwrap_or(0);

        for show in &shows {
            println!(
                "d---- {:>count_width$} {} {:<name_width$} {}",
                show.episode_count(),
                fmt_guessed(show.jst_updated_at()),
                show.name(),
                show.title()
            );
        }
    }
}

/// Episodes of each named show; unknown names go to stderr and do not stop
/// the remaining arguments.
fn list_named(catalog: &Catalog, names: &[String]) {
    for name in names {
        let Some(show) = catalog.show(name) else {
            eprintln!("{name}: not found");
            continue;
        };

        let path_width = show
            .episodes()
            .iter()
            .flatten()
            .map(|episode| name.len() + 1 + episode.episode_id().to_string().len())
            .max()
            .unwrap_or(0);
        print_episode_rows(&show, path_width);
    }
}

fn print_episode_rows(show: &RadioShow<'_>, path_width: usize) {
    for episode in show.episodes() {
        match episode {
            Ok(episode) => {
                let path = format!("{}/{}", show.name(), episode.episode_id());
                println!(
                    "{}   1 {} {:<path_width$} {}",
                    episode_flags(&episode),
                    fmt_guessed(episode.jst_published_at()),
                    path,
                    episode.title()
                );
            }
            Err(error) => {
                tracing::warn!(show = show.name(), %error, "skipping episode record");
            }
        }
    }
}

/// `ls -l`-style flag column: readable manifest, bonus, latest, premium.
fn episode_flags(episode: &Episode<'_>) -> String {
    format!(
        "-{}{}{}{}",
        if episode.manifest().is_some() { 'r' } else { '-' },
        if episode.is_bonus() { 'b' } else { '-' },
        if episode.is_latest() { '*' } else { '-' },
        if episode.requires_premium() { '$' } else { '-' },
    )
}

/// Eleven columns to match the `%b %e %Y` date layout; an em dash marks a
/// show with no usable time.
fn fmt_guessed(at: Option<DateTime<FixedOffset>>) -> String {
    at.map_or_else(
        || format!("{:<11}", "\u{2014}"),
        |at| at.format("%b %e %Y").to_string(),
    )
}

#[cfg(test)]
#[path = "ls_test.rs"]
mod tests;
