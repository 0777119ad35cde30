//! `dump` command: print the recovered raw state JSON.

pub(crate) fn run(html: &str) -> anyhow::Result<()> {
    let json = onsen_scraper::extract_state_json(html)?;
    println!("{json}");
    Ok(())
}
