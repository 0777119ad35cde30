use chrono::TimeZone;
use onsen_core::{dates, nuxt};

use super::*;

fn reference() -> DateTime<FixedOffset> {
    dates::jst()
        .with_ymd_and_hms(2021, 3, 24, 0, 0, 0)
        .single()
        .expect("valid reference date")
}

fn content(streaming_url: Option<&str>, bonus: bool, latest: bool, premium: bool) -> nuxt::Content {
    nuxt::Content {
        id: 1,
        media_type: "sound".to_owned(),
        delivery_date: "3/19".to_owned(),
        streaming_url: streaming_url.map(str::to_owned),
        bonus,
        latest,
        premium,
        ..nuxt::Content::default()
    }
}

#[test]
fn flags_mark_readable_bonus_latest_and_premium() {
    let raw = content(Some("https://example.invalid/m.m3u8"), true, true, true);
    let episode = Episode::from_raw(Some(&raw), reference()).expect("sound is recognized");

    assert_eq!(episode_flags(&episode), "-rb*$");
}

#[test]
fn flags_dash_out_missing_attributes() {
    let raw = content(None, false, false, false);
    let episode = Episode::from_raw(Some(&raw), reference()).expect("sound is recognized");

    assert_eq!(episode_flags(&episode), "-----");
}

#[test]
fn guessed_dates_format_like_ls() {
    let raw = content(None, false, false, false);
    let episode = Episode::from_raw(Some(&raw), reference()).expect("sound is recognized");

    assert_eq!(fmt_guessed(episode.jst_published_at()), "Mar 19 2021");
}

#[test]
fn dateless_shows_sort_before_dated_shows() {
    let root = nuxt::Root {
        state: nuxt::State {
            signin: None,
            programs: nuxt::ProgramsState {
                programs: nuxt::ProgramList {
                    all: vec![
                        nuxt::Program {
                            id: 1,
                            directory_name: "dated".to_owned(),
                            updated: Some("3/19".to_owned()),
                            ..nuxt::Program::default()
                        },
                        nuxt::Program {
                            id: 2,
                            directory_name: "announced-only".to_owned(),
                            ..nuxt::Program::default()
                        },
                        nuxt::Program {
                            id: 3,
                            directory_name: "older".to_owned(),
                            updated: Some("3/5".to_owned()),
                            ..nuxt::Program::default()
                        },
                    ],
                },
            },
        },
        ..nuxt::Root::default()
    };
    let catalog = Catalog::with_reference(root, reference());

    let names: Vec<&str> = sorted_shows(&catalog).iter().map(RadioShow::name).collect();
    assert_eq!(names, vec!["announced-only", "older", "dated"]);
}

#[test]
fn missing_dates_render_as_a_padded_dash() {
    let rendered = fmt_guessed(None);
    assert!(rendered.starts_with('\u{2014}'));
    assert_eq!(rendered.chars().count(), 11);
}
