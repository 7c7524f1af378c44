#![deny(clippy::all, clippy::pedantic)]

use marquee_api_types::{ContentDocument, MovieRecord};

use crate::draft::PLACEMENT_KEYS;

pub fn entry_line(record: &MovieRecord) {
    let state = if record.is_active { "active" } else { "hidden" };
    println!(
        "{}  [{state}]  {} ({})  /{}",
        record.id, record.title, record.year, record.slug
    );
}

pub fn entries(records: &[&MovieRecord]) {
    if records.is_empty() {
        println!("no entries");
        return;
    }
    for record in records {
        entry_line(record);
    }
}

pub fn status(document: &ContentDocument) {
    let active = document
        .movies
        .iter()
        .filter(|record| record.is_active)
        .count();
    println!(
        "entries: {} ({} active, {} hidden)",
        document.movies.len(),
        active,
        document.movies.len() - active
    );
    println!(
        "ads: master {}",
        if document.settings.ads_enabled {
            "on"
        } else {
            "off"
        }
    );
    println!("site title: {}", document.settings.site.site_title);
    println!("accent color: {}", document.settings.site.accent_color);
}

pub fn slots(document: &ContentDocument) {
    let ads = &document.settings.ad_codes;
    let slot_for = |key: &str| match key {
        "globalHeader" => &ads.global_header,
        "popUnder" => &ads.pop_under,
        "homeTop" => &ads.home_top,
        "homeInGrid" => &ads.home_in_grid,
        "homeBottom" => &ads.home_bottom,
        "detailTop" => &ads.detail_top,
        "detailSidebar1" => &ads.detail_sidebar1,
        "detailSidebar2" => &ads.detail_sidebar2,
        "watchTimer" => &ads.watch_timer,
        _ => &ads.download_timer,
    };

    for key in PLACEMENT_KEYS {
        let slot = slot_for(key);
        let state = if slot.active { "enabled" } else { "disabled" };
        let code = if slot.code.trim().is_empty() {
            "(empty)"
        } else {
            "(code set)"
        };
        println!("{key:<16} {state:<9} {code}");
    }
}
