use std::time::Instant;

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::log;

use crate::error::StatsError;
use crate::models_api::player_stats::{PlayerStats, StatsCollection};
use crate::parsing::career_stats::parse_career_stats;
use crate::parsing::general_info::parse_general_info;
use crate::parsing::hero_summary::parse_hero_summaries;
use crate::parsing::{select_first, select_text, selector};

pub const PROFILE_NOT_FOUND: &str = "Profile Not Found";
pub const PRIVATE_PROFILE: &str = "Private Profile";

lazy_static! {
    static ref NOT_FOUND_MARKER: Selector = selector("h1.u-align-center");
    static ref PERMISSION_MARKER: Selector = selector("p.masthead-permission-level-text");
    static ref MASTHEAD: Selector = selector("div.masthead");
    static ref QUICKPLAY: Selector = selector("div#quickplay");
    static ref COMPETITIVE: Selector = selector("div#competitive");
}

/// Parses a fetched career page into player stats.
pub fn parse_profile(body: &[u8]) -> Result<PlayerStats, StatsError> {
    let before = Instant::now();
    let html = std::str::from_utf8(body)?;
    let document = Html::parse_document(html);
    let stats = assemble(&document);
    log::debug!("[PARSE] Profile parsed in {:.2?}", before.elapsed());
    stats
}

pub fn assemble(document: &Html) -> Result<PlayerStats, StatsError> {
    let root = document.root_element();
    if select_text(root, &NOT_FOUND_MARKER) == PROFILE_NOT_FOUND {
        return Err(StatsError::PlayerNotFound);
    }

    let mut stats = select_first(root, &MASTHEAD)
        .map(parse_general_info)
        .unwrap_or_default();

    if select_text(root, &PERMISSION_MARKER) == PRIVATE_PROFILE {
        stats.private = true;
        return Ok(stats);
    }

    stats.quick_play_stats = select_first(root, &QUICKPLAY)
        .map(parse_detailed_stats)
        .unwrap_or_default();
    stats.competitive_stats = select_first(root, &COMPETITIVE)
        .map(parse_detailed_stats)
        .unwrap_or_default();
    Ok(stats)
}

/// Top heroes and career stats of one game mode region.
pub fn parse_detailed_stats(region: ElementRef) -> StatsCollection {
    let collection = StatsCollection {
        top_heroes: parse_hero_summaries(region),
        career_stats: parse_career_stats(region),
    };
    log::debug!(
        "[PARSE] {} top heroes, {} career stat heroes",
        collection.top_heroes.len(),
        collection.career_stats.len()
    );
    collection
}
