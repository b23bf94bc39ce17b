use std::collections::HashMap;

use lazy_static::lazy_static;
use scraper::{ElementRef, Selector};

use crate::models_api::player_stats::TopHeroStats;
use crate::parsing::keys::clean_key;
use crate::parsing::{parse_float, parse_int, select_text, selector};

const CATEGORY_PREFIX: &str = "overwatch.guid.0x0860000000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TopHeroField {
    TimePlayed,
    GamesWon,
    WinPercentage,
    WeaponAccuracy,
    EliminationsPerLife,
    MultiKillBest,
    ObjectiveKills,
}

/// Progress category code -> the field it fills.
pub(crate) const TOP_HERO_CODES: [(&str, TopHeroField); 7] = [
    ("021", TopHeroField::TimePlayed),
    ("039", TopHeroField::GamesWon),
    ("3D1", TopHeroField::WinPercentage),
    ("02F", TopHeroField::WeaponAccuracy),
    ("3D2", TopHeroField::EliminationsPerLife),
    ("346", TopHeroField::MultiKillBest),
    ("39C", TopHeroField::ObjectiveKills),
];

impl TopHeroField {
    pub(crate) fn from_code(code: &str) -> Option<TopHeroField> {
        TOP_HERO_CODES
            .iter()
            .find(|(e, _)| *e == code)
            .map(|(_, field)| *field)
    }
}

lazy_static! {
    static ref PROGRESS_CATEGORY: Selector = selector("div.progress-category");
    static ref HERO_ROW: Selector = selector("div.progress-2");
    static ref HERO_TITLE: Selector = selector("div.title");
    static ref HERO_VALUE: Selector = selector("div.description");
}

/// Collects the per hero summary bars of one game mode, keyed by normalized hero name.
pub fn parse_hero_summaries(region: ElementRef) -> HashMap<String, TopHeroStats> {
    let mut heroes: HashMap<String, TopHeroStats> = HashMap::new();

    for category in region.select(&PROGRESS_CATEGORY) {
        let code = category
            .value()
            .attr("data-category-id")
            .unwrap_or_default()
            .replace(CATEGORY_PREFIX, "");
        let field = TopHeroField::from_code(&code);

        for row in category.select(&HERO_ROW) {
            let hero = clean_key(&select_text(row, &HERO_TITLE));
            let value = select_text(row, &HERO_VALUE);
            let entry = heroes.entry(hero).or_default();
            if let Some(field) = field {
                apply(entry, field, &value);
            }
        }
    }
    heroes
}

fn apply(stats: &mut TopHeroStats, field: TopHeroField, value: &str) {
    match field {
        TopHeroField::TimePlayed => {
            stats.time_played_in_seconds = time_played_in_seconds(value);
            stats.time_played = value.to_string();
        }
        TopHeroField::GamesWon => stats.games_won = parse_int(value),
        TopHeroField::WinPercentage => stats.win_percentage = parse_int(&value.replace('%', "")),
        TopHeroField::WeaponAccuracy => stats.weapon_accuracy = parse_int(&value.replace('%', "")),
        TopHeroField::EliminationsPerLife => stats.eliminations_per_life = parse_float(value),
        TopHeroField::MultiKillBest => stats.multi_kill_best = parse_int(value),
        TopHeroField::ObjectiveKills => stats.objective_kills = parse_float(value),
    }
}

/// "12 hours" -> 43200. Anything but `<number> <unit>` is 0.
pub fn time_played_in_seconds(text: &str) -> i64 {
    let parts: Vec<&str> = text.split(' ').collect();
    if parts.len() != 2 {
        return 0;
    }
    let magnitude: i64 = match parts[0].parse() {
        Ok(e) => e,
        Err(_) => return 0,
    };
    let unit = parts[1];
    let scale = if unit.starts_with("second") {
        1
    } else if unit.starts_with("minute") {
        60
    } else if unit.starts_with("hour") {
        60 * 60
    } else {
        return 0;
    };
    magnitude.checked_mul(scale).unwrap_or_default()
}
