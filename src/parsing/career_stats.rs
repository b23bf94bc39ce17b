use std::collections::HashMap;

use lazy_static::lazy_static;
use scraper::{ElementRef, Selector};
use tracing::log;

use crate::models_api::player_stats::{CareerCategory, CareerStats};
use crate::parsing::keys::{clean_key, transform_key};
use crate::parsing::value::Value;
use crate::parsing::{element_text, select_text, selector};

lazy_static! {
    static ref HERO_OPTION: Selector = selector("select option");
    static ref STAT_BLOCK: Selector = selector("div.row div.js-stats");
    static ref STAT_PANEL: Selector = selector("div.column.xs-12");
    static ref STAT_TITLE: Selector = selector(".stat-title");
    static ref STAT_ROW: Selector = selector("table.data-table tbody tr");
    static ref STAT_CELL: Selector = selector("td");
}

/// Reads the detailed stat tables of one game mode, keyed by normalized hero name.
pub fn parse_career_stats(region: ElementRef) -> HashMap<String, CareerStats> {
    let hero_names = hero_names_by_id(region);
    let mut careers: HashMap<String, CareerStats> = HashMap::new();

    for block in region.select(&STAT_BLOCK) {
        let hero_id = block.value().attr("data-category-id").unwrap_or_default();
        let hero = match hero_names.get(hero_id) {
            Some(hero) => hero,
            None => {
                log::debug!("[PARSE] No hero option for stat block {hero_id}");
                continue;
            }
        };

        for panel in block.select(&STAT_PANEL) {
            let title = clean_key(&select_text(panel, &STAT_TITLE));
            let category = match CareerCategory::from_key(&title) {
                Some(category) => category,
                None => continue,
            };

            for row in panel.select(&STAT_ROW) {
                if let Some((key, value)) = parse_stat_row(row) {
                    careers
                        .entry(hero.clone())
                        .or_default()
                        .bucket_mut(category)
                        .insert(key, value);
                }
            }
        }
    }
    careers
}

/// Hero id (as used by the stat blocks) -> normalized hero name.
fn hero_names_by_id(region: ElementRef) -> HashMap<String, String> {
    region
        .select(&HERO_OPTION)
        .filter_map(|option| {
            option
                .value()
                .attr("value")
                .map(|id| (id.to_string(), clean_key(&element_text(option))))
        })
        .collect()
}

fn parse_stat_row(row: ElementRef) -> Option<(String, Value)> {
    let mut cells = row.select(&STAT_CELL);
    let key = transform_key(&clean_key(&element_text(cells.next()?)));
    let value = element_text(cells.next()?).replace(',', "");
    Some((key, Value::coerce(&value)))
}
