use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Level border identifiers per prestige tier, ten borders to a tier.
const PRESTIGE_BORDERS: [(i64, [&str; 10]); 18] = [
    // Bronze
    (0, ["918", "919", "91A", "91B", "91C", "91D", "91E", "91F", "920", "921"]),
    (1, ["922", "923", "924", "925", "926", "927", "928", "929", "92A", "92B"]),
    (2, ["92C", "92D", "92E", "92F", "930", "931", "932", "933", "934", "935"]),
    (3, ["936", "937", "938", "939", "93A", "93B", "93C", "93D", "93E", "93F"]),
    (4, ["940", "941", "942", "943", "944", "945", "946", "947", "948", "949"]),
    (5, ["94A", "94B", "94C", "94D", "94E", "94F", "950", "951", "952", "953"]),
    // Silver
    (6, ["954", "955", "956", "957", "958", "959", "95A", "95B", "95C", "95D"]),
    (7, ["95E", "95F", "960", "961", "962", "963", "964", "965", "966", "967"]),
    (8, ["968", "969", "96A", "96B", "96C", "96D", "96E", "96F", "970", "971"]),
    (9, ["972", "973", "974", "975", "976", "977", "978", "979", "97A", "97B"]),
    (10, ["97C", "97D", "97E", "97F", "980", "981", "982", "983", "984", "985"]),
    (11, ["986", "987", "988", "989", "98A", "98B", "98C", "98D", "98E", "98F"]),
    // Gold
    (12, ["990", "991", "992", "993", "994", "995", "996", "997", "998", "999"]),
    (13, ["99A", "99B", "99C", "99D", "99E", "99F", "9A0", "9A1", "9A2", "9A3"]),
    (14, ["9A4", "9A5", "9A6", "9A7", "9A8", "9A9", "9AA", "9AB", "9AC", "9AD"]),
    (15, ["9AE", "9AF", "9B0", "9B1", "9B2", "9B3", "9B4", "9B5", "9B6", "9B7"]),
    (16, ["9B8", "9B9", "9BA", "9BB", "9BC", "9BD", "9BE", "9BF", "9C0", "9C1"]),
    (17, ["9C2", "9C3", "9C4", "9C5", "9C6", "9C7", "9C8", "9C9", "9CA", "9CB"]),
];

lazy_static! {
    static ref BORDER_ID: Regex =
        Regex::new(r"0x0250000000000([0-9A-F]{3})_Border").expect("border id regex");
    static ref PRESTIGE_BY_BORDER: HashMap<&'static str, i64> = PRESTIGE_BORDERS
        .iter()
        .flat_map(|(tier, ids)| ids.iter().map(move |id| (*id, *tier)))
        .collect();
}

/// Resolves the prestige tier encoded in a level icon url, 0 when unknown.
pub fn prestige_by_icon(level_icon: &str) -> i64 {
    BORDER_ID
        .captures(level_icon)
        .and_then(|caps| caps.get(1))
        .and_then(|id| PRESTIGE_BY_BORDER.get(id.as_str()))
        .copied()
        .unwrap_or(0)
}
