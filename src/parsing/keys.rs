use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

lazy_static! {
    static ref PLURAL_MARKUP: Regex =
        Regex::new(r"\{count, plural, one \{.+\} other \{(.+)\}\}").expect("plural markup regex");
}

/// Characters the site uses in labels that never make it into a key.
const KEY_REPLACEMENTS: [(char, &str); 8] = [
    ('-', " "),
    ('.', " "),
    (':', " "),
    ('\'', ""),
    ('ú', "u"),
    ('Ú', "U"),
    ('ö', "o"),
    ('Ö', "O"),
];

/// Keywords the site labels inconsistently as singular or plural, in priority order.
const PLURAL_KEYWORDS: [(&str, &str); 16] = [
    ("kill", "kills"),
    ("multikill", "multikills"),
    ("death", "deaths"),
    ("generator", "generators"),
    ("shield", "shields"),
    ("enemy", "enemies"),
    ("turret", "turrets"),
    ("hit", "hits"),
    ("pad", "pads"),
    ("blow", "blows"),
    ("assist", "assists"),
    ("elimination", "eliminations"),
    ("card", "cards"),
    ("dragonblade", "dragonblades"),
    ("player", "players"),
    ("bomb", "bombs"),
];

/// Turns a display label ("Hero Damage Done", "D.Va", "Soldier: 76") into a camelCase key.
///
/// Keys that are already normalized come back unchanged, so the transform can be
/// applied repeatedly.
pub fn clean_key(label: &str) -> String {
    let label = label.trim();
    if is_clean(label) {
        return label.to_string();
    }

    let label = strip_plural_markup(label);
    let mut replaced = String::with_capacity(label.len());
    for c in label.chars() {
        match KEY_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => replaced.push_str(to),
            None => replaced.push(c),
        }
    }

    lower_first(&pascal_case(&replaced.to_lowercase()))
}

/// Collapses singular/plural variants of career stat keys onto the plural form.
///
/// Only the highest priority keyword segment is rewritten.
pub fn transform_key(key: &str) -> String {
    let mut parts = split_words(key);
    parts.sort_by_key(|part| keyword_index(part).unwrap_or(PLURAL_KEYWORDS.len()));

    for part in parts {
        if let Some(index) = keyword_index(part) {
            let plural = PLURAL_KEYWORDS[index].1;
            let replacement = if part.chars().next().map(char::is_uppercase).unwrap_or(false) {
                upper_first(plural)
            } else {
                plural.to_string()
            };
            return key.replacen(part, &replacement, 1);
        }
    }

    if key == "allDamageDone" {
        return "damageDone".to_string();
    }
    key.to_string()
}

fn is_clean(label: &str) -> bool {
    match label.chars().next() {
        None => true,
        Some(first) => {
            first.to_lowercase().eq(std::iter::once(first))
                && !label.chars().any(|c| c.is_whitespace() || is_replaced(c))
        }
    }
}

fn is_replaced(c: char) -> bool {
    KEY_REPLACEMENTS.iter().any(|(from, _)| *from == c)
}

fn strip_plural_markup(label: &str) -> String {
    if !label.contains("} other {") {
        return label.to_string();
    }
    match PLURAL_MARKUP.captures(label) {
        Some(caps) => {
            let other = caps[1].to_string();
            PLURAL_MARKUP.replace_all(label, NoExpand(&other)).into_owned()
        }
        None => label.to_string(),
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

/// Upper-cases the first letter of every word and drops all whitespace.
fn pascal_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            continue;
        }
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    result
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_words(key: &str) -> Vec<&str> {
    let mut words = vec![];
    let mut start = 0;
    for (i, c) in key.char_indices().skip(1) {
        if c.is_uppercase() {
            words.push(&key[start..i]);
            start = i;
        }
    }
    if start < key.len() {
        words.push(&key[start..]);
    }
    words
}

fn keyword_index(part: &str) -> Option<usize> {
    PLURAL_KEYWORDS
        .iter()
        .position(|(keyword, _)| keyword.eq_ignore_ascii_case(part))
}
