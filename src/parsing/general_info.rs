use lazy_static::lazy_static;
use scraper::{ElementRef, Selector};

use crate::models_api::player_stats::{PlayerStats, Rating};
use crate::parsing::prestige::prestige_by_icon;
use crate::parsing::{background_url, parse_int, select_attr, select_text, selector};

const ROLE_SUFFIX: &str = " Skill Rating";

#[derive(Debug, Clone, Copy)]
enum GeneralField {
    Icon,
    Name,
    Level,
    LevelIcon,
    PrestigeIcon,
    Endorsement,
    EndorsementIcon,
    GamesWon,
}

#[derive(Debug, Clone, Copy)]
enum ReadKind {
    Text,
    Attr(&'static str),
    BackgroundUrl,
    TextWithout(&'static str),
}

const GENERAL_RULES: [(&str, GeneralField, ReadKind); 8] = [
    ("img.player-portrait", GeneralField::Icon, ReadKind::Attr("src")),
    ("h1.header-masthead", GeneralField::Name, ReadKind::Text),
    ("div.player-level div.u-vertical-center", GeneralField::Level, ReadKind::Text),
    ("div.player-level", GeneralField::LevelIcon, ReadKind::BackgroundUrl),
    ("div.player-rank", GeneralField::PrestigeIcon, ReadKind::BackgroundUrl),
    ("div.endorsement-level div.u-center", GeneralField::Endorsement, ReadKind::Text),
    ("div.EndorsementIcon", GeneralField::EndorsementIcon, ReadKind::BackgroundUrl),
    ("p.masthead-detail.h4 span", GeneralField::GamesWon, ReadKind::TextWithout(" games won")),
];

lazy_static! {
    static ref RULE_SELECTORS: Vec<Selector> =
        GENERAL_RULES.iter().map(|(css, _, _)| selector(css)).collect();
    static ref RANK_ROLE: Selector = selector("div.competitive-rank div.competitive-rank-role");
    static ref RANK_TOOLTIP: Selector = selector("div.competitive-rank-tier-tooltip");
    static ref ROLE_ICON: Selector = selector("img.competitive-rank-role-icon");
    static ref RANK_ICON: Selector = selector("img.competitive-rank-tier-icon");
    static ref RANK_LEVEL: Selector = selector("div.competitive-rank-level");
}

/// Reads identity fields and role ratings from the masthead.
pub fn parse_general_info(masthead: ElementRef) -> PlayerStats {
    let mut stats = PlayerStats::default();
    for ((_, field, kind), selector) in GENERAL_RULES.iter().zip(RULE_SELECTORS.iter()) {
        let value = read(masthead, selector, *kind);
        assign(&mut stats, *field, value);
    }
    stats.prestige = prestige_by_icon(&stats.level_icon);
    stats.ratings = parse_ratings(masthead);
    stats
}

fn read(masthead: ElementRef, selector: &Selector, kind: ReadKind) -> String {
    match kind {
        ReadKind::Text => select_text(masthead, selector),
        ReadKind::Attr(attr) => select_attr(masthead, selector, attr),
        ReadKind::BackgroundUrl => background_url(&select_attr(masthead, selector, "style")),
        ReadKind::TextWithout(suffix) => select_text(masthead, selector).replace(suffix, ""),
    }
}

fn assign(stats: &mut PlayerStats, field: GeneralField, value: String) {
    match field {
        GeneralField::Icon => stats.icon = value,
        GeneralField::Name => stats.name = value,
        GeneralField::Level => stats.level = parse_int(&value),
        GeneralField::LevelIcon => stats.level_icon = value,
        GeneralField::PrestigeIcon => stats.prestige_icon = value,
        GeneralField::Endorsement => stats.endorsement = parse_int(&value),
        GeneralField::EndorsementIcon => stats.endorsement_icon = value,
        GeneralField::GamesWon => stats.games_won = parse_int(&value),
    }
}

fn parse_ratings(masthead: ElementRef) -> Vec<Rating> {
    masthead
        .select(&RANK_ROLE)
        .map(|role| Rating {
            level: parse_int(&select_text(role, &RANK_LEVEL)),
            role: select_attr(role, &RANK_TOOLTIP, "data-ow-tooltip-text")
                .replace(ROLE_SUFFIX, "")
                .to_lowercase(),
            role_icon: select_attr(role, &ROLE_ICON, "src"),
            rank_icon: select_attr(role, &RANK_ICON, "src"),
        })
        .collect()
}
