use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parsing::value::Value;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub icon: String,
    pub name: String,
    pub level: i64,
    pub level_icon: String,
    pub endorsement: i64,
    pub endorsement_icon: String,
    pub prestige: i64,
    pub prestige_icon: String,
    pub ratings: Vec<Rating>,
    pub games_won: i64,
    pub quick_play_stats: StatsCollection,
    pub competitive_stats: StatsCollection,
    pub private: bool,
}

/// Skill rating for one competitive role.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub level: i64,
    pub role: String,
    pub role_icon: String,
    pub rank_icon: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsCollection {
    pub top_heroes: HashMap<String, TopHeroStats>,
    pub career_stats: HashMap<String, CareerStats>,
}

impl StatsCollection {
    pub fn is_empty(&self) -> bool {
        self.top_heroes.is_empty() && self.career_stats.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopHeroStats {
    pub time_played: String,
    pub time_played_in_seconds: i64,
    pub games_won: i64,
    pub win_percentage: i64,
    pub weapon_accuracy: i64,
    pub eliminations_per_life: f64,
    pub multi_kill_best: i64,
    pub objective_kills: f64,
}

pub type StatMap = HashMap<String, Value>;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerStats {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub assists: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub best: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub combat: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deaths: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hero_specific: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub game: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub match_awards: Option<StatMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub miscellaneous: Option<StatMap>,
}

impl CareerStats {
    pub fn get(&self, category: CareerCategory) -> Option<&StatMap> {
        match category {
            CareerCategory::Assists => self.assists.as_ref(),
            CareerCategory::Average => self.average.as_ref(),
            CareerCategory::Best => self.best.as_ref(),
            CareerCategory::Combat => self.combat.as_ref(),
            CareerCategory::Deaths => self.deaths.as_ref(),
            CareerCategory::HeroSpecific => self.hero_specific.as_ref(),
            CareerCategory::Game => self.game.as_ref(),
            CareerCategory::MatchAwards => self.match_awards.as_ref(),
            CareerCategory::Miscellaneous => self.miscellaneous.as_ref(),
        }
    }

    /// The bucket for `category`, created on first use.
    pub fn bucket_mut(&mut self, category: CareerCategory) -> &mut StatMap {
        let bucket = match category {
            CareerCategory::Assists => &mut self.assists,
            CareerCategory::Average => &mut self.average,
            CareerCategory::Best => &mut self.best,
            CareerCategory::Combat => &mut self.combat,
            CareerCategory::Deaths => &mut self.deaths,
            CareerCategory::HeroSpecific => &mut self.hero_specific,
            CareerCategory::Game => &mut self.game,
            CareerCategory::MatchAwards => &mut self.match_awards,
            CareerCategory::Miscellaneous => &mut self.miscellaneous,
        };
        bucket.get_or_insert_with(HashMap::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerCategory {
    Assists,
    Average,
    Best,
    Combat,
    Deaths,
    HeroSpecific,
    Game,
    MatchAwards,
    Miscellaneous,
}

impl CareerCategory {
    pub fn get_all() -> Vec<CareerCategory> {
        vec![
            CareerCategory::Assists,
            CareerCategory::Average,
            CareerCategory::Best,
            CareerCategory::Combat,
            CareerCategory::Deaths,
            CareerCategory::HeroSpecific,
            CareerCategory::Game,
            CareerCategory::MatchAwards,
            CareerCategory::Miscellaneous,
        ]
    }

    /// Maps a normalized panel title onto its bucket.
    pub fn from_key(key: &str) -> Option<CareerCategory> {
        match key {
            "assists" => Some(CareerCategory::Assists),
            "average" => Some(CareerCategory::Average),
            "best" => Some(CareerCategory::Best),
            "combat" => Some(CareerCategory::Combat),
            "deaths" => Some(CareerCategory::Deaths),
            "heroSpecific" => Some(CareerCategory::HeroSpecific),
            "game" => Some(CareerCategory::Game),
            "matchAwards" => Some(CareerCategory::MatchAwards),
            "miscellaneous" => Some(CareerCategory::Miscellaneous),
            _ => None,
        }
    }
}
