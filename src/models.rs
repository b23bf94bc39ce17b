use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    PC,
    XBL,
    PSN,
    NintendoSwitch,
}

impl Platform {
    pub fn get_all() -> Vec<Platform> {
        vec![Platform::PC, Platform::XBL, Platform::PSN, Platform::NintendoSwitch]
    }

    pub fn get_token(&self) -> &'static str {
        match self {
            Platform::PC => "pc",
            Platform::XBL => "xbl",
            Platform::PSN => "psn",
            Platform::NintendoSwitch => "nintendo-switch",
        }
    }

    /// Path of the career page for `tag`, relative to the configured base url.
    pub fn profile_path(&self, tag: &str) -> String {
        match self {
            Platform::PC => format!("/pc/{tag}"),
            console => format!("/{}/{tag}", console.get_token()),
        }
    }
}

impl FromStr for Platform {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pc" => Ok(Platform::PC),
            "xbl" => Ok(Platform::XBL),
            "psn" => Ok(Platform::PSN),
            "nintendo-switch" => Ok(Platform::NintendoSwitch),
            _ => Err(ParseStringError),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_token())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;
