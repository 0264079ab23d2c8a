pub mod stwno_data_types;

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{canteen_abbrev, DEFAULT_CANTEEN};

/// Which of the three price columns is shown
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PriceTier {
    #[default]
    Student,
    Employee,
    Guest,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceTier::Student => "Student",
            PriceTier::Employee => "Employee",
            PriceTier::Guest => "Guest",
        };
        f.write_str(label)
    }
}

/// Layout of the saved config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// canteen abbreviation as used in the download url
    pub university: String,
    /// time of the last successful download
    pub cached: DateTime<Local>,
    /// older config files have no price yet
    #[serde(default)]
    pub price: PriceTier,
    /// characters removed from the downloaded plan
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub strip: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            university: canteen_abbrev(DEFAULT_CANTEEN)
                .unwrap_or("UNI-P")
                .to_string(),
            cached: DateTime::<Utc>::default().with_timezone(&Local),
            price: PriceTier::default(),
            strip: String::new(),
        }
    }
}

impl Config {
    /// Same config, but marked as freshly downloaded at `now`
    pub fn with_cached(&self, now: DateTime<Local>) -> Self {
        Config {
            cached: now,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub tier: PriceTier,
    pub color: bool,
    /// only print meals of this weekday
    pub today: Option<chrono::Weekday>,
}
