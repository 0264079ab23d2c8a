use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer};

use super::PriceTier;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single line of the weekly CSV, columns in source order:
/// `datum;tag;warengruppe;name;kennz;preis;stud;bed;gast`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MealRecord {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// weekday label as written by the source, not used for grouping
    pub day: String,
    pub allergens: String,
    pub name: String,
    pub meal_type: String,
    pub price: String,
    pub price_student: String,
    pub price_employee: String,
    pub price_guest: String,
}

impl MealRecord {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn price_for(&self, tier: PriceTier) -> &str {
        match tier {
            PriceTier::Student => &self.price_student,
            PriceTier::Employee => &self.price_employee,
            PriceTier::Guest => &self.price_guest,
        }
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(serde::de::Error::custom)
}
