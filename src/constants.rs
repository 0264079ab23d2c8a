use std::collections::BTreeMap;

use static_init::dynamic;

// e.g. https://www.stwno.de/infomax/daten-extern/csv/UNI-P/16.csv
pub const URL_PREFIX: &str = "https://www.stwno.de/infomax/daten-extern/csv";
pub const URL_POSTFIX: &str = ".csv";

pub const FILENAME_CONFIG: &str = "mensa_conf";
pub const FILENAME_CACHE: &str = "mensa_data";

pub const DEFAULT_CANTEEN: &str = "UNI_PASSAU_CANTEEN";

/// Names longer than this get shortened, together with their meal type tag
pub const NAME_MAX_LEN: usize = 60;
pub const ELLIPSIS: &str = "...";

pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31;1m";

/// Maps the canteen name to the abbreviation used in the online CSV source.
#[dynamic]
pub static CANTEENS_TO_ABBREV: BTreeMap<&'static str, &'static str> = BTreeMap::from([
    ("UNI_REGENSBURG_CANTEEN", "UNI-R"),
    ("UNI_REGENSBURG_GUEST_CANTEEN", "UNI-R-Gs"),
    ("UNI_REGENSBURG_CAFETERIA_PT", "Cafeteria-PT"),
    ("UNI_REGENSBURG_CAFETERIA_CHEMISTRY", "Cafeteria-Chemie"),
    ("UNI_REGENSBURG_CAFETERIA_SPORT", "Cafeteria-Sport"),
    ("OTH_REGENSBURG_CANTEEN_LUNCH", "HS-R-tag"),
    ("OTH_REGENSBURG_CANTEEN_DINNER", "HS-R-abend"),
    ("OTH_REGENSBURG_CAFETERIA_PRUEFENING", "Cafeteria-pruefening"),
    ("UNI_PASSAU_CANTEEN", "UNI-P"),
    ("UNI_PASSAU_NIKOLA_CAFETERIA", "Cafeteria-Nikolakloster"),
    ("HS_DEGGENDORF_CANTEEN", "HS-DEG"),
    ("HS_LANDSHUT_CANTEEN", "HS-LA"),
    ("HS_STRAUBING_CANTEEN", "HS-SR"),
    ("HS_PFARRKIRCHEN_CANTEEN", "HS-PAN"),
]);

#[dynamic]
pub static ABBREV_TO_CANTEENS: BTreeMap<&'static str, &'static str> = CANTEENS_TO_ABBREV
    .iter()
    .map(|(name, abbrev)| (*abbrev, *name))
    .collect();

pub fn canteen_abbrev(name: &str) -> Option<&'static str> {
    CANTEENS_TO_ABBREV.get(name).copied()
}

pub fn canteen_name(abbrev: &str) -> Option<&'static str> {
    ABBREV_TO_CANTEENS.get(abbrev).copied()
}
