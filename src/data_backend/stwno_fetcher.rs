use std::time::Instant;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::constants::URL_POSTFIX;
use crate::data_backend::repair;
use crate::errors::{MensaError, MensaResult};

/// ISO week whose plan is wanted: the current one, or the upcoming one on weekends.
pub fn target_week(today: NaiveDate) -> u32 {
    match today.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let days_left = 7 - today.weekday().num_days_from_monday() as i64;
            let next_monday = today + Duration::days(days_left);
            next_monday.iso_week().week()
        }
        _ => today.iso_week().week(),
    }
}

pub fn generate_url(base_url: &str, canteen_abbrev: &str, week: u32) -> String {
    format!("{}/{}/{}{}", base_url, canteen_abbrev, week, URL_POSTFIX)
}

pub async fn get_csv(client: &reqwest::Client, url: &str) -> MensaResult<Vec<u8>> {
    let resp = client.get(url).send().await?;

    if !resp.status().is_success() {
        return Err(MensaError::HttpStatus {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    Ok(resp.bytes().await?.to_vec())
}

/// Downloads the plan of `canteen_abbrev` for the week relevant at `today` from
/// below `base_url` (normally [`crate::constants::URL_PREFIX`]) and returns it
/// repaired, ready to be cached and parsed.
pub async fn download_week(
    base_url: &str,
    canteen_abbrev: &str,
    today: NaiveDate,
    strip_chars: &str,
) -> MensaResult<String> {
    let url = generate_url(base_url, canteen_abbrev, target_week(today));
    log::debug!("fetching {}", url);

    let now = Instant::now();
    let client = reqwest::Client::new();
    let raw = get_csv(&client, &url).await?;
    log::debug!("got {} bytes after {:.2?}", raw.len(), now.elapsed());

    repair(&raw, strip_chars)
}
