use std::{env, io::Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local};

use crate::cache_operations::{
    cache_present, clear, fetch_required, load_config, read_cache, store_fetched, Paths,
};
use crate::constants::{canteen_name, URL_PREFIX};
use crate::data_backend::{stwno_fetcher::download_week, stwno_parser::parse_meals};
use crate::data_types::PrintOptions;
use crate::meal_printer::print_meals;

/// What the user asked for on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunFlags {
    pub clear: bool,
    pub force_download: bool,
    pub today_only: bool,
    pub no_color: bool,
}

pub fn logger_init(module_path: &str) {
    let level = if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
        == "debug"
    {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .filter_module(module_path, level)
        .init();
}

/// One complete invocation: decide between cache and download, then print the week.
pub async fn run<W: Write>(
    paths: &Paths,
    flags: RunFlags,
    now: DateTime<Local>,
    out: &mut W,
) -> Result<()> {
    run_from(URL_PREFIX, paths, flags, now, out).await
}

/// [`run`] with the plans downloaded below `base_url`.
pub async fn run_from<W: Write>(
    base_url: &str,
    paths: &Paths,
    flags: RunFlags,
    now: DateTime<Local>,
    out: &mut W,
) -> Result<()> {
    if flags.clear {
        clear(paths).context("Could not clear config and cache")?;
        load_config(paths)?;
        return Ok(());
    }

    let config = load_config(paths).context("Could not load config")?;
    let canteen = match canteen_name(&config.university) {
        Some(name) => name,
        None => {
            log::warn!("Unknown canteen '{}', using it as is", config.university);
            config.university.as_str()
        }
    };

    let today = now.date_naive();
    let meals = match fetch_required(
        config.cached.date_naive(),
        today,
        cache_present(paths),
        flags.force_download,
    ) {
        Some(reason) => {
            log::debug!("downloading, reason: {:?}", reason);
            writeln!(out, "Downloading new data... {}", canteen)?;
            let plan = download_week(base_url, &config.university, today, &config.strip)
                .await
                .with_context(|| format!("Could not download the plan of {}", canteen))?;
            // a plan that doesn't parse must not replace a good cache
            let meals = parse_meals(plan.as_bytes()).context("Could not parse the plan")?;
            store_fetched(paths, &config, &plan, now).context("Could not cache the plan")?;
            meals
        }
        None => {
            writeln!(out, "Using cached data of {}", canteen)?;
            let plan = read_cache(paths).context("Could not read cached plan")?;
            parse_meals(plan.as_bytes()).context("Could not parse the cached plan")?
        }
    };

    let options = PrintOptions {
        tier: config.price,
        color: !flags.no_color,
        today: flags.today_only.then(|| now.weekday()),
    };
    print_meals(out, &meals, &options)?;

    Ok(())
}
