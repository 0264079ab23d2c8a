use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::constants::{FILENAME_CACHE, FILENAME_CONFIG};
use crate::data_types::Config;
use crate::errors::{MensaError, MensaResult};

/// Where config and cached plan live.
#[derive(Debug, Clone)]
pub struct Paths {
    pub config: PathBuf,
    pub cache: PathBuf,
}

impl Paths {
    pub fn from_user_dirs() -> MensaResult<Self> {
        let config_dir = dirs::config_dir().ok_or(MensaError::NoUserDir("config"))?;
        let cache_dir = dirs::cache_dir().ok_or(MensaError::NoUserDir("cache"))?;
        Ok(Self::in_dirs(&config_dir, &cache_dir))
    }

    pub fn in_dirs(config_dir: &Path, cache_dir: &Path) -> Self {
        Paths {
            config: config_dir.join(FILENAME_CONFIG),
            cache: cache_dir.join(FILENAME_CACHE),
        }
    }

    fn cache_tmp(&self) -> PathBuf {
        self.cache.with_extension("tmp")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    Forced,
    NoCacheFile,
    NewDay,
    NewYear,
}

/// Decides if the cached plan can still be used. `None` means it can.
pub fn fetch_required(
    last_cached: NaiveDate,
    today: NaiveDate,
    cache_present: bool,
    force: bool,
) -> Option<FetchReason> {
    // a new day also covers the weekend switch to next week's plan
    let day_passed = last_cached.ordinal() < today.ordinal();

    if force {
        Some(FetchReason::Forced)
    } else if !cache_present {
        Some(FetchReason::NoCacheFile)
    } else if day_passed {
        Some(FetchReason::NewDay)
    } else if last_cached.iso_week().year() < today.iso_week().year()
        || last_cached.year() < today.year()
    {
        Some(FetchReason::NewYear)
    } else {
        None
    }
}

/// Loads the config, writing defaults if there is none or it can't be read as one.
pub fn load_config(paths: &Paths) -> MensaResult<Config> {
    let buffer = match fs::read(&paths.config) {
        Ok(buffer) => buffer,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = Config::default();
            log::warn!(
                "No configuration file at {}. Creating new one, defaulting to {}.",
                paths.config.display(),
                config.university
            );
            write_config(paths, &config)?;
            return Ok(config);
        }
        Err(e) => return Err(MensaError::io(&paths.config, e)),
    };

    match serde_json::from_slice::<Config>(&buffer) {
        Ok(config) => Ok(config),
        Err(e) => {
            let config = Config::default();
            log::warn!(
                "Malformed configuration file ({}). Defaulting to {}.",
                e,
                config.university
            );
            write_config(paths, &config)?;
            Ok(config)
        }
    }
}

pub fn write_config(paths: &Paths, config: &Config) -> MensaResult<()> {
    let buffer = serde_json::to_vec_pretty(config)?;
    create_parent(&paths.config)?;
    fs::write(&paths.config, buffer).map_err(|e| MensaError::io(&paths.config, e))
}

pub fn cache_present(paths: &Paths) -> bool {
    paths.cache.is_file()
}

pub fn read_cache(paths: &Paths) -> MensaResult<String> {
    fs::read_to_string(&paths.cache).map_err(|e| MensaError::io(&paths.cache, e))
}

/// Stores a freshly downloaded plan and its timestamp. The plan goes to a temp
/// file first and is only moved into place after the config was written.
pub fn store_fetched(
    paths: &Paths,
    config: &Config,
    plan: &str,
    now: DateTime<Local>,
) -> MensaResult<Config> {
    let tmp = paths.cache_tmp();
    create_parent(&tmp)?;
    fs::write(&tmp, plan).map_err(|e| MensaError::io(&tmp, e))?;

    let updated = config.with_cached(now);
    write_config(paths, &updated)?;

    fs::rename(&tmp, &paths.cache).map_err(|e| MensaError::io(&paths.cache, e))?;
    log::debug!("cached plan at {}", paths.cache.display());
    Ok(updated)
}

/// Deletes config and cache. Files that are already gone are fine.
pub fn clear(paths: &Paths) -> MensaResult<()> {
    for path in [&paths.config, &paths.cache, &paths.cache_tmp()] {
        match fs::remove_file(path) {
            Ok(()) => log::debug!("removed {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(MensaError::io(path, e)),
        }
    }
    Ok(())
}

fn create_parent(path: &Path) -> MensaResult<()> {
    match path.parent() {
        Some(dir) => fs::create_dir_all(dir).map_err(|e| MensaError::io(dir, e)),
        None => Ok(()),
    }
}
