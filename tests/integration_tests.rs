use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use stwno_mensa_rs::cache_operations::{load_config, write_config, Paths};
use stwno_mensa_rs::data_types::{Config, PriceTier};
use stwno_mensa_rs::shared_main::{run, run_from, RunFlags};
use tempfile::TempDir;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

// monday
fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 1, 11, 45, 0).unwrap()
}

/// Config and cache as if the plan had been downloaded this morning.
fn cached_setup(dir: &TempDir) -> Result<Paths> {
    setup_cached_at(dir, Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
}

fn setup_cached_at(dir: &TempDir, cached: DateTime<Local>) -> Result<Paths> {
    let paths = Paths::in_dirs(&dir.path().join("config"), &dir.path().join("cache"));
    let config = Config {
        cached,
        price: PriceTier::Guest,
        ..Config::default()
    };
    write_config(&paths, &config)?;
    fs::create_dir_all(paths.cache.parent().unwrap())?;
    fs::copy(data_file("week.csv"), &paths.cache)?;
    Ok(paths)
}

async fn run_to_string(paths: &Paths, flags: RunFlags) -> Result<String> {
    let mut output = Vec::new();
    run(paths, flags, now(), &mut output).await?;
    Ok(String::from_utf8(output)?)
}

#[tokio::test]
async fn prints_cached_week() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = cached_setup(&dir)?;
    let flags = RunFlags {
        no_color: true,
        ..RunFlags::default()
    };

    let output = run_to_string(&paths, flags).await?;
    let expected = fs::read_to_string(data_file("week.output.txt"))?;
    assert_eq!(output, expected);
    Ok(())
}

#[tokio::test]
async fn prints_only_today() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = cached_setup(&dir)?;
    let flags = RunFlags {
        today_only: true,
        no_color: true,
        ..RunFlags::default()
    };

    let output = run_to_string(&paths, flags).await?;
    assert_eq!(
        output,
        "Using cached data of UNI_PASSAU_CANTEEN\n\
         01.01.2024 Monday:\n    - 2,00 : Kartoffelsuppe [V]\n\
         \x20   - 5,90 : Schweinebraten mit Kartoffelknödel [S]\n"
    );
    Ok(())
}

#[tokio::test]
async fn broken_cache_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = cached_setup(&dir)?;
    fs::write(
        &paths.cache,
        "datum;tag;warengruppe;name;kennz;preis;stud;bed;gast\n01.01.2024;Mo;Suppe\n",
    )?;

    let result = run_to_string(&paths, RunFlags::default()).await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn clear_resets_to_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = cached_setup(&dir)?;
    let flags = RunFlags {
        clear: true,
        ..RunFlags::default()
    };

    let output = run_to_string(&paths, flags).await?;
    assert!(output.is_empty());
    assert!(!paths.cache.exists());
    assert_eq!(load_config(&paths)?, Config::default());
    Ok(())
}

#[tokio::test]
async fn unknown_canteen_is_shown_by_code() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = cached_setup(&dir)?;
    let config = Config {
        university: "HS-XY".to_string(),
        ..load_config(&paths)?
    };
    write_config(&paths, &config)?;

    let output = run_to_string(&paths, RunFlags::default()).await?;
    assert!(output.starts_with("Using cached data of HS-XY\n"));
    Ok(())
}

// windows-1252, with one record split over two lines
const DOWNLOADED_WEEK: &[u8] = b"datum;tag;warengruppe;name;kennz;preis;stud;bed;gast\r\n\
    01.01.2024;Mo;HG1;Gr\xfcnkohl mit Pinkel\r\n;S;;3,20;4,40;5,90\r\n";

/// Config and cache from last year, so the next run downloads.
fn stale_setup(dir: &TempDir) -> Result<Paths> {
    setup_cached_at(dir, Local.with_ymd_and_hms(2023, 12, 31, 18, 0, 0).unwrap())
}

async fn download_run(server: &mockito::Server, paths: &Paths) -> Result<String> {
    let flags = RunFlags {
        no_color: true,
        ..RunFlags::default()
    };
    let mut output = Vec::new();
    run_from(&server.url(), paths, flags, now(), &mut output).await?;
    Ok(String::from_utf8(output)?)
}

#[tokio::test]
async fn stale_cache_is_downloaded_again() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = stale_setup(&dir)?;
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/UNI-P/1.csv")
        .with_status(200)
        .with_body(DOWNLOADED_WEEK)
        .create_async()
        .await;

    let output = download_run(&server, &paths).await?;

    mock.assert_async().await;
    assert_eq!(
        output,
        "Downloading new data... UNI_PASSAU_CANTEEN\n\
         01.01.2024 Monday:\n\
         \x20   - 5,90 : Grünkohl mit Pinkel [S]\n"
    );
    assert_eq!(
        fs::read_to_string(&paths.cache)?,
        "datum;tag;warengruppe;name;kennz;preis;stud;bed;gast\r\n\
         01.01.2024;Mo;HG1;Grünkohl mit Pinkel;S;;3,20;4,40;5,90\r\n"
    );

    let config = load_config(&paths)?;
    assert_eq!(config.cached, now());
    assert_eq!(config.price, PriceTier::Guest);
    Ok(())
}

#[tokio::test]
async fn failed_download_keeps_cache() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = stale_setup(&dir)?;
    let config_before = fs::read(&paths.config)?;
    let cache_before = fs::read(&paths.cache)?;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/UNI-P/1.csv")
        .with_status(404)
        .create_async()
        .await;

    assert!(download_run(&server, &paths).await.is_err());
    assert_eq!(fs::read(&paths.config)?, config_before);
    assert_eq!(fs::read(&paths.cache)?, cache_before);
    Ok(())
}

#[tokio::test]
async fn unparsable_download_keeps_cache() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = stale_setup(&dir)?;
    let config_before = fs::read(&paths.config)?;
    let cache_before = fs::read(&paths.cache)?;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/UNI-P/1.csv")
        .with_status(200)
        .with_body("datum;tag;warengruppe;name;kennz;preis;stud;bed;gast\n01.01.2024;Mo\n")
        .create_async()
        .await;

    assert!(download_run(&server, &paths).await.is_err());
    assert_eq!(fs::read(&paths.config)?, config_before);
    assert_eq!(fs::read(&paths.cache)?, cache_before);
    Ok(())
}
