use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Base URL of the interview backend.
    backend-url = "http://127.0.0.1:5000"

    # Your name, displayed on your chat bubbles.
    # username = ""
    "###);
}

#[test]
fn it_names_config_keys() {
    assert_eq!(ConfigKey::BackendURL.to_string(), "backend-url");
    assert_eq!(ConfigKey::ConfigFile.to_string(), "config-file");
    assert_eq!(ConfigKey::Deck.to_string(), "deck");
    assert_eq!(ConfigKey::Username.to_string(), "username");
}

#[test]
fn it_defaults_the_backend_url() {
    assert_eq!(
        Config::default(ConfigKey::BackendURL),
        "http://127.0.0.1:5000"
    );
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
    assert!(!Config::default(ConfigKey::Username).is_empty());
}

#[tokio::test]
async fn it_loads_config_from_file_and_flags() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["angel", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::BackendURL), "http://localhost:5000");

    let matches = cli::build().try_get_matches_from(vec![
        "angel",
        "-c",
        "./config.example.toml",
        "--backend-url",
        "http://localhost:9999",
    ])?;
    Config::load(vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::BackendURL), "http://localhost:9999");

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["angel", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
