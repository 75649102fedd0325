use anyhow::bail;
use anyhow::Result;

use super::build;
use super::run;
use crate::configuration::ConfigKey;

#[test]
fn it_reads_the_deck_from_the_interview_subcommand() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "angel",
        "interview",
        "--deck",
        "./pitch.pdf",
    ])?;

    match matches.subcommand() {
        Some(("interview", subcmd_matches)) => {
            let deck = subcmd_matches.get_one::<String>(&ConfigKey::Deck.to_string());
            assert_eq!(deck, Some(&"./pitch.pdf".to_string()));
        }
        _ => bail!("Wrong subcommand"),
    }

    return Ok(());
}

#[test]
fn it_accepts_global_flags_after_subcommands() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "angel",
        "interview",
        "--backend-url",
        "http://localhost:9999",
    ])?;

    let (_, subcmd_matches) = matches.subcommand().unwrap();
    let url = subcmd_matches.get_one::<String>(&ConfigKey::BackendURL.to_string());
    assert_eq!(url, Some(&"http://localhost:9999".to_string()));

    return Ok(());
}

#[test]
fn it_rejects_unknown_subcommands() {
    let res = build().try_get_matches_from(vec!["angel", "chat"]);
    assert!(res.is_err());
}

#[tokio::test]
async fn it_does_not_start_the_ui_for_helpers() -> Result<()> {
    let matches = build().try_get_matches_from(vec!["angel", "config", "path"])?;
    assert!(!run(matches).await?);

    let matches = build().try_get_matches_from(vec!["angel", "debug", "enum-config"])?;
    assert!(!run(matches).await?);

    return Ok(());
}
