use super::SlashCommand;

#[test]
fn it_parses_quit() {
    for text in ["/q", "/quit", "/exit"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_quit());
        assert!(!cmd.is_finish());
    }
}

#[test]
fn it_parses_finish() {
    let cmd = SlashCommand::parse("/finish").unwrap();
    assert!(cmd.is_finish());
    assert!(SlashCommand::parse("/f").unwrap().is_finish());
}

#[test]
fn it_parses_new() {
    assert!(SlashCommand::parse("/new").unwrap().is_new());
    assert!(SlashCommand::parse("/n").unwrap().is_new());
}

#[test]
fn it_parses_copy_and_help() {
    assert!(SlashCommand::parse("/copy").unwrap().is_copy());
    assert!(SlashCommand::parse("/h").unwrap().is_help());
}

#[test]
fn it_parses_args_and_whitespace() {
    let cmd = SlashCommand::parse("  /finish now ").unwrap();
    assert!(cmd.is_finish());
    assert_eq!(cmd.args, vec!["now".to_string()]);
}

#[test]
fn it_ignores_plain_text() {
    assert!(SlashCommand::parse("We reduce churn").is_none());
    assert!(SlashCommand::parse("/unknown").is_none());
    assert!(SlashCommand::parse("").is_none());
    assert!(SlashCommand::parse("/tmp/deck.pdf").is_none());
}
