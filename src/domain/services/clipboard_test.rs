use super::ClipboardService;
use crate::domain::models::Author;
use crate::domain::models::Message;

#[test]
fn it_copies_a_single_message_as_is() {
    let messages = vec![Message::new(Author::Investor, "Strong team, weak market.")];
    assert_eq!(
        ClipboardService::format_messages(&messages),
        "Strong team, weak market."
    );
}

#[test]
fn it_prefixes_authors_for_transcripts() {
    let messages = vec![
        Message::new(Author::Investor, "What problem do you solve?"),
        Message::new(Author::Angel, "Copied."),
    ];

    insta::assert_snapshot!(ClipboardService::format_messages(&messages), @r###"
    Investor: What problem do you solve?

    Angel: Copied.
    "###);
}
