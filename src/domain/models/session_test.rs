use super::Phase;
use super::Session;
use crate::domain::models::Role;
use crate::domain::models::Turn;

#[test]
fn it_starts_empty() {
    let session = Session::default();
    assert!(session.transcript.is_empty());
    assert!(!session.started);
    assert!(!session.finished);
    assert_eq!(session.final_review, None);
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn it_derives_in_progress_phase() {
    let session = Session {
        started: true,
        ..Session::default()
    };
    assert_eq!(session.phase(), Phase::InProgress);
}

#[test]
fn it_prefers_finished_phase() {
    let session = Session {
        started: true,
        finished: true,
        ..Session::default()
    };
    assert_eq!(session.phase(), Phase::Finished);
}

#[test]
fn it_resets_every_field() {
    let mut session = Session {
        transcript: vec![
            Turn::assistant("What problem do you solve?"),
            Turn::user("We reduce churn"),
        ],
        started: true,
        finished: true,
        final_review: Some("Strong team, weak market.".to_string()),
    };

    session.reset();

    assert_eq!(session, Session::default());
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn it_serializes_roles_lowercase() {
    let res = serde_json::to_string(&Turn::user("hi")).unwrap();
    assert_eq!(res, r#"{"role":"user","content":"hi"}"#);
    assert_eq!(Turn::assistant("hello").role, Role::Assistant);
}

#[test]
fn it_titles_phases() {
    assert_eq!(Phase::NotStarted.title(), "Upload your pitch deck");
    assert_eq!(Phase::InProgress.title(), "Investor Q&A");
    assert_eq!(Phase::Finished.title(), "Final Investment Review");
    assert_eq!(Phase::InProgress.to_string(), "in-progress");
}
