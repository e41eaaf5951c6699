use anyhow::Result;

use super::build;
use super::format_transcript;
use crate::domain::services::ChatSession;
use crate::infrastructure::classifiers::fake::FakeClassifier;

#[test]
fn it_requires_text_or_file_to_classify() {
    let res = build().try_get_matches_from(vec!["safechat", "classify"]);
    assert!(res.is_err());

    let res = build().try_get_matches_from(vec!["safechat", "classify", "--text", "hi"]);
    assert!(res.is_ok());
}

#[test]
fn it_rejects_unknown_themes() {
    let res = build().try_get_matches_from(vec!["safechat", "--theme", "sepia"]);
    assert!(res.is_err());

    let res = build().try_get_matches_from(vec!["safechat", "chat", "-t", "light"]);
    assert!(res.is_ok());
}

#[tokio::test]
async fn it_formats_the_transcript() -> Result<()> {
    let mut session = ChatSession::new();
    session.set_input("is this ok?");
    session.submit(&FakeClassifier::default()).await?;

    let res = format_transcript(&session);
    let lines = res.split('\n').collect::<Vec<&str>>();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(": is this ok?"));
    assert!(lines[1].ends_with("] Safechat: Analysis Result: Safe"));
    assert_eq!(lines[2], "Confidence: 86.75%");
    return Ok(());
}
