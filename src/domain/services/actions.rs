#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use crate::domain::models::classify;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::SharedClassifier;
use crate::domain::models::Submission;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /attach (/f) [PATH] - Stages a file for the next message. A staged file is sent instead of any typed text.
- /detach - Removes the staged file.
- /copy (/c) [MESSAGE_NUMBER] - Copies a message to your clipboard.
- /edit (/e) [MESSAGE_NUMBER] - Loads one of your messages back into the input box.
- /delete (/d) [MESSAGE_NUMBER] - Removes a message from the transcript.
- /theme (/t) - Toggles between the light and dark theme.
- /voice (/v) - Voice input.
- /quit /exit (/q) - Exit Safechat.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

fn dispatch(classifier: &SharedClassifier, submission: Submission, tx: &mpsc::UnboundedSender<Event>) {
    let classifier = classifier.clone();
    let worker_tx = tx.clone();

    tokio::spawn(async move {
        let modality = submission.modality();
        let outcome = classify(classifier.as_ref(), submission).await;
        if worker_tx.send(Event::ClassifierResponse(outcome)).is_err() {
            tracing::warn!(modality = %modality, "UI closed before classification finished");
        }
    });
}

fn copy_text(text: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let notice = match ClipboardService::set(text) {
        Ok(_) => "Copied message to clipboard.".to_string(),
        Err(err) => format!("Could not copy message: {err}"),
    };

    tx.send(Event::Notice(notice))?;
    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        classifier: SharedClassifier,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::Classify(submission) => {
                    dispatch(&classifier, submission, &tx);
                }
                Action::CopyText(text) => {
                    copy_text(text, &tx)?;
                }
            }
        }

        return Ok(());
    }
}
