#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use std::collections::HashSet;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::classify;
use crate::domain::models::Attachment;
use crate::domain::models::Author;
use crate::domain::models::Classifier;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Modality;
use crate::domain::models::Submission;
use crate::domain::models::SubmissionOutcome;

pub const TEXT_ERROR_MESSAGE: &str = "Sorry, there was an error processing your text.";
pub const IMAGE_ERROR_MESSAGE: &str = "Sorry, there was an error processing the image.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting(Modality),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    Succeeded,
    Failed,
}

/// Owns the conversation for a single run: the append-only history, the text
/// input, the staged file and the lifecycle of the one in-flight submission.
pub struct ChatSession {
    history: Vec<Message>,
    hidden: HashSet<u64>,
    next_id: u64,
    input: String,
    staged: Option<Attachment>,
    state: SubmissionState,
    typing: bool,
}

impl Default for ChatSession {
    fn default() -> ChatSession {
        return ChatSession::new();
    }
}

impl ChatSession {
    pub fn new() -> ChatSession {
        return ChatSession {
            history: vec![],
            hidden: HashSet::new(),
            next_id: 1,
            input: "".to_string(),
            staged: None,
            state: SubmissionState::Idle,
            typing: false,
        };
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        return id;
    }

    fn append(&mut self, message: Message) -> &Message {
        self.history.push(message);
        return &self.history[self.history.len() - 1];
    }

    /// Adds a bot message that is not tied to a submission, such as the
    /// greeting or help text.
    pub fn push_bot_message(&mut self, text: &str) -> &Message {
        let id = self.next_id();
        return self.append(Message::new(id, Author::Bot, text));
    }

    pub fn input(&self) -> &str {
        return &self.input;
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn staged_file(&self) -> Option<&Attachment> {
        return self.staged.as_ref();
    }

    /// Stages a file for the next submission, replacing any previous one.
    pub fn stage_file(&mut self, attachment: Attachment) {
        tracing::debug!(
            file_name = attachment.file_name(),
            mime = attachment.mime(),
            bytes = attachment.len(),
            "Staged file"
        );
        self.staged = Some(attachment);
    }

    pub fn unstage_file(&mut self) -> Option<Attachment> {
        return self.staged.take();
    }

    pub fn state(&self) -> SubmissionState {
        return self.state;
    }

    pub fn is_submitting(&self) -> bool {
        return self.state != SubmissionState::Idle;
    }

    /// True while a text request is outstanding.
    pub fn is_typing(&self) -> bool {
        return self.typing;
    }

    /// Full history, including messages the user deleted from view.
    pub fn messages(&self) -> &[Message] {
        return &self.history;
    }

    pub fn visible_messages(&self) -> Vec<&Message> {
        return self
            .history
            .iter()
            .filter(|message| return !self.hidden.contains(&message.id()))
            .collect();
    }

    /// Looks up a message by its 1-based position in the visible transcript.
    pub fn visible_message(&self, number: usize) -> Option<&Message> {
        if number == 0 {
            return None;
        }

        return self.visible_messages().get(number - 1).copied();
    }

    /// Removes a message from the visible transcript. History and any pending
    /// request are left alone.
    pub fn delete_message(&mut self, id: u64) -> bool {
        if !self.history.iter().any(|message| return message.id() == id) {
            return false;
        }

        return self.hidden.insert(id);
    }

    /// First half of a submission. Appends the user message and returns the
    /// request to dispatch, or `None` when there is nothing to send.
    pub fn begin_submit(&mut self) -> Result<Option<Submission>> {
        if let SubmissionState::Submitting(modality) = self.state {
            bail!(format!(
                "Still waiting on the previous {modality} submission, hold on a moment."
            ));
        }

        if let Some(attachment) = self.staged.take() {
            let id = self.next_id();
            self.append(Message::new_image(id, Author::User, attachment.clone()));
            self.state = SubmissionState::Submitting(Modality::Image);

            tracing::debug!(
                file_name = attachment.file_name(),
                bytes = attachment.len(),
                "Submitting image"
            );
            return Ok(Some(Submission::Image(attachment)));
        }

        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Ok(None);
        }

        let id = self.next_id();
        self.append(Message::new(id, Author::User, &text));
        self.input.clear();
        self.typing = true;
        self.state = SubmissionState::Submitting(Modality::Text);

        tracing::debug!(chars = text.chars().count(), "Submitting text");
        return Ok(Some(Submission::Text(text)));
    }

    /// Second half of a submission. Always appends exactly one bot message and
    /// returns the session to idle.
    pub fn complete_submit(&mut self, outcome: SubmissionOutcome) -> SubmissionResult {
        if self.state == SubmissionState::Idle {
            tracing::warn!(
                modality = %outcome.modality(),
                "Received a classification without a pending submission"
            );
        }

        self.typing = false;
        self.state = SubmissionState::Idle;

        let (mtype, text, result) = match outcome {
            SubmissionOutcome::Text(Ok(res)) => {
                (MessageType::Normal, res.summary(), SubmissionResult::Succeeded)
            }
            SubmissionOutcome::Image(Ok(res)) => {
                (MessageType::Normal, res.summary(), SubmissionResult::Succeeded)
            }
            SubmissionOutcome::Text(Err(err)) => {
                tracing::error!(modality = "text", error = ?err, "Classification failed");
                (
                    MessageType::Error,
                    TEXT_ERROR_MESSAGE.to_string(),
                    SubmissionResult::Failed,
                )
            }
            SubmissionOutcome::Image(Err(err)) => {
                tracing::error!(modality = "image", error = ?err, "Classification failed");
                (
                    MessageType::Error,
                    IMAGE_ERROR_MESSAGE.to_string(),
                    SubmissionResult::Failed,
                )
            }
        };

        let id = self.next_id();
        self.append(Message::new_with_type(id, Author::Bot, mtype, &text));

        return result;
    }

    /// Runs a whole submission against `classifier`. Returns `None` when the
    /// input was empty and nothing was sent.
    pub async fn submit(
        &mut self,
        classifier: &(dyn Classifier + Send + Sync),
    ) -> Result<Option<SubmissionResult>> {
        let submission = match self.begin_submit()? {
            Some(submission) => submission,
            None => return Ok(None),
        };

        let outcome = classify(classifier, submission).await;
        return Ok(Some(self.complete_submit(outcome)));
    }
}
