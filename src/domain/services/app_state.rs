#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::ChatSession;
use super::ProgressTicker;
use super::Scroll;
use super::Transcript;
use crate::domain::models::Action;
use crate::domain::models::Attachment;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageKind;
use crate::domain::models::SlashCommand;
use crate::domain::models::Submission;
use crate::domain::models::SubmissionOutcome;
use crate::domain::models::Theme;
use crate::domain::models::UploadProgress;

pub const GREETING: &str = "Hey there! Send me a message, or stage a file with `/attach PATH`, and I'll check whether it's safe.";

pub const VOICE_UNSUPPORTED: &str = "Speech recognition is not supported in this terminal.";

/// Everything the render loop needs. The chat session is owned here and
/// handed to nothing else, so there is exactly one per run.
pub struct AppState {
    pub session: ChatSession,
    pub transcript: Transcript,
    pub scroll: Scroll,
    pub theme: Theme,
    pub progress: UploadProgress,
    pub notice: Option<String>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    ticker: Option<ProgressTicker>,
    tick: usize,
}

impl AppState {
    pub fn new(theme: Theme) -> AppState {
        let mut app_state = AppState {
            session: ChatSession::new(),
            transcript: Transcript::new(theme),
            scroll: Scroll::default(),
            theme,
            progress: UploadProgress::default(),
            notice: None,
            last_known_height: 0,
            last_known_width: 0,
            ticker: None,
            tick: 0,
        };

        app_state.session.push_bot_message(GREETING);
        app_state.sync_dependants();

        return app_state;
    }

    /// Shown under the transcript. Notices take priority over the staged file
    /// preview.
    pub fn status_line(&self) -> Option<String> {
        if let Some(notice) = &self.notice {
            return Some(notice.to_string());
        }

        let staged = self.session.staged_file()?;
        if staged.is_image() {
            return Some(format!("Attached: {}", staged.describe()));
        }

        return Some(format!("Attached: {}", staged.file_name()));
    }

    /// Handles slash commands. Returns `(should_break, should_continue)`,
    /// matching what the render loop does next.
    pub async fn handle_slash_commands(
        &mut self,
        input_str: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        let command = match SlashCommand::parse(input_str) {
            Some(command) => command,
            None => return Ok((false, false)),
        };
        self.notice = None;

        if command.is_quit() {
            return Ok((true, false));
        }

        if command.is_help() {
            self.session.push_bot_message(&help_text());
            self.sync_and_follow();
        } else if command.is_attach() {
            self.attach(PathBuf::from(command.rest())).await;
        } else if command.is_detach() {
            match self.session.unstage_file() {
                Some(attachment) => {
                    self.notice = Some(format!("Removed {}.", attachment.file_name()));
                }
                None => self.notice = Some("No file is attached.".to_string()),
            }
        } else if command.is_copy() {
            let text = self
                .message_for_command(&command)
                .map(|message| return message.copy_text());
            if let Some(text) = text {
                tx.send(Action::CopyText(text))?;
            }
        } else if command.is_edit() {
            self.edit(&command);
        } else if command.is_delete() {
            let id = self
                .message_for_command(&command)
                .map(|message| return message.id());
            if let Some(id) = id {
                self.session.delete_message(id);
                self.sync_dependants();
            }
        } else if command.is_theme() {
            self.set_theme(self.theme.toggled());
        } else if command.is_voice() {
            self.notice = Some(VOICE_UNSUPPORTED.to_string());
        }

        return Ok((false, true));
    }

    fn message_for_command(
        &mut self,
        command: &SlashCommand,
    ) -> Option<&Message> {
        let number = match command.message_number() {
            Some(number) => number,
            None => {
                self.notice = Some("Pass a message number, like `/copy 2`.".to_string());
                return None;
            }
        };

        if self.session.visible_message(number).is_none() {
            self.notice = Some(format!("There is no message number {number}."));
            return None;
        }

        return self.session.visible_message(number);
    }

    async fn attach(&mut self, path: PathBuf) {
        if path.as_os_str().is_empty() {
            self.notice = Some("Pass a file path, like `/attach ./cat.png`.".to_string());
            return;
        }

        match Attachment::from_path(&path).await {
            Ok(attachment) => {
                self.session.stage_file(attachment);
            }
            Err(err) => {
                self.notice = Some(err.to_string());
            }
        }
    }

    fn edit(&mut self, command: &SlashCommand) {
        let text = match self.message_for_command(command) {
            Some(message) if message.author != Author::User => {
                Err("Only your own messages can be edited.".to_string())
            }
            Some(message) if message.kind() == MessageKind::Image => {
                Err("Image messages can't be edited.".to_string())
            }
            Some(message) => Ok(message.text().unwrap_or_default().to_string()),
            None => return,
        };

        match text {
            Ok(text) => self.session.set_input(&text),
            Err(notice) => self.notice = Some(notice),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.transcript.set_theme(theme);
        self.sync_dependants();
    }

    /// Starts a submission from the current input. Returns true when a
    /// request was dispatched.
    pub fn submit(
        &mut self,
        tx: &mpsc::UnboundedSender<Action>,
        event_tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<bool> {
        self.notice = None;
        let submission = match self.session.begin_submit() {
            Ok(Some(submission)) => submission,
            Ok(None) => return Ok(false),
            Err(err) => {
                self.notice = Some(err.to_string());
                return Ok(false);
            }
        };

        if let Submission::Image(_) = submission {
            let generation = self.progress.start();
            self.ticker = Some(ProgressTicker::spawn(generation, event_tx.clone()));
        }

        tx.send(Action::Classify(submission))?;
        self.sync_and_follow();

        return Ok(true);
    }

    pub fn handle_classifier_response(&mut self, outcome: SubmissionOutcome) {
        if let Some(ticker) = &self.ticker {
            ticker.finish();
        }

        self.session.complete_submit(outcome);
        self.sync_and_follow();
    }

    pub fn handle_upload_progress(&mut self, generation: u64, percent: u8) {
        self.progress.set(generation, percent);
    }

    pub fn handle_upload_progress_hidden(&mut self, generation: u64) {
        self.progress.hide(generation);
        if let Some(ticker) = &self.ticker {
            if ticker.generation() == generation {
                self.ticker = None;
            }
        }
    }

    pub fn handle_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.session.is_typing() {
            self.sync_dependants();
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_and_follow(&mut self) {
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        let messages = self.session.visible_messages();
        self.transcript.set_messages(
            &messages,
            self.session.is_typing(),
            self.last_known_width.into(),
            self.tick,
        );

        let transcript_len = u16::try_from(self.transcript.len()).unwrap_or(u16::MAX);
        self.scroll
            .set_state(transcript_len, self.last_known_height);
    }
}
