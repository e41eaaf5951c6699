#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;

use super::Attachment;
use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Image(Attachment),
}

/// A transcript entry. Nothing mutates a message once it has been created.
#[derive(Clone, Debug)]
pub struct Message {
    id: u64,
    pub author: Author,
    content: MessageContent,
    created_at: DateTime<Local>,
    mtype: MessageType,
}

impl Message {
    pub fn new(id: u64, author: Author, text: &str) -> Message {
        return Message::new_with_type(id, author, MessageType::Normal, text);
    }

    pub fn new_with_type(id: u64, author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            id,
            author,
            content: MessageContent::Text(text.to_string()),
            created_at: Local::now(),
            mtype,
        };
    }

    pub fn new_image(id: u64, author: Author, attachment: Attachment) -> Message {
        return Message {
            id,
            author,
            content: MessageContent::Image(attachment),
            created_at: Local::now(),
            mtype: MessageType::Normal,
        };
    }

    pub fn id(&self) -> u64 {
        return self.id;
    }

    pub fn kind(&self) -> MessageKind {
        match self.content {
            MessageContent::Text(_) => return MessageKind::Text,
            MessageContent::Image(_) => return MessageKind::Image,
        }
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn timestamp(&self) -> String {
        return self.created_at.format("%H:%M:%S").to_string();
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => return Some(text),
            MessageContent::Image(_) => return None,
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match &self.content {
            MessageContent::Text(_) => return None,
            MessageContent::Image(attachment) => return Some(attachment),
        }
    }

    /// Text shown in the transcript, images are replaced by a description.
    pub fn display_text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => return text.to_string(),
            MessageContent::Image(attachment) => {
                return format!("[image] {}", attachment.describe());
            }
        }
    }

    /// Text placed on the clipboard by `/copy`.
    pub fn copy_text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => return text.to_string(),
            MessageContent::Image(attachment) => return attachment.file_name().to_string(),
        }
    }

    /// Wrapped lines for rendering. Tabs are expanded here so widths line up,
    /// the stored text is left as sent.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let line_max_width = line_max_width.max(1);
        let text = self.display_text().replace('\t', "  ");

        for full_line in text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_line: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if !current_line.is_empty() && word_len + char_count > line_max_width {
                    lines.push(current_line.join(" ").trim_end().to_string());
                    current_line = vec![];
                    char_count = 0;
                }

                current_line.push(word);
                char_count += word_len + 1;
            }

            if !current_line.is_empty() {
                lines.push(current_line.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
