#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

const PAGE_LENGTH: u16 = 10;

/// Vertical position within the transcript, measured in rendered lines.
#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_length: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    fn sync_scrollbar(&mut self) {
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(self.max_position())
            .viewport_content_length(self.viewport_length)
            .position(self.position);
    }

    pub fn up_by(&mut self, lines: u16) {
        self.position = self.position.saturating_sub(lines);
        self.sync_scrollbar();
    }

    pub fn down_by(&mut self, lines: u16) {
        self.position = self.position.saturating_add(lines).min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn up(&mut self) {
        self.up_by(1);
    }

    pub fn down(&mut self) {
        self.down_by(1);
    }

    pub fn up_page(&mut self) {
        self.up_by(PAGE_LENGTH);
    }

    pub fn down_page(&mut self) {
        self.down_by(PAGE_LENGTH);
    }

    /// Jumps to the newest line.
    pub fn last(&mut self) {
        self.position = self.max_position();
        self.sync_scrollbar();
    }

    pub fn is_at_bottom(&self) -> bool {
        return self.position >= self.max_position();
    }

    pub fn set_state(&mut self, content_length: u16, viewport_length: u16) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
        self.sync_scrollbar();
    }
}
