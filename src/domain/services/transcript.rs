#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::bubble::typing_lines;
use super::Bubble;
use crate::domain::models::Message;
use crate::domain::models::Theme;

struct TranscriptCacheEntry {
    number: usize,
    lines: Vec<Line<'static>>,
}

/// Rendered lines for the visible messages. Messages never change once
/// created, so bubbles are cached by id until the width or theme changes.
pub struct Transcript {
    cache: HashMap<u64, TranscriptCacheEntry>,
    lines: Vec<Line<'static>>,
    line_width: usize,
    theme: Theme,
}

impl Transcript {
    pub fn new(theme: Theme) -> Transcript {
        return Transcript {
            cache: HashMap::new(),
            lines: vec![],
            line_width: 0,
            theme,
        };
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.cache.clear();
            self.theme = theme;
        }
    }

    pub fn set_messages(
        &mut self,
        messages: &[&Message],
        typing: bool,
        line_width: usize,
        tick: usize,
    ) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        let mut lines = vec![];
        for (idx, message) in messages.iter().enumerate() {
            let number = idx + 1;
            let stale = match self.cache.get(&message.id()) {
                Some(entry) => entry.number != number,
                None => true,
            };
            if stale {
                let bubble_lines = Bubble::new(message, number, line_width).as_lines(&self.theme);
                self.cache.insert(
                    message.id(),
                    TranscriptCacheEntry {
                        number,
                        lines: bubble_lines,
                    },
                );
            }

            if let Some(entry) = self.cache.get(&message.id()) {
                lines.extend(entry.lines.iter().cloned());
            }
        }

        if typing {
            lines.extend(typing_lines(&self.theme, line_width, tick));
        }

        self.lines = lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        frame.render_widget(
            Paragraph::new(self.lines.clone())
                .style(
                    Style::default()
                        .fg(self.theme.foreground)
                        .bg(self.theme.background),
                )
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
