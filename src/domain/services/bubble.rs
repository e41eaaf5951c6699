#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageKind;
use crate::domain::models::MessageType;
use crate::domain::models::Theme;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

/// Rounded border plus one space of padding on each side.
const BORDER_WIDTH: usize = 4;

/// Bubbles never span more than this share of the window.
const MAX_WIDTH_PERCENTAGE: f32 = 0.8;

fn width_of(text: &str) -> usize {
    return text.chars().count();
}

fn repeat(text: &str, count: usize) -> String {
    return [text].repeat(count).join("");
}

pub struct Bubble<'a> {
    message: &'a Message,
    number: usize,
    alignment: BubbleAlignment,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, number: usize, window_max_width: usize) -> Bubble<'a> {
        let mut alignment = BubbleAlignment::Left;
        if message.author == Author::User {
            alignment = BubbleAlignment::Right;
        }

        return Bubble {
            message,
            number,
            alignment,
            window_max_width,
        };
    }

    pub fn max_text_width(window_max_width: usize) -> usize {
        let max_width = (window_max_width as f32 * MAX_WIDTH_PERCENTAGE).floor() as usize;
        return max_width.saturating_sub(BORDER_WIDTH).max(10);
    }

    pub fn as_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let title = format!("{} ({})", self.message.author, self.number);
        let body = self
            .message
            .as_string_lines(Bubble::max_text_width(self.window_max_width));

        let mut style = Style::default().fg(theme.bot);
        if self.message.message_type() == MessageType::Error {
            style = Style::default().fg(theme.error);
        } else if self.message.author == Author::User {
            style = Style::default().fg(theme.user);
        }
        if self.message.kind() == MessageKind::Image {
            style = style.add_modifier(Modifier::ITALIC);
        }

        return frame_lines(
            &title,
            body,
            &self.message.timestamp(),
            self.alignment,
            self.window_max_width,
            style,
        );
    }
}

/// Placeholder bubble shown while a text classification is outstanding.
pub fn typing_lines(theme: &Theme, window_max_width: usize, tick: usize) -> Vec<Line<'static>> {
    let dots = ["●  ", "●● ", "●●●"][tick % 3];
    return frame_lines(
        &Author::Bot.to_string(),
        vec![dots.to_string()],
        "",
        BubbleAlignment::Left,
        window_max_width,
        Style::default().fg(theme.muted),
    );
}

fn frame_lines(
    title: &str,
    body: Vec<String>,
    footer: &str,
    alignment: BubbleAlignment,
    window_max_width: usize,
    style: Style,
) -> Vec<Line<'static>> {
    let inner_width = body
        .iter()
        .map(|line| return width_of(line))
        .chain([width_of(title), width_of(footer)])
        .max()
        .unwrap_or(0);
    // Inner width plus the spaces between text and border.
    let bar_width = inner_width + 2;

    let mut lines = vec![format!(
        "╭{title}{}╮",
        repeat("─", bar_width - width_of(title))
    )];
    for line in body {
        let fill = repeat(" ", inner_width - width_of(&line));
        lines.push(format!("│ {line}{fill} │"));
    }
    lines.push(format!(
        "╰{}{footer}╯",
        repeat("─", bar_width - width_of(footer))
    ));

    let outer_padding = repeat(
        " ",
        window_max_width.saturating_sub(inner_width + BORDER_WIDTH),
    );

    return lines
        .into_iter()
        .map(|line| {
            if alignment == BubbleAlignment::Right {
                return Line::from(vec![
                    Span::from(outer_padding.to_string()),
                    Span::styled(line, style),
                ]);
            }
            return Line::from(Span::styled(line, style));
        })
        .collect();
}
