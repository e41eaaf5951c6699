use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::CursorMove;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        return TextArea::with_text("");
    }

    /// Builds an input box pre-filled with `text`, cursor placed at the end.
    pub fn with_text(text: &str) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Message (Enter to send, /help for commands)")
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);

        return textarea;
    }
}
