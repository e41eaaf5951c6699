use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Gauge;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::TextArea;
use crate::domain::models::Theme;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    if app_state.progress.is_visible() {
        frame.render_widget(
            Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(app_state.theme.progress)
                        .bg(app_state.theme.background),
                )
                .percent(app_state.progress.percent().into())
                .label(format!("Uploading {}%", app_state.progress.percent())),
            rect,
        );
        return;
    }

    let status = app_state.status_line().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(status).style(
            Style::default()
                .fg(app_state.theme.muted)
                .bg(app_state.theme.background),
        ),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(event_rx);
    let mut textarea = TextArea::default();

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            app_state
                .transcript
                .render(frame, layout[0], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            render_status(frame, layout[1], app_state);
            frame.render_widget(textarea.widget(), layout[2]);
        })?;

        match events.next().await? {
            Event::ClassifierResponse(outcome) => {
                app_state.handle_classifier_response(outcome);
            }
            Event::Notice(notice) => {
                app_state.notice = Some(notice);
            }
            Event::UploadProgress {
                generation,
                percent,
            } => {
                app_state.handle_upload_progress(generation, percent);
            }
            Event::UploadProgressHidden(generation) => {
                app_state.handle_upload_progress_hidden(generation);
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
            }
            Event::KeyboardPaste(text) => {
                for char in text.chars() {
                    let key = match char {
                        '\n' => Key::Enter,
                        '\r' => continue,
                        _ => Key::Char(char),
                    };
                    textarea.input(Input {
                        key,
                        ctrl: false,
                        alt: false,
                    });
                }
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");

                if input_str.trim_start().starts_with('/') {
                    app_state.session.set_input("");
                    let (should_break, should_continue) = app_state
                        .handle_slash_commands(input_str.trim(), &tx)
                        .await?;
                    if should_break {
                        break;
                    }
                    if should_continue {
                        textarea = TextArea::with_text(app_state.session.input());
                        continue;
                    }
                }

                app_state.session.set_input(&input_str);
                app_state.submit(&tx, &event_tx)?;
                textarea = TextArea::with_text(app_state.session.input());
            }
            // The next draw picks up the new size.
            Event::UIResize() => (),
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                app_state.handle_tick();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new(Theme::from_config(&Config::get(ConfigKey::Theme)));

    start_loop(&mut terminal, &mut app_state, tx, event_tx, event_rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
