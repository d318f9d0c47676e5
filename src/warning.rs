use crate::app::Screen;
use crate::command::Command;
use crate::config::Settings;
use crate::consts;
use crate::play::PlayScreen;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};
use std::borrow::Cow;
use std::io;

/// A start-up problem worth telling the user about before play begins,
/// e.g. a configuration file that could not be used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Build a warning from an error and its chain of causes
    pub(crate) fn from_error(e: &anyhow::Error) -> Warning {
        let mut msgs = e.chain().map(ToString::to_string);
        let mut lines = Vec::new();
        let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH)).break_words(true);
        if let Some(first) = msgs.next() {
            lines.extend(textwrap::wrap(&first, opts).into_iter().map(Cow::into_owned));
        }
        let causes: Vec<String> = msgs.collect();
        if !causes.is_empty() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            for cause in causes {
                let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                    .break_words(true)
                    .initial_indent("    ")
                    .subsequent_indent("    ");
                lines.extend(textwrap::wrap(&cause, opts).into_iter().map(Cow::into_owned));
            }
        }
        Warning { lines }
    }

    /// Popup size: the message lines, a spacer, the dismiss hint, and the
    /// borders
    fn popup_size(&self) -> Size {
        let lines = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        Size {
            width: Warning::WIDTH,
            height: lines.saturating_add(4),
        }
    }
}

impl Widget for &Warning {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let popup = center_rect(display, self.popup_size());
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        block.render(popup, buf);
        let mut rows = inner.rows();
        for (line, row) in self.lines.iter().zip(&mut rows) {
            Line::raw(line.as_str()).render(row, buf);
        }
        let _ = rows.next();
        if let Some(row) = rows.next() {
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to continue"),
            ])
            .render(row, buf);
        }
    }
}

/// The screen that shows a [`Warning`] and waits for the user to dismiss it
#[derive(Clone, Debug)]
pub(crate) struct WarningScreen {
    warning: Warning,
    settings: Settings,
}

impl WarningScreen {
    pub(crate) fn new(warning: Warning, settings: Settings) -> WarningScreen {
        WarningScreen { warning, settings }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(&self.warning, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => Some(Screen::Quit),
            Command::Enter | Command::Restart => Some(Screen::Play(PlayScreen::new(&self.settings))),
            _ => None,
        }
    }
}
