use crate::app::Screen;
use crate::command::Command;
use crate::config::Settings;
use crate::consts;
use crate::game::{Direction, Round};
use crate::render::RendererKind;
use crossterm::event::{poll, read, Event};
use ratatui::Frame;
use std::io;
use std::time::Instant;

/// The screen a round of snake is played on.
///
/// Each pass of the input loop waits at most one frame period for a key,
/// forwards any intent to the round, and offers the round a tick.  Drawing
/// happens once per pass, so the display refreshes at frame cadence while
/// the simulation advances on its own, slower clock.
#[derive(Clone, Debug)]
pub(crate) struct PlayScreen {
    round: Round,
    renderer: RendererKind,
}

impl PlayScreen {
    pub(crate) fn new(settings: &Settings) -> PlayScreen {
        PlayScreen {
            round: Round::new(settings.grid, settings.interval),
            renderer: settings.renderer,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        self.renderer.draw(&self.round, frame);
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if poll(consts::FRAME_PERIOD)? {
            if let Some(screen) = self.handle_event(read()?) {
                return Ok(Some(screen));
            }
        }
        self.round.tick(Instant::now());
        Ok(None)
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.round.direction_intent(Direction::North),
            Command::Down => self.round.direction_intent(Direction::South),
            Command::Left => self.round.direction_intent(Direction::West),
            Command::Right => self.round.direction_intent(Direction::East),
            Command::Restart => self.round.restart_intent(),
            Command::Enter => (),
        }
        None
    }
}
