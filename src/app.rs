use crate::config::Settings;
use crate::play::PlayScreen;
use crate::warning::{Warning, WarningScreen};
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(settings: Settings, warning: Option<Warning>) -> App {
        let screen = match warning {
            Some(warning) => Screen::Warning(WarningScreen::new(warning, settings)),
            None => Screen::Play(PlayScreen::new(&settings)),
        };
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Warning(ref screen) => {
                terminal.draw(|frame| screen.draw(frame))?;
            }
            Screen::Play(ref screen) => {
                terminal.draw(|frame| screen.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Warning(ref mut screen) => {
                if let Some(screen) = screen.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Play(ref mut screen) => {
                if let Some(screen) = screen.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Warning(WarningScreen),
    Play(PlayScreen),
    Quit,
}
