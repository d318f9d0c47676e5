//! Presentation layers over the rules engine.
//!
//! Two renderers draw the same frame through different means: one paints
//! cells straight into the terminal buffer, the other composes a tree of
//! ratatui widgets and lets the library render them.  Neither holds any
//! rules logic; both read the round only through its snapshot accessors,
//! and identical rounds must come out as identical frames.
mod buffer;
mod widget;
use crate::game::{Grid, Round};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect, Size},
    Frame,
};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which presentation layer to draw the game with
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RendererKind {
    /// Paint glyphs directly into the terminal cell buffer
    #[default]
    Buffer,
    /// Compose a widget tree and let ratatui render it
    Widget,
}

impl RendererKind {
    pub(crate) fn draw<R>(self, round: &Round<R>, frame: &mut Frame<'_>) {
        match self {
            RendererKind::Buffer => {
                frame.render_widget(&buffer::BufferPainter { round }, frame.area());
            }
            RendererKind::Widget => {
                frame.render_widget(&widget::WidgetTree { round }, frame.area());
            }
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            RendererKind::Buffer => "buffer",
            RendererKind::Widget => "widget",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RendererKind {
    type Err = ParseRendererError;

    fn from_str(s: &str) -> Result<RendererKind, ParseRendererError> {
        match s {
            "buffer" => Ok(RendererKind::Buffer),
            "widget" => Ok(RendererKind::Widget),
            _ => Err(ParseRendererError),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(r#"renderer must be "buffer" or "widget""#)]
pub(crate) struct ParseRendererError;

/// Size of the game-over popup drawn over the board
const GAME_OVER_SIZE: Size = Size {
    width: 30,
    height: 4,
};

/// Title of the game-over popup, shown centered in its top border
const GAME_OVER_TITLE: &str = " GAME OVER ";

/// The fixed regions of a game frame
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Chrome {
    /// Full-width score bar at the top of the display
    score_bar: Rect,
    /// The board's border box
    board: Rect,
    /// The playing field inside the border, one terminal cell per grid cell
    field: Rect,
    /// Key help at the bottom of the display
    hint: Rect,
    /// The whole display, for centering popups
    display: Rect,
}

fn chrome(area: Rect, grid: Grid) -> Chrome {
    let display = get_display_area(area);
    let [score_bar, fill, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(display);
    let edge = grid.width().saturating_add(2);
    let board = center_rect(
        fill,
        Size {
            width: edge,
            height: edge,
        },
    );
    let field = board.inner(Margin::new(1, 1));
    Chrome {
        score_bar,
        board,
        field,
        hint,
        display,
    }
}
