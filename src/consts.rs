//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default time between simulation steps, overridable via configuration
pub(crate) const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(150);

/// How long the play screen waits for input before re-rendering and offering
/// the engine another tick.  This bounds the redraw rate at roughly 60 Hz;
/// the simulation cadence is independent of it.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Default number of cells along each edge of the board
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Snake length at the start of a round, before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the cells of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it has collided with itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Key help shown below the board
pub(crate) const HINT_TEXT: &str = " Move: arrows / wasd / hjkl — Quit: q";
