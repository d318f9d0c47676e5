use super::{chrome, GAME_OVER_SIZE, GAME_OVER_TITLE};
use crate::consts;
use crate::game::{Point, Round, RoundState};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::Widget,
};

/// The raw presentation layer: pokes glyphs and styles one cell at a time
/// straight into the terminal buffer.
#[derive(Debug)]
pub(super) struct BufferPainter<'a, R> {
    pub(super) round: &'a Round<R>,
}

impl<R> Widget for &BufferPainter<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chrome = chrome(area, self.round.grid());
        buf.set_style(chrome.score_bar, consts::SCORE_BAR_STYLE);
        buf.set_string(
            chrome.score_bar.x,
            chrome.score_bar.y,
            format!(" Score: {}", self.round.score()),
            consts::SCORE_BAR_STYLE,
        );
        draw_border(chrome.board, buf);
        let mut field = Field {
            area: chrome.field,
            buf,
        };
        let snake = self.round.snake();
        for &p in snake.body() {
            field.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        field.draw_cell(
            self.round.food_position(),
            consts::FOOD_SYMBOL,
            consts::FOOD_STYLE,
        );
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.round.state() == RoundState::GameOver {
            field.draw_cell(snake.head(), consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            field.draw_cell(snake.head(), snake.head_symbol(), consts::SNAKE_STYLE);
        }
        buf.set_string(chrome.hint.x, chrome.hint.y, consts::HINT_TEXT, Style::new());
        if self.round.state() == RoundState::GameOver {
            draw_game_over(self.round.score(), chrome.display, buf);
        }
    }
}

/// The playing field, addressed in grid coordinates
#[derive(Debug, Eq, PartialEq)]
struct Field<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Field<'_> {
    fn draw_cell(&mut self, pos: Point, symbol: char, style: Style) {
        let Ok(dx) = u16::try_from(pos.x) else {
            return;
        };
        let Ok(dy) = u16::try_from(pos.y) else {
            return;
        };
        let Some(x) = self.area.x.checked_add(dx) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(dy) else {
            return;
        };
        if !self.area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// A plain single-line border, cell by cell
fn draw_border(area: Rect, buf: &mut Buffer) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let left = area.left();
    let top = area.top();
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;
    for x in left + 1..right {
        set_char(buf, x, top, '─');
        set_char(buf, x, bottom, '─');
    }
    for y in top + 1..bottom {
        set_char(buf, left, y, '│');
        set_char(buf, right, y, '│');
    }
    set_char(buf, left, top, '┌');
    set_char(buf, right, top, '┐');
    set_char(buf, left, bottom, '└');
    set_char(buf, right, bottom, '┘');
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, symbol: char) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(symbol);
    }
}

/// The game-over popup, painted by hand: clear the rectangle, draw the
/// border and centered title, then the final score and the key hints.
fn draw_game_over(score: u32, display: Rect, buf: &mut Buffer) {
    let area = center_rect(display, GAME_OVER_SIZE);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
            }
        }
    }
    draw_border(area, buf);
    let title_width = u16::try_from(GAME_OVER_TITLE.chars().count()).unwrap_or(u16::MAX);
    let title_x = area.x + 1 + (area.width.saturating_sub(2).saturating_sub(title_width)) / 2;
    buf.set_string(title_x, area.y, GAME_OVER_TITLE, Style::new());
    let text_x = area.x + 2;
    buf.set_string(
        text_x,
        area.y + 1,
        format!("Final Score: {score}"),
        Style::new(),
    );
    let mut x = text_x;
    for (part, style) in [
        ("Restart (", Style::new()),
        ("Space", consts::KEY_STYLE),
        (") — Quit (", Style::new()),
        ("q", consts::KEY_STYLE),
        (")", Style::new()),
    ] {
        buf.set_string(x, area.y + 2, part, style);
        x += u16::try_from(part.chars().count()).unwrap_or(u16::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Grid, Snake};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn grid8() -> Grid {
        Grid::new(8).expect("8 should be a valid grid size")
    }

    #[test]
    fn running_frame() {
        let snake = Snake::from_parts(
            [Point::new(4, 3), Point::new(3, 3), Point::new(2, 3)],
            Direction::East,
        );
        let round = Round::fixture(
            grid8(),
            snake,
            Point::new(6, 3),
            RoundState::Running,
            0,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        BufferPainter { round: &round }.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 0                                                                       ",
            "",
            "",
            "",
            "",
            "",
            "",
            "                                   ┌────────┐                                   ",
            "                                   │        │                                   ",
            "                                   │        │                                   ",
            "                                   │        │                                   ",
            "                                   │  ⚬⚬> ● │                                   ",
            "                                   │        │                                   ",
            "                                   │        │                                   ",
            "                                   │        │                                   ",
            "                                   │        │                                   ",
            "                                   └────────┘                                   ",
            "",
            "",
            "",
            "",
            "",
            "",
            " Move: arrows / wasd / hjkl — Quit: q                                           ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(38, 11, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(42, 11, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over_frame() {
        // The head ran off the east edge, so only the two on-board body
        // cells are drawn, under the popup.
        let snake = Snake::from_parts(
            [Point::new(8, 7), Point::new(7, 7), Point::new(6, 7)],
            Direction::East,
        );
        let round = Round::fixture(
            grid8(),
            snake,
            Point::new(1, 1),
            RoundState::GameOver,
            30,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        BufferPainter { round: &round }.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 30                                                                      ",
            "",
            "",
            "",
            "",
            "",
            "",
            "                                   ┌────────┐                                   ",
            "                                   │        │                                   ",
            "                                   │ ●      │                                   ",
            "                         ┌──────── GAME OVER ─────────┐                         ",
            "                         │ Final Score: 30            │                         ",
            "                         │ Restart (Space) — Quit (q) │                         ",
            "                         └────────────────────────────┘                         ",
            "                                   │        │                                   ",
            "                                   │      ⚬⚬│                                   ",
            "                                   └────────┘                                   ",
            "",
            "",
            "",
            "",
            "",
            "",
            " Move: arrows / wasd / hjkl — Quit: q                                           ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(37, 9, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(42, 15, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(36, 12, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(51, 12, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn collision_marker_on_self_collision() {
        // A head that died on the board is drawn with the collision glyph.
        let snake = Snake::from_parts(
            [
                Point::new(3, 3),
                Point::new(3, 4),
                Point::new(4, 4),
                Point::new(4, 3),
                Point::new(3, 3),
            ],
            Direction::North,
        );
        let round = Round::fixture(
            grid8(),
            snake,
            Point::new(1, 1),
            RoundState::GameOver,
            20,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        BufferPainter { round: &round }.render(area, &mut buffer);
        // Field origin is (36, 8): head (3, 3) lands at (39, 11).
        let head = buffer
            .cell(Position::new(39, 11))
            .expect("cell should exist");
        assert_eq!(head.symbol(), "×");
    }
}
