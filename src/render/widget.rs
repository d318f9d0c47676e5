use super::{chrome, GAME_OVER_SIZE, GAME_OVER_TITLE};
use crate::consts;
use crate::game::{Point, Round, RoundState};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Paragraph, Widget,
    },
};

/// The composed presentation layer: builds a tree of ratatui widgets for
/// every frame and lets the library turn it into cells.
#[derive(Debug)]
pub(super) struct WidgetTree<'a, R> {
    pub(super) round: &'a Round<R>,
}

impl<R> Widget for &WidgetTree<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chrome = chrome(area, self.round.grid());
        Line::styled(
            format!(" Score: {}", self.round.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(chrome.score_bar, buf);
        Block::bordered().render(chrome.board, buf);
        Paragraph::new(self.field_text()).render(chrome.field, buf);
        Line::raw(consts::HINT_TEXT).render(chrome.hint, buf);
        if self.round.state() == RoundState::GameOver {
            self.game_over_popup(chrome.display, buf);
        }
    }
}

impl<R> WidgetTree<'_, R> {
    /// The playing field as a text node: one line per row, one span per cell
    fn field_text(&self) -> Text<'static> {
        let grid = self.round.grid();
        let mut rows = Vec::with_capacity(usize::from(grid.width()));
        for y in 0..grid.size() {
            let mut spans = Vec::with_capacity(usize::from(grid.width()));
            for x in 0..grid.size() {
                spans.push(self.cell_span(Point::new(x, y)));
            }
            rows.push(Line::from(spans));
        }
        Text::from(rows)
    }

    fn cell_span(&self, p: Point) -> Span<'static> {
        let snake = self.round.snake();
        if p == snake.head() {
            if self.round.state() == RoundState::GameOver {
                Span::styled(consts::COLLISION_SYMBOL.to_string(), consts::COLLISION_STYLE)
            } else {
                Span::styled(snake.head_symbol().to_string(), consts::SNAKE_STYLE)
            }
        } else if p == self.round.food_position() {
            Span::styled(consts::FOOD_SYMBOL.to_string(), consts::FOOD_STYLE)
        } else if snake.body().contains(&p) {
            Span::styled(consts::SNAKE_BODY_SYMBOL.to_string(), consts::SNAKE_STYLE)
        } else {
            Span::raw(" ")
        }
    }

    fn game_over_popup(&self, display: Rect, buf: &mut Buffer) {
        let area = center_rect(display, GAME_OVER_SIZE);
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(GAME_OVER_TITLE)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let mut rows = inner.rows();
        if let Some(row) = rows.next() {
            Line::raw(format!("Final Score: {}", self.round.score())).render(row, buf);
        }
        if let Some(row) = rows.next() {
            Line::from_iter([
                Span::raw("Restart ("),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(row, buf);
        }
    }
}
