use ratatui::{
    prelude::*,
    style::{Style, Stylize},
    widgets::*,
};
use snekgrid::{SessionState, Snapshot};

const HEAD_SYMBOL: &str = "@";
const FOOD_SYMBOL: &str = "♦";

pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score line
            Constraint::Min(0),    // Arena
        ])
        .split(frame.area());

    let score_text = format!(
        "SNEK    Best: {}    Score: {}    Speed: {} (1/2/3)",
        snapshot.best_score, snapshot.score, snapshot.difficulty
    );
    frame.render_widget(
        Paragraph::new(score_text)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let title = match snapshot.state {
        SessionState::NotStarted => "Press SPACE to start",
        SessionState::Playing => "Playing",
        SessionState::Paused => "Paused. Press SPACE to continue",
        SessionState::GameOver => "Game over",
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let board = Rect {
        width: (snapshot.size.width + 2).min(layout[1].width),
        height: (snapshot.size.height + 2).min(layout[1].height),
        ..layout[1]
    };
    let inner = block.inner(board);
    frame.render_widget(block, board);
    frame.render_widget(ArenaView(snapshot), inner);

    if snapshot.state == SessionState::GameOver {
        let headline = if snapshot.board_cleared() {
            "BOARD CLEARED"
        } else {
            "GAME OVER"
        };
        frame.render_widget(
            Paragraph::new(format!(
                "{headline}\nFinal Score: {}\nPress SPACE to play again",
                snapshot.score
            ))
            .style(Style::default().bold())
            .alignment(Alignment::Center),
            inner,
        );
    }
}

/// Draws the grid one terminal cell per grid cell, clipped to `area`.
pub struct ArenaView<'a>(pub &'a Snapshot);

impl Widget for ArenaView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = |x: u16, y: u16| x < area.width && y < area.height;

        if let Some(food) = self.0.food {
            if visible(food.x, food.y) {
                buf[(area.x + food.x, area.y + food.y)]
                    .set_symbol(FOOD_SYMBOL)
                    .set_fg(Color::LightRed);
            }
        }

        let mut cells = self.0.organism.iter();
        if let Some(head) = cells.next() {
            for pos in cells.filter(|c| visible(c.x, c.y)) {
                buf[(area.x + pos.x, area.y + pos.y)]
                    .set_symbol(" ")
                    .set_bg(Color::Green);
            }
            if visible(head.x, head.y) {
                buf[(area.x + head.x, area.y + head.y)]
                    .set_symbol(HEAD_SYMBOL)
                    .set_fg(Color::Yellow);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snekgrid::{Cell, Difficulty, Heading, Size};

    fn snapshot(organism: &[(u16, u16)], food: (u16, u16)) -> Snapshot {
        Snapshot {
            organism: organism.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            food: Some(Cell::new(food.0, food.1)),
            score: 0,
            best_score: 0,
            state: SessionState::Playing,
            heading: Heading::Right,
            size: Size::square(20),
            difficulty: Difficulty::Normal,
            last_step: None,
            revision: 1,
        }
    }

    #[test]
    fn test_arena_view_draws_cells() {
        let snapshot = snapshot(&[(3, 2), (2, 2)], (7, 4));
        let area = Rect::new(1, 1, 20, 20);
        let mut buf = Buffer::empty(Rect::new(0, 0, 22, 22));

        ArenaView(&snapshot).render(area, &mut buf);

        assert_eq!(buf[(4, 3)].symbol(), HEAD_SYMBOL);
        assert_eq!(buf[(3, 3)].bg, Color::Green);
        assert_eq!(buf[(8, 5)].symbol(), FOOD_SYMBOL);
    }

    #[test]
    fn test_arena_view_clips_to_area() {
        let snapshot = snapshot(&[(15, 15), (14, 15)], (19, 19));
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);

        // Must not index outside the buffer
        ArenaView(&snapshot).render(area, &mut buf);

        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
