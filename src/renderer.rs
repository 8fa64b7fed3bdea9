use std::io;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::controller::{Renderer, View};
use crate::game::GameState;
use crate::grid::Position;
use crate::terminal_runtime::TerminalSession;
use crate::theme::Theme;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Glyph for one board cell; a cell spans two terminal columns.
pub const GLYPH_CELL: &str = "██";

/// Terminal columns per board cell.
pub const CELL_COLUMNS: u16 = 2;

/// Draws game frames into an owned terminal session.
pub struct TerminalRenderer {
    session: TerminalSession,
    theme: &'static Theme,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(session: TerminalSession, theme: &'static Theme) -> Self {
        Self { session, theme }
    }

    /// Releases the terminal session, restoring the terminal.
    pub fn finish(self) {
        drop(self.session);
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: View<'_>) -> io::Result<()> {
        let theme = self.theme;
        self.session
            .terminal_mut()
            .draw(|frame| render(frame, view, theme))?;
        Ok(())
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, view: View<'_>, theme: &Theme) {
    let state = view.state;
    let (board, hud) = board_layout(frame.area(), state);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.field_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    // Food that spawned under the body stays visible on top of it.
    if state.snake.occupies(state.food.position) {
        render_snake(frame, inner, state, theme);
        render_food(frame, inner, state, theme);
    } else {
        render_food(frame, inner, state, theme);
        render_snake(frame, inner, state, theme);
    }
    render_hud(frame, hud, state, theme);

    if state.is_game_over() {
        render_game_over_menu(frame, board, state.score, state.death_reason, theme);
    } else if view.paused {
        render_pause_menu(frame, board, theme);
    }
}

/// Centers the bordered board with a one-line HUD underneath.
fn board_layout(area: Rect, state: &GameState) -> (Rect, Rect) {
    let grid = state.grid();
    let board_width = clamp_u16(u32::from(CELL_COLUMNS) * grid.width() + 2);
    let board_height = clamp_u16(grid.height() + 2);

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [board, hud] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    (board, hud)
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = board_to_terminal(inner, state, state.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when segments overlap.
    for (index, segment) in state.snake.segments().enumerate().rev() {
        let Some((x, y)) = board_to_terminal(inner, state, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn board_to_terminal(inner: Rect, state: &GameState, position: Position) -> Option<(u16, u16)> {
    let (column, row) = state.grid().cell_of(position)?;

    let x_offset = u16::try_from(column).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::{Color, Modifier};

    use crate::config::GameConfig;
    use crate::controller::View;
    use crate::game::GameState;
    use crate::food::Food;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::snake::Snake;
    use crate::theme::THEME_CLASSIC;

    use super::render;

    fn draw_buffer(state: &GameState, paused: bool) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, View { state, paused }, &THEME_CLASSIC))
            .expect("draw");

        terminal.backend().buffer().clone()
    }

    /// Block cells drawn in `color` as `(x, y, bold)`.
    fn blocks_in(buffer: &Buffer, color: Color) -> Vec<(u16, u16, bool)> {
        let width = buffer.area.width;
        buffer
            .content()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.symbol() == "█" && cell.fg == color)
            .map(|(index, cell)| {
                let index = u16::try_from(index).expect("test buffer index fits u16");
                (
                    index % width,
                    index / width,
                    cell.modifier.contains(Modifier::BOLD),
                )
            })
            .collect()
    }

    fn draw(state: &GameState, paused: bool) -> String {
        let buffer = draw_buffer(state, paused);
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn playing_frame_shows_score_without_menus() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);

        let screen = draw(&state, false);

        assert!(screen.contains("Score: 2"));
        assert!(screen.contains("██"));
        assert!(!screen.contains("GAME OVER"));
        assert!(!screen.contains("PAUSED"));
    }

    #[test]
    fn long_snake_draws_bold_head_ahead_of_body() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);
        state.snake = Snake::from_segments(
            vec![
                Position::new(200, 200),
                Position::new(160, 200),
                Position::new(120, 200),
            ],
            Direction::Right,
        );

        let buffer = draw_buffer(&state, false);
        let head = blocks_in(&buffer, THEME_CLASSIC.snake_head);
        let body = blocks_in(&buffer, THEME_CLASSIC.snake_body);

        assert_eq!(head.len(), 2);
        assert!(head.iter().all(|(_, _, bold)| *bold));
        assert_eq!(body.len(), 4);
        assert!(body.iter().all(|(_, _, bold)| !*bold));

        let head_left = head.iter().map(|(x, _, _)| *x).min().expect("head drawn");
        let body_right = body.iter().map(|(x, _, _)| *x).max().expect("body drawn");
        assert_eq!(head_left, body_right + 1);
        assert!(head.iter().chain(&body).all(|(_, y, _)| *y == head[0].1));
    }

    #[test]
    fn stacked_segments_show_only_the_head() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);

        let buffer = draw_buffer(&state, false);

        assert_eq!(blocks_in(&buffer, THEME_CLASSIC.snake_head).len(), 2);
        assert!(blocks_in(&buffer, THEME_CLASSIC.snake_body).is_empty());
    }

    #[test]
    fn food_under_the_body_is_drawn_on_top() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);
        state.snake = Snake::from_segments(
            vec![
                Position::new(200, 200),
                Position::new(160, 200),
                Position::new(120, 200),
            ],
            Direction::Right,
        );
        state.food = Food::new(Position::new(160, 200));

        let buffer = draw_buffer(&state, false);

        assert_eq!(blocks_in(&buffer, THEME_CLASSIC.food).len(), 2);
        assert_eq!(blocks_in(&buffer, THEME_CLASSIC.snake_body).len(), 2);
    }

    #[test]
    fn paused_frame_shows_pause_menu() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);

        assert!(draw(&state, true).contains("PAUSED"));
    }

    #[test]
    fn game_over_frame_shows_cause() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);
        state.snake = Snake::new(Position::new(0, 0), 2, Direction::Left);
        state.tick();

        let screen = draw(&state, false);

        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("hit wall"));
    }
}
