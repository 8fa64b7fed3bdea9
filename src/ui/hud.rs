use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::GameState;
use crate::theme::Theme;

const TABLE_SEPARATOR: &str = " │ ";

/// Renders the status row: score readout on the left, board facts on the right.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let right = right_info_line(state, theme);
    let right_width = u16::try_from(line_width(&right)).unwrap_or(u16::MAX);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, theme)).alignment(Alignment::Left),
        left_area,
    );
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        right_area,
    );
}

fn score_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_value);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled(TABLE_SEPARATOR, label),
        Span::styled("Speed: ", label),
        Span::styled(state.speed_level().to_string(), value),
    ])
}

fn right_info_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let grid = state.grid();
    let label = Style::default().fg(theme.hud_label);

    Line::from(vec![
        Span::styled(format!("{}x{}", grid.width(), grid.height()), label),
        Span::styled(TABLE_SEPARATOR, label),
        Span::styled(
            format!("{}/{}", state.snake.len(), grid.total_cells()),
            label,
        ),
        Span::styled(TABLE_SEPARATOR, label),
        Span::styled(format!("{} ms", state.tick_interval_ms), label),
    ])
}

fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| span.content.as_ref().width())
        .sum()
}
