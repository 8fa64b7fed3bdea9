use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::collision::DeathReason;
use crate::theme::Theme;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let body = ["", "[P] Resume", "[Q]/[Esc] Quit"];
    render_popup(frame, area, " pause ", "PAUSED", &body, theme);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let score_line = format!("Score: {score}");
    let cause = match death_reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    };
    let body = [
        "",
        score_line.as_str(),
        cause,
        "",
        "[Enter]/[R] Play Again",
        "[Q]/[Esc] Quit",
    ];

    render_popup(frame, area, " game over ", "GAME OVER", &body, theme);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    heading: &str,
    body: &[&str],
    theme: &Theme,
) {
    let content_width = body
        .iter()
        .map(|line| line.width())
        .chain([heading.width(), title.width()])
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(body.len() + 3).unwrap_or(u16::MAX);
    let popup = centered_rect(area, width, height);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::styled(
        heading.to_owned(),
        Style::default()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )];
    lines.extend(
        body.iter()
            .map(|line| Line::styled((*line).to_owned(), Style::default().fg(theme.menu_footer))),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title.to_owned())),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    center
}
