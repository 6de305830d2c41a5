use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::game::DeathReason;
use crate::theme::Theme;

/// Draws the pause overlay as a centered popup.
pub fn render_pause_overlay(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED").style(
            Style::default()
                .fg(theme.overlay_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over popup with the final score and the restart key.
///
/// This popup is the restart affordance: it is only ever drawn while the
/// session is in the game-over state.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.overlay_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("[R]/[Enter] Play Again"),
        Line::from("[Q] Quit").style(Style::default().fg(theme.overlay_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
