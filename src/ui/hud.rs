use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::GameSession;
use crate::theme::Theme;

/// Renders the one-line HUD and returns the remaining play area below it.
///
/// Left side carries the score/status text, right side the grid dimensions.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(session.status_line()))
            .alignment(Alignment::Left)
            .style(
                Style::default()
                    .fg(theme.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        hud_area,
    );

    let bounds = session.bounds();
    frame.render_widget(
        Paragraph::new(Line::from(format!("{}x{}", bounds.width, bounds.height)))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.overlay_footer)),
        hud_area,
    );

    play_area
}
