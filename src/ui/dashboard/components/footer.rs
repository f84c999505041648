//! Dashboard footer component
//!
//! Renders key hints, the latest activity entry and the notice line

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use crate::consts::cli_consts::branding::FOOTER_NOTICE;
use crate::logging::LogLevel;
use crate::ui::theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
    }
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(theme::BRAND));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let hints = Paragraph::new("[←/→] Tab | [1-9] Jump | [Q] Quit").style(
        Style::default()
            .fg(theme::BRAND_LIGHT)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(hints, chunks[0]);

    let status = match state.activity.latest() {
        Some(entry) => Line::from(vec![
            Span::styled(format_compact_timestamp(&entry.timestamp), theme::muted()),
            Span::raw(" "),
            Span::styled(entry.message, Style::default().fg(level_color(entry.level))),
        ]),
        None => Line::from(Span::styled(FOOTER_NOTICE, theme::muted())),
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Right), chunks[1]);
}
