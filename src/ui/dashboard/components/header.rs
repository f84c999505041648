//! Dashboard header component
//!
//! Renders the product title, platform badge and dataset timestamp

use crate::consts::cli_consts::branding::{
    DASHBOARD_TITLE, FRAMEWORK_LINE, LAST_UPDATED, PLATFORM_BADGE, PRODUCT_NAME, SUMMARY_BADGES,
    TAGLINE,
};
use crate::ui::theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title, badges and the last update stamp.
pub fn render_header(f: &mut Frame, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(36)])
        .split(header_chunks[0]);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", PRODUCT_NAME),
            Style::default()
                .fg(Color::White)
                .bg(theme::BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", TAGLINE),
            Style::default()
                .fg(theme::BRAND_LIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", PLATFORM_BADGE), theme::muted()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme::BRAND)),
    );
    f.render_widget(title, title_chunks[0]);

    let updated = Paragraph::new(format!("Last Updated: {}", LAST_UPDATED))
        .alignment(Alignment::Right)
        .style(theme::muted())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(theme::BRAND)),
        );
    f.render_widget(updated, title_chunks[1]);

    let mut summary = vec![
        Span::styled(DASHBOARD_TITLE, theme::emphasis()),
        Span::styled(format!("  {}", FRAMEWORK_LINE), theme::muted()),
    ];
    for badge in SUMMARY_BADGES {
        summary.push(Span::raw("  "));
        summary.push(Span::styled(
            format!(" {} ", badge),
            Style::default().fg(Color::White).bg(theme::BRAND_LIGHT),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(summary)), header_chunks[1]);
}
