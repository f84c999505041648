//! Dashboard navigation strip
//!
//! Renders every tab in order with the active one highlighted

use crate::navigation::NavigationView;
use crate::ui::theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Tabs};

pub fn render_nav(f: &mut Frame, area: Rect, view: &NavigationView) {
    let titles: Vec<Line> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), theme::muted()),
                Span::raw(entry.label),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(view.selected_index())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(theme::BRAND_LIGHT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", theme::muted()));
    f.render_widget(tabs, area);
}
