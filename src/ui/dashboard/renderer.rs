//! Dashboard main renderer

use super::components::{footer, header, nav};
use super::state::DashboardState;
use crate::ui::theme;
use ratatui::backend::TestBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(theme::BACKGROUND)),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    let view = state.view();
    header::render_header(f, main_chunks[0]);
    nav::render_nav(f, main_chunks[1], &view.navigation);
    f.render_widget(view.panel, main_chunks[2]);
    footer::render_footer(f, main_chunks[3], state);
}

/// Renders the dashboard into an off-screen buffer and returns it as plain text.
pub fn render_snapshot(state: &DashboardState, width: u16, height: u16) -> std::io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render_dashboard(f, state))?;
    let text = terminal
        .backend()
        .buffer()
        .content()
        .chunks(width.max(1) as usize)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::ActivityLog;
    use crate::navigation::TabId;
    use crate::ui::app::UIConfig;
    use strum::IntoEnumIterator;

    fn snapshot_of(tab: Option<TabId>) -> String {
        snapshot_of_size(tab, 140, 48)
    }

    fn snapshot_of_size(tab: Option<TabId>, width: u16, height: u16) -> String {
        let config = UIConfig {
            start_tab: tab,
            ..UIConfig::default()
        };
        let state = DashboardState::new(config, ActivityLog::new());
        render_snapshot(&state, width, height).unwrap()
    }

    #[test]
    fn shell_shows_every_tab_label() {
        let text = snapshot_of(None);
        for label in [
            "Overview",
            "Voice",
            "Interpretation",
            "Storyline",
            "Trajectory",
            "Alignment",
            "Meta",
            "Methods & Models",
            "Export",
        ] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Last Updated: 2024-03-15 14:30 UTC"));
        assert!(text.contains("Total Posts"));
    }

    #[test]
    fn snapshot_shows_selected_panel() {
        let text = snapshot_of(Some(TabId::Alignment));
        assert!(text.contains("Theme-Pillar Alignment Heatmap"));
        assert!(!text.contains("Total Posts"));
    }

    #[test]
    fn snapshot_has_requested_height() {
        let text = snapshot_of(Some(TabId::Methods));
        assert_eq!(text.split('\n').count(), 48);
    }

    #[test]
    fn every_tab_renders_on_small_terminals() {
        for tab in TabId::iter() {
            let config = UIConfig {
                start_tab: Some(tab),
                ..UIConfig::default()
            };
            let state = DashboardState::new(config, ActivityLog::new());
            for width in 0..=60 {
                for height in 0..=20 {
                    assert!(
                        render_snapshot(&state, width, height).is_ok(),
                        "{tab} at {width}x{height}"
                    );
                }
            }
        }
    }

    #[test]
    fn narrow_bar_panels_keep_their_rows() {
        let text = snapshot_of_size(Some(TabId::Voice), 20, 20);
        assert_eq!(text.split('\n').count(), 20);
        let text = snapshot_of_size(Some(TabId::Meta), 41, 20);
        assert_eq!(text.split('\n').count(), 20);
    }

    #[test]
    fn footer_shows_latest_activity() {
        let activity = ActivityLog::new();
        activity.push(crate::logging::LogEntry::new(
            crate::logging::LogLevel::Info,
            "Exported 3 sections",
        ));
        let state = DashboardState::new(UIConfig::default(), activity);
        let text = render_snapshot(&state, 140, 48).unwrap();
        assert!(text.contains("Exported 3 sections"));
    }
}
