//! Dashboard state management
//!
//! Holds the navigation controller and the single mounted panel

use crate::logging::ActivityLog;
use crate::navigation::{Navigation, NavigationView, TabId};
use crate::ui::app::UIConfig;
use crate::ui::panels::Panel;

use crossterm::event::KeyCode;
use log::debug;
use std::path::PathBuf;

/// What the renderer draws: the navigation strip and the mounted panel.
#[derive(Debug)]
pub struct DashboardView<'a> {
    pub navigation: NavigationView,
    pub panel: &'a Panel,
}

/// Dashboard state: the active tab, its mounted panel and display settings.
#[derive(Debug)]
pub struct DashboardState {
    navigation: Navigation,
    /// Panel of the active tab. Rebuilt only when the active tab changes.
    panel: Panel,
    /// Activity log shown in the footer.
    pub activity: ActivityLog,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Where exports triggered from the Export tab are written.
    pub export_dir: Option<PathBuf>,
}

impl DashboardState {
    /// Creates the dashboard on the first tab, then applies the configured start tab.
    pub fn new(ui_config: UIConfig, activity: ActivityLog) -> Self {
        let navigation = Navigation::new();
        let panel = Panel::mount(navigation.active());
        let mut state = Self {
            navigation,
            panel,
            activity,
            with_background_color: ui_config.with_background_color,
            export_dir: ui_config.export_dir,
        };
        if let Some(tab) = ui_config.start_tab {
            state.select_tab(tab.as_ref());
        }
        state
    }

    pub fn active(&self) -> TabId {
        self.navigation.active()
    }

    #[cfg(test)]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView {
            navigation: self.navigation.view(),
            panel: &self.panel,
        }
    }

    /// Activates the tab with the given id. Unknown ids are ignored.
    pub fn select_tab(&mut self, id: &str) {
        self.navigation.select_tab(id);
        self.sync_panel();
    }

    pub fn select_index(&mut self, index: usize) {
        self.navigation.select_index(index);
        self.sync_panel();
    }

    pub fn next_tab(&mut self) {
        self.navigation.next();
        self.sync_panel();
    }

    pub fn previous_tab(&mut self) {
        self.navigation.previous();
        self.sync_panel();
    }

    fn sync_panel(&mut self) {
        let active = self.navigation.active();
        if self.panel.tab() != active {
            debug!("Mounting {} panel", active);
            self.panel = Panel::mount(active);
        }
    }

    /// Handles a key press that is not a quit key.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.next_tab(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.previous_tab(),
            KeyCode::Char(c @ '1'..='9') => self.select_index(c as usize - '1' as usize),
            _ => self.handle_panel_key(code),
        }
    }

    fn handle_panel_key(&mut self, code: KeyCode) {
        let Panel::Export(panel) = &mut self.panel else {
            return;
        };
        match code {
            KeyCode::Up | KeyCode::Char('k') => panel.form_mut().cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => panel.form_mut().cursor_down(),
            KeyCode::Char(' ') => panel.form_mut().toggle_at_cursor(),
            KeyCode::Char('f') => panel.form_mut().cycle_format(),
            KeyCode::Char('r') => panel.form_mut().cycle_date_range(),
            KeyCode::Enter => {
                // Failures are logged and kept in the panel status.
                let _ = panel.export(self.export_dir.as_deref());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use strum::IntoEnumIterator;

    fn state() -> DashboardState {
        DashboardState::new(UIConfig::default(), ActivityLog::new())
    }

    fn export_panel(state: &DashboardState) -> &crate::ui::panels::ExportPanel {
        match state.panel() {
            Panel::Export(panel) => panel,
            other => panic!("expected export panel, got {:?}", other.tab()),
        }
    }

    #[test]
    fn mounted_panel_follows_active_tab() {
        let mut state = state();
        assert_eq!(state.panel().tab(), TabId::Overview);
        for tab in TabId::iter() {
            state.select_tab(tab.as_ref());
            let view = state.view();
            assert_eq!(view.navigation.active, tab);
            assert_eq!(view.panel.tab(), tab);
            assert_eq!(view.navigation.entries.iter().filter(|e| e.active).count(), 1);
        }
    }

    #[test]
    fn start_tab_is_applied_after_construction() {
        let config = UIConfig {
            start_tab: Some(TabId::Alignment),
            ..UIConfig::default()
        };
        let state = DashboardState::new(config, ActivityLog::new());
        assert_eq!(state.active(), TabId::Alignment);
        assert_eq!(state.panel().tab(), TabId::Alignment);
    }

    #[test]
    fn unknown_id_keeps_mounted_panel() {
        let mut state = state();
        state.select_tab("storyline");
        state.select_tab("not-a-real-id");
        assert_eq!(state.active(), TabId::Storyline);
        assert_eq!(state.panel().tab(), TabId::Storyline);
    }

    #[test]
    fn keys_move_between_tabs() {
        let mut state = state();
        state.handle_key(KeyCode::Right);
        assert_eq!(state.active(), TabId::Voice);
        state.handle_key(KeyCode::BackTab);
        state.handle_key(KeyCode::Char('h'));
        assert_eq!(state.active(), TabId::Export);
        state.handle_key(KeyCode::Char('6'));
        assert_eq!(state.active(), TabId::Alignment);
        state.handle_key(KeyCode::Char('0'));
        assert_eq!(state.active(), TabId::Alignment);
    }

    #[test]
    fn export_form_resets_when_tab_is_left() {
        let mut state = state();
        state.select_tab("export");
        state.handle_key(KeyCode::Char('f'));
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Char(' '));
        {
            let form = export_panel(&state).form();
            assert_eq!(form.format(), ExportFormat::Pdf);
            assert!(!form.is_selected(TabId::Voice));
        }

        // Reselecting the active tab does not remount.
        state.select_tab("export");
        assert_eq!(export_panel(&state).form().format(), ExportFormat::Pdf);

        state.select_tab("overview");
        state.select_tab("export");
        let form = export_panel(&state).form();
        assert_eq!(form.format(), ExportFormat::Csv);
        assert!(form.is_selected(TabId::Voice));
    }

    #[test]
    fn panel_keys_are_ignored_outside_export() {
        let mut state = state();
        state.handle_key(KeyCode::Char('f'));
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.active(), TabId::Overview);
        assert_eq!(state.panel().tab(), TabId::Overview);
    }
}
