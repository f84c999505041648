//! Tab navigation
//!
//! The dashboard shows one of a fixed, ordered set of tabs. [`Navigation`] owns the only
//! mutable state in the application, the active tab, and produces the view that the
//! renderer draws: every descriptor in order, exactly one of them marked active.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Identifier of a dashboard tab. The string form is the stable id (`"overview"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    Overview,
    Voice,
    Interpretation,
    Storyline,
    Trajectory,
    Alignment,
    Meta,
    Methods,
    Export,
}

impl TabId {
    /// Position of this tab in the navigation strip.
    pub fn index(self) -> usize {
        TABS.iter()
            .position(|tab| tab.id == self)
            .unwrap_or_default()
    }

    /// Human-readable name shown in the navigation strip.
    pub fn label(self) -> &'static str {
        TABS[self.index()].label
    }

    /// Tabs whose content can be included in an export.
    pub fn exportable() -> impl Iterator<Item = TabId> {
        TabId::iter().filter(|tab| *tab != TabId::Export)
    }
}

/// Pairs a tab id with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
}

/// Navigation order of the dashboard tabs.
pub const TABS: [TabDescriptor; 9] = [
    TabDescriptor { id: TabId::Overview, label: "Overview" },
    TabDescriptor { id: TabId::Voice, label: "Voice" },
    TabDescriptor { id: TabId::Interpretation, label: "Interpretation" },
    TabDescriptor { id: TabId::Storyline, label: "Storyline" },
    TabDescriptor { id: TabId::Trajectory, label: "Trajectory" },
    TabDescriptor { id: TabId::Alignment, label: "Alignment" },
    TabDescriptor { id: TabId::Meta, label: "Meta" },
    TabDescriptor { id: TabId::Methods, label: "Methods & Models" },
    TabDescriptor { id: TabId::Export, label: "Export" },
];

/// One entry of the rendered navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: TabId,
    pub label: &'static str,
    pub active: bool,
}

/// What the renderer draws for the navigation strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub entries: Vec<NavEntry>,
    pub active: TabId,
}

impl NavigationView {
    /// Index of the active entry, for widgets that highlight by position.
    pub fn selected_index(&self) -> usize {
        self.entries
            .iter()
            .position(|entry| entry.active)
            .unwrap_or_default()
    }
}

/// Single-owner holder of the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: TabId,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    /// Starts on the first tab of the navigation strip.
    pub fn new() -> Self {
        Self { active: TABS[0].id }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn descriptors(&self) -> &'static [TabDescriptor] {
        &TABS
    }

    /// Activates the tab with the given id. Unknown ids leave the active tab unchanged.
    pub fn select_tab(&mut self, id: &str) {
        if let Ok(tab) = id.parse::<TabId>() {
            self.select(tab);
        }
    }

    pub fn select(&mut self, tab: TabId) {
        self.active = tab;
    }

    /// Activates the tab at `index` in navigation order; out of range is a no-op.
    pub fn select_index(&mut self, index: usize) {
        if let Some(tab) = TABS.get(index) {
            self.active = tab.id;
        }
    }

    /// Moves to the next tab, wrapping around after the last one.
    pub fn next(&mut self) {
        let index = (self.active.index() + 1) % TABS.len();
        self.select_index(index);
    }

    /// Moves to the previous tab, wrapping around before the first one.
    pub fn previous(&mut self) {
        let index = (self.active.index() + TABS.len() - 1) % TABS.len();
        self.select_index(index);
    }

    pub fn view(&self) -> NavigationView {
        let entries = TABS
            .iter()
            .map(|tab| NavEntry {
                id: tab.id,
                label: tab.label,
                active: tab.id == self.active,
            })
            .collect();
        NavigationView {
            entries,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ids(view: &NavigationView) -> Vec<TabId> {
        view.entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.id)
            .collect()
    }

    #[test]
    fn descriptors_cover_every_tab_in_order() {
        let from_enum: Vec<TabId> = TabId::iter().collect();
        let from_table: Vec<TabId> = TABS.iter().map(|tab| tab.id).collect();
        assert_eq!(from_enum, from_table);
    }

    #[test]
    fn ids_round_trip_through_their_string_form() {
        let ids: Vec<&str> = TABS.iter().map(|tab| tab.id.as_ref()).collect();
        assert_eq!(
            ids,
            [
                "overview",
                "voice",
                "interpretation",
                "storyline",
                "trajectory",
                "alignment",
                "meta",
                "methods",
                "export"
            ]
        );
        assert_eq!(TabId::Methods.label(), "Methods & Models");
    }

    #[test]
    fn starts_on_overview() {
        let nav = Navigation::new();
        assert_eq!(nav.active(), TabId::Overview);
        assert_eq!(active_ids(&nav.view()), vec![TabId::Overview]);
    }

    #[test]
    fn selecting_each_valid_id_marks_only_that_tab() {
        let mut nav = Navigation::new();
        for tab in TABS {
            nav.select_tab(tab.id.as_ref());
            let view = nav.view();
            assert_eq!(view.active, tab.id);
            assert_eq!(active_ids(&view), vec![tab.id]);
            assert_eq!(view.selected_index(), tab.id.index());
        }
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut nav = Navigation::new();
        nav.select_tab("alignment");
        for bogus in ["not-a-real-id", "", "Alignment", "OVERVIEW", " meta"] {
            nav.select_tab(bogus);
            assert_eq!(nav.active(), TabId::Alignment, "{bogus:?} changed the tab");
        }
    }

    #[test]
    fn strip_order_is_stable_regardless_of_selection() {
        let mut nav = Navigation::new();
        let expected: Vec<&str> = TABS.iter().map(|tab| tab.label).collect();
        for tab in TABS.iter().rev() {
            nav.select(tab.id);
            let labels: Vec<&str> = nav.view().entries.iter().map(|e| e.label).collect();
            assert_eq!(labels, expected);
        }
    }

    #[test]
    fn alignment_scenario() {
        let mut nav = Navigation::new();
        assert_eq!(nav.view().active, TabId::Overview);

        nav.select_tab("alignment");
        let view = nav.view();
        assert_eq!(view.active, TabId::Alignment);
        assert_eq!(view.entries.len(), 9);
        assert_eq!(active_ids(&view), vec![TabId::Alignment]);

        nav.select_tab("not-a-real-id");
        assert_eq!(nav.view().active, TabId::Alignment);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut nav = Navigation::new();
        nav.previous();
        assert_eq!(nav.active(), TabId::Export);
        nav.next();
        assert_eq!(nav.active(), TabId::Overview);
        nav.next();
        assert_eq!(nav.active(), TabId::Voice);
    }

    #[test]
    fn select_index_out_of_range_is_a_no_op() {
        let mut nav = Navigation::new();
        nav.select_index(4);
        assert_eq!(nav.active(), TabId::Trajectory);
        nav.select_index(9);
        assert_eq!(nav.active(), TabId::Trajectory);
    }

    #[test]
    fn exportable_tabs_exclude_export() {
        let tabs: Vec<TabId> = TabId::exportable().collect();
        assert_eq!(tabs.len(), 8);
        assert!(!tabs.contains(&TabId::Export));
    }
}
