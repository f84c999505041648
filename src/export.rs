//! Export workflow.
//!
//! Collects the export format, date range and dashboard sections, then produces a receipt.
//! When an output path is given the data behind every selected section is written as a
//! JSON document.

use crate::data::mock;
use crate::navigation::TabId;
use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; the form requires at least one section.
    #[error("No sections selected for export")]
    NoSections,

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize export: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    strum::EnumIter,
    strum::AsRefStr,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Pdf,
    Dashboard,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV (Enriched Dataset)",
            ExportFormat::Pdf => "PDF Report",
            ExportFormat::Dashboard => "Dashboard Snapshot",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Csv => "Raw data with all analytics fields",
            ExportFormat::Pdf => "Executive summary with key insights",
            ExportFormat::Dashboard => "Static HTML version of dashboard",
        }
    }

    /// Approximate size of the produced artifact.
    pub fn size(self) -> &'static str {
        match self {
            ExportFormat::Csv => "~45 MB",
            ExportFormat::Pdf => "~8 MB",
            ExportFormat::Dashboard => "~12 MB",
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Csv => &[
                "All processed posts",
                "Sentiment scores",
                "Entity tags",
                "Metadata",
            ],
            ExportFormat::Pdf => &[
                "Executive summary",
                "Key visualizations",
                "Methodology",
                "Recommendations",
            ],
            ExportFormat::Dashboard => &[
                "All current charts",
                "Interactive elements",
                "Embedded data",
                "Offline viewing",
            ],
        }
    }

    fn next(self) -> Self {
        match self {
            ExportFormat::Csv => ExportFormat::Pdf,
            ExportFormat::Pdf => ExportFormat::Dashboard,
            ExportFormat::Dashboard => ExportFormat::Csv,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    strum::EnumIter,
    strum::AsRefStr,
    clap::ValueEnum,
)]
pub enum DateRange {
    #[default]
    #[strum(serialize = "all")]
    #[serde(rename = "all")]
    #[value(name = "all")]
    All,
    #[strum(serialize = "last30")]
    #[serde(rename = "last30")]
    #[value(name = "last30")]
    Last30Days,
    #[strum(serialize = "last90")]
    #[serde(rename = "last90")]
    #[value(name = "last90")]
    Last90Days,
    #[strum(serialize = "q1_2024")]
    #[serde(rename = "q1_2024")]
    #[value(name = "q1_2024")]
    FirstQuarter2024,
    #[strum(serialize = "q4_2023")]
    #[serde(rename = "q4_2023")]
    #[value(name = "q4_2023")]
    FourthQuarter2023,
    #[strum(serialize = "custom")]
    #[serde(rename = "custom")]
    #[value(name = "custom")]
    Custom,
}

impl DateRange {
    pub fn label(self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::Last90Days => "Last 90 Days",
            DateRange::FirstQuarter2024 => "Q1 2024",
            DateRange::FourthQuarter2023 => "Q4 2023",
            DateRange::Custom => "Custom Range",
        }
    }

    fn next(self) -> Self {
        let ranges: Vec<DateRange> = DateRange::iter().collect();
        let index = ranges.iter().position(|r| *r == self).unwrap_or_default();
        ranges[(index + 1) % ranges.len()]
    }
}

/// Name and description of a section as listed in the export form.
pub fn section_details(tab: TabId) -> (&'static str, &'static str) {
    match tab {
        TabId::Overview => ("Overview", "KPIs and key insights"),
        TabId::Voice => ("Voice Analysis", "Actor segmentation and influence"),
        TabId::Interpretation => ("Interpretation", "Sentiment and emotion analysis"),
        TabId::Storyline => ("Storyline", "Narrative clustering and themes"),
        TabId::Trajectory => ("Trajectory", "Time series and forecasting"),
        TabId::Alignment => ("Alignment", "Policy alignment scoring"),
        TabId::Meta => ("Meta Analysis", "Cross-cutting insights"),
        TabId::Methods => ("Methods & Models", "Technical methodology"),
        TabId::Export => ("Export", "Export configuration"),
    }
}

/// Editable export settings behind the Export tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportForm {
    format: ExportFormat,
    date_range: DateRange,
    sections: BTreeSet<TabId>,
    /// Row of the section list under the cursor.
    cursor: usize,
}

impl Default for ExportForm {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            date_range: DateRange::default(),
            sections: [TabId::Overview, TabId::Voice, TabId::Interpretation]
                .into_iter()
                .collect(),
            cursor: 0,
        }
    }
}

impl ExportForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from explicit choices. An empty `sections` keeps the default selection.
    pub fn with(format: ExportFormat, date_range: DateRange, sections: &[TabId]) -> Self {
        let mut form = Self {
            format,
            date_range,
            ..Self::default()
        };
        if !sections.is_empty() {
            form.sections = sections
                .iter()
                .copied()
                .filter(|tab| *tab != TabId::Export)
                .collect();
        }
        form
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, tab: TabId) -> bool {
        self.sections.contains(&tab)
    }

    /// Selected sections in navigation order.
    pub fn selected_sections(&self) -> Vec<TabId> {
        self.sections.iter().copied().collect()
    }

    pub fn cycle_format(&mut self) {
        self.format = self.format.next();
    }

    pub fn cycle_date_range(&mut self) {
        self.date_range = self.date_range.next();
    }

    /// Adds the section if absent, removes it otherwise.
    pub fn toggle_section(&mut self, tab: TabId) {
        if tab == TabId::Export {
            return;
        }
        if !self.sections.remove(&tab) {
            self.sections.insert(tab);
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = TabId::exportable().count() - 1;
        self.cursor = (self.cursor + 1).min(last);
    }

    pub fn toggle_at_cursor(&mut self) {
        if let Some(tab) = TabId::exportable().nth(self.cursor) {
            self.toggle_section(tab);
        }
    }

    /// Validates the form into a request.
    pub fn request(&self) -> Result<ExportRequest, ExportError> {
        if self.sections.is_empty() {
            return Err(ExportError::NoSections);
        }
        Ok(ExportRequest {
            format: self.format,
            date_range: self.date_range,
            sections: self.selected_sections(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub date_range: DateRange,
    pub sections: Vec<TabId>,
}

/// Outcome of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub message: String,
    pub written_to: Option<PathBuf>,
}

#[derive(Serialize)]
struct ExportDocument {
    format: ExportFormat,
    format_name: &'static str,
    date_range: DateRange,
    generated_at: String,
    /// Keyed by tab id, in navigation order.
    sections: Map<String, Value>,
}

impl ExportRequest {
    pub fn message(&self) -> String {
        format!(
            "Exporting {}...\n\nSections: {}\nDate Range: {}",
            self.format.name(),
            self.sections.len(),
            self.date_range.as_ref()
        )
    }

    /// Default file name for a snapshot written now.
    pub fn file_name(&self) -> String {
        format!(
            "vista-{}-{}.json",
            self.format.as_ref(),
            Local::now().format("%Y%m%d-%H%M%S")
        )
    }

    /// Runs the export. With `output`, the section data is written there as JSON.
    /// A directory as `output` receives a file named by [`ExportRequest::file_name`].
    pub fn run(&self, output: Option<&Path>) -> Result<ExportReceipt, ExportError> {
        let written_to = match output {
            Some(path) => Some(self.write_snapshot(path)?),
            None => None,
        };
        Ok(ExportReceipt {
            message: self.message(),
            written_to,
        })
    }

    fn write_snapshot(&self, output: &Path) -> Result<PathBuf, ExportError> {
        let path = if output.is_dir() {
            output.join(self.file_name())
        } else {
            output.to_path_buf()
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let sections = self
            .sections
            .iter()
            .map(|tab| (tab.as_ref().to_string(), section_payload(*tab)))
            .collect();
        let document = ExportDocument {
            format: self.format,
            format_name: self.format.name(),
            date_range: self.date_range,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            sections,
        };
        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

/// Data records backing a dashboard section.
pub fn section_payload(tab: TabId) -> Value {
    match tab {
        TabId::Overview => json!({
            "kpis": mock::KPI_METRICS,
            "relevance_resonance": mock::OVERVIEW_QUADRANT,
            "time_series": mock::TIME_SERIES,
            "key_insights": mock::KEY_INSIGHTS,
        }),
        TabId::Voice => json!({
            "share_of_voice": mock::VOICE,
            "geographic": mock::GEOGRAPHIC,
            "influencers": mock::INFLUENCERS,
            "volume_by_source": mock::SOURCE_VOLUME,
        }),
        TabId::Interpretation => json!({
            "sentiment": mock::SENTIMENT,
            "emotions": mock::EMOTIONS,
            "keywords": mock::KEYWORDS,
            "frames": mock::FRAMES,
            "misinterpretations": mock::MISINTERPRETATIONS,
            "time_series": mock::TIME_SERIES,
        }),
        TabId::Storyline => json!({
            "clusters": mock::NARRATIVE_CLUSTERS,
            "platform_divergence": mock::PLATFORM_DIVERGENCE,
            "echo_chambers": mock::ECHO_CHAMBERS,
            "lifecycle": mock::NARRATIVE_LIFECYCLE,
        }),
        TabId::Trajectory => json!({
            "time_series": mock::TIME_SERIES,
            "events": mock::EVENT_ANNOTATIONS,
            "emotion_timeline": mock::EMOTION_TIMELINE,
            "yearly_volume": mock::YEARLY_VOLUME,
            "forecast": mock::FORECAST,
        }),
        TabId::Alignment => json!({
            "pillars": mock::PILLAR_ALIGNMENT,
            "heatmap": mock::THEME_PILLAR_HEATMAP,
            "scorecards": mock::ALIGNMENT,
            "gap_analysis": mock::GAP_ANALYSIS,
            "trends": mock::ALIGNMENT_TRENDS,
        }),
        TabId::Meta => json!({
            "relevance_resonance": mock::RELEVANCE_RESONANCE,
            "momentum": mock::MOMENTUM,
            "platforms": mock::PLATFORM_COMPARISON,
            "countries": mock::COUNTRY_BENCHMARK,
            "comparative_trends": mock::COMPARATIVE_TRENDS,
        }),
        TabId::Methods => json!({
            "pipeline": mock::PIPELINE_STEPS,
            "methods": mock::METHODS,
            "technical_specifications": mock::TECHNICAL_SPECS,
        }),
        TabId::Export => json!({
            "recent_exports": mock::RECENT_EXPORTS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_export_tab() {
        let form = ExportForm::new();
        assert_eq!(form.format(), ExportFormat::Csv);
        assert_eq!(form.date_range(), DateRange::All);
        assert_eq!(
            form.selected_sections(),
            vec![TabId::Overview, TabId::Voice, TabId::Interpretation]
        );
    }

    #[test]
    fn toggling_adds_and_removes_sections_in_tab_order() {
        let mut form = ExportForm::new();
        form.toggle_section(TabId::Meta);
        form.toggle_section(TabId::Storyline);
        form.toggle_section(TabId::Voice);
        assert_eq!(
            form.selected_sections(),
            vec![
                TabId::Overview,
                TabId::Interpretation,
                TabId::Storyline,
                TabId::Meta
            ]
        );
    }

    #[test]
    fn export_tab_cannot_be_selected() {
        let mut form = ExportForm::new();
        form.toggle_section(TabId::Export);
        assert!(!form.is_selected(TabId::Export));
        let form = ExportForm::with(ExportFormat::Pdf, DateRange::All, &[TabId::Export]);
        assert!(form.selected_sections().is_empty());
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut form = ExportForm::new();
        for tab in form.selected_sections() {
            form.toggle_section(tab);
        }
        assert!(matches!(form.request(), Err(ExportError::NoSections)));
    }

    #[test]
    fn message_reports_format_sections_and_range() {
        let mut form = ExportForm::new();
        form.cycle_format();
        form.cycle_date_range();
        form.cycle_date_range();
        let request = form.request().unwrap();
        assert_eq!(
            request.message(),
            "Exporting PDF Report...\n\nSections: 3\nDate Range: last90"
        );
    }

    #[test]
    fn format_and_range_cycles_wrap() {
        let mut form = ExportForm::new();
        for _ in 0..3 {
            form.cycle_format();
        }
        assert_eq!(form.format(), ExportFormat::Csv);
        for _ in 0..6 {
            form.cycle_date_range();
        }
        assert_eq!(form.date_range(), DateRange::All);
    }

    #[test]
    fn cursor_is_clamped_to_the_section_list() {
        let mut form = ExportForm::new();
        form.cursor_up();
        assert_eq!(form.cursor(), 0);
        for _ in 0..20 {
            form.cursor_down();
        }
        assert_eq!(form.cursor(), 7);
        form.toggle_at_cursor();
        assert!(form.is_selected(TabId::Methods));
    }

    #[test]
    fn run_without_output_writes_nothing() {
        let receipt = ExportForm::new().request().unwrap().run(None).unwrap();
        assert!(receipt.written_to.is_none());
        assert!(receipt.message.starts_with("Exporting CSV (Enriched Dataset)..."));
    }

    #[test]
    fn run_writes_selected_sections_as_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("export.json");
        let form = ExportForm::with(
            ExportFormat::Dashboard,
            DateRange::FirstQuarter2024,
            &[TabId::Trajectory, TabId::Alignment],
        );
        let receipt = form.request().unwrap().run(Some(&path)).unwrap();
        assert_eq!(receipt.written_to.as_deref(), Some(path.as_path()));

        let document: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(document["format"], "dashboard");
        assert_eq!(document["date_range"], "q1_2024");
        let sections = document["sections"].as_object().unwrap();
        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, ["trajectory", "alignment"]);
        assert_eq!(sections["trajectory"]["forecast"][1]["forecast"], 148000);
        assert_eq!(sections["trajectory"]["forecast"][0]["forecast"], Value::Null);
    }

    #[test]
    fn run_into_directory_names_the_file() {
        let dir = tempdir().unwrap();
        let receipt = ExportForm::new()
            .request()
            .unwrap()
            .run(Some(dir.path()))
            .unwrap();
        let path = receipt.written_to.unwrap();
        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("vista-csv-") && name.ends_with(".json"));
    }
}
