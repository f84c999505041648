//! Export panel: format selection, export configuration, recent exports and guidelines.
//!
//! The only panel with editable state. The form is rebuilt whenever the panel is mounted,
//! so leaving the tab discards unsaved choices.

use super::{columns, rows};
use crate::data::mock;
use crate::data::{Guideline, RecentExport};
use crate::export::{ExportError, ExportForm, ExportFormat, ExportReceipt, section_details};
use crate::navigation::TabId;
use crate::ui::theme;
use log::{info, warn};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, Widget, Wrap,
};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub struct ExportPanel {
    form: ExportForm,
    recent: &'static [RecentExport],
    guidelines: &'static [Guideline],
    /// Message from the last export attempt.
    status: Option<Result<String, String>>,
}

impl ExportPanel {
    pub fn new() -> Self {
        Self {
            form: ExportForm::new(),
            recent: mock::RECENT_EXPORTS,
            guidelines: mock::EXPORT_GUIDELINES,
            status: None,
        }
    }

    pub fn form(&self) -> &ExportForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ExportForm {
        &mut self.form
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<&Result<String, String>> {
        self.status.as_ref()
    }

    /// Runs the export for the current form, writing into `dir` when given.
    pub fn export(&mut self, dir: Option<&Path>) -> Result<ExportReceipt, ExportError> {
        let outcome = self.run(dir);
        match &outcome {
            Ok(receipt) => {
                info!("{}", receipt.message.replace("\n\n", " | ").replace('\n', ", "));
                if let Some(path) = &receipt.written_to {
                    info!("Export written to {}", path.display());
                }
                self.status = Some(Ok(receipt.message.clone()));
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.status = Some(Err(e.to_string()));
            }
        }
        outcome
    }

    fn run(&self, dir: Option<&Path>) -> Result<ExportReceipt, ExportError> {
        let request = self.form.request()?;
        if let Some(dir) = dir {
            fs::create_dir_all(dir)?;
        }
        request.run(dir)
    }

    fn render_formats(&self, area: Rect, buf: &mut Buffer) {
        let slots = columns(area, [Constraint::Ratio(1, 3); 3]);
        for (format, slot) in ExportFormat::iter().zip(slots.iter()) {
            let selected = format == self.form.format();
            let border = if selected { theme::BRAND } else { Color::DarkGray };
            let marker = if selected { "● " } else { "○ " };
            let mut lines = vec![
                Line::from(Span::styled(format.description(), theme::muted())),
                Line::from(Span::styled(
                    format!("Size: {}", format.size()),
                    Style::default().fg(theme::BRAND_LIGHT),
                )),
            ];
            lines.extend(
                format
                    .features()
                    .iter()
                    .map(|feature| Line::from(format!("✓ {}", feature))),
            );
            let title_style = if selected {
                theme::emphasis()
            } else {
                Style::default().fg(Color::Gray)
            };
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(format!("{}{}", marker, format.name()), title_style))
                        .borders(Borders::ALL)
                        .border_type(if selected {
                            BorderType::Thick
                        } else {
                            BorderType::Rounded
                        })
                        .border_style(Style::default().fg(border))
                        .padding(Padding::horizontal(1)),
                )
                .render(*slot, buf);
        }
    }

    fn config_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Date Range: ", theme::muted()),
                Span::styled(self.form.date_range().label(), theme::emphasis()),
            ]),
            Line::from(Span::styled("Include Sections", theme::muted())),
        ];
        for (row, tab) in TabId::exportable().enumerate() {
            let (title, description) = section_details(tab);
            let cursor = if row == self.form.cursor() { "›" } else { " " };
            let check = if self.form.is_selected(tab) { "[x]" } else { "[ ]" };
            let style = if row == self.form.cursor() {
                Style::default()
                    .fg(theme::BRAND_LIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} {} {}", cursor, check, title), style),
                Span::styled(format!("  {}", description), theme::muted()),
            ]));
        }

        let count = self.form.selected_sections().len();
        let button = if count == 0 {
            Span::styled("[Enter] Export (select at least one section)", theme::muted())
        } else {
            Span::styled(
                format!("[Enter] Export {} ({} sections)", self.form.format().name(), count),
                Style::default()
                    .fg(Color::White)
                    .bg(theme::BRAND)
                    .add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(""));
        lines.push(Line::from(button));
        lines.push(Line::from(Span::styled(
            "[↑/↓] move  [Space] toggle  [f] format  [r] range",
            theme::muted(),
        )));

        match &self.status {
            Some(Ok(message)) => {
                let style = Style::default().fg(theme::POSITIVE);
                lines.extend(
                    message
                        .lines()
                        .filter(|l| !l.is_empty())
                        .map(|l| Line::from(Span::styled(l.to_string(), style))),
                )
            }
            Some(Err(message)) => lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(theme::NEGATIVE),
            ))),
            None => {}
        }
        lines
    }

    fn render_config(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.config_lines())
            .block(theme::card("Export Configuration"))
            .render(area, buf);
    }

    fn render_recent(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .recent
            .iter()
            .map(|r| {
                Row::new([
                    Cell::from(r.name),
                    Cell::from(Span::styled(format!("{} · {}", r.date, r.size), theme::muted())),
                    Cell::from(r.kind),
                ])
            })
            .collect();
        Table::new(
            rows,
            [Constraint::Fill(3), Constraint::Fill(2), Constraint::Fill(1)],
        )
        .block(theme::card("Recent Exports"))
        .render(area, buf);
    }

    fn render_guidelines(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .guidelines
            .iter()
            .flat_map(|g| {
                [
                    Line::from(Span::styled(g.title, theme::emphasis())),
                    Line::from(Span::styled(g.body, theme::muted())),
                ]
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(theme::card("Export Guidelines"))
            .render(area, buf);
    }
}

impl Default for ExportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ExportPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(area, [Constraint::Length(9), Constraint::Fill(1)]);
        self.render_formats(sections[0], buf);

        let bottom = columns(sections[1], [Constraint::Percentage(50), Constraint::Percentage(50)]);
        self.render_config(bottom[0], buf);

        let side = rows(bottom[1], [Constraint::Length(7), Constraint::Fill(1)]);
        self.render_recent(side[0], buf);
        self.render_guidelines(side[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;
    use tempfile::tempdir;

    #[test]
    fn fresh_panel_has_default_form() {
        let panel = ExportPanel::new();
        assert_eq!(panel.form(), &ExportForm::new());
        assert!(panel.status().is_none());
    }

    #[test]
    fn export_without_sections_reports_error() {
        let mut panel = ExportPanel::new();
        for tab in [TabId::Overview, TabId::Voice, TabId::Interpretation] {
            panel.form_mut().toggle_section(tab);
        }
        let result = panel.export(None);
        assert!(matches!(result, Err(ExportError::NoSections)));
        assert!(matches!(panel.status(), Some(Err(_))));
    }

    #[test]
    fn export_writes_into_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("exports");
        let mut panel = ExportPanel::new();

        let receipt = panel.export(Some(&target)).unwrap();
        let written = receipt.written_to.unwrap();
        assert!(written.starts_with(&target));
        assert!(written.exists());
        assert_eq!(
            panel.status(),
            Some(&Ok(
                "Exporting CSV (Enriched Dataset)...\n\nSections: 3\nDate Range: all".to_string()
            ))
        );
    }

    #[test]
    fn renders_form_with_default_selection() {
        let text = render_to_string(&ExportPanel::new(), 140, 48);
        assert!(text.contains("● CSV (Enriched Dataset)"));
        assert!(text.contains("› [x] Overview"));
        assert!(text.contains("[ ] Storyline"));
        assert!(text.contains("Date Range: All Time"));
        assert!(text.contains("Recent Exports"));
    }
}
