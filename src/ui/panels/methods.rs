//! Methods & Models panel: the processing pipeline and the technique behind each dimension.

use super::{columns, rows};
use crate::data::mock;
use crate::data::{Method, PipelineStep, SpecGroup};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table, Widget, Wrap};

#[derive(Debug, Clone)]
pub struct MethodsPanel {
    pipeline: &'static [PipelineStep],
    methods: &'static [Method],
    specs: &'static [SpecGroup],
}

impl MethodsPanel {
    pub fn new() -> Self {
        Self {
            pipeline: mock::PIPELINE_STEPS,
            methods: mock::METHODS,
            specs: mock::TECHNICAL_SPECS,
        }
    }

    fn render_pipeline(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Processing Pipeline");
        let inner = block.inner(area);
        block.render(area, buf);

        let n = self.pipeline.len().max(1) as u32;
        let slots = Layout::horizontal(
            self.pipeline.iter().map(|_| Constraint::Ratio(1, n)),
        )
        .split(inner);
        for (step, slot) in self.pipeline.iter().zip(slots.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", step.step, step.title),
                    Style::default()
                        .fg(theme::BRAND_LIGHT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(step.description, theme::muted())),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(*slot, buf);
        }
    }

    fn method_lines(method: &Method) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(method.description, theme::muted()))];
        lines.push(Line::from(Span::styled("Techniques", theme::emphasis())));
        for technique in method.techniques {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme::BRAND_LIGHT)),
                Span::raw(technique.name),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", technique.description),
                theme::muted(),
            )));
        }
        lines.push(Line::from(Span::styled("Metrics", theme::emphasis())));
        lines.push(Line::from(method.metrics.join(", ")));
        lines.push(Line::from(Span::styled("Visualization", theme::emphasis())));
        lines.push(Line::from(method.visualization));
        lines
    }

    fn render_methods(&self, area: Rect, buf: &mut Buffer) {
        let n = self.methods.len().max(1) as u32;
        let slots = Layout::horizontal(
            self.methods.iter().map(|_| Constraint::Ratio(1, n)),
        )
        .split(area);
        for (method, slot) in self.methods.iter().zip(slots.iter()) {
            Paragraph::new(Self::method_lines(method))
                .wrap(Wrap { trim: true })
                .block(theme::card(method.title))
                .render(*slot, buf);
        }
    }

    fn render_specs(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Technical Specifications");
        let inner = block.inner(area);
        block.render(area, buf);

        let slots = columns(inner, [Constraint::Ratio(1, 3); 3]);
        for (group, slot) in self.specs.iter().zip(slots.iter()) {
            let rows: Vec<Row> = group
                .rows
                .iter()
                .map(|(label, value)| {
                    Row::new([
                        Span::styled(*label, theme::muted()),
                        Span::styled(*value, theme::emphasis()),
                    ])
                })
                .collect();
            Table::new(rows, [Constraint::Fill(1), Constraint::Fill(1)])
                .header(Row::new([group.title]).style(Style::default().fg(theme::BRAND_LIGHT)))
                .render(*slot, buf);
        }
    }
}

impl Default for MethodsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &MethodsPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(
            area,
            [
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Length(8),
            ],
        );
        self.render_pipeline(sections[0], buf);
        self.render_methods(sections[1], buf);
        self.render_specs(sections[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn method_cards_list_techniques_and_metrics() {
        let lines = MethodsPanel::method_lines(&mock::METHODS[0]);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Named Entity Recognition (NER)")));
        assert!(
            text.iter()
                .any(|l| l == "Share of voice, Reach, Engagement rate, Credibility score")
        );
    }

    #[test]
    fn renders_pipeline_and_specs() {
        let text = render_to_string(&MethodsPanel::new(), 160, 48);
        assert!(text.contains("Processing Pipeline"));
        assert!(text.contains("Data Ingestion"));
        assert!(text.contains("BERTopic"));
        assert!(text.contains("Voice Analysis"));
    }
}
