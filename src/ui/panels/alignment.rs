//! Alignment panel: how public conversation lines up with the national vision pillars.

use super::{HorizontalBar, chart, columns, horizontal_bars, indexed, line, rows, x_axis, y_axis};
use crate::data::mock;
use crate::data::{AlignmentData, GapAnalysis, PillarScore, PillarTrendPoint, ThemePillarRow};
use crate::ui::dashboard::utils::{format_signed_score, truncate};
use crate::ui::theme::{self, GapSeverity};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Cell, Gauge, Padding, Row, Table, Widget};

/// Number of alignment records shown as scorecards.
const SCORECARDS: usize = 6;

#[derive(Debug, Clone)]
pub struct AlignmentPanel {
    heatmap: &'static [ThemePillarRow],
    pillars: &'static [PillarScore],
    scorecards: &'static [AlignmentData],
    gaps: &'static [GapAnalysis],
    trends: &'static [PillarTrendPoint],
}

impl AlignmentPanel {
    pub fn new() -> Self {
        let alignment = mock::ALIGNMENT;
        Self {
            heatmap: mock::THEME_PILLAR_HEATMAP,
            pillars: mock::PILLAR_ALIGNMENT,
            scorecards: &alignment[..SCORECARDS.min(alignment.len())],
            gaps: mock::GAP_ANALYSIS,
            trends: mock::ALIGNMENT_TRENDS,
        }
    }

    #[cfg(test)]
    pub fn scorecards(&self) -> &[AlignmentData] {
        self.scorecards
    }

    fn render_heatmap(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new([
            "Theme",
            "Economic",
            "Social",
            "Environ.",
            "Governance",
            "Innovation",
        ])
        .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .heatmap
            .iter()
            .map(|row| {
                let mut cells = vec![Cell::from(row.theme)];
                cells.extend(row.pillars().into_iter().map(|(_, score)| {
                    Cell::from(format!("{:.2}", score))
                        .style(Style::default().fg(Color::Black).bg(theme::score_color(score)))
                }));
                Row::new(cells)
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Fill(3),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(theme::card("Theme-Pillar Alignment Heatmap"))
        .render(area, buf);
    }

    fn render_pillars(&self, area: Rect, buf: &mut Buffer) {
        let entries: Vec<HorizontalBar> = self
            .pillars
            .iter()
            .map(|p| HorizontalBar {
                label: p.pillar,
                value: (p.score * 100.0).round() as u64,
                text: format!("{:.2}", p.score),
                color: theme::score_color(p.score),
            })
            .collect();
        horizontal_bars(
            theme::card("Vision Pillar Alignment"),
            &entries,
            Some(100),
            area,
            buf,
        );
    }

    fn render_scorecards(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Alignment Scorecards");
        let inner = block.inner(area);
        block.render(area, buf);

        let grid = rows(inner, [Constraint::Ratio(1, 3); 3]);
        let slots: Vec<Rect> = grid
            .iter()
            .flat_map(|row| columns(*row, [Constraint::Ratio(1, 2); 2]).to_vec())
            .collect();
        for (record, slot) in self.scorecards.iter().zip(slots) {
            let color = theme::score_color(record.score);
            Gauge::default()
                .block(
                    Block::default()
                        .title(Span::styled(record.pillar, Style::default().fg(color)))
                        .padding(Padding::right(1)),
                )
                .gauge_style(Style::default().fg(color).bg(Color::Black))
                .ratio(record.score.clamp(0.0, 1.0))
                .label(format!("{} {:.2}", truncate(record.theme, 18), record.score))
                .render(slot, buf);
        }
    }

    fn render_gaps(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .gaps
            .iter()
            .map(|g| {
                let severity = GapSeverity::from_gap(g.gap);
                Row::new([
                    Cell::from(g.area),
                    Cell::from(format_signed_score(g.public_sentiment)),
                    Cell::from(format!("{:.2}", g.policy_priority)),
                    Cell::from(Span::styled(
                        format_signed_score(g.gap),
                        Style::default().fg(severity.color()),
                    )),
                    Cell::from(Span::styled(
                        format!("{} {}", severity.symbol(), g.status),
                        Style::default().fg(severity.color()),
                    )),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Length(7),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Fill(2),
            ],
        )
        .header(
            Row::new(["Area", "Public", "Priority", "Gap", "Status"])
                .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD)),
        )
        .block(theme::card("Gap Analysis"))
        .render(area, buf);
    }

    fn render_trends(&self, area: Rect, buf: &mut Buffer) {
        let series: [(&str, Vec<(f64, f64)>); 5] = [
            ("Economic", indexed(self.trends.iter().map(|p| p.economic))),
            ("Social", indexed(self.trends.iter().map(|p| p.social))),
            ("Environmental", indexed(self.trends.iter().map(|p| p.environmental))),
            ("Governance", indexed(self.trends.iter().map(|p| p.governance))),
            ("Innovation", indexed(self.trends.iter().map(|p| p.innovation))),
        ];
        let months: Vec<String> = self.trends.iter().map(|p| p.month.to_string()).collect();
        let datasets = series
            .iter()
            .zip(theme::CHART_PALETTE)
            .map(|((name, points), color)| line(name, color, points))
            .collect();
        chart(datasets)
            .block(theme::card("Alignment Trends"))
            .x_axis(x_axis(&months))
            .y_axis(y_axis([0.5, 1.0], ["0.5".into(), "0.75".into(), "1.0".into()]))
            .render(area, buf);
    }
}

impl Default for AlignmentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &AlignmentPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(
            area,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ],
        );
        let top = columns(sections[0], [Constraint::Percentage(60), Constraint::Percentage(40)]);
        self.render_heatmap(top[0], buf);
        self.render_pillars(top[1], buf);

        let middle = columns(sections[1], [Constraint::Percentage(50), Constraint::Percentage(50)]);
        self.render_scorecards(middle[0], buf);
        self.render_gaps(middle[1], buf);

        self.render_trends(sections[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn shows_the_first_six_alignment_records() {
        let panel = AlignmentPanel::new();
        let cards: Vec<(&str, &str)> = panel
            .scorecards()
            .iter()
            .map(|a| (a.pillar, a.theme))
            .collect();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0], ("Economic Growth", "Economic Recovery"));
        assert_eq!(cards[5], ("Governance", "Digital Infrastructure"));
    }

    #[test]
    fn renders_heatmap_and_gap_status() {
        let text = render_to_string(&AlignmentPanel::new(), 140, 48);
        assert!(text.contains("Theme-Pillar Alignment Heatmap"));
        assert!(text.contains("Gap Analysis"));
        assert!(text.contains("Misaligned"));
    }
}
