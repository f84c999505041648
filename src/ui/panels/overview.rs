//! Overview panel: headline KPIs, relevance/resonance quadrant, sentiment and volume trend,
//! key insights.

use super::{chart, columns, indexed, line, rows, scatter, x_axis, y_axis};
use crate::data::mock;
use crate::data::{KpiMetrics, QuadrantPoint, TimeSeriesData};
use crate::ui::dashboard::utils::{format_signed_percent, format_thousands, month_tick};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

#[derive(Debug, Clone)]
pub struct OverviewPanel {
    kpis: KpiMetrics,
    quadrant: &'static [QuadrantPoint],
    series: &'static [TimeSeriesData],
    insights: &'static [&'static str],
}

impl OverviewPanel {
    pub fn new() -> Self {
        Self {
            kpis: mock::KPI_METRICS,
            quadrant: mock::OVERVIEW_QUADRANT,
            series: mock::TIME_SERIES,
            insights: mock::KEY_INSIGHTS,
        }
    }

    /// Title, value and caption of each KPI card.
    pub fn kpi_cards(&self) -> [(&'static str, String, String); 4] {
        let kpis = &self.kpis;
        [
            (
                "Total Posts",
                format_thousands(kpis.total_posts),
                kpis.time_range.to_string(),
            ),
            (
                "Platforms",
                kpis.platforms.to_string(),
                "Monitored sources".to_string(),
            ),
            (
                "Avg Sentiment",
                format_signed_percent(kpis.avg_sentiment),
                "Overall polarity".to_string(),
            ),
            (
                "Top Emotion",
                kpis.top_emotion.to_string(),
                "Most prevalent".to_string(),
            ),
        ]
    }

    fn render_kpis(&self, area: Rect, buf: &mut Buffer) {
        let cells = columns(area, [Constraint::Ratio(1, 4); 4]);
        for ((title, value, caption), cell) in self.kpi_cards().into_iter().zip(cells.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(theme::BRAND_LIGHT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(caption, theme::muted())),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(theme::card(title))
                .render(*cell, buf);
        }
    }

    fn render_quadrant(&self, area: Rect, buf: &mut Buffer) {
        let points: Vec<[(f64, f64); 1]> = self
            .quadrant
            .iter()
            .map(|p| [(p.relevance, p.resonance)])
            .collect();
        let datasets = self
            .quadrant
            .iter()
            .zip(points.iter())
            .enumerate()
            .map(|(i, (p, pts))| {
                scatter(
                    p.theme,
                    theme::CHART_PALETTE[i % theme::CHART_PALETTE.len()],
                    pts,
                )
            })
            .collect();
        chart(datasets)
            .block(theme::card("Relevance vs Resonance"))
            .x_axis(
                ratatui::widgets::Axis::default()
                    .title("Relevance")
                    .style(theme::muted())
                    .bounds([0.6, 1.0])
                    .labels(["0.6", "0.8", "1.0"]),
            )
            .y_axis(
                ratatui::widgets::Axis::default()
                    .title("Resonance")
                    .style(theme::muted())
                    .bounds([0.6, 1.0])
                    .labels(["0.6", "0.8", "1.0"]),
            )
            .render(area, buf);
    }

    fn render_trend(&self, area: Rect, buf: &mut Buffer) {
        let sentiment = indexed(self.series.iter().map(|p| p.sentiment * 100.0));
        let volume = indexed(self.series.iter().map(|p| p.volume as f64 / 1000.0));
        let ticks: Vec<String> = self.series.iter().map(|p| month_tick(p.date)).collect();
        chart(vec![
            line("Volume (K)", theme::BRAND, &volume),
            line("Sentiment (%)", theme::POSITIVE, &sentiment),
        ])
        .block(theme::card("Sentiment & Volume Trends"))
        .x_axis(x_axis(&ticks))
        .y_axis(y_axis(
            [0.0, 150.0],
            ["0".into(), "75".into(), "150".into()],
        ))
        .render(area, buf);
    }

    fn render_insights(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .insights
            .iter()
            .map(|insight| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(theme::BRAND_LIGHT)),
                    Span::raw(*insight),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(theme::card("Key Insights"))
            .render(area, buf);
    }
}

impl Default for OverviewPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &OverviewPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(
            area,
            [
                Constraint::Length(4),
                Constraint::Fill(1),
                Constraint::Length(5),
            ],
        );
        self.render_kpis(sections[0], buf);

        let charts = columns(
            sections[1],
            [Constraint::Percentage(45), Constraint::Percentage(55)],
        );
        self.render_quadrant(charts[0], buf);
        self.render_trend(charts[1], buf);
        self.render_insights(sections[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn kpi_cards_format_headline_figures() {
        let panel = OverviewPanel::new();
        let cards = panel.kpi_cards();
        assert_eq!(cards[0].1, "1,247,863");
        assert_eq!(cards[1].1, "8");
        assert_eq!(cards[2].1, "+34.0%");
        assert_eq!(cards[3].1, "Trust");
    }

    #[test]
    fn renders_cards_and_insights() {
        let text = render_to_string(&OverviewPanel::new(), 140, 40);
        assert!(text.contains("Total Posts"));
        assert!(text.contains("1,247,863"));
        assert!(text.contains("Relevance vs Resonance"));
        assert!(text.contains("Key Insights"));
    }
}
