//! Meta panel: cross-cutting comparisons across themes, platforms and countries.

use super::{
    HorizontalBar, chart, columns, horizontal_bars, indexed, line, rows, scatter, x_axis, y_axis,
};
use crate::data::mock;
use crate::data::{ComparativeTrend, CountryBenchmark, Momentum, PlatformBenchmark, QuadrantPoint};
use crate::ui::dashboard::utils::{format_signed_score, format_thousands};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Cell, Paragraph, Row, Table, Widget};

/// Relevance and resonance above this value count as "high" in the quadrant legend.
pub const QUADRANT_SPLIT: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct MetaPanel {
    matrix: &'static [QuadrantPoint],
    legend: &'static [(&'static str, &'static str)],
    momentum: &'static [Momentum],
    platforms: &'static [PlatformBenchmark],
    countries: &'static [CountryBenchmark],
    trends: &'static [ComparativeTrend],
}

impl MetaPanel {
    pub fn new() -> Self {
        Self {
            matrix: mock::RELEVANCE_RESONANCE,
            legend: mock::QUADRANT_LEGEND,
            momentum: mock::MOMENTUM,
            platforms: mock::PLATFORM_COMPARISON,
            countries: mock::COUNTRY_BENCHMARK,
            trends: mock::COMPARATIVE_TRENDS,
        }
    }

    /// Legend entry for the quadrant a theme falls into.
    pub fn quadrant_of(&self, point: &QuadrantPoint) -> &'static str {
        let index = match (point.relevance >= QUADRANT_SPLIT, point.resonance >= QUADRANT_SPLIT) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        };
        self.legend.get(index).map(|(name, _)| *name).unwrap_or_default()
    }

    fn render_matrix(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Relevance-Resonance Matrix");
        let inner = block.inner(area);
        block.render(area, buf);
        let legend_height = self.legend.len() as u16;
        let parts = rows(inner, [Constraint::Fill(1), Constraint::Length(legend_height)]);

        let points: Vec<[(f64, f64); 1]> = self
            .matrix
            .iter()
            .map(|p| [(p.relevance, p.resonance)])
            .collect();
        let datasets = self
            .matrix
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
        let axis = |title: &'static str| {
            Axis::default()
                .title(title)
                .style(theme::muted())
                .bounds([0.4, 1.0])
                .labels(["0.4", "0.7", "1.0"])
        };
        chart(datasets)
            .x_axis(axis("Relevance"))
            .y_axis(axis("Resonance"))
            .render(parts[0], buf);

        let legend: Vec<Line> = self
            .legend
            .iter()
            .map(|(name, rule)| {
                let count = self
                    .matrix
                    .iter()
                    .filter(|p| self.quadrant_of(p) == *name)
                    .count();
                Line::from(vec![
                    Span::styled(format!("{} ({}): ", name, count), theme::emphasis()),
                    Span::styled(*rule, theme::muted()),
                ])
            })
            .collect();
        Paragraph::new(legend).render(parts[1], buf);
    }

    fn render_momentum(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .momentum
            .iter()
            .map(|m| {
                let style = Style::default().fg(theme::momentum_color(m.momentum));
                Row::new([
                    Cell::from(m.theme),
                    Cell::from(Span::styled(format_signed_score(m.momentum), style)),
                    Cell::from(Span::styled(m.change, style)),
                    Cell::from(Span::styled(m.direction.to_string(), style)),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(["Theme", "Momentum", "Change", "Trend"])
                .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD)),
        )
        .block(theme::card("Momentum Index"))
        .render(area, buf);
    }

    fn render_platforms(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .platforms
            .iter()
            .map(|p| {
                Row::new([
                    Cell::from(p.platform),
                    Cell::from(format_thousands(p.volume)),
                    Cell::from(Span::styled(
                        format!("{:.2}", p.sentiment),
                        Style::default().fg(theme::sentiment_color(p.sentiment)),
                    )),
                    Cell::from(format!("{:.1}%", p.engagement)),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Fill(1),
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(["Platform", "Volume", "Sentiment", "Engagement"])
                .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD)),
        )
        .block(theme::card("Platform Benchmark"))
        .render(area, buf);
    }

    fn render_countries(&self, area: Rect, buf: &mut Buffer) {
        let entries: Vec<HorizontalBar> = self
            .countries
            .iter()
            .map(|c| HorizontalBar {
                label: c.country,
                value: (c.sentiment * 100.0).round() as u64,
                text: format!("{:.2} · {}", c.sentiment, format_thousands(c.volume)),
                color: theme::BRAND_LIGHT,
            })
            .collect();
        horizontal_bars(theme::card("Country Benchmark"), &entries, Some(50), area, buf);
    }

    fn render_trends(&self, area: Rect, buf: &mut Buffer) {
        let series: [(&str, Vec<(f64, f64)>); 4] = [
            ("Domestic", indexed(self.trends.iter().map(|t| t.domestic))),
            ("USA", indexed(self.trends.iter().map(|t| t.usa))),
            ("UK", indexed(self.trends.iter().map(|t| t.uk))),
            ("Canada", indexed(self.trends.iter().map(|t| t.canada))),
        ];
        let months: Vec<String> = self.trends.iter().map(|t| t.month.to_string()).collect();
        let datasets = series
            .iter()
            .zip(theme::CHART_PALETTE)
            .map(|((name, points), color)| line(name, color, points))
            .collect();
        chart(datasets)
            .block(theme::card("Comparative Trends"))
            .x_axis(x_axis(&months))
            .y_axis(y_axis([0.1, 0.5], ["0.1".into(), "0.3".into(), "0.5".into()]))
            .render(area, buf);
    }
}

impl Default for MetaPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &MetaPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(area, [Constraint::Percentage(50), Constraint::Percentage(50)]);
        let top = columns(sections[0], [Constraint::Percentage(55), Constraint::Percentage(45)]);
        self.render_matrix(top[0], buf);
        self.render_momentum(top[1], buf);

        let bottom = columns(
            sections[1],
            [
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ],
        );
        self.render_platforms(bottom[0], buf);
        self.render_countries(bottom[1], buf);
        self.render_trends(bottom[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn themes_fall_into_quadrants() {
        let panel = MetaPanel::new();
        let quadrant = |theme: &str| {
            let point = mock::RELEVANCE_RESONANCE
                .iter()
                .find(|p| p.theme == theme)
                .unwrap();
            panel.quadrant_of(point)
        };
        assert_eq!(quadrant("Climate Action"), "High Impact Zone");
        assert_eq!(quadrant("Education Policy"), "Policy Priority");
        assert_eq!(quadrant("Housing Reform"), "Monitor Zone");
    }

    #[test]
    fn renders_momentum_and_benchmarks() {
        let text = render_to_string(&MetaPanel::new(), 140, 48);
        assert!(text.contains("Momentum Index"));
        assert!(text.contains("rising"));
        assert!(text.contains("Platform Benchmark"));
    }
}
