//! Storyline panel: narrative clusters and how they travel across platforms.

use super::{chart, columns, indexed, line, rows, scatter, x_axis, y_axis};
use crate::data::mock;
use crate::data::{EchoChamber, LifecyclePoint, NarrativeCluster, PlatformDivergence};
use crate::ui::dashboard::utils::{format_signed_percent, format_signed_score, format_thousands};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Cell, Gauge, Paragraph, Row, Table, Widget, Wrap};

#[derive(Debug, Clone)]
pub struct StorylinePanel {
    clusters: &'static [NarrativeCluster],
    divergence: &'static [PlatformDivergence],
    echo_chambers: &'static [EchoChamber],
    lifecycle: &'static [LifecyclePoint],
    quote: &'static str,
}

impl StorylinePanel {
    pub fn new() -> Self {
        Self {
            clusters: mock::NARRATIVE_CLUSTERS,
            divergence: mock::PLATFORM_DIVERGENCE,
            echo_chambers: mock::ECHO_CHAMBERS,
            lifecycle: mock::NARRATIVE_LIFECYCLE,
            quote: mock::STORYLINE_QUOTE,
        }
    }

    fn render_clusters(&self, area: Rect, buf: &mut Buffer) {
        let points: Vec<[(f64, f64); 1]> = self.clusters.iter().map(|c| [(c.x, c.y)]).collect();
        let datasets = self
            .clusters
            .iter()
            .zip(points.iter())
            .enumerate()
            .map(|(i, (c, pts))| {
                scatter(
                    c.label,
                    theme::CHART_PALETTE[i % theme::CHART_PALETTE.len()],
                    pts,
                )
            })
            .collect();
        let unit_axis = |title: &'static str| {
            Axis::default()
                .title(title)
                .style(theme::muted())
                .bounds([0.0, 1.0])
                .labels(["0", "0.5", "1"])
        };
        chart(datasets)
            .block(theme::card("Narrative Clusters"))
            .x_axis(unit_axis("Spread"))
            .y_axis(unit_axis("Depth"))
            .render(area, buf);
    }

    fn render_echo_chambers(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Echo Chamber Index");
        let inner = block.inner(area);
        block.render(area, buf);

        let slots = rows(inner, [Constraint::Length(2); 5]);
        for (chamber, slot) in self.echo_chambers.iter().zip(slots.iter()) {
            let color = theme::risk_color(chamber.risk);
            Gauge::default()
                .gauge_style(Style::default().fg(color).bg(Color::Black))
                .ratio(chamber.score.clamp(0.0, 1.0))
                .label(format!(
                    "{} {:.2} · {} risk",
                    chamber.platform, chamber.score, chamber.risk
                ))
                .render(Rect { height: slot.height.min(1), ..*slot }, buf);
        }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for cluster in self.clusters {
            lines.push(Line::from(vec![
                Span::styled(cluster.label, theme::emphasis()),
                Span::styled(
                    format!("  {} posts  ", format_thousands(cluster.volume)),
                    theme::muted(),
                ),
                Span::styled(
                    format_signed_percent(cluster.sentiment),
                    Style::default().fg(theme::sentiment_color(cluster.sentiment)),
                ),
            ]));
            lines.push(Line::from(Span::raw(cluster.description)));
            lines.push(Line::from(Span::styled(
                self.quote,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(theme::card("Storylines"))
            .render(area, buf);
    }

    fn render_divergence(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Narrative", "Twitter/X", "Facebook", "Instagram", "LinkedIn"])
            .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .divergence
            .iter()
            .map(|d| {
                let mut cells = vec![Cell::from(d.narrative)];
                cells.extend(d.platforms().into_iter().map(|(_, score)| {
                    Cell::from(Span::styled(
                        format_signed_score(score),
                        Style::default().fg(theme::sentiment_color(score)),
                    ))
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
            ],
        )
        .header(header)
        .block(theme::card("Platform Divergence"))
        .render(area, buf);
    }

    fn render_lifecycle(&self, area: Rect, buf: &mut Buffer) {
        let thousands = |pick: fn(&LifecyclePoint) -> u64| {
            indexed(self.lifecycle.iter().map(|p| pick(p) as f64 / 1000.0))
        };
        let economic = thousands(|p| p.economic_recovery);
        let healthcare = thousands(|p| p.healthcare_reform);
        let climate = thousands(|p| p.climate_action);
        let months: Vec<String> = self.lifecycle.iter().map(|p| p.month.to_string()).collect();
        chart(vec![
            line("Economic Recovery", theme::CHART_PALETTE[0], &economic),
            line("Healthcare Reform", theme::CHART_PALETTE[2], &healthcare),
            line("Climate Action", theme::CHART_PALETTE[3], &climate),
        ])
        .block(theme::card("Narrative Lifecycle"))
        .x_axis(x_axis(&months))
        .y_axis(y_axis([20.0, 70.0], ["20K".into(), "45K".into(), "70K".into()]))
        .render(area, buf);
    }
}

impl Default for StorylinePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StorylinePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(
            area,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
            ],
        );
        let top = columns(sections[0], [Constraint::Percentage(55), Constraint::Percentage(45)]);
        self.render_clusters(top[0], buf);
        self.render_echo_chambers(top[1], buf);

        self.render_cards(sections[1], buf);

        let bottom = columns(sections[2], [Constraint::Percentage(50), Constraint::Percentage(50)]);
        self.render_divergence(bottom[0], buf);
        self.render_lifecycle(bottom[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn renders_echo_chambers_with_risk() {
        let text = render_to_string(&StorylinePanel::new(), 140, 48);
        assert!(text.contains("Narrative Clusters"));
        assert!(text.contains("Facebook 0.82 · High risk"));
        assert!(text.contains("Platform Divergence"));
    }
}
