//! Voice panel: who is talking and where.

use super::{HorizontalBar, columns, horizontal_bars, rows};
use crate::data::mock;
use crate::data::{GeographicData, InfluencerData, SourceVolume, VoiceData};
use crate::ui::dashboard::utils::{format_signed_percent, format_thousands};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table, Widget};

const SOURCE_COLORS: [Color; 4] = [
    theme::BRAND,
    theme::BRAND_LIGHT,
    Color::Rgb(59, 130, 246),
    Color::Rgb(16, 185, 129),
];

#[derive(Debug, Clone)]
pub struct VoicePanel {
    voice: &'static [VoiceData],
    geographic: &'static [GeographicData],
    influencers: &'static [InfluencerData],
    sources: &'static [SourceVolume],
}

impl VoicePanel {
    pub fn new() -> Self {
        Self {
            voice: mock::VOICE,
            geographic: mock::GEOGRAPHIC,
            influencers: mock::INFLUENCERS,
            sources: mock::SOURCE_VOLUME,
        }
    }

    /// The three countries with the largest volume, largest first.
    pub fn top_regions(&self) -> Vec<GeographicData> {
        let mut regions = self.geographic.to_vec();
        regions.sort_by(|a, b| b.volume.cmp(&a.volume));
        regions.truncate(3);
        regions
    }

    fn render_share_of_voice(&self, area: Rect, buf: &mut Buffer) {
        let entries: Vec<HorizontalBar> = self
            .voice
            .iter()
            .map(|v| HorizontalBar {
                label: v.platform,
                value: v.volume,
                text: format!("{:.1}%", v.percentage),
                color: theme::hex_color(v.color),
            })
            .collect();
        horizontal_bars(theme::card("Share of Voice"), &entries, None, area, buf);
    }

    fn render_regions(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .top_regions()
            .iter()
            .enumerate()
            .flat_map(|(i, region)| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}. ", i + 1), theme::muted()),
                        Span::styled(region.country, theme::emphasis()),
                    ]),
                    Line::from(vec![
                        Span::raw(format!("   {} posts  ", format_thousands(region.volume))),
                        Span::styled(
                            format_signed_percent(region.sentiment),
                            Style::default().fg(theme::sentiment_color(region.sentiment)),
                        ),
                    ]),
                ]
            })
            .collect();
        Paragraph::new(lines)
            .block(theme::card("Top Regions"))
            .render(area, buf);
    }

    fn render_influencers(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Name", "Platform", "Reach", "Engagement", "Sentiment"])
            .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .influencers
            .iter()
            .map(|inf| {
                Row::new([
                    Cell::from(inf.name),
                    Cell::from(inf.platform),
                    Cell::from(format_thousands(inf.reach)),
                    Cell::from(format!("{:.1}%", inf.engagement)),
                    Cell::from(Span::styled(
                        format_signed_percent(inf.sentiment),
                        Style::default().fg(theme::sentiment_color(inf.sentiment)),
                    )),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Fill(3),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .block(theme::card("Key Influencers"))
        .render(area, buf);
    }

    fn render_sources(&self, area: Rect, buf: &mut Buffer) {
        let groups: Vec<(String, Vec<Bar>)> = self
            .sources
            .iter()
            .map(|s| {
                let values = [
                    ("Social", s.social_media),
                    ("News", s.news_media),
                    ("Gov", s.government),
                    ("NGOs", s.ngos),
                ];
                let bars = values
                    .iter()
                    .zip(SOURCE_COLORS)
                    .map(|((label, value), color)| {
                        Bar::default()
                            .label(Line::from(*label))
                            .value(*value / 1000)
                            .text_value(format!("{}K", value / 1000))
                            .style(Style::default().fg(color))
                    })
                    .collect();
                (s.year.to_string(), bars)
            })
            .collect();

        let mut chart = BarChart::default()
            .block(theme::card("Volume by Source Type"))
            .bar_width(6)
            .bar_gap(1)
            .group_gap(3);
        for (year, bars) in &groups {
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(year.as_str()))
                    .bars(bars),
            );
        }
        chart.render(area, buf);
    }
}

impl Default for VoicePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &VoicePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(area, [Constraint::Percentage(45), Constraint::Percentage(55)]);
        let top = columns(sections[0], [Constraint::Percentage(65), Constraint::Percentage(35)]);
        self.render_share_of_voice(top[0], buf);
        self.render_regions(top[1], buf);

        let bottom = columns(sections[1], [Constraint::Percentage(55), Constraint::Percentage(45)]);
        self.render_influencers(bottom[0], buf);
        self.render_sources(bottom[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn top_regions_are_the_three_largest() {
        let regions: Vec<&str> = VoicePanel::new()
            .top_regions()
            .iter()
            .map(|r| r.country)
            .collect();
        assert_eq!(regions, ["United States", "United Kingdom", "Germany"]);
    }

    #[test]
    fn renders_influencer_table() {
        let text = render_to_string(&VoicePanel::new(), 140, 40);
        assert!(text.contains("Share of Voice"));
        assert!(text.contains("@PolicyWatchDog"));
        assert!(text.contains("892,000"));
        assert!(text.contains("United States"));
    }
}
