//! Interpretation panel: how the conversation feels and how it is framed.

use super::{chart, columns, indexed, line, rows, x_axis, y_axis};
use crate::data::mock;
use crate::data::{EmotionData, Frame, Keyword, Misinterpretation, SentimentData, TimeSeriesData};
use crate::ui::dashboard::utils::{format_signed_percent, format_thousands, month_tick};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Bar, BarChart, BarGroup, Cell, Gauge, Row, Table, Widget};

#[derive(Debug, Clone)]
pub struct InterpretationPanel {
    sentiment: SentimentData,
    emotions: EmotionData,
    keywords: &'static [Keyword],
    frames: &'static [Frame],
    misinterpretations: &'static [Misinterpretation],
    series: &'static [TimeSeriesData],
}

impl InterpretationPanel {
    pub fn new() -> Self {
        Self {
            sentiment: mock::SENTIMENT,
            emotions: mock::EMOTIONS,
            keywords: mock::KEYWORDS,
            frames: mock::FRAMES,
            misinterpretations: mock::MISINTERPRETATIONS,
            series: mock::TIME_SERIES,
        }
    }

    fn render_sentiment_split(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Sentiment Distribution");
        let inner = block.inner(area);
        block.render(area, buf);

        let split = [
            ("Positive", self.sentiment.positive, theme::POSITIVE),
            ("Negative", self.sentiment.negative, theme::NEGATIVE),
            ("Neutral", self.sentiment.neutral, theme::NEUTRAL),
        ];
        let slots = rows(inner, [Constraint::Length(1); 3]);
        for ((label, percent, color), slot) in split.into_iter().zip(slots.iter()) {
            Gauge::default()
                .gauge_style(Style::default().fg(color).bg(Color::Black))
                .ratio((percent / 100.0).clamp(0.0, 1.0))
                .label(format!("{} {:.1}%", label, percent))
                .render(*slot, buf);
        }
    }

    fn render_emotions(&self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .emotions
            .entries()
            .into_iter()
            .zip(theme::CHART_PALETTE)
            .map(|((name, percent), color)| {
                Bar::default()
                    .label(name.into())
                    .value((percent * 10.0).round() as u64)
                    .text_value(format!("{:.1}", percent))
                    .style(Style::default().fg(color))
            })
            .collect();
        BarChart::default()
            .block(theme::card("Emotion Analysis"))
            .bar_width(8)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }

    fn render_keywords(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .keywords
            .iter()
            .map(|k| {
                Row::new([
                    Cell::from(k.text),
                    Cell::from(k.value.to_string()),
                    Cell::from(Span::styled(
                        format_signed_percent(k.sentiment),
                        Style::default().fg(theme::sentiment_color(k.sentiment)),
                    )),
                ])
            })
            .collect();
        Table::new(
            rows,
            [Constraint::Fill(2), Constraint::Length(8), Constraint::Length(8)],
        )
        .header(
            Row::new(["Keyword", "Mentions", "Tone"])
                .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD)),
        )
        .block(theme::card("Top Keywords"))
        .render(area, buf);
    }

    fn render_frames(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Frame Distribution");
        let inner = block.inner(area);
        block.render(area, buf);

        let slots = rows(inner, [Constraint::Length(2); 4]);
        for (frame, slot) in self.frames.iter().zip(slots.iter()) {
            Gauge::default()
                .gauge_style(Style::default().fg(theme::BRAND_LIGHT).bg(Color::Black))
                .ratio((frame.percentage / 100.0).clamp(0.0, 1.0))
                .label(format!(
                    "{} {:.1}% ({})",
                    frame.frame,
                    frame.percentage,
                    format_signed_percent(frame.sentiment)
                ))
                .render(Rect { height: slot.height.min(1), ..*slot }, buf);
        }
    }

    fn render_misinterpretations(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .misinterpretations
            .iter()
            .map(|m| {
                Row::new([
                    Cell::from(m.topic),
                    Cell::from(m.misinterpretation),
                    Cell::from(format_thousands(m.frequency)),
                    Cell::from(Span::styled(
                        m.impact.to_string(),
                        Style::default().fg(theme::impact_color(m.impact)),
                    )),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(4),
                Constraint::Length(9),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(["Topic", "Misinterpretation", "Frequency", "Impact"])
                .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD)),
        )
        .block(theme::card("Common Misinterpretations"))
        .render(area, buf);
    }

    fn render_evolution(&self, area: Rect, buf: &mut Buffer) {
        let positive = indexed(self.series.iter().map(|p| p.positive));
        let negative = indexed(self.series.iter().map(|p| p.negative));
        let neutral = indexed(self.series.iter().map(|p| p.neutral));
        let ticks: Vec<String> = self.series.iter().map(|p| month_tick(p.date)).collect();
        chart(vec![
            line("Positive", theme::POSITIVE, &positive),
            line("Negative", theme::NEGATIVE, &negative),
            line("Neutral", theme::NEUTRAL, &neutral),
        ])
        .block(theme::card("Sentiment Evolution"))
        .x_axis(x_axis(&ticks))
        .y_axis(y_axis([0.0, 60.0], ["0%".into(), "30%".into(), "60%".into()]))
        .render(area, buf);
    }
}

impl Default for InterpretationPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &InterpretationPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(
            area,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(35),
            ],
        );
        let top = columns(sections[0], [Constraint::Percentage(40), Constraint::Percentage(60)]);
        self.render_sentiment_split(top[0], buf);
        self.render_emotions(top[1], buf);

        let middle = columns(sections[1], [Constraint::Percentage(40), Constraint::Percentage(60)]);
        self.render_keywords(middle[0], buf);
        self.render_frames(middle[1], buf);

        let bottom = columns(sections[2], [Constraint::Percentage(50), Constraint::Percentage(50)]);
        self.render_misinterpretations(bottom[0], buf);
        self.render_evolution(bottom[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn renders_sentiment_split_and_keywords() {
        let text = render_to_string(&InterpretationPanel::new(), 140, 48);
        assert!(text.contains("Positive 45.2%"));
        assert!(text.contains("healthcare"));
        assert!(text.contains("+23.0%"));
        assert!(text.contains("Common Misinterpretations"));
    }
}
