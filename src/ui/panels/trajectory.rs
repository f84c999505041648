//! Trajectory panel: how sentiment and volume move over time, and where they are heading.

use super::{chart, columns, indexed, line, rows, x_axis, y_axis};
use crate::data::mock;
use crate::data::{
    EmotionTimelinePoint, EventAnnotation, ForecastPoint, TimeSeriesData, YearlyVolume,
};
use crate::ui::dashboard::utils::{format_kilo, format_signed_percent, month_label, month_tick};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table, Widget};

#[derive(Debug, Clone)]
pub struct TrajectoryPanel {
    series: &'static [TimeSeriesData],
    events: &'static [EventAnnotation],
    emotions: &'static [EmotionTimelinePoint],
    yearly: &'static [YearlyVolume],
    growth: &'static [(&'static str, &'static str)],
    forecast: &'static [ForecastPoint],
    forecast_summary: &'static [(&'static str, &'static str)],
}

/// Forecast split into plottable series, indexed by month.
#[derive(Debug, Default, PartialEq)]
pub struct ForecastSeries {
    pub actual: Vec<(f64, f64)>,
    pub forecast: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
    pub lower: Vec<(f64, f64)>,
}

impl TrajectoryPanel {
    pub fn new() -> Self {
        Self {
            series: mock::TIME_SERIES,
            events: mock::EVENT_ANNOTATIONS,
            emotions: mock::EMOTION_TIMELINE,
            yearly: mock::YEARLY_VOLUME,
            growth: mock::GROWTH_METRICS,
            forecast: mock::FORECAST,
            forecast_summary: mock::FORECAST_SUMMARY,
        }
    }

    /// Splits forecast months into series. The forecast line starts from the last actual
    /// value so the two connect.
    pub fn forecast_series(&self) -> ForecastSeries {
        let mut out = ForecastSeries::default();
        for (i, point) in self.forecast.iter().enumerate() {
            let x = i as f64;
            if let Some(actual) = point.actual {
                out.actual.push((x, actual as f64));
                out.forecast.push((x, actual as f64));
                out.upper.push((x, actual as f64));
                out.lower.push((x, actual as f64));
            }
            if let Some(forecast) = point.forecast {
                out.forecast.push((x, forecast as f64));
            }
            if let Some(upper) = point.upper {
                out.upper.push((x, upper as f64));
            }
            if let Some(lower) = point.lower {
                out.lower.push((x, lower as f64));
            }
        }
        out
    }

    fn render_timeline(&self, area: Rect, buf: &mut Buffer) {
        let sentiment = indexed(self.series.iter().map(|p| p.sentiment));
        let ticks: Vec<String> = self.series.iter().map(|p| month_tick(p.date)).collect();
        let markers: Vec<(f64, f64)> = self
            .events
            .iter()
            .filter_map(|e| {
                self.series
                    .iter()
                    .position(|p| p.date == e.date)
                    .map(|i| (i as f64, e.sentiment))
            })
            .collect();
        chart(vec![
            line("Sentiment", theme::BRAND_LIGHT, &sentiment),
            super::scatter("Key event", Color::Yellow, &markers),
        ])
        .block(theme::card("Sentiment Timeline"))
        .x_axis(x_axis(&ticks))
        .y_axis(y_axis([0.0, 0.5], ["0.0".into(), "0.25".into(), "0.5".into()]))
        .render(area, buf);
    }

    fn render_events(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .events
            .iter()
            .map(|e| {
                Row::new([
                    Cell::from(month_label(e.date)),
                    Cell::from(e.event),
                    Cell::from(Span::styled(
                        e.impact.to_string(),
                        Style::default().fg(theme::impact_color(e.impact)),
                    )),
                    Cell::from(format_signed_percent(e.sentiment)),
                ])
            })
            .collect();
        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Fill(1),
                Constraint::Length(6),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(["Month", "Event", "Impact", "Tone"])
                .style(Style::default().fg(theme::BRAND_LIGHT).add_modifier(Modifier::BOLD)),
        )
        .block(theme::card("Key Events"))
        .render(area, buf);
    }

    fn render_emotions(&self, area: Rect, buf: &mut Buffer) {
        let series: [(&str, Vec<(f64, f64)>); 6] = [
            ("Joy", indexed(self.emotions.iter().map(|p| p.joy as f64))),
            ("Anger", indexed(self.emotions.iter().map(|p| p.anger as f64))),
            ("Fear", indexed(self.emotions.iter().map(|p| p.fear as f64))),
            ("Trust", indexed(self.emotions.iter().map(|p| p.trust as f64))),
            ("Sadness", indexed(self.emotions.iter().map(|p| p.sadness as f64))),
            ("Surprise", indexed(self.emotions.iter().map(|p| p.surprise as f64))),
        ];
        let ticks: Vec<String> = self.emotions.iter().map(|p| month_tick(p.date)).collect();
        let datasets = series
            .iter()
            .zip(theme::CHART_PALETTE)
            .map(|((name, points), color)| line(name, color, points))
            .collect();
        chart(datasets)
            .block(theme::card("Emotion Evolution"))
            .x_axis(x_axis(&ticks))
            .y_axis(y_axis([0.0, 40.0], ["0".into(), "20".into(), "40".into()]))
            .render(area, buf);
    }

    fn render_yearly(&self, area: Rect, buf: &mut Buffer) {
        let block = theme::card("Yearly Volume");
        let inner = block.inner(area);
        block.render(area, buf);
        let parts = rows(inner, [Constraint::Fill(1), Constraint::Length(1)]);

        let bars: Vec<Bar> = self
            .yearly
            .iter()
            .map(|y| {
                Bar::default()
                    .label(y.year.into())
                    .value(y.volume / 1000)
                    .text_value(format_kilo(y.volume as f64))
                    .style(Style::default().fg(theme::BRAND))
            })
            .collect();
        BarChart::default()
            .bar_width(6)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars))
            .render(parts[0], buf);

        let growth: Vec<Span> = self
            .growth
            .iter()
            .flat_map(|(value, caption)| {
                let value_style = Style::default()
                    .fg(theme::POSITIVE)
                    .add_modifier(Modifier::BOLD);
                [
                    Span::styled(*value, value_style),
                    Span::styled(format!(" {}   ", caption), theme::muted()),
                ]
            })
            .collect();
        Paragraph::new(Line::from(growth)).render(parts[1], buf);
    }

    fn render_forecast(&self, area: Rect, buf: &mut Buffer) {
        let series = self.forecast_series();
        let ticks: Vec<String> = self.forecast.iter().map(|p| month_tick(p.date)).collect();
        chart(vec![
            line("Actual", theme::BRAND, &series.actual),
            line("Forecast", theme::BRAND_LIGHT, &series.forecast),
            line("Upper", Color::DarkGray, &series.upper),
            line("Lower", Color::DarkGray, &series.lower),
        ])
        .block(theme::card("6-Month Forecast"))
        .x_axis(x_axis(&ticks))
        .y_axis(y_axis(
            [120_000.0, 190_000.0],
            ["120K".into(), "155K".into(), "190K".into()],
        ))
        .render(area, buf);
    }

    fn render_forecast_summary(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .forecast_summary
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), theme::muted()),
                    Span::styled(*value, theme::emphasis()),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .block(theme::card("Forecast Summary"))
            .render(area, buf);
    }
}

impl Default for TrajectoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &TrajectoryPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = rows(
            area,
            [
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ],
        );
        let top = columns(sections[0], [Constraint::Percentage(60), Constraint::Percentage(40)]);
        self.render_timeline(top[0], buf);
        self.render_events(top[1], buf);

        let middle = columns(sections[1], [Constraint::Percentage(60), Constraint::Percentage(40)]);
        self.render_emotions(middle[0], buf);
        self.render_yearly(middle[1], buf);

        let bottom = columns(sections[2], [Constraint::Percentage(70), Constraint::Percentage(30)]);
        self.render_forecast(bottom[0], buf);
        self.render_forecast_summary(bottom[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels::test_support::render_to_string;

    #[test]
    fn forecast_connects_to_last_actual() {
        let series = TrajectoryPanel::new().forecast_series();
        assert_eq!(series.actual, vec![(0.0, 142_356.0)]);
        assert_eq!(series.forecast.first(), Some(&(0.0, 142_356.0)));
        assert_eq!(series.forecast.len(), 6);
        assert_eq!(series.upper.len(), 6);
        assert!(
            series
                .lower
                .iter()
                .zip(series.upper.iter())
                .all(|(lo, hi)| lo.1 <= hi.1)
        );
    }

    #[test]
    fn renders_events_and_summary() {
        let text = render_to_string(&TrajectoryPanel::new(), 140, 48);
        assert!(text.contains("May 2023"));
        assert!(text.contains("Policy Announcement"));
        assert!(text.contains("ARIMA + LSTM"));
    }
}
