//! Dashboard panels
//!
//! One view model per tab. A panel is built from the static dataset when its tab becomes
//! active and rendered as a ratatui widget; only the export panel carries editable state.

pub mod alignment;
pub mod export;
pub mod interpretation;
pub mod meta;
pub mod methods;
pub mod overview;
pub mod storyline;
pub mod trajectory;
pub mod voice;

use crate::navigation::TabId;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, LegendPosition, Paragraph,
    Widget,
};
use std::rc::Rc;

pub use alignment::AlignmentPanel;
pub use export::ExportPanel;
pub use interpretation::InterpretationPanel;
pub use meta::MetaPanel;
pub use methods::MethodsPanel;
pub use overview::OverviewPanel;
pub use storyline::StorylinePanel;
pub use trajectory::TrajectoryPanel;
pub use voice::VoicePanel;

/// The mounted content of the active tab.
#[derive(Debug, Clone)]
pub enum Panel {
    Overview(OverviewPanel),
    Voice(VoicePanel),
    Interpretation(InterpretationPanel),
    Storyline(StorylinePanel),
    Trajectory(TrajectoryPanel),
    Alignment(AlignmentPanel),
    Meta(MetaPanel),
    Methods(MethodsPanel),
    Export(ExportPanel),
}

impl Panel {
    /// Builds the panel shown for `tab`.
    pub fn mount(tab: TabId) -> Self {
        match tab {
            TabId::Overview => Panel::Overview(OverviewPanel::new()),
            TabId::Voice => Panel::Voice(VoicePanel::new()),
            TabId::Interpretation => Panel::Interpretation(InterpretationPanel::new()),
            TabId::Storyline => Panel::Storyline(StorylinePanel::new()),
            TabId::Trajectory => Panel::Trajectory(TrajectoryPanel::new()),
            TabId::Alignment => Panel::Alignment(AlignmentPanel::new()),
            TabId::Meta => Panel::Meta(MetaPanel::new()),
            TabId::Methods => Panel::Methods(MethodsPanel::new()),
            TabId::Export => Panel::Export(ExportPanel::new()),
        }
    }

    /// Tab this panel belongs to.
    pub fn tab(&self) -> TabId {
        match self {
            Panel::Overview(_) => TabId::Overview,
            Panel::Voice(_) => TabId::Voice,
            Panel::Interpretation(_) => TabId::Interpretation,
            Panel::Storyline(_) => TabId::Storyline,
            Panel::Trajectory(_) => TabId::Trajectory,
            Panel::Alignment(_) => TabId::Alignment,
            Panel::Meta(_) => TabId::Meta,
            Panel::Methods(_) => TabId::Methods,
            Panel::Export(_) => TabId::Export,
        }
    }
}

impl Widget for &Panel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            Panel::Overview(panel) => panel.render(area, buf),
            Panel::Voice(panel) => panel.render(area, buf),
            Panel::Interpretation(panel) => panel.render(area, buf),
            Panel::Storyline(panel) => panel.render(area, buf),
            Panel::Trajectory(panel) => panel.render(area, buf),
            Panel::Alignment(panel) => panel.render(area, buf),
            Panel::Meta(panel) => panel.render(area, buf),
            Panel::Methods(panel) => panel.render(area, buf),
            Panel::Export(panel) => panel.render(area, buf),
        }
    }
}

// Layout helpers

pub(crate) fn rows<const N: usize>(area: Rect, constraints: [Constraint; N]) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

pub(crate) fn columns<const N: usize>(area: Rect, constraints: [Constraint; N]) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}

// Chart helpers

/// One row of a horizontal bar chart.
#[derive(Debug, Clone)]
pub(crate) struct HorizontalBar<'a> {
    pub label: &'a str,
    pub value: u64,
    pub text: String,
    pub color: Color,
}

/// Horizontal bars inside `block`. When the inner area cannot hold the longest label next to
/// a bar, the rows are listed as plain `label value` lines instead.
pub(crate) fn horizontal_bars(
    block: Block<'_>,
    entries: &[HorizontalBar<'_>],
    max: Option<u64>,
    area: Rect,
    buf: &mut Buffer,
) {
    let inner = block.inner(area);
    block.render(area, buf);

    let label_width = entries
        .iter()
        .map(|e| Line::from(e.label).width())
        .max()
        .unwrap_or(0);
    // BarChart subtracts the label column (plus a one cell gap) from the width unchecked.
    if usize::from(inner.width) <= label_width + 1 {
        let lines: Vec<Line> = entries
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::styled(e.label, Style::default().fg(e.color)),
                    Span::raw(" "),
                    Span::raw(e.text.as_str()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
        return;
    }

    let bars: Vec<Bar> = entries
        .iter()
        .map(|e| {
            Bar::default()
                .label(Line::from(e.label))
                .value(e.value)
                .text_value(e.text.clone())
                .style(Style::default().fg(e.color))
                .value_style(Style::default().fg(Color::White).bg(e.color))
        })
        .collect();
    let mut chart = BarChart::default()
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    if let Some(max) = max {
        chart = chart.max(max);
    }
    chart.render(inner, buf);
}

/// Points for a series plotted against its position.
pub(crate) fn indexed(values: impl IntoIterator<Item = f64>) -> Vec<(f64, f64)> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v))
        .collect()
}

/// A line series with a legend entry.
pub(crate) fn line<'a>(name: &'a str, color: Color, points: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points)
}

/// A scatter series with a legend entry.
pub(crate) fn scatter<'a>(name: &'a str, color: Color, points: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(color))
        .data(points)
}

/// First, middle and last category labels for an x axis of `len` points.
pub(crate) fn sparse_labels(labels: &[String]) -> Vec<Span<'static>> {
    match labels {
        [] => Vec::new(),
        [only] => vec![Span::raw(only.clone())],
        [first, .., last] => {
            let middle = &labels[labels.len() / 2];
            vec![
                Span::raw(first.clone()),
                Span::raw(middle.clone()),
                Span::raw(last.clone()),
            ]
        }
    }
}

pub(crate) fn x_axis(labels: &[String]) -> Axis<'static> {
    Axis::default()
        .style(theme::muted())
        .bounds([0.0, labels.len().saturating_sub(1).max(1) as f64])
        .labels(sparse_labels(labels))
}

pub(crate) fn y_axis(bounds: [f64; 2], labels: [String; 3]) -> Axis<'static> {
    Axis::default()
        .style(theme::muted())
        .bounds(bounds)
        .labels(labels.map(Span::raw))
}

/// Chart with the legend pinned to the top right and hidden only on tiny areas.
pub(crate) fn chart<'a>(datasets: Vec<Dataset<'a>>) -> Chart<'a> {
    Chart::new(datasets)
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Widget;

    /// Renders a widget into an off-screen buffer and returns its text, one line per row.
    pub fn render_to_string<W: Widget>(widget: W, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(widget, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_tab_mounts_its_own_panel() {
        for tab in TabId::iter() {
            assert_eq!(Panel::mount(tab).tab(), tab);
        }
    }

    #[test]
    fn every_panel_renders_without_panicking() {
        for tab in TabId::iter() {
            let panel = Panel::mount(tab);
            for (w, h) in [(140, 48), (80, 24), (20, 6)] {
                let text = test_support::render_to_string(&panel, w, h);
                assert_eq!(text.lines().count(), h as usize);
            }
        }
    }

    #[test]
    fn narrow_horizontal_bars_fall_back_to_a_list() {
        let entries = [
            HorizontalBar {
                label: "Environmental",
                value: 71,
                text: "0.71".to_string(),
                color: Color::Blue,
            },
            HorizontalBar {
                label: "Social",
                value: 64,
                text: "0.64".to_string(),
                color: Color::Blue,
            },
        ];
        let render = |width: u16| {
            let mut buf = Buffer::empty(Rect::new(0, 0, width, 6));
            horizontal_bars(Block::bordered(), &entries, Some(100), buf.area, &mut buf);
            (0..buf.area.height)
                .map(|y| {
                    (0..buf.area.width)
                        .map(|x| buf[(x, y)].symbol())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        // 13 cell label + gap needs at least 15 inner cells for the bars.
        for width in 0..=16 {
            render(width);
        }
        assert!(render(16).contains("Social 0.64"));
        assert!(render(40).contains("Environmental"));
        assert!(!render(40).contains("Social 0.64"));
    }

    #[test]
    fn sparse_labels_pick_endpoints_and_middle() {
        let labels: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
        let picked: Vec<String> = sparse_labels(&labels)
            .into_iter()
            .map(|s| s.content.into_owned())
            .collect();
        assert_eq!(picked, ["a", "c", "e"]);
        assert!(sparse_labels(&[]).is_empty());
    }
}
