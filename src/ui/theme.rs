//! Dashboard colours and shared block styles

use crate::data::{Impact, Risk};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Primary brand colour (burgundy).
pub const BRAND: Color = Color::Rgb(139, 21, 56);
pub const BRAND_LIGHT: Color = Color::Rgb(184, 66, 90);
pub const BACKGROUND: Color = Color::Rgb(16, 20, 24);

pub const POSITIVE: Color = Color::Rgb(16, 185, 129);
pub const NEGATIVE: Color = Color::Rgb(239, 68, 68);
pub const NEUTRAL: Color = Color::Gray;

/// Series colours for multi-line charts, in assignment order.
pub const CHART_PALETTE: [Color; 6] = [
    BRAND,
    BRAND_LIGHT,
    Color::Rgb(59, 130, 246),
    Color::Rgb(16, 185, 129),
    Color::Rgb(245, 158, 11),
    Color::Rgb(139, 92, 246),
];

/// Colour band for a 0..1 score: ≥0.8 green, ≥0.6 blue, ≥0.4 yellow, red below.
pub fn score_color(score: f64) -> Color {
    if score >= 0.8 {
        Color::Green
    } else if score >= 0.6 {
        Color::Blue
    } else if score >= 0.4 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Sentiment polarity colour.
pub fn sentiment_color(sentiment: f64) -> Color {
    if sentiment > 0.0 {
        POSITIVE
    } else if sentiment < 0.0 {
        NEGATIVE
    } else {
        NEUTRAL
    }
}

/// Severity of a gap between public sentiment and policy priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapSeverity {
    Ok,
    Watch,
    Critical,
}

impl GapSeverity {
    pub fn from_gap(gap: f64) -> Self {
        if gap > -0.2 {
            Self::Ok
        } else if gap > -0.4 {
            Self::Watch
        } else {
            Self::Critical
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Ok => Color::Green,
            Self::Watch => Color::Yellow,
            Self::Critical => Color::Red,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Watch => "!",
            Self::Critical => "✗",
        }
    }
}

pub fn momentum_color(momentum: f64) -> Color {
    if momentum > 0.4 {
        Color::Green
    } else if momentum > 0.1 {
        Color::Blue
    } else if momentum > -0.1 {
        Color::Gray
    } else {
        Color::Red
    }
}

pub fn risk_color(risk: Risk) -> Color {
    match risk {
        Risk::High => Color::Red,
        Risk::Medium => Color::Yellow,
        Risk::Low => Color::Green,
    }
}

pub fn impact_color(impact: Impact) -> Color {
    match impact {
        Impact::High => Color::Red,
        Impact::Medium => Color::Yellow,
        Impact::Low => Color::Green,
    }
}

/// Parses a `#rrggbb` brand colour, falling back to gray.
pub fn hex_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Gray)
}

/// Rounded card used by every panel section.
pub fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND_LIGHT))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn emphasis() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands() {
        assert_eq!(score_color(0.91), Color::Green);
        assert_eq!(score_color(0.8), Color::Green);
        assert_eq!(score_color(0.65), Color::Blue);
        assert_eq!(score_color(0.4), Color::Yellow);
        assert_eq!(score_color(0.39), Color::Red);
    }

    #[test]
    fn gap_severity_bands() {
        assert_eq!(GapSeverity::from_gap(-0.12), GapSeverity::Ok);
        assert_eq!(GapSeverity::from_gap(-0.2), GapSeverity::Watch);
        assert_eq!(GapSeverity::from_gap(-0.27), GapSeverity::Watch);
        assert_eq!(GapSeverity::from_gap(-0.4), GapSeverity::Critical);
        assert_eq!(GapSeverity::from_gap(-0.60), GapSeverity::Critical);
    }

    #[test]
    fn momentum_bands() {
        assert_eq!(momentum_color(0.67), Color::Green);
        assert_eq!(momentum_color(0.4), Color::Blue);
        assert_eq!(momentum_color(0.1), Color::Gray);
        assert_eq!(momentum_color(-0.1), Color::Red);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(hex_color("#8B1538"), BRAND);
        assert_eq!(hex_color("not a colour"), Color::Gray);
    }
}
