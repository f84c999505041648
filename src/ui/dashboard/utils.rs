//! Dashboard utility functions
//!
//! Number and date formatting shared by the panels

use chrono::NaiveDate;

/// Formats an integer with thousands separators, `1247863` -> `1,247,863`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a volume in thousands for axis labels, `142356` -> `142K`.
pub fn format_kilo(value: f64) -> String {
    format!("{:.0}K", value / 1000.0)
}

/// Formats a -1..1 sentiment as a signed percentage. Only strictly positive values get `+`.
pub fn format_signed_percent(value: f64) -> String {
    let percent = value * 100.0;
    if percent > 0.0 {
        format!("+{:.1}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// Formats a signed score with two decimals, `0.23` -> `+0.23`.
pub fn format_signed_score(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn parse_month(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()
}

/// Axis tick for a `YYYY-MM` month, `2023-01` -> `01/23`.
pub fn month_tick(month: &str) -> String {
    parse_month(month)
        .map(|date| date.format("%m/%y").to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Long label for a `YYYY-MM` month, `2023-01` -> `Jan 2023`.
pub fn month_label(month: &str) -> String {
    parse_month(month)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Truncates to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(89_234), "89,234");
        assert_eq!(format_thousands(1_247_863), "1,247,863");
    }

    #[test]
    fn signed_percentages() {
        assert_eq!(format_signed_percent(0.23), "+23.0%");
        assert_eq!(format_signed_percent(-0.12), "-12.0%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
        assert_eq!(format_signed_score(0.45), "+0.45");
        assert_eq!(format_signed_score(-0.21), "-0.21");
    }

    #[test]
    fn month_formats() {
        assert_eq!(month_tick("2023-01"), "01/23");
        assert_eq!(month_tick("2024-03"), "03/24");
        assert_eq!(month_label("2023-10"), "Oct 2023");
        assert_eq!(month_label("Jan"), "Jan");
    }

    #[test]
    fn compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-03-15 14:30:12"), "03-15 14:30");
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }

    #[test]
    fn kilo_and_truncate() {
        assert_eq!(format_kilo(142_356.0), "142K");
        assert_eq!(truncate("Digital Infrastructure", 10), "Digital I…");
        assert_eq!(truncate("Jobs", 10), "Jobs");
    }
}
