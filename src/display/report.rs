//! Report formatting utilities for terminal output

use crate::analytics::{DeltaMetric, Trend};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Month-over-month change line, or `None` when there is no baseline
///
/// The magnitude is shown unsigned next to an arrow, e.g. `▲ 12.5% vs last month`.
pub fn format_delta(delta: &DeltaMetric) -> Option<String> {
    let pct = delta.percent_change?;
    let arrow = match delta.trend()? {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Flat => "=",
    };
    Some(format!("{} {:.1}% vs last month", arrow, pct.abs()))
}

/// Horizontal bar of `width` cells filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
