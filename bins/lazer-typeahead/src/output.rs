//! Terminal output utilities

use lazer_search::Item;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 0.001 {
        format!("{}µs", duration.as_micros())
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1000.0)
    } else {
        format!("{:.2}s", secs)
    }
}

/// One list row: label, then the value in parentheses
pub fn format_item(item: &Item) -> String {
    match (item.text(), item.value()) {
        (Some(text), Some(value)) => format!("{} ({})", text, value),
        (Some(text), None) => text.to_string(),
        (None, Some(value)) => format!("({})", value),
        (None, None) => "<empty>".to_string(),
    }
}
