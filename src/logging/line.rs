//! Line rendering
//!
//! Every emitted line has the layout `<YYYY-MM-DD HH:MM:SS> [<LEVEL>] <message>`.

use chrono::{DateTime, Local};

/// Timestamp layout: local time, second resolution, 24-hour clock
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp in the line layout
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render a full line (without terminator) stamped with the current local time
pub fn render_line(level_name: &str, message: &str) -> String {
    render_line_at(&Local::now(), level_name, message)
}

/// Render a full line (without terminator) for a given instant
pub fn render_line_at(at: &DateTime<Local>, level_name: &str, message: &str) -> String {
    format!("{} [{}] {}", format_timestamp(at), level_name, message)
}
