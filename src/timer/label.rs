//! `M:SS` countdown label formatting

/// Format remaining seconds as `M:SS` (minutes unpadded, seconds zero-padded)
pub fn format_label(seconds_left: u32) -> String {
    format!("{}:{:02}", seconds_left / 60, seconds_left % 60)
}
