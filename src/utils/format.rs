// src/utils/format.rs

// Zero-padded mm:ss, used by the game clock display.
pub fn format_mmss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// Zero-padded hh:mm:ss, used by the countdown display.
pub fn format_hms(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
