//! Text formatting helpers for the details panel and status bar.

use once_cell::sync::Lazy;
use std::sync::Mutex;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Returns the string itself, or "N/A" when empty.
pub fn text_or_na(s: &str) -> &str {
    if s.trim().is_empty() {
        "N/A"
    } else {
        s
    }
}

/// Formats a yield description for display. Range markers like "<20" pass
/// through untouched; plain numbers are normalized to one decimal.
pub fn format_yield_desc(desc: &str) -> String {
    let desc = desc.trim();
    if desc.is_empty() {
        return "N/A".to_string();
    }
    if desc.starts_with('<') {
        return desc.to_string();
    }
    match desc.parse::<f64>() {
        Ok(v) => format!("{v:.1}"),
        Err(_) => desc.to_string(),
    }
}

/// Formats an optional kiloton value, "N/A" when absent.
pub fn format_kilotons(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "N/A".to_string(),
    }
}

/// Formats a coordinate to three decimals.
pub fn format_coord(value: f64) -> String {
    format!("{value:.3}")
}

// Reused across frames; building a sysinfo System every call is costly.
static SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| {
    Mutex::new(System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    ))
});

/// Current process memory usage in megabytes, 0.0 when unavailable.
pub fn get_current_memory_mb() -> f64 {
    let Ok(mut sys) = SYSTEM.lock() else {
        return 0.0;
    };
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    match sys.process(Pid::from_u32(std::process::id())) {
        Some(process) => process.memory() as f64 / (1024.0 * 1024.0),
        None => 0.0,
    }
}

/// Formats memory usage as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yield_desc_formats() {
        assert_eq!(format_yield_desc("<20"), "<20");
        assert_eq!(format_yield_desc("19.95"), "20.0");
        assert_eq!(format_yield_desc(""), "N/A");
        assert_eq!(format_yield_desc("unknown"), "unknown");
    }

    #[test]
    fn optional_kilotons() {
        assert_eq!(format_kilotons(Some(15.0)), "15.0");
        assert_eq!(format_kilotons(None), "N/A");
    }

    #[test]
    fn na_fallback() {
        assert_eq!(text_or_na("  "), "N/A");
        assert_eq!(text_or_na("NEVADA"), "NEVADA");
    }

    #[test]
    fn memory_formatting() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
