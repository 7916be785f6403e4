//! Application-wide constants.
//!
//! Centralizes timing defaults, buffer capacities, and chart geometry
//! so magic numbers don't scatter across the codebase.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Minimum allowed refresh rate (ms) to prevent excessive CPU usage.
pub const MIN_REFRESH_MS: u64 = 100;
/// Default refresh interval (ms).
pub const DEFAULT_REFRESH_MS: u64 = 1000;
/// Event poll timeout (ms) -- how often the loop checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Initial system data settling delay (ms) before the first sample.
pub const INITIAL_SETTLE_MS: u64 = 250;

// ── Capacities ────────────────────────────────────────────────────
/// Rolling history capacity (2 minutes at 1 sample/sec).
pub const DEFAULT_HISTORY_SIZE: usize = 120;
/// History capacity floor.
pub const MIN_HISTORY_SIZE: usize = 10;
/// Minimum process table rows regardless of terminal height.
pub const MIN_PROCESS_ROWS: usize = 8;
/// Process table rows floor on tall-enough terminals.
pub const DEFAULT_PROCESS_ROWS: usize = 20;
/// Extra processes fetched beyond the display limit so a memory
/// re-sort has slack to pick from.
pub const PROCESS_FETCH_SLACK: usize = 5;

// ── Charts ────────────────────────────────────────────────────────
/// Sparkline glyphs ordered from empty to full block.
pub const SPARK_CHARS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Per-core bar chart height in rows.
pub const CORE_CHART_HEIGHT: usize = 8;

// ── Collection ────────────────────────────────────────────────────
/// Disks smaller than this are virtual/tmpfs noise and are skipped.
pub const MIN_DISK_SIZE_BYTES: u64 = 1024 * 1024 * 1024;

// ── Paths ─────────────────────────────────────────────────────────
/// User home directory (fallback /tmp for odd environments).
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Config directory: ~/.config/statsman
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("statsman")
}

/// Config file: ~/.config/statsman/config.toml
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
