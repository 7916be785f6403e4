//! Shared utility functions used across modules.

/// Fit a string into a fixed-width column: left-pad with spaces when it
/// is short enough, otherwise cut and append ".." so the result is
/// exactly `width` characters (for `width >= 3`).
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        format!("{:<w$}", s, w = width)
    } else if width > 2 {
        let cut: String = s.chars().take(width - 2).collect();
        format!("{}..", cut)
    } else {
        s.chars().take(width).collect()
    }
}
