//! Pure chart-rendering primitives.
//!
//! Every function here is a stateless transform from numeric telemetry
//! plus an explicit target geometry to a fixed-size block of text.
//! Nothing in this module touches the terminal or queries global state,
//! so every chart is deterministic and unit-testable.
//!
//! Degenerate inputs never panic: empty collections render a
//! placeholder panel and any denominator that could be zero falls back
//! to 1.

use std::cmp::Ordering;

use crate::constants::{CORE_CHART_HEIGHT, SPARK_CHARS};
use crate::models::{
    CpuReading, DiskReading, LabeledValue, MemoryReading, NetworkReading, ProcessRecord,
};
use crate::utils::pad_or_truncate;

/// Semantic accent for a panel border, mapped to a concrete color by
/// the paint layer through the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Placeholder shown when a chart has nothing to draw.
    NoData,
    /// Vertical bar charts.
    Chart,
    /// Horizontal bar charts.
    Bars,
    /// The process table.
    Table,
    /// The system gauge stack.
    Gauges,
    /// Header and footer chrome.
    Frame,
}

/// The atomic renderable unit: a titled, tinted block of text lines.
/// Styling stays out of the chart math; the paint layer turns a
/// `TextPanel` into a bordered widget.
#[derive(Debug, Clone)]
pub struct TextPanel {
    pub title: Option<String>,
    pub tint: Tint,
    pub lines: Vec<String>,
}

impl TextPanel {
    pub fn untitled(tint: Tint, lines: Vec<String>) -> Self {
        Self {
            title: None,
            tint,
            lines,
        }
    }

    pub fn placeholder(message: &str) -> Self {
        Self::untitled(Tint::NoData, vec![message.to_string()])
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.tint == Tint::NoData
    }
}

/// `max(lo, min(hi, x))` -- every responsive chart width funnels
/// through this so panels stay readable on both tiny and huge
/// terminals.
pub fn bounded(lo: usize, hi: usize, x: usize) -> usize {
    lo.max(hi.min(x))
}

/// Render a series as a single line of block glyphs, one per sample,
/// oldest first. Output length is `min(series.len(), width)`; an empty
/// series renders `width` spaces.
///
/// Min/max are taken over the whole series, not just the visible tail,
/// so the window scrolls without rescaling. A flat series maps every
/// sample to the lowest glyph rather than dividing by zero.
pub fn sparkline(series: &[f64], width: usize) -> String {
    if series.is_empty() {
        return " ".repeat(width);
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    let start = series.len().saturating_sub(width);
    series[start..]
        .iter()
        .map(|&value| {
            let normalized = (value - min) / range;
            let index = ((normalized * SPARK_CHARS.len() as f64) as usize).min(SPARK_CHARS.len() - 1);
            SPARK_CHARS[index]
        })
        .collect()
}

/// Render labelled values as columns growing bottom-up, `height` rows
/// tall, scaled so the largest value spans `width` units. A label row
/// (8-char columns, 2-space gaps) sits below the bars.
pub fn vertical_bars(data: &[LabeledValue], height: usize, width: usize) -> TextPanel {
    if data.is_empty() {
        return TextPanel::placeholder("No data");
    }
    let height = height.max(1);
    let width = width.max(1);

    let max_val = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let max_val = if max_val > 0.0 { max_val } else { 1.0 };

    let bar_widths: Vec<f64> = data
        .iter()
        .map(|d| ((d.value / max_val) * width as f64).max(0.0).floor())
        .collect();

    let mut lines = Vec::with_capacity(height + 1);
    for level in (1..=height).rev() {
        let threshold = (level as f64 / height as f64) * width as f64;
        let mut line = String::new();
        for &bar_width in &bar_widths {
            line.push(if bar_width >= threshold { '█' } else { ' ' });
            line.push_str("  ");
        }
        lines.push(line);
    }

    let mut label_line = String::new();
    for d in data {
        let label: String = d.label.chars().take(8).collect();
        label_line.push_str(&format!("{:<8}  ", label));
    }
    lines.push(label_line);

    TextPanel::untitled(Tint::Chart, lines)
}

/// Render labelled values as one filled/shaded row each, scaled so the
/// largest value fills `max_width` blocks. Values at or below zero
/// render an empty track.
pub fn horizontal_bars(data: &[LabeledValue], max_width: usize) -> TextPanel {
    if data.is_empty() {
        return TextPanel::placeholder("No data");
    }

    let max_val = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let max_val = if max_val > 0.0 { max_val } else { 1.0 };

    let lines = data
        .iter()
        .map(|d| {
            let filled = ((d.value / max_val) * max_width as f64).max(0.0) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(max_width.saturating_sub(filled))
            );
            format!("{:<6} {} {:>5.1}%", d.label, bar, d.value)
        })
        .collect();

    TextPanel::untitled(Tint::Bars, lines)
}

/// A short inline filled/unfilled bar for table rows. Percentages above
/// 100 overflow the declared width rather than clamping (multi-core
/// CPU sums can legitimately exceed 100).
pub fn mini_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).max(0.0) as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

/// A ranked table of the heaviest processes: pid, name, and CPU/MEM
/// mini-bars. Rows sort by CPU% descending; the sort is stable, so
/// ties keep their snapshot order. Column widths derive from the
/// console width.
pub fn mini_process_table(
    processes: &[ProcessRecord],
    limit: usize,
    console_width: usize,
) -> TextPanel {
    if processes.is_empty() {
        return TextPanel::placeholder("No processes");
    }

    let mut sorted: Vec<&ProcessRecord> = processes.iter().collect();
    sorted.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(Ordering::Equal)
    });

    let name_width = bounded(10, 20, console_width.saturating_sub(35) / 2);
    let bar_width = bounded(5, 10, console_width.saturating_sub(25) / 4);

    let mut lines = vec![
        format!(
            "{:<7} {:<nw$} {:<12} {:<12}",
            "PID",
            "PROCESS",
            "CPU",
            "MEM",
            nw = name_width
        ),
        "=".repeat(console_width.saturating_sub(4).min(75)),
    ];

    for proc in sorted.iter().take(limit) {
        lines.push(format!(
            "{:<7} {} {} {}",
            proc.pid,
            pad_or_truncate(&proc.name, name_width),
            mini_bar(proc.cpu_percent, bar_width),
            mini_bar(proc.memory_percent, bar_width),
        ));
    }

    TextPanel::untitled(Tint::Table, lines).with_title("Top Processes")
}

/// A single labelled gauge line: `LABEL: ███░░░  42.0%`.
pub fn gauge(percentage: f64, label: &str, width: usize) -> String {
    format!("{}: {} {:>5.1}%", label, mini_bar(percentage, width), percentage)
}

/// The CPU/MEM/DSK gauge stack, each gauge `clamp(15, 30, cw/4)` wide.
pub fn system_gauges(
    cpu: &CpuReading,
    memory: &MemoryReading,
    disk: &DiskReading,
    console_width: usize,
) -> TextPanel {
    let gauge_width = bounded(15, 30, console_width / 4);
    TextPanel::untitled(
        Tint::Gauges,
        vec![
            gauge(cpu.percent, "CPU", gauge_width),
            gauge(memory.percent, "MEM", gauge_width),
            gauge(disk.percent, "DSK", gauge_width),
        ],
    )
}

/// UPLOAD/DOWNLOAD bars from cumulative byte counters. The counters
/// are squashed onto a synthetic 0-100 scale (`min(MB * 10, 100)`),
/// a coarse activity indicator rather than a true percentage.
pub fn network_visualization(network: &NetworkReading, console_width: usize) -> TextPanel {
    let sent_mb = network.bytes_sent as f64 / (1024.0 * 1024.0);
    let recv_mb = network.bytes_recv as f64 / (1024.0 * 1024.0);

    let data = [
        LabeledValue::new("UPLOAD", (sent_mb * 10.0).min(100.0)),
        LabeledValue::new("DOWNLOAD", (recv_mb * 10.0).min(100.0)),
    ];

    horizontal_bars(&data, bounded(15, 70, console_width / 2))
}

/// One vertical bar per core, labelled `C00`, `C01`, ... Renders the
/// placeholder when no per-core data is available.
pub fn cpu_core_visualization(cpu: &CpuReading, console_width: usize) -> TextPanel {
    if cpu.per_core.is_empty() {
        return TextPanel::placeholder("No core data");
    }

    let data: Vec<LabeledValue> = cpu
        .per_core
        .iter()
        .enumerate()
        .map(|(i, &percent)| LabeledValue::new(format!("C{:02}", i), percent))
        .collect();

    vertical_bars(&data, CORE_CHART_HEIGHT, bounded(20, 40, console_width / 8))
}

/// USED/FREE horizontal bars as percentages of total memory.
pub fn memory_breakdown(memory: &MemoryReading, console_width: usize) -> TextPanel {
    let total = memory.total.max(1) as f64;
    let used_percent = (memory.used as f64 / total) * 100.0;

    let data = [
        LabeledValue::new("USED", used_percent),
        LabeledValue::new("FREE", 100.0 - used_percent),
    ];

    horizontal_bars(&data, bounded(15, 70, console_width / 2))
}

/// Human-readable byte count, one decimal: `1023.0 B`, `1.0 KB`, ...
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} PB", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(pid: u32, name: &str, cpu: f64, mem: f64) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_percent: mem,
        }
    }

    fn solid_count(s: &str) -> usize {
        s.chars().filter(|&c| c == '█').count()
    }

    // ── bounded ───────────────────────────────────────────────────

    #[test]
    fn bounded_clamps_both_ends() {
        assert_eq!(bounded(15, 30, 10), 15);
        assert_eq!(bounded(15, 30, 20), 20);
        assert_eq!(bounded(15, 30, 99), 30);
    }

    // ── sparkline ─────────────────────────────────────────────────

    #[test]
    fn sparkline_length_is_min_of_series_and_width() {
        let series: Vec<f64> = (0..50).map(|i| i as f64).collect();
        assert_eq!(sparkline(&series, 80).chars().count(), 50);
        assert_eq!(sparkline(&series, 20).chars().count(), 20);
        assert_eq!(sparkline(&[1.0], 10).chars().count(), 1);
    }

    #[test]
    fn sparkline_empty_series_renders_spaces() {
        assert_eq!(sparkline(&[], 8), "        ");
    }

    #[test]
    fn sparkline_constant_series_is_uniform() {
        let out = sparkline(&[42.0; 30], 30);
        let first = out.chars().next().unwrap();
        assert!(out.chars().all(|c| c == first));
    }

    #[test]
    fn sparkline_extremes_map_to_extreme_glyphs() {
        let out: Vec<char> = sparkline(&[0.0, 100.0], 2).chars().collect();
        assert_eq!(out[0], ' ');
        assert_eq!(out[1], '█');
    }

    #[test]
    fn sparkline_scales_against_whole_series_not_window() {
        // The visible tail is flat at 50 but the full series spans
        // 0..100, so the tail must render mid-level, not minimum.
        let mut series = vec![0.0, 100.0];
        series.extend([50.0; 4]);
        let out: Vec<char> = sparkline(&series, 4).chars().collect();
        assert!(out.iter().all(|&c| c == '▄'));
    }

    #[test]
    fn sparkline_ramp_is_nondecreasing() {
        let series: Vec<f64> = (0..=10).map(|i| i as f64 * 10.0).collect();
        let glyph_level = |c: char| SPARK_CHARS.iter().position(|&s| s == c).unwrap();
        let levels: Vec<usize> = sparkline(&series, 20).chars().map(glyph_level).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    // ── vertical_bars ─────────────────────────────────────────────

    #[test]
    fn vertical_bars_empty_input_is_placeholder() {
        let panel = vertical_bars(&[], 8, 40);
        assert!(panel.is_placeholder());
    }

    #[test]
    fn vertical_bars_row_count_is_height_plus_labels() {
        let data = [LabeledValue::new("a", 1.0), LabeledValue::new("b", 2.0)];
        assert_eq!(vertical_bars(&data, 6, 30).lines.len(), 7);
    }

    #[test]
    fn vertical_bars_max_value_fills_every_level() {
        let data = [LabeledValue::new("hi", 80.0), LabeledValue::new("lo", 20.0)];
        let panel = vertical_bars(&data, 4, 20);
        // Column 0 ("hi") is the max value: filled at every level.
        for line in &panel.lines[..4] {
            assert_eq!(line.chars().next().unwrap(), '█');
        }
        // Column 1 ("lo") never reaches the top level.
        assert_eq!(panel.lines[0].chars().nth(3).unwrap(), ' ');
    }

    #[test]
    fn vertical_bars_all_zero_renders_no_fill() {
        let data = [LabeledValue::new("a", 0.0), LabeledValue::new("b", 0.0)];
        let panel = vertical_bars(&data, 4, 20);
        for line in &panel.lines[..4] {
            assert_eq!(solid_count(line), 0);
        }
    }

    #[test]
    fn vertical_bars_labels_truncated_to_eight() {
        let data = [LabeledValue::new("very-long-label", 1.0)];
        let panel = vertical_bars(&data, 2, 10);
        let label_row = panel.lines.last().unwrap();
        assert!(label_row.starts_with("very-lon  "));
    }

    #[test]
    fn vertical_bars_preserve_input_order() {
        let data = [
            LabeledValue::new("zzz", 1.0),
            LabeledValue::new("aaa", 2.0),
            LabeledValue::new("mmm", 3.0),
        ];
        let panel = vertical_bars(&data, 2, 10);
        let label_row = panel.lines.last().unwrap();
        let z = label_row.find("zzz").unwrap();
        let a = label_row.find("aaa").unwrap();
        let m = label_row.find("mmm").unwrap();
        assert!(z < a && a < m);
    }

    // ── horizontal_bars ───────────────────────────────────────────

    #[test]
    fn horizontal_bars_empty_input_is_placeholder() {
        assert!(horizontal_bars(&[], 40).is_placeholder());
    }

    #[test]
    fn horizontal_bars_all_zero_renders_zero_fill() {
        let data = [LabeledValue::new("a", 0.0), LabeledValue::new("b", 0.0)];
        let panel = horizontal_bars(&data, 30);
        for line in &panel.lines {
            assert_eq!(solid_count(line), 0);
            assert_eq!(line.chars().filter(|&c| c == '░').count(), 30);
        }
    }

    #[test]
    fn horizontal_bars_max_value_fills_track() {
        let data = [LabeledValue::new("top", 90.0), LabeledValue::new("low", 45.0)];
        let panel = horizontal_bars(&data, 40);
        assert_eq!(solid_count(&panel.lines[0]), 40);
        assert_eq!(solid_count(&panel.lines[1]), 20);
    }

    #[test]
    fn horizontal_bars_row_shows_label_and_value() {
        let data = [LabeledValue::new("USED", 62.5)];
        let panel = horizontal_bars(&data, 20);
        assert!(panel.lines[0].starts_with("USED   "));
        assert!(panel.lines[0].ends_with(" 62.5%"));
    }

    #[test]
    fn horizontal_bars_negative_value_renders_empty_track() {
        let data = [LabeledValue::new("pos", 50.0), LabeledValue::new("neg", -10.0)];
        let panel = horizontal_bars(&data, 20);
        assert_eq!(solid_count(&panel.lines[1]), 0);
    }

    // ── mini_bar / gauge ──────────────────────────────────────────

    #[test]
    fn mini_bar_half_fill() {
        assert_eq!(mini_bar(50.0, 10), "█████░░░░░");
    }

    #[test]
    fn mini_bar_boundaries() {
        assert_eq!(mini_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(mini_bar(100.0, 10), "██████████");
    }

    #[test]
    fn mini_bar_over_100_overflows_width() {
        // Unclamped by design: multi-core sums can exceed 100%.
        let bar = mini_bar(150.0, 10);
        assert_eq!(solid_count(&bar), 15);
        assert!(!bar.contains('░'));
    }

    #[test]
    fn mini_bar_negative_renders_empty() {
        assert_eq!(mini_bar(-5.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn gauge_formats_label_fill_and_value() {
        let g = gauge(40.0, "CPU", 20);
        assert!(g.starts_with("CPU: "));
        assert_eq!(solid_count(&g), 8);
        assert!(g.ends_with("  40.0%"));
    }

    // ── mini_process_table ────────────────────────────────────────

    #[test]
    fn process_table_empty_input_is_placeholder() {
        assert!(mini_process_table(&[], 10, 80).is_placeholder());
    }

    #[test]
    fn process_table_sorts_by_cpu_descending() {
        let procs = [proc(1, "low", 10.0, 1.0), proc(2, "high", 90.0, 1.0)];
        let panel = mini_process_table(&procs, 10, 80);
        // lines[0] header, lines[1] rule, then rows
        assert!(panel.lines[2].starts_with("2"));
        assert!(panel.lines[3].starts_with("1"));
    }

    #[test]
    fn process_table_cpu_ties_keep_snapshot_order() {
        let procs = [
            proc(10, "first", 50.0, 1.0),
            proc(11, "second", 50.0, 2.0),
            proc(12, "third", 50.0, 3.0),
        ];
        let panel = mini_process_table(&procs, 10, 80);
        assert!(panel.lines[2].starts_with("10"));
        assert!(panel.lines[3].starts_with("11"));
        assert!(panel.lines[4].starts_with("12"));
    }

    #[test]
    fn process_table_respects_limit() {
        let procs: Vec<ProcessRecord> =
            (0..30).map(|i| proc(i, "p", i as f64, 0.0)).collect();
        let panel = mini_process_table(&procs, 5, 80);
        // header + rule + 5 rows
        assert_eq!(panel.lines.len(), 7);
    }

    #[test]
    fn process_table_truncates_long_names() {
        let procs = [proc(1, "an-extremely-long-process-name", 1.0, 1.0)];
        let panel = mini_process_table(&procs, 5, 80);
        assert!(panel.lines[2].contains("an-extremely-long-.."));
    }

    #[test]
    fn process_table_separator_tracks_console_width() {
        let narrow = mini_process_table(&[proc(1, "a", 1.0, 1.0)], 5, 40);
        assert_eq!(narrow.lines[1], "=".repeat(36));
        let wide = mini_process_table(&[proc(1, "a", 1.0, 1.0)], 5, 200);
        assert_eq!(wide.lines[1], "=".repeat(75));
    }

    #[test]
    fn process_table_column_widths_shrink_on_narrow_console() {
        // console 50 -> name width clamp(10,20,7)=10, bar clamp(5,10,6)=6
        let procs = [proc(1, "abcdefghijkl", 100.0, 100.0)];
        let panel = mini_process_table(&procs, 5, 50);
        assert!(panel.lines[2].contains("abcdefgh.."));
        assert!(panel.lines[2].contains(&"█".repeat(6)));
    }

    // ── composite panels ──────────────────────────────────────────

    #[test]
    fn system_gauges_stacks_three() {
        let cpu = CpuReading { percent: 10.0, per_core: vec![] };
        let mem = MemoryReading { percent: 20.0, used: 0, total: 1 };
        let disk = DiskReading { percent: 30.0 };
        let panel = system_gauges(&cpu, &mem, &disk, 80);
        assert_eq!(panel.lines.len(), 3);
        assert!(panel.lines[0].starts_with("CPU:"));
        assert!(panel.lines[1].starts_with("MEM:"));
        assert!(panel.lines[2].starts_with("DSK:"));
        // gauge width = clamp(15, 30, 80/4) = 20
        assert_eq!(panel.lines[0].chars().filter(|c| *c == '█' || *c == '░').count(), 20);
    }

    #[test]
    fn network_visualization_scales_megabytes_times_ten() {
        let net = NetworkReading {
            bytes_sent: 5 * 1024 * 1024,
            bytes_recv: 64 * 1024 * 1024,
        };
        let panel = network_visualization(&net, 80);
        assert!(panel.lines[0].starts_with("UPLOAD"));
        assert!(panel.lines[0].ends_with(" 50.0%"));
        // 64 MB * 10 caps at 100
        assert!(panel.lines[1].starts_with("DOWNLO"));
        assert!(panel.lines[1].ends_with("100.0%"));
    }

    #[test]
    fn cpu_cores_labels_are_zero_padded() {
        let cpu = CpuReading {
            percent: 50.0,
            per_core: vec![10.0, 50.0, 90.0],
        };
        let panel = cpu_core_visualization(&cpu, 80);
        assert_eq!(panel.lines.len(), CORE_CHART_HEIGHT + 1);
        let labels = panel.lines.last().unwrap();
        assert!(labels.contains("C00"));
        assert!(labels.contains("C01"));
        assert!(labels.contains("C02"));
    }

    #[test]
    fn cpu_cores_without_per_core_data_is_placeholder() {
        let cpu = CpuReading { percent: 50.0, per_core: vec![] };
        assert!(cpu_core_visualization(&cpu, 80).is_placeholder());
    }

    #[test]
    fn memory_breakdown_used_free_sum_to_100() {
        let mem = MemoryReading {
            percent: 25.0,
            used: 4 * 1024 * 1024 * 1024,
            total: 16 * 1024 * 1024 * 1024,
        };
        let panel = memory_breakdown(&mem, 80);
        assert!(panel.lines[0].ends_with(" 25.0%"));
        assert!(panel.lines[1].ends_with(" 75.0%"));
    }

    #[test]
    fn memory_breakdown_zero_total_does_not_divide_by_zero() {
        let mem = MemoryReading { percent: 0.0, used: 0, total: 0 };
        let panel = memory_breakdown(&mem, 80);
        assert!(panel.lines[0].ends_with("  0.0%"));
    }

    // ── format_bytes ──────────────────────────────────────────────

    #[test]
    fn format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(format_bytes(1536 * 1024 * 1024), "1.5 GB");
    }

    #[test]
    fn format_bytes_tops_out_at_petabytes() {
        let pb = 1024_u64.pow(5);
        assert_eq!(format_bytes(pb), "1.0 PB");
        assert_eq!(format_bytes(pb * 2048), "2048.0 PB");
    }
}
