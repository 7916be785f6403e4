//! Dashboard controller: composes one frame per refresh tick.
//!
//! Owns the two pieces of cross-tick UI state (pause flag, process
//! sort key). Everything else is recomputed from the telemetry source
//! and the current terminal size on every call to [`Dashboard::render`].

use std::cmp::Ordering;

use ratatui::layout::Rect;

use crate::constants::{DEFAULT_PROCESS_ROWS, MIN_PROCESS_ROWS, PROCESS_FETCH_SLACK};
use crate::monitor::TelemetrySource;

use super::charts::{self, TextPanel, Tint};
use super::layout::DashboardLayout;

/// Which metric ranks the process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Cpu,
    Memory,
}

/// One fully composed frame: the region map plus the panel rendered
/// for each region, ready for the paint layer.
#[derive(Debug, Clone)]
pub struct DashboardFrame {
    pub layout: DashboardLayout,
    pub header: TextPanel,
    pub gauges: TextPanel,
    pub cores: TextPanel,
    pub memory: TextPanel,
    pub network: TextPanel,
    pub processes: TextPanel,
    pub footer: TextPanel,
    /// Overall CPU load, used by the paint layer for the header pulse.
    pub cpu_percent: f64,
}

pub struct Dashboard {
    sort_by: SortKey,
    paused: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            sort_by: SortKey::Cpu,
            paused: false,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_by
    }

    /// Change the process sort key. Unknown keys are ignored.
    pub fn set_process_sort(&mut self, key: &str) {
        match key {
            "cpu" => self.sort_by = SortKey::Cpu,
            "memory" => self.sort_by = SortKey::Memory,
            _ => {}
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Run one refresh cycle and compose a frame for the given
    /// terminal size. Unless paused, the source's rolling histories
    /// advance by one sample first.
    pub fn render(
        &mut self,
        source: &mut dyn TelemetrySource,
        width: u16,
        height: u16,
    ) -> DashboardFrame {
        if !self.paused {
            source.update_history();
        }

        let console_width = width as usize;
        let layout = DashboardLayout::compute(Rect::new(0, 0, width, height));

        let cpu = source.cpu();
        let memory = source.memory();
        let disk = source.disk();
        let network = source.network();

        let gauges = charts::system_gauges(&cpu, &memory, &disk, console_width);

        // CPU panel: headline, trend sparkline, then per-core bars.
        let mut cores_lines = vec![
            format!("CPU Usage: {:>5.1}%", cpu.percent),
            charts::sparkline(&source.cpu_history(), inner_width(layout.cores)),
        ];
        cores_lines.extend(charts::cpu_core_visualization(&cpu, console_width).lines);
        let cores = TextPanel::untitled(Tint::Chart, cores_lines).with_title("CPU Cores");

        // Memory panel: headline with absolute figures, sparkline, breakdown.
        let mut memory_lines = vec![
            format!(
                "Memory: {:>5.1}%  ({} / {})",
                memory.percent,
                charts::format_bytes(memory.used),
                charts::format_bytes(memory.total),
            ),
            charts::sparkline(&source.memory_history(), inner_width(layout.memory)),
        ];
        memory_lines.extend(charts::memory_breakdown(&memory, console_width).lines);
        let memory_panel = TextPanel::untitled(Tint::Bars, memory_lines).with_title("Memory");

        let network_panel =
            charts::network_visualization(&network, console_width).with_title("Network");

        let processes = self.processes_panel(source, console_width, height as usize);

        DashboardFrame {
            layout,
            header: header_panel(),
            gauges,
            cores,
            memory: memory_panel,
            network: network_panel,
            processes,
            footer: footer_panel(self.paused),
            cpu_percent: cpu.percent,
        }
    }

    fn processes_panel(
        &self,
        source: &dyn TelemetrySource,
        console_width: usize,
        height: usize,
    ) -> TextPanel {
        let limit = MIN_PROCESS_ROWS.max(height / 3).max(DEFAULT_PROCESS_ROWS);
        let mut procs = source.processes(limit + PROCESS_FETCH_SLACK);

        if self.sort_by == SortKey::Memory {
            procs.sort_by(|a, b| {
                b.memory_percent
                    .partial_cmp(&a.memory_percent)
                    .unwrap_or(Ordering::Equal)
            });
        }
        procs.truncate(limit);

        charts::mini_process_table(&procs, limit, console_width)
    }
}

/// Usable columns inside a bordered region.
fn inner_width(area: Rect) -> usize {
    area.width.saturating_sub(2).max(1) as usize
}

fn header_panel() -> TextPanel {
    let clock = chrono::Local::now().format("%H:%M:%S");
    TextPanel::untitled(
        Tint::Frame,
        vec![format!("StatsMan - System Monitor    {}", clock)],
    )
}

fn footer_panel(paused: bool) -> TextPanel {
    let keys = "q quit │ p pause │ c sort CPU │ m sort MEM │ t theme";
    let line = if paused {
        format!("[PAUSED] {}", keys)
    } else {
        keys.to_string()
    };
    TextPanel::untitled(Tint::Frame, vec![line])
}
