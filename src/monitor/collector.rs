//! System telemetry collection backed by `sysinfo`.

use std::cmp::Ordering;
use std::collections::VecDeque;

use sysinfo::{Disks, Networks, ProcessesToUpdate, System};

use crate::constants::{INITIAL_SETTLE_MS, MIN_DISK_SIZE_BYTES};
use crate::models::{CpuReading, DiskReading, MemoryReading, NetworkReading, ProcessRecord};

use super::TelemetrySource;

/// Samples the local machine and keeps bounded CPU/memory histories.
/// Single responsibility: gathers data, no rendering or analysis.
pub struct SystemCollector {
    sys: System,
    networks: Networks,
    disks: Disks,
    cpu_history: VecDeque<f64>,
    memory_history: VecDeque<f64>,
    history_size: usize,
}

impl SystemCollector {
    pub fn new(history_size: usize) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        // First CPU reading is meaningless until sysinfo has two samples
        std::thread::sleep(std::time::Duration::from_millis(INITIAL_SETTLE_MS));
        sys.refresh_all();

        let networks = Networks::new_with_refreshed_list();
        let disks = Disks::new_with_refreshed_list();
        let history_size = history_size.max(1);

        Self {
            sys,
            networks,
            disks,
            cpu_history: VecDeque::with_capacity(history_size),
            memory_history: VecDeque::with_capacity(history_size),
            history_size,
        }
    }

    fn memory_percent(&self) -> f64 {
        let total = self.sys.total_memory();
        if total == 0 {
            return 0.0;
        }
        (self.sys.used_memory() as f64 / total as f64) * 100.0
    }
}

impl TelemetrySource for SystemCollector {
    fn cpu(&self) -> CpuReading {
        CpuReading {
            percent: self.sys.global_cpu_usage() as f64,
            per_core: self.sys.cpus().iter().map(|c| c.cpu_usage() as f64).collect(),
        }
    }

    fn memory(&self) -> MemoryReading {
        MemoryReading {
            percent: self.memory_percent(),
            used: self.sys.used_memory(),
            total: self.sys.total_memory(),
        }
    }

    fn disk(&self) -> DiskReading {
        // Aggregate real mounts; tiny virtual filesystems only add noise.
        let mut total: u64 = 0;
        let mut available: u64 = 0;
        for disk in self
            .disks
            .list()
            .iter()
            .filter(|d| d.total_space() >= MIN_DISK_SIZE_BYTES)
        {
            total += disk.total_space();
            available += disk.available_space();
        }

        let percent = if total == 0 {
            0.0
        } else {
            (total.saturating_sub(available) as f64 / total as f64) * 100.0
        };
        DiskReading { percent }
    }

    fn network(&self) -> NetworkReading {
        let mut sent: u64 = 0;
        let mut recv: u64 = 0;
        for (_, data) in self.networks.iter() {
            sent += data.total_transmitted();
            recv += data.total_received();
        }
        NetworkReading {
            bytes_sent: sent,
            bytes_recv: recv,
        }
    }

    fn processes(&self, limit: usize) -> Vec<ProcessRecord> {
        let total_memory = self.sys.total_memory();
        let mut records: Vec<ProcessRecord> = self
            .sys
            .processes()
            .iter()
            .map(|(pid, proc_info)| ProcessRecord {
                pid: pid.as_u32(),
                name: proc_info.name().to_string_lossy().to_string(),
                cpu_percent: proc_info.cpu_usage() as f64,
                memory_percent: if total_memory > 0 {
                    (proc_info.memory() as f64 / total_memory as f64) * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        records.sort_by(|a, b| {
            b.cpu_percent
                .partial_cmp(&a.cpu_percent)
                .unwrap_or(Ordering::Equal)
        });
        records.truncate(limit);
        records
    }

    fn cpu_history(&self) -> Vec<f64> {
        self.cpu_history.iter().copied().collect()
    }

    fn memory_history(&self) -> Vec<f64> {
        self.memory_history.iter().copied().collect()
    }

    fn update_history(&mut self) {
        self.sys.refresh_all();
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        self.networks.refresh();
        self.disks.refresh();

        let cpu = self.sys.global_cpu_usage() as f64;
        let mem = self.memory_percent();
        push_bounded(&mut self.cpu_history, self.history_size, cpu);
        push_bounded(&mut self.memory_history, self.history_size, mem);
    }
}

/// Ring-buffer push: evicts the oldest sample once `capacity` is reached.
fn push_bounded(buffer: &mut VecDeque<f64>, capacity: usize, value: f64) {
    if buffer.len() >= capacity {
        buffer.pop_front();
    }
    buffer.push_back(value);
}
