mod collector;

pub use collector::SystemCollector;

use crate::models::{CpuReading, DiskReading, MemoryReading, NetworkReading, ProcessRecord};

/// Read side of telemetry collection: everything the dashboard needs
/// to compose a frame. Point-in-time readings are assumed already
/// materialized; none of these calls may block on I/O beyond a cheap
/// in-process refresh.
///
/// The rolling histories are owned by the source; `update_history`
/// advances them by one sample and is the only mutating call.
pub trait TelemetrySource {
    fn cpu(&self) -> CpuReading;
    fn memory(&self) -> MemoryReading;
    fn disk(&self) -> DiskReading;
    fn network(&self) -> NetworkReading;
    /// Up to `limit` processes, heaviest CPU consumers first.
    fn processes(&self, limit: usize) -> Vec<ProcessRecord>;
    fn cpu_history(&self) -> Vec<f64>;
    fn memory_history(&self) -> Vec<f64>;
    /// Take a fresh sample and append it to the rolling histories.
    fn update_history(&mut self);
}
