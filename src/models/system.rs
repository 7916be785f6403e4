/// Point-in-time CPU reading: overall load plus one value per core.
#[derive(Debug, Clone)]
pub struct CpuReading {
    pub percent: f64,
    pub per_core: Vec<f64>,
}

/// Point-in-time memory reading.
#[derive(Debug, Clone, Copy)]
pub struct MemoryReading {
    pub percent: f64,
    /// Bytes in use.
    pub used: u64,
    /// Total physical memory in bytes.
    pub total: u64,
}

/// Aggregate disk usage across real (non-virtual) mounts.
#[derive(Debug, Clone, Copy)]
pub struct DiskReading {
    pub percent: f64,
}

/// Cumulative network counters since boot, summed over interfaces.
#[derive(Debug, Clone, Copy)]
pub struct NetworkReading {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

/// A labelled scalar for categorical bar charts. Charts preserve the
/// order these are supplied in, which is why this is a Vec element and
/// not a map entry.
#[derive(Debug, Clone)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
