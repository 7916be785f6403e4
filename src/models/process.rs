/// A single process snapshot row - immutable once collected.
/// The dashboard only reads and sorts copies of these, never mutates
/// process state.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}
