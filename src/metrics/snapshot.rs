/// Point-in-time copy of an engine's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoxMetricsSnapshot {
    pub insert_calls: u64,
    pub insert_rejected: u64,

    pub remove_calls: u64,
    pub remove_empty: u64,

    pub peek_calls: u64,
    pub peek_empty: u64,

    pub clear_calls: u64,
    pub grow_events: u64, // ring-buffer reallocations, always 0 for Vec-backed engines

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
    pub max_size: usize,
}

impl BoxMetricsSnapshot {
    /// Inserts that were accepted.
    pub fn inserted(&self) -> u64 {
        self.insert_calls.saturating_sub(self.insert_rejected)
    }

    /// Removes that returned an item.
    pub fn removed(&self) -> u64 {
        self.remove_calls.saturating_sub(self.remove_empty)
    }
}
