use lazy_static::lazy_static;
use metrics::{counter, gauge, Counter, Gauge};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    /// Shape regexes compiled so far, including ones that lost a race to the memo store.
    pub pattern_compilations: Counter,

    // Live entries in the shape memo store, recomputed on every insert and GC.
    total_patterns: Gauge,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            pattern_compilations: counter!("shape.pattern_compilations"),
            total_patterns: gauge!("shape.total_patterns"),
        }
    }

    pub fn set_total_patterns(&self, count: usize) {
        self.total_patterns.set(count as f64);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
