use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::models::{Strategy, StrategyRecord};

/// Default number of records retained
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded FIFO log of strategy usage
#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: VecDeque<StrategyRecord>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a timestamped record, evicting the oldest entries past capacity
    pub fn record(&mut self, strategy: Strategy, item_count: usize) {
        self.records.push_back(StrategyRecord::new(strategy, item_count));
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// The last `n` records, oldest first
    pub fn recent(&self, n: usize) -> Vec<StrategyRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Strategy history shared across recommendation calls on one engine
///
/// All access goes through a mutex, and [`StrategyHistory::update`] holds it
/// for a whole read-then-append sequence so concurrent callers never
/// interleave between choosing a strategy and recording it.
#[derive(Debug, Default)]
pub struct StrategyHistory {
    log: Mutex<HistoryLog>,
}

impl StrategyHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: Mutex::new(HistoryLog::new(capacity)),
        }
    }

    pub fn record(&self, strategy: Strategy, item_count: usize) {
        self.update(|log| log.record(strategy, item_count));
    }

    pub fn recent(&self, n: usize) -> Vec<StrategyRecord> {
        self.update(|log| log.recent(n))
    }

    pub fn len(&self) -> usize {
        self.update(|log| log.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` with exclusive access to the log
    pub fn update<T>(&self, f: impl FnOnce(&mut HistoryLog) -> T) -> T {
        // A panic inside `f` cannot leave the log half-written, so a poisoned
        // lock is still safe to reuse.
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut log)
    }
}
