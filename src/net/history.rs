use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Rolling history keeps at most this many samples.
pub const HISTORY_CAPACITY: usize = 20;

/// One second of observed traffic. Immutable once recorded.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub at: DateTime<Local>,
    pub rx_per_sec: u64,
    pub tx_per_sec: u64,
}

impl Sample {
    pub fn now(rx_per_sec: u64, tx_per_sec: u64) -> Self {
        Self {
            at: Local::now(),
            rx_per_sec,
            tx_per_sec,
        }
    }
}

/// Fixed-capacity FIFO of recent samples, oldest evicted first.
#[derive(Debug, Default)]
pub struct SampleHistory {
    samples: VecDeque<Sample>,
}

impl SampleHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn append(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    /// Up to `n` most recent samples, newest first.
    pub fn snapshot_newest_first(&self, n: usize) -> Vec<Sample> {
        self.samples.iter().rev().take(n).copied().collect()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
