use crate::net::counters::CounterSnapshot;

/// Turns successive cumulative counter readings into per-tick byte
/// deltas. Holds the previous reading as the baseline; every operation
/// moves the baseline forward unconditionally.
#[derive(Debug, Default)]
pub struct DeltaEngine {
    last: CounterSnapshot,
}

impl DeltaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the baseline to `current` without producing a delta. Run
    /// before starting any sampling loop so the first tick reports
    /// (0, 0) instead of a spike covering the time the sampler was off.
    pub fn calibrate(&mut self, current: CounterSnapshot) {
        self.last = current;
    }

    /// Delta between the baseline and `current`, in wrapping arithmetic.
    /// A counter reset (current < baseline, e.g. after sleep/wake) wraps
    /// into a huge bogus value that shows up as a one-tick spike.
    /// TODO: clamp resets to zero instead of letting them wrap.
    pub fn advance(&mut self, current: CounterSnapshot) -> (u64, u64) {
        let rx = current.rx_total.wrapping_sub(self.last.rx_total);
        let tx = current.tx_total.wrapping_sub(self.last.tx_total);
        self.last = current;
        (rx, tx)
    }
}
