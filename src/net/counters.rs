use sysinfo::Networks;

/// Cumulative interface totals since boot. Monotonically increasing in
/// normal operation, but may fall back to near zero when an interface
/// restarts or the machine wakes from sleep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub rx_total: u64,
    pub tx_total: u64,
}

/// Source of cumulative byte counters. Reads never fail: a source that
/// cannot enumerate interfaces reports zero totals and the next good
/// read resumes normal deltas.
pub trait CounterSource {
    fn read_totals(&mut self) -> CounterSnapshot;
}

/// Interface names ignored when summing totals.
const LOOPBACK_NAMES: &[&str] = &["lo", "lo0"];

/// System counter source backed by the `sysinfo` interface list.
pub struct SysinfoCounters {
    networks: Networks,
}

impl SysinfoCounters {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl CounterSource for SysinfoCounters {
    fn read_totals(&mut self) -> CounterSnapshot {
        self.networks.refresh(true);

        // Sum across all non-loopback interfaces. An empty interface
        // list yields (0, 0), which downstream treats as an idle tick.
        let mut totals = CounterSnapshot::default();
        for (name, data) in self.networks.iter() {
            if LOOPBACK_NAMES.contains(&name.as_str()) {
                continue;
            }
            totals.rx_total += data.total_received();
            totals.tx_total += data.total_transmitted();
        }
        totals
    }
}
