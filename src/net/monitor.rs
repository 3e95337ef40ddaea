use std::time::{Duration, Instant};

use crate::net::counters::CounterSource;
use crate::net::delta::DeltaEngine;
use crate::net::history::{Sample, SampleHistory};
use crate::net::rate::{self, EMPTY_ROW, PLACEHOLDER_TITLE};
use crate::net::sched::{Handle, Scheduler};

/// Both tick kinds fire at this fixed period.
pub const SAMPLE_PERIOD: Duration = Duration::from_secs(1);

/// Update modes, selected explicitly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No sampling at all; the status title freezes on the placeholder.
    Paused,
    /// Background sampling every second, drop-down open or not.
    Continuous,
    /// Sampling only while the drop-down is open, starting from a fresh
    /// trace each time it opens.
    OnDemand,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Paused, Mode::Continuous, Mode::OnDemand]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Paused => "paused",
            Mode::Continuous => "continuous",
            Mode::OnDemand => "on-demand",
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => Mode::Continuous,
            2 => Mode::OnDemand,
            _ => Mode::Paused,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Mode::Paused => 0,
            Mode::Continuous => 1,
            Mode::OnDemand => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    /// Continuous-mode sampling tick; runs whether or not the drop-down
    /// is open.
    Background,
    /// Drop-down tick: repaints rows, and in on-demand mode also takes
    /// the sample that feeds them.
    MenuDisplay,
}

/// Owns the sampling state machine: delta baseline, rolling history,
/// the timer set, and the status title. Constructed once at startup;
/// `shutdown` deregisters all timers.
pub struct Monitor {
    mode: Mode,
    engine: DeltaEngine,
    history: SampleHistory,
    sched: Scheduler<Tick>,
    background: Option<Handle>,
    menu: Option<Handle>,
    title: String,
}

impl Monitor {
    pub fn new() -> Self {
        Self {
            mode: Mode::Paused,
            engine: DeltaEngine::new(),
            history: SampleHistory::new(),
            sched: Scheduler::new(),
            background: None,
            menu: None,
            title: PLACEHOLDER_TITLE.to_string(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Apply a user mode selection. Exit actions first (every live
    /// timer is cancelled), then the entry actions of the new mode.
    pub fn set_mode(&mut self, mode: Mode, now: Instant, source: &mut dyn CounterSource) {
        self.cancel_background();
        self.cancel_menu();
        self.mode = mode;

        match mode {
            Mode::Paused => {
                // History is deliberately left as-is; only on-demand
                // opens start from a clean trace.
                self.title = PLACEHOLDER_TITLE.to_string();
            }
            Mode::Continuous => {
                self.engine.calibrate(source.read_totals());
                self.background =
                    Some(self.sched.schedule_repeating(SAMPLE_PERIOD, now, Tick::Background));
            }
            Mode::OnDemand => {
                self.title = PLACEHOLDER_TITLE.to_string();
            }
        }
    }

    /// Drop-down opened. Fires on every open event, whatever the mode.
    pub fn menu_opened(&mut self, now: Instant, source: &mut dyn CounterSource) {
        match self.mode {
            // Rows stay as last populated.
            Mode::Paused => {}
            // Background tick already supplies samples; this tick only
            // paces row repaints.
            Mode::Continuous => {
                self.menu =
                    Some(self.sched.schedule_repeating(SAMPLE_PERIOD, now, Tick::MenuDisplay));
            }
            // Fresh trace per open: clear, re-baseline, and record one
            // immediate sample off the same snapshot so it reads (0, 0).
            Mode::OnDemand => {
                self.history.clear();
                let totals = source.read_totals();
                self.engine.calibrate(totals);
                let (rx, tx) = self.engine.advance(totals);
                self.history.append(Sample::now(rx, tx));
                self.menu =
                    Some(self.sched.schedule_repeating(SAMPLE_PERIOD, now, Tick::MenuDisplay));
            }
        }
    }

    /// Drop-down closed. The continuous background tick is unaffected.
    pub fn menu_closed(&mut self) {
        self.cancel_menu();
    }

    /// Run every tick that came due. Called from the event loop.
    pub fn poll(&mut self, now: Instant, source: &mut dyn CounterSource) {
        for tick in self.sched.poll(now) {
            self.on_tick(tick, source);
        }
    }

    fn on_tick(&mut self, tick: Tick, source: &mut dyn CounterSource) {
        match tick {
            Tick::Background => {
                let (rx, tx) = self.sample(source);
                self.title = rate::format_title(rx, tx);
            }
            Tick::MenuDisplay => {
                // On-demand is the only mode where the drop-down tick
                // samples; in continuous it repaints rows the background
                // tick already produced.
                if self.mode == Mode::OnDemand {
                    self.sample(source);
                }
            }
        }
    }

    fn sample(&mut self, source: &mut dyn CounterSource) -> (u64, u64) {
        let (rx, tx) = self.engine.advance(source.read_totals());
        self.history.append(Sample::now(rx, tx));
        (rx, tx)
    }

    /// Current status-bar title.
    pub fn current_title(&self) -> &str {
        &self.title
    }

    /// Drop-down rows, newest first, padded with `-` up to `max_rows`.
    pub fn history_rows(&self, max_rows: usize) -> Vec<String> {
        let mut rows: Vec<String> = self
            .history
            .snapshot_newest_first(max_rows)
            .iter()
            .map(rate::format_row)
            .collect();
        while rows.len() < max_rows {
            rows.push(EMPTY_ROW.to_string());
        }
        rows
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Deregister every timer. Run once on exit.
    pub fn shutdown(&mut self) {
        self.cancel_background();
        self.cancel_menu();
        debug_assert!(self.sched.is_empty());
    }

    fn cancel_background(&mut self) {
        if let Some(handle) = self.background.take() {
            self.sched.cancel(handle);
        }
    }

    fn cancel_menu(&mut self) {
        if let Some(handle) = self.menu.take() {
            self.sched.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::net::counters::CounterSnapshot;
    use crate::net::history::HISTORY_CAPACITY;

    /// Counter source replaying a fixed script of readings; the last
    /// reading repeats once the script runs out.
    struct ScriptedCounters {
        reads: VecDeque<CounterSnapshot>,
        last: CounterSnapshot,
    }

    impl ScriptedCounters {
        fn new(script: &[(u64, u64)]) -> Self {
            Self {
                reads: script
                    .iter()
                    .map(|&(rx, tx)| CounterSnapshot {
                        rx_total: rx,
                        tx_total: tx,
                    })
                    .collect(),
                last: CounterSnapshot::default(),
            }
        }
    }

    impl CounterSource for ScriptedCounters {
        fn read_totals(&mut self) -> CounterSnapshot {
            if let Some(snap) = self.reads.pop_front() {
                self.last = snap;
            }
            self.last
        }
    }

    #[test]
    fn continuous_tick_samples_and_formats_title() {
        let mut source = ScriptedCounters::new(&[(0, 0), (102_400, 51_200)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        assert_eq!(monitor.history_len(), 0);

        monitor.poll(t0 + SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.current_title(), "↓100KB ↑\u{a0}50KB");
        assert_eq!(monitor.history_len(), 1);

        let rows = monitor.history_rows(HISTORY_CAPACITY);
        assert_eq!(rows.len(), HISTORY_CAPACITY);
        assert!(rows[0].contains("↓ 100.0 KB/s"));
        assert_eq!(rows[1], "-");
    }

    #[test]
    fn entering_continuous_calibrates_away_paused_traffic() {
        // Totals grew to 1 MB while paused; only bytes after the switch
        // count toward the first tick.
        let mut source = ScriptedCounters::new(&[(1_000_000, 1_000_000), (1_001_024, 1_000_512)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        monitor.poll(t0 + SAMPLE_PERIOD, &mut source);

        let rows = monitor.history_rows(1);
        assert!(rows[0].contains("↓ 1.0 KB/s"), "got: {}", rows[0]);
        assert!(rows[0].contains("↑ 512 B/s"), "got: {}", rows[0]);
    }

    #[test]
    fn pausing_freezes_title_and_keeps_history() {
        let mut source = ScriptedCounters::new(&[(0, 0), (2_048, 1_024)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        monitor.poll(t0 + SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 1);

        monitor.set_mode(Mode::Paused, t0 + SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.current_title(), PLACEHOLDER_TITLE);
        assert_eq!(monitor.history_len(), 1);

        // No timer left: time passing changes nothing.
        monitor.poll(t0 + 10 * SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 1);
    }

    #[test]
    fn paused_menu_open_is_inert() {
        let mut source = ScriptedCounters::new(&[]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.menu_opened(t0, &mut source);
        monitor.poll(t0 + 5 * SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 0);
        assert_eq!(monitor.current_title(), PLACEHOLDER_TITLE);
    }

    #[test]
    fn continuous_menu_tick_repaints_without_sampling() {
        let mut source = ScriptedCounters::new(&[(0, 0), (1_024, 0), (2_048, 0)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        monitor.menu_opened(t0, &mut source);

        // Both ticks fire each second; only the background one samples.
        monitor.poll(t0 + SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 1);
        monitor.poll(t0 + 2 * SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 2);
    }

    #[test]
    fn on_demand_opens_start_from_a_fresh_zero_trace() {
        let mut source =
            ScriptedCounters::new(&[(5_000, 5_000), (7_048, 5_512), (9_000, 9_000)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::OnDemand, t0, &mut source);
        assert_eq!(monitor.current_title(), PLACEHOLDER_TITLE);

        monitor.menu_opened(t0, &mut source);
        assert_eq!(monitor.history_len(), 1);
        let first = monitor.history_rows(1);
        assert!(first[0].contains("↓ 0 B/s"), "calibration sample: {}", first[0]);

        // One second later the drop-down tick takes a real sample.
        monitor.poll(t0 + SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 2);
        let rows = monitor.history_rows(2);
        assert!(rows[0].contains("↓ 2.0 KB/s"), "got: {}", rows[0]);
        // Title never leaves the placeholder in on-demand mode.
        assert_eq!(monitor.current_title(), PLACEHOLDER_TITLE);

        // Re-opening clears the previous trace and re-baselines.
        monitor.menu_closed();
        monitor.menu_opened(t0 + 2 * SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 1);
        let fresh = monitor.history_rows(1);
        assert!(fresh[0].contains("↓ 0 B/s"), "got: {}", fresh[0]);
    }

    #[test]
    fn closing_the_menu_stops_on_demand_sampling() {
        let mut source = ScriptedCounters::new(&[(0, 0)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::OnDemand, t0, &mut source);
        monitor.menu_opened(t0, &mut source);
        monitor.menu_closed();

        monitor.poll(t0 + 3 * SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 1);
    }

    #[test]
    fn closing_the_menu_leaves_continuous_sampling_running() {
        let mut source = ScriptedCounters::new(&[(0, 0), (1_024, 0)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        monitor.menu_opened(t0, &mut source);
        monitor.menu_closed();

        monitor.poll(t0 + SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 1);
    }

    #[test]
    fn history_rows_fill_to_capacity_and_stay_bounded() {
        let mut source = ScriptedCounters::new(&[(0, 0)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        for i in 1u32..=25 {
            monitor.poll(t0 + i * SAMPLE_PERIOD, &mut source);
        }
        assert_eq!(monitor.history_len(), HISTORY_CAPACITY);
        assert!(monitor
            .history_rows(HISTORY_CAPACITY)
            .iter()
            .all(|r| r != "-"));
    }

    #[test]
    fn shutdown_deregisters_every_timer() {
        let mut source = ScriptedCounters::new(&[(0, 0)]);
        let mut monitor = Monitor::new();
        let t0 = Instant::now();

        monitor.set_mode(Mode::Continuous, t0, &mut source);
        monitor.menu_opened(t0, &mut source);
        monitor.shutdown();

        monitor.poll(t0 + 5 * SAMPLE_PERIOD, &mut source);
        assert_eq!(monitor.history_len(), 0);
    }
}
