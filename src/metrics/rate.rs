use std::time::Instant;

/// Cumulative transfer counters captured at one instant, summed across all
/// interfaces.
#[derive(Clone, Copy, Debug)]
pub struct CounterSnapshot {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub taken_at: Instant,
}

impl CounterSnapshot {
    pub fn new(bytes_sent: u64, bytes_recv: u64, taken_at: Instant) -> Self {
        CounterSnapshot {
            bytes_sent,
            bytes_recv,
            taken_at,
        }
    }
}

/// Derives KB/s rates from consecutive cumulative-counter snapshots.
///
/// Holds exactly one previous snapshot and advances it on every update. The
/// first update has no previous snapshot and reports 0 KB/s. A counter that
/// moves backwards (interface reset, counter wrap) clamps that delta to
/// zero rather than producing a negative rate; a zero elapsed interval
/// clamps both rates.
#[derive(Debug, Default)]
pub struct NetRateTracker {
    previous: Option<CounterSnapshot>,
}

impl NetRateTracker {
    pub fn new() -> Self {
        NetRateTracker { previous: None }
    }

    /// Returns `(upload_kb_s, download_kb_s)` over the interval since the
    /// previous snapshot.
    pub fn update(&mut self, current: CounterSnapshot) -> (f64, f64) {
        let Some(previous) = self.previous.replace(current) else {
            return (0.0, 0.0);
        };

        let elapsed = current
            .taken_at
            .duration_since(previous.taken_at)
            .as_secs_f64();
        if elapsed <= 0.0 {
            return (0.0, 0.0);
        }

        let sent = current.bytes_sent.saturating_sub(previous.bytes_sent);
        let recv = current.bytes_recv.saturating_sub(previous.bytes_recv);
        (
            sent as f64 / 1024.0 / elapsed,
            recv as f64 / 1024.0 / elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn first_update_reports_zero() {
        let mut tracker = NetRateTracker::new();
        let rates = tracker.update(CounterSnapshot::new(5_000_000, 9_000_000, Instant::now()));
        assert_eq!(rates, (0.0, 0.0));
    }

    #[test]
    fn steady_traffic_divides_by_elapsed_time() {
        let base = Instant::now();
        let mut tracker = NetRateTracker::new();
        tracker.update(CounterSnapshot::new(0, 0, base));

        // 2048 B sent and 51200 B received over two seconds.
        let rates = tracker.update(CounterSnapshot::new(2_048, 51_200, at(base, 2_000)));
        assert_eq!(rates, (1.0, 25.0));
    }

    #[test]
    fn interval_shorter_than_a_second_scales_up() {
        let base = Instant::now();
        let mut tracker = NetRateTracker::new();
        tracker.update(CounterSnapshot::new(0, 0, base));

        let rates = tracker.update(CounterSnapshot::new(1_024, 0, at(base, 500)));
        assert_eq!(rates, (2.0, 0.0));
    }

    #[test]
    fn counter_regression_clamps_to_zero() {
        let base = Instant::now();
        let mut tracker = NetRateTracker::new();
        tracker.update(CounterSnapshot::new(10_000, 10_000, base));

        // Sent counter reset (e.g. interface went away); recv kept growing.
        let rates = tracker.update(CounterSnapshot::new(100, 12_048, at(base, 1_000)));
        assert_eq!(rates, (0.0, 2.0));
    }

    #[test]
    fn zero_elapsed_interval_clamps_to_zero() {
        let base = Instant::now();
        let mut tracker = NetRateTracker::new();
        tracker.update(CounterSnapshot::new(0, 0, base));

        let rates = tracker.update(CounterSnapshot::new(4_096, 4_096, base));
        assert_eq!(rates, (0.0, 0.0));
    }

    #[test]
    fn tracker_advances_its_baseline_every_update() {
        let base = Instant::now();
        let mut tracker = NetRateTracker::new();
        tracker.update(CounterSnapshot::new(0, 0, base));
        tracker.update(CounterSnapshot::new(1_024, 1_024, at(base, 1_000)));

        // Third snapshot is compared against the second, not the first.
        let rates = tracker.update(CounterSnapshot::new(1_024, 3_072, at(base, 2_000)));
        assert_eq!(rates, (0.0, 2.0));
    }
}
