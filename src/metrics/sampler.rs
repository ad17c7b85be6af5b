use std::time::Instant;

use sysinfo::{Networks, System};

use super::rate::{CounterSnapshot, NetRateTracker};
use super::{MetricSource, Metrics, SampleError};

/// sysinfo-backed sampler. Owns the `System` and `Networks` handles for the
/// process lifetime; CPU and network readings are deltas against the
/// previous refresh, so handles must not be recreated per tick.
pub struct SystemSampler {
    sys: System,
    networks: Networks,
    rates: NetRateTracker,
}

impl SystemSampler {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Prime the CPU baseline; usage is measured against the previous
        // refresh and would read zero without one.
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        SystemSampler {
            sys,
            networks: Networks::new_with_refreshed_list(),
            rates: NetRateTracker::new(),
        }
    }

    fn net_snapshot(&mut self) -> CounterSnapshot {
        self.networks.refresh(true);
        let mut sent = 0u64;
        let mut recv = 0u64;
        for (_name, data) in self.networks.iter() {
            sent += data.total_transmitted();
            recv += data.total_received();
        }
        CounterSnapshot::new(sent, recv, Instant::now())
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SystemSampler {
    fn sample(&mut self) -> Result<Metrics, SampleError> {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(SampleError::new("memory totals unavailable"));
        }

        let snapshot = self.net_snapshot();
        let (upload_kb_s, download_kb_s) = self.rates.update(snapshot);

        Ok(Metrics {
            cpu_percent: self.sys.global_cpu_usage(),
            mem_percent: (self.sys.used_memory() as f64 / total as f64 * 100.0) as f32,
            upload_kb_s,
            download_kb_s,
        })
    }
}
