use std::thread;
use std::time::Duration;

use trayhud::metrics::{MetricSource, SystemSampler};

// Exercises the real sysinfo backend. Values depend on the host, so the
// assertions stick to ranges and the first-sample contract.
#[test]
fn real_sampler_produces_plausible_readings() {
    let mut sampler = SystemSampler::new();

    let first = sampler.sample().expect("first sample");
    assert_eq!(first.upload_kb_s, 0.0);
    assert_eq!(first.download_kb_s, 0.0);

    thread::sleep(Duration::from_millis(250));
    let second = sampler.sample().expect("second sample");

    for metrics in [first, second] {
        assert!(
            (0.0..=100.5).contains(&metrics.cpu_percent),
            "cpu out of range: {}",
            metrics.cpu_percent
        );
        assert!(
            metrics.mem_percent > 0.0 && metrics.mem_percent <= 100.0,
            "mem out of range: {}",
            metrics.mem_percent
        );
        assert!(metrics.upload_kb_s >= 0.0);
        assert!(metrics.download_kb_s >= 0.0);
    }
}
