pub mod rate;
pub mod sampler;

use thiserror::Error;

pub use sampler::SystemSampler;

/// One point-in-time system reading. Recomputed every metrics tick, shown,
/// and dropped; nothing here is ever persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// System-wide CPU utilisation, 0.0 to 100.0.
    pub cpu_percent: f32,
    /// Used physical memory as a share of total, 0.0 to 100.0.
    pub mem_percent: f32,
    /// Outbound network rate across all interfaces, KB/s.
    pub upload_kb_s: f64,
    /// Inbound network rate across all interfaces, KB/s.
    pub download_kb_s: f64,
}

/// A failed sampling pass. Non-fatal: the controller reports it in the
/// tooltip and the next tick retries from scratch.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SampleError {
    message: String,
}

impl SampleError {
    pub fn new(message: impl Into<String>) -> Self {
        SampleError {
            message: message.into(),
        }
    }
}

/// Source of metric samples. Production reads the OS through
/// [`SystemSampler`]; tests substitute scripted sequences.
pub trait MetricSource {
    fn sample(&mut self) -> Result<Metrics, SampleError>;
}
