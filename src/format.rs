use crate::metrics::Metrics;

/// Multi-line tray tooltip body, one metric per line.
pub fn tooltip_text(metrics: &Metrics) -> String {
    format!(
        "CPU: {:.2}%\nMem: {:.2}%\nUpload: {:.2} KB/s\nDownload: {:.2} KB/s",
        metrics.cpu_percent, metrics.mem_percent, metrics.upload_kb_s, metrics.download_kb_s
    )
}

/// Tooltip body for a failed sampling pass.
pub fn tooltip_error(err: &impl std::fmt::Display) -> String {
    format!("Error: {err}")
}

/// The four formatted strings the overlay displays. Built fresh from each
/// sample; on a failed sample the previous set stays on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayFields {
    pub cpu: String,
    pub mem: String,
    pub upload: String,
    pub download: String,
}

impl OverlayFields {
    pub fn from_metrics(metrics: &Metrics) -> Self {
        OverlayFields {
            cpu: format!("{:.2} %", metrics.cpu_percent),
            mem: format!("{:.2} %", metrics.mem_percent),
            upload: format!("{:.2} KB/s", metrics.upload_kb_s),
            download: format!("{:.2} KB/s", metrics.download_kb_s),
        }
    }
}

impl Default for OverlayFields {
    /// Zero readings, matching the overlay before its first refresh.
    fn default() -> Self {
        Self::from_metrics(&Metrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metrics {
        Metrics {
            cpu_percent: 12.5,
            mem_percent: 67.8,
            upload_kb_s: 0.0,
            download_kb_s: 1536.5,
        }
    }

    #[test]
    fn tooltip_lists_all_four_metrics() {
        let text = tooltip_text(&sample());
        assert_eq!(
            text,
            "CPU: 12.50%\nMem: 67.80%\nUpload: 0.00 KB/s\nDownload: 1536.50 KB/s"
        );
    }

    #[test]
    fn tooltip_error_carries_the_message() {
        insta::assert_snapshot!(tooltip_error(&"memory totals unavailable"), @"Error: memory totals unavailable");
    }

    #[test]
    fn overlay_fields_use_two_decimal_places() {
        let fields = OverlayFields::from_metrics(&sample());
        insta::assert_snapshot!(fields.cpu, @"12.50 %");
        insta::assert_snapshot!(fields.mem, @"67.80 %");
        insta::assert_snapshot!(fields.upload, @"0.00 KB/s");
        insta::assert_snapshot!(fields.download, @"1536.50 KB/s");
    }

    #[test]
    fn default_fields_read_zero() {
        let fields = OverlayFields::default();
        assert_eq!(fields.cpu, "0.00 %");
        assert_eq!(fields.download, "0.00 KB/s");
    }
}
