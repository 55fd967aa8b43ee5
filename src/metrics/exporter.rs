use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::BoxMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for container metrics snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped directly or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<BoxMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &BoxMetricsSnapshot) {
        let counters = [
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_rejected_total", snapshot.insert_rejected),
            ("remove_calls_total", snapshot.remove_calls),
            ("remove_empty_total", snapshot.remove_empty),
            ("peek_calls_total", snapshot.peek_calls),
            ("peek_empty_total", snapshot.peek_empty),
            ("clear_calls_total", snapshot.clear_calls),
            ("grow_events_total", snapshot.grow_events),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", &self.metric_name(suffix), value);
        }

        let gauges = [
            ("len", snapshot.len),
            ("capacity", snapshot.capacity),
            ("max_size", snapshot.max_size),
        ];
        for (suffix, value) in gauges {
            self.write_metric("gauge", &self.metric_name(suffix), value as u64);
        }
    }
}
