//! Prometheus text exposition.
//!
//! Renders a registry snapshot in the plain-text format a scrape-based
//! collector pulls: one block per instrument, in registration order. This is
//! the only wire-level surface of the crate; the HTTP transport around it is
//! owned by the hosting service.

use crate::domain::InstrumentReading;

/// Renders a snapshot as Prometheus exposition text.
///
/// Counters render as a `# TYPE` line and a single sample. Histograms render
/// `_sum`, `_count`, one cumulative `_bucket` sample per boundary, and the
/// implicit `+Inf` bucket equal to the total count.
pub fn render(readings: &[InstrumentReading]) -> String {
    let mut out = String::new();

    for reading in readings {
        match reading {
            InstrumentReading::Counter(counter) => {
                out.push_str(&format!("# TYPE {} counter\n", counter.name));
                out.push_str(&format!("{} {}\n", counter.name, counter.value));
            }
            InstrumentReading::Histogram(histogram) => {
                out.push_str(&format!("# TYPE {} histogram\n", histogram.name));
                out.push_str(&format!("{}_sum {}\n", histogram.name, histogram.sum));
                out.push_str(&format!("{}_count {}\n", histogram.name, histogram.count));
                for bucket in &histogram.buckets {
                    out.push_str(&format!(
                        "{}_bucket{{le=\"{}\"}} {}\n",
                        histogram.name, bucket.upper_bound, bucket.cumulative_count
                    ));
                }
                out.push_str(&format!(
                    "{}_bucket{{le=\"+Inf\"}} {}\n",
                    histogram.name, histogram.count
                ));
            }
        }
    }

    out
}
