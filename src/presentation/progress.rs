//! Progress line rendering
//!
//! Converts the apply engine's node-processed events into fixed-width status
//! lines:
//!
//! ```text
//! {marker}[{identity}] [{done}/{total}] - [{percent}%] - [{kind}] [{name}]
//! ```
//!
//! Counters are zero-padded to width 4, the percentage space-padded to
//! width 3. Values wider than their field keep only the last characters, so
//! a runaway counter truncates instead of breaking the column layout.

use std::sync::Arc;

use crate::domain::ports::{LogSink, NodeEventSink, NodeProcessed};

/// Renders one status line per node-processed event into a log sink
pub struct ProgressReporter {
    sink: Arc<dyn LogSink>,
    incremental: bool,
}

impl ProgressReporter {
    pub fn new(sink: Arc<dyn LogSink>, incremental: bool) -> Self {
        Self { sink, incremental }
    }

    /// Pure rendering, separated from the sink for testability
    pub fn render_line(&self, event: &NodeProcessed) -> String {
        let done = pad_left(&event.processed_count.to_string(), 4, '0');
        let total = pad_left(&event.total_count.to_string(), 4, '0');
        let percent = pad_left(
            &percent(event.processed_count, event.total_count).to_string(),
            3,
            ' ',
        );

        let marker = if self.incremental && event.skipped_by_incremental_policy {
            "[-]"
        } else {
            "[+]"
        };

        format!(
            "{marker}[{identity}] [{done}/{total}] - [{percent}%] - [{kind}] [{name}]",
            identity = event.owner_model_identity,
            kind = event.kind_name,
            name = event.display_name,
        )
    }
}

impl NodeEventSink for ProgressReporter {
    fn on_node_processed(&self, event: &NodeProcessed) {
        self.sink.line(&self.render_line(event));
    }
}

/// Percent complete, defined as 0 for an empty model
fn percent(processed: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (100.0 * processed as f64 / total as f64).round() as u64
}

/// Left-pad to `width`; keep the last `width` characters when longer
fn pad_left(value: &str, width: usize, fill: char) -> String {
    let mut padded: String = std::iter::repeat(fill).take(width).collect();
    padded.push_str(value);
    let chars: Vec<char> = padded.chars().collect();
    chars[chars.len() - width..].iter().collect()
}
