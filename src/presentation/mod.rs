//! Presentation Layer
//!
//! Human-readable rendering of deployment progress. No terminal handling or
//! argument parsing lives here; output goes through the injected
//! [`LogSink`](crate::domain::ports::LogSink).

pub mod progress;

pub use progress::ProgressReporter;
