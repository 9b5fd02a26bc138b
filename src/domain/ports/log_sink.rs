//! Logging Sink Port
//!
//! One line of text at a time, no levels, no structured fields. The sink is
//! injected at construction so multiple orchestrators can run independently
//! in tests without capturing shared output.

/// Trait for receiving log lines
pub trait LogSink: Send + Sync {
    fn line(&self, line: &str);
}

/// Default sink: writes each line to standard output
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn line(&self, line: &str) {
        println!("{line}");
    }
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn line(&self, line: &str) {
        self(line)
    }
}
