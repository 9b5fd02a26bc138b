//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer. The real apply
//! engine, session/connection layer and output wiring live outside this
//! crate and plug in here.

pub mod apply_engine;
pub mod log_sink;

pub use apply_engine::{
    ApplyEngine, ApplyError, IncrementalOptions, NodeEventSink, NodeProcessed, NoopEventSink,
    TargetHandleProvider,
};
pub use log_sink::{LogSink, StdoutSink};
