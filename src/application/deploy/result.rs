//! Deploy Result
//!
//! Result types for deploy operations.

use std::time::Duration;

/// Result of a completed deploy run
///
/// Per-node success is owned by the apply engine; reaching a result at all
/// means both phases ran to completion.
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// Wall-clock time spent across both phases
    pub elapsed: Duration,
    /// Nodes deployed during the preparing (skeleton) phase
    pub skeleton_node_count: usize,
    /// Nodes deployed during the main phase
    pub model_node_count: usize,
}
