//! Apply Engine Port
//!
//! Abstracts the engine that performs actual create/update operations
//! against a live target environment. The orchestrator only sequences trees
//! and consumes the engine's per-node events; success or failure of
//! individual nodes, retries included, belongs to the engine.

use crate::domain::entities::ModelTree;
use crate::domain::value_objects::Scope;

/// Error raised by the apply engine or the handle provider
#[derive(Debug, Clone)]
pub enum ApplyError {
    /// No usable handle for the requested scope
    Handle { scope: Scope, message: String },
    /// A node failed to apply
    Node { node: String, message: String },
    /// Engine-level failure (session, persistence backend, ...)
    Engine(String),
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Handle { scope, message } => {
                write!(f, "no handle for {scope} scope: {message}")
            }
            Self::Node { node, message } => write!(f, "node '{node}' failed: {message}"),
            Self::Engine(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Options for the engine's incremental provisioning mode
#[derive(Debug, Clone)]
pub struct IncrementalOptions {
    /// Auto-detect the persisted-state backend on the target
    pub auto_detect_persistence_storage: bool,
}

impl Default for IncrementalOptions {
    fn default() -> Self {
        Self {
            auto_detect_persistence_storage: true,
        }
    }
}

/// One per-node apply event, raised by the engine while a deploy runs
///
/// Rendered one line per event by
/// [`ProgressReporter`](crate::presentation::ProgressReporter).
#[derive(Debug, Clone)]
pub struct NodeProcessed {
    /// Nodes visited so far, this one included
    pub processed_count: u64,
    /// Nodes in the model being deployed
    pub total_count: u64,
    /// Definition type name of the node being processed
    pub kind_name: String,
    pub display_name: String,
    /// Persisted-work identifier of the owning model, empty when untracked
    pub owner_model_identity: String,
    /// True when persisted state shows the node as already applied
    pub skipped_by_incremental_policy: bool,
}

/// Trait for receiving node-processed events during a deploy call
///
/// Events arrive synchronously on the execution context that invoked the
/// deploy, strictly in engine visit order.
pub trait NodeEventSink: Send + Sync {
    fn on_node_processed(&self, event: &NodeProcessed);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl NodeEventSink for NoopEventSink {
    fn on_node_processed(&self, _event: &NodeProcessed) {
        // Do nothing
    }
}

/// Resolves a live target handle for a scope
pub trait TargetHandleProvider {
    type Handle;

    fn handle_for(&self, scope: Scope) -> Result<Self::Handle, ApplyError>;
}

/// The apply engine
///
/// `deploy` is synchronous and blocking: it returns only after every node of
/// the tree has been visited, raising one [`NodeProcessed`] event per visit.
/// Mode switches affect how subsequent `deploy` calls treat already-applied
/// state.
pub trait ApplyEngine {
    type Handle;

    /// Track persisted apply state and skip already-applied nodes
    fn set_incremental_mode(&mut self, options: &IncrementalOptions);

    /// Restore the engine's default (non-incremental) mode
    fn set_default_mode(&mut self);

    fn deploy(
        &mut self,
        handle: &Self::Handle,
        tree: &ModelTree,
        events: &dyn NodeEventSink,
    ) -> Result<(), ApplyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<NodeProcessed>>>,
    }

    impl NodeEventSink for RecordingEventSink {
        fn on_node_processed(&self, event: &NodeProcessed) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_node_processed(&NodeProcessed {
            processed_count: 1,
            total_count: 3,
            kind_name: "CollectionDefinition".to_string(),
            display_name: "Documents".to_string(),
            owner_model_identity: String::new(),
            skipped_by_incremental_policy: false,
        });

        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn incremental_options_default_to_auto_detection() {
        assert!(IncrementalOptions::default().auto_detect_persistence_storage);
    }

    #[test]
    fn apply_error_display() {
        let err = ApplyError::Node {
            node: "Documents".to_string(),
            message: "access denied".to_string(),
        };
        assert_eq!(err.to_string(), "node 'Documents' failed: access denied");
    }
}
