//! Error types for Metadeploy
//!
//! Uses `thiserror` for library errors. Failures raised by the apply engine
//! are wrapped, never caught or retried: the orchestrator is a fail-fast
//! sequencer and surfaces the triggering error verbatim to the caller.

use thiserror::Error;

use crate::domain::ports::ApplyError;
use crate::domain::services::PERSISTENCE_MODEL_ID_KEY;

/// Result type alias for Metadeploy operations
pub type MetaDeployResult<T> = Result<T, MetaDeployError>;

/// Main error type for Metadeploy operations
#[derive(Error, Debug)]
pub enum MetaDeployError {
    /// Incremental mode requested without a persisted-work identifier
    #[error("incremental provisioning requested but the root property bag has no '{}' entry", PERSISTENCE_MODEL_ID_KEY)]
    MissingIncrementalId,

    /// Failure raised by the apply engine or the handle provider
    #[error("apply engine failure: {0}")]
    Apply(#[from] ApplyError),
}
