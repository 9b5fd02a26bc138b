//! Metadeploy - two-phase deployment orchestrator for declarative structural models
//!
//! A structural model is an ordered tree of typed definition nodes describing
//! the desired structure of a target environment. Metadeploy sequences the
//! deployment of such a model in two phases: it first projects the model onto
//! its container skeleton and deploys that, so structural scaffolding exists
//! before dependent content, then deploys the full model. Both phases report
//! per-node progress and can be tracked incrementally against persisted apply
//! state.
//!
//! The engine that actually talks to the target environment, the session
//! layer, and persisted-state storage are external collaborators reached
//! through the ports in [`domain::ports`].

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use domain::entities::{Definition, ModelNode, ModelTree, NodeKind};
pub use domain::ports::{
    ApplyEngine, ApplyError, IncrementalOptions, LogSink, NodeEventSink, NodeProcessed,
    NoopEventSink, StdoutSink, TargetHandleProvider,
};
pub use domain::services::{
    extract_skeleton, incremental_identity, preparing_identity, tag_preparing_identity,
    PERSISTENCE_MODEL_ID_KEY,
};
pub use domain::value_objects::Scope;
pub use error::{MetaDeployError, MetaDeployResult};
pub use presentation::ProgressReporter;
