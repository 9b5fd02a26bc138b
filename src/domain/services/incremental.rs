//! Incremental provisioning identity
//!
//! A deployment run is correlated with previously persisted apply state
//! through an identifier carried in the root property bag. The skeleton
//! phase is tracked as its own unit of work under a derived identity, so a
//! re-run recognizes an already-applied skeleton independently of whether
//! the main phase completed.

use crate::domain::entities::{ModelNode, ModelTree};

/// Reserved property-bag key carrying the persisted-work identifier
pub const PERSISTENCE_MODEL_ID_KEY: &str = "_sys.IncrementalProvision.PersistenceStorageModelId";

/// Look up the persisted-work identifier on a model root
pub fn incremental_identity(root: &ModelNode) -> Option<&str> {
    root.property(PERSISTENCE_MODEL_ID_KEY)
}

/// Identity under which the skeleton phase persists its apply state
pub fn preparing_identity(base: &str) -> String {
    format!("Preparing: {base}")
}

/// Tag a derived skeleton with the preparing-phase identity.
///
/// Only ever applied to the skeleton copy; the caller's tree keeps its
/// original identity for the main phase.
pub fn tag_preparing_identity(skeleton: &mut ModelTree, base: &str) {
    skeleton
        .root_mut()
        .set_property(PERSISTENCE_MODEL_ID_KEY, preparing_identity(base));
}
