//! Domain Services
//!
//! Stateless, pure operations on model trees.
//!
//! - `skeleton` - container skeleton extraction (preparing-phase model)
//! - `incremental` - persisted-work identity derivation and tagging

pub mod incremental;
pub mod skeleton;

pub use incremental::{
    incremental_identity, preparing_identity, tag_preparing_identity, PERSISTENCE_MODEL_ID_KEY,
};
pub use skeleton::extract_skeleton;
