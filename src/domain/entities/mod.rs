//! Core domain entities

pub mod model;

pub use model::{Definition, ModelNode, ModelTree, NodeKind};
