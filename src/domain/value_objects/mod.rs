//! Value Objects
//!
//! Immutable value types shared across the domain.

pub mod scope;

pub use scope::Scope;
