//! Domain Layer
//!
//! The pure core of the orchestrator - no I/O, no target-environment types.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Definition, ModelNode, ModelTree)
//! - `value_objects/` - Immutable value types (Scope)
//! - `services/` - Domain services (skeleton extraction, incremental identity)
//! - `ports/` - Interface definitions for the external collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches a live target directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - The apply engine, target handles and logging
//!    are reached exclusively through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
