//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain filtering or rendering rules (those live in Domain
//!   and Presentation)
//! - Sequences the external collaborators through their ports

pub mod deploy;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
