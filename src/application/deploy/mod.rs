//! Deploy Module
//!
//! Orchestrates the two-phase deployment flow.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use metadeploy::{DeployOptions, DeployUseCase};
//!
//! let mut use_case = DeployUseCase::new(engine, handles);
//! let result = use_case.execute(&tree, &DeployOptions::new().with_incremental(true))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
