//! Deploy Use Case
//!
//! Orchestrates the two-phase deployment flow:
//! 1. Project the full model onto its container skeleton
//! 2. Tag the skeleton with the preparing-phase identity (when tracked)
//! 3. Deploy the skeleton so structural scaffolding exists first
//! 4. Deploy the full model
//! 5. Restore the engine's default mode and report elapsed time
//!
//! This use case is pure orchestration - tree filtering, identity derivation
//! and line rendering live in domain services and the presentation layer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::entities::ModelTree;
use crate::domain::ports::{ApplyEngine, LogSink, StdoutSink, TargetHandleProvider};
use crate::domain::services::{extract_skeleton, incremental_identity, tag_preparing_identity};
use crate::error::{MetaDeployError, MetaDeployResult};
use crate::presentation::ProgressReporter;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case - sequences the two-phase deployment protocol
///
/// Parameterized by its dependencies (ports), allowing for easy testing with
/// mock collaborators. `execute` takes `&mut self`, so the instance is
/// exclusive for the duration of a run; an overlapping deploy on the same
/// instance is rejected at compile time rather than guarded at runtime.
pub struct DeployUseCase<E, P>
where
    E: ApplyEngine,
    P: TargetHandleProvider<Handle = E::Handle>,
{
    engine: E,
    handles: P,
    logger: Arc<dyn LogSink>,
}

impl<E, P> DeployUseCase<E, P>
where
    E: ApplyEngine,
    P: TargetHandleProvider<Handle = E::Handle>,
{
    pub fn new(engine: E, handles: P) -> Self {
        Self {
            engine,
            handles,
            logger: Arc::new(StdoutSink),
        }
    }

    /// Replace the default stdout logger
    pub fn with_logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the deploy use case
    ///
    /// Blocks the caller until both phases have completed or the first
    /// failure. The main phase never starts when the preparing phase fails;
    /// the engine's default mode is restored exactly once on every path
    /// unless `options.restore_default_mode` is cleared. No duration summary
    /// is printed for an aborted run.
    pub fn execute(
        &mut self,
        tree: &ModelTree,
        options: &DeployOptions,
    ) -> MetaDeployResult<DeployResult> {
        let started = Instant::now();

        let base_identity = incremental_identity(tree.root()).map(str::to_owned);
        if options.incremental && base_identity.is_none() {
            return Err(MetaDeployError::MissingIncrementalId);
        }

        if options.incremental {
            self.engine.set_incremental_mode(&options.incremental_options);
        }

        let mut skeleton = extract_skeleton(tree);
        if let Some(base) = base_identity.as_deref() {
            tag_preparing_identity(&mut skeleton, base);
        }

        let outcome = self.run_phases(tree, &skeleton, options);
        if options.restore_default_mode {
            self.engine.set_default_mode();
        }
        outcome?;

        let elapsed = started.elapsed();
        self.log_summary(elapsed);

        Ok(DeployResult {
            elapsed,
            skeleton_node_count: skeleton.node_count(),
            model_node_count: tree.node_count(),
        })
    }

    fn run_phases(
        &mut self,
        tree: &ModelTree,
        skeleton: &ModelTree,
        options: &DeployOptions,
    ) -> MetaDeployResult<()> {
        let reporter = ProgressReporter::new(self.logger.clone(), options.incremental);

        self.logger.line("Provisioning preparing model");
        let handle = self.handles.handle_for(tree.scope())?;
        self.engine.deploy(&handle, skeleton, &reporter)?;

        self.logger.line("");
        self.logger.line("Provisioning main model");
        let handle = self.handles.handle_for(tree.scope())?;
        self.engine.deploy(&handle, tree, &reporter)?;

        Ok(())
    }

    fn log_summary(&self, elapsed: Duration) {
        let span = chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());
        let hours = span.num_hours() % 24;
        let minutes = span.num_minutes() % 60;
        let seconds = span.num_seconds() % 60;

        if span.num_days() > 0 {
            self.logger.line(&format!(
                "It took us {} days and {:02}:{:02}:{:02} hours",
                span.num_days(),
                hours,
                minutes,
                seconds
            ));
        } else {
            self.logger.line(&format!(
                "It took us {:02}:{:02}:{:02} hours",
                hours, minutes, seconds
            ));
        }

        self.logger.line("");
        self.logger.line("");
    }
}
