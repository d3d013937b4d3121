//! Run-to-completion driver for the MRFO engine.

use crate::config::MrfoConfig;
use crate::engine::MrfoEngine;
use crate::error::Result;
use crate::types::ObjectiveFunction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an MRFO optimization run.
#[derive(Debug, Clone)]
pub struct MrfoResult {
    /// The best point found during the entire run.
    pub best: Vec<f64>,

    /// Fitness of the best point.
    pub best_fitness: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness after initialization and after each iteration.
    pub fitness_history: Vec<f64>,
}

/// Executes the full MRFO loop.
///
/// # Usage
///
/// ```
/// use mrfo::{functions::Ackley, MrfoConfig, MrfoRunner};
///
/// let config = MrfoConfig::new(30, 2, 100, -10.0, 10.0)
///     .unwrap()
///     .with_seed(42);
/// let result = MrfoRunner::run(Ackley::default(), &config).unwrap();
/// assert_eq!(result.iterations, 100);
/// ```
pub struct MrfoRunner;

impl MrfoRunner {
    /// Runs the optimization to termination.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn run<F: ObjectiveFunction>(objective: F, config: &MrfoConfig) -> Result<MrfoResult> {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop
    /// stops before the next iteration and returns the best solution
    /// found so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn run_with_cancel<F: ObjectiveFunction>(
        objective: F,
        config: &MrfoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<MrfoResult> {
        let mut engine = MrfoEngine::new(config.clone(), objective)?;
        engine.initialize();

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(engine.best_fitness());

        let mut cancelled = false;
        while !engine.is_done() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            engine.step();
            fitness_history.push(engine.best_fitness());
        }

        Ok(MrfoResult {
            best: engine.best_solution().to_vec(),
            best_fitness: engine.best_fitness(),
            iterations: engine.current_iteration(),
            cancelled,
            fitness_history,
        })
    }
}
