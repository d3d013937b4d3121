//! Step-wise MRFO engine.
//!
//! [`MrfoEngine`] owns the population, the best-known solution, the
//! iteration counter, and the random stream. A driving loop calls
//! [`initialize`](MrfoEngine::initialize) once, then
//! [`step`](MrfoEngine::step) until [`is_done`](MrfoEngine::is_done),
//! then reads the result through the accessors. [`crate::runner`]
//! packages that loop for callers who do not need per-step control.

use crate::config::MrfoConfig;
use crate::error::Result;
use crate::types::ObjectiveFunction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use tracing::info;

/// Manta Ray Foraging Optimization engine.
///
/// Each iteration moves every individual through two phases. The
/// foraging phase applies either cyclone or chain foraging, chosen by
/// a per-individual coin flip; the somersault phase then pivots the
/// individual around the best-known solution with a factor that
/// decays linearly from 2 to 0 over the run. Individual `i > 0` reads
/// the already-updated position of individual `i - 1` within the same
/// iteration, so the update order is part of the algorithm and must
/// stay sequential.
///
/// The best-known solution is an independent snapshot, never an alias
/// into the population, and is only overwritten by a strictly lower
/// finite fitness. Non-finite evaluations are ignored rather than
/// propagated.
///
/// # Examples
///
/// ```
/// use mrfo::{MrfoConfig, MrfoEngine};
///
/// let config = MrfoConfig::new(30, 2, 100, -10.0, 10.0)
///     .unwrap()
///     .with_seed(42);
/// let sphere = |x: &[f64]| -> f64 { x.iter().map(|v| v * v).sum() };
/// let mut engine = MrfoEngine::new(config, sphere).unwrap();
///
/// engine.initialize();
/// while !engine.is_done() {
///     engine.step();
/// }
/// assert!(engine.best_fitness() < 1.0);
/// ```
pub struct MrfoEngine<F: ObjectiveFunction> {
    config: MrfoConfig,
    objective: F,
    rng: StdRng,
    population: Vec<Vec<f64>>,
    best: Vec<f64>,
    best_fitness: f64,
    iteration: usize,
    initialized: bool,
}

impl<F: ObjectiveFunction> MrfoEngine<F> {
    /// Creates an engine from a validated configuration and an
    /// objective function.
    ///
    /// The random stream is seeded from `config.seed`, or from a
    /// fresh random seed when none is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: MrfoConfig, objective: F) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            config,
            objective,
            rng,
            population: Vec::new(),
            best: Vec::new(),
            best_fitness: f64::INFINITY,
            iteration: 0,
            initialized: false,
        })
    }

    /// Scatters the population uniformly over the search space and
    /// records the best of the initial individuals.
    ///
    /// Must be called once before the first [`step`](Self::step).
    /// Calling it again restarts the run: the iteration counter and
    /// best fitness are reset before any new evaluation happens, so
    /// nothing carries over from a previous run except the position
    /// of the random stream.
    pub fn initialize(&mut self) {
        self.iteration = 0;
        self.best_fitness = f64::INFINITY;

        let lo = self.config.search_space_min;
        let hi = self.config.search_space_max;
        let dimensions = self.config.dimensions;
        let rng = &mut self.rng;
        self.population = (0..self.config.population_size)
            .map(|_| (0..dimensions).map(|_| rng.random_range(lo..hi)).collect())
            .collect();

        self.best = vec![0.0; dimensions];
        for i in 0..self.population.len() {
            self.track_best(i);
        }
        self.initialized = true;
    }

    /// Runs one full iteration: every individual forages and
    /// somersaults, each phase followed by a fitness evaluation, and
    /// the iteration counter advances by one.
    ///
    /// Calling `step` before [`initialize`](Self::initialize), or
    /// after [`is_done`](Self::is_done) returns true, is a harmless
    /// no-op.
    pub fn step(&mut self) {
        if !self.initialized || self.is_done() {
            return;
        }

        let lo = self.config.search_space_min;
        let hi = self.config.search_space_max;
        let dimensions = self.config.dimensions;
        let max_iterations = self.config.max_iterations;
        let progress = self.iteration as f64 / max_iterations as f64;
        let somersault_factor = 2.0 * (1.0 - progress);

        for i in 0..self.population.len() {
            let r = self.rng.random_range(0.0..1.0);

            if r < 0.5 {
                // Cyclone foraging. Early in the run the reference
                // point is usually a random location (exploration);
                // late in the run it is the best-known solution. The
                // threshold reuses the phase-selection draw.
                let reference: Vec<f64> = if progress < r {
                    (0..dimensions)
                        .map(|_| self.rng.random_range(lo..hi))
                        .collect()
                } else {
                    self.best.clone()
                };
                for d in 0..dimensions {
                    let r1 = self.rng.random_range(0.0..1.0);
                    let beta = 2.0
                        * (r1 * (max_iterations - self.iteration + 1) as f64
                            / max_iterations as f64)
                            .exp()
                        * (2.0 * PI * r1).sin();
                    let x = self.population[i][d];
                    let toward = if i == 0 {
                        reference[d] - x
                    } else {
                        self.population[i - 1][d] - x
                    };
                    let next = x + r1 * toward + beta * (reference[d] - x);
                    self.population[i][d] = next.clamp(lo, hi);
                }
            } else {
                // Chain foraging: follow the predecessor (or the best,
                // for the head of the chain) plus a pull toward the best.
                for d in 0..dimensions {
                    let rc: f64 = self.rng.random_range(0.0..1.0);
                    let alpha = 2.0 * rc * rc.ln().abs().sqrt();
                    let x = self.population[i][d];
                    let toward = if i == 0 {
                        self.best[d] - x
                    } else {
                        self.population[i - 1][d] - x
                    };
                    let next = x + rc * toward + alpha * (self.best[d] - x);
                    self.population[i][d] = next.clamp(lo, hi);
                }
            }
            self.track_best(i);

            // Somersault around the best-known solution.
            for d in 0..dimensions {
                let u1 = self.rng.random_range(0.0..1.0);
                let u2 = self.rng.random_range(0.0..1.0);
                let x = self.population[i][d];
                let next = x + somersault_factor * (u1 * self.best[d] - u2 * x);
                self.population[i][d] = next.clamp(lo, hi);
            }
            self.track_best(i);
        }

        if self.config.log_progress {
            info!(
                "iteration {:>4}  best_fitness={:.6e}  best={:?}",
                self.iteration, self.best_fitness, self.best
            );
        }
        self.iteration += 1;
    }

    /// Whether the iteration budget is exhausted.
    pub fn is_done(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }

    /// The best point found so far.
    pub fn best_solution(&self) -> &[f64] {
        &self.best
    }

    /// The fitness of the best point found so far.
    ///
    /// `f64::INFINITY` until the first finite evaluation.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Number of completed iterations.
    pub fn current_iteration(&self) -> usize {
        self.iteration
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &MrfoConfig {
        &self.config
    }

    /// Evaluate individual `i` and record it as the new best on
    /// strict improvement. Non-finite fitness never improves.
    fn track_best(&mut self, i: usize) {
        let fitness = self.objective.evaluate(&self.population[i]);
        if fitness.is_finite() && fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best.copy_from_slice(&self.population[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Sphere;
    use proptest::prelude::*;

    fn sphere_config(max_iterations: usize) -> MrfoConfig {
        MrfoConfig::new(30, 2, max_iterations, -10.0, 10.0)
            .unwrap()
            .with_seed(42)
    }

    #[test]
    fn test_sphere_convergence() {
        let mut engine = MrfoEngine::new(sphere_config(200), Sphere).unwrap();
        engine.initialize();
        while !engine.is_done() {
            engine.step();
        }

        assert!(
            engine.best_fitness() < 1e-3,
            "expected fitness < 1e-3 for 2D sphere, got {}",
            engine.best_fitness()
        );
        for &x in engine.best_solution() {
            assert!(x.abs() < 1e-2, "expected coordinate near 0, got {x}");
        }
    }

    #[test]
    fn test_termination_exactness() {
        let max_iterations = 50;
        let mut engine = MrfoEngine::new(sphere_config(max_iterations), Sphere).unwrap();
        engine.initialize();

        for _ in 0..max_iterations {
            assert!(!engine.is_done());
            engine.step();
        }

        assert!(engine.is_done());
        assert_eq!(engine.current_iteration(), max_iterations);
    }

    #[test]
    fn test_step_after_done_is_noop() {
        let mut engine = MrfoEngine::new(sphere_config(5), Sphere).unwrap();
        engine.initialize();
        while !engine.is_done() {
            engine.step();
        }

        let best = engine.best_solution().to_vec();
        let fitness = engine.best_fitness();
        engine.step();
        assert_eq!(engine.current_iteration(), 5);
        assert_eq!(engine.best_solution(), best.as_slice());
        assert!((engine.best_fitness() - fitness).abs() < 1e-15);
    }

    #[test]
    fn test_step_before_initialize_is_noop() {
        let mut engine = MrfoEngine::new(sphere_config(5), Sphere).unwrap();
        engine.step();
        assert_eq!(engine.current_iteration(), 0);
        assert!(engine.best_solution().is_empty());
    }

    #[test]
    fn test_best_fitness_monotone() {
        let mut engine = MrfoEngine::new(sphere_config(100), Sphere).unwrap();
        engine.initialize();

        let mut previous = engine.best_fitness();
        while !engine.is_done() {
            engine.step();
            assert!(
                engine.best_fitness() <= previous,
                "best fitness increased: {} > {}",
                engine.best_fitness(),
                previous
            );
            previous = engine.best_fitness();
        }
    }

    #[test]
    fn test_deterministic_given_seed() {
        let run = || {
            let mut engine = MrfoEngine::new(sphere_config(60), Sphere).unwrap();
            engine.initialize();
            let mut history = vec![engine.best_fitness()];
            while !engine.is_done() {
                engine.step();
                history.push(engine.best_fitness());
            }
            history
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_reinitialize_restarts_run() {
        let mut engine = MrfoEngine::new(sphere_config(20), Sphere).unwrap();
        engine.initialize();
        while !engine.is_done() {
            engine.step();
        }
        assert_eq!(engine.current_iteration(), 20);

        engine.initialize();
        assert_eq!(engine.current_iteration(), 0);
        assert!(!engine.is_done());
        assert!(engine.best_fitness().is_finite());
    }

    #[test]
    fn test_non_finite_fitness_never_improves() {
        let config = sphere_config(10);
        let mut engine = MrfoEngine::new(config, |_: &[f64]| f64::NAN).unwrap();
        engine.initialize();
        assert_eq!(engine.best_fitness(), f64::INFINITY);

        while !engine.is_done() {
            engine.step();
        }
        assert_eq!(engine.best_fitness(), f64::INFINITY);
    }

    #[test]
    fn test_single_individual_population() {
        let config = MrfoConfig::new(1, 3, 30, -5.0, 5.0).unwrap().with_seed(7);
        let mut engine = MrfoEngine::new(config, Sphere).unwrap();
        engine.initialize();
        while !engine.is_done() {
            engine.step();
        }
        assert!(engine.best_fitness().is_finite());
        assert_eq!(engine.best_solution().len(), 3);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let invalid = MrfoConfig {
            population_size: 0,
            dimensions: 2,
            max_iterations: 10,
            search_space_min: -1.0,
            search_space_max: 1.0,
            log_progress: false,
            seed: None,
        };
        assert!(MrfoEngine::new(invalid, Sphere).is_err());
    }

    #[test]
    fn test_best_is_snapshot_not_alias() {
        let config = sphere_config(3);
        let mut engine = MrfoEngine::new(config, Sphere).unwrap();
        engine.initialize();
        let best_after_init = engine.best_solution().to_vec();
        let fitness_after_init = engine.best_fitness();

        // The population moves every step; the recorded best must only
        // change through a strict improvement.
        engine.step();
        assert!(engine.best_fitness() <= fitness_after_init);
        if (engine.best_fitness() - fitness_after_init).abs() < 1e-15 {
            assert_eq!(engine.best_solution(), best_after_init.as_slice());
        }
    }

    proptest! {
        #[test]
        fn prop_bounds_and_monotonicity_hold_every_step(
            population_size in 1usize..12,
            dimensions in 1usize..5,
            max_iterations in 1usize..15,
            lo in -50.0f64..0.0,
            span in 0.5f64..100.0,
            seed in any::<u64>(),
        ) {
            let hi = lo + span;
            let config = MrfoConfig::new(population_size, dimensions, max_iterations, lo, hi)
                .unwrap()
                .with_seed(seed);
            let mut engine = MrfoEngine::new(config, Sphere).unwrap();
            engine.initialize();

            let mut previous = engine.best_fitness();
            while !engine.is_done() {
                engine.step();
                for individual in &engine.population {
                    for &x in individual {
                        prop_assert!(
                            (lo..=hi).contains(&x),
                            "coordinate {} outside [{}, {}]",
                            x,
                            lo,
                            hi
                        );
                    }
                }
                for &x in engine.best_solution() {
                    prop_assert!((lo..=hi).contains(&x));
                }
                prop_assert!(engine.best_fitness() <= previous);
                previous = engine.best_fitness();
            }
            prop_assert_eq!(engine.current_iteration(), max_iterations);
        }
    }
}
