//! Manta Ray Foraging Optimization (MRFO).
//!
//! A population-based metaheuristic for minimizing a scalar objective
//! over a bounded continuous search space, modeled on the chain,
//! cyclone, and somersault foraging behaviors of manta rays.
//!
//! # Architecture
//!
//! - [`MrfoConfig`]: validated run parameters (population size,
//!   dimensionality, iteration budget, search space bounds).
//! - [`ObjectiveFunction`]: single-method trait the caller implements
//!   (or satisfies with a closure); the engine only ever calls it.
//! - [`MrfoEngine`]: the step-wise core. `initialize()` once, then
//!   `step()` until `is_done()`, then read the best solution.
//! - [`MrfoRunner`]: drives the engine to termination and returns an
//!   [`MrfoResult`] with the best solution and fitness history.
//! - [`functions`]: Ackley and Sphere benchmark objectives.
//!
//! # Example
//!
//! ```
//! use mrfo::{functions::Ackley, MrfoConfig, MrfoRunner};
//!
//! let config = MrfoConfig::new(30, 2, 200, -10.0, 10.0)
//!     .unwrap()
//!     .with_seed(42);
//! let result = MrfoRunner::run(Ackley::default(), &config).unwrap();
//! assert!(result.best_fitness < 1.0);
//! ```
//!
//! # References
//!
//! - Zhao, Zhang & Wang (2020), *Manta ray foraging optimization: An
//!   effective bio-inspired optimizer for engineering applications*,
//!   Engineering Applications of Artificial Intelligence 87.

pub mod config;
pub mod engine;
pub mod error;
pub mod functions;
pub mod runner;
pub mod types;

pub use config::MrfoConfig;
pub use engine::MrfoEngine;
pub use error::{MrfoError, Result};
pub use runner::{MrfoResult, MrfoRunner};
pub use types::ObjectiveFunction;
