//! Circuit executor for the qvec statevector simulator
//!
//! [`Simulator::run`] evolves a statevector through a circuit's gate
//! sequence in append order, dispatching each gate kind to the cheapest
//! kernel the gate library knows for it (diagonal scaling, index
//! permutation, or a dense matrix contraction). Execution is a blocking
//! call with no suspension points; a validated circuit cannot fail at
//! run time, only resource checks can.
//!
//! # Example
//!
//! ```
//! use qvec_core::Circuit;
//! use qvec_sim::{Simulator, SimulatorConfig};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(0).unwrap().cx(0, 1).unwrap();
//!
//! let simulator = Simulator::new(SimulatorConfig::default().with_seed(42));
//! let result = simulator.run(&circuit).unwrap();
//!
//! let probabilities = result.state.probabilities();
//! assert!((probabilities[0] - 0.5).abs() < 1e-9);
//! assert!((probabilities[3] - 0.5).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod simulator;
pub mod statistics;

pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use result::{MeasurementCounts, SimulationResult};
pub use simulator::Simulator;
pub use statistics::ExecutionStatistics;
