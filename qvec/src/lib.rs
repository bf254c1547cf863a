//! qvec: a dense statevector quantum-circuit simulator
//!
//! This umbrella crate re-exports the public API of the engine crates:
//!
//! - [`qvec_core`]: circuits, gates, noise channels, ASCII rendering
//! - [`qvec_gates`]: gate matrices and per-kind action lookup
//! - [`qvec_state`]: the statevector, sampling, stochastic noise
//! - [`qvec_sim`]: the circuit executor
//!
//! plus ready-made circuit constructors for a few stock algorithms.
//!
//! # Example
//!
//! ```
//! use qvec::{bell_state, Simulator, SimulatorConfig};
//!
//! let circuit = bell_state();
//! let simulator = Simulator::new(SimulatorConfig::default().with_seed(42));
//! let result = simulator.run_and_sample(&circuit).unwrap();
//!
//! let counts = result.measurements.unwrap();
//! assert_eq!(counts.get("01") + counts.get("10"), 0);
//! ```

pub mod algorithms;

pub use algorithms::{bell_state, ghz_state, grover_search};

pub use qvec_core::ascii::{render, render_with_config, AsciiConfig};
pub use qvec_core::noise::{
    AmplitudeDamping, BitFlip, DepolarizingChannel, KrausOperator, MonteCarloSampler,
    NoiseChannel, PhaseDamping, PhaseFlip, TrajectoryOp,
};
pub use qvec_core::{Circuit, Complex64, GateKind, GateOp, QuantumError, QubitId};
pub use qvec_gates::{
    diagonal_elements, matrices, single_qubit_matrix, two_qubit_action, TwoQubitAction,
};
pub use qvec_sim::{
    ExecutionStatistics, MeasurementCounts, SimulationResult, Simulator, SimulatorConfig,
    SimulatorError,
};
pub use qvec_state::{
    apply_stochastic, apply_stochastic_to_qubit, SamplingResult, StateError, StateVector,
};
