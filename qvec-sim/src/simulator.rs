//! Core simulator implementation

use qvec_core::{Circuit, GateKind, GateOp};
use qvec_gates::{diagonal_elements, single_qubit_matrix, two_qubit_action, TwoQubitAction};
use qvec_state::{kernels, StateVector, MAX_QUBITS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use crate::{
    config::SimulatorConfig,
    error::{Result, SimulatorError},
    result::{MeasurementCounts, SimulationResult},
    statistics::ExecutionStatistics,
};

/// Statevector circuit executor
///
/// Evolves a statevector through a circuit's gate sequence, strictly in
/// append order. Every gate costs O(2^n); the only optimization applied
/// is per-gate kernel selection (diagonal scaling and index permutation
/// instead of dense multiplies), which never changes final amplitudes
/// beyond floating-point rounding.
///
/// # Example
///
/// ```
/// use qvec_core::Circuit;
/// use qvec_sim::{Simulator, SimulatorConfig};
///
/// let mut circuit = Circuit::new(1);
/// circuit.x(0).unwrap();
///
/// let simulator = Simulator::new(SimulatorConfig::default());
/// let result = simulator.run(&circuit).unwrap();
/// assert!((result.state.probabilities()[1] - 1.0).abs() < 1e-12);
/// ```
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with the given configuration
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn new(config: SimulatorConfig) -> Self {
        config.validate().expect("Invalid simulator configuration");
        Self { config }
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run a circuit from the |0...0⟩ state
    ///
    /// Blocking: the full gate sequence completes before returning.
    ///
    /// # Errors
    /// [`SimulatorError::TooManyQubits`] if the amplitude buffer would
    /// exceed the configured memory limit or the engine's hard cap. A
    /// well-formed circuit cannot fail in any other way.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let total_start = Instant::now();

        let num_qubits = circuit.num_qubits();
        let max_qubits = self.max_qubits();
        if num_qubits > max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits,
            });
        }

        let init_start = Instant::now();
        let state = StateVector::new(num_qubits)?;
        let init_time = init_start.elapsed();

        self.evolve(circuit, state, total_start, init_time)
    }

    /// Run a circuit from a caller-supplied initial state
    ///
    /// # Errors
    /// [`SimulatorError::SizeMismatch`] if the state's qubit count
    /// differs from the circuit's.
    pub fn run_with_state(
        &self,
        circuit: &Circuit,
        initial_state: StateVector,
    ) -> Result<SimulationResult> {
        if initial_state.num_qubits() != circuit.num_qubits() {
            return Err(SimulatorError::SizeMismatch {
                circuit_qubits: circuit.num_qubits(),
                state_qubits: initial_state.num_qubits(),
            });
        }

        self.evolve(circuit, initial_state, Instant::now(), Duration::ZERO)
    }

    /// Run a circuit and sample `config.shots` measurement outcomes
    pub fn run_and_sample(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let result = self.run(circuit)?;
        let counts = self.sample(&result.state, self.config.shots)?;
        Ok(result.with_measurements(counts))
    }

    /// Sample measurement outcomes from a state
    ///
    /// Uses the configured seed when set, so counts reproduce exactly
    /// across calls; otherwise seeds from entropy.
    pub fn sample(&self, state: &StateVector, shots: usize) -> Result<MeasurementCounts> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let sampling = state.sample(shots, &mut rng)?;
        Ok(MeasurementCounts::from_sampling(
            &sampling,
            state.num_qubits(),
        ))
    }

    fn evolve(
        &self,
        circuit: &Circuit,
        mut state: StateVector,
        total_start: Instant,
        init_time: Duration,
    ) -> Result<SimulationResult> {
        let parallel = circuit.num_qubits() >= self.config.parallel_threshold;

        let gate_start = Instant::now();
        for op in circuit.operations() {
            self.apply_gate_op(op, &mut state, parallel)?;
        }
        let gate_time = gate_start.elapsed();

        let mut result = SimulationResult::new(state);

        if self.config.collect_statistics {
            result = result.with_statistics(ExecutionStatistics {
                gates_executed: circuit.len(),
                initialization_time: init_time,
                gate_application_time: gate_time,
                total_time: total_start.elapsed(),
                peak_memory_bytes: (1usize << circuit.num_qubits()) * 16,
            });
        }

        Ok(result)
    }

    /// Apply one gate operation, dispatching on the kind exhaustively
    fn apply_gate_op(&self, op: &GateOp, state: &mut StateVector, parallel: bool) -> Result<()> {
        let qubits = op.qubits();
        let amplitudes = state.amplitudes_mut();

        match op.kind() {
            GateKind::I => {}
            GateKind::X => kernels::apply_pauli_x(qubits[0].index(), amplitudes, parallel),
            GateKind::H => kernels::apply_hadamard(qubits[0].index(), amplitudes, parallel),
            kind @ (GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::Sdg
            | GateKind::T
            | GateKind::Tdg
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::Phase) => {
                let qubit = qubits[0].index();
                match diagonal_elements(kind, op.parameter()) {
                    Some(diagonal) => kernels::apply_diagonal(diagonal, qubit, amplitudes, parallel),
                    None => {
                        let matrix = single_qubit_matrix(kind, op.parameter())?;
                        kernels::apply_single_qubit(&matrix, qubit, amplitudes, parallel);
                    }
                }
            }
            kind @ (GateKind::Cx
            | GateKind::Cy
            | GateKind::Cz
            | GateKind::Swap
            | GateKind::ISwap) => {
                let a = qubits[0].index();
                let b = qubits[1].index();
                match two_qubit_action(kind)? {
                    TwoQubitAction::ControlledFlip => kernels::apply_cnot(a, b, amplitudes, parallel),
                    TwoQubitAction::ControlledPhase => kernels::apply_cz(a, b, amplitudes, parallel),
                    TwoQubitAction::Exchange => kernels::apply_swap(a, b, amplitudes, parallel),
                    TwoQubitAction::Matrix(matrix) => {
                        kernels::apply_two_qubit(matrix, a, b, amplitudes, parallel)
                    }
                }
            }
        }

        Ok(())
    }

    /// Largest qubit count the configured memory limit admits
    fn max_qubits(&self) -> usize {
        if self.config.memory_limit == 0 {
            MAX_QUBITS
        } else {
            // 16 bytes per Complex64 amplitude
            let max_amplitudes = self.config.memory_limit / 16;
            let by_memory = (max_amplitudes as f64).log2().floor() as usize;
            by_memory.min(MAX_QUBITS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_creation() {
        let simulator = Simulator::new(SimulatorConfig::default());
        assert_eq!(simulator.config().shots, 1024);
    }

    #[test]
    #[should_panic(expected = "Invalid simulator configuration")]
    fn test_invalid_config_panics() {
        Simulator::new(SimulatorConfig {
            shots: 0,
            ..Default::default()
        });
    }

    #[test]
    fn test_empty_circuit_yields_ground_state() {
        let simulator = Simulator::new(SimulatorConfig::default());
        let circuit = Circuit::new(1);

        let result = simulator.run(&circuit).unwrap();
        let probabilities = result.state.probabilities();
        assert!((probabilities[0] - 1.0).abs() < 1e-12);
        assert!(probabilities[1].abs() < 1e-12);
    }

    #[test]
    fn test_max_qubits_from_memory_limit() {
        let simulator = Simulator::new(
            SimulatorConfig::default().with_memory_limit(1024 * 1024), // 1 MiB
        );
        // 1 MiB / 16 bytes = 65536 amplitudes = 2^16
        assert_eq!(simulator.max_qubits(), 16);
    }

    #[test]
    fn test_too_many_qubits() {
        let simulator = Simulator::new(SimulatorConfig::default().with_memory_limit(64));
        let circuit = Circuit::new(4);

        let result = simulator.run(&circuit);
        assert!(matches!(
            result,
            Err(SimulatorError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_statistics_collection() {
        let simulator = Simulator::new(SimulatorConfig::default().with_statistics(true));
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().cx(0, 1).unwrap();

        let result = simulator.run(&circuit).unwrap();
        let stats = result.statistics.unwrap();
        assert_eq!(stats.gates_executed, 2);
        assert_eq!(stats.peak_memory_bytes, 4 * 16);
    }

    #[test]
    fn test_statistics_off_by_default() {
        let simulator = Simulator::new(SimulatorConfig::default());
        let mut circuit = Circuit::new(1);
        circuit.x(0).unwrap();

        let result = simulator.run(&circuit).unwrap();
        assert!(result.statistics.is_none());
    }
}
