//! Ready-made circuit constructors for stock algorithms
//!
//! Pure construction helpers: each returns an ordinary [`Circuit`] that
//! the caller runs through a [`qvec_sim::Simulator`] like any other.

use qvec_core::Circuit;

/// Build the two-qubit Bell-state circuit
///
/// H on qubit 0 followed by CNOT(0, 1) entangles the pair into
/// (|00⟩ + |11⟩)/√2.
///
/// # Example
/// ```
/// use qvec::bell_state;
///
/// let circuit = bell_state();
/// assert_eq!(circuit.num_qubits(), 2);
/// assert_eq!(circuit.len(), 2);
/// ```
pub fn bell_state() -> Circuit {
    let mut circuit = Circuit::new(2);
    circuit
        .h(0)
        .and_then(|c| c.cx(0, 1))
        .expect("fixed 2-qubit construction is valid");
    circuit
}

/// Build an n-qubit GHZ-state circuit: (|0...0⟩ + |1...1⟩)/√2
///
/// # Panics
/// Panics if `num_qubits` is 0 (a circuit needs at least one qubit).
pub fn ghz_state(num_qubits: usize) -> Circuit {
    let mut circuit = Circuit::new(num_qubits);
    circuit.h(0).expect("qubit 0 exists");
    for q in 1..num_qubits {
        circuit.cx(q - 1, q).expect("chained targets are in range");
    }
    circuit
}

/// Build the two-qubit Grover search circuit for a marked basis state
///
/// One Grover iteration on two qubits lands the full amplitude on the
/// marked state: uniform superposition, a CZ-based oracle that flips the
/// phase of `marked`, then the diffusion operator.
///
/// # Panics
/// Panics if `marked` is not in 0..4.
///
/// # Example
/// ```
/// use qvec::{grover_search, Simulator, SimulatorConfig};
///
/// let circuit = grover_search(3);
/// let result = Simulator::new(SimulatorConfig::default()).run(&circuit).unwrap();
/// assert!((result.state.probabilities()[3] - 1.0).abs() < 1e-9);
/// ```
pub fn grover_search(marked: usize) -> Circuit {
    assert!(marked < 4, "marked state must be a 2-qubit basis index");

    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap().h(1).unwrap();

    // Oracle: conjugate CZ with X on the qubits whose marked bit is 0
    let flip0 = marked & 1 == 0;
    let flip1 = marked & 2 == 0;
    if flip0 {
        circuit.x(0).unwrap();
    }
    if flip1 {
        circuit.x(1).unwrap();
    }
    circuit.cz(0, 1).unwrap();
    if flip0 {
        circuit.x(0).unwrap();
    }
    if flip1 {
        circuit.x(1).unwrap();
    }

    // Diffusion: inversion about the mean
    circuit
        .h(0)
        .unwrap()
        .h(1)
        .unwrap()
        .x(0)
        .unwrap()
        .x(1)
        .unwrap()
        .cz(0, 1)
        .unwrap()
        .x(0)
        .unwrap()
        .x(1)
        .unwrap()
        .h(0)
        .unwrap()
        .h(1)
        .unwrap();

    circuit
}
