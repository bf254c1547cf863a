//! Error types for the simulator

use qvec_core::QuantumError;
use qvec_state::StateError;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Circuit is invalid or malformed
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(#[from] QuantumError),

    /// Too many qubits for the configured memory limit
    #[error("Too many qubits: circuit has {num_qubits}, max supported is {max_qubits}")]
    TooManyQubits {
        num_qubits: usize,
        max_qubits: usize,
    },

    /// Supplied initial state does not match the circuit's qubit count
    #[error(
        "Size mismatch: circuit has {circuit_qubits} qubits, initial state has {state_qubits}"
    )]
    SizeMismatch {
        circuit_qubits: usize,
        state_qubits: usize,
    },

    /// Error from a statevector operation
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = SimulatorError::SizeMismatch {
            circuit_qubits: 3,
            state_qubits: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_from_quantum_error() {
        let err: SimulatorError = QuantumError::invalid_qubit(4, 2).into();
        assert!(matches!(err, SimulatorError::InvalidCircuit(_)));
    }

    #[test]
    fn test_from_state_error() {
        let err: SimulatorError = StateError::NotNormalized { norm: 0.5 }.into();
        assert!(matches!(err, SimulatorError::State(_)));
    }
}
