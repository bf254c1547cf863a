//! Error types for circuit construction and validation

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating quantum circuits
///
/// All of these are raised at construction time: a [`crate::Circuit`]
/// that was built without error is guaranteed executable.
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Duplicate qubit in a multi-qubit gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Missing, unexpected or malformed gate parameter
    #[error("Invalid parameter for gate '{gate}': {reason}")]
    InvalidParameter { gate: String, reason: String },

    /// Generic validation error (noise parameters, malformed operators)
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(gate: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            gate: gate.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_error() {
        let err = QuantumError::invalid_qubit(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_invalid_qubit_count_error() {
        let err = QuantumError::invalid_qubit_count("CX", 2, 1);
        let msg = format!("{}", err);
        assert!(msg.contains("CX"));
        assert!(msg.contains("requires 2 qubits"));
    }

    #[test]
    fn test_invalid_parameter_error() {
        let err = QuantumError::invalid_parameter("RX", "rotation gate requires an angle");
        let msg = format!("{}", err);
        assert!(msg.contains("RX"));
        assert!(msg.contains("angle"));
    }
}
