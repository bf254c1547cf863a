//! Error types for statevector operations

use thiserror::Error;

/// Errors that can occur during statevector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Invalid state dimension
    #[error("Invalid state dimension {dimension}, expected a power of 2")]
    InvalidDimension { dimension: usize },

    /// State not normalized
    #[error("State vector not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },

    /// Amplitude buffer length mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Qubit count too large to allocate the amplitude buffer
    #[error("Cannot allocate a {num_qubits}-qubit state: limit is {max_qubits} qubits")]
    ResourceExhausted { num_qubits: usize, max_qubits: usize },
}

/// Result type for statevector operations
pub type Result<T> = std::result::Result<T, StateError>;
