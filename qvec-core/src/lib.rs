//! Core types for the qvec quantum-circuit simulator
//!
//! This crate provides the fundamental types for building quantum circuits:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`GateKind`]: Closed enumeration of supported gate operations
//! - [`GateOp`]: A validated gate application
//! - [`Circuit`]: Append-only quantum circuit container
//! - [`noise`]: Noise-channel definitions and trajectory samplers
//!
//! # Example
//! ```
//! use qvec_core::Circuit;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(0).unwrap().cx(0, 1).unwrap();
//! assert_eq!(circuit.len(), 2);
//! ```

pub mod ascii;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod noise;
pub mod qubit;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{GateKind, GateOp};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in qvec
pub type Result<T> = std::result::Result<T, QuantumError>;
