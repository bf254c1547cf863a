//! Dense quantum statevector for the qvec simulator
//!
//! This crate owns the amplitude buffer and everything that reads from or
//! mutates it:
//!
//! - [`StateVector`]: the 2^n complex amplitude buffer with in-place gate
//!   application, probabilities and collapse operations
//! - [`kernels`]: the O(2^n) amplitude-loop kernels, with optional rayon
//!   sharding within a single gate application
//! - [`measurement`]: multi-shot sampling via Walker's alias method
//! - [`stochastic`]: trajectory-sampled noise application
//!
//! A `StateVector` is exclusively owned by its holder; branching
//! experiments take an explicit [`StateVector::copy`].
//!
//! # Example
//!
//! ```
//! use qvec_state::StateVector;
//!
//! let state = StateVector::new(2).unwrap();
//! assert_eq!(state.dimension(), 4);
//! assert!(state.is_normalized(1e-10));
//! ```

pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state_vector;
pub mod stochastic;

pub use error::{Result, StateError};
pub use measurement::SamplingResult;
pub use state_vector::{StateVector, MAX_QUBITS, NORM_TOLERANCE};
pub use stochastic::{apply_stochastic, apply_stochastic_to_qubit};
