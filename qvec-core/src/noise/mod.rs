//! Quantum noise models and error channels
//!
//! This module provides the noise channels that model physical
//! decoherence on a single qubit:
//!
//! - **Depolarizing noise**: with probability p, the qubit is replaced by
//!   the maximally mixed state (a uniformly random Pauli in trajectory form)
//! - **Amplitude damping**: energy relaxation (T1 decay)
//! - **Phase damping**: dephasing (T2 decay)
//! - **Bit flip / phase flip**: single random X or Z errors
//!
//! Channels carry two descriptions: the exact Kraus operators (used for
//! validation via the completeness relation) and a trajectory sampler
//! ([`MonteCarloSampler`]) that maps a uniform random number to the branch
//! applied in a single stochastic shot. The statevector crate consumes
//! the sampler; the Kraus form is what makes the channel checkable.

pub mod channels;
pub mod monte_carlo;
pub mod types;

pub use channels::{AmplitudeDamping, BitFlip, DepolarizingChannel, PhaseDamping, PhaseFlip};
pub use monte_carlo::{MonteCarloSampler, TrajectoryOp};
pub use types::{KrausOperator, NoiseChannel};
