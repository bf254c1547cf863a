//! Trajectory sampling for stochastic noise application
//!
//! A pure-statevector engine cannot evolve the density matrix
//! ρ' = Σ K_i ρ K_i† exactly. Instead, each invocation of a channel
//! samples a single trajectory branch: one Kraus operator is chosen at
//! random and applied, and the state is renormalized. Averaging over
//! repeated invocations recovers the ensemble behavior with √N
//! convergence.

use super::channels::{AmplitudeDamping, BitFlip, DepolarizingChannel, PhaseDamping, PhaseFlip};

/// A single sampled branch of a noise trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrajectoryOp {
    /// No error
    Identity,
    /// Pauli X (bit flip)
    PauliX,
    /// Pauli Y
    PauliY,
    /// Pauli Z (phase flip)
    PauliZ,
    /// Decay to the ground state |0⟩ (amplitude damping jump)
    JumpToZero,
    /// No decay, but the |1⟩ component shrinks by this factor
    NoJump { factor: f64 },
}

/// Maps a uniform random value in [0, 1) to a trajectory branch
///
/// Implemented directly by the channel types, so the sampling
/// probabilities always agree with the channel's Kraus description.
pub trait MonteCarloSampler: Send + Sync {
    /// Sample which branch to apply
    ///
    /// `random_value` must be drawn uniformly from [0, 1); the caller
    /// owns the random source so repeated calls can be made reproducible
    /// with a seeded generator.
    fn sample_branch(&self, random_value: f64) -> TrajectoryOp;

    /// Number of distinct branches this channel can produce
    fn num_branches(&self) -> usize;
}

impl MonteCarloSampler for DepolarizingChannel {
    fn sample_branch(&self, random_value: f64) -> TrajectoryOp {
        // With probability p, replace the qubit by the maximally mixed
        // state: a uniformly random Pauli from {I, X, Y, Z}.
        let p = self.error_probability();
        if random_value < 1.0 - p {
            TrajectoryOp::Identity
        } else {
            let within = (random_value - (1.0 - p)) / p;
            if within < 0.25 {
                TrajectoryOp::Identity
            } else if within < 0.5 {
                TrajectoryOp::PauliX
            } else if within < 0.75 {
                TrajectoryOp::PauliY
            } else {
                TrajectoryOp::PauliZ
            }
        }
    }

    fn num_branches(&self) -> usize {
        4
    }
}

impl MonteCarloSampler for AmplitudeDamping {
    fn sample_branch(&self, random_value: f64) -> TrajectoryOp {
        if random_value < self.gamma() {
            TrajectoryOp::JumpToZero
        } else {
            TrajectoryOp::NoJump {
                factor: (1.0 - self.gamma()).sqrt(),
            }
        }
    }

    fn num_branches(&self) -> usize {
        2
    }
}

impl MonteCarloSampler for PhaseDamping {
    fn sample_branch(&self, random_value: f64) -> TrajectoryOp {
        if random_value < 1.0 - self.lambda() {
            TrajectoryOp::Identity
        } else {
            TrajectoryOp::PauliZ
        }
    }

    fn num_branches(&self) -> usize {
        2
    }
}

impl MonteCarloSampler for BitFlip {
    fn sample_branch(&self, random_value: f64) -> TrajectoryOp {
        if random_value < 1.0 - self.probability() {
            TrajectoryOp::Identity
        } else {
            TrajectoryOp::PauliX
        }
    }

    fn num_branches(&self) -> usize {
        2
    }
}

impl MonteCarloSampler for PhaseFlip {
    fn sample_branch(&self, random_value: f64) -> TrajectoryOp {
        if random_value < 1.0 - self.probability() {
            TrajectoryOp::Identity
        } else {
            TrajectoryOp::PauliZ
        }
    }

    fn num_branches(&self) -> usize {
        2
    }
}
