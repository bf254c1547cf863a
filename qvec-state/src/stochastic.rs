//! Trajectory-sampled noise application
//!
//! Applies a noise channel to a statevector by sampling a single Kraus
//! branch per qubit and renormalizing: the single-shot trajectory
//! picture of an open quantum system. The input state is never mutated;
//! every call returns a fresh, normalized statevector. Repeated calls
//! with the same input legitimately differ - the randomness is the
//! point, and it always comes from the caller's generator.

use crate::error::{Result, StateError};
use crate::kernels;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use qvec_core::noise::{MonteCarloSampler, TrajectoryOp};
use rand::Rng;

const PAULI_Y: kernels::Matrix2 = [
    [Complex64::new(0.0, 0.0), Complex64::new(0.0, -1.0)],
    [Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)],
];

const Z_DIAGONAL: [Complex64; 2] = [Complex64::new(1.0, 0.0), Complex64::new(-1.0, 0.0)];

/// Apply one sampled branch of a channel trajectory to a single qubit
fn apply_branch(state: &mut StateVector, branch: TrajectoryOp, qubit: usize) {
    match branch {
        TrajectoryOp::Identity => {}
        TrajectoryOp::PauliX => {
            kernels::apply_pauli_x(qubit, state.amplitudes_mut(), false);
        }
        TrajectoryOp::PauliY => {
            kernels::apply_single_qubit(&PAULI_Y, qubit, state.amplitudes_mut(), false);
        }
        TrajectoryOp::PauliZ => {
            kernels::apply_diagonal(Z_DIAGONAL, qubit, state.amplitudes_mut(), false);
        }
        TrajectoryOp::JumpToZero => {
            apply_jump_to_zero(state, qubit);
        }
        TrajectoryOp::NoJump { factor } => {
            apply_no_jump(state, qubit, factor);
        }
    }
}

/// Amplitude-damping jump: K₁ = [[0, √γ], [0, 0]]
///
/// Moves each |1⟩ amplitude onto its |0⟩ partner, then renormalizes.
/// If the qubit carries no |1⟩ weight the jump cannot physically occur
/// and the state is left unchanged.
fn apply_jump_to_zero(state: &mut StateVector, qubit: usize) {
    let mask = 1 << qubit;
    let excited: f64 = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(i, _)| i & mask != 0)
        .map(|(_, amp)| amp.norm_sqr())
        .sum();
    if excited < 1e-15 {
        return;
    }

    let amplitudes = state.amplitudes_mut();
    for i in 0..amplitudes.len() {
        if i & mask == 0 {
            amplitudes[i] = amplitudes[i | mask];
            amplitudes[i | mask] = Complex64::new(0.0, 0.0);
        }
    }
    state.normalize();
}

/// Amplitude-damping no-jump: K₀ = [[1, 0], [0, √(1-γ)]], renormalized
fn apply_no_jump(state: &mut StateVector, qubit: usize, factor: f64) {
    let mask = 1 << qubit;
    for (i, amp) in state.amplitudes_mut().iter_mut().enumerate() {
        if i & mask != 0 {
            *amp *= factor;
        }
    }
    state.normalize();
}

/// Apply a noise channel stochastically to every qubit of a state
///
/// Draws one independent trajectory branch per qubit, applies it, and
/// returns a fresh renormalized statevector. The input is untouched.
///
/// # Example
/// ```
/// use qvec_core::noise::DepolarizingChannel;
/// use qvec_state::{apply_stochastic, StateVector};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let state = StateVector::new(2).unwrap();
/// let channel = DepolarizingChannel::new(0.1).unwrap();
/// let mut rng = StdRng::seed_from_u64(11);
///
/// let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
/// assert!(noisy.is_normalized(1e-9));
/// ```
pub fn apply_stochastic<C, R>(state: &StateVector, channel: &C, rng: &mut R) -> Result<StateVector>
where
    C: MonteCarloSampler + ?Sized,
    R: Rng + ?Sized,
{
    let mut next = state.copy();
    for qubit in 0..state.num_qubits() {
        let branch = channel.sample_branch(rng.gen::<f64>());
        apply_branch(&mut next, branch, qubit);
    }
    next.normalize();
    Ok(next)
}

/// Apply a noise channel stochastically to a single qubit
///
/// # Errors
/// [`StateError::InvalidQubitIndex`] if the qubit is out of bounds
pub fn apply_stochastic_to_qubit<C, R>(
    state: &StateVector,
    channel: &C,
    qubit: usize,
    rng: &mut R,
) -> Result<StateVector>
where
    C: MonteCarloSampler + ?Sized,
    R: Rng + ?Sized,
{
    if qubit >= state.num_qubits() {
        return Err(StateError::InvalidQubitIndex {
            index: qubit,
            num_qubits: state.num_qubits(),
        });
    }

    let mut next = state.copy();
    let branch = channel.sample_branch(rng.gen::<f64>());
    apply_branch(&mut next, branch, qubit);
    next.normalize();
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qvec_core::noise::{AmplitudeDamping, BitFlip, DepolarizingChannel, PhaseFlip};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plus_state() -> StateVector {
        let mut state = StateVector::new(1).unwrap();
        state.apply_hadamard(0).unwrap();
        state
    }

    #[test]
    fn test_zero_probability_is_noop() {
        let state = plus_state();
        let channel = DepolarizingChannel::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
            for (a, b) in noisy.probabilities().iter().zip(state.probabilities()) {
                assert_relative_eq!(*a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_input_state_never_mutated() {
        let state = plus_state();
        let before = state.amplitudes().to_vec();
        let channel = BitFlip::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let _ = apply_stochastic(&state, &channel, &mut rng).unwrap();
        assert_eq!(state.amplitudes(), before.as_slice());
    }

    #[test]
    fn test_bit_flip_certain() {
        let state = StateVector::new(1).unwrap();
        let channel = BitFlip::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
        assert_relative_eq!(noisy.probabilities()[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_flip_certain_on_plus_state() {
        // Z|+⟩ = |−⟩: probabilities unchanged, relative phase flipped
        let state = plus_state();
        let channel = PhaseFlip::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
        assert_relative_eq!(noisy.probabilities()[0], 0.5, epsilon = 1e-12);
        assert!(noisy.amplitudes()[1].re < 0.0);
    }

    #[test]
    fn test_amplitude_damping_full_decay() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_pauli_x(0).unwrap();

        let channel = AmplitudeDamping::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
        assert_relative_eq!(noisy.probabilities()[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_amplitude_damping_zero_gamma_is_noop() {
        let state = plus_state();
        let channel = AmplitudeDamping::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(6);

        let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
        for (a, b) in noisy.probabilities().iter().zip(state.probabilities()) {
            assert_relative_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_jump_on_ground_state_is_noop() {
        // No |1⟩ weight: the decay branch cannot trigger
        let state = StateVector::new(1).unwrap();
        let channel = AmplitudeDamping::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
        assert_relative_eq!(noisy.probabilities()[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_output_always_normalized() {
        let mut state = StateVector::new(3).unwrap();
        state.apply_hadamard(0).unwrap();
        state.apply_cnot(0, 2).unwrap();

        let channel = DepolarizingChannel::new(0.7).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..50 {
            let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
            assert!(noisy.is_normalized(1e-9));
        }
    }

    #[test]
    fn test_full_depolarizing_uniform_marginal() {
        // With p=1 each trial applies a uniformly random Pauli, so the
        // |0⟩-state marginal averages to 1/2 over many trials.
        let state = StateVector::new(1).unwrap();
        let channel = DepolarizingChannel::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let trials = 4000;
        let mut excited = 0.0;
        for _ in 0..trials {
            let noisy = apply_stochastic(&state, &channel, &mut rng).unwrap();
            excited += noisy.probabilities()[1];
        }
        let mean = excited / trials as f64;
        assert!((mean - 0.5).abs() < 0.05, "marginal {} not near 0.5", mean);
    }

    #[test]
    fn test_single_qubit_targeting() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_pauli_x(0).unwrap(); // |01⟩

        let channel = BitFlip::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(10);

        let noisy = apply_stochastic_to_qubit(&state, &channel, 1, &mut rng).unwrap();
        // Only qubit 1 flipped: |01⟩ -> |11⟩
        assert_relative_eq!(noisy.probabilities()[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_target_out_of_range() {
        let state = StateVector::new(1).unwrap();
        let channel = BitFlip::new(0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let result = apply_stochastic_to_qubit(&state, &channel, 3, &mut rng);
        assert!(matches!(
            result,
            Err(StateError::InvalidQubitIndex { .. })
        ));
    }
}
