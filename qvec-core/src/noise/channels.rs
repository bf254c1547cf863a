//! Implementations of the supported noise channels

use super::types::{KrausOperator, NoiseChannel};
use crate::{QuantumError, Result};
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

fn scaled_identity(factor: f64) -> KrausOperator {
    KrausOperator::single_qubit([
        [Complex64::new(factor, 0.0), ZERO],
        [ZERO, Complex64::new(factor, 0.0)],
    ])
}

fn scaled_pauli_x(factor: f64) -> KrausOperator {
    KrausOperator::single_qubit([
        [ZERO, Complex64::new(factor, 0.0)],
        [Complex64::new(factor, 0.0), ZERO],
    ])
}

fn scaled_pauli_y(factor: f64) -> KrausOperator {
    KrausOperator::single_qubit([
        [ZERO, Complex64::new(0.0, -factor)],
        [Complex64::new(0.0, factor), ZERO],
    ])
}

fn scaled_pauli_z(factor: f64) -> KrausOperator {
    KrausOperator::single_qubit([
        [Complex64::new(factor, 0.0), ZERO],
        [ZERO, Complex64::new(-factor, 0.0)],
    ])
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(QuantumError::ValidationError(format!(
            "{} must be in [0,1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Depolarizing noise channel
///
/// With probability p the qubit is replaced by the maximally mixed
/// state; with probability 1-p it is left unchanged. In trajectory form
/// the mixed-state branch is a uniformly random Pauli from {I, X, Y, Z},
/// so the effective branch probabilities are:
/// - identity: 1 - 3p/4
/// - X, Y, Z:  p/4 each
///
/// # Kraus Operators
/// ```text
/// K₀ = √(1-3p/4) I
/// K₁ = √(p/4) X
/// K₂ = √(p/4) Y
/// K₃ = √(p/4) Z
/// ```
///
/// # Example
/// ```
/// # use qvec_core::noise::DepolarizingChannel;
/// let channel = DepolarizingChannel::new(0.01).unwrap();
/// assert_eq!(channel.error_probability(), 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepolarizingChannel {
    /// Error probability p in [0, 1]
    error_probability: f64,
}

impl DepolarizingChannel {
    /// Create a new depolarizing channel
    ///
    /// # Errors
    /// Returns error if the probability is not in [0, 1]
    pub fn new(error_probability: f64) -> Result<Self> {
        check_unit_interval("Error probability", error_probability)?;
        Ok(Self { error_probability })
    }

    /// Get the error probability
    pub fn error_probability(&self) -> f64 {
        self.error_probability
    }
}

impl NoiseChannel for DepolarizingChannel {
    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let p = self.error_probability;
        let sqrt_identity = (1.0 - 0.75 * p).sqrt();
        let sqrt_pauli = (p / 4.0).sqrt();

        vec![
            scaled_identity(sqrt_identity),
            scaled_pauli_x(sqrt_pauli),
            scaled_pauli_y(sqrt_pauli),
            scaled_pauli_z(sqrt_pauli),
        ]
    }

    fn name(&self) -> &str {
        "depolarizing"
    }
}

/// Amplitude damping channel
///
/// Models energy relaxation (T1 decay): the excited state |1⟩ decays to
/// the ground state |0⟩ with probability γ.
///
/// For a qubit with T1 relaxation time, after time t:
/// γ = 1 - exp(-t/T1)
///
/// # Kraus Operators
/// ```text
/// K₀ = [[1, 0], [0, √(1-γ)]]
/// K₁ = [[0, √γ], [0, 0]]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AmplitudeDamping {
    /// Decay probability γ in [0, 1]
    gamma: f64,
}

impl AmplitudeDamping {
    /// Create a new amplitude damping channel
    ///
    /// # Errors
    /// Returns error if gamma is not in [0, 1]
    pub fn new(gamma: f64) -> Result<Self> {
        check_unit_interval("Gamma", gamma)?;
        Ok(Self { gamma })
    }

    /// Create from a T1 relaxation time and a gate duration
    ///
    /// Computes γ = 1 - exp(-gate_time/T1).
    pub fn from_t1(t1: f64, gate_time: f64) -> Result<Self> {
        if t1 <= 0.0 {
            return Err(QuantumError::ValidationError(
                "T1 must be positive".to_string(),
            ));
        }
        if gate_time < 0.0 {
            return Err(QuantumError::ValidationError(
                "Gate time must be non-negative".to_string(),
            ));
        }
        Self::new(1.0 - (-gate_time / t1).exp())
    }

    /// Get the decay probability
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl NoiseChannel for AmplitudeDamping {
    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let sqrt_gamma = self.gamma.sqrt();
        let sqrt_1_minus_gamma = (1.0 - self.gamma).sqrt();

        vec![
            KrausOperator::single_qubit([
                [ONE, ZERO],
                [ZERO, Complex64::new(sqrt_1_minus_gamma, 0.0)],
            ]),
            KrausOperator::single_qubit([
                [ZERO, Complex64::new(sqrt_gamma, 0.0)],
                [ZERO, ZERO],
            ]),
        ]
    }

    fn name(&self) -> &str {
        "amplitude_damping"
    }
}

/// Phase damping channel
///
/// Models pure dephasing (T2 decay): the qubit acquires a random phase
/// flip with probability λ without losing energy.
///
/// For a qubit with pure dephasing time T2, after time t:
/// λ = (1 - exp(-t/T2))/2
///
/// # Kraus Operators
/// ```text
/// K₀ = √(1-λ) I
/// K₁ = √λ Z
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhaseDamping {
    /// Dephasing probability λ in [0, 1]
    lambda: f64,
}

impl PhaseDamping {
    /// Create a new phase damping channel
    ///
    /// # Errors
    /// Returns error if lambda is not in [0, 1]
    pub fn new(lambda: f64) -> Result<Self> {
        check_unit_interval("Lambda", lambda)?;
        Ok(Self { lambda })
    }

    /// Create from a T2 dephasing time and a gate duration
    ///
    /// Computes λ = (1 - exp(-gate_time/T2))/2.
    pub fn from_t2(t2: f64, gate_time: f64) -> Result<Self> {
        if t2 <= 0.0 {
            return Err(QuantumError::ValidationError(
                "T2 must be positive".to_string(),
            ));
        }
        if gate_time < 0.0 {
            return Err(QuantumError::ValidationError(
                "Gate time must be non-negative".to_string(),
            ));
        }
        Self::new((1.0 - (-gate_time / t2).exp()) / 2.0)
    }

    /// Get the dephasing probability
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl NoiseChannel for PhaseDamping {
    fn kraus_operators(&self) -> Vec<KrausOperator> {
        vec![
            scaled_identity((1.0 - self.lambda).sqrt()),
            scaled_pauli_z(self.lambda.sqrt()),
        ]
    }

    fn name(&self) -> &str {
        "phase_damping"
    }
}

/// Bit flip channel
///
/// Applies a Pauli-X error with probability p.
///
/// # Kraus Operators
/// ```text
/// K₀ = √(1-p) I
/// K₁ = √p X
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitFlip {
    /// Flip probability p in [0, 1]
    probability: f64,
}

impl BitFlip {
    /// Create a new bit flip channel
    ///
    /// # Errors
    /// Returns error if the probability is not in [0, 1]
    pub fn new(probability: f64) -> Result<Self> {
        check_unit_interval("Flip probability", probability)?;
        Ok(Self { probability })
    }

    /// Get the flip probability
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl NoiseChannel for BitFlip {
    fn kraus_operators(&self) -> Vec<KrausOperator> {
        vec![
            scaled_identity((1.0 - self.probability).sqrt()),
            scaled_pauli_x(self.probability.sqrt()),
        ]
    }

    fn name(&self) -> &str {
        "bit_flip"
    }
}

/// Phase flip channel
///
/// Applies a Pauli-Z error with probability p.
///
/// # Kraus Operators
/// ```text
/// K₀ = √(1-p) I
/// K₁ = √p Z
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhaseFlip {
    /// Flip probability p in [0, 1]
    probability: f64,
}

impl PhaseFlip {
    /// Create a new phase flip channel
    ///
    /// # Errors
    /// Returns error if the probability is not in [0, 1]
    pub fn new(probability: f64) -> Result<Self> {
        check_unit_interval("Flip probability", probability)?;
        Ok(Self { probability })
    }

    /// Get the flip probability
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl NoiseChannel for PhaseFlip {
    fn kraus_operators(&self) -> Vec<KrausOperator> {
        vec![
            scaled_identity((1.0 - self.probability).sqrt()),
            scaled_pauli_z(self.probability.sqrt()),
        ]
    }

    fn name(&self) -> &str {
        "phase_flip"
    }
}
