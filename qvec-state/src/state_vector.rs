//! Dense statevector representation

use crate::error::{Result, StateError};
use crate::kernels::{self, Matrix2, Matrix4};
use num_complex::Complex64;
use std::fmt;

/// Largest supported qubit count (2^30 amplitudes, 16 GiB of buffer)
pub const MAX_QUBITS: usize = 30;

/// Tolerance for accepting caller-supplied amplitudes as normalized
pub const NORM_TOLERANCE: f64 = 1e-6;

/// A dense quantum statevector
///
/// Holds the full 2^n complex amplitude buffer, indexed by the integer
/// encoding of the basis state with qubit 0 as the least significant
/// bit. Unitary gates mutate the buffer in place and preserve the norm;
/// collapse operations renormalize explicitly.
///
/// A statevector is exclusively owned by whoever holds it. Branching
/// experiments take a deep [`StateVector::copy`]; there is no implicit
/// aliasing.
///
/// # Example
///
/// ```
/// use qvec_state::StateVector;
///
/// let mut state = StateVector::new(1).unwrap();
/// state.apply_pauli_x(0).unwrap();
/// assert!((state.probabilities()[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new statevector initialized to |0...0⟩
    ///
    /// # Errors
    /// [`StateError::ResourceExhausted`] if `num_qubits` exceeds
    /// [`MAX_QUBITS`]. The check happens before any allocation so the
    /// caller gets a clear error rather than an allocator abort.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::ResourceExhausted {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a statevector from caller-supplied amplitudes
    ///
    /// # Errors
    /// - [`StateError::ResourceExhausted`] if `num_qubits` exceeds the limit
    /// - [`StateError::DimensionMismatch`] if the buffer length is not 2^n
    /// - [`StateError::NotNormalized`] if the norm deviates from 1 by more
    ///   than [`NORM_TOLERANCE`]
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::ResourceExhausted {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1 << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        let norm = amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(StateError::NotNormalized { norm });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get a mutable reference to the amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Compute the L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Scale all amplitudes so that the norm equals 1
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-12 {
            let inv = 1.0 / norm;
            for amp in &mut self.amplitudes {
                *amp *= inv;
            }
        }
    }

    /// Check whether |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        for amp in &mut self.amplitudes {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Deep-copy the statevector
    ///
    /// The returned state shares nothing with the original.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Get |amplitude_i|^2 for every basis state
    ///
    /// The returned probabilities sum to 1 (within floating-point
    /// rounding) whenever the state is normalized.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Get the probability of a single basis state
    ///
    /// # Errors
    /// [`StateError::InvalidDimension`] if `basis_state` is out of bounds
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        if basis_state >= self.dimension() {
            return Err(StateError::InvalidDimension {
                dimension: basis_state,
            });
        }
        Ok(self.amplitudes[basis_state].norm_sqr())
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_qubit_pair(&self, a: usize, b: usize) -> Result<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(StateError::InvalidQubitIndex {
                index: a,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply a general single-qubit gate in place
    ///
    /// # Errors
    /// [`StateError::InvalidQubitIndex`] if the qubit is out of bounds
    pub fn apply_single_qubit_gate(&mut self, matrix: &Matrix2, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_single_qubit(matrix, qubit, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a diagonal single-qubit gate diag(d0, d1) in place
    pub fn apply_diagonal_gate(&mut self, diagonal: [Complex64; 2], qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_diagonal(diagonal, qubit, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a Pauli-X gate in place
    pub fn apply_pauli_x(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_pauli_x(qubit, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a Hadamard gate in place
    pub fn apply_hadamard(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_hadamard(qubit, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a CNOT in place
    ///
    /// # Errors
    /// [`StateError::InvalidQubitIndex`] if either qubit is out of bounds
    /// or the two coincide
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit_pair(control, target)?;
        kernels::apply_cnot(control, target, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a CZ in place
    pub fn apply_cz(&mut self, qubit_a: usize, qubit_b: usize) -> Result<()> {
        self.check_qubit_pair(qubit_a, qubit_b)?;
        kernels::apply_cz(qubit_a, qubit_b, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a SWAP in place
    pub fn apply_swap(&mut self, qubit_a: usize, qubit_b: usize) -> Result<()> {
        self.check_qubit_pair(qubit_a, qubit_b)?;
        kernels::apply_swap(qubit_a, qubit_b, &mut self.amplitudes, false);
        Ok(())
    }

    /// Apply a general two-qubit gate in place
    pub fn apply_two_qubit_gate(
        &mut self,
        matrix: &Matrix4,
        qubit_a: usize,
        qubit_b: usize,
    ) -> Result<()> {
        self.check_qubit_pair(qubit_a, qubit_b)?;
        kernels::apply_two_qubit(matrix, qubit_a, qubit_b, &mut self.amplitudes, false);
        Ok(())
    }

    /// Measure a single qubit and collapse the state
    ///
    /// `random_value` in [0, 1) decides the outcome against the qubit's
    /// marginal distribution; the caller owns the random source.
    ///
    /// # Errors
    /// [`StateError::InvalidQubitIndex`] if the qubit is out of bounds
    pub fn measure_qubit(&mut self, qubit: usize, random_value: f64) -> Result<u8> {
        self.check_qubit(qubit)?;

        let mask = 1 << qubit;
        let prob_zero: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx & mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let outcome = if random_value < prob_zero { 0u8 } else { 1u8 };

        let kept = if outcome == 0 {
            prob_zero
        } else {
            1.0 - prob_zero
        };
        if kept < 1e-12 {
            return Err(StateError::NotNormalized { norm: kept.sqrt() });
        }

        let inv = 1.0 / kept.sqrt();
        for (idx, amp) in self.amplitudes.iter_mut().enumerate() {
            if ((idx >> qubit) & 1) as u8 != outcome {
                *amp = Complex64::new(0.0, 0.0);
            } else {
                *amp *= inv;
            }
        }

        Ok(outcome)
    }

    /// Measure all qubits and collapse to a basis state
    ///
    /// Returns the measured basis-state index.
    pub fn measure_all(&mut self, random_value: f64) -> Result<usize> {
        let mut cumulative = 0.0;
        let mut outcome = self.dimension() - 1;

        for (idx, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if random_value < cumulative {
                outcome = idx;
                break;
            }
        }

        for (idx, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp = if idx == outcome {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            };
        }

        Ok(outcome)
    }
}

impl fmt::Debug for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVector")
            .field("num_qubits", &self.num_qubits)
            .field("dimension", &self.dimension())
            .field("norm", &self.norm())
            .finish()
    }
}
