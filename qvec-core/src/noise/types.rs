//! Core types and traits for noise modeling

use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// A Kraus operator representing one branch of a quantum channel
///
/// A channel is described by a set of Kraus operators {K_i} satisfying
/// the completeness relation Σ K_i† K_i = I.
#[derive(Clone, Debug)]
pub struct KrausOperator {
    /// The matrix elements in row-major order
    pub matrix: Vec<Complex64>,
    /// Dimension of the square matrix (2 for a single-qubit operator)
    pub dimension: usize,
}

impl KrausOperator {
    /// Create a new Kraus operator from a flattened row-major matrix
    ///
    /// # Errors
    /// Returns error if the dimension is not a power of 2 or the matrix
    /// length does not match `dimension * dimension`
    pub fn new(matrix: Vec<Complex64>, dimension: usize) -> Result<Self> {
        if !dimension.is_power_of_two() {
            return Err(crate::QuantumError::ValidationError(format!(
                "Kraus operator dimension must be a power of 2, got {}",
                dimension
            )));
        }

        if matrix.len() != dimension * dimension {
            return Err(crate::QuantumError::ValidationError(format!(
                "Matrix size {} doesn't match dimension {}x{}",
                matrix.len(),
                dimension,
                dimension
            )));
        }

        Ok(Self { matrix, dimension })
    }

    /// Create a single-qubit operator from a 2x2 matrix
    pub fn single_qubit(matrix: [[Complex64; 2]; 2]) -> Self {
        Self {
            matrix: vec![matrix[0][0], matrix[0][1], matrix[1][0], matrix[1][1]],
            dimension: 2,
        }
    }

    /// Get a matrix element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row * self.dimension + col]
    }

    /// Compute the adjoint (conjugate transpose) of this operator
    pub fn adjoint(&self) -> Self {
        let mut adj = vec![Complex64::new(0.0, 0.0); self.matrix.len()];
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                adj[j * self.dimension + i] = self.matrix[i * self.dimension + j].conj();
            }
        }
        Self {
            matrix: adj,
            dimension: self.dimension,
        }
    }
}

/// Trait for quantum noise channels
///
/// A channel describes how errors perturb quantum states, in the Kraus
/// operator formalism.
pub trait NoiseChannel: Send + Sync + fmt::Debug {
    /// Get the Kraus operators defining this channel
    ///
    /// The operators must satisfy Σ K_i† K_i = I within numerical
    /// precision.
    fn kraus_operators(&self) -> Vec<KrausOperator>;

    /// Name of this channel ("depolarizing", "amplitude_damping", ...)
    fn name(&self) -> &str;

    /// Verify the completeness relation Σ K_i† K_i = I
    fn verify_completeness(&self, tolerance: f64) -> bool {
        let operators = self.kraus_operators();
        if operators.is_empty() {
            return false;
        }

        let dim = operators[0].dimension;
        let mut sum = vec![Complex64::new(0.0, 0.0); dim * dim];

        for kraus in &operators {
            let adj = kraus.adjoint();
            for i in 0..dim {
                for j in 0..dim {
                    let mut element = Complex64::new(0.0, 0.0);
                    for k in 0..dim {
                        element += adj.get(i, k) * kraus.get(k, j);
                    }
                    sum[i * dim + j] += element;
                }
            }
        }

        for i in 0..dim {
            for j in 0..dim {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                if (sum[i * dim + j] - expected).norm() > tolerance {
                    return false;
                }
            }
        }

        true
    }
}
