//! Quantum gate library for qvec
//!
//! Maps every [`GateKind`] to its unitary action without ever
//! materializing a full 2^n x 2^n matrix:
//!
//! - [`single_qubit_matrix`]: the 2x2 matrix for a single-qubit kind,
//!   with angle validation for the rotation gates
//! - [`diagonal_elements`]: the diagonal fast path for phase-like gates
//! - [`two_qubit_action`]: a closed descriptor of the 4-amplitude effect
//!   of a two-qubit kind, so CX/CZ/SWAP are applied by direct index
//!   manipulation rather than a 4x4 multiply
//!
//! All lookups are exhaustive over the gate enum and validate once per
//! kind; the executor never discovers a bad gate at contraction time.
//!
//! # Example
//! ```
//! use qvec_core::GateKind;
//! use qvec_gates::{single_qubit_matrix, two_qubit_action, TwoQubitAction};
//!
//! let h = single_qubit_matrix(GateKind::H, None).unwrap();
//! assert!((h[0][0].re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//!
//! assert!(matches!(
//!     two_qubit_action(GateKind::Cx).unwrap(),
//!     TwoQubitAction::ControlledFlip
//! ));
//! ```

pub mod matrices;

use num_complex::Complex64;
use qvec_core::{GateKind, QuantumError, Result};

pub use matrices::{Matrix2, Matrix4};

/// How a two-qubit gate acts on the 4 basis amplitudes of its qubit pair
///
/// The permutation and phase variants are applied via direct index
/// manipulation; only genuinely dense gates pay for a 4x4 multiply.
#[derive(Debug, Clone, Copy)]
pub enum TwoQubitAction {
    /// Flip the target amplitude pair when the control bit is set (CX)
    ControlledFlip,
    /// Negate the |11⟩ amplitude (CZ)
    ControlledPhase,
    /// Exchange the |01⟩ and |10⟩ amplitudes (SWAP)
    Exchange,
    /// General 4x4 unitary in |q_first q_second⟩ basis order
    Matrix(&'static Matrix4),
}

fn require_angle(kind: GateKind, parameter: Option<f64>) -> Result<f64> {
    parameter.ok_or_else(|| {
        QuantumError::invalid_parameter(kind.symbol(), "rotation gate requires an angle")
    })
}

fn reject_angle(kind: GateKind, parameter: Option<f64>) -> Result<()> {
    if parameter.is_some() {
        return Err(QuantumError::invalid_parameter(
            kind.symbol(),
            "gate does not take a parameter",
        ));
    }
    Ok(())
}

/// Get the 2x2 matrix for a single-qubit gate kind
///
/// # Errors
/// - [`QuantumError::InvalidParameter`] if a rotation kind is missing its
///   angle or a fixed kind is given one
/// - [`QuantumError::InvalidQubitCount`] if called with a two-qubit kind
pub fn single_qubit_matrix(kind: GateKind, parameter: Option<f64>) -> Result<Matrix2> {
    match kind {
        GateKind::I => {
            reject_angle(kind, parameter)?;
            Ok(matrices::IDENTITY)
        }
        GateKind::H => {
            reject_angle(kind, parameter)?;
            Ok(matrices::HADAMARD)
        }
        GateKind::X => {
            reject_angle(kind, parameter)?;
            Ok(matrices::PAULI_X)
        }
        GateKind::Y => {
            reject_angle(kind, parameter)?;
            Ok(matrices::PAULI_Y)
        }
        GateKind::Z => {
            reject_angle(kind, parameter)?;
            Ok(matrices::PAULI_Z)
        }
        GateKind::S => {
            reject_angle(kind, parameter)?;
            Ok(matrices::S_GATE)
        }
        GateKind::Sdg => {
            reject_angle(kind, parameter)?;
            Ok(matrices::S_GATE_DAGGER)
        }
        GateKind::T => {
            reject_angle(kind, parameter)?;
            Ok(matrices::T_GATE)
        }
        GateKind::Tdg => {
            reject_angle(kind, parameter)?;
            Ok(matrices::T_GATE_DAGGER)
        }
        GateKind::Rx => Ok(matrices::rotation_x(require_angle(kind, parameter)?)),
        GateKind::Ry => Ok(matrices::rotation_y(require_angle(kind, parameter)?)),
        GateKind::Rz => Ok(matrices::rotation_z(require_angle(kind, parameter)?)),
        GateKind::Phase => Ok(matrices::phase(require_angle(kind, parameter)?)),
        GateKind::Cx | GateKind::Cy | GateKind::Cz | GateKind::Swap | GateKind::ISwap => {
            Err(QuantumError::invalid_qubit_count(kind.symbol(), 1, 2))
        }
    }
}

/// Get the diagonal fast-path descriptor for a gate kind, if it has one
///
/// Diagonal gates (Z, S, S†, T, T†, RZ, P) only scale the two amplitude
/// groups, which is 2-3x cheaper than a full 2x2 multiply. Returns `None`
/// for non-diagonal kinds, or for a rotation kind missing its angle.
pub fn diagonal_elements(kind: GateKind, parameter: Option<f64>) -> Option<[Complex64; 2]> {
    let diag = |m: &Matrix2| [m[0][0], m[1][1]];
    match kind {
        GateKind::Z => Some(diag(&matrices::PAULI_Z)),
        GateKind::S => Some(diag(&matrices::S_GATE)),
        GateKind::Sdg => Some(diag(&matrices::S_GATE_DAGGER)),
        GateKind::T => Some(diag(&matrices::T_GATE)),
        GateKind::Tdg => Some(diag(&matrices::T_GATE_DAGGER)),
        GateKind::Rz => parameter.map(|theta| diag(&matrices::rotation_z(theta))),
        GateKind::Phase => parameter.map(|theta| diag(&matrices::phase(theta))),
        _ => None,
    }
}

/// Get the action descriptor for a two-qubit gate kind
///
/// # Errors
/// [`QuantumError::InvalidQubitCount`] if called with a single-qubit kind
pub fn two_qubit_action(kind: GateKind) -> Result<TwoQubitAction> {
    match kind {
        GateKind::Cx => Ok(TwoQubitAction::ControlledFlip),
        GateKind::Cz => Ok(TwoQubitAction::ControlledPhase),
        GateKind::Swap => Ok(TwoQubitAction::Exchange),
        GateKind::Cy => Ok(TwoQubitAction::Matrix(&matrices::CY)),
        GateKind::ISwap => Ok(TwoQubitAction::Matrix(&matrices::ISWAP)),
        GateKind::I
        | GateKind::H
        | GateKind::X
        | GateKind::Y
        | GateKind::Z
        | GateKind::S
        | GateKind::Sdg
        | GateKind::T
        | GateKind::Tdg
        | GateKind::Rx
        | GateKind::Ry
        | GateKind::Rz
        | GateKind::Phase => Err(QuantumError::invalid_qubit_count(kind.symbol(), 2, 1)),
    }
}
