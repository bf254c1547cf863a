//! Quantum gate taxonomy and validated gate operations

use crate::{QuantumError, QubitId, Result};
use smallvec::SmallVec;
use std::fmt;

/// Closed enumeration of every gate the engine supports
///
/// Keeping the gate set a closed enum (rather than a trait object) means
/// the gate library and the executor can match on it exhaustively, so a
/// new gate kind cannot be added without every dispatch site handling it.
///
/// # Example
/// ```
/// use qvec_core::GateKind;
///
/// assert_eq!(GateKind::Cx.num_qubits(), 2);
/// assert!(GateKind::Rx.requires_angle());
/// assert!(!GateKind::H.requires_angle());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GateKind {
    /// Identity
    I,
    /// Hadamard
    H,
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Phase gate (sqrt of Z)
    S,
    /// Adjoint of S
    Sdg,
    /// pi/8 gate (sqrt of S)
    T,
    /// Adjoint of T
    Tdg,
    /// Rotation about the X axis, takes an angle
    Rx,
    /// Rotation about the Y axis, takes an angle
    Ry,
    /// Rotation about the Z axis, takes an angle
    Rz,
    /// Phase rotation diag(1, e^{i theta}), takes an angle
    Phase,
    /// Controlled-NOT
    Cx,
    /// Controlled-Y
    Cy,
    /// Controlled-Z
    Cz,
    /// Exchange two qubits
    Swap,
    /// Exchange with an i phase on the swapped pair
    ISwap,
}

impl GateKind {
    /// Number of qubits this gate acts on
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        match self {
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
            | GateKind::Phase => 1,
            GateKind::Cx | GateKind::Cy | GateKind::Cz | GateKind::Swap | GateKind::ISwap => 2,
        }
    }

    /// Whether this gate takes a rotation angle
    #[inline]
    pub const fn requires_angle(&self) -> bool {
        matches!(
            self,
            GateKind::Rx | GateKind::Ry | GateKind::Rz | GateKind::Phase
        )
    }

    /// Whether this gate is its own inverse
    #[inline]
    pub const fn is_hermitian(&self) -> bool {
        matches!(
            self,
            GateKind::I
                | GateKind::H
                | GateKind::X
                | GateKind::Y
                | GateKind::Z
                | GateKind::Cx
                | GateKind::Cz
                | GateKind::Swap
        )
    }

    /// Short display name ("H", "CX", "RZ", ...)
    pub const fn symbol(&self) -> &'static str {
        match self {
            GateKind::I => "I",
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::Sdg => "S†",
            GateKind::T => "T",
            GateKind::Tdg => "T†",
            GateKind::Rx => "RX",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
            GateKind::Phase => "P",
            GateKind::Cx => "CX",
            GateKind::Cy => "CY",
            GateKind::Cz => "CZ",
            GateKind::Swap => "SWAP",
            GateKind::ISwap => "iSWAP",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A gate operation applied to specific qubits
///
/// Combines a [`GateKind`] with the qubits it acts on and its angle, if
/// the kind takes one. Construction validates arity, duplicate targets
/// and parameter presence, so a stored `GateOp` is always well-formed.
///
/// # Example
/// ```
/// use qvec_core::{GateKind, GateOp, QubitId};
///
/// let op = GateOp::new(GateKind::Cx, &[QubitId::new(0), QubitId::new(1)], None).unwrap();
/// assert_eq!(op.num_qubits(), 2);
/// ```
#[derive(Clone)]
pub struct GateOp {
    kind: GateKind,
    qubits: SmallVec<[QubitId; 2]>, // Most gates are 1-2 qubits
    parameter: Option<f64>,
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// - [`QuantumError::InvalidQubitCount`] if the qubit count does not
    ///   match the gate's arity
    /// - [`QuantumError::DuplicateQubit`] if a two-qubit gate names the
    ///   same qubit twice
    /// - [`QuantumError::InvalidParameter`] if a rotation gate is missing
    ///   its angle, a fixed gate is given one, or the angle is not finite
    pub fn new(kind: GateKind, qubits: &[QubitId], parameter: Option<f64>) -> Result<Self> {
        if qubits.len() != kind.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                kind.symbol(),
                kind.num_qubits(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(QuantumError::DuplicateQubit(qubits[i]));
                }
            }
        }

        match (kind.requires_angle(), parameter) {
            (true, None) => {
                return Err(QuantumError::invalid_parameter(
                    kind.symbol(),
                    "rotation gate requires an angle",
                ));
            }
            (false, Some(_)) => {
                return Err(QuantumError::invalid_parameter(
                    kind.symbol(),
                    "gate does not take a parameter",
                ));
            }
            (true, Some(theta)) if !theta.is_finite() => {
                return Err(QuantumError::invalid_parameter(
                    kind.symbol(),
                    format!("angle must be finite, got {}", theta),
                ));
            }
            _ => {}
        }

        Ok(Self {
            kind,
            qubits: SmallVec::from_slice(qubits),
            parameter,
        })
    }

    /// Get the gate kind
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the rotation angle, if the kind takes one
    #[inline]
    pub fn parameter(&self) -> Option<f64> {
        self.parameter
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.symbol())?;
        if let Some(theta) = self.parameter {
            write!(f, "({:.4})", theta)?;
        }
        write!(f, "[")?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
