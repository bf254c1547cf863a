//! Quantum circuit representation

use crate::gate::{GateKind, GateOp};
use crate::{QuantumError, QubitId, Result};

/// A quantum circuit
///
/// An ordered, append-only sequence of gate operations over a fixed
/// number of qubits. Every append is validated against the gate's arity
/// and the circuit's qubit count, so the executor can assume a frozen,
/// well-formed operation list for the whole run.
///
/// Gate methods return `Result<&mut Self>` so circuits chain fluently:
///
/// # Example
/// ```
/// use qvec_core::Circuit;
///
/// let mut circuit = Circuit::new(2);
/// circuit.h(0).unwrap().cx(0, 1).unwrap();
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Create a circuit with pre-allocated capacity for operations
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append a gate operation to the circuit
    ///
    /// This is the single mutation path; every named gate method below
    /// routes through it.
    ///
    /// # Errors
    /// - [`QuantumError::InvalidQubit`] if any qubit index is out of bounds
    /// - [`QuantumError::InvalidQubitCount`], [`QuantumError::DuplicateQubit`]
    ///   or [`QuantumError::InvalidParameter`] from [`GateOp::new`]
    pub fn append(
        &mut self,
        kind: GateKind,
        qubits: &[QubitId],
        parameter: Option<f64>,
    ) -> Result<&mut Self> {
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }

        let gate_op = GateOp::new(kind, qubits, parameter)?;
        self.operations.push(gate_op);
        Ok(self)
    }

    fn one(&mut self, kind: GateKind, q: usize) -> Result<&mut Self> {
        self.append(kind, &[QubitId::new(q)], None)
    }

    fn one_param(&mut self, kind: GateKind, q: usize, theta: f64) -> Result<&mut Self> {
        self.append(kind, &[QubitId::new(q)], Some(theta))
    }

    fn two(&mut self, kind: GateKind, a: usize, b: usize) -> Result<&mut Self> {
        self.append(kind, &[QubitId::new(a), QubitId::new(b)], None)
    }

    /// Append an identity gate
    pub fn i(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::I, q)
    }

    /// Append a Hadamard gate
    pub fn h(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::H, q)
    }

    /// Append a Pauli-X gate
    pub fn x(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::X, q)
    }

    /// Append a Pauli-Y gate
    pub fn y(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::Y, q)
    }

    /// Append a Pauli-Z gate
    pub fn z(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::Z, q)
    }

    /// Append an S gate
    pub fn s(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::S, q)
    }

    /// Append an S-dagger gate
    pub fn sdg(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::Sdg, q)
    }

    /// Append a T gate
    pub fn t(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::T, q)
    }

    /// Append a T-dagger gate
    pub fn tdg(&mut self, q: usize) -> Result<&mut Self> {
        self.one(GateKind::Tdg, q)
    }

    /// Append an X-rotation by `theta` radians
    pub fn rx(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.one_param(GateKind::Rx, q, theta)
    }

    /// Append a Y-rotation by `theta` radians
    pub fn ry(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.one_param(GateKind::Ry, q, theta)
    }

    /// Append a Z-rotation by `theta` radians
    pub fn rz(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.one_param(GateKind::Rz, q, theta)
    }

    /// Append a phase rotation diag(1, e^{i theta})
    pub fn p(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.one_param(GateKind::Phase, q, theta)
    }

    /// Append a CNOT with the given control and target
    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.two(GateKind::Cx, control, target)
    }

    /// Append a controlled-Y with the given control and target
    pub fn cy(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.two(GateKind::Cy, control, target)
    }

    /// Append a controlled-Z (symmetric in its qubits)
    pub fn cz(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.two(GateKind::Cz, a, b)
    }

    /// Append a SWAP gate
    pub fn swap(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.two(GateKind::Swap, a, b)
    }

    /// Append an iSWAP gate
    pub fn iswap(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.two(GateKind::ISwap, a, b)
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Clear all operations from the circuit
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Get the depth of the circuit
    ///
    /// Returns the number of operations (sequential execution model).
    pub fn depth(&self) -> usize {
        self.operations.len()
    }

    /// Validate the circuit
    ///
    /// Re-checks that every stored operation stays within the qubit
    /// bounds. Appends already guarantee this; the method exists for
    /// callers that construct circuits programmatically and want a final
    /// sanity pass.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            for &qubit in op.qubits() {
                if qubit.index() >= self.num_qubits {
                    return Err(QuantumError::ValidationError(format!(
                        "Operation {} uses invalid qubit {}",
                        i, qubit
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} operations)",
            self.num_qubits,
            self.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_circuit_zero_qubits() {
        Circuit::new(0);
    }

    #[test]
    fn test_fluent_chaining() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().cx(0, 1).unwrap().rz(1, 0.25).unwrap();
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_append_out_of_range() {
        let mut circuit = Circuit::new(2);
        let result = circuit.h(5);
        assert!(matches!(result, Err(QuantumError::InvalidQubit(5, 2))));
        // A failed append leaves the circuit untouched
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_append_duplicate_target() {
        let mut circuit = Circuit::new(2);
        let result = circuit.cx(0, 0);
        assert!(matches!(result, Err(QuantumError::DuplicateQubit(_))));
    }

    #[test]
    fn test_append_rotation_without_angle() {
        let mut circuit = Circuit::new(1);
        let result = circuit.append(GateKind::Rx, &[QubitId::new(0)], None);
        assert!(matches!(result, Err(QuantumError::InvalidParameter { .. })));
    }

    #[test]
    fn test_operations_iter() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().x(1).unwrap();

        let kinds: Vec<_> = circuit.operations().map(|op| op.kind()).collect();
        assert_eq!(kinds, vec![GateKind::H, GateKind::X]);
    }

    #[test]
    fn test_get_operation() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap();

        assert_eq!(circuit.get_operation(0).unwrap().kind(), GateKind::H);
        assert!(circuit.get_operation(10).is_none());
    }

    #[test]
    fn test_clear_and_depth() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().h(1).unwrap();
        assert_eq!(circuit.depth(), 2);

        circuit.clear();
        assert!(circuit.is_empty());
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_validate() {
        let mut circuit = Circuit::new(3);
        circuit.h(0).unwrap().cx(0, 2).unwrap();
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap();

        let display = format!("{}", circuit);
        assert!(display.contains("2 qubits"));
        assert!(display.contains("1 operations"));
    }

    #[test]
    fn test_with_capacity() {
        let circuit = Circuit::with_capacity(3, 64);
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.is_empty());
    }
}
