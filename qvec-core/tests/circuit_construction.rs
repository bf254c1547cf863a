//! Circuit construction and validation behavior

use qvec_core::{Circuit, GateKind, QuantumError, QubitId};

#[test]
fn fluent_chain_builds_in_order() {
    let mut circuit = Circuit::new(3);
    circuit
        .h(0)
        .unwrap()
        .cx(0, 1)
        .unwrap()
        .rz(2, 0.5)
        .unwrap()
        .swap(1, 2)
        .unwrap();

    let kinds: Vec<_> = circuit.operations().map(|op| op.kind()).collect();
    assert_eq!(
        kinds,
        vec![GateKind::H, GateKind::Cx, GateKind::Rz, GateKind::Swap]
    );
}

#[test]
fn append_validates_eagerly_not_at_run_time() {
    // A successfully built circuit contains only well-formed operations,
    // so each failure must surface at the append call itself.
    let mut circuit = Circuit::new(2);

    assert!(matches!(
        circuit.cx(0, 0),
        Err(QuantumError::DuplicateQubit(_))
    ));
    assert!(matches!(
        circuit.h(5),
        Err(QuantumError::InvalidQubit(5, 2))
    ));
    assert!(matches!(
        circuit.append(GateKind::Rx, &[QubitId::new(0)], None),
        Err(QuantumError::InvalidParameter { .. })
    ));
    assert!(matches!(
        circuit.append(GateKind::H, &[QubitId::new(0)], Some(1.0)),
        Err(QuantumError::InvalidParameter { .. })
    ));
    assert!(matches!(
        circuit.append(GateKind::Cx, &[QubitId::new(0)], None),
        Err(QuantumError::InvalidQubitCount { .. })
    ));

    // None of the failed appends left a trace
    assert!(circuit.is_empty());
    assert!(circuit.validate().is_ok());
}

#[test]
fn operations_are_frozen_once_appended() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap().cx(0, 1).unwrap();

    // The only way to observe operations is by shared reference
    let op = circuit.get_operation(1).unwrap();
    assert_eq!(op.kind(), GateKind::Cx);
    assert_eq!(op.qubits(), &[QubitId::new(0), QubitId::new(1)]);
    assert_eq!(op.parameter(), None);
}

#[test]
fn parameters_are_stored_per_operation() {
    let mut circuit = Circuit::new(1);
    circuit.rx(0, 0.25).unwrap().ry(0, 0.5).unwrap();

    let angles: Vec<_> = circuit.operations().map(|op| op.parameter()).collect();
    assert_eq!(angles, vec![Some(0.25), Some(0.5)]);
}

#[test]
fn ascii_rendering_reads_without_mutating() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap().cx(0, 1).unwrap();

    let before = circuit.len();
    let diagram = circuit.to_ascii();
    assert!(diagram.contains("[H]"));
    assert_eq!(circuit.len(), before);
}
