//! End-to-end simulator behavior

use approx::assert_relative_eq;
use num_complex::Complex64;
use qvec_core::noise::DepolarizingChannel;
use qvec_core::{Circuit, GateKind, QuantumError, QubitId};
use qvec_sim::{Simulator, SimulatorConfig, SimulatorError};
use qvec_state::{apply_stochastic, StateVector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

fn simulator() -> Simulator {
    Simulator::new(SimulatorConfig::default())
}

#[test]
fn empty_circuit_gives_ground_state() {
    let circuit = Circuit::new(1);
    let result = simulator().run(&circuit).unwrap();

    let amps = result.state.amplitudes();
    assert_relative_eq!(amps[0].re, 1.0, epsilon = 1e-12);
    assert_relative_eq!(amps[1].norm(), 0.0, epsilon = 1e-12);
}

#[test]
fn single_x_gives_excited_state() {
    let mut circuit = Circuit::new(1);
    circuit.x(0).unwrap();

    let result = simulator().run(&circuit).unwrap();
    let amps = result.state.amplitudes();
    assert_relative_eq!(amps[0].norm(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(amps[1].re, 1.0, epsilon = 1e-12);
}

#[test]
fn bell_state_probabilities() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap().cx(0, 1).unwrap();

    let result = simulator().run(&circuit).unwrap();
    let probabilities = result.state.probabilities();

    assert_relative_eq!(probabilities[0], 0.5, epsilon = 1e-9);
    assert_relative_eq!(probabilities[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(probabilities[2], 0.0, epsilon = 1e-9);
    assert_relative_eq!(probabilities[3], 0.5, epsilon = 1e-9);
}

#[test]
fn bell_state_sampling() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap().cx(0, 1).unwrap();

    let simulator = Simulator::new(SimulatorConfig::default().with_seed(42).with_shots(1000));
    let result = simulator.run_and_sample(&circuit).unwrap();
    let counts = result.measurements.unwrap();

    // Only the correlated outcomes appear
    for bitstring in counts.bitstrings() {
        assert!(bitstring == "00" || bitstring == "11", "unexpected {}", bitstring);
    }
    assert_eq!(counts.get("00") + counts.get("11"), 1000);
    assert!(counts.get("00") > 400 && counts.get("00") < 600);
    assert!(counts.get("11") > 400 && counts.get("11") < 600);
}

#[test]
fn sampling_reproducible_with_fixed_seed() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap().h(1).unwrap();

    let simulator = Simulator::new(SimulatorConfig::default().with_seed(7));
    let result = simulator.run(&circuit).unwrap();

    let a = simulator.sample(&result.state, 500).unwrap();
    let b = simulator.sample(&result.state, 500).unwrap();
    assert_eq!(a.counts(), b.counts());
}

#[test]
fn normalization_invariant_over_all_gate_kinds() {
    let mut circuit = Circuit::new(3);
    circuit
        .h(0)
        .unwrap()
        .i(1)
        .unwrap()
        .x(1)
        .unwrap()
        .y(2)
        .unwrap()
        .z(0)
        .unwrap()
        .s(1)
        .unwrap()
        .sdg(1)
        .unwrap()
        .t(2)
        .unwrap()
        .tdg(2)
        .unwrap()
        .rx(0, 0.3)
        .unwrap()
        .ry(1, 1.1)
        .unwrap()
        .rz(2, 2.2)
        .unwrap()
        .p(0, 0.7)
        .unwrap()
        .cx(0, 1)
        .unwrap()
        .cy(1, 2)
        .unwrap()
        .cz(0, 2)
        .unwrap()
        .swap(1, 2)
        .unwrap()
        .iswap(0, 1)
        .unwrap();

    let result = simulator().run(&circuit).unwrap();
    let total: f64 = result.state.probabilities().iter().sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn unitary_evolution_is_deterministic() {
    let mut circuit = Circuit::new(3);
    circuit
        .h(0)
        .unwrap()
        .cx(0, 1)
        .unwrap()
        .ry(2, 0.77)
        .unwrap()
        .cz(1, 2)
        .unwrap();

    let a = simulator().run(&circuit).unwrap();
    let b = simulator().run(&circuit).unwrap();

    // Bit-identical, not merely close
    assert_eq!(a.state.amplitudes(), b.state.amplitudes());
}

#[test]
fn double_x_restores_state() {
    let mut prepare = Circuit::new(2);
    prepare.h(0).unwrap().t(1).unwrap();
    let before = simulator().run(&prepare).unwrap();

    let mut flip_twice = prepare.clone();
    flip_twice.x(1).unwrap().x(1).unwrap();
    let after = simulator().run(&flip_twice).unwrap();

    for (a, b) in after
        .state
        .amplitudes()
        .iter()
        .zip(before.state.amplitudes())
    {
        assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
        assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
    }
}

#[test]
fn rotation_round_trip() {
    for theta in [0.0, PI / 4.0, PI / 2.0, PI, 3.0 * PI / 2.0] {
        let mut prepare = Circuit::new(1);
        prepare.h(0).unwrap();
        let before = simulator().run(&prepare).unwrap();

        let mut round_trip = prepare.clone();
        round_trip.rz(0, theta).unwrap().rz(0, -theta).unwrap();
        let after = simulator().run(&round_trip).unwrap();

        for (a, b) in after
            .state
            .amplitudes()
            .iter()
            .zip(before.state.amplitudes())
        {
            assert_relative_eq!(a.re, b.re, epsilon = 1e-10);
            assert_relative_eq!(a.im, b.im, epsilon = 1e-10);
        }
    }
}

#[test]
fn ghz_state_correlations() {
    let mut circuit = Circuit::new(3);
    circuit.h(0).unwrap().cx(0, 1).unwrap().cx(1, 2).unwrap();

    let result = simulator().run(&circuit).unwrap();
    let probabilities = result.state.probabilities();

    assert_relative_eq!(probabilities[0], 0.5, epsilon = 1e-9);
    assert_relative_eq!(probabilities[7], 0.5, epsilon = 1e-9);
    for i in 1..7 {
        assert_relative_eq!(probabilities[i], 0.0, epsilon = 1e-9);
    }
}

#[test]
fn construction_rejects_duplicate_target() {
    let mut circuit = Circuit::new(2);
    let result = circuit.cx(0, 0);
    assert!(matches!(result, Err(QuantumError::DuplicateQubit(_))));
}

#[test]
fn construction_rejects_out_of_range_target() {
    let mut circuit = Circuit::new(2);
    let result = circuit.h(5);
    assert!(matches!(result, Err(QuantumError::InvalidQubit(5, 2))));
}

#[test]
fn construction_rejects_missing_angle() {
    let mut circuit = Circuit::new(1);
    let result = circuit.append(GateKind::Rx, &[QubitId::new(0)], None);
    assert!(matches!(result, Err(QuantumError::InvalidParameter { .. })));
}

#[test]
fn run_with_custom_initial_state() {
    // Start from |1⟩ and flip back down
    let initial = StateVector::from_amplitudes(
        1,
        &[Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
    )
    .unwrap();

    let mut circuit = Circuit::new(1);
    circuit.x(0).unwrap();

    let result = simulator().run_with_state(&circuit, initial).unwrap();
    assert_relative_eq!(result.state.probabilities()[0], 1.0, epsilon = 1e-12);
}

#[test]
fn run_with_mismatched_state_fails() {
    let initial = StateVector::new(2).unwrap();
    let circuit = Circuit::new(3);

    let result = simulator().run_with_state(&circuit, initial);
    assert!(matches!(
        result,
        Err(SimulatorError::SizeMismatch {
            circuit_qubits: 3,
            state_qubits: 2,
        })
    ));
}

#[test]
fn depolarizing_zero_strength_leaves_probabilities() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    let clean = simulator().run(&circuit).unwrap();

    let channel = DepolarizingChannel::new(0.0).unwrap();
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..10 {
        let noisy = apply_stochastic(&clean.state, &channel, &mut rng).unwrap();
        for (a, b) in noisy
            .probabilities()
            .iter()
            .zip(clean.state.probabilities())
        {
            assert_relative_eq!(*a, b, epsilon = 1e-12);
        }
    }
}

#[test]
fn depolarizing_full_strength_mixes_marginal() {
    let circuit = Circuit::new(1);
    let clean = simulator().run(&circuit).unwrap();

    let channel = DepolarizingChannel::new(1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(17);

    let trials = 4000;
    let mut excited = 0.0;
    for _ in 0..trials {
        let noisy = apply_stochastic(&clean.state, &channel, &mut rng).unwrap();
        excited += noisy.probabilities()[1];
    }
    let mean = excited / trials as f64;
    assert!((mean - 0.5).abs() < 0.05, "marginal {} not near 0.5", mean);
}

#[test]
fn swap_moves_excitation() {
    let mut circuit = Circuit::new(2);
    circuit.x(0).unwrap().swap(0, 1).unwrap();

    let result = simulator().run(&circuit).unwrap();
    assert_relative_eq!(result.state.probabilities()[2], 1.0, epsilon = 1e-12);
}

#[test]
fn grover_two_qubit_amplifies_marked_state() {
    // Oracle marks |11⟩, one Grover iteration lands the full amplitude on it
    let mut circuit = Circuit::new(2);
    circuit
        .h(0)
        .unwrap()
        .h(1)
        .unwrap()
        .cz(0, 1)
        .unwrap()
        .h(0)
        .unwrap()
        .h(1)
        .unwrap()
        .x(0)
        .unwrap()
        .x(1)
        .unwrap()
        .cz(0, 1)
        .unwrap()
        .x(0)
        .unwrap()
        .x(1)
        .unwrap()
        .h(0)
        .unwrap()
        .h(1)
        .unwrap();

    let result = simulator().run(&circuit).unwrap();
    assert_relative_eq!(result.state.probabilities()[3], 1.0, epsilon = 1e-9);
}
