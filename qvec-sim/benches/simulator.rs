//! Circuit execution benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qvec_core::Circuit;
use qvec_sim::{Simulator, SimulatorConfig};

/// One layer of Hadamards followed by a CNOT chain, repeated
fn layered_circuit(num_qubits: usize, layers: usize) -> Circuit {
    let mut circuit = Circuit::with_capacity(num_qubits, layers * num_qubits * 2);
    for _ in 0..layers {
        for q in 0..num_qubits {
            circuit.h(q).unwrap();
        }
        for q in 0..num_qubits - 1 {
            circuit.cx(q, q + 1).unwrap();
        }
    }
    circuit
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");

    for num_qubits in [10usize, 14, 18] {
        let circuit = layered_circuit(num_qubits, 4);

        group.bench_with_input(
            BenchmarkId::new("sequential", num_qubits),
            &circuit,
            |b, circuit| {
                let simulator =
                    Simulator::new(SimulatorConfig::default().with_parallel_threshold(usize::MAX));
                b.iter(|| simulator.run(circuit).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", num_qubits),
            &circuit,
            |b, circuit| {
                let simulator =
                    Simulator::new(SimulatorConfig::default().with_parallel_threshold(0));
                b.iter(|| simulator.run(circuit).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_rotation_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotations");

    for num_qubits in [10usize, 14] {
        let mut circuit = Circuit::new(num_qubits);
        for layer in 0..8 {
            for q in 0..num_qubits {
                circuit.rz(q, 0.1 * (layer + 1) as f64).unwrap();
                circuit.rx(q, 0.05 * (q + 1) as f64).unwrap();
            }
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &circuit,
            |b, circuit| {
                let simulator = Simulator::new(SimulatorConfig::default());
                b.iter(|| simulator.run(circuit).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_run, bench_rotation_heavy);
criterion_main!(benches);
