//! Noise demonstration showing decoherence effects on a |+⟩ state

use qvec::{
    apply_stochastic, AmplitudeDamping, Circuit, DepolarizingChannel, Simulator, SimulatorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // |0⟩ -> |+⟩ = (|0⟩ + |1⟩)/√2
    let mut circuit = Circuit::new(1);
    circuit.h(0).expect("qubit 0 exists");

    println!("Circuit creating the |+⟩ state:");
    println!("{}", circuit.to_ascii());

    let simulator = Simulator::new(SimulatorConfig::default().with_seed(42).with_shots(1000));
    let ideal = simulator.run(&circuit).expect("simulation failed");

    println!("1. Ideal (no noise):");
    println!("   {}", simulator.sample(&ideal.state, 1000).unwrap());

    let mut rng = StdRng::seed_from_u64(7);

    println!("2. With depolarizing noise (p = 0.1):");
    let depolarizing = DepolarizingChannel::new(0.1).unwrap();
    let noisy = apply_stochastic(&ideal.state, &depolarizing, &mut rng).unwrap();
    println!("   {}", simulator.sample(&noisy, 1000).unwrap());

    println!("3. With amplitude damping (gamma = 0.2):");
    let damping = AmplitudeDamping::new(0.2).unwrap();
    let damped = apply_stochastic(&ideal.state, &damping, &mut rng).unwrap();
    println!("   {}", simulator.sample(&damped, 1000).unwrap());

    println!("Depolarizing randomizes outcomes; amplitude damping biases toward |0⟩.");
}
