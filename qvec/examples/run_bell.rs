//! Build a Bell state, print the final amplitudes and sampled counts

use qvec::{bell_state, Simulator, SimulatorConfig};

fn main() {
    let circuit = bell_state();
    println!("{}", circuit.to_ascii());

    let simulator = Simulator::new(SimulatorConfig::default().with_seed(42).with_shots(1000));
    let result = simulator.run_and_sample(&circuit).expect("simulation failed");

    println!("Final statevector: {:?}", result.state.amplitudes());
    println!("Probabilities:     {:?}", result.state.probabilities());
    println!("{}", result.measurements.unwrap());
}
