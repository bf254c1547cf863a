//! Grover's search on two qubits

use qvec::{grover_search, Simulator, SimulatorConfig};

fn main() {
    let marked = 3; // searching for |11⟩
    let circuit = grover_search(marked);

    println!("Searching for state |{:02b}⟩:", marked);
    println!("{}", circuit.to_ascii());

    let simulator = Simulator::new(SimulatorConfig::default().with_seed(42).with_shots(1000));
    let result = simulator.run_and_sample(&circuit).expect("simulation failed");

    println!("Final amplitudes:");
    for (i, amp) in result.state.amplitudes().iter().enumerate() {
        let probability = amp.norm_sqr();
        println!(
            "|{:02b}⟩: amplitude = {:.4}{:+.4}i, probability = {:.4}",
            i, amp.re, amp.im, probability
        );
    }

    println!("\nMeasurement simulation:");
    println!("{}", result.measurements.unwrap());
}
