//! Simulation result types

use crate::statistics::ExecutionStatistics;
use qvec_state::{SamplingResult, StateVector};
use std::collections::HashMap;
use std::fmt;

/// Result of a quantum circuit simulation
#[derive(Debug)]
pub struct SimulationResult {
    /// Final quantum state after all gates have been applied
    pub state: StateVector,

    /// Measurement counts, if sampling was performed
    pub measurements: Option<MeasurementCounts>,

    /// Execution statistics, if collection was enabled
    pub statistics: Option<ExecutionStatistics>,
}

impl SimulationResult {
    /// Create a new simulation result holding the final state
    pub fn new(state: StateVector) -> Self {
        Self {
            state,
            measurements: None,
            statistics: None,
        }
    }

    /// Attach measurement counts
    pub fn with_measurements(mut self, counts: MeasurementCounts) -> Self {
        self.measurements = Some(counts);
        self
    }

    /// Attach execution statistics
    pub fn with_statistics(mut self, stats: ExecutionStatistics) -> Self {
        self.statistics = Some(stats);
        self
    }

    /// Number of qubits in the final state
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Total measurement shots, if sampling was performed
    pub fn total_shots(&self) -> Option<usize> {
        self.measurements.as_ref().map(|m| m.total_shots())
    }
}

/// Measurement outcome counts keyed by bitstring
///
/// Bitstrings are MSB-first: qubit n-1 is the leftmost character,
/// qubit 0 the rightmost, matching the basis-index convention where
/// qubit 0 is the least significant bit.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementCounts {
    counts: HashMap<String, usize>,
    total_shots: usize,
}

impl MeasurementCounts {
    /// Create an empty counts object
    pub fn new(total_shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            total_shots,
        }
    }

    /// Build from a state-level sampling result
    pub fn from_sampling(result: &SamplingResult, num_qubits: usize) -> Self {
        Self {
            counts: result.to_bitstring_counts(num_qubits),
            total_shots: result.shots(),
        }
    }

    /// Record outcomes for a bitstring
    pub fn add(&mut self, bitstring: impl Into<String>, count: usize) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a specific bitstring
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Get the empirical probability of a bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.get(bitstring) as f64 / self.total_shots as f64
        }
    }

    /// All observed bitstrings
    pub fn bitstrings(&self) -> impl Iterator<Item = &String> {
        self.counts.keys()
    }

    /// Reference to the underlying counts map
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Total number of shots
    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// Number of distinct outcomes observed
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// The most common outcome, if any
    pub fn most_common(&self) -> Option<(&String, usize)> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(bs, &count)| (bs, count))
    }

    /// Outcomes sorted by frequency, descending
    pub fn sorted(&self) -> Vec<(&String, usize)> {
        let mut sorted: Vec<_> = self.counts.iter().map(|(bs, &c)| (bs, c)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        sorted
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement counts ({} shots):", self.total_shots)?;

        let sorted = self.sorted();
        for (bitstring, count) in sorted.iter().take(10) {
            let prob = *count as f64 / self.total_shots as f64;
            writeln!(f, "  {}: {} ({:.2}%)", bitstring, count, prob * 100.0)?;
        }
        if sorted.len() > 10 {
            writeln!(f, "  ... and {} more outcomes", sorted.len() - 10)?;
        }
        Ok(())
    }
}
