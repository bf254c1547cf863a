//! Multi-shot measurement sampling
//!
//! Sampling draws independent shots from the state's probability
//! distribution |amplitude_i|^2 without collapsing it. The random source
//! is always injected so a seeded generator reproduces counts exactly.
//!
//! Multi-shot sampling uses Walker's alias method: O(2^n) table setup,
//! then O(1) per shot, which beats cumulative scanning as soon as the
//! shot count is non-trivial.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use rand::Rng;
use std::collections::HashMap;

/// Counts from multiple measurement shots
///
/// Counts are keyed by basis-state index; [`SamplingResult::to_bitstring_counts`]
/// converts to the MSB-first bitstring form used for display.
#[derive(Debug, Clone)]
pub struct SamplingResult {
    /// Map from basis-state index to count
    counts: HashMap<u64, usize>,
    /// Total number of shots
    shots: usize,
}

impl SamplingResult {
    /// Create an empty sampling result
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    /// Record one measurement outcome
    pub fn add_outcome(&mut self, outcome: u64) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Get the count for a specific outcome
    pub fn get_count(&self, outcome: u64) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Get the empirical probability of an outcome (count / shots)
    pub fn get_probability(&self, outcome: u64) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.get_count(outcome) as f64 / self.shots as f64
        }
    }

    /// Total number of shots
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Iterate over (outcome, count) pairs
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of distinct outcomes observed
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// Outcomes sorted by count, descending
    pub fn sorted_outcomes(&self) -> Vec<(u64, usize)> {
        let mut outcomes: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outcomes
    }

    /// Convert counts to MSB-first bitstring keys
    pub fn to_bitstring_counts(&self, num_qubits: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| {
                (
                    format!("{:0width$b}", outcome, width = num_qubits),
                    count,
                )
            })
            .collect()
    }
}

/// Alias table for O(1) sampling from a discrete distribution
///
/// Walker's method: each slot holds a probability threshold and an alias
/// index; a sample draws a slot uniformly, then picks the slot or its
/// alias against the threshold.
struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    fn new(probabilities: &[f64]) -> Result<Self> {
        let n = probabilities.len();
        if n == 0 {
            return Err(StateError::InvalidDimension { dimension: 0 });
        }

        let mut prob = vec![0.0; n];
        let mut alias = vec![0; n];
        let mut scaled: Vec<f64> = probabilities.iter().map(|&p| p * n as f64).collect();

        let mut small = Vec::new();
        let mut large = Vec::new();
        for (i, &p) in scaled.iter().enumerate() {
            if p < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            large.pop();
            prob[s] = scaled[s];
            alias[s] = l;
            scaled[l] = (scaled[l] + scaled[s]) - 1.0;
            if scaled[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        // Leftovers are ones up to floating-point error
        for l in large {
            prob[l] = 1.0;
        }
        for s in small {
            prob[s] = 1.0;
        }

        Ok(Self { prob, alias })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        let i = ((rng.gen::<f64>() * n as f64) as usize).min(n - 1);
        if rng.gen::<f64>() < self.prob[i] {
            i
        } else {
            self.alias[i]
        }
    }
}

impl StateVector {
    /// Draw `shots` independent samples from the measurement distribution
    ///
    /// The state is not collapsed or otherwise modified; counts across
    /// all outcomes sum exactly to `shots`. Pass a seeded generator for
    /// reproducible counts.
    ///
    /// # Example
    /// ```
    /// use qvec_state::StateVector;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut state = StateVector::new(1).unwrap();
    /// state.apply_hadamard(0).unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let result = state.sample(100, &mut rng).unwrap();
    /// assert_eq!(result.get_count(0) + result.get_count(1), 100);
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Result<SamplingResult> {
        if shots == 0 {
            return Ok(SamplingResult::new(0));
        }

        let probabilities = self.probabilities();
        let table = AliasTable::new(&probabilities)?;

        let mut result = SamplingResult::new(shots);
        for _ in 0..shots {
            result.add_outcome(table.sample(rng) as u64);
        }

        Ok(result)
    }
}
