//! Simulator configuration

/// Configuration for the quantum simulator
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Number of measurement shots for sampling
    ///
    /// Default: 1024
    pub shots: usize,

    /// Random seed for reproducible sampling
    ///
    /// If `None`, sampling seeds from entropy. Unitary evolution never
    /// consumes randomness, so `run` is deterministic either way.
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// Minimum number of qubits to shard amplitude loops with rayon
    ///
    /// Smaller circuits run single-threaded to avoid synchronization
    /// overhead. Sharding happens only within a single gate application;
    /// gates are always serialized against each other.
    ///
    /// Default: 14
    pub parallel_threshold: usize,

    /// Memory limit in bytes for the amplitude buffer (0 = unlimited)
    ///
    /// Checked before allocation; exceeding it fails with a clear
    /// `TooManyQubits` error instead of an allocator abort.
    ///
    /// Default: 0
    pub memory_limit: usize,

    /// Collect execution statistics during `run`
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            parallel_threshold: 14,
            memory_limit: 0,
            collect_statistics: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for debugging: seeded and instrumented
    pub fn debug() -> Self {
        Self {
            seed: Some(42),
            collect_statistics: true,
            ..Default::default()
        }
    }

    /// Set the number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the random seed for reproducible sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the parallel threshold in qubits
    pub fn with_parallel_threshold(mut self, qubits: usize) -> Self {
        self.parallel_threshold = qubits;
        self
    }

    /// Set the memory limit in bytes
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.shots == 0 {
            return Err("shots must be > 0".to_string());
        }
        Ok(())
    }
}
