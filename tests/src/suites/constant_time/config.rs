//! Thresholds and sample sizes for timing checks

/// Configuration for one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Largest acceptable ratio between the two mean timings
    pub mean_ratio_max: f64,
    /// t-statistic threshold, reported in diagnostics
    pub t_stat_threshold: f64,
    /// Combined score threshold deciding pass/fail
    pub combined_score_threshold: f64,
    /// Untimed calls before measuring
    pub num_warmup: usize,
    /// Timed samples per input class
    pub num_samples: usize,
    /// Calls averaged into one sample
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_max: 1.25,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 1000,
            num_samples: 25,
            num_iterations: 1000,
        }
    }
}

impl TestConfig {
    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Presets per kernel; heavier kernels take fewer, longer samples
impl TestConfig {
    /// Scalar field operations
    pub fn for_field() -> Self {
        Self::default()
    }

    /// Sorting network over a few thousand words
    pub fn for_sort() -> Self {
        Self::default()
            .with_warmup(50)
            .with_samples_and_iterations(25, 50)
            .with_combined_score_threshold(1.9)
    }

    /// Minimal polynomial at t = 64
    pub fn for_minimal_polynomial() -> Self {
        Self::default()
            .with_mean_ratio_max(1.3)
            .with_warmup(5)
            .with_samples_and_iterations(15, 5)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    /// Benes network over one 4096-bit plane
    pub fn for_benes() -> Self {
        Self::default()
            .with_warmup(100)
            .with_samples_and_iterations(25, 100)
    }
}
