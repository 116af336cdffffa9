//! Timing measurement and Welch t-test analysis
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Result of comparing the timings of two input classes
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
    pub cohens_d: f64,
    pub effect_size_interpretation: String,
    pub confidence_interval: (f64, f64),
}

/// Mean, sample variance and count of one timing series
#[derive(Debug, Clone, Copy)]
struct Summary {
    mean: f64,
    var: f64,
    n: f64,
}

impl Summary {
    fn of(times: &[u128]) -> Self {
        let n = times.len() as f64;
        let mean = times.iter().sum::<u128>() as f64 / n;
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        Self {
            mean,
            var: ss / (n - 1.0),
            n,
        }
    }

    fn std_dev(&self) -> f64 {
        self.var.sqrt()
    }

    fn rel_std_dev(&self) -> f64 {
        self.std_dev() / self.mean
    }

    fn standard_error_sq(&self) -> f64 {
        self.var / self.n
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call of `f`, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            times.push(start.elapsed().as_nanos() / self.num_iterations as u128);
        }
        times
    }

    /// Interleave the two measurements sample by sample so drift hits both
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let once = Self::new(1, self.num_iterations);
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.extend(once.measure(&mut a));
            times_b.extend(once.measure(&mut b));
        }
        (times_a, times_b)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
        times
            .iter()
            .filter(|&&t| (t as f64) >= lo && (t as f64) <= hi)
            .copied()
            .collect()
    }

    /// Welch's t-statistic
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (a, b) = (Summary::of(times_a), Summary::of(times_b));
        welch_t(&a, &b)
    }

    /// Welch-Satterthwaite degrees of freedom
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (a, b) = (Summary::of(times_a), Summary::of(times_b));
        welch_df(&a, &b)
    }

    /// Two-tailed p-value from Student's t distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return if t_stat.abs() < 2.0 { 1.0 } else { 0.0 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }

    fn t_critical_value(df: f64, confidence_level: f64) -> f64 {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0),
            Err(_) => 1.96,
        }
    }

    pub fn interpret_effect_size(d: f64) -> String {
        match d {
            d if d < 0.2 => "Negligible effect".to_string(),
            d if d < 0.5 => "Small effect".to_string(),
            d if d < 0.8 => "Medium effect".to_string(),
            d if d < 1.2 => "Large effect".to_string(),
            _ => "Very large effect".to_string(),
        }
    }

    /// Weighted blend of mean ratio, t-statistic and relative spread.
    /// 1.0 means indistinguishable.
    pub fn combined_score(mean_ratio: f64, t_stat: f64, max_rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + max_rel_std_dev * 0.3;
        if !score.is_finite() || score < 1.0 {
            mean_ratio
        } else {
            score
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("After outlier removal, not enough data points remain".to_string());
        }

        let a = Summary::of(&clean_a);
        let b = Summary::of(&clean_b);
        let mean_ratio = a.mean.max(b.mean) / a.mean.min(b.mean);
        let t_stat = welch_t(&a, &b);
        let df = welch_df(&a, &b);
        let p_value = Self::p_value(t_stat, df);
        let combined_score =
            Self::combined_score(mean_ratio, t_stat, a.rel_std_dev().max(b.rel_std_dev()));

        let pooled = ((a.var * (a.n - 1.0) + b.var * (b.n - 1.0)) / (a.n + b.n - 2.0)).sqrt();
        let cohens_d = (a.mean - b.mean).abs() / pooled;

        let margin = Self::t_critical_value(df, 0.95)
            * (a.standard_error_sq() + b.standard_error_sq()).sqrt();
        let diff = (a.mean - b.mean).abs();

        Ok(TimingAnalysis {
            mean_a: a.mean,
            mean_b: b.mean,
            std_dev_a: a.std_dev(),
            std_dev_b: b.std_dev(),
            mean_ratio,
            t_statistic: t_stat,
            degrees_of_freedom: df,
            p_value,
            combined_score,
            is_constant_time: combined_score <= config.combined_score_threshold
                && mean_ratio <= config.mean_ratio_max,
            cohens_d,
            effect_size_interpretation: Self::interpret_effect_size(cohens_d),
            confidence_interval: ((diff - margin).max(0.0), diff + margin),
        })
    }
}

fn welch_t(a: &Summary, b: &Summary) -> f64 {
    (a.mean - b.mean).abs() / (a.standard_error_sq() + b.standard_error_sq()).sqrt()
}

fn welch_df(a: &Summary, b: &Summary) -> f64 {
    let (ta, tb) = (a.standard_error_sq(), b.standard_error_sq());
    (ta + tb).powi(2) / (ta.powi(2) / (a.n - 1.0) + tb.powi(2) / (b.n - 1.0))
}

/// Human-readable verdict with the statistics that drove it
pub fn generate_test_insights(
    analysis: &TimingAnalysis,
    config: &TestConfig,
    primitive_name: &str,
) -> String {
    let diff_percent = (analysis.mean_a - analysis.mean_b).abs()
        / analysis.mean_a.min(analysis.mean_b)
        * 100.0;

    if analysis.is_constant_time {
        return format!("PASS: {} shows no timing difference.\n", primitive_name);
    }

    let mut insights = format!("FAIL: {} timing difference detected.\n\n", primitive_name);
    insights.push_str(&format!(
        "  Mean: {:.0} ns vs {:.0} ns (diff: {:.1}%)\n",
        analysis.mean_a, analysis.mean_b, diff_percent
    ));
    insights.push_str(&format!(
        "  Stats: t={:.1} (threshold {:.1}), p={:.2e}, d={:.1} ({})\n",
        analysis.t_statistic,
        config.t_stat_threshold,
        analysis.p_value,
        analysis.cohens_d,
        analysis.effect_size_interpretation
    ));
    insights.push_str(&format!(
        "  Score: {:.3} (threshold {:.3}), ratio {:.3} (max {:.3})\n",
        analysis.combined_score,
        config.combined_score_threshold,
        analysis.mean_ratio,
        config.mean_ratio_max
    ));
    if analysis.mean_ratio > 1.5 && analysis.p_value < 0.001 {
        insights.push_str("  Pattern: consistent gap, likely a branch or early exit on input\n");
    } else {
        insights.push_str("  Pattern: weak or noisy difference, rerun on an idle machine\n");
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_statistics() {
        let s = Summary::of(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.var - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_outliers_removed() {
        let mut times = vec![100u128; 20];
        times.push(10_000);
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 20);
    }

    #[test]
    fn test_identical_series_pass() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 5)).collect();
        let b = a.clone();
        let tester = TimingTester::new(30, 1);
        let analysis = tester
            .analyze_constant_time(&a, &b, &TestConfig::default())
            .unwrap();
        assert!(analysis.t_statistic < 1e-9);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn test_separated_series_fail() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 5)).collect();
        let b: Vec<u128> = a.iter().map(|&t| t * 2).collect();
        let tester = TimingTester::new(30, 1);
        let config = TestConfig::default();
        let analysis = tester.analyze_constant_time(&a, &b, &config).unwrap();
        assert!(!analysis.is_constant_time);
        assert!(analysis.p_value < 0.001);
        assert!(generate_test_insights(&analysis, &config, "sort").starts_with("FAIL"));
    }
}
