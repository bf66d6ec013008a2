//! Access state counters

use serde::Serialize;

/// Counters describing the generate calls an access state has served
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessMetrics {
    /// Total number of generate calls
    pub generations: u64,

    /// Generate calls that took the super-role bypass
    pub bypass_generations: u64,

    /// Generate calls that ran the filter
    pub filtered_generations: u64,

    /// Top-level routes in the last committed authorized set
    pub last_authorized_len: usize,

    /// Top-level routes in the last committed effective set
    pub last_effective_len: usize,
}

impl AccessMetrics {
    /// Fraction of generate calls that took the super-role bypass
    pub fn bypass_rate(&self) -> f64 {
        if self.generations == 0 {
            0.0
        } else {
            self.bypass_generations as f64 / self.generations as f64
        }
    }

    pub(crate) fn record_generate(&mut self, bypass: bool) {
        self.generations += 1;
        if bypass {
            self.bypass_generations += 1;
        } else {
            self.filtered_generations += 1;
        }
    }

    pub(crate) fn record_commit(&mut self, authorized: usize, effective: usize) {
        self.last_authorized_len = authorized;
        self.last_effective_len = effective;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bypass_rate() {
        let mut metrics = AccessMetrics::default();
        assert_eq!(metrics.bypass_rate(), 0.0);

        metrics.record_generate(true);
        metrics.record_generate(false);
        metrics.record_generate(false);
        metrics.record_generate(true);

        assert_eq!(metrics.generations, 4);
        assert_eq!(metrics.filtered_generations, 2);
        assert_eq!(metrics.bypass_rate(), 0.5);
    }
}
