//! Running-sum accumulator for cumulative distributions
//!
//! A CDF column is a prefix sum over the PDF column in table order. Instead of
//! mutating a loop variable, the sum is threaded through an explicit
//! accumulator:
//!
//! ```text
//! RunningSum(prev) --step(p)--> (RunningSum(prev + p), CdfStep { prev, p, prev + p })
//! ```
//!
//! Every [`CdfStep`] carries enough information to render its own trace
//! string, so a caller can audit how each cumulative value was obtained.

use std::fmt;

use crate::rounding::format_trace_value;

/// Sum of the probabilities seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningSum(f64);

impl RunningSum {
    /// An accumulator that has not seen any probability yet.
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Adds one probability to the sum.
    ///
    /// Returns the advanced accumulator and the step describing the addition.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_stats::cumulative::RunningSum;
    /// let (sum, first) = RunningSum::ZERO.step(0.4);
    /// let (sum, second) = sum.step(0.25);
    ///
    /// assert_eq!(first.to_string(), "0.4000 = 0.4000");
    /// assert_eq!(second.to_string(), "0.4000 + 0.2500 = 0.6500");
    /// assert!((sum.value() - 0.65).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn step(self, probability: f64) -> (Self, CdfStep) {
        let cumulative = self.0 + probability;
        let step = CdfStep {
            previous: self.0,
            probability,
            cumulative,
        };
        (Self(cumulative), step)
    }
}

/// One addition performed by a [`RunningSum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdfStep {
    /// Running sum before this step
    pub previous: f64,
    /// Probability added in this step
    pub probability: f64,
    /// Running sum after this step
    pub cumulative: f64,
}

impl CdfStep {
    /// Whether nothing had been accumulated before this step.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.previous == 0.0
    }

    /// Human-readable derivation of [`cumulative`](Self::cumulative).
    ///
    /// The first step renders as `"p = c"`, later steps as `"prev + p = c"`,
    /// all with four decimal places.
    #[must_use]
    pub fn trace(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CdfStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_first() {
            write!(
                f,
                "{} = {}",
                format_trace_value(self.probability),
                format_trace_value(self.cumulative)
            )
        } else {
            write!(
                f,
                "{} + {} = {}",
                format_trace_value(self.previous),
                format_trace_value(self.probability),
                format_trace_value(self.cumulative)
            )
        }
    }
}

/// Folds a probability sequence into cumulative steps, preserving order.
///
/// # Examples
///
/// ```
/// # use statprob_stats::cumulative::cumulative_steps;
/// let steps = cumulative_steps([0.5, 0.25, 0.25]);
/// let cdf = steps.iter().map(|s| s.cumulative).collect::<Vec<_>>();
/// assert_eq!(cdf, [0.5, 0.75, 1.0]);
/// ```
#[must_use]
pub fn cumulative_steps<I>(probabilities: I) -> Vec<CdfStep>
where
    I: IntoIterator<Item = f64>,
{
    probabilities
        .into_iter()
        .scan(RunningSum::ZERO, |sum, probability| {
            let (next, step) = sum.step(probability);
            *sum = next;
            Some(step)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        assert!(cumulative_steps(Vec::new()).is_empty());
    }

    #[test]
    fn test_first_step_detection() {
        let steps = cumulative_steps([0.2, 0.3]);
        assert!(steps[0].is_first());
        assert!(!steps[1].is_first());
        assert_eq!(steps[1].previous, steps[0].cumulative);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let sum = RunningSum::ZERO;
        let (next, _) = sum.step(0.5);
        assert_eq!(sum.value(), 0.0);
        assert_eq!(next.value(), 0.5);
    }

    #[test]
    fn test_trace_strings() {
        let steps = cumulative_steps([0.4, 0.25, 0.2, 0.15]);
        let traces = steps.iter().map(CdfStep::trace).collect::<Vec<_>>();
        assert_eq!(
            traces,
            [
                "0.4000 = 0.4000",
                "0.4000 + 0.2500 = 0.6500",
                "0.6500 + 0.2000 = 0.8500",
                "0.8500 + 0.1500 = 1.0000",
            ]
        );
    }

    #[test]
    fn test_zero_probability_step() {
        let steps = cumulative_steps([1.0, 0.0]);
        assert_eq!(steps[1].trace(), "1.0000 + 0.0000 = 1.0000");
        assert_eq!(steps[1].cumulative, 1.0);
    }

    #[test]
    fn test_cumulative_is_non_decreasing() {
        let steps = cumulative_steps([0.1, 0.0, 0.3, 0.05, 0.55]);
        assert!(steps.is_sorted_by(|a, b| a.cumulative <= b.cumulative));
    }
}
