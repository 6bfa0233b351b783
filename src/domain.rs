// src/domain.rs

use ndarray::Array1;

/// Half-open sampling interval `[start, end)` stepped by `step`.
///
/// No validation is applied. A reversed interval, a step pointing away from
/// `end`, or a zero/NaN step all produce an empty sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Number of sample points: `ceil((end - start) / step)`, floored at zero.
    /// A huge but finite count is not capped; [`Domain::samples`] then fails to
    /// allocate, the same way an oversized `arange` would.
    pub fn len(&self) -> usize {
        let count = ((self.end - self.start) / self.step).ceil();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sample points `start + i * step` for `i in 0..len()`.
    pub fn samples(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.len(), |i| self.start + i as f64 * self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_steps_exclude_end() {
        let domain = Domain::new(0.0, 1.0, 0.25);
        assert_eq!(domain.len(), 4);
        assert_eq!(domain.samples().to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_partial_last_step_is_included() {
        let samples = Domain::new(0.0, 1.0, 0.3).samples();
        assert_eq!(samples.len(), 4);
        assert!((samples[3] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_domain_is_empty() {
        let domain = Domain::new(5.0, 0.0, 1.0);
        assert!(domain.is_empty());
        assert_eq!(domain.samples().len(), 0);
    }

    #[test]
    fn test_negative_step_walks_downwards() {
        let samples = Domain::new(2.0, 0.0, -0.5).samples();
        assert_eq!(samples.to_vec(), vec![2.0, 1.5, 1.0, 0.5]);
    }

    #[test]
    fn test_degenerate_steps_are_empty() {
        assert!(Domain::new(0.0, 1.0, 0.0).is_empty());
        assert!(Domain::new(0.0, 1.0, f64::NAN).is_empty());
        assert!(Domain::new(1.0, 1.0, 0.1).is_empty());
    }

    #[test]
    fn test_demo_domain_has_two_hundred_points() {
        let domain = Domain::new(0.0, 20.0, 0.1);
        assert_eq!(domain.len(), 200);
        let samples = domain.samples();
        assert_eq!(samples[0], 0.0);
        assert!(samples[199] < 20.0);
    }
}

// src/domain.rs
