use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// One labelled example: `input` matches the input layer, `expected` the output layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningSample {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

impl TuningSample {
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> Self {
        TuningSample { input, expected }
    }
}

/// Links probed during a shallow pass and how many of them did not improve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuneOutcome {
    pub fails: usize,
    pub total: usize,
}

impl TuneOutcome {
    pub fn new(fails: usize, total: usize) -> Self {
        TuneOutcome { fails, total }
    }

    /// Fraction of probed links that failed to improve; 0 when nothing was probed.
    pub fn fail_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.fails as f64 / self.total as f64
        }
    }
}

impl Add for TuneOutcome {
    type Output = TuneOutcome;

    fn add(self, rhs: Self) -> Self::Output {
        TuneOutcome { fails: self.fails + rhs.fails, total: self.total + rhs.total }
    }
}

// Counters are unsigned, so subtraction saturates at 0.
impl Sub for TuneOutcome {
    type Output = TuneOutcome;

    fn sub(self, rhs: Self) -> Self::Output {
        TuneOutcome {
            fails: self.fails.saturating_sub(rhs.fails),
            total: self.total.saturating_sub(rhs.total),
        }
    }
}

impl AddAssign for TuneOutcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for TuneOutcome {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_accumulate() {
        let mut acc = TuneOutcome::default();
        acc += TuneOutcome::new(1, 3);
        acc += TuneOutcome::new(2, 2);
        assert_eq!(acc, TuneOutcome::new(3, 5));
        acc -= TuneOutcome::new(1, 3);
        assert_eq!(acc, TuneOutcome::new(2, 2));
        assert_eq!(acc.fail_ratio(), 1.0);
        assert_eq!(TuneOutcome::default().fail_ratio(), 0.0);
    }

    #[test]
    fn subtraction_saturates_at_zero() {
        let diff = TuneOutcome::new(1, 2) - TuneOutcome::new(3, 1);
        assert_eq!(diff, TuneOutcome::new(0, 1));
    }
}
