use std::collections::HashMap;

/// An investment option's profit function.
///
/// `amount` is always a non-negative multiple of the step size, at most the
/// total budget. Implementations must be pure: the planner may evaluate the
/// same amount several times during a computation.
pub trait ProfitFn {
    fn profit(&self, amount: u32) -> i64;
}

impl<F> ProfitFn for F
where
    F: Fn(u32) -> i64,
{
    fn profit(&self, amount: u32) -> i64 {
        self(amount)
    }
}

/// Profit function backed by tabulated data.
///
/// The table is keyed by the number of steps invested (`amount / step_size`);
/// an amount with no entry yields zero profit rather than an error.
pub struct TabulatedProfit {
    step_size: u32,
    by_steps: HashMap<usize, i64>,
}

impl TabulatedProfit {
    pub fn new(step_size: u32, by_steps: HashMap<usize, i64>) -> Self {
        Self { step_size, by_steps }
    }

    /// Build the table from `(steps, profit)` pairs.
    pub fn from_pairs(step_size: u32, pairs: impl IntoIterator<Item = (usize, i64)>) -> Self {
        Self::new(step_size, pairs.into_iter().collect())
    }
}

impl ProfitFn for TabulatedProfit {
    fn profit(&self, amount: u32) -> i64 {
        // Amounts off the step grid are a caller bug, not a data miss.
        assert_eq!(
            amount % self.step_size,
            0,
            "amount {} is not a multiple of step size {}",
            amount,
            self.step_size
        );
        let steps = (amount / self.step_size) as usize;
        self.by_steps.get(&steps).copied().unwrap_or(0)
    }
}
