//! Discretized investment allocation planner.
//!
//! Splits a fixed budget across a fixed set of investment options, each with
//! its own profit function defined on multiples of a step size, maximizing
//! total profit. Two phases: a forward dynamic-programming pass builds a
//! maximum-profit table plus a parallel decision table ([`tables`]), then a
//! backward walk over the decisions recovers the per-option allocation
//! ([`reconstruct`]).

pub mod error;
pub mod profit;
pub mod reconstruct;
pub mod sample;
pub mod tables;

pub use error::{InvestError, Result};
pub use profit::{ProfitFn, TabulatedProfit};

use log::info;

/// Outcome of one planning run: the best achievable total profit and the
/// invested amount per option, in input option order. Every amount is a
/// non-negative multiple of the step size; the amounts sum to at most the
/// total budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentPlan {
    pub optimal_profit: i64,
    pub allocations: Vec<u32>,
}

/// Compute the profit-maximizing allocation of `total_budget` across
/// `options`, investing only in multiples of `step_size`.
///
/// Fails with [`InvestError::InvalidBudget`] when the budget is zero, the
/// step is zero, or the budget is not a multiple of the step, and with
/// [`InvestError::NoOptions`] when `options` is empty. Both are checked
/// before any table is allocated; the internal phases assume valid inputs.
pub fn optimal_investments(
    total_budget: u32,
    step_size: u32,
    options: &[&dyn ProfitFn],
) -> Result<InvestmentPlan> {
    if total_budget == 0 || step_size == 0 || total_budget % step_size != 0 {
        return Err(InvestError::InvalidBudget {
            total_budget,
            step_size,
        });
    }
    if options.is_empty() {
        return Err(InvestError::NoOptions);
    }

    let step_count = (total_budget / step_size) as usize;
    let tables = tables::build_tables(step_count, step_size, options);

    let optimal_profit = tables.max_profit[options.len()][step_count];
    let steps = reconstruct::reconstruct(step_count, options.len(), &tables.decisions);
    let allocations = steps.iter().map(|&k| k as u32 * step_size).collect();

    info!(
        "planned {} options over {} steps, optimal profit {}",
        options.len(),
        step_count,
        optimal_profit
    );
    Ok(InvestmentPlan {
        optimal_profit,
        allocations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indivisible_budget_is_rejected() {
        let flat = |_: u32| 0i64;
        let err = optimal_investments(100, 40, &[&flat]).unwrap_err();
        assert_eq!(
            err,
            InvestError::InvalidBudget {
                total_budget: 100,
                step_size: 40
            }
        );
    }

    #[test]
    fn test_zero_budget_and_zero_step_are_rejected() {
        let flat = |_: u32| 0i64;
        assert!(matches!(
            optimal_investments(0, 40, &[&flat]),
            Err(InvestError::InvalidBudget { .. })
        ));
        assert!(matches!(
            optimal_investments(100, 0, &[&flat]),
            Err(InvestError::InvalidBudget { .. })
        ));
    }

    #[test]
    fn test_empty_options_are_rejected() {
        assert_eq!(
            optimal_investments(80, 40, &[]).unwrap_err(),
            InvestError::NoOptions
        );
    }

    #[test]
    fn test_single_option_gets_the_whole_budget() {
        let f = TabulatedProfit::from_pairs(40, [(0, 0), (1, 3), (2, 9)]);
        let plan = optimal_investments(80, 40, &[&f]).unwrap();
        assert_eq!(plan.optimal_profit, 9);
        assert_eq!(plan.allocations, vec![80]);
    }
}
