use log::debug;

use crate::profit::ProfitFn;

/// The two tables produced by the forward pass, both `(N+1) x (steps+1)`.
///
/// `max_profit[i][j]` is the best total profit using only the first `i`
/// options and at most `j` steps of budget; row 0 is all zeros.
/// `decisions[i][j]` is the number of steps given to option `i-1` in that
/// optimum, read later by the reconstructor.
pub struct DpTables {
    pub max_profit: Vec<Vec<i64>>,
    pub decisions: Vec<Vec<usize>>,
}

// Forward DP pass over options and cumulative step counts.
//
// For each option i and step budget j, every split is tried: k steps to
// option i, the remaining j - k covered by the best of the previous i
// options (row i, already finalized). A candidate overwrites the cell only
// when strictly better, so among equal-profit splits the smallest k for the
// current option wins.
//
// O(N * step_count^2) profit evaluations; step counts are expected to be
// small because the budget is discretized coarsely.
pub fn build_tables(step_count: usize, step_size: u32, options: &[&dyn ProfitFn]) -> DpTables {
    let n = options.len();
    debug!("building {}x{} profit tables", n + 1, step_count + 1);

    let mut max_profit = vec![vec![0i64; step_count + 1]; n + 1];
    let mut decisions = vec![vec![0usize; step_count + 1]; n + 1];

    for (i, option) in options.iter().enumerate() {
        for j in 0..=step_count {
            for k in 0..=j {
                let amount = k as u32 * step_size;
                let candidate = option.profit(amount) + max_profit[i][j - k];
                if candidate > max_profit[i + 1][j] {
                    max_profit[i + 1][j] = candidate;
                    decisions[i + 1][j] = k;
                }
            }
        }
    }

    DpTables {
        max_profit,
        decisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_steps_leaves_tables_zero() {
        let flat = |_: u32| 7i64;
        let tables = build_tables(0, 10, &[&flat]);
        assert_eq!(tables.max_profit, vec![vec![0], vec![0]]);
        assert_eq!(tables.decisions, vec![vec![0], vec![0]]);
    }

    #[test]
    fn test_single_option_row_is_its_profit_curve() {
        // profit grows with the amount, so every j should invest all j steps
        let linear = |amount: u32| amount as i64;
        let tables = build_tables(3, 5, &[&linear]);
        assert_eq!(tables.max_profit[1], vec![0, 5, 10, 15]);
        assert_eq!(tables.decisions[1], vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_the_smaller_split() {
        // both options yield 1 per step; k=0 for the second option already
        // reaches the optimum via the first, so its decision stays 0.
        let per_step = |amount: u32| amount as i64;
        let tables = build_tables(2, 1, &[&per_step, &per_step]);
        assert_eq!(tables.max_profit[2], vec![0, 1, 2]);
        assert_eq!(tables.decisions[2], vec![0, 0, 0]);
    }

    #[test]
    fn test_negative_profits_are_never_forced() {
        let losing = |amount: u32| -(amount as i64);
        let tables = build_tables(2, 1, &[&losing]);
        // k=0 keeps every cell at zero profit, zero steps
        assert_eq!(tables.max_profit[1], vec![0, 0, 0]);
        assert_eq!(tables.decisions[1], vec![0, 0, 0]);
    }
}
