//! Built-in sample scenario used by the binary: six factories with
//! tabulated profits per invested step.

use crate::profit::TabulatedProfit;

/// Step size the sample tables are defined on.
pub const SAMPLE_STEP: u32 = 40;

/// Total budget of the sample scenario (7 steps).
pub const SAMPLE_BUDGET: u32 = 280;

/// The six sample factories, in factory order.
pub fn sample_factories(step_size: u32) -> Vec<TabulatedProfit> {
    let tables: [[i64; 8]; 6] = [
        [0, 8, 10, 11, 12, 18, 20, 21],
        [0, 6, 9, 11, 13, 15, 17, 18],
        [0, 3, 4, 7, 11, 18, 20, 21],
        [0, 4, 6, 8, 13, 16, 18, 19],
        [0, 7, 8, 11, 11, 11, 13, 14],
        [0, 5, 9, 12, 13, 13, 15, 16],
    ];

    tables
        .iter()
        .map(|profits| {
            TabulatedProfit::from_pairs(
                step_size,
                profits.iter().copied().enumerate().map(|(k, p)| (k, p)),
            )
        })
        .collect()
}
