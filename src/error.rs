use thiserror::Error;

/// Result alias for planner operations.
pub type Result<T> = std::result::Result<T, InvestError>;

/// Input-validation failures, detected at the boundary of
/// [`optimal_investments`](crate::optimal_investments) before any table is
/// allocated. A failed call produces no table and no allocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvestError {
    /// Budget or step is zero, or the budget is not a multiple of the step.
    #[error("invalid budget: {total_budget} must be a positive multiple of step size {step_size}")]
    InvalidBudget { total_budget: u32, step_size: u32 },

    /// The options sequence is empty.
    #[error("no investment options were provided")]
    NoOptions,
}
