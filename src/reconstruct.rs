// Backtracking over the decision table built by the forward pass.
//
// Starting from (option_count, step_count), each option's recorded split is
// peeled off the remaining budget in reverse option order. The table is
// internally consistent by construction, so `remaining` hits exactly the
// steps consumed by the earlier options; no search or fallback is needed.
// Out-of-range indices mean the caller handed over a foreign table, which is
// a bug, not a runtime condition.
pub fn reconstruct(step_count: usize, option_count: usize, decisions: &[Vec<usize>]) -> Vec<usize> {
    let mut allocations = vec![0usize; option_count];
    let mut remaining = step_count;
    for i in (0..option_count).rev() {
        let steps = decisions[i + 1][remaining];
        allocations[i] = steps;
        remaining -= steps;
    }
    allocations
}
