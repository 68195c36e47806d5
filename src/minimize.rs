//! Monotone subset-elimination minimizer.
//!
//! Candidates are processed in increasing `size()` (positive literals + module
//! references). At each level, a candidate survives only if no already-accepted
//! cut set of lower order is a subset of it; survivors of exactly this level's
//! size are themselves minimal and become next level's subset-dominance
//! reference, survivors that are larger carry forward to the next level.

use crate::cut_set::CutSet;

/// Appends the minimal cut sets found in `candidates` to `mcs`, in increasing
/// order of `size()`. `mcs_lower_order` must already contain every minimal cut
/// set of `size() < min_order` (the invariant this function maintains across its
/// own recursive calls).
pub fn minimize_cut_sets(
    candidates: Vec<CutSet>,
    mcs_lower_order: &[CutSet],
    min_order: usize,
    mcs: &mut Vec<CutSet>,
) {
    if candidates.is_empty() {
        return;
    }

    let mut next_candidates = Vec::new();
    let mut level_mcs = Vec::new();

    for candidate in candidates {
        if mcs_lower_order.iter().any(|accepted| candidate.includes(accepted)) {
            continue;
        }
        if candidate.size() == min_order {
            level_mcs.push(candidate);
        } else {
            next_candidates.push(candidate);
        }
    }

    mcs.extend(level_mcs.iter().cloned());
    minimize_cut_sets(next_candidates, &level_mcs, min_order + 1, mcs);
}
