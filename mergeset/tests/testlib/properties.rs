use std::collections::HashSet;

/// Intersection computed independently of any merge logic.
pub fn reference_intersection(left: &[u32], right: &[u32]) -> Vec<u32> {
    let right: HashSet<u32> = right.iter().copied().collect();

    let mut result: Vec<u32> = left.iter()
        .copied()
        .filter(|value| right.contains(value))
        .collect();
    result.sort_unstable();
    result
}

pub fn prop_intersection_correct(result: &[u32], left: &[u32], right: &[u32]) -> bool {
    prop_strictly_increasing(result) &&
    prop_result_items_all_common(result, left, right) &&
    result == reference_intersection(left, right).as_slice()
}

pub fn prop_strictly_increasing(result: &[u32]) -> bool {
    result.windows(2).all(|w| w[0] < w[1])
}

// If an item is in the result, then it is in both inputs.
pub fn prop_result_items_all_common(result: &[u32], left: &[u32], right: &[u32]) -> bool {
    result.iter().all(|item| {
        left.binary_search(item).is_ok() && right.binary_search(item).is_ok()
    })
}
