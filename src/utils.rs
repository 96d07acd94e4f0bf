/// Index of the first maximum.
///
/// Ties go to the lowest index. A NaN never replaces the current maximum,
/// and an empty input yields 0.
pub fn argmax<T: PartialOrd>(values: impl IntoIterator<Item = T>) -> usize {
    let mut values = values.into_iter().enumerate();
    let (mut result, mut max) = match values.next() {
        Some(first) => first,
        None => return 0,
    };
    for (i, v) in values {
        if v > max {
            max = v;
            result = i;
        }
    }
    result
}

/// Relative frequency of each action in `0..action_count`.
///
/// Actions outside the range are ignored but still count towards the total.
pub fn action_frequencies(actions: &[usize], action_count: usize) -> Vec<f64> {
    let mut counts: Vec<usize> = vec![0; action_count];
    for &a in actions {
        if a < action_count {
            counts[a] += 1;
        }
    }
    if actions.is_empty() {
        return vec![0.0; action_count];
    }
    counts
        .iter()
        .map(|&c| c as f64 / actions.len() as f64)
        .collect()
}
