use log::warn;

/// Turns a predecessor table into the ordered path `[source, ..., sink]`
///
/// Returns `[source]` when `sink == source`. Returns an empty path when the backward
/// walk from `sink` ends anywhere other than `source`, which is how an unreachable
/// sink shows up in the table.
pub fn reconstruct(predecessors: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
    if sink == source {
        return vec![source];
    }
    if sink >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![sink];
    let mut current = sink;
    while let Some(pred) = predecessors.get(current).copied().flatten() {
        if pred == source {
            path.push(source);
            path.reverse();
            return path;
        }

        // A well-formed table is a tree, so any walk longer than the table loops.
        if path.len() >= predecessors.len() {
            warn!("Cycle detected in predecessor table walking back from {}", sink);
            return Vec::new();
        }
        path.push(pred);
        current = pred;
    }

    Vec::new()
}
