use log::warn;

use crate::{Error, Result};

/// Rebuilds the path from `start` to `end` by walking the predecessor map backwards.
///
/// Returns the vertices from `start` to `end` inclusive, `[start]` when
/// `end == start`, and an empty path when the chain from `end` does not lead
/// back to `start` (i.e. `end` is unreachable). Fails with
/// [`Error::UnknownDestination`] when `end` is not covered by the map.
pub fn reconstruct_path(predecessors: &[Option<usize>], start: usize, end: usize) -> Result<Vec<usize>> {
    if end >= predecessors.len() {
        return Err(Error::UnknownDestination(end.to_string()));
    }

    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(vertex) = current {
        // A simple path visits each vertex at most once
        if path.len() == predecessors.len() {
            warn!("Predecessor chain from vertex {} does not terminate, treating as unreachable", end);
            return Ok(Vec::new());
        }

        path.push(vertex);
        current = predecessors.get(vertex).copied().flatten();
    }

    path.reverse();

    if path.first() == Some(&start) {
        Ok(path)
    } else {
        Ok(Vec::new())
    }
}
