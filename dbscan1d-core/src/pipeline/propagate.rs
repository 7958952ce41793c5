//! Cluster propagation between core points.
//!
//! Two core points belong to the same cluster when a chain of core points
//! joins them and each consecutive pair lies within `eps`. Along the sorted
//! sweep this reduces to comparing each core position with the furthest
//! neighbourhood bound reached by the current cluster.

use crate::result::{Assignment, ClusterId};

use super::{StageError, neighbourhood::Neighbourhood};

/// Sorted-order labels after core propagation. Non-core positions are still
/// [`Assignment::Noise`] at this stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CoreClusters {
    pub(crate) labels: Vec<Assignment>,
    pub(crate) cluster_count: usize,
}

#[derive(Clone, Copy, Debug)]
struct OpenCluster {
    id: ClusterId,
    /// Exclusive upper bound of the union of member neighbourhoods.
    reach: usize,
}

/// Assigns cluster ids to core positions in a single left-to-right pass.
///
/// Ids are handed out in order of first appearance along the sweep, so the
/// leftmost cluster is always `0`.
///
/// # Errors
/// Returns [`StageError::Invariant`] if a cluster index does not fit an
/// `i64` label.
pub(crate) fn propagate(
    neighbourhoods: &[Neighbourhood],
    core: &[bool],
) -> Result<CoreClusters, StageError> {
    let mut labels = vec![Assignment::Noise; neighbourhoods.len()];
    let mut open: Option<OpenCluster> = None;
    let mut cluster_count = 0_usize;

    let core_positions = neighbourhoods
        .iter()
        .zip(core)
        .enumerate()
        .filter_map(|(position, (&hood, &is_core))| is_core.then_some((position, hood)));

    for (position, hood) in core_positions {
        let cluster = match open {
            Some(current) if position < current.reach => OpenCluster {
                id: current.id,
                reach: current.reach.max(hood.hi),
            },
            _ => {
                let id = ClusterId::from_index(cluster_count).ok_or(StageError::Invariant {
                    context: "numbering clusters along the sweep",
                })?;
                cluster_count += 1;
                OpenCluster { id, reach: hood.hi }
            }
        };
        if let Some(slot) = labels.get_mut(position) {
            *slot = Assignment::Cluster(cluster.id);
        }
        open = Some(cluster);
    }

    Ok(CoreClusters {
        labels,
        cluster_count,
    })
}
