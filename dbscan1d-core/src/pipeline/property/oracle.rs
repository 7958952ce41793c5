//! Naive quadratic DBSCAN oracle.
//!
//! Works directly on the unsorted input: every pair of points is compared,
//! core components are joined with a union-find, and border candidates are
//! recorded rather than resolved, since classical DBSCAN leaves contested
//! borders unspecified.

/// Reference clustering computed pairwise.
#[derive(Clone, Debug)]
pub(super) struct OracleClustering {
    /// Whether each point is core.
    pub core: Vec<bool>,
    /// For each core point, the smallest original index in its component.
    pub core_component: Vec<Option<usize>>,
    /// For each point, the core points within `eps` of it.
    pub reachable_cores: Vec<Vec<usize>>,
}

impl OracleClustering {
    /// Whether the oracle labels `index` as noise.
    pub(super) fn is_noise(&self, index: usize) -> bool {
        !self.core[index] && self.reachable_cores[index].is_empty()
    }

    /// Number of distinct core components.
    pub(super) fn cluster_count(&self) -> usize {
        let mut roots: Vec<usize> = self.core_component.iter().flatten().copied().collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }
}

/// Runs DBSCAN by comparing every pair of points.
pub(super) fn naive_dbscan(values: &[f64], eps: f64, min_samples: usize) -> OracleClustering {
    let n = values.len();
    let neighbours: Vec<Vec<usize>> = values
        .iter()
        .map(|&a| {
            values
                .iter()
                .enumerate()
                .filter(|&(_, &b)| (b - a).abs() <= eps)
                .map(|(j, _)| j)
                .collect()
        })
        .collect();
    let core: Vec<bool> = neighbours.iter().map(|n| n.len() >= min_samples).collect();

    let mut parent: Vec<usize> = (0..n).collect();
    for (i, hood) in neighbours.iter().enumerate() {
        if !core[i] {
            continue;
        }
        for &j in hood.iter().filter(|&&j| core[j]) {
            union(&mut parent, i, j);
        }
    }

    let core_component = (0..n)
        .map(|i| core[i].then(|| find(&mut parent, i)))
        .collect();
    let reachable_cores = neighbours
        .iter()
        .map(|hood| hood.iter().copied().filter(|&j| core[j]).collect())
        .collect();

    OracleClustering {
        core,
        core_component,
        reachable_cores,
    }
}

/// Clusters with `min_samples = 1` by merging sorted values whose gap is at
/// most `eps`. Returns labels numbered along the sorted order.
pub(super) fn interval_merge(values: &[f64], eps: f64) -> Vec<i64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]).then(a.cmp(&b)));

    let mut labels = vec![-1_i64; values.len()];
    let mut current = -1_i64;
    let mut previous: Option<f64> = None;
    for &index in &order {
        let value = values[index];
        if previous.is_none_or(|p| value - p > eps) {
            current += 1;
        }
        labels[index] = current;
        previous = Some(value);
    }
    labels
}

fn find(parent: &mut [usize], node: usize) -> usize {
    let mut root = node;
    while parent[root] != root {
        root = parent[root];
    }
    let mut current = node;
    while parent[current] != root {
        let next = parent[current];
        parent[current] = root;
        current = next;
    }
    root
}

/// Joins two components, keeping the smaller index as the root.
fn union(parent: &mut [usize], left: usize, right: usize) {
    let left_root = find(parent, left);
    let right_root = find(parent, right);
    let (keep, merge) = if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    };
    parent[merge] = keep;
}
