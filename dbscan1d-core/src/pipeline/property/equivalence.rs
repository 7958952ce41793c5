//! Agreement with the quadratic oracle and structural output checks.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    pipeline::cluster,
    result::{Assignment, ClusteringResult},
};

use super::oracle::naive_dbscan;
use super::types::PipelineFixture;

pub(super) fn run_pipeline(fixture: &PipelineFixture) -> Result<ClusteringResult, TestCaseError> {
    cluster(&fixture.values, None, fixture.eps, fixture.min_samples).map_err(|err| {
        TestCaseError::fail(format!("pipeline failed: {err:?} ({})", fixture.describe()))
    })
}

/// Checks that the sweep reproduces classical DBSCAN.
///
/// Core flags, the partition of core points, and the noise set must match
/// exactly. A border point only has to land in a cluster owning a core point
/// within `eps` of it.
pub(super) fn run_oracle_equivalence_property(fixture: &PipelineFixture) -> TestCaseResult {
    let result = run_pipeline(fixture)?;
    let oracle = naive_dbscan(&fixture.values, fixture.eps, fixture.min_samples.get());

    if result.core_flags() != oracle.core.as_slice() {
        return Err(TestCaseError::fail(format!(
            "core flags differ: sweep={:?}, oracle={:?} ({})",
            result.core_flags(),
            oracle.core,
            fixture.describe(),
        )));
    }

    let mut label_to_root: HashMap<Assignment, usize> = HashMap::new();
    let mut root_to_label: HashMap<usize, Assignment> = HashMap::new();
    let core_roots = oracle
        .core_component
        .iter()
        .enumerate()
        .filter_map(|(index, component)| component.map(|root| (index, root)));
    for (index, root) in core_roots {
        let label = result.assignments()[index];
        let mapped_root = *label_to_root.entry(label).or_insert(root);
        let mapped_label = *root_to_label.entry(root).or_insert(label);
        if mapped_root != root || mapped_label != label {
            return Err(TestCaseError::fail(format!(
                "core point {index} splits or merges oracle components ({})",
                fixture.describe(),
            )));
        }
    }

    for (index, &assignment) in result.assignments().iter().enumerate() {
        if oracle.core[index] {
            continue;
        }
        if oracle.is_noise(index) != assignment.is_noise() {
            return Err(TestCaseError::fail(format!(
                "noise mismatch at {index}: sweep={assignment:?} ({})",
                fixture.describe(),
            )));
        }
        let claimed = oracle.reachable_cores[index]
            .iter()
            .any(|&core| result.assignments()[core] == assignment);
        if !assignment.is_noise() && !claimed {
            return Err(TestCaseError::fail(format!(
                "border {index} assigned to {assignment:?} without a core within eps ({})",
                fixture.describe(),
            )));
        }
    }

    if result.cluster_count() != oracle.cluster_count() {
        return Err(TestCaseError::fail(format!(
            "cluster count mismatch: sweep={}, oracle={} ({})",
            result.cluster_count(),
            oracle.cluster_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Checks output length and that labels, read along the sorted values, are
/// numbered `0, 1, 2, ...` in order of first appearance.
pub(super) fn run_label_order_property(fixture: &PipelineFixture) -> TestCaseResult {
    let result = run_pipeline(fixture)?;
    if result.len() != fixture.values.len() {
        return Err(TestCaseError::fail(format!(
            "length mismatch: labels={}, values={} ({})",
            result.len(),
            fixture.values.len(),
            fixture.describe(),
        )));
    }

    let mut order: Vec<usize> = (0..fixture.values.len()).collect();
    order.sort_by(|&a, &b| fixture.values[a].total_cmp(&fixture.values[b]).then(a.cmp(&b)));
    let labels = result.labels();
    let mut next = 0_i64;
    for label in order.iter().map(|&index| labels[index]).filter(|&l| l >= 0) {
        if label == next {
            next += 1;
        } else if label != next - 1 {
            return Err(TestCaseError::fail(format!(
                "label {label} out of sweep order, expected {} or {next} ({})",
                next - 1,
                fixture.describe(),
            )));
        }
    }

    if usize::try_from(next).ok() != Some(result.cluster_count()) {
        return Err(TestCaseError::fail(format!(
            "saw {next} labels but cluster_count is {} ({})",
            result.cluster_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}
