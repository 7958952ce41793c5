//! Determinism, input-order invariance, and monotonicity properties.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{pipeline::cluster, result::Assignment};

use super::equivalence::run_pipeline;
use super::strategies::shuffle;
use super::types::PipelineFixture;

/// Clustering the same input twice yields identical results.
pub(super) fn run_determinism_property(fixture: &PipelineFixture) -> TestCaseResult {
    let first = run_pipeline(fixture)?;
    let second = run_pipeline(fixture)?;
    if first != second {
        return Err(TestCaseError::fail(format!(
            "repeated runs differ: {:?} vs {:?} ({})",
            first.labels(),
            second.labels(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Shuffling the input leaves the per-value core and noise status intact.
///
/// Holds for any input, duplicates included, because both depend only on
/// the multiset of values.
pub(super) fn run_status_invariance_property(
    fixture: &PipelineFixture,
    seed: u64,
) -> TestCaseResult {
    let shuffled = shuffled_fixture(fixture, seed);
    let original = status_by_value(fixture)?;
    let permuted = status_by_value(&shuffled)?;
    if original != permuted {
        return Err(TestCaseError::fail(format!(
            "core or noise status changed under shuffling ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Shuffling the input leaves the partition unchanged, up to label
/// numbering, and every copy of a value shares one assignment.
pub(super) fn run_partition_invariance_property(
    fixture: &PipelineFixture,
    seed: u64,
) -> TestCaseResult {
    let shuffled = shuffled_fixture(fixture, seed);
    let original = assignment_by_value(fixture)?;
    let permuted = assignment_by_value(&shuffled)?;

    let mut forward: HashMap<Assignment, Assignment> = HashMap::new();
    let mut backward: HashMap<Assignment, Assignment> = HashMap::new();
    for (bits, &left) in &original {
        let Some(&right) = permuted.get(bits) else {
            return Err(TestCaseError::fail(format!(
                "value {} missing after shuffling ({})",
                f64::from_bits(*bits),
                fixture.describe(),
            )));
        };
        let consistent = left.is_noise() == right.is_noise()
            && *forward.entry(left).or_insert(right) == right
            && *backward.entry(right).or_insert(left) == left;
        if !consistent {
            return Err(TestCaseError::fail(format!(
                "partition changed at value {}: {left:?} vs {right:?} ({})",
                f64::from_bits(*bits),
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

/// Growing `eps` never demotes a core point, never turns a clustered point
/// into noise, and never separates core points that shared a cluster.
pub(super) fn run_eps_monotonicity_property(
    fixture: &PipelineFixture,
    growth: f64,
) -> TestCaseResult {
    let narrow = run_pipeline(fixture)?;
    let wider_eps = fixture.eps + growth;
    let wide = cluster(&fixture.values, None, wider_eps, fixture.min_samples).map_err(|err| {
        TestCaseError::fail(format!(
            "pipeline failed at eps={wider_eps}: {err:?} ({})",
            fixture.describe()
        ))
    })?;

    let mut merged_into: HashMap<Assignment, Assignment> = HashMap::new();
    let points = narrow
        .assignments()
        .iter()
        .zip(narrow.core_flags())
        .zip(wide.assignments().iter().zip(wide.core_flags()));
    for (index, ((&before, &was_core), (&after, &is_core))) in points.enumerate() {
        if was_core && !is_core {
            return Err(TestCaseError::fail(format!(
                "point {index} lost core status at eps={wider_eps} ({})",
                fixture.describe(),
            )));
        }
        if !before.is_noise() && after.is_noise() {
            return Err(TestCaseError::fail(format!(
                "point {index} became noise at eps={wider_eps} ({})",
                fixture.describe(),
            )));
        }
        if was_core && *merged_into.entry(before).or_insert(after) != after {
            return Err(TestCaseError::fail(format!(
                "cluster {before:?} split at eps={wider_eps} ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn shuffled_fixture(fixture: &PipelineFixture, seed: u64) -> PipelineFixture {
    let mut shuffled = fixture.clone();
    let mut rng = SmallRng::seed_from_u64(seed);
    shuffle(&mut shuffled.values, &mut rng);
    shuffled
}

/// Sorted `(value bits, core, noise)` triples.
fn status_by_value(fixture: &PipelineFixture) -> Result<Vec<(u64, bool, bool)>, TestCaseError> {
    let result = run_pipeline(fixture)?;
    let mut status: Vec<(u64, bool, bool)> = fixture
        .values
        .iter()
        .zip(result.assignments().iter().zip(result.core_flags()))
        .map(|(value, (assignment, &core))| (value.to_bits(), core, assignment.is_noise()))
        .collect();
    status.sort_unstable();
    Ok(status)
}

fn assignment_by_value(
    fixture: &PipelineFixture,
) -> Result<HashMap<u64, Assignment>, TestCaseError> {
    let result = run_pipeline(fixture)?;
    let mut by_value: HashMap<u64, Assignment> = HashMap::new();
    for (value, &assignment) in fixture.values.iter().zip(result.assignments()) {
        let first = *by_value.entry(value.to_bits()).or_insert(assignment);
        if first != assignment {
            return Err(TestCaseError::fail(format!(
                "copies of value {value} split between {first:?} and {assignment:?} ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(by_value)
}
