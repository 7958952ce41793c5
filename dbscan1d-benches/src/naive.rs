//! Quadratic DBSCAN used as the benchmark baseline.
//!
//! Every neighbourhood is found by comparing each pair of values, and
//! clusters grow by depth-first expansion from core seeds visited in input
//! order. Border points join the first cluster that reaches them.

use dbscan1d_core::NOISE_LABEL;

const UNASSIGNED: i64 = NOISE_LABEL - 1;

/// Clusters `values` by comparing every pair, returning one label per value
/// with [`NOISE_LABEL`] for noise.
///
/// # Examples
/// ```
/// use dbscan1d_benches::naive::naive_dbscan;
///
/// let labels = naive_dbscan(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 40.0], 1.5, 2);
/// assert_eq!(labels, vec![0, 0, 0, 1, 1, 1, -1]);
/// ```
#[must_use]
pub fn naive_dbscan(values: &[f64], eps: f64, min_samples: usize) -> Vec<i64> {
    let neighbourhoods = pairwise_neighbourhoods(values, eps);
    let core: Vec<bool> = neighbourhoods
        .iter()
        .map(|neighbours| neighbours.len() >= min_samples)
        .collect();

    let mut labels = vec![UNASSIGNED; values.len()];
    let mut next_label = 0_i64;
    for (seed, &is_core) in core.iter().enumerate() {
        if !is_core || labels.get(seed) != Some(&UNASSIGNED) {
            continue;
        }
        expand(seed, next_label, &neighbourhoods, &core, &mut labels);
        next_label += 1;
    }

    for label in &mut labels {
        if *label == UNASSIGNED {
            *label = NOISE_LABEL;
        }
    }
    labels
}

#[expect(clippy::float_arithmetic, reason = "pairwise distances")]
fn pairwise_neighbourhoods(values: &[f64], eps: f64) -> Vec<Vec<usize>> {
    values
        .iter()
        .map(|&left| {
            values
                .iter()
                .enumerate()
                .filter(|&(_, &right)| (right - left).abs() <= eps)
                .map(|(index, _)| index)
                .collect()
        })
        .collect()
}

fn expand(
    seed: usize,
    label: i64,
    neighbourhoods: &[Vec<usize>],
    core: &[bool],
    labels: &mut [i64],
) {
    if let Some(slot) = labels.get_mut(seed) {
        *slot = label;
    }
    let mut frontier = vec![seed];
    while let Some(point) = frontier.pop() {
        let Some(neighbours) = neighbourhoods.get(point) else {
            continue;
        };
        for &neighbour in neighbours {
            let Some(slot) = labels.get_mut(neighbour) else {
                continue;
            };
            if *slot != UNASSIGNED {
                continue;
            }
            *slot = label;
            if core.get(neighbour).copied().unwrap_or(false) {
                frontier.push(neighbour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::naive_dbscan;
    use crate::source::{BlobConfig, SyntheticValues};
    use dbscan1d_core::{Dbscan1dBuilder, NOISE_LABEL};
    use rstest::rstest;

    #[rstest]
    #[case::outlier(&[1.0, 2.0, 100.0], 1.5, 2, &[0, 0, NOISE_LABEL])]
    #[case::lone_point(&[5.0], 1.0, 2, &[NOISE_LABEL])]
    #[case::duplicates(&[1.0, 1.0, 1.0, 1.0], 0.0, 3, &[0, 0, 0, 0])]
    #[case::border_first_come(&[0.0, 1.0, 2.0, 3.0, 4.0], 1.0, 3, &[0, 0, 0, 0, 0])]
    fn labels_reference_inputs(
        #[case] values: &[f64],
        #[case] eps: f64,
        #[case] min_samples: usize,
        #[case] expected: &[i64],
    ) {
        assert_eq!(naive_dbscan(values, eps, min_samples), expected);
    }

    #[test]
    fn agrees_with_the_sweep_on_sorted_blobs() {
        let generated = SyntheticValues::generate_blobs(&BlobConfig {
            point_count: 400,
            cluster_count: 4,
            spread: 0.5,
            separation: 40.0,
            noise_points: 20,
            seed: 3,
        })
        .expect("valid configuration");
        let mut values = generated.values().to_vec();
        values.sort_by(f64::total_cmp);
        let source = SyntheticValues::from_values(values);

        let dbscan = Dbscan1dBuilder::new()
            .with_eps(0.75)
            .with_min_samples(4)
            .build()
            .expect("valid configuration");
        let sweep = dbscan.run(&source).expect("sweep must succeed");
        let naive = naive_dbscan(source.values(), 0.75, 4);
        let sweep_labels = sweep.labels();
        let naive_noise: Vec<bool> = naive.iter().map(|&label| label == NOISE_LABEL).collect();
        let sweep_noise: Vec<bool> = sweep
            .assignments()
            .iter()
            .map(|assignment| assignment.is_noise())
            .collect();
        assert_eq!(naive_noise, sweep_noise);
        let core_labels = |labels: &[i64]| -> Vec<i64> {
            labels
                .iter()
                .zip(sweep.core_flags())
                .filter(|&(_, &is_core)| is_core)
                .map(|(&label, _)| label)
                .collect()
        };
        assert_eq!(core_labels(naive.as_slice()), core_labels(sweep_labels.as_slice()));
    }
}
