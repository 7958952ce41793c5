//! Strategy builders for pipeline property tests.
//!
//! Proptest only chooses the layout and a seed; the values themselves come
//! from a seeded [`SmallRng`] so a failing case can be replayed from the
//! printed fixture alone.

use std::num::NonZeroUsize;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{PipelineFixture, ValueLayout};

/// Largest generated input. The oracle is quadratic, so this stays small.
const MAX_POINTS: usize = 96;
/// Largest generated density threshold.
const MAX_MIN_SAMPLES: usize = 6;
/// Step used by [`ValueLayout::Grid`]; exactly representable.
const GRID_STEP: f64 = 0.25;

/// Generates fixtures across every layout, biased towards the tie-heavy
/// ones.
pub(super) fn fixture_strategy() -> impl Strategy<Value = PipelineFixture> {
    (layout_strategy(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

fn layout_strategy() -> impl Strategy<Value = ValueLayout> {
    prop_oneof![
        3 => Just(ValueLayout::Blobs),
        2 => Just(ValueLayout::Duplicates),
        3 => Just(ValueLayout::Grid),
        2 => Just(ValueLayout::Uniform),
    ]
}

/// Generates a fixture for a specific layout.
pub(super) fn generate_fixture(layout: ValueLayout, rng: &mut SmallRng) -> PipelineFixture {
    let (values, eps) = match layout {
        ValueLayout::Blobs => generate_blobs(rng),
        ValueLayout::Duplicates => generate_duplicates(rng),
        ValueLayout::Grid => generate_grid(rng),
        ValueLayout::Uniform => generate_uniform(rng),
    };
    let min_samples = NonZeroUsize::new(rng.gen_range(1..=MAX_MIN_SAMPLES))
        .expect("range starts at one");
    PipelineFixture {
        values,
        eps,
        min_samples,
        layout,
    }
}

fn generate_blobs(rng: &mut SmallRng) -> (Vec<f64>, f64) {
    let blob_count = rng.gen_range(1..=4);
    let mut values = Vec::new();
    for _ in 0..blob_count {
        let centre = rng.gen_range(-50.0..50.0);
        let spread = rng.gen_range(0.5..4.0);
        let size = rng.gen_range(2..=20);
        values.extend((0..size).map(|_| centre + rng.gen_range(-spread..=spread)));
    }
    let outliers = rng.gen_range(0..=10);
    values.extend((0..outliers).map(|_| rng.gen_range(-100.0..100.0)));
    shuffle(&mut values, rng);
    (values, rng.gen_range(0.1..3.0))
}

fn generate_duplicates(rng: &mut SmallRng) -> (Vec<f64>, f64) {
    let levels: Vec<f64> = (0..rng.gen_range(1..=5))
        .map(|_| f64::from(rng.gen_range(-8_i32..=8)) * 0.5)
        .collect();
    let count = rng.gen_range(1..=MAX_POINTS / 2);
    let values = (0..count)
        .map(|_| levels[rng.gen_range(0..levels.len())])
        .collect();
    let eps = f64::from(rng.gen_range(0_u8..=2)) * 0.5;
    (values, eps)
}

fn generate_grid(rng: &mut SmallRng) -> (Vec<f64>, f64) {
    let count = rng.gen_range(1..=MAX_POINTS);
    let values = (0..count)
        .map(|_| f64::from(rng.gen_range(-40_i32..=40)) * GRID_STEP)
        .collect();
    let eps = f64::from(rng.gen_range(0_u8..=8)) * GRID_STEP;
    (values, eps)
}

fn generate_uniform(rng: &mut SmallRng) -> (Vec<f64>, f64) {
    let count = rng.gen_range(1..=MAX_POINTS);
    let values = (0..count).map(|_| rng.gen_range(-20.0..20.0)).collect();
    (values, rng.gen_range(0.0..2.0))
}

/// Fisher-Yates shuffle using the provided RNG.
pub(super) fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
