use super::common::{one_per_dimension_pool, question, seeded_rng, uniform_pool};
use crate::assessment::{pick_five, SAMPLE_SIZE};
use crate::catalog::MoodDimension;
use std::collections::HashSet;

#[test]
fn small_pool_is_returned_whole() {
    let mut rng = seeded_rng(1);
    for size in 0..=SAMPLE_SIZE {
        let pool = one_per_dimension_pool().into_iter().take(size).collect::<Vec<_>>();
        let sample = pick_five(&pool, &mut rng);
        assert_eq!(sample.len(), size);

        let expected: HashSet<&str> = pool.iter().map(|q| q.id.as_str()).collect();
        let actual: HashSet<&str> = sample.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(actual, expected, "pool of {size} must come back whole");
    }
}

#[test]
fn full_coverage_pool_yields_one_question_per_dimension() {
    for seed in 0..50 {
        let mut rng = seeded_rng(seed);
        let pool = uniform_pool(3);
        let sample = pick_five(&pool, &mut rng);
        assert_eq!(sample.len(), SAMPLE_SIZE);

        let dims: HashSet<MoodDimension> = sample.iter().map(|q| q.dim).collect();
        assert_eq!(dims.len(), 5, "seed {seed}: stratification violated");
    }
}

#[test]
fn never_returns_duplicate_ids() {
    // A skewed pool: many stress questions, one valence, nothing else.
    let mut pool = vec![question("lone_valence", MoodDimension::Valence)];
    for index in 0..8 {
        pool.push(question(&format!("stress_{index}"), MoodDimension::Stress));
    }

    for seed in 0..50 {
        let mut rng = seeded_rng(seed);
        let sample = pick_five(&pool, &mut rng);
        assert_eq!(sample.len(), SAMPLE_SIZE);

        let ids: HashSet<&str> = sample.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), sample.len(), "seed {seed}: duplicate id drawn");
    }
}

#[test]
fn fills_from_remainder_when_dimensions_are_missing() {
    // Six questions across two dimensions: the stratified pass fills two
    // slots, the remainder pass must top up to five without duplicates.
    let mut pool = Vec::new();
    for index in 0..3 {
        pool.push(question(&format!("v{index}"), MoodDimension::Valence));
        pool.push(question(&format!("s{index}"), MoodDimension::Stress));
    }

    let mut rng = seeded_rng(7);
    let sample = pick_five(&pool, &mut rng);
    assert_eq!(sample.len(), SAMPLE_SIZE);

    let ids: HashSet<&str> = sample.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids.len(), SAMPLE_SIZE);
}

#[test]
fn seeded_draws_are_reproducible() {
    let pool = uniform_pool(4);
    let first: Vec<String> = pick_five(&pool, &mut seeded_rng(99))
        .into_iter()
        .map(|q| q.id)
        .collect();
    let second: Vec<String> = pick_five(&pool, &mut seeded_rng(99))
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(first, second);
}
