use crate::catalog::{MoodDimension, Question};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Number of questions shown per test round.
pub const SAMPLE_SIZE: usize = 5;

/// Draw a five-question sample from `pool`, stratified by dimension.
///
/// Each dimension with at least one candidate contributes one question
/// (drawn uniformly) before any dimension is sampled twice; dimensions with
/// no candidates are skipped and the remainder is filled uniformly without
/// replacement from the unused pool. Pools of five or fewer are returned
/// whole, shuffled. The output never repeats a question id.
///
/// All randomness flows through `rng` so callers can seed the draw.
pub fn pick_five<R: Rng + ?Sized>(pool: &[Question], rng: &mut R) -> Vec<Question> {
    if pool.len() <= SAMPLE_SIZE {
        let mut sample = pool.to_vec();
        sample.shuffle(rng);
        return sample;
    }

    let mut selected = Vec::with_capacity(SAMPLE_SIZE);
    let mut used: HashSet<&str> = HashSet::new();

    for dim in MoodDimension::ordered() {
        let candidates: Vec<&Question> = pool
            .iter()
            .filter(|question| question.dim == dim && !used.contains(question.id.as_str()))
            .collect();
        if let Some(question) = candidates.choose(rng) {
            used.insert(question.id.as_str());
            selected.push((*question).clone());
            if selected.len() == SAMPLE_SIZE {
                return selected;
            }
        }
    }

    let mut remainder: Vec<&Question> = pool
        .iter()
        .filter(|question| !used.contains(question.id.as_str()))
        .collect();
    remainder.shuffle(rng);
    for question in remainder.into_iter().take(SAMPLE_SIZE - selected.len()) {
        selected.push(question.clone());
    }

    selected
}
