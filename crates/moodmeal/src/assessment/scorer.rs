use crate::catalog::{MoodDimension, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized mood profile, one value in [0, 1] per dimension. A dimension
/// nobody answered stays at the neutral 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub valence: f64,
    pub arousal: f64,
    pub stress: f64,
    pub craving: f64,
    pub bodysense: f64,
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self {
            valence: 0.5,
            arousal: 0.5,
            stress: 0.5,
            craving: 0.5,
            bodysense: 0.5,
        }
    }
}

impl ScoreVector {
    pub fn get(&self, dim: MoodDimension) -> f64 {
        match dim {
            MoodDimension::Valence => self.valence,
            MoodDimension::Arousal => self.arousal,
            MoodDimension::Stress => self.stress,
            MoodDimension::Craving => self.craving,
            MoodDimension::Bodysense => self.bodysense,
        }
    }

    fn set(&mut self, dim: MoodDimension, value: f64) {
        match dim {
            MoodDimension::Valence => self.valence = value,
            MoodDimension::Arousal => self.arousal = value,
            MoodDimension::Stress => self.stress = value,
            MoodDimension::Craving => self.craving = value,
            MoodDimension::Bodysense => self.bodysense = value,
        }
    }
}

/// Aggregate ordered Likert answers into a per-dimension score vector.
///
/// Answers are clamped into [1, 5], normalized to [0, 1] via `(a - 1) / 4`,
/// grouped by the dimension of the question at the same position, and
/// averaged per dimension. A length mismatch is truncated to the shorter of
/// the two sequences rather than rejected.
pub fn score(answers: &[i32], questions: &[Question]) -> ScoreVector {
    let mut grouped: BTreeMap<MoodDimension, Vec<f64>> = BTreeMap::new();

    for (answer, question) in answers.iter().zip(questions.iter()) {
        let clamped = (*answer).clamp(1, 5);
        let normalized = f64::from(clamped - 1) / 4.0;
        grouped.entry(question.dim).or_default().push(normalized);
    }

    let mut scores = ScoreVector::default();
    for (dim, values) in grouped {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        scores.set(dim, mean);
    }
    scores
}

/// Mood Uplift Score: how much the energizing half of the profile moved
/// between the pre and post rounds. Range [-2, 2].
pub fn mood_uplift(pre: &ScoreVector, post: &ScoreVector) -> f64 {
    (post.valence + post.arousal) - (pre.valence + pre.arousal)
}
