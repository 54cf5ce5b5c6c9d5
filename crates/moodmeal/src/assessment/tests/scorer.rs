use super::common::{one_per_dimension_pool, question};
use crate::assessment::{mood_uplift, score, ScoreVector};
use crate::catalog::MoodDimension;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn likert_extremes_normalize_to_unit_interval_bounds() {
    let questions = one_per_dimension_pool();

    let low = score(&[1, 1, 1, 1, 1], &questions);
    let mid = score(&[3, 3, 3, 3, 3], &questions);
    let high = score(&[5, 5, 5, 5, 5], &questions);

    for dim in MoodDimension::ordered() {
        assert_close(low.get(dim), 0.0);
        assert_close(mid.get(dim), 0.5);
        assert_close(high.get(dim), 1.0);
    }
}

#[test]
fn answers_outside_range_are_clamped_not_rejected() {
    let questions = one_per_dimension_pool();
    let scores = score(&[-3, 0, 99, 6, 3], &questions);

    assert_close(scores.valence, 0.0);
    assert_close(scores.arousal, 0.0);
    assert_close(scores.stress, 1.0);
    assert_close(scores.craving, 1.0);
    assert_close(scores.bodysense, 0.5);
}

#[test]
fn unanswered_dimension_defaults_to_neutral() {
    let questions = vec![
        question("s1", MoodDimension::Stress),
        question("s2", MoodDimension::Stress),
    ];
    let scores = score(&[5, 4], &questions);

    assert_close(scores.stress, (1.0 + 0.75) / 2.0);
    assert_close(scores.valence, 0.5);
    assert_close(scores.arousal, 0.5);
    assert_close(scores.craving, 0.5);
    assert_close(scores.bodysense, 0.5);
}

#[test]
fn multiple_questions_per_dimension_average() {
    let questions = vec![
        question("v1", MoodDimension::Valence),
        question("v2", MoodDimension::Valence),
        question("v3", MoodDimension::Valence),
    ];
    // 0.0, 0.5, 1.0 -> mean 0.5
    let scores = score(&[1, 3, 5], &questions);
    assert_close(scores.valence, 0.5);
}

#[test]
fn length_mismatch_is_truncated_positionally() {
    let questions = one_per_dimension_pool();

    let fewer_answers = score(&[5, 5], &questions);
    assert_close(fewer_answers.valence, 1.0);
    assert_close(fewer_answers.arousal, 1.0);
    assert_close(fewer_answers.stress, 0.5);

    let extra_answers = score(&[5; 12], &questions[..2]);
    assert_close(extra_answers.valence, 1.0);
    assert_close(extra_answers.arousal, 1.0);
    assert_close(extra_answers.stress, 0.5);
}

#[test]
fn every_field_stays_in_unit_interval() {
    let questions = one_per_dimension_pool();
    for a in [-10, 0, 1, 2, 3, 4, 5, 40] {
        let scores = score(&[a, a, a, a, a], &questions);
        for dim in MoodDimension::ordered() {
            let value = scores.get(dim);
            assert!((0.0..=1.0).contains(&value), "answer {a} pushed {dim:?} to {value}");
        }
    }
}

#[test]
fn uplift_tracks_valence_and_arousal_delta() {
    let pre = ScoreVector::default();
    let post = ScoreVector {
        valence: 0.7,
        arousal: 0.6,
        ..ScoreVector::default()
    };
    assert_close(mood_uplift(&pre, &post), 0.3);

    // Stress and craving movement alone must not register.
    let noisy_post = ScoreVector {
        stress: 1.0,
        craving: 0.0,
        ..ScoreVector::default()
    };
    assert_close(mood_uplift(&pre, &noisy_post), 0.0);
}

#[test]
fn uplift_spans_expected_range() {
    let floor = ScoreVector {
        valence: 0.0,
        arousal: 0.0,
        ..ScoreVector::default()
    };
    let ceiling = ScoreVector {
        valence: 1.0,
        arousal: 1.0,
        ..ScoreVector::default()
    };
    assert_close(mood_uplift(&floor, &ceiling), 2.0);
    assert_close(mood_uplift(&ceiling, &floor), -2.0);
}
