use super::matcher::{Suggestion, SuggestionEngine};
use super::scorer::{mood_uplift, score, ScoreVector};
use super::selector::{pick_five, SAMPLE_SIZE};
use crate::catalog::{CatalogStore, Question};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Where the current round stands. Phases advance strictly forward; a
/// finalized round resets the controller to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    PreTestActive,
    SuggestionShown,
    PostTestActive,
}

impl SessionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::PreTestActive => "Pre-Test Active",
            Self::SuggestionShown => "Suggestion Shown",
            Self::PostTestActive => "Post-Test Active",
        }
    }
}

/// How the post-test sample relates to the pre-test sample. Two variants
/// were observed in the wild; `PreferUnseen` is the stronger contract and
/// the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSamplingPolicy {
    /// Exclude pre-test questions when at least a full sample of unused
    /// questions remains, otherwise fall back to the full pool.
    #[default]
    PreferUnseen,
    /// Always resample from the full pool.
    FullPool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {action} while the session is in phase '{}'", phase.label())]
    InvalidTransition {
        phase: SessionPhase,
        action: &'static str,
    },
}

/// Immutable record of one completed round, newest first in history.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord<'a> {
    pub pre_questions: Vec<Question>,
    pub pre_answers: Vec<i32>,
    pub pre_scores: ScoreVector,
    pub suggestion: Suggestion<'a>,
    pub post_questions: Vec<Question>,
    pub post_answers: Vec<i32>,
    pub post_scores: ScoreVector,
    pub uplift: f64,
    pub created_at: DateTime<Utc>,
}

/// Owns one round's working state and the append-only session history.
///
/// Catalogs and the question pool are borrowed read-only for the
/// controller's lifetime; nothing here mutates them. Transitions are plain
/// computations over in-memory state; the only failure mode is calling
/// one out of order.
pub struct SessionController<'a> {
    store: &'a CatalogStore,
    engine: SuggestionEngine,
    policy: PostSamplingPolicy,
    phase: SessionPhase,
    pre_questions: Vec<Question>,
    pre_answers: Vec<i32>,
    pre_scores: Option<ScoreVector>,
    suggestion: Option<Suggestion<'a>>,
    post_questions: Vec<Question>,
    post_answers: Vec<i32>,
    history: Vec<SessionRecord<'a>>,
}

const NEUTRAL_ANSWER: i32 = 3;

impl<'a> SessionController<'a> {
    pub fn new(
        store: &'a CatalogStore,
        engine: SuggestionEngine,
        policy: PostSamplingPolicy,
    ) -> Self {
        Self {
            store,
            engine,
            policy,
            phase: SessionPhase::NotStarted,
            pre_questions: Vec::new(),
            pre_answers: Vec::new(),
            pre_scores: None,
            suggestion: None,
            post_questions: Vec::new(),
            post_answers: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn pre_questions(&self) -> &[Question] {
        &self.pre_questions
    }

    pub fn post_questions(&self) -> &[Question] {
        &self.post_questions
    }

    pub fn suggestion(&self) -> Option<&Suggestion<'a>> {
        self.suggestion.as_ref()
    }

    /// Completed rounds, most recent first.
    pub fn history(&self) -> &[SessionRecord<'a>] {
        &self.history
    }

    /// `NotStarted -> PreTestActive`: sample the pre-test questions from
    /// the full pool and seed every answer with the neutral midpoint.
    pub fn begin_pre_test<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[Question], SessionError> {
        self.expect_phase(SessionPhase::NotStarted, "begin a pre-test")?;

        self.pre_questions = pick_five(&self.store.questions, rng);
        self.pre_answers = vec![NEUTRAL_ANSWER; self.pre_questions.len()];
        self.pre_scores = None;
        self.suggestion = None;
        self.post_questions.clear();
        self.post_answers.clear();
        self.phase = SessionPhase::PreTestActive;
        Ok(&self.pre_questions)
    }

    /// Record a pre-test answer. The value is clamped into [1, 5]; an
    /// out-of-range index is ignored, matching the tolerant input policy.
    pub fn set_pre_answer(&mut self, index: usize, value: i32) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::PreTestActive, "record a pre-test answer")?;
        if let Some(slot) = self.pre_answers.get_mut(index) {
            *slot = value.clamp(1, 5);
        }
        Ok(())
    }

    /// `PreTestActive -> SuggestionShown`: score the pre-test answers and
    /// run the matcher. Both results are computed and stored here, not
    /// lazily later.
    pub fn reveal_suggestion(&mut self) -> Result<&Suggestion<'a>, SessionError> {
        self.expect_phase(SessionPhase::PreTestActive, "reveal a suggestion")?;

        let scores = score(&self.pre_answers, &self.pre_questions);
        let suggestion = self.engine.suggest(
            &scores,
            &self.store.recipes,
            &self.store.markets,
            &self.store.restaurants,
        );

        self.pre_scores = Some(scores);
        self.phase = SessionPhase::SuggestionShown;
        Ok(self.suggestion.insert(suggestion))
    }

    pub fn pre_scores(&self) -> Option<&ScoreVector> {
        self.pre_scores.as_ref()
    }

    /// `SuggestionShown -> PostTestActive`: sample the post-test questions
    /// according to the configured policy.
    pub fn begin_post_test<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[Question], SessionError> {
        self.expect_phase(SessionPhase::SuggestionShown, "begin a post-test")?;

        self.post_questions = match self.policy {
            PostSamplingPolicy::FullPool => pick_five(&self.store.questions, rng),
            PostSamplingPolicy::PreferUnseen => {
                let seen: HashSet<&str> = self
                    .pre_questions
                    .iter()
                    .map(|question| question.id.as_str())
                    .collect();
                let unseen: Vec<Question> = self
                    .store
                    .questions
                    .iter()
                    .filter(|question| !seen.contains(question.id.as_str()))
                    .cloned()
                    .collect();
                if unseen.len() >= SAMPLE_SIZE {
                    pick_five(&unseen, rng)
                } else {
                    pick_five(&self.store.questions, rng)
                }
            }
        };
        self.post_answers = vec![NEUTRAL_ANSWER; self.post_questions.len()];
        self.phase = SessionPhase::PostTestActive;
        Ok(&self.post_questions)
    }

    pub fn set_post_answer(&mut self, index: usize, value: i32) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::PostTestActive, "record a post-test answer")?;
        if let Some(slot) = self.post_answers.get_mut(index) {
            *slot = value.clamp(1, 5);
        }
        Ok(())
    }

    /// `PostTestActive -> Finalized`: score the post-test, derive the
    /// uplift, prepend the immutable record to history, and reset for the
    /// next round.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> Result<&SessionRecord<'a>, SessionError> {
        self.expect_phase(SessionPhase::PostTestActive, "finalize the session")?;

        // Both are set on the transition into SuggestionShown, so past the
        // phase guard they are always present.
        let (pre_scores, suggestion) = match (self.pre_scores, self.suggestion) {
            (Some(scores), Some(suggestion)) => (scores, suggestion),
            _ => {
                return Err(SessionError::InvalidTransition {
                    phase: self.phase,
                    action: "finalize the session",
                })
            }
        };
        let post_scores = score(&self.post_answers, &self.post_questions);
        let uplift = mood_uplift(&pre_scores, &post_scores);

        let record = SessionRecord {
            pre_questions: std::mem::take(&mut self.pre_questions),
            pre_answers: std::mem::take(&mut self.pre_answers),
            pre_scores,
            suggestion,
            post_questions: std::mem::take(&mut self.post_questions),
            post_answers: std::mem::take(&mut self.post_answers),
            post_scores,
            uplift,
            created_at: now,
        };
        self.history.insert(0, record);

        self.pre_scores = None;
        self.suggestion = None;
        self.phase = SessionPhase::NotStarted;
        Ok(&self.history[0])
    }

    fn expect_phase(
        &self,
        expected: SessionPhase,
        action: &'static str,
    ) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }
}
