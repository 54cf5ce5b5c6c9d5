use super::matcher::{MatchRule, Suggestion, SuggestionEngine};
use super::scorer::ScoreVector;
use super::session::{
    PostSamplingPolicy, SessionController, SessionError, SessionPhase, SessionRecord,
};
use crate::catalog::{CatalogStore, MarketItem, Question, Recipe, RestaurantItem};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Thread-safe facade over one session controller, so the assessment flow
/// can sit behind an async host. Catalogs are pinned for the process
/// lifetime; the controller is the only mutable state and lives behind the
/// mutex.
pub struct AssessmentService {
    controller: Mutex<SessionController<'static>>,
}

/// Questions handed to the user for the active test round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundPrompt {
    pub phase: SessionPhase,
    pub questions: Vec<Question>,
}

/// Owned, serializable snapshot of the suggestion shown after the pre-test.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionView {
    pub rule: MatchRule,
    pub rule_label: &'static str,
    pub scores: ScoreVector,
    pub recipe: Option<Recipe>,
    pub market: Option<MarketItem>,
    pub restaurant: Option<RestaurantItem>,
}

impl SuggestionView {
    fn from_parts(scores: ScoreVector, suggestion: &Suggestion<'_>) -> Self {
        Self {
            rule: suggestion.rule,
            rule_label: suggestion.rule.label(),
            scores,
            recipe: suggestion.recipe.cloned(),
            market: suggestion.market.cloned(),
            restaurant: suggestion.restaurant.cloned(),
        }
    }
}

/// Condensed view of a finalized round for API responses and history
/// listings.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub created_at: DateTime<Utc>,
    pub uplift: f64,
    pub pre_scores: ScoreVector,
    pub post_scores: ScoreVector,
    pub rule: MatchRule,
    pub recipe: Option<String>,
    pub market: Option<String>,
    pub restaurant: Option<String>,
}

impl SessionSummary {
    fn from_record(record: &SessionRecord<'_>) -> Self {
        Self {
            created_at: record.created_at,
            uplift: record.uplift,
            pre_scores: record.pre_scores,
            post_scores: record.post_scores,
            rule: record.suggestion.rule,
            recipe: record.suggestion.recipe.map(|recipe| recipe.name.clone()),
            market: record.suggestion.market.map(|item| item.name.clone()),
            restaurant: record.suggestion.restaurant.map(|item| item.name.clone()),
        }
    }
}

impl AssessmentService {
    pub fn new(
        store: &'static CatalogStore,
        engine: SuggestionEngine,
        policy: PostSamplingPolicy,
    ) -> Self {
        Self {
            controller: Mutex::new(SessionController::new(store, engine, policy)),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock().phase()
    }

    /// Start a fresh round: sample the pre-test questions.
    pub fn start_round(&self) -> Result<RoundPrompt, SessionError> {
        let mut controller = self.lock();
        let questions = controller.begin_pre_test(&mut rand::thread_rng())?.to_vec();
        Ok(RoundPrompt {
            phase: controller.phase(),
            questions,
        })
    }

    /// Record the pre-test answers in order, then score them and reveal
    /// the suggestion. Extra answers beyond the question count are ignored.
    pub fn submit_pre_answers(&self, answers: &[i32]) -> Result<SuggestionView, SessionError> {
        let mut controller = self.lock();
        for (index, value) in answers.iter().enumerate() {
            controller.set_pre_answer(index, *value)?;
        }
        let suggestion = *controller.reveal_suggestion()?;
        let scores = controller
            .pre_scores()
            .copied()
            .unwrap_or_default();
        Ok(SuggestionView::from_parts(scores, &suggestion))
    }

    /// Sample the post-test questions once the user has acted on the
    /// suggestion.
    pub fn start_post_round(&self) -> Result<RoundPrompt, SessionError> {
        let mut controller = self.lock();
        let questions = controller.begin_post_test(&mut rand::thread_rng())?.to_vec();
        Ok(RoundPrompt {
            phase: controller.phase(),
            questions,
        })
    }

    /// Record the post-test answers and finalize the round.
    pub fn submit_post_answers(
        &self,
        answers: &[i32],
        now: DateTime<Utc>,
    ) -> Result<SessionSummary, SessionError> {
        let mut controller = self.lock();
        for (index, value) in answers.iter().enumerate() {
            controller.set_post_answer(index, *value)?;
        }
        let record = controller.finalize(now)?;
        Ok(SessionSummary::from_record(record))
    }

    /// Finalized rounds, most recent first.
    pub fn history(&self) -> Vec<SessionSummary> {
        self.lock()
            .history()
            .iter()
            .map(SessionSummary::from_record)
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, SessionController<'static>> {
        self.controller.lock().expect("session mutex poisoned")
    }
}
