//! Mood assessment engine: stratified question sampling, Likert scoring,
//! rule-based meal suggestion, and the pre/post session state machine.

pub mod matcher;
mod router;
mod scorer;
mod selector;
mod service;
mod session;

#[cfg(test)]
mod tests;

pub use matcher::{MatchRule, MatcherConfig, Suggestion, SuggestionEngine};
pub use router::assessment_router;
pub use scorer::{mood_uplift, score, ScoreVector};
pub use selector::{pick_five, SAMPLE_SIZE};
pub use service::{
    AssessmentService, RoundPrompt, SessionSummary, SuggestionView,
};
pub use session::{
    PostSamplingPolicy, SessionController, SessionError, SessionPhase, SessionRecord,
};
