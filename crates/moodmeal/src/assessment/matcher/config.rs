use serde::{Deserialize, Serialize};

/// Matcher thresholds and keyword lists. Configuration, not structure: the
/// ordering and exclusivity of the rules are fixed, these values are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub stress_threshold: f64,
    pub arousal_threshold: f64,
    /// Recipe-name fragments that read as calming or soothing.
    pub calming_name_keywords: Vec<String>,
    /// Mood tags that mark a recipe as a stress pick.
    pub calming_mood_tags: Vec<String>,
    /// Recipe-name fragments that read as fresh or light.
    pub fresh_name_keywords: Vec<String>,
    /// Mood tags that mark a recipe as an energizing pick.
    pub fresh_mood_tags: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            stress_threshold: 0.6,
            arousal_threshold: 0.6,
            calming_name_keywords: vec!["lentil".to_string(), "soup".to_string()],
            calming_mood_tags: vec!["stress".to_string()],
            fresh_name_keywords: vec!["salad".to_string(), "tuna".to_string()],
            fresh_mood_tags: vec!["energetic".to_string()],
        }
    }
}
