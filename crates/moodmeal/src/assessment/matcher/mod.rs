mod config;
mod rules;

pub use config::MatcherConfig;

use super::scorer::ScoreVector;
use crate::catalog::{MarketItem, Recipe, RestaurantItem};
use serde::Serialize;

/// Which of the ordered matching rules produced a suggestion. Recorded so
/// callers can audit why an item was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Stress,
    Arousal,
    Default,
}

impl MatchRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stress => "Calming pick (high stress)",
            Self::Arousal => "Fresh pick (high arousal)",
            Self::Default => "House pick",
        }
    }
}

/// One pick per catalog. Items are borrowed from their catalogs, never
/// copied; an empty catalog leaves its slot absent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Suggestion<'a> {
    pub rule: MatchRule,
    pub recipe: Option<&'a Recipe>,
    pub market: Option<&'a MarketItem>,
    pub restaurant: Option<&'a RestaurantItem>,
}

/// Stateless matcher applying the ordered rule set to a score vector.
pub struct SuggestionEngine {
    config: MatcherConfig,
}

impl SuggestionEngine {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Evaluate the rules in order; the first match wins and later rules
    /// are never consulted. A profile over both thresholds resolves to the
    /// stress rule.
    pub fn suggest<'a>(
        &self,
        scores: &ScoreVector,
        recipes: &'a [Recipe],
        markets: &'a [MarketItem],
        restaurants: &'a [RestaurantItem],
    ) -> Suggestion<'a> {
        if scores.stress >= self.config.stress_threshold {
            return Suggestion {
                rule: MatchRule::Stress,
                recipe: rules::calming_recipe(recipes, &self.config).or_else(|| recipes.first()),
                market: markets.first(),
                restaurant: restaurants.first(),
            };
        }

        if scores.arousal >= self.config.arousal_threshold {
            return Suggestion {
                rule: MatchRule::Arousal,
                recipe: rules::fresh_recipe(recipes, &self.config).or_else(|| recipes.last()),
                market: rules::alternate_market(markets),
                restaurant: restaurants.first(),
            };
        }

        Suggestion {
            rule: MatchRule::Default,
            recipe: recipes.first(),
            market: markets.first(),
            restaurant: restaurants.first(),
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
