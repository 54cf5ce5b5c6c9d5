use super::config::MatcherConfig;
use crate::catalog::{MarketItem, Recipe};

/// First recipe whose name or mood tags read as calming, in catalog order.
pub(crate) fn calming_recipe<'a>(
    recipes: &'a [Recipe],
    config: &MatcherConfig,
) -> Option<&'a Recipe> {
    recipes.iter().find(|recipe| {
        matches_name(recipe, &config.calming_name_keywords)
            || matches_mood_tag(recipe, &config.calming_mood_tags)
    })
}

/// First recipe whose name or mood tags read as fresh or energizing.
pub(crate) fn fresh_recipe<'a>(
    recipes: &'a [Recipe],
    config: &MatcherConfig,
) -> Option<&'a Recipe> {
    recipes.iter().find(|recipe| {
        matches_name(recipe, &config.fresh_name_keywords)
            || matches_mood_tag(recipe, &config.fresh_mood_tags)
    })
}

/// A market item other than the first when more than one exists, so the
/// arousal rule does not keep recommending the same default item.
pub(crate) fn alternate_market(markets: &[MarketItem]) -> Option<&MarketItem> {
    markets.get(1).or_else(|| markets.first())
}

fn matches_name(recipe: &Recipe, keywords: &[String]) -> bool {
    let name = recipe.name.to_lowercase();
    keywords
        .iter()
        .any(|keyword| name.contains(&keyword.to_lowercase()))
}

fn matches_mood_tag(recipe: &Recipe, tags: &[String]) -> bool {
    recipe.tags.moods.iter().any(|mood| {
        let mood = mood.to_lowercase();
        tags.iter().any(|tag| mood.contains(&tag.to_lowercase()))
    })
}
