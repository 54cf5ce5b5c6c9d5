use crate::catalog::{
    CatalogStore, MarketItem, MoodDimension, Nutrition, Question, Recipe, RestaurantItem, Tags,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub(super) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn question(id: &str, dim: MoodDimension) -> Question {
    Question {
        id: id.to_string(),
        dim,
        text: format!("probe {id}"),
    }
}

/// One question per dimension, in canonical order.
pub(super) fn one_per_dimension_pool() -> Vec<Question> {
    MoodDimension::ordered()
        .iter()
        .enumerate()
        .map(|(index, dim)| question(&format!("q{index}"), *dim))
        .collect()
}

/// `per_dim` questions for every dimension.
pub(super) fn uniform_pool(per_dim: usize) -> Vec<Question> {
    let mut pool = Vec::new();
    for dim in MoodDimension::ordered() {
        for index in 0..per_dim {
            pool.push(question(&format!("{dim:?}_{index}").to_lowercase(), dim));
        }
    }
    pool
}

pub(super) fn nutrition() -> Nutrition {
    Nutrition {
        kcal_low: 200,
        kcal_est: 250,
        kcal_high: 320,
        protein_g: 15,
        fat_g: 10,
        carbs_g: 25,
    }
}

pub(super) fn recipe(id: &str, name: &str, moods: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        time_min: 20,
        nutrition: nutrition(),
        tags: Tags {
            moods: moods.iter().map(|mood| mood.to_string()).collect(),
            ..Tags::default()
        },
        allergens: vec![],
        ingredients: vec![],
        steps: vec![],
        image: None,
    }
}

pub(super) fn market(id: &str, name: &str) -> MarketItem {
    MarketItem {
        id: id.to_string(),
        name: name.to_string(),
        kcal_per_portion: 150,
        allergens: vec![],
        notes: String::new(),
    }
}

pub(super) fn restaurant(id: &str, name: &str) -> RestaurantItem {
    RestaurantItem {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: "test".to_string(),
        nutrition: nutrition(),
        allergens: vec![],
        tips: String::new(),
    }
}

/// Catalog where the keyword recipes are deliberately not first, so the
/// rule predicates have to find them.
pub(super) fn keyword_catalog() -> (Vec<Recipe>, Vec<MarketItem>, Vec<RestaurantItem>) {
    let recipes = vec![
        recipe("r_omelette", "Veggie Omelette", &["comfort"]),
        recipe("r_soup", "Lentil Soup", &["stress"]),
        recipe("r_salad", "Tuna Salad", &["energetic"]),
    ];
    let markets = vec![
        market("m_yogurt", "Plain Yogurt"),
        market("m_fruit", "Fruit Cup"),
    ];
    let restaurants = vec![
        restaurant("t_fish", "Grilled Fish Plate"),
        restaurant("t_bowl", "Grain Bowl"),
    ];
    (recipes, markets, restaurants)
}

pub(super) fn store(per_dim: usize) -> CatalogStore {
    let (recipes, markets, restaurants) = keyword_catalog();
    CatalogStore {
        questions: uniform_pool(per_dim),
        recipes,
        markets,
        restaurants,
    }
}
