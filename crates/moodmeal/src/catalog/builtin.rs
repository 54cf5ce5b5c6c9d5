use super::domain::{
    Ingredient, MarketItem, MoodDimension, Nutrition, Question, Recipe, RestaurantItem, Tags,
};
use super::loader::CatalogStore;

/// Starter catalog shipped with the binary so the demo and a fresh install
/// work without any asset files. Two questions per dimension keeps the
/// stratified sampler honest on the default pool.
pub(super) fn starter_catalog() -> CatalogStore {
    CatalogStore {
        questions: starter_questions(),
        recipes: starter_recipes(),
        markets: starter_market_items(),
        restaurants: starter_restaurant_items(),
    }
}

fn question(id: &str, dim: MoodDimension, text: &str) -> Question {
    Question {
        id: id.to_string(),
        dim,
        text: text.to_string(),
    }
}

fn starter_questions() -> Vec<Question> {
    vec![
        question("val_1", MoodDimension::Valence, "Right now I feel cheerful."),
        question(
            "val_2",
            MoodDimension::Valence,
            "I am satisfied with how my day is going.",
        ),
        question("aro_1", MoodDimension::Arousal, "I feel full of energy."),
        question(
            "aro_2",
            MoodDimension::Arousal,
            "I feel alert and ready to act.",
        ),
        question("str_1", MoodDimension::Stress, "I feel tense or wound up."),
        question(
            "str_2",
            MoodDimension::Stress,
            "It is hard to stop worrying about things.",
        ),
        question(
            "cra_1",
            MoodDimension::Craving,
            "I have a strong appetite for something specific.",
        ),
        question(
            "cra_2",
            MoodDimension::Craving,
            "I keep thinking about food even when not hungry.",
        ),
        question(
            "bod_1",
            MoodDimension::Bodysense,
            "My body feels comfortable and at ease.",
        ),
        question(
            "bod_2",
            MoodDimension::Bodysense,
            "I feel physically heavy or sluggish.",
        ),
    ]
}

fn starter_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "rec_lentil_soup".to_string(),
            name: "Lentil Soup".to_string(),
            time_min: 35,
            nutrition: Nutrition {
                kcal_low: 280,
                kcal_est: 330,
                kcal_high: 390,
                protein_g: 18,
                fat_g: 8,
                carbs_g: 45,
            },
            tags: Tags {
                moods: vec!["stress".to_string(), "comfort".to_string()],
                diet: vec!["vegetarian".to_string()],
                equipment: vec!["pot".to_string()],
                cuisine: vec!["mediterranean".to_string()],
                season: vec!["autumn".to_string(), "winter".to_string()],
            },
            allergens: vec![],
            ingredients: vec![
                Ingredient {
                    name: "red lentils".to_string(),
                    grams: 150,
                },
                Ingredient {
                    name: "carrot".to_string(),
                    grams: 80,
                },
                Ingredient {
                    name: "onion".to_string(),
                    grams: 60,
                },
            ],
            steps: vec![
                "Sweat the onion and carrot until soft.".to_string(),
                "Add lentils and stock, simmer 25 minutes.".to_string(),
                "Season and blend to taste.".to_string(),
            ],
            image: None,
        },
        Recipe {
            id: "rec_tuna_salad".to_string(),
            name: "Tuna Salad".to_string(),
            time_min: 10,
            nutrition: Nutrition {
                kcal_low: 240,
                kcal_est: 290,
                kcal_high: 340,
                protein_g: 28,
                fat_g: 14,
                carbs_g: 12,
            },
            tags: Tags {
                moods: vec!["energetic".to_string(), "fresh".to_string()],
                diet: vec!["pescatarian".to_string()],
                equipment: vec![],
                cuisine: vec!["mediterranean".to_string()],
                season: vec!["summer".to_string()],
            },
            allergens: vec!["fish".to_string()],
            ingredients: vec![
                Ingredient {
                    name: "canned tuna".to_string(),
                    grams: 120,
                },
                Ingredient {
                    name: "mixed greens".to_string(),
                    grams: 90,
                },
                Ingredient {
                    name: "olive oil".to_string(),
                    grams: 10,
                },
            ],
            steps: vec![
                "Drain the tuna and flake over the greens.".to_string(),
                "Dress with olive oil and lemon.".to_string(),
            ],
            image: None,
        },
        Recipe {
            id: "rec_veggie_omelette".to_string(),
            name: "Veggie Omelette".to_string(),
            time_min: 15,
            nutrition: Nutrition {
                kcal_low: 260,
                kcal_est: 310,
                kcal_high: 370,
                protein_g: 20,
                fat_g: 22,
                carbs_g: 8,
            },
            tags: Tags {
                moods: vec!["comfort".to_string()],
                diet: vec!["vegetarian".to_string()],
                equipment: vec!["pan".to_string()],
                cuisine: vec![],
                season: vec![],
            },
            allergens: vec!["egg".to_string()],
            ingredients: vec![
                Ingredient {
                    name: "eggs".to_string(),
                    grams: 120,
                },
                Ingredient {
                    name: "bell pepper".to_string(),
                    grams: 50,
                },
            ],
            steps: vec![
                "Whisk the eggs and fold in the chopped vegetables.".to_string(),
                "Cook over medium heat until just set.".to_string(),
            ],
            image: None,
        },
    ]
}

fn starter_market_items() -> Vec<MarketItem> {
    vec![
        MarketItem {
            id: "mkt_yogurt".to_string(),
            name: "Plain Yogurt with Walnuts".to_string(),
            kcal_per_portion: 180,
            allergens: vec!["milk".to_string(), "tree nuts".to_string()],
            notes: "Pick an unsweetened variety; add the walnuts yourself.".to_string(),
        },
        MarketItem {
            id: "mkt_fruit_cup".to_string(),
            name: "Seasonal Fruit Cup".to_string(),
            kcal_per_portion: 120,
            allergens: vec![],
            notes: "Check the label for added syrup.".to_string(),
        },
        MarketItem {
            id: "mkt_trail_mix".to_string(),
            name: "Dark Chocolate Trail Mix".to_string(),
            kcal_per_portion: 210,
            allergens: vec!["tree nuts".to_string()],
            notes: "Portion out a handful instead of eating from the bag.".to_string(),
        },
    ]
}

fn starter_restaurant_items() -> Vec<RestaurantItem> {
    vec![
        RestaurantItem {
            id: "res_grilled_fish".to_string(),
            name: "Grilled Fish Plate".to_string(),
            cuisine: "mediterranean".to_string(),
            nutrition: Nutrition {
                kcal_low: 380,
                kcal_est: 450,
                kcal_high: 560,
                protein_g: 35,
                fat_g: 18,
                carbs_g: 30,
            },
            allergens: vec!["fish".to_string()],
            tips: "Ask for dressing on the side.".to_string(),
        },
        RestaurantItem {
            id: "res_veggie_bowl".to_string(),
            name: "Roasted Veggie Grain Bowl".to_string(),
            cuisine: "fusion".to_string(),
            nutrition: Nutrition {
                kcal_low: 420,
                kcal_est: 520,
                kcal_high: 640,
                protein_g: 16,
                fat_g: 20,
                carbs_g: 62,
            },
            allergens: vec!["sesame".to_string()],
            tips: "Half portions travel well for a second meal.".to_string(),
        },
    ]
}
