use serde::{Deserialize, Serialize};

/// Closed set of mood dimensions a question can probe. Never extended at
/// runtime; the canonical iteration order is `ordered()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodDimension {
    Valence,
    Arousal,
    Stress,
    Craving,
    Bodysense,
}

impl MoodDimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Valence,
            Self::Arousal,
            Self::Stress,
            Self::Craving,
            Self::Bodysense,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Valence => "Valence",
            Self::Arousal => "Arousal",
            Self::Stress => "Stress",
            Self::Craving => "Craving",
            Self::Bodysense => "Body Sense",
        }
    }
}

/// A single Likert statement, tagged with the dimension it probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub dim: MoodDimension,
    pub text: String,
}

/// Estimated calories plus macros for one serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(rename = "kcalLow")]
    pub kcal_low: u32,
    #[serde(rename = "kcalEst")]
    pub kcal_est: u32,
    #[serde(rename = "kcalHigh")]
    pub kcal_high: u32,
    #[serde(rename = "p")]
    pub protein_g: u32,
    #[serde(rename = "f")]
    pub fat_g: u32,
    #[serde(rename = "c")]
    pub carbs_g: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub season: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(rename = "g")]
    pub grams: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(rename = "timeMin")]
    pub time_min: u32,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "kcalPerPortion")]
    pub kcal_per_portion: u32,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantItem {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub tips: String,
}
