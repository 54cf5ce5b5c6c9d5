mod builtin;
pub mod domain;
mod loader;

pub use domain::{
    Ingredient, MarketItem, MoodDimension, Nutrition, Question, Recipe, RestaurantItem, Tags,
};
pub use loader::CatalogStore;
