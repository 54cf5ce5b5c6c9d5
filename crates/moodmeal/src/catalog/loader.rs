use super::domain::{MarketItem, Question, Recipe, RestaurantItem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read-only catalog data the engine operates over. Loaded once; the
/// process treats it as immutable shared data afterwards.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    pub questions: Vec<Question>,
    pub recipes: Vec<Recipe>,
    pub markets: Vec<MarketItem>,
    pub restaurants: Vec<RestaurantItem>,
}

#[derive(Debug, Deserialize)]
struct QuestionsRoot {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct RecipesRoot {
    recipes: Vec<Recipe>,
}

#[derive(Debug, Deserialize)]
struct MarketRestaurantRoot {
    #[serde(rename = "marketItems")]
    market_items: Vec<MarketItem>,
    #[serde(rename = "restaurantItems")]
    restaurant_items: Vec<RestaurantItem>,
}

impl CatalogStore {
    /// Load the catalog asset files from `dir`. Any missing or malformed
    /// file degrades to an empty list; the engine must keep functioning on
    /// empty catalogs.
    pub fn from_dir(dir: &Path) -> Self {
        let questions = read_root::<QuestionsRoot>(&dir.join("questions_en.json"))
            .map(|root| root.questions)
            .unwrap_or_default();
        let recipes = read_root::<RecipesRoot>(&dir.join("recipes_en.json"))
            .map(|root| root.recipes)
            .unwrap_or_default();
        let (markets, restaurants) =
            match read_root::<MarketRestaurantRoot>(&dir.join("market_restaurant_en.json")) {
                Some(root) => (root.market_items, root.restaurant_items),
                None => (Vec::new(), Vec::new()),
            };

        Self {
            questions,
            recipes,
            markets,
            restaurants,
        }
    }

    /// Built-in starter catalog used by the demo and as a fallback when no
    /// data directory is configured.
    pub fn builtin() -> Self {
        super::builtin::starter_catalog()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
            && self.recipes.is_empty()
            && self.markets.is_empty()
            && self.restaurants.is_empty()
    }
}

fn read_root<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "catalog file unreadable, substituting empty list");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(root) => Some(root),
        Err(err) => {
            warn!(path = %path.display(), %err, "catalog file malformed, substituting empty list");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_directory_degrades_to_empty_store() {
        let store = CatalogStore::from_dir(Path::new("/nonexistent/moodmeal-assets"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty_list() {
        let dir = std::env::temp_dir().join("moodmeal-loader-test");
        fs::create_dir_all(&dir).expect("temp dir");
        let mut file =
            fs::File::create(dir.join("questions_en.json")).expect("create questions file");
        file.write_all(b"{not json").expect("write");

        let store = CatalogStore::from_dir(&dir);
        assert!(store.questions.is_empty());
    }

    #[test]
    fn parses_wrapped_asset_roots() {
        let dir = std::env::temp_dir().join("moodmeal-loader-roots-test");
        fs::create_dir_all(&dir).expect("temp dir");
        fs::write(
            dir.join("questions_en.json"),
            r#"{"questions":[{"id":"q1","dim":"stress","text":"I feel tense."}]}"#,
        )
        .expect("write questions");
        fs::write(
            dir.join("market_restaurant_en.json"),
            r#"{"marketItems":[{"id":"m1","name":"Yogurt","kcalPerPortion":120}],"restaurantItems":[]}"#,
        )
        .expect("write market/restaurant");

        let store = CatalogStore::from_dir(&dir);
        assert_eq!(store.questions.len(), 1);
        assert_eq!(
            store.questions[0].dim,
            crate::catalog::MoodDimension::Stress
        );
        assert_eq!(store.markets.len(), 1);
        assert!(store.restaurants.is_empty());
        assert!(store.recipes.is_empty());
    }

    #[test]
    fn builtin_catalog_covers_every_dimension() {
        let store = CatalogStore::builtin();
        for dim in crate::catalog::MoodDimension::ordered() {
            assert!(
                store.questions.iter().any(|q| q.dim == dim),
                "builtin pool missing {dim:?}"
            );
        }
        assert!(!store.recipes.is_empty());
        assert!(!store.markets.is_empty());
        assert!(!store.restaurants.is_empty());
    }
}
