use metrics_exporter_prometheus::PrometheusHandle;
use moodmeal::assessment::{
    AssessmentService, MatcherConfig, PostSamplingPolicy, SuggestionEngine,
};
use moodmeal::catalog::CatalogStore;
use moodmeal::config::CatalogConfig;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog once and pin it for the process lifetime. Suggestion
/// records borrow items straight out of this store, so it must outlive
/// every session.
pub(crate) fn pinned_catalog_store(config: &CatalogConfig) -> &'static CatalogStore {
    static STORE: OnceLock<CatalogStore> = OnceLock::new();
    STORE.get_or_init(|| load_catalog_store(config))
}

pub(crate) fn load_catalog_store(config: &CatalogConfig) -> CatalogStore {
    match &config.data_dir {
        Some(dir) => {
            let store = CatalogStore::from_dir(dir);
            if store.is_empty() {
                warn!(dir = %dir.display(), "no catalog data found, running degraded");
            } else {
                info!(
                    dir = %dir.display(),
                    questions = store.questions.len(),
                    recipes = store.recipes.len(),
                    markets = store.markets.len(),
                    restaurants = store.restaurants.len(),
                    "catalog loaded"
                );
            }
            store
        }
        None => CatalogStore::builtin(),
    }
}

pub(crate) fn default_assessment_service(store: &'static CatalogStore) -> AssessmentService {
    AssessmentService::new(
        store,
        SuggestionEngine::new(MatcherConfig::default()),
        PostSamplingPolicy::default(),
    )
}
