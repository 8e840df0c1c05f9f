use crate::config::settings::AppConfig;
use crate::infrastructure::http::fetcher::VideoSource;
use crate::infrastructure::storage::s3::ObjectStore;
use crate::modules::callback::repository::QuestionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub source: Arc<dyn VideoSource>,
    pub storage: Arc<dyn ObjectStore>,
    pub questions: Arc<dyn QuestionStore>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        source: Arc<dyn VideoSource>,
        storage: Arc<dyn ObjectStore>,
        questions: Arc<dyn QuestionStore>,
    ) -> Self {
        Self {
            config,
            source,
            storage,
            questions,
        }
    }
}
