//! In-memory collaborators and app builders shared by handler tests.

use crate::config::settings::AppConfig;
use crate::infrastructure::http::fetcher::HttpVideoSource;
use crate::infrastructure::storage::s3::{ObjectStore, StorageError};
use crate::modules::callback::repository::{QuestionStore, RepositoryError};
use crate::state::AppState;
use async_trait::async_trait;
use axum_test::TestServer;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        public_base_url: "https://project.supabase.test".to_string(),
        storage_endpoint: "https://project.supabase.test/storage/v1/s3".to_string(),
        storage_region: "us-east-1".to_string(),
        storage_access_key: "test-access".to_string(),
        storage_secret_key: "test-secret".to_string(),
        database_url: "postgres://localhost/test".to_string(),
        default_question_id: None,
        rollback_on_db_failure: false,
    }
}

pub fn test_server(
    config: AppConfig,
    storage: Arc<MemoryStorage>,
    questions: Arc<MemoryQuestions>,
) -> TestServer {
    let state = AppState::new(
        config,
        Arc::new(HttpVideoSource::default()),
        storage,
        questions,
    );
    TestServer::new(crate::app::create_app(state)).unwrap()
}

#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, (Bytes, String)>>,
    fail_with: Option<String>,
    fail_deletes_with: Option<String>,
}

impl MemoryStorage {
    /// Accepts uploads but refuses to remove anything.
    pub fn undeletable(message: &str) -> Self {
        Self {
            fail_deletes_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<(Bytes, String)> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl ObjectStore for MemoryStorage {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
        if let Some(message) = &self.fail_with {
            return Err(StorageError(message.clone()));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (body, content_type.to_string()));
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        if let Some(message) = &self.fail_deletes_with {
            return Err(StorageError(message.clone()));
        }
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryQuestions {
    video_urls: Mutex<HashMap<String, Option<String>>>,
    calls: Mutex<usize>,
    fail_with: Option<String>,
}

impl MemoryQuestions {
    pub fn with_ids(ids: &[&str]) -> Self {
        let questions = Self::default();
        {
            let mut urls = questions.video_urls.lock().unwrap();
            for id in ids {
                urls.insert(id.to_string(), None);
            }
        }
        questions
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn video_url(&self, id: &str) -> Option<String> {
        self.video_urls.lock().unwrap().get(id).cloned().flatten()
    }

    pub fn update_calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestions {
    async fn set_video_url(&self, question_id: &str, video_url: &str) -> Result<(), RepositoryError> {
        *self.calls.lock().unwrap() += 1;

        if let Some(message) = &self.fail_with {
            return Err(RepositoryError::Database(sqlx::Error::Protocol(message.clone())));
        }

        match self.video_urls.lock().unwrap().get_mut(question_id) {
            Some(url) => {
                *url = Some(video_url.to_string());
                Ok(())
            }
            None => Err(RepositoryError::NotFound(question_id.to_string())),
        }
    }
}
