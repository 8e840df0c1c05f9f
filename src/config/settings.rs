use serde::Deserialize;
use crate::config::env::{self, EnvError, EnvKey};

pub const VIDEO_BUCKET: &str = "nova-videos";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    /// Public base of the storage service, e.g. `https://xyz.supabase.co`.
    pub public_base_url: String,
    pub storage_endpoint: String,
    pub storage_region: String,
    pub storage_access_key: String,
    pub storage_secret_key: String,
    pub database_url: String,
    /// Used when a callback carries no `metadata.questionId`.
    pub default_question_id: Option<String>,
    pub rollback_on_db_failure: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, EnvError> {
        let public_base_url = env::get(EnvKey::SupabaseUrl)?
            .trim_end_matches('/')
            .to_string();
        let storage_endpoint = env::get_opt(EnvKey::StorageEndpoint)
            .unwrap_or_else(|| format!("{}/storage/v1/s3", public_base_url));

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            storage_endpoint,
            storage_region: env::get_or(EnvKey::StorageRegion, "us-east-1"),
            storage_access_key: env::get(EnvKey::StorageAccessKey)?,
            storage_secret_key: env::get(EnvKey::StorageSecretKey)?,
            database_url: env::get(EnvKey::DatabaseUrl)?,
            default_question_id: env::get_opt(EnvKey::DefaultQuestionId),
            rollback_on_db_failure: env::get_flag(EnvKey::RollbackOnDbFailure, false)?,
            public_base_url,
        })
    }

    /// Public URL of an object stored in the video bucket.
    pub fn public_object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.public_base_url, VIDEO_BUCKET, key
        )
    }
}
