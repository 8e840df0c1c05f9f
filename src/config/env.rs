use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    SupabaseUrl,
    StorageEndpoint,
    StorageRegion,
    StorageAccessKey,
    StorageSecretKey,
    DatabaseUrl,
    DefaultQuestionId,
    RollbackOnDbFailure,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::SupabaseUrl => "SUPABASE_URL",
            EnvKey::StorageEndpoint => "STORAGE_S3_ENDPOINT",
            EnvKey::StorageRegion => "STORAGE_S3_REGION",
            EnvKey::StorageAccessKey => "STORAGE_ACCESS_KEY_ID",
            EnvKey::StorageSecretKey => "STORAGE_SECRET_ACCESS_KEY",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::DefaultQuestionId => "QUESTION_UUID",
            EnvKey::RollbackOnDbFailure => "ROLLBACK_ON_DB_FAILURE",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for environment variable {key}")]
    Invalid { key: &'static str, value: String },
}

pub fn get(key: EnvKey) -> Result<String, EnvError> {
    match env::var(key.as_str()) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(EnvError::Missing(key.as_str())),
    }
}

pub fn get_opt(key: EnvKey) -> Option<String> {
    get(key).ok()
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get_opt(key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Boolean switch; an unset variable yields `default`, an unrecognised
/// value is an error rather than a silent `false`.
pub fn get_flag(key: EnvKey, default: bool) -> Result<bool, EnvError> {
    let name = key.as_str();
    match get(key) {
        Ok(val) => parse_flag(&val).ok_or(EnvError::Invalid { key: name, value: val }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
