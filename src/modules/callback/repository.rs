use async_trait::async_trait;
use crate::infrastructure::db::pool::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("question {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistent question records, addressed by id.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn set_video_url(&self, question_id: &str, video_url: &str) -> Result<(), RepositoryError>;
}

#[derive(Clone)]
pub struct QuestionRepository {
    pool: DbPool,
}

impl QuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for QuestionRepository {
    async fn set_video_url(&self, question_id: &str, video_url: &str) -> Result<(), RepositoryError> {
        // `id` may be a uuid column; compare as text so any identifier shape works.
        let result = sqlx::query(
            r#"
            UPDATE nova_questions
            SET video_question_fr = $1
            WHERE id::text = $2
            "#,
        )
        .bind(video_url)
        .bind(question_id)
        .execute(&self.pool)
        .await?;

        ensure_updated(question_id, result.rows_affected())
    }
}

fn ensure_updated(question_id: &str, rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::NotFound(question_id.to_string()));
    }
    Ok(())
}
