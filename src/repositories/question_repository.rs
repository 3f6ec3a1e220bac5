use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz},
};

/// Questions live inside their quiz document, so lookups and deletes go
/// through the owning quiz.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_quiz_id_and_id(
        &self,
        quiz_id: i64,
        question_id: i64,
    ) -> AppResult<Option<Question>>;
    async fn delete(&self, question: &Question) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Quiz>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_quiz_id_and_id(
        &self,
        quiz_id: i64,
        question_id: i64,
    ) -> AppResult<Option<Question>> {
        let quiz = self
            .collection
            .find_one(doc! { "id": quiz_id, "questions.id": question_id })
            .await?;

        Ok(quiz.and_then(|quiz| quiz.question(question_id).cloned()))
    }

    async fn delete(&self, question: &Question) -> AppResult<()> {
        let (Some(quiz_id), Some(question_id)) = (question.quiz_id, question.id) else {
            return Err(AppError::InternalError(
                "Cannot delete a question that is not attached to a saved quiz".to_string(),
            ));
        };

        let result = self
            .collection
            .update_one(
                doc! { "id": quiz_id, "questions.id": question_id },
                doc! { "$pull": { "questions": { "id": question_id } } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "No Question found with id {} in Quiz with id {}",
                question_id, quiz_id
            )));
        }

        Ok(())
    }
}
