use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReplaceOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::Deserialize;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{IdKind, Quiz},
};

const COUNTERS_COLLECTION: &str = "counters";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    async fn find_all(&self) -> AppResult<Vec<Quiz>>;
    /// Assigns missing ids across the whole graph, re-links back-references
    /// and writes the quiz. Returns once the write is acknowledged.
    async fn save(&self, quiz: Quiz) -> AppResult<Quiz>;
    /// Removes the quiz together with its questions and answers.
    async fn delete(&self, quiz: &Quiz) -> AppResult<()>;
    async fn ping(&self) -> AppResult<()>;
}

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<Quiz>,
    counters: Collection<Counter>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection(collection_name),
            counters: db.collection(COUNTERS_COLLECTION),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection in '{}'", self.db.name());

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }

    /// Reserves `count` consecutive ids from the sequence for `kind` and
    /// returns the first one. Sequences start at 1.
    async fn reserve_ids(&self, kind: IdKind, count: usize) -> AppResult<i64> {
        if count == 0 {
            return Ok(0);
        }

        let sequence = sequence_name(kind);
        let count = count as i64;
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": count } })
            .with_options(options)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("Sequence '{}' was not created", sequence))
            })?;

        Ok(counter.seq - count + 1)
    }
}

fn sequence_name(kind: IdKind) -> &'static str {
    match kind {
        IdKind::Quiz => "quizzes",
        IdKind::Question => "questions",
        IdKind::Answer => "answers",
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let find_options = FindOptions::builder().sort(doc! { "id": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(find_options).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn save(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        let mut next_quiz = self
            .reserve_ids(IdKind::Quiz, quiz.missing_ids(IdKind::Quiz))
            .await?;
        let mut next_question = self
            .reserve_ids(IdKind::Question, quiz.missing_ids(IdKind::Question))
            .await?;
        let mut next_answer = self
            .reserve_ids(IdKind::Answer, quiz.missing_ids(IdKind::Answer))
            .await?;

        quiz.assign_missing_ids(|kind| {
            let next = match kind {
                IdKind::Quiz => &mut next_quiz,
                IdKind::Question => &mut next_question,
                IdKind::Answer => &mut next_answer,
            };
            *next += 1;
            *next - 1
        });

        let quiz_id = quiz
            .id
            .ok_or_else(|| AppError::InternalError("Quiz id was not assigned".to_string()))?;

        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "id": quiz_id }, &quiz)
            .with_options(options)
            .await?;

        Ok(quiz)
    }

    async fn delete(&self, quiz: &Quiz) -> AppResult<()> {
        let id = quiz
            .id
            .ok_or_else(|| AppError::InternalError("Cannot delete an unsaved quiz".to_string()))?;

        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("No Quiz found with id {}", id)));
        }

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
