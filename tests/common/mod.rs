#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::RwLock;

use quiz_api::{
    errors::{AppError, AppResult},
    models::{
        domain::{IdKind, Question, Quiz},
        dto::{AnswerRequestDto, QuestionRequestDto, QuizRequestDto},
    },
    repositories::{QuestionRepository, QuizRepository},
    services::QuizService,
};

/// Both repositories over one map of quiz graphs, mirroring the embedded
/// document layout of the MongoDB implementation.
pub struct InMemoryStore {
    quizzes: RwLock<BTreeMap<i64, Quiz>>,
    quiz_ids: AtomicI64,
    question_ids: AtomicI64,
    answer_ids: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            quizzes: RwLock::new(BTreeMap::new()),
            quiz_ids: AtomicI64::new(0),
            question_ids: AtomicI64::new(0),
            answer_ids: AtomicI64::new(0),
        }
    }

    fn next(&self, kind: IdKind) -> i64 {
        let counter = match kind {
            IdKind::Quiz => &self.quiz_ids,
            IdKind::Question => &self.question_ids,
            IdKind::Answer => &self.answer_ids,
        };
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl QuizRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.values().cloned().collect())
    }

    async fn save(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.assign_missing_ids(|kind| self.next(kind));
        let id = quiz
            .id
            .ok_or_else(|| AppError::InternalError("Quiz id was not assigned".to_string()))?;

        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(id, quiz.clone());
        Ok(quiz)
    }

    async fn delete(&self, quiz: &Quiz) -> AppResult<()> {
        let id = quiz
            .id
            .ok_or_else(|| AppError::InternalError("Cannot delete an unsaved quiz".to_string()))?;

        let mut quizzes = self.quizzes.write().await;
        if quizzes.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("No Quiz found with id {}", id)));
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn find_by_quiz_id_and_id(
        &self,
        quiz_id: i64,
        question_id: i64,
    ) -> AppResult<Option<Question>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .get(&quiz_id)
            .and_then(|quiz| quiz.question(question_id).cloned()))
    }

    async fn delete(&self, question: &Question) -> AppResult<()> {
        let (Some(quiz_id), Some(question_id)) = (question.quiz_id, question.id) else {
            return Err(AppError::InternalError(
                "Cannot delete a question that is not attached to a saved quiz".to_string(),
            ));
        };

        let mut quizzes = self.quizzes.write().await;
        let removed = quizzes.get_mut(&quiz_id).is_some_and(|quiz| {
            let before = quiz.questions.len();
            quiz.questions.retain(|q| q.id != Some(question_id));
            quiz.questions.len() < before
        });

        if !removed {
            return Err(AppError::NotFound(format!(
                "No Question found with id {} in Quiz with id {}",
                question_id, quiz_id
            )));
        }
        Ok(())
    }
}

pub fn seeded_service(store: &Arc<InMemoryStore>) -> QuizService {
    QuizService::with_rng(store.clone(), store.clone(), StdRng::seed_from_u64(1))
}

pub fn quiz_request(name: &str, questions: usize, answers: usize) -> QuizRequestDto {
    QuizRequestDto {
        name: name.to_string(),
        questions: (0..questions)
            .map(|q| question_request(&format!("Question {}", q + 1), answers))
            .collect(),
    }
}

pub fn question_request(text: &str, answers: usize) -> QuestionRequestDto {
    QuestionRequestDto {
        text: text.to_string(),
        answers: (0..answers)
            .map(|a| AnswerRequestDto {
                text: format!("Answer {}", a + 1),
                correct: a == 0,
            })
            .collect(),
    }
}
