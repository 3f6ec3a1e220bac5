use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz},
        dto::{
            to_quiz_responses, QuestionRequestDto, QuestionResponseDto, QuizRequestDto,
            QuizResponseDto,
        },
    },
    repositories::{QuestionRepository, QuizRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    rng: Mutex<StdRng>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self::with_rng(quizzes, questions, StdRng::from_entropy())
    }

    pub fn with_rng(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        rng: StdRng,
    ) -> Self {
        Self {
            quizzes,
            questions,
            rng: Mutex::new(rng),
        }
    }

    async fn find_quiz(&self, id: i64) -> AppResult<Quiz> {
        self.quizzes.find_by_id(id).await?.ok_or_else(|| {
            log::warn!("Quiz {} not found", id);
            AppError::NotFound(format!("No Quiz found with id {}", id))
        })
    }

    async fn find_quiz_question(&self, id: i64, question_id: i64) -> AppResult<Question> {
        self.questions
            .find_by_quiz_id_and_id(id, question_id)
            .await?
            .ok_or_else(|| {
                log::warn!("Question {} not found in quiz {}", question_id, id);
                AppError::NotFound(format!(
                    "No Question found with id {} in Quiz with id {}",
                    question_id, id
                ))
            })
    }

    pub async fn get_all_quizzes(&self) -> AppResult<Vec<QuizResponseDto>> {
        let quizzes = self.quizzes.find_all().await?;
        log::debug!("Listing {} quizzes", quizzes.len());
        Ok(to_quiz_responses(quizzes))
    }

    pub async fn get_quiz(&self, id: i64) -> AppResult<QuizResponseDto> {
        let quiz = self.find_quiz(id).await?;
        Ok(quiz.into())
    }

    pub async fn create_quiz(&self, request: QuizRequestDto) -> AppResult<QuizResponseDto> {
        let saved = self.quizzes.save(Quiz::from(request)).await?;
        log::info!(
            "Created quiz {:?} with {} questions",
            saved.id,
            saved.questions.len()
        );
        Ok(saved.into())
    }

    pub async fn delete_quiz(&self, id: i64) -> AppResult<QuizResponseDto> {
        let quiz = self.find_quiz(id).await?;
        self.quizzes.delete(&quiz).await?;
        log::info!("Deleted quiz {}", id);
        Ok(quiz.into())
    }

    pub async fn delete_question(
        &self,
        id: i64,
        question_id: i64,
    ) -> AppResult<QuestionResponseDto> {
        let question = self.find_quiz_question(id, question_id).await?;
        self.questions.delete(&question).await?;
        log::info!("Deleted question {} from quiz {}", question_id, id);
        Ok(question.into())
    }

    pub async fn get_random_question(&self, id: i64) -> AppResult<QuestionResponseDto> {
        let mut quiz = self.find_quiz(id).await?;

        if quiz.questions.is_empty() {
            return Err(AppError::NoQuestions(format!(
                "Quiz with id {} has no questions",
                id
            )));
        }

        let index = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| AppError::InternalError("Random source is poisoned".to_string()))?;
            rng.gen_range(0..quiz.questions.len())
        };

        log::debug!("Picked question index {} of quiz {}", index, id);
        Ok(quiz.questions.swap_remove(index).into())
    }

    pub async fn rename_quiz(&self, id: i64, new_name: &str) -> AppResult<QuizResponseDto> {
        let mut quiz = self.find_quiz(id).await?;
        quiz.name = new_name.to_string();

        let saved = self.quizzes.save(quiz).await?;
        log::info!("Renamed quiz {} to '{}'", id, new_name);
        Ok(saved.into())
    }

    pub async fn add_question(
        &self,
        id: i64,
        request: QuestionRequestDto,
    ) -> AppResult<QuizResponseDto> {
        let mut quiz = self.find_quiz(id).await?;
        quiz.add_question(Question::from(request));

        let saved = self.quizzes.save(quiz).await?;
        log::info!("Added question to quiz {}", id);
        Ok(saved.into())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.quizzes.ping().await
    }
}
