use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuestionRepository, MongoQuizRepository},
    services::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;
        let question_repository =
            Arc::new(MongoQuestionRepository::new(&db, &config.quizzes_collection));

        let quiz_service = match config.random_seed {
            Some(seed) => {
                log::info!("Random question selection seeded with {}", seed);
                QuizService::with_rng(
                    quiz_repository,
                    question_repository,
                    StdRng::seed_from_u64(seed),
                )
            }
            None => QuizService::new(quiz_repository, question_repository),
        };

        Ok(Self::from_service(quiz_service, config))
    }

    pub fn from_service(quiz_service: QuizService, config: Config) -> Self {
        Self {
            quiz_service: Arc::new(quiz_service),
            config: Arc::new(config),
        }
    }
}
