pub mod question_repository;
pub mod quiz_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
