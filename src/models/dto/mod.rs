pub mod quiz_dto;
pub mod request;
pub mod response;

pub use quiz_dto::to_quiz_responses;
pub use request::{AnswerRequestDto, QuestionRequestDto, QuizRequestDto};
pub use response::{AnswerResponseDto, QuestionResponseDto, QuizResponseDto};
