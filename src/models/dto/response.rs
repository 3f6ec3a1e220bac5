use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponseDto {
    pub id: i64,
    pub name: String,
    pub questions: Vec<QuestionResponseDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponseDto {
    pub id: i64,
    pub text: String,
    pub answers: Vec<AnswerResponseDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponseDto {
    pub id: i64,
    pub text: String,
    pub correct: bool,
}
