use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequestDto {
    pub name: String,

    #[serde(default)]
    pub questions: Vec<QuestionRequestDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequestDto {
    pub text: String,

    #[serde(default)]
    pub answers: Vec<AnswerRequestDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequestDto {
    pub text: String,

    #[serde(default)]
    pub correct: bool,
}
