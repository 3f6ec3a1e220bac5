//! Conversions between stored entities and the request/response shapes.

use crate::models::domain::{Answer, Question, Quiz};
use crate::models::dto::request::{AnswerRequestDto, QuestionRequestDto, QuizRequestDto};
use crate::models::dto::response::{AnswerResponseDto, QuestionResponseDto, QuizResponseDto};

impl From<Answer> for AnswerResponseDto {
	fn from(answer: Answer) -> Self {
		AnswerResponseDto {
			id: answer.id.unwrap_or_default(),
			text: answer.text,
			correct: answer.correct,
		}
	}
}

impl From<Question> for QuestionResponseDto {
	fn from(question: Question) -> Self {
		QuestionResponseDto {
			id: question.id.unwrap_or_default(),
			text: question.text,
			answers: question
				.answers
				.into_iter()
				.map(AnswerResponseDto::from)
				.collect(),
		}
	}
}

impl From<Quiz> for QuizResponseDto {
	fn from(quiz: Quiz) -> Self {
		QuizResponseDto {
			id: quiz.id.unwrap_or_default(),
			name: quiz.name,
			questions: quiz
				.questions
				.into_iter()
				.map(QuestionResponseDto::from)
				.collect(),
		}
	}
}

pub fn to_quiz_responses(quizzes: Vec<Quiz>) -> Vec<QuizResponseDto> {
	quizzes.into_iter().map(QuizResponseDto::from).collect()
}

impl From<AnswerRequestDto> for Answer {
	fn from(dto: AnswerRequestDto) -> Self {
		Answer::new(&dto.text, dto.correct)
	}
}

impl From<QuestionRequestDto> for Question {
	fn from(dto: QuestionRequestDto) -> Self {
		let mut question = Question::new(&dto.text);
		question.answers = dto.answers.into_iter().map(Answer::from).collect();
		question
	}
}

impl From<QuizRequestDto> for Quiz {
	fn from(dto: QuizRequestDto) -> Self {
		let mut quiz = Quiz::new(&dto.name);
		for question in dto.questions {
			quiz.add_question(Question::from(question));
		}
		quiz
	}
}
