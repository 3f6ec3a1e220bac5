#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Answer, Question, Quiz};
    use crate::models::dto::{AnswerRequestDto, QuestionRequestDto, QuizRequestDto};

    /// A question request with `answers` options, the first one correct
    pub fn question_request(text: &str, answers: usize) -> QuestionRequestDto {
        QuestionRequestDto {
            text: text.to_string(),
            answers: (0..answers)
                .map(|i| AnswerRequestDto {
                    text: format!("Answer {}", i + 1),
                    correct: i == 0,
                })
                .collect(),
        }
    }

    /// A quiz request with `questions` questions of `answers` answers each
    pub fn quiz_request(name: &str, questions: usize, answers: usize) -> QuizRequestDto {
        QuizRequestDto {
            name: name.to_string(),
            questions: (0..questions)
                .map(|i| question_request(&format!("Question {}", i + 1), answers))
                .collect(),
        }
    }

    /// A stored quiz whose questions carry the given ids, each with one
    /// correct answer whose id is ten times the question id
    pub fn stored_quiz(id: i64, question_ids: &[i64]) -> Quiz {
        let mut quiz = Quiz::new("Rust basics");
        quiz.id = Some(id);
        for question_id in question_ids {
            let mut question = Question::new(&format!("Question {}", question_id));
            question.id = Some(*question_id);
            let mut answer = Answer::new("Yes", true);
            answer.id = Some(question_id * 10);
            question.answers.push(answer);
            quiz.add_question(question);
        }
        quiz
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_request() {
        let request = quiz_request("Trivia", 3, 2);
        assert_eq!(request.name, "Trivia");
        assert_eq!(request.questions.len(), 3);
        assert!(request.questions.iter().all(|q| q.answers.len() == 2));
        assert!(request.questions[0].answers[0].correct);
        assert!(!request.questions[0].answers[1].correct);
    }

    #[test]
    fn test_fixtures_stored_quiz_is_linked() {
        let quiz = stored_quiz(4, &[1, 2]);
        assert_eq!(quiz.questions.len(), 2);
        assert!(quiz.questions.iter().all(|q| q.quiz_id == Some(4)));
        assert_eq!(quiz.questions[1].answers[0].id, Some(20));
        assert_eq!(quiz.questions[1].answers[0].question_id, Some(2));
    }
}
