use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: Option<i64>,
    pub text: String,
    pub quiz_id: Option<i64>, // Owning quiz
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub id: Option<i64>,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    pub question_id: Option<i64>, // Owning question
}

impl Question {
    pub fn new(text: &str) -> Self {
        Question {
            id: None,
            text: text.to_string(),
            quiz_id: None,
            answers: Vec::new(),
        }
    }

    pub fn link_answers(&mut self) {
        for answer in &mut self.answers {
            answer.question_id = self.id;
        }
    }
}

impl Answer {
    pub fn new(text: &str, correct: bool) -> Self {
        Answer {
            id: None,
            text: text.to_string(),
            correct,
            question_id: None,
        }
    }
}
