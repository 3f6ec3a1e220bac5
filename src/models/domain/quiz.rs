use serde::{Deserialize, Serialize};

use crate::models::domain::question::Question;

/// The entity kinds that draw numeric ids from their own sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdKind {
    Quiz,
    Question,
    Answer,
}

/// A named, ordered collection of questions. Stored as a single document with
/// its questions and their answers embedded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: Option<i64>, // Assigned by the repository on first save
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(name: &str) -> Self {
        Quiz {
            id: None,
            name: name.to_string(),
            questions: Vec::new(),
        }
    }

    /// Appends a question and re-links the whole graph to this quiz.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        self.link_children();
    }

    /// Points every question at this quiz and every answer at its question.
    pub fn link_children(&mut self) {
        for question in &mut self.questions {
            question.quiz_id = self.id;
            question.link_answers();
        }
    }

    pub fn question(&self, question_id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == Some(question_id))
    }

    /// How many entities of `kind` in this graph still lack an id.
    pub fn missing_ids(&self, kind: IdKind) -> usize {
        match kind {
            IdKind::Quiz => usize::from(self.id.is_none()),
            IdKind::Question => self.questions.iter().filter(|q| q.id.is_none()).count(),
            IdKind::Answer => self
                .questions
                .iter()
                .flat_map(|q| &q.answers)
                .filter(|a| a.id.is_none())
                .count(),
        }
    }

    /// Fills every missing id from `ids`, leaving existing ids untouched, then
    /// re-links the graph. Ids are requested quiz first, then each question
    /// followed by its answers, in document order.
    pub fn assign_missing_ids(&mut self, mut ids: impl FnMut(IdKind) -> i64) {
        if self.id.is_none() {
            self.id = Some(ids(IdKind::Quiz));
        }
        for question in &mut self.questions {
            if question.id.is_none() {
                question.id = Some(ids(IdKind::Question));
            }
            for answer in &mut question.answers {
                if answer.id.is_none() {
                    answer.id = Some(ids(IdKind::Answer));
                }
            }
        }
        self.link_children();
    }
}
