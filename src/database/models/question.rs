use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::validation::{FieldCheck, LooseInt};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Body of `POST /questions` when creating. The trivia frontend sends
/// `difficulty` and `category` as strings taken from `<select>` values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionInput {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl QuestionInput {
    pub fn validate(&self) -> Result<NewQuestion, ApiError> {
        let difficulty = self.difficulty.as_ref().and_then(LooseInt::value);
        let category = self.category.as_ref().and_then(LooseInt::value);

        let mut check = FieldCheck::new();
        check
            .required("question", &self.question)
            .required("answer", &self.answer)
            .range("difficulty", difficulty, 1, 5)
            .range("category", category, 1, i32::MAX as i64);
        check.finish()?;

        Ok(NewQuestion {
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            difficulty: difficulty.unwrap_or_default() as i32,
            category: category.unwrap_or_default() as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_selects() {
        let input: QuestionInput = serde_json::from_value(serde_json::json!({
            "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "answer": "Maya Angelou",
            "difficulty": "2",
            "category": "4"
        }))
        .unwrap();
        let new = input.validate().unwrap();
        assert_eq!(new.difficulty, 2);
        assert_eq!(new.category, 4);
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let input = QuestionInput {
            question: "What is the heaviest organ in the human body?".into(),
            answer: "The Liver".into(),
            difficulty: Some(LooseInt::Int(9)),
            category: Some(LooseInt::Int(1)),
        };
        let body = input.validate().unwrap_err().to_json();
        assert_eq!(body["field_errors"]["difficulty"], "must be between 1 and 5");
    }
}
