use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::validation::FieldCheck;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorInput {
    #[serde(default)]
    pub name: String,
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: String,
}

#[derive(Debug, Clone)]
pub struct NewActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl ActorInput {
    pub fn validate(&self) -> Result<NewActor, ApiError> {
        let mut check = FieldCheck::new();
        check
            .required("name", &self.name)
            .range("age", self.age.map(i64::from), 0, 150)
            .required("gender", &self.gender);
        check.finish()?;

        Ok(NewActor {
            name: self.name.trim().to_string(),
            age: self.age.unwrap_or_default(),
            gender: self.gender.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl ActorPatch {
    pub fn apply(self, actor: Actor) -> ActorInput {
        ActorInput {
            name: self.name.unwrap_or(actor.name),
            age: self.age.or(Some(actor.age)),
            gender: self.gender.unwrap_or(actor.gender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_then_validate() {
        let actor = Actor {
            id: 3,
            name: "Ada Lovelace".into(),
            age: 36,
            gender: "female".into(),
        };
        let patch = ActorPatch {
            age: Some(200),
            ..Default::default()
        };
        let body = patch.apply(actor).validate().unwrap_err().to_json();
        assert_eq!(body["field_errors"]["age"], "must be between 0 and 150");
    }
}
