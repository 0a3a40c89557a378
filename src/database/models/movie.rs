use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::validation::FieldCheck;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: String,
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub release_date: NaiveDate,
}

impl MovieInput {
    pub fn validate(&self) -> Result<NewMovie, ApiError> {
        let mut check = FieldCheck::new();
        check.required("title", &self.title);
        let release_date = check.date("release_date", &self.release_date);
        check.finish()?;

        match release_date {
            Some(release_date) => Ok(NewMovie {
                title: self.title.trim().to_string(),
                release_date,
            }),
            None => Err(ApiError::unprocessable("unprocessable")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub release_date: Option<String>,
}

impl MoviePatch {
    pub fn apply(self, movie: Movie) -> MovieInput {
        MovieInput {
            title: self.title.unwrap_or(movie.title),
            release_date: self
                .release_date
                .unwrap_or_else(|| movie.release_date.format("%Y-%m-%d").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_date_must_be_iso() {
        let input = MovieInput {
            title: "Metropolis".into(),
            release_date: "01/10/1927".into(),
        };
        let body = input.validate().unwrap_err().to_json();
        assert_eq!(body["field_errors"]["release_date"], "must be a date formatted YYYY-MM-DD");
    }

    #[test]
    fn patch_round_trips_stored_date() {
        let movie = Movie {
            id: 1,
            title: "Metropolis".into(),
            release_date: NaiveDate::from_ymd_opt(1927, 1, 10).unwrap(),
        };
        let patch = MoviePatch {
            title: Some("Metropolis (restored)".into()),
            release_date: None,
        };
        let new = patch.apply(movie).validate().unwrap();
        assert_eq!(new.release_date, NaiveDate::from_ymd_opt(1927, 1, 10).unwrap());
        assert_eq!(new.title, "Metropolis (restored)");
    }
}
