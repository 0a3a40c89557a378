//! Request-body checks shared by the services. Problems are collected per field
//! and reported together as a 422.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, FieldErrors};

pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Swing",
    "Other",
];

/// Integer that clients send either as a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
}

impl LooseInt {
    pub fn value(&self) -> Option<i64> {
        match self {
            LooseInt::Int(n) => Some(*n),
            LooseInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Treat absent and whitespace-only strings the same
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Accumulates field problems for one request body
#[derive(Debug, Default)]
pub struct FieldCheck {
    errors: FieldErrors,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
        self
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.fail(field, format!("must be at most {} characters", max));
        }
        self
    }

    pub fn range(&mut self, field: &str, value: Option<i64>, min: i64, max: i64) -> &mut Self {
        match value {
            None => {
                self.fail(field, "is required");
            }
            Some(v) if v < min || v > max => {
                self.fail(field, format!("must be between {} and {}", min, max));
            }
            Some(_) => {}
        }
        self
    }

    pub fn state(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            return self.required(field, value);
        }
        if !US_STATES.contains(&value.trim()) {
            self.fail(field, "must be a two-letter US state code");
        }
        self
    }

    pub fn genres(&mut self, field: &str, values: &[String]) -> &mut Self {
        if values.is_empty() {
            self.fail(field, "at least one genre is required");
        } else if let Some(bad) = values.iter().find(|g| !GENRES.contains(&g.as_str())) {
            self.fail(field, format!("unknown genre '{}'", bad));
        }
        self
    }

    pub fn phone(&mut self, field: &str, value: &Option<String>) -> &mut Self {
        if let Some(phone) = non_blank(value) {
            if !is_phone(phone) {
                self.fail(field, "must look like 555-555-5555");
            }
        }
        self
    }

    /// Absolute http(s) URL no longer than `max` characters, when present
    pub fn link(&mut self, field: &str, value: &Option<String>, max: usize) -> &mut Self {
        if let Some(link) = non_blank(value) {
            if value.as_deref().map_or(0, |v| v.chars().count()) > max {
                return self.fail(field, format!("must be at most {} characters", max));
            }
            let ok = url::Url::parse(link)
                .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
                .unwrap_or(false);
            if !ok {
                self.fail(field, "must be an http(s) URL");
            }
        }
        self
    }

    pub fn date(&mut self, field: &str, value: &str) -> Option<NaiveDate> {
        if value.trim().is_empty() {
            self.required(field, value);
            return None;
        }
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.fail(field, "must be a date formatted YYYY-MM-DD");
                None
            }
        }
    }

    pub fn timestamp(&mut self, field: &str, value: &str) -> Option<DateTime<Utc>> {
        if value.trim().is_empty() {
            self.required(field, value);
            return None;
        }
        match parse_timestamp(value) {
            Some(ts) => Some(ts),
            None => {
                self.fail(field, "must be RFC 3339 or YYYY-MM-DD HH:MM:SS");
                None
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.errors))
        }
    }
}

fn is_phone(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    matches!(groups.as_slice(), [a, b, c]
        if a.len() == 3 && b.len() == 3 && c.len() == 4
            && groups.iter().all(|g| g.chars().all(|ch| ch.is_ascii_digit())))
}

/// RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS` taken as UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}
