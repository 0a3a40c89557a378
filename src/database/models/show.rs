use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::validation::FieldCheck;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// A show joined with both sides, as listed by `GET /shows`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from its venue
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from its artist
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Split into (past, upcoming) relative to `now`; a show starting exactly now is past
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: DateTime<Utc>) -> (Vec<T>, Vec<T>) {
    shows.into_iter().partition(|s| s.start_time() <= now)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowInput {
    pub artist_id: Option<i32>,
    pub venue_id: Option<i32>,
    #[serde(default)]
    pub start_time: String,
}

#[derive(Debug, Clone)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl ShowInput {
    pub fn validate(&self) -> Result<NewShow, ApiError> {
        let mut check = FieldCheck::new();
        if self.artist_id.is_none() {
            check.fail("artist_id", "is required");
        }
        if self.venue_id.is_none() {
            check.fail("venue_id", "is required");
        }
        let start_time = check.timestamp("start_time", &self.start_time);

        match (self.artist_id, self.venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if check.is_ok() => Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => check.finish().and(Err(ApiError::unprocessable("unprocessable"))),
        }
    }
}
