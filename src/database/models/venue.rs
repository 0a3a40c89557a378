use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::validation::FieldCheck;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Venue row with its upcoming-show count, used by listings and search
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Body of `POST /venues`; also the merged result of a patch
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut check = FieldCheck::new();
        check
            .required("name", &self.name)
            .max_len("name", &self.name, 120)
            .required("city", &self.city)
            .max_len("city", &self.city, 120)
            .state("state", &self.state)
            .required("address", &self.address)
            .max_len("address", &self.address, 120)
            .phone("phone", &self.phone)
            .genres("genres", &self.genres)
            .link("image_link", &self.image_link, 500)
            .link("facebook_link", &self.facebook_link, 120)
            .link("website", &self.website, 120);
        check.finish()
    }
}

/// Body of `PATCH /venues/:id`; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

impl VenuePatch {
    pub fn apply(self, venue: Venue) -> VenueInput {
        VenueInput {
            name: self.name.unwrap_or(venue.name),
            city: self.city.unwrap_or(venue.city),
            state: self.state.unwrap_or(venue.state),
            address: self.address.unwrap_or(venue.address),
            phone: self.phone.or(venue.phone),
            genres: self.genres.unwrap_or(venue.genres),
            image_link: self.image_link.or(venue.image_link),
            facebook_link: self.facebook_link.or(venue.facebook_link),
            website: self.website.or(venue.website),
            seeking_talent: self.seeking_talent.unwrap_or(venue.seeking_talent),
            seeking_description: self.seeking_description.or(venue.seeking_description),
        }
    }
}
