use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;
use crate::validation::FieldCheck;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut check = FieldCheck::new();
        check
            .required("name", &self.name)
            .max_len("name", &self.name, 120)
            .required("city", &self.city)
            .max_len("city", &self.city, 120)
            .state("state", &self.state)
            .phone("phone", &self.phone)
            .genres("genres", &self.genres)
            .link("image_link", &self.image_link, 500)
            .link("facebook_link", &self.facebook_link, 120)
            .link("website", &self.website, 120);
        check.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

impl ArtistPatch {
    pub fn apply(self, artist: Artist) -> ArtistInput {
        ArtistInput {
            name: self.name.unwrap_or(artist.name),
            city: self.city.unwrap_or(artist.city),
            state: self.state.unwrap_or(artist.state),
            phone: self.phone.or(artist.phone),
            genres: self.genres.unwrap_or(artist.genres),
            image_link: self.image_link.or(artist.image_link),
            facebook_link: self.facebook_link.or(artist.facebook_link),
            website: self.website.or(artist.website),
            seeking_venue: self.seeking_venue.unwrap_or(artist.seeking_venue),
            seeking_description: self.seeking_description.or(artist.seeking_description),
        }
    }
}
