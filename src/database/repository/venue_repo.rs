use sqlx::PgPool;

use super::like_pattern;
use crate::database::models::show::VenueShow;
use crate::database::models::venue::{Venue, VenueInput, VenueSummary};
use crate::validation::non_blank;

const COLUMNS: &str = "\
    id, name, city, state, address, phone, genres, image_link, facebook_link, \
    website, seeking_talent, seeking_description, created_at";

const SUMMARY: &str = "\
    v.id, v.name, v.city, v.state, \
    (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > now()) AS num_upcoming_shows";

pub struct VenueRepo;

impl VenueRepo {
    /// Every venue with its upcoming-show count, ordered for grouping by area
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY} FROM venues v ORDER BY v.state, v.city, v.name");
        sqlx::query_as::<_, VenueSummary>(&query).fetch_all(pool).await
    }

    /// Case-insensitive partial match on the venue name
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY} FROM venues v WHERE v.name ILIKE $1 ORDER BY v.name");
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query).bind(id).fetch_optional(pool).await
    }

    /// Shows at the venue, earliest first, with the performing artist
    pub async fn shows(pool: &PgPool, id: i32) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time \
             FROM shows s JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 ORDER BY s.start_time",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &PgPool, input: &VenueInput) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues \
                (name, city, state, address, phone, genres, image_link, facebook_link, \
                 website, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(input.name.trim())
            .bind(input.city.trim())
            .bind(input.state.trim())
            .bind(input.address.trim())
            .bind(non_blank(&input.phone))
            .bind(&input.genres)
            .bind(non_blank(&input.image_link))
            .bind(non_blank(&input.facebook_link))
            .bind(non_blank(&input.website))
            .bind(input.seeking_talent)
            .bind(non_blank(&input.seeking_description))
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: i32, input: &VenueInput) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                name = $2, city = $3, state = $4, address = $5, phone = $6, genres = $7, \
                image_link = $8, facebook_link = $9, website = $10, seeking_talent = $11, \
                seeking_description = $12 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(input.city.trim())
            .bind(input.state.trim())
            .bind(input.address.trim())
            .bind(non_blank(&input.phone))
            .bind(&input.genres)
            .bind(non_blank(&input.image_link))
            .bind(non_blank(&input.facebook_link))
            .bind(non_blank(&input.website))
            .bind(input.seeking_talent)
            .bind(non_blank(&input.seeking_description))
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue (its shows cascade). Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
