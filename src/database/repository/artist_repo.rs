use sqlx::PgPool;

use super::like_pattern;
use crate::database::models::artist::{Artist, ArtistInput, ArtistSummary};
use crate::database::models::show::ArtistShow;
use crate::validation::non_blank;

const COLUMNS: &str = "\
    id, name, city, state, phone, genres, image_link, facebook_link, \
    website, seeking_venue, seeking_description, created_at";

const SUMMARY: &str = "\
    a.id, a.name, \
    (SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > now()) AS num_upcoming_shows";

pub struct ArtistRepo;

impl ArtistRepo {
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY} FROM artists a ORDER BY a.name");
        sqlx::query_as::<_, ArtistSummary>(&query).fetch_all(pool).await
    }

    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY} FROM artists a WHERE a.name ILIKE $1 ORDER BY a.name");
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query).bind(id).fetch_optional(pool).await
    }

    pub async fn shows(pool: &PgPool, id: i32) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time \
             FROM shows s JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 ORDER BY s.start_time",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &PgPool, input: &ArtistInput) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists \
                (name, city, state, phone, genres, image_link, facebook_link, \
                 website, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(input.name.trim())
            .bind(input.city.trim())
            .bind(input.state.trim())
            .bind(non_blank(&input.phone))
            .bind(&input.genres)
            .bind(non_blank(&input.image_link))
            .bind(non_blank(&input.facebook_link))
            .bind(non_blank(&input.website))
            .bind(input.seeking_venue)
            .bind(non_blank(&input.seeking_description))
            .fetch_one(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: i32, input: &ArtistInput) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET \
                name = $2, city = $3, state = $4, phone = $5, genres = $6, image_link = $7, \
                facebook_link = $8, website = $9, seeking_venue = $10, seeking_description = $11 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(input.city.trim())
            .bind(input.state.trim())
            .bind(non_blank(&input.phone))
            .bind(&input.genres)
            .bind(non_blank(&input.image_link))
            .bind(non_blank(&input.facebook_link))
            .bind(non_blank(&input.website))
            .bind(input.seeking_venue)
            .bind(non_blank(&input.seeking_description))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
