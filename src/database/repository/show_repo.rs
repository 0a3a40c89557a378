use sqlx::PgPool;

use crate::database::models::show::{NewShow, Show, ShowListing};

pub struct ShowRepo;

impl ShowRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT v.id AS venue_id, v.name AS venue_name, \
                    a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a show; unknown artist or venue ids surface as a foreign-key violation
    pub async fn create(pool: &PgPool, input: &NewShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES ($1, $2, $3) \
             RETURNING id, artist_id, venue_id, start_time",
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .fetch_one(pool)
        .await
    }
}
