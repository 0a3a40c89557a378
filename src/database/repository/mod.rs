//! One unit struct per table; every method takes the pool and returns `sqlx::Error`.

pub mod actor_repo;
pub mod artist_repo;
pub mod category_repo;
pub mod drink_repo;
pub mod movie_repo;
pub mod question_repo;
pub mod show_repo;
pub mod venue_repo;

pub use actor_repo::ActorRepo;
pub use artist_repo::ArtistRepo;
pub use category_repo::CategoryRepo;
pub use drink_repo::DrinkRepo;
pub use movie_repo::MovieRepo;
pub use question_repo::QuestionRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;

/// Escape LIKE wildcards so a search term matches literally
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Hop"), "%Hop%");
        assert_eq!(like_pattern(" 100%_ "), "%100\\%\\_%");
    }
}
