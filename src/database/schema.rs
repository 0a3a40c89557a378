//! Table definitions, applied idempotently at startup and by `showcase-api migrate`.

use sqlx::PgPool;
use tracing::info;

use super::DatabaseError;

const STATEMENTS: &[&str] = &[
    // Venues directory
    r#"CREATE TABLE IF NOT EXISTS venues (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL,
        city VARCHAR(120) NOT NULL,
        state VARCHAR(2) NOT NULL,
        address VARCHAR(120) NOT NULL,
        phone VARCHAR(120),
        genres TEXT[] NOT NULL DEFAULT '{}',
        image_link VARCHAR(500),
        facebook_link VARCHAR(120),
        website VARCHAR(120),
        seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
        seeking_description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS artists (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL,
        city VARCHAR(120) NOT NULL,
        state VARCHAR(2) NOT NULL,
        phone VARCHAR(120),
        genres TEXT[] NOT NULL DEFAULT '{}',
        image_link VARCHAR(500),
        facebook_link VARCHAR(120),
        website VARCHAR(120),
        seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
        seeking_description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS shows (
        id SERIAL PRIMARY KEY,
        artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
        venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
        start_time TIMESTAMPTZ NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS shows_venue_id_idx ON shows (venue_id)",
    "CREATE INDEX IF NOT EXISTS shows_artist_id_idx ON shows (artist_id)",
    // Trivia
    r#"CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        type TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS questions (
        id SERIAL PRIMARY KEY,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
        difficulty INTEGER NOT NULL
    )"#,
    // Coffee shop
    r#"CREATE TABLE IF NOT EXISTS drinks (
        id SERIAL PRIMARY KEY,
        title VARCHAR(80) NOT NULL UNIQUE,
        recipe JSONB NOT NULL
    )"#,
    // Casting agency
    r#"CREATE TABLE IF NOT EXISTS movies (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        release_date DATE NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS actors (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        gender TEXT NOT NULL
    )"#,
];

/// Create every table the services use
pub async fn apply(pool: &PgPool) -> Result<(), DatabaseError> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!(statements = STATEMENTS.len(), "Schema applied");
    Ok(())
}
