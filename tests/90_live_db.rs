//! CRUD flows against a real Postgres. Skipped unless TEST_DATABASE_URL is set.

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

fn unique(prefix: &str) -> String {
    format!("{} {}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn drink_lifecycle() -> Result<()> {
    let Some(app) = common::live_app().await? else {
        return Ok(());
    };
    let token = common::token(&["get:drinks-detail", "post:drinks", "patch:drinks", "delete:drinks"]);
    let title = unique("Matcha");

    let (status, body) = common::post(
        &app,
        "/drinks",
        Some(&token),
        json!({ "title": title, "recipe": { "name": "matcha", "color": "green", "parts": 1 } }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let id = body["drinks"][0]["id"].as_i64().expect("drink id");
    assert_eq!(body["drinks"][0]["recipe"][0]["name"], "matcha");

    let (status, _) = common::post(
        &app,
        "/drinks",
        Some(&token),
        json!({ "title": title, "recipe": [{ "name": "water", "color": "blue", "parts": 1 }] }),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = common::get(&app, "/drinks", None).await?;
    let listed = body["drinks"]
        .as_array()
        .expect("drinks")
        .iter()
        .find(|d| d["id"] == id)
        .cloned()
        .expect("new drink listed");
    assert!(listed["recipe"][0].get("name").is_none());

    let renamed = unique("Iced Matcha");
    let (status, body) =
        common::patch(&app, &format!("/drinks/{}", id), Some(&token), json!({ "title": renamed })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["drinks"][0]["title"], renamed.as_str());

    let (status, body) = common::delete(&app, &format!("/drinks/{}", id), Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delete"], id);

    let (status, _) = common::delete(&app, &format!("/drinks/{}", id), Some(&token)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn question_create_search_delete() -> Result<()> {
    let Some(app) = common::live_app().await? else {
        return Ok(());
    };

    let pool = sqlx::PgPool::connect(&std::env::var("TEST_DATABASE_URL")?).await?;
    let category = showcase_api::database::repository::CategoryRepo::create(&pool, "Science").await?;

    let text = unique("Which planet has the most moons");
    let (status, body) = common::post(
        &app,
        "/questions",
        None,
        json!({ "question": text, "answer": "Saturn", "difficulty": 3, "category": category.id.to_string() }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let id = body["created"].as_i64().expect("question id");

    let (status, body) = common::post(&app, "/questions", None, json!({ "searchTerm": text })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], serde_json::Value::Null);

    let (status, body) = common::post(
        &app,
        "/quizzes",
        None,
        json!({ "previous_questions": [], "quiz_category": { "type": "Science", "id": category.id } }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["category"], category.id);

    let (status, body) = common::post(
        &app,
        "/quizzes",
        None,
        json!({ "previous_questions": [], "quiz_category": { "id": i32::MAX } }),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND, "{}", body);

    let (status, body) = common::delete(&app, &format!("/questions/{}", id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], id);
    Ok(())
}

#[tokio::test]
async fn venue_show_detail() -> Result<()> {
    let Some(app) = common::live_app().await? else {
        return Ok(());
    };

    let (status, body) = common::post(
        &app,
        "/venues",
        None,
        json!({
            "name": unique("The Dueling Pianos Bar"),
            "city": "New York",
            "state": "NY",
            "address": "335 Delancey Street",
            "genres": ["Classical", "R&B"]
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let venue_id = body["venue"]["id"].as_i64().expect("venue id");

    let (status, body) = common::post(
        &app,
        "/artists",
        None,
        json!({ "name": unique("Matt Quevedo"), "city": "New York", "state": "NY", "genres": ["Jazz"] }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let artist_id = body["artist"]["id"].as_i64().expect("artist id");

    for start_time in ["2019-06-15T23:00:00Z", "2099-01-01 20:00:00"] {
        let (status, _) = common::post(
            &app,
            "/shows",
            None,
            json!({ "artist_id": artist_id, "venue_id": venue_id, "start_time": start_time }),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = common::post(
        &app,
        "/shows",
        None,
        json!({ "artist_id": artist_id, "venue_id": i32::MAX, "start_time": "2099-01-01 20:00:00" }),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = common::get(&app, &format!("/venues/{}", venue_id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["venue"]["past_shows_count"], 1);
    assert_eq!(body["venue"]["upcoming_shows_count"], 1);
    assert_eq!(body["venue"]["upcoming_shows"][0]["artist_id"], artist_id);

    let (status, _) = common::delete(&app, &format!("/venues/{}", venue_id), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = common::get(&app, &format!("/artists/{}", artist_id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["artist"]["past_shows_count"], 0);
    Ok(())
}

#[tokio::test]
async fn actor_and_movie_crud() -> Result<()> {
    let Some(app) = common::live_app().await? else {
        return Ok(());
    };
    let token = common::token(&[
        "get:actors", "post:actors", "patch:actors", "delete:actors",
        "get:movies", "post:movies", "patch:movies", "delete:movies",
    ]);

    let (status, body) = common::post(
        &app,
        "/actors",
        Some(&token),
        json!({ "name": "Brigitte Helm", "age": 30, "gender": "female" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let actor_id = body["created"].as_i64().expect("actor id");

    let (status, body) =
        common::patch(&app, &format!("/actors/{}", actor_id), Some(&token), json!({ "age": 31 })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actor"]["age"], 31);
    assert_eq!(body["actor"]["name"], "Brigitte Helm");

    let (status, body) = common::post(
        &app,
        "/movies",
        Some(&token),
        json!({ "title": "Metropolis", "release_date": "1927-01-10" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["movie"]["release_date"], "1927-01-10");
    let movie_id = body["created"].as_i64().expect("movie id");

    let (status, body) = common::delete(&app, &format!("/movies/{}", movie_id), Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], movie_id);

    let (status, _) = common::get(&app, &format!("/movies/{}", movie_id), Some(&token)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::delete(&app, &format!("/actors/{}", actor_id), Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn seed_fills_questions_when_only_categories_exist() -> Result<()> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        return Ok(());
    };
    use showcase_api::database::repository::{CategoryRepo, QuestionRepo};
    use showcase_api::database::{schema, seed};

    // Private schema so the rest of the suite cannot make the tables non-empty
    let namespace = format!("seed_{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default());
    let admin = sqlx::PgPool::connect(&url).await?;
    sqlx::query(&format!("CREATE SCHEMA {}", namespace)).execute(&admin).await?;

    let search_path = format!("SET search_path TO {}", namespace);
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .after_connect(move |conn, _meta| {
            let sql = search_path.clone();
            Box::pin(async move {
                sqlx::query(&sql).execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await?;
    schema::apply(&pool).await?;
    CategoryRepo::create(&pool, "Science").await?;

    let catalog = seed::catalog()?;
    let first = seed::run(&pool).await?;
    assert_eq!(first.questions, catalog.questions.len());
    assert_eq!(first.categories, catalog.categories.len() - 1);
    assert_eq!(QuestionRepo::count(&pool).await?, catalog.questions.len() as i64);
    assert_eq!(CategoryRepo::list(&pool).await?.len(), catalog.categories.len());

    let second = seed::run(&pool).await?;
    assert_eq!(second, seed::SeedReport::default());

    pool.close().await;
    sqlx::query(&format!("DROP SCHEMA {} CASCADE", namespace)).execute(&admin).await?;
    Ok(())
}
