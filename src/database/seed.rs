//! Bundled sample data for the trivia and coffee services.
//!
//! Each group is inserted only when its table is empty, so running the seed
//! twice leaves the data unchanged.

use std::collections::HashMap;

use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use super::models::drink::Ingredient;
use super::models::question::NewQuestion;
use super::repository::{CategoryRepo, DrinkRepo, QuestionRepo};

const CATALOG: &str = include_str!("../../seeds/catalog.yaml");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("seed question refers to unknown category '{0}'")]
    UnknownCategory(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub categories: Vec<String>,
    pub questions: Vec<SeedQuestion>,
    pub drinks: Vec<SeedDrink>,
}

#[derive(Debug, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

#[derive(Debug, Deserialize)]
pub struct SeedDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Counts of rows written by one seed run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
    pub drinks: usize,
}

pub fn catalog() -> Result<Catalog, SeedError> {
    let catalog: Catalog = serde_yaml::from_str(CATALOG)?;
    if let Some(q) = catalog
        .questions
        .iter()
        .find(|q| !catalog.categories.contains(&q.category))
    {
        return Err(SeedError::UnknownCategory(q.category.clone()));
    }
    Ok(catalog)
}

pub async fn run(pool: &PgPool) -> Result<SeedReport, SeedError> {
    let catalog = catalog()?;
    let mut report = SeedReport::default();

    seed_trivia(pool, &catalog, &mut report).await?;

    if DrinkRepo::count(pool).await? == 0 {
        for drink in &catalog.drinks {
            DrinkRepo::create(pool, &drink.title, &drink.recipe).await?;
            report.drinks += 1;
        }
    } else {
        info!("Drinks already present, skipping coffee seed");
    }

    info!(
        categories = report.categories,
        questions = report.questions,
        drinks = report.drinks,
        "Seed complete"
    );
    Ok(report)
}

/// Categories and questions are checked separately; questions find their
/// category by name and create it when it is missing. All or nothing.
async fn seed_trivia(pool: &PgPool, catalog: &Catalog, report: &mut SeedReport) -> Result<(), SeedError> {
    let mut tx = pool.begin().await?;

    let existing = CategoryRepo::list(&mut *tx).await?;
    let mut ids: HashMap<String, i32> = existing.iter().map(|c| (c.kind.clone(), c.id)).collect();

    if existing.is_empty() {
        for kind in &catalog.categories {
            let category = CategoryRepo::create(&mut *tx, kind).await?;
            ids.insert(category.kind, category.id);
            report.categories += 1;
        }
    } else {
        info!("Categories already present, skipping category seed");
    }

    if QuestionRepo::count(&mut *tx).await? == 0 {
        for q in &catalog.questions {
            let category = match ids.get(&q.category) {
                Some(id) => *id,
                None => {
                    let created = CategoryRepo::create(&mut *tx, &q.category).await?;
                    report.categories += 1;
                    ids.insert(created.kind, created.id);
                    created.id
                }
            };
            let new_question = NewQuestion {
                question: q.question.clone(),
                answer: q.answer.clone(),
                difficulty: q.difficulty,
                category,
            };
            QuestionRepo::create(&mut *tx, &new_question).await?;
            report.questions += 1;
        }
    } else {
        info!("Questions already present, skipping question seed");
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.categories.len(), 6);
        assert!(!catalog.questions.is_empty());
        assert!(catalog.questions.iter().all(|q| (1..=5).contains(&q.difficulty)));
    }

    #[test]
    fn bundled_drinks_have_valid_recipes() {
        let catalog = catalog().unwrap();
        for drink in catalog.drinks {
            assert!(!drink.recipe.is_empty(), "{} has no recipe", drink.title);
            assert!(drink.recipe.iter().all(|i| i.parts >= 1 && !i.name.is_empty()));
        }
    }
}
