use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::validation::FieldCheck;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    pub color: String,
    pub name: String,
    pub parts: i32,
}

/// Public view of an ingredient: the color swatch without its name
#[derive(Debug, Clone, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Drink {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| ShortIngredient {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }

    pub fn long(&self) -> Drink {
        self.clone()
    }
}

/// Clients post either a single ingredient object or a list of them
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(list) => list,
            RecipeInput::One(single) => vec![single],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrinkInput {
    #[serde(default)]
    pub title: String,
    pub recipe: Option<RecipeInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrinkPatch {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

fn check_title(check: &mut FieldCheck, title: &str) {
    check.required("title", title).max_len("title", title.trim(), 80);
}

fn check_recipe(check: &mut FieldCheck, recipe: &[Ingredient]) {
    if recipe.is_empty() {
        check.fail("recipe", "at least one ingredient is required");
    }
    for (idx, ingredient) in recipe.iter().enumerate() {
        if ingredient.name.trim().is_empty() {
            check.fail(&format!("recipe[{}].name", idx), "is required");
        }
        if ingredient.color.trim().is_empty() {
            check.fail(&format!("recipe[{}].color", idx), "is required");
        }
        if ingredient.parts < 1 {
            check.fail(&format!("recipe[{}].parts", idx), "must be at least 1");
        }
    }
}

impl DrinkInput {
    pub fn validate(self) -> Result<(String, Vec<Ingredient>), ApiError> {
        let recipe = self.recipe.map(RecipeInput::into_ingredients).unwrap_or_default();

        let mut check = FieldCheck::new();
        check_title(&mut check, &self.title);
        check_recipe(&mut check, &recipe);
        check.finish()?;

        Ok((self.title.trim().to_string(), recipe))
    }
}

impl DrinkPatch {
    pub fn validate(self) -> Result<(Option<String>, Option<Vec<Ingredient>>), ApiError> {
        let recipe = self.recipe.map(RecipeInput::into_ingredients);

        let mut check = FieldCheck::new();
        if let Some(title) = &self.title {
            check_title(&mut check, title);
        }
        if let Some(recipe) = &recipe {
            check_recipe(&mut check, recipe);
        }
        check.finish()?;

        Ok((self.title.map(|t| t.trim().to_string()), recipe))
    }
}
