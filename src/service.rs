// src/service.rs

//! Recipe service - the five recipe operations over an explicit connection
//!
//! Every operation runs in exactly one transaction. A failure at any point
//! drops the transaction uncommitted, so the store is left as it was.

use crate::db::{
    self,
    models::{Ingredient, Recipe},
};
use crate::error::{Error, Result};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Payload for creating a recipe together with its ingredients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRecipe {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Option<Vec<NewIngredient>>,
}

/// One ingredient entry of a [`NewRecipe`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIngredient {
    pub name: Option<String>,
}

/// Partial update of a recipe; `None` keeps the stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub instructions: Option<String>,
}

/// A recipe with its ingredients, as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub id: i64,
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<IngredientDetails>,
}

/// An ingredient as nested inside [`RecipeDetails`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDetails {
    pub id: i64,
    pub name: String,
}

impl From<&Ingredient> for IngredientDetails {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id.unwrap_or(0),
            name: ingredient.name.clone(),
        }
    }
}

impl RecipeDetails {
    fn from_parts(recipe: Recipe, ingredients: &[Ingredient]) -> Self {
        Self {
            id: recipe.id.unwrap_or(0),
            name: recipe.name,
            instructions: recipe.instructions,
            ingredients: ingredients.iter().map(IngredientDetails::from).collect(),
        }
    }
}

/// Recipe operations bound to one store connection
pub struct RecipeService<'a> {
    conn: &'a mut Connection,
}

impl<'a> RecipeService<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    /// Create a recipe and all of its ingredients atomically
    pub fn create(&mut self, payload: NewRecipe) -> Result<RecipeDetails> {
        let name = required(payload.name, "name")?;
        let instructions = required(payload.instructions, "instructions")?;
        let ingredient_names = payload
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|entry| required(entry.name, "ingredients.name"))
            .collect::<Result<Vec<_>>>()?;

        let details = db::transaction(self.conn, |tx| {
            let mut recipe = Recipe::new(name, instructions);
            let recipe_id = recipe.insert(tx)?;

            let mut ingredients = Vec::with_capacity(ingredient_names.len());
            for ingredient_name in ingredient_names {
                let mut ingredient = Ingredient::new(recipe_id, ingredient_name);
                ingredient.insert(tx)?;
                ingredients.push(ingredient);
            }

            Ok(RecipeDetails::from_parts(recipe, &ingredients))
        })?;

        info!(
            "Created recipe {} '{}' with {} ingredients",
            details.id,
            details.name,
            details.ingredients.len()
        );
        Ok(details)
    }

    /// List every recipe with its ingredients
    pub fn list(&mut self) -> Result<Vec<RecipeDetails>> {
        db::transaction(self.conn, |tx| {
            let recipes = Recipe::list_all(tx)?;

            let mut by_recipe: HashMap<i64, Vec<Ingredient>> = HashMap::new();
            for ingredient in Ingredient::list_all(tx)? {
                by_recipe
                    .entry(ingredient.recipe_id)
                    .or_default()
                    .push(ingredient);
            }

            let details = recipes
                .into_iter()
                .map(|recipe| {
                    let ingredients = recipe
                        .id
                        .and_then(|id| by_recipe.remove(&id))
                        .unwrap_or_default();
                    RecipeDetails::from_parts(recipe, &ingredients)
                })
                .collect::<Vec<_>>();

            debug!("Listed {} recipes", details.len());
            Ok(details)
        })
    }

    /// Fetch a single recipe with its ingredients
    pub fn get(&mut self, id: i64) -> Result<RecipeDetails> {
        db::transaction(self.conn, |tx| {
            let recipe = find_recipe(tx, id)?;
            let ingredients = Ingredient::find_by_recipe(tx, id)?;
            Ok(RecipeDetails::from_parts(recipe, &ingredients))
        })
    }

    /// Apply a partial update to a recipe's name and instructions
    ///
    /// Ingredients are never touched here.
    pub fn update(&mut self, id: i64, changes: RecipeChanges) -> Result<RecipeDetails> {
        let details = db::transaction(self.conn, |tx| {
            let mut recipe = find_recipe(tx, id)?;

            if let Some(name) = changes.name {
                recipe.name = required(Some(name), "name")?;
            }
            if let Some(instructions) = changes.instructions {
                recipe.instructions = required(Some(instructions), "instructions")?;
            }

            recipe.update(tx)?;
            let ingredients = Ingredient::find_by_recipe(tx, id)?;
            Ok(RecipeDetails::from_parts(recipe, &ingredients))
        })?;

        info!("Updated recipe {}", id);
        Ok(details)
    }

    /// Delete a recipe and every ingredient it owns
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let removed_ingredients = db::transaction(self.conn, |tx| {
            find_recipe(tx, id)?;
            let removed = Ingredient::delete_by_recipe(tx, id)?;
            Recipe::delete(tx, id)?;
            Ok(removed)
        })?;

        info!(
            "Deleted recipe {} and {} ingredients",
            id, removed_ingredients
        );
        Ok(())
    }
}

fn find_recipe(conn: &Connection, id: i64) -> Result<Recipe> {
    Recipe::find_by_id(conn, id)?.ok_or_else(|| Error::NotFound(format!("recipe {}", id)))
}

/// Presence check: the field must be supplied and not blank
fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::missing_field(field)),
    }
}
