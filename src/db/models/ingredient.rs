// src/db/models/ingredient.rs

//! Ingredient model - items owned by a single recipe

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// An Ingredient belongs to exactly one recipe and is deleted with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub recipe_id: i64,
}

impl Ingredient {
    /// Create a new Ingredient for the given recipe
    pub fn new(recipe_id: i64, name: String) -> Self {
        Self {
            id: None,
            name,
            recipe_id,
        }
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredient (name, recipe_id) VALUES (?1, ?2)",
            params![&self.name, &self.recipe_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find all ingredients of a recipe, in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, recipe_id FROM ingredient WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// List every ingredient grouped by recipe, in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn
            .prepare("SELECT id, name, recipe_id FROM ingredient ORDER BY recipe_id, id")?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Count the ingredients that reference a recipe
    pub fn count_by_recipe(conn: &Connection, recipe_id: i64) -> Result<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM ingredient WHERE recipe_id = ?1",
            [recipe_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Delete every ingredient of a recipe, returning how many were removed
    pub fn delete_by_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let removed = conn.execute("DELETE FROM ingredient WHERE recipe_id = ?1", [recipe_id])?;
        Ok(removed)
    }

    /// Convert a database row to an Ingredient
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            recipe_id: row.get(2)?,
        })
    }
}
