// src/db/models/recipe.rs

//! Recipe model - a named dish with its instructions

use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A Recipe row. Its ingredients live in the `ingredient` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub instructions: String,
}

impl Recipe {
    /// Create a new, not yet persisted Recipe
    pub fn new(name: String, instructions: String) -> Self {
        Self {
            id: None,
            name,
            instructions,
        }
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipe (name, instructions) VALUES (?1, ?2)",
            params![&self.name, &self.instructions],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, instructions FROM recipe WHERE id = ?1")?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;

        Ok(recipe)
    }

    /// List all recipes in id order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name, instructions FROM recipe ORDER BY id")?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Write name and instructions back to the stored row
    pub fn update(&self, conn: &Connection) -> Result<()> {
        let id = self
            .id
            .ok_or_else(|| Error::Validation("recipe has not been inserted".to_string()))?;

        let changed = conn.execute(
            "UPDATE recipe SET name = ?1, instructions = ?2 WHERE id = ?3",
            params![&self.name, &self.instructions, id],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(format!("recipe {}", id)));
        }
        Ok(())
    }

    /// Delete a recipe by ID, returning the number of rows removed
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        let removed = conn.execute("DELETE FROM recipe WHERE id = ?1", [id])?;
        Ok(removed)
    }

    /// Convert a database row to a Recipe
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            instructions: row.get(2)?,
        })
    }
}
