// src/lib.rs

//! Recipe Book
//!
//! A small REST API for recipes and their ingredients.
//!
//! # Architecture
//!
//! - Database-first: all state in SQLite, ingredients cascade with their recipe
//! - Service: five transactional operations over an explicit connection
//! - Server: axum handlers mapping each route onto one service operation

pub mod db;
mod error;
pub mod server;
pub mod service;

pub use error::{Error, Result};
pub use service::{
    IngredientDetails, NewIngredient, NewRecipe, RecipeChanges, RecipeDetails, RecipeService,
};
