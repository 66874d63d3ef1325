// src/db/models/mod.rs

//! Data models for recipe book entities
//!
//! This module defines Rust structs that correspond to database tables
//! and provides methods for creating, reading, updating, and deleting records.

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
