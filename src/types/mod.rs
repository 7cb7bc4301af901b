//! Shared value types used across the entity model

pub mod vector;

pub use vector::{Vector2, Vector3};
