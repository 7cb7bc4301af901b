//! Text entity

use crate::entities::EntityCommon;
use crate::types::Vector3;

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point
    pub insert: Vector3,
    /// Text height
    pub height: f64,
    /// Text content
    pub text: String,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl Text {
    /// Create a new text entity
    pub fn new(text: impl Into<String>, insert: Vector3, height: f64) -> Self {
        Text {
            common: EntityCommon::new(),
            insert,
            height,
            text: text.into(),
            rotation: 0.0,
        }
    }
}
