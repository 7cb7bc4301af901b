//! Classified tag blocks, the input unit of the reconstruction core.
//!
//! A [`TagBlock`] is one entity's worth of grouped (group code, value) pairs,
//! produced by the surrounding tokenizer and grouping layers. The core never
//! sees raw text or binary input; whether a block came from an ASCII or a
//! binary source is invisible here. Coordinate triples arrive already folded
//! into [`TagValue::Point`] values under their X group code.

use indexmap::IndexMap;

use crate::error::{DxfError, Result};
use crate::types::Vector3;

/// A single raw field value inside a tag block.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// String value (group codes 0-9, names, text)
    Str(String),
    /// Integer value (group codes 60-79 and friends)
    Int(i64),
    /// Floating-point value (group codes 40-59)
    Double(f64),
    /// Coordinate triple folded under its X group code
    Point(Vector3),
}

impl TagValue {
    /// String content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floating-point content. An integer coerces; everything else does not.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            TagValue::Double(d) => Some(*d),
            TagValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Coordinate content, if this is a point value.
    pub fn as_point(&self) -> Option<Vector3> {
        match self {
            TagValue::Point(p) => Some(*p),
            _ => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Str(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Str(s)
    }
}

impl From<i64> for TagValue {
    fn from(i: i64) -> Self {
        TagValue::Int(i)
    }
}

impl From<i32> for TagValue {
    fn from(i: i32) -> Self {
        TagValue::Int(i as i64)
    }
}

impl From<f64> for TagValue {
    fn from(d: f64) -> Self {
        TagValue::Double(d)
    }
}

impl From<Vector3> for TagValue {
    fn from(p: Vector3) -> Self {
        TagValue::Point(p)
    }
}

/// One entity's classified tags: a type tag plus an ordered multimap from
/// group code to raw values.
///
/// Lookup by code returns the first occurrence; repeated codes (lightweight
/// polyline point runs) are reached through [`TagBlock::iter_repeated`] or
/// the in-order [`TagBlock::pairs`] iteration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagBlock {
    type_tag: String,
    pairs: Vec<(i32, TagValue)>,
    index: IndexMap<i32, Vec<usize>>,
}

impl TagBlock {
    /// Create an empty block for the given type tag.
    pub fn new(type_tag: impl Into<String>) -> Self {
        TagBlock {
            type_tag: type_tag.into(),
            pairs: Vec::new(),
            index: IndexMap::new(),
        }
    }

    /// Builder: append a (code, value) pair.
    pub fn with(mut self, code: i32, value: impl Into<TagValue>) -> Self {
        self.push(code, value);
        self
    }

    /// Append a (code, value) pair, preserving record order.
    pub fn push(&mut self, code: i32, value: impl Into<TagValue>) {
        let position = self.pairs.len();
        self.pairs.push((code, value.into()));
        self.index.entry(code).or_default().push(position);
    }

    /// The entity type tag of this block.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// First value stored under `code`, if any. Absence is not an error.
    pub fn get(&self, code: i32) -> Option<&TagValue> {
        self.index
            .get(&code)
            .and_then(|positions| positions.first())
            .map(|&position| &self.pairs[position].1)
    }

    /// First value stored under `code`; fails with
    /// [`DxfError::MissingField`] if the block has none.
    pub fn get_required(&self, code: i32) -> Result<&TagValue> {
        self.get(code).ok_or(DxfError::MissingField(code))
    }

    /// All values stored under `code`, in record order.
    pub fn iter_repeated(&self, code: i32) -> impl Iterator<Item = &TagValue> + '_ {
        self.index
            .get(&code)
            .into_iter()
            .flatten()
            .map(move |&position| &self.pairs[position].1)
    }

    /// Every (code, value) pair in original record order.
    pub fn pairs(&self) -> impl Iterator<Item = (i32, &TagValue)> + '_ {
        self.pairs.iter().map(|(code, value)| (*code, value))
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    // ── Typed lookups ──
    //
    // A value present under the right code but of an unusable type counts as
    // absent: optional lookups fall back, required lookups fail with
    // `MissingField`.

    pub fn string(&self, code: i32) -> Option<String> {
        self.get(code).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn string_or(&self, code: i32, default: &str) -> String {
        self.string(code).unwrap_or_else(|| default.to_string())
    }

    pub fn int(&self, code: i32) -> Option<i64> {
        self.get(code).and_then(TagValue::as_int)
    }

    pub fn int_or(&self, code: i32, default: i64) -> i64 {
        self.int(code).unwrap_or(default)
    }

    pub fn double(&self, code: i32) -> Option<f64> {
        self.get(code).and_then(TagValue::as_double)
    }

    pub fn double_or(&self, code: i32, default: f64) -> f64 {
        self.double(code).unwrap_or(default)
    }

    pub fn point(&self, code: i32) -> Option<Vector3> {
        self.get(code).and_then(TagValue::as_point)
    }

    pub fn require_string(&self, code: i32) -> Result<String> {
        self.string(code).ok_or(DxfError::MissingField(code))
    }

    pub fn require_int(&self, code: i32) -> Result<i64> {
        self.int(code).ok_or(DxfError::MissingField(code))
    }

    pub fn require_double(&self, code: i32) -> Result<f64> {
        self.double(code).ok_or(DxfError::MissingField(code))
    }

    pub fn require_point(&self, code: i32) -> Result<Vector3> {
        self.point(code).ok_or(DxfError::MissingField(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_and_lookup() {
        let block = TagBlock::new("CIRCLE")
            .with(8, "walls")
            .with(10, Vector3::new(1.0, 2.0, 3.0))
            .with(40, 2.5);

        assert_eq!(block.type_tag(), "CIRCLE");
        assert_eq!(block.string(8), Some("walls".to_string()));
        assert_eq!(block.point(10), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(block.double(40), Some(2.5));
        assert_eq!(block.get(62), None);
    }

    #[test]
    fn test_required_lookup_fails_on_absence() {
        let block = TagBlock::new("CIRCLE");
        assert_eq!(block.require_double(40), Err(DxfError::MissingField(40)));
    }

    #[test]
    fn test_wrong_value_type_counts_as_absent() {
        let block = TagBlock::new("CIRCLE").with(40, "not a number");
        assert_eq!(block.double_or(40, 1.0), 1.0);
        assert_eq!(block.require_double(40), Err(DxfError::MissingField(40)));
    }

    #[test]
    fn test_int_coerces_to_double() {
        let block = TagBlock::new("TEXT").with(50, 45);
        assert_eq!(block.double(50), Some(45.0));
    }

    #[test]
    fn test_iter_repeated_preserves_order() {
        let block = TagBlock::new("LWPOLYLINE")
            .with(10, Vector3::new(0.0, 0.0, 0.0))
            .with(10, Vector3::new(1.0, 0.0, 0.0))
            .with(10, Vector3::new(1.0, 1.0, 0.0));

        let xs: Vec<f64> = block
            .iter_repeated(10)
            .filter_map(TagValue::as_point)
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_pairs_iterate_in_record_order() {
        let block = TagBlock::new("LWPOLYLINE")
            .with(10, Vector3::new(0.0, 0.0, 0.0))
            .with(42, 0.5)
            .with(10, Vector3::new(1.0, 0.0, 0.0));

        let codes: Vec<i32> = block.pairs().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![10, 42, 10]);
    }

    #[test]
    fn test_get_returns_first_occurrence() {
        let block = TagBlock::new("X").with(70, 1).with(70, 2);
        assert_eq!(block.int(70), Some(1));
    }
}
