//! Entity factory: dispatch from type tag and version to a field decoder.
//!
//! The dispatch table is fixed at startup and keyed by type tag; each entry
//! holds the legacy and modern decoder slots for that kind. Most kinds share
//! one decoder across both versions, and the kinds the legacy format never
//! had leave their legacy slot empty.

mod readers;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::entities::Entity;
use crate::error::{DxfError, Result};
use crate::notification::NotificationCollection;
use crate::tags::TagBlock;
use crate::version::VersionPolicy;

type DecodeFn = fn(&TagBlock, VersionPolicy, &mut NotificationCollection) -> Result<Entity>;

/// Decoder slots for one type tag.
struct DecoderEntry {
    legacy: Option<DecodeFn>,
    modern: Option<DecodeFn>,
}

impl DecoderEntry {
    fn both(decoder: DecodeFn) -> Self {
        DecoderEntry {
            legacy: Some(decoder),
            modern: Some(decoder),
        }
    }

    fn modern_only(decoder: DecodeFn) -> Self {
        DecoderEntry {
            legacy: None,
            modern: Some(decoder),
        }
    }

    fn select(&self, policy: VersionPolicy) -> Option<DecodeFn> {
        match policy {
            VersionPolicy::Legacy => self.legacy,
            VersionPolicy::Modern => self.modern,
        }
    }
}

static DISPATCH: Lazy<AHashMap<&'static str, DecoderEntry>> = Lazy::new(|| {
    let mut table = AHashMap::new();
    table.insert("LINE", DecoderEntry::both(readers::read_line as DecodeFn));
    table.insert("POINT", DecoderEntry::both(readers::read_point));
    table.insert("CIRCLE", DecoderEntry::both(readers::read_circle));
    table.insert("ARC", DecoderEntry::both(readers::read_arc));
    table.insert("TRACE", DecoderEntry::both(readers::read_trace));
    table.insert("SOLID", DecoderEntry::both(readers::read_solid));
    table.insert("3DFACE", DecoderEntry::both(readers::read_face3d));
    table.insert("TEXT", DecoderEntry::both(readers::read_text));
    table.insert("ATTRIB", DecoderEntry::both(readers::read_attrib));
    table.insert("INSERT", DecoderEntry::both(readers::read_insert));
    table.insert("SEQEND", DecoderEntry::both(readers::read_seqend));
    table.insert("POLYLINE", DecoderEntry::both(readers::read_polyline));
    table.insert("VERTEX", DecoderEntry::both(readers::read_vertex));
    table.insert(
        "LWPOLYLINE",
        DecoderEntry::modern_only(readers::read_lwpolyline),
    );
    table.insert("ELLIPSE", DecoderEntry::modern_only(readers::read_ellipse));
    table.insert("RAY", DecoderEntry::modern_only(readers::read_ray));
    table
});

fn decode_with(
    tags: &TagBlock,
    policy: VersionPolicy,
    notes: &mut NotificationCollection,
) -> Result<Entity> {
    let tag = tags.type_tag();
    let entry = DISPATCH
        .get(tag)
        .ok_or_else(|| DxfError::UnknownEntityType(tag.to_string()))?;
    let reader = entry
        .select(policy)
        .ok_or_else(|| DxfError::UnsupportedEntityForVersion {
            entity: tag.to_string(),
            version: policy,
        })?;
    reader(tags, policy, notes)
}

/// Decode a single tag block, discarding diagnostics.
pub fn decode(tags: &TagBlock, policy: VersionPolicy) -> Result<Entity> {
    let mut notes = NotificationCollection::new();
    decode_with(tags, policy, &mut notes)
}

/// Decodes tag blocks one at a time, collecting diagnostics across the job.
#[derive(Debug)]
pub struct EntityFactory {
    policy: VersionPolicy,
    notifications: NotificationCollection,
}

impl EntityFactory {
    /// Create a factory for a classified version.
    pub fn new(policy: VersionPolicy) -> Self {
        EntityFactory {
            policy,
            notifications: NotificationCollection::new(),
        }
    }

    /// Create a factory from a version identifier string.
    pub fn from_version_string(version: &str) -> Result<Self> {
        Ok(Self::new(VersionPolicy::from_version_string(version)?))
    }

    /// The version policy this factory decodes under.
    pub fn policy(&self) -> VersionPolicy {
        self.policy
    }

    /// Diagnostics collected so far.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Consume the factory, returning its diagnostics.
    pub fn into_notifications(self) -> NotificationCollection {
        self.notifications
    }

    /// Decode one tag block into an entity.
    pub fn decode(&mut self, tags: &TagBlock) -> Result<Entity> {
        decode_with(tags, self.policy, &mut self.notifications)
    }

    /// Decode a block sequence in order. The first failing record aborts
    /// the job.
    pub fn decode_all(&mut self, blocks: &[TagBlock]) -> Result<Vec<Entity>> {
        blocks.iter().map(|block| self.decode(block)).collect()
    }

    /// Decode a block sequence in parallel. Decoders are pure, so blocks fan
    /// out freely; the ordered collect restores the stable input order that
    /// reassembly depends on, and per-block diagnostics are merged back in
    /// that same order. On failure the first failing record in input order
    /// is reported.
    pub fn decode_all_par(&mut self, blocks: &[TagBlock]) -> Result<Vec<Entity>> {
        let decoded: Vec<(Result<Entity>, NotificationCollection)> = blocks
            .par_iter()
            .map(|block| {
                let mut notes = NotificationCollection::new();
                let result = decode_with(block, self.policy, &mut notes);
                (result, notes)
            })
            .collect();

        let mut entities = Vec::with_capacity(decoded.len());
        for (result, notes) in decoded {
            self.notifications.merge(notes);
            entities.push(result?);
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3;

    #[test]
    fn test_unknown_entity_type() {
        let block = TagBlock::new("SPLINE");
        let err = decode(&block, VersionPolicy::Modern).unwrap_err();
        assert_eq!(err, DxfError::UnknownEntityType("SPLINE".to_string()));
    }

    #[test]
    fn test_modern_only_kind_rejected_under_legacy() {
        let block = TagBlock::new("RAY")
            .with(10, Vector3::ZERO)
            .with(11, Vector3::UNIT_X);
        let err = decode(&block, VersionPolicy::Legacy).unwrap_err();
        assert_eq!(
            err,
            DxfError::UnsupportedEntityForVersion {
                entity: "RAY".to_string(),
                version: VersionPolicy::Legacy,
            }
        );
        assert!(decode(&block, VersionPolicy::Modern).is_ok());
    }

    #[test]
    fn test_factory_collects_diagnostics() {
        let mut factory = EntityFactory::from_version_string("AC1009").unwrap();
        let block = TagBlock::new("SOLID")
            .with(10, Vector3::ZERO)
            .with(11, Vector3::UNIT_X)
            .with(12, Vector3::UNIT_Y);
        factory.decode(&block).unwrap();
        assert_eq!(factory.notifications().len(), 1);
    }

    #[test]
    fn test_parallel_decode_preserves_order() {
        let blocks: Vec<TagBlock> = (0..64)
            .map(|i| {
                TagBlock::new("POINT").with(10, Vector3::new(i as f64, 0.0, 0.0))
            })
            .collect();

        let mut factory = EntityFactory::new(VersionPolicy::Modern);
        let entities = factory.decode_all_par(&blocks).unwrap();
        for (i, entity) in entities.iter().enumerate() {
            let Entity::Point(point) = entity else {
                panic!("expected a point");
            };
            assert_eq!(point.location.x, i as f64);
        }
    }
}
