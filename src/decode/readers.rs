//! Per-entity field decoders.
//!
//! Each decoder maps one classified tag block to a populated entity. All
//! decoders share one signature so the dispatch table can hold them as plain
//! function pointers; the version policy is threaded through even where a
//! kind has no version-specific fields, and tolerated oddities are recorded
//! in the notification collection instead of being silently dropped.
//!
//! Required fields fail with `MissingField`; optional fields fall back to
//! the per-field defaults documented on each entity type.

use crate::entities::{
    Arc, Attrib, Circle, Ellipse, Entity, EntityCommon, Face3D, Insert, InvisibleEdgeFlags, Line,
    LwPolyline, LwVertex, Point, Polyline, PolylineFlags, PolylineMode, Ray, SeqEnd, Text, Trace,
    Vertex, VertexFlags,
};
use crate::error::Result;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tags::TagBlock;
use crate::types::{Vector2, Vector3};
use crate::version::VersionPolicy;

/// Shared drawable fields: layer (8), line type (6), color (62), space (67).
fn read_common(tags: &TagBlock) -> EntityCommon {
    EntityCommon {
        layer: tags.string_or(8, "0"),
        line_type: tags.string(6),
        color: tags.int_or(62, 0) as i32,
        paperspace: tags.int_or(67, 0) != 0,
    }
}

/// The fixed four-corner list at codes 10..13. A missing fourth corner
/// repeats the third: the format writes triangles that way.
fn read_corners(
    tags: &TagBlock,
    notes: &mut NotificationCollection,
) -> Result<[Vector3; 4]> {
    let first = tags.require_point(10)?;
    let second = tags.require_point(11)?;
    let third = tags.require_point(12)?;
    let fourth = match tags.point(13) {
        Some(point) => point,
        None => {
            notes.notify(
                NotificationType::Degenerate,
                format!("{}: fourth corner repeats the third", tags.type_tag()),
            );
            third
        }
    };
    Ok([first, second, third, fourth])
}

pub(super) fn read_line(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Line(Line {
        common: read_common(tags),
        start: tags.require_point(10)?,
        end: tags.require_point(11)?,
    }))
}

pub(super) fn read_point(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Point(Point {
        common: read_common(tags),
        location: tags.require_point(10)?,
    }))
}

pub(super) fn read_circle(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Circle(Circle {
        common: read_common(tags),
        center: tags.require_point(10)?,
        radius: tags.require_double(40)?,
    }))
}

pub(super) fn read_arc(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Arc(Arc {
        common: read_common(tags),
        center: tags.require_point(10)?,
        radius: tags.require_double(40)?,
        start_angle: tags.require_double(50)?,
        end_angle: tags.require_double(51)?,
    }))
}

pub(super) fn read_trace(
    tags: &TagBlock,
    _policy: VersionPolicy,
    notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Trace(Trace {
        common: read_common(tags),
        corners: read_corners(tags, notes)?,
    }))
}

pub(super) fn read_solid(
    tags: &TagBlock,
    _policy: VersionPolicy,
    notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Solid(Trace {
        common: read_common(tags),
        corners: read_corners(tags, notes)?,
    }))
}

pub(super) fn read_face3d(
    tags: &TagBlock,
    _policy: VersionPolicy,
    notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Face3D(Face3D {
        common: read_common(tags),
        corners: read_corners(tags, notes)?,
        invisible_edges: InvisibleEdgeFlags::from_bits_retain(tags.int_or(70, 0) as u8),
    }))
}

pub(super) fn read_text(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Text(Text {
        common: read_common(tags),
        insert: tags.require_point(10)?,
        height: tags.require_double(40)?,
        text: tags.require_string(1)?,
        rotation: tags.double_or(50, 0.0),
    }))
}

pub(super) fn read_attrib(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Attrib(Attrib {
        common: read_common(tags),
        insert: tags.require_point(10)?,
        height: tags.require_double(40)?,
        text: tags.require_string(1)?,
        tag: tags.require_string(2)?,
        rotation: tags.double_or(50, 0.0),
    }))
}

pub(super) fn read_insert(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Insert(Insert {
        common: read_common(tags),
        block_name: tags.require_string(2)?,
        insert_point: tags.require_point(10)?,
        rotation: tags.double_or(50, 0.0),
        attribs_follow: tags.int_or(66, 0) != 0,
        attribs: Vec::new(),
    }))
}

pub(super) fn read_seqend(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::SeqEnd(SeqEnd {
        paperspace: tags.int_or(67, 0) != 0,
    }))
}

pub(super) fn read_polyline(
    tags: &TagBlock,
    policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    let flags = PolylineFlags::from_bits_retain(tags.int_or(70, 0) as u16);
    // Legacy files store the elevation as a scalar at code 30; modern files
    // fold it into the Z slot of an elevation point at code 10.
    let elevation = match policy {
        VersionPolicy::Legacy => tags.double_or(30, 0.0),
        VersionPolicy::Modern => tags.point(10).map(|p| p.z).unwrap_or(0.0),
    };
    Ok(Entity::Polyline(Polyline {
        common: read_common(tags),
        mode: PolylineMode::from_flags(flags),
        flags,
        mcount: tags.int_or(71, 0).max(0) as u32,
        ncount: tags.int_or(72, 0).max(0) as u32,
        elevation,
        vertices: Vec::new(),
    }))
}

pub(super) fn read_vertex(
    tags: &TagBlock,
    _policy: VersionPolicy,
    notes: &mut NotificationCollection,
) -> Result<Entity> {
    // Face-index fields 71..74: a slot that is absent is normal for
    // non-face vertices, and a slot with an unusable value is skipped
    // rather than failing the record.
    let mut face_indices = Vec::with_capacity(4);
    for code in 71..=74 {
        let Some(value) = tags.get(code) else {
            continue;
        };
        match value.as_int() {
            Some(index) => face_indices.push(index as i32),
            None => notes.notify(
                NotificationType::SkippedField,
                format!("VERTEX: unusable face index at group code {code}"),
            ),
        }
    }

    Ok(Entity::Vertex(Vertex {
        common: read_common(tags),
        location: tags.require_point(10)?,
        flags: VertexFlags::from_bits_retain(tags.int_or(70, 0) as u16),
        bulge: tags.double_or(42, 0.0),
        tangent: tags.double(50),
        face_indices,
    }))
}

pub(super) fn read_lwpolyline(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    // Point records are repeated code-10 groups; a code-42 bulge belongs to
    // the point record it follows.
    let mut points: Vec<LwVertex> = Vec::new();
    for (code, value) in tags.pairs() {
        match code {
            10 => {
                if let Some(point) = value.as_point() {
                    points.push(LwVertex::new(Vector2::new(point.x, point.y)));
                }
            }
            42 => {
                if let (Some(bulge), Some(last)) = (value.as_double(), points.last_mut()) {
                    last.bulge = bulge;
                }
            }
            _ => {}
        }
    }

    Ok(Entity::LwPolyline(LwPolyline {
        common: read_common(tags),
        points,
        is_closed: tags.int_or(70, 0) & 1 != 0,
    }))
}

pub(super) fn read_ellipse(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Ellipse(Ellipse {
        common: read_common(tags),
        center: tags.require_point(10)?,
        major_axis: tags.require_point(11)?,
        ratio: tags.require_double(40)?,
        start_param: tags.require_double(41)?,
        end_param: tags.require_double(42)?,
    }))
}

pub(super) fn read_ray(
    tags: &TagBlock,
    _policy: VersionPolicy,
    _notes: &mut NotificationCollection,
) -> Result<Entity> {
    Ok(Entity::Ray(Ray {
        common: read_common(tags),
        start: tags.require_point(10)?,
        unit_vector: tags.require_point(11)?,
    }))
}
