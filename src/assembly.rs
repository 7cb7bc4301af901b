//! Structural reassembly of container and satellite runs.
//!
//! The flat decoded sequence still carries the wire format's adjacency
//! structure: an INSERT whose attribute flag is set is followed by its
//! ATTRIB records, a POLYLINE header by its VERTEX records, each run closed
//! by a SEQEND. Nothing but position links a satellite to its container, so
//! reassembly is a single linear, order-sensitive pass: it moves satellites
//! into their containers, drops the terminators, and casts mesh-mode
//! polylines to their polyface or polymesh form.
//!
//! A violated adjacency run cannot be safely guessed at; every structural
//! irregularity aborts the pass with `MalformedStructure`.

use crate::entities::{Entity, Insert, Polyface, Polyline, PolylineMode, Polymesh};
use crate::error::{DxfError, Result};

/// Re-group a flat decoded sequence into the final entity graph.
///
/// Consumes the sequence and returns a new one with all satellites resolved.
/// Running the pass on an already-assembled graph is a no-op; an assembled
/// Insert has its `attribs_follow` flag cleared, and an assembled Polyline
/// carries its vertices, so neither re-opens a run.
pub fn assemble(entities: Vec<Entity>) -> Result<Vec<Entity>> {
    let mut output = Vec::with_capacity(entities.len());
    let mut input = entities.into_iter();

    while let Some(entity) = input.next() {
        match entity {
            Entity::Insert(insert) if insert.attribs_follow => {
                output.push(collect_attribs(insert, &mut input)?);
            }
            Entity::Polyline(polyline) if polyline.vertices.is_empty() => {
                output.push(collect_vertices(polyline, &mut input)?);
            }
            Entity::Attrib(_) => {
                return Err(DxfError::MalformedStructure(
                    "ATTRIB outside an INSERT attribute run".to_string(),
                ));
            }
            Entity::Vertex(_) => {
                return Err(DxfError::MalformedStructure(
                    "VERTEX outside a POLYLINE vertex run".to_string(),
                ));
            }
            Entity::SeqEnd(_) => {
                return Err(DxfError::MalformedStructure(
                    "SEQEND with no open container run".to_string(),
                ));
            }
            other => output.push(other),
        }
    }

    Ok(output)
}

/// Collect the ATTRIB run following an INSERT, up to and including its
/// SEQEND. The flag is cleared afterwards: the satellites no longer follow
/// in the graph.
fn collect_attribs(
    mut insert: Insert,
    input: &mut impl Iterator<Item = Entity>,
) -> Result<Entity> {
    loop {
        match input.next() {
            Some(Entity::Attrib(attrib)) => insert.attribs.push(attrib),
            Some(Entity::SeqEnd(_)) => break,
            Some(other) => {
                return Err(DxfError::MalformedStructure(format!(
                    "attribute run of INSERT \"{}\" interrupted by {}",
                    insert.block_name,
                    other.entity_type()
                )));
            }
            None => {
                return Err(DxfError::MalformedStructure(format!(
                    "attribute run of INSERT \"{}\" not terminated before end of input",
                    insert.block_name
                )));
            }
        }
    }
    insert.attribs_follow = false;
    Ok(Entity::Insert(insert))
}

/// Collect the VERTEX run following a POLYLINE header, up to and including
/// its SEQEND, then cast the populated polyline by its mode.
fn collect_vertices(
    mut polyline: Polyline,
    input: &mut impl Iterator<Item = Entity>,
) -> Result<Entity> {
    loop {
        match input.next() {
            Some(Entity::Vertex(vertex)) => polyline.vertices.push(vertex),
            Some(Entity::SeqEnd(_)) => break,
            Some(other) => {
                return Err(DxfError::MalformedStructure(format!(
                    "vertex run of POLYLINE interrupted by {}",
                    other.entity_type()
                )));
            }
            None => {
                return Err(DxfError::MalformedStructure(
                    "vertex run of POLYLINE not terminated before end of input".to_string(),
                ));
            }
        }
    }

    match polyline.mode {
        PolylineMode::Plain => Ok(Entity::Polyline(polyline)),
        PolylineMode::Polyface => Polyface::from_polyline(polyline).map(Entity::Polyface),
        PolylineMode::Polymesh => Polymesh::from_polyline(polyline).map(Entity::Polymesh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Attrib, Circle, SeqEnd, Vertex};
    use crate::types::Vector3;

    fn seqend() -> Entity {
        Entity::SeqEnd(SeqEnd { paperspace: false })
    }

    fn attrib(tag: &str) -> Entity {
        Entity::Attrib(Attrib::new(tag, "value", Vector3::ZERO, 1.0))
    }

    fn insert_with_follow(follow: bool) -> Insert {
        let mut insert = Insert::new("PART", Vector3::ZERO);
        insert.attribs_follow = follow;
        insert
    }

    #[test]
    fn test_plain_entities_pass_through() {
        let circle = Entity::Circle(Circle::new(Vector3::ZERO, 1.0));
        let output = assemble(vec![circle.clone()]).unwrap();
        assert_eq!(output, vec![circle]);
    }

    #[test]
    fn test_insert_without_follow_takes_no_children() {
        let insert = Entity::Insert(insert_with_follow(false));
        let circle = Entity::Circle(Circle::new(Vector3::ZERO, 1.0));
        let output = assemble(vec![insert, circle]).unwrap();
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn test_insert_collects_attribs() {
        let input = vec![
            Entity::Insert(insert_with_follow(true)),
            attrib("A"),
            attrib("B"),
            seqend(),
        ];
        let output = assemble(input).unwrap();
        assert_eq!(output.len(), 1);
        let Entity::Insert(insert) = &output[0] else {
            panic!("expected an insert");
        };
        assert_eq!(insert.attribs.len(), 2);
        assert_eq!(insert.attribs[0].tag, "A");
        assert!(!insert.attribs_follow);
    }

    #[test]
    fn test_unterminated_attrib_run_fails() {
        let input = vec![Entity::Insert(insert_with_follow(true)), attrib("A")];
        assert!(matches!(
            assemble(input),
            Err(DxfError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_interrupted_vertex_run_fails() {
        let input = vec![
            Entity::Polyline(Polyline::new()),
            Entity::Vertex(Vertex::new(Vector3::ZERO)),
            Entity::Circle(Circle::new(Vector3::ZERO, 1.0)),
        ];
        assert!(matches!(
            assemble(input),
            Err(DxfError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_orphan_satellites_fail() {
        for orphan in [
            seqend(),
            attrib("A"),
            Entity::Vertex(Vertex::new(Vector3::ZERO)),
        ] {
            assert!(matches!(
                assemble(vec![orphan]),
                Err(DxfError::MalformedStructure(_))
            ));
        }
    }

    #[test]
    fn test_assembled_graph_is_fixed_point() {
        let input = vec![
            Entity::Insert(insert_with_follow(true)),
            attrib("A"),
            seqend(),
            Entity::Polyline(Polyline::new()),
            Entity::Vertex(Vertex::new(Vector3::ZERO)),
            Entity::Vertex(Vertex::new(Vector3::UNIT_X)),
            seqend(),
        ];
        let once = assemble(input).unwrap();
        let twice = assemble(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
