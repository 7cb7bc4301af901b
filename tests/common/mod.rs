//! Shared test utilities for dxf-entities-rs integration tests.
//!
//! Provides minimal valid tag blocks per entity kind and small builders for
//! container/satellite runs, so individual test files import them via
//! `mod common;` instead of repeating block construction.

#![allow(dead_code)]

use dxf_entities_rs::{TagBlock, Vector3};

/// Type tags available in both format versions.
pub const BOTH_VERSION_TAGS: [&str; 13] = [
    "LINE", "POINT", "CIRCLE", "ARC", "TRACE", "SOLID", "3DFACE", "TEXT", "ATTRIB", "INSERT",
    "SEQEND", "POLYLINE", "VERTEX",
];

/// Type tags available only in modern files.
pub const MODERN_ONLY_TAGS: [&str; 3] = ["LWPOLYLINE", "ELLIPSE", "RAY"];

/// A minimal valid block for any supported type tag.
pub fn minimal_block(tag: &str) -> TagBlock {
    match tag {
        "LINE" => TagBlock::new("LINE")
            .with(10, Vector3::ZERO)
            .with(11, Vector3::new(1.0, 0.0, 0.0)),
        "POINT" => TagBlock::new("POINT").with(10, Vector3::ZERO),
        "CIRCLE" => TagBlock::new("CIRCLE")
            .with(10, Vector3::ZERO)
            .with(40, 1.0),
        "ARC" => TagBlock::new("ARC")
            .with(10, Vector3::ZERO)
            .with(40, 1.0)
            .with(50, 0.0)
            .with(51, 90.0),
        "TRACE" | "SOLID" => TagBlock::new(tag)
            .with(10, Vector3::ZERO)
            .with(11, Vector3::new(1.0, 0.0, 0.0))
            .with(12, Vector3::new(1.0, 1.0, 0.0))
            .with(13, Vector3::new(0.0, 1.0, 0.0)),
        "3DFACE" => TagBlock::new("3DFACE")
            .with(10, Vector3::ZERO)
            .with(11, Vector3::new(1.0, 0.0, 0.0))
            .with(12, Vector3::new(1.0, 1.0, 0.0))
            .with(13, Vector3::new(0.0, 1.0, 0.0)),
        "TEXT" => TagBlock::new("TEXT")
            .with(10, Vector3::ZERO)
            .with(40, 2.5)
            .with(1, "sample"),
        "ATTRIB" => TagBlock::new("ATTRIB")
            .with(10, Vector3::ZERO)
            .with(40, 2.5)
            .with(1, "value")
            .with(2, "TAG"),
        "INSERT" => TagBlock::new("INSERT")
            .with(2, "BLOCK")
            .with(10, Vector3::ZERO),
        "SEQEND" => TagBlock::new("SEQEND"),
        "POLYLINE" => TagBlock::new("POLYLINE"),
        "VERTEX" => TagBlock::new("VERTEX").with(10, Vector3::ZERO),
        "LWPOLYLINE" => TagBlock::new("LWPOLYLINE")
            .with(10, Vector3::ZERO)
            .with(10, Vector3::new(1.0, 0.0, 0.0)),
        "ELLIPSE" => TagBlock::new("ELLIPSE")
            .with(10, Vector3::ZERO)
            .with(11, Vector3::new(2.0, 0.0, 0.0))
            .with(40, 0.5)
            .with(41, 0.0)
            .with(42, 6.283185307179586),
        "RAY" => TagBlock::new("RAY")
            .with(10, Vector3::ZERO)
            .with(11, Vector3::new(1.0, 0.0, 0.0)),
        other => panic!("no minimal block defined for {other}"),
    }
}

/// An INSERT block with the attributes-follow flag set.
pub fn insert_with_attribs_block(block_name: &str) -> TagBlock {
    TagBlock::new("INSERT")
        .with(2, block_name)
        .with(10, Vector3::ZERO)
        .with(66, 1)
}

/// An ATTRIB block with the given tag name.
pub fn attrib_block(tag: &str, value: &str) -> TagBlock {
    TagBlock::new("ATTRIB")
        .with(10, Vector3::ZERO)
        .with(40, 2.5)
        .with(1, value)
        .with(2, tag)
}

/// A POLYLINE header block with the given flags (group code 70).
pub fn polyline_block(flags: i32) -> TagBlock {
    TagBlock::new("POLYLINE").with(70, flags)
}

/// A POLYLINE header block declaring a polygon mesh grid.
pub fn polymesh_block(mcount: i32, ncount: i32) -> TagBlock {
    TagBlock::new("POLYLINE")
        .with(70, 16)
        .with(71, mcount)
        .with(72, ncount)
}

/// A geometry VERTEX of a polyface mesh (location carrier).
pub fn polyface_geometry_vertex(x: f64, y: f64, z: f64) -> TagBlock {
    TagBlock::new("VERTEX")
        .with(10, Vector3::new(x, y, z))
        .with(70, 192)
}

/// A face-definition VERTEX of a polyface mesh referencing up to four
/// 1-based vertex slots.
pub fn polyface_face_vertex(indices: &[i32]) -> TagBlock {
    let mut block = TagBlock::new("VERTEX")
        .with(10, Vector3::ZERO)
        .with(70, 128);
    for (slot, &index) in indices.iter().enumerate() {
        block = block.with(71 + slot as i32, index);
    }
    block
}

/// A plain mesh VERTEX at a location.
pub fn mesh_vertex(x: f64, y: f64, z: f64) -> TagBlock {
    TagBlock::new("VERTEX")
        .with(10, Vector3::new(x, y, z))
        .with(70, 64)
}

/// A SEQEND terminator block.
pub fn seqend_block() -> TagBlock {
    TagBlock::new("SEQEND")
}
