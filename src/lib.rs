//! # dxf-entities-rs
//!
//! A pure Rust library for reconstructing typed drawing entities from
//! classified DXF tag groups.
//!
//! This crate is the middle of a reading pipeline: a tokenizer and grouping
//! layer (not part of this crate) turn raw DXF input into [`TagBlock`]
//! values; this crate turns an ordered sequence of those blocks into a typed
//! entity graph, normalizing the differences between the legacy ("AC1009")
//! and modern ("AC1024") field layouts.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_entities_rs::{reconstruct, TagBlock, Vector3};
//!
//! let circle = TagBlock::new("CIRCLE")
//!     .with(8, "walls")
//!     .with(10, Vector3::new(0.0, 0.0, 0.0))
//!     .with(40, 2.5);
//!
//! let entities = reconstruct(&[circle], "AC1009")?;
//! assert_eq!(entities[0].entity_type(), "CIRCLE");
//! # Ok::<(), dxf_entities_rs::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`TagBlock`] - the consumed input unit: a type tag plus (code, value) pairs
//! - [`VersionPolicy`] - legacy/modern classification, passed into every decoder
//! - [`decode::EntityFactory`] - per-type-tag field decoding against a fixed
//!   dispatch table
//! - [`assembly::assemble`] - container/satellite reassembly by adjacency
//!
//! Reconstruction is two passes by design: a flat per-block decode, then one
//! linear reassembly pass that resolves Insert/Attrib and Polyline/Vertex
//! runs and casts mesh-mode polylines to polyface or polymesh form. The two
//! stages are connected by an ordinary ordered `Vec<Entity>`, so each is
//! independently testable.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assembly;
pub mod decode;
pub mod entities;
pub mod error;
pub mod notification;
pub mod tags;
pub mod types;
pub mod version;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use tags::{TagBlock, TagValue};
pub use types::{Vector2, Vector3};
pub use version::VersionPolicy;

// Re-export entity types
pub use entities::{
    Arc, Attrib, Circle, Ellipse, Entity, EntityCommon, Face3D, Insert, InvisibleEdgeFlags, Line,
    LwPolyline, LwVertex, Point, Polyface, Polyline, PolylineFlags, PolylineMode, Polymesh, Ray,
    SeqEnd, Text, Trace, Vertex, VertexFlags,
};

// Re-export the factory and diagnostics
pub use decode::EntityFactory;
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a whole reconstruction job: classify the version, decode every block
/// in order, then reassemble container/satellite runs into the final graph.
pub fn reconstruct(blocks: &[TagBlock], version: &str) -> Result<Vec<Entity>> {
    let mut factory = EntityFactory::from_version_string(version)?;
    let flat = factory.decode_all(blocks)?;
    assembly::assemble(flat)
}

/// Like [`reconstruct`], but fans the per-block decode out across threads.
/// Decoded entities are re-serialized into input order before reassembly, so
/// the result is identical to the sequential form.
pub fn reconstruct_par(blocks: &[TagBlock], version: &str) -> Result<Vec<Entity>> {
    let mut factory = EntityFactory::from_version_string(version)?;
    let flat = factory.decode_all_par(blocks)?;
    assembly::assemble(flat)
}
