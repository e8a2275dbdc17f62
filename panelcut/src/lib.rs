//! `panelcut`: a deterministic shelf-based optimizer for cutting rectangular parts out of fixed-size stock sheets.
//!
//! A run takes one stock [`Dimension`](geometry::Dimension) and an ordered list of [`Part`](entities::Part)s,
//! places every part that fits on as few sheets as the shelf heuristic manages,
//! and reports the resulting material waste.

/// Dimensions, orientations and axis-aligned rectangles
pub mod geometry;

/// Entities produced and consumed by a packing run
pub mod entities;

/// The shelf packer
pub mod packer;

/// Aggregate statistics over a finished packing
pub mod report;

/// Importing jobs into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::CutError;
