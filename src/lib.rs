//! Incremental construction of simple polygons.
//!
//! A [`Polygon2`] is built one side at a time, rejecting any side that would make the
//! boundary cross itself, and can be closed automatically back to its first vertex.
//! [`PolygonGenerator`] drives the construction from lines of `"<x> <y>"` text supplied by
//! a [`CoordinateSource`].

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod error;
mod extents;
mod generator;
#[cfg(feature = "io")]
pub mod io;
mod parse;
mod point;
pub mod polygon;
mod report;
mod source;
mod vector;

pub use error::*;
pub use extents::*;
pub use generator::*;
pub use parse::*;
pub use point::*;
pub use polygon::*;
pub use report::*;
pub use source::*;
pub use vector::*;

/// Area can be calculated from an object.
///
/// For a [`Polygon2`] this is the enclosed _plan_ area.
pub trait Area {
    /// Calculate the area of an object.
    fn area(&self) -> f64;
}
