//! Spatial layout of page graphs and display trees.
//!
//! The only engine is the radial one: the root sits at the origin and every
//! node spreads its children over its own angular wedge, one ring further out
//! per level.

mod radial;

pub use radial::RadialLayoutEngine;
