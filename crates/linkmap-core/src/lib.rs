//! Linkmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by the linkmap tree
//! builder and layout engine. It includes:
//!
//! - **Identifiers**: Interned node and edge identifiers ([`identifier::Id`])
//! - **Geometry**: Points and angular spans ([`geometry`] module)
//! - **Graph**: The raw page graph wire types ([`graph`] module)
//! - **Tree**: Display trees derived from a graph ([`tree`] module)
//! - **Positioned**: Nodes annotated with layout coordinates ([`positioned`] module)
//! - **Labels**: Display labels derived from page urls ([`label`] module)

pub mod geometry;
pub mod graph;
pub mod identifier;
pub mod label;
pub mod positioned;
pub mod tree;
