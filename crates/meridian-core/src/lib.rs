//! Meridian Core Types and Definitions
//!
//! This crate provides the foundational types for the Meridian spatial
//! diagram engine. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Measurement**: The label measurement capability ([`measure`] module)
//! - **Draw**: Drawing primitives and layered SVG output ([`draw`] module)

pub mod draw;
pub mod geometry;
pub mod measure;
