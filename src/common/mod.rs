//! Common types and utilities shared across package formats.

pub mod xml;

pub use xml::{Element, XmlNode, XmlTree};
