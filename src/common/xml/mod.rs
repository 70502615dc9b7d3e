//! XML engine: entity escaping and a mutable, namespace-aware element tree.

mod escape;
pub mod tree;

pub use escape::{escape_xml, unescape_xml};
pub use tree::{Attribute, Descendants, Element, Node, XmlError, XmlNode, XmlTree};
