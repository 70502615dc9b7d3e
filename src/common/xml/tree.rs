//! Mutable XML element tree.
//!
//! OOXML parts are edited in place: callers navigate to an element and change
//! its attributes or children, and the whole part is written back later. A
//! streaming reader cannot do that, so this module builds a small owned tree
//! on top of `quick-xml` events.
//!
//! Text content is kept in its escaped, as-read form so that serializing an
//! unmodified subtree reproduces the original character data. Attribute values
//! are stored unescaped and escaped again on output.
//!
//! Queries are namespace-aware: a query name such as `w:p` has its prefix
//! resolved against the declarations on the tree root, and matches any element
//! whose own prefix resolves to the same namespace URI. This keeps queries
//! stable regardless of which prefix a producer chose for a namespace.

use super::escape::{escape_xml, unescape_xml};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors produced while parsing XML into a tree.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The tokenizer rejected the input.
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// The input ended before every opened element was closed.
    #[error("unexpected end of document: <{0}> is not closed")]
    Unclosed(String),

    /// The input contained no root element.
    #[error("document has no root element")]
    NoRoot,

    /// A second top-level element followed the root.
    #[error("document has more than one root element")]
    MultipleRoots,

    /// Non-whitespace character data appeared outside the root element.
    #[error("character data outside the root element")]
    TextOutsideRoot,

    /// Names, values or text were not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type for XML tree operations.
pub type Result<T> = std::result::Result<T, XmlError>;

/// An attribute as stored on an [`Element`], with its value unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data in escaped form, exactly as it appears in the source.
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
    DocType(String),
}

/// An XML element with its qualified name, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given qualified name (e.g. `w:p`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Self::new(std::str::from_utf8(start.name().as_ref())?);
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmlError::Malformed {
                position: 0,
                message: e.to_string(),
            })?;
            element.attributes.push(Attribute {
                name: std::str::from_utf8(attr.key.as_ref())?.to_string(),
                value: unescape_xml(std::str::from_utf8(&attr.value)?),
            });
        }
        Ok(element)
    }

    /// The qualified name, including any prefix.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its prefix.
    #[inline]
    pub fn local_name(&self) -> &str {
        split_qname(&self.name).1
    }

    /// The namespace prefix, if the name has one.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        split_qname(&self.name).0
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute value by its qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, overwriting the value in place if the key exists,
    /// otherwise appending it.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let idx = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(idx).value)
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Iterate over child elements, skipping text and other node kinds.
    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// First child element with exactly this qualified name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.child_elements_mut().find(|e| e.name == name)
    }

    pub fn push_element(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Unescaped concatenation of all descendant character data.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(raw) => out.push_str(&unescape_xml(raw)),
                Node::CData(data) => out.push_str(data),
                Node::Element(e) => e.collect_text(out),
                _ => {},
            }
        }
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(escape_xml(text)));
        }
    }

    /// Visit this element and every descendant element in document order.
    pub fn visit_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        f(self);
        for child in self.child_elements_mut() {
            child.visit_mut(f);
        }
    }

    /// Namespace declarations carried by this element as `(prefix, uri)`;
    /// the default namespace has an empty prefix.
    pub fn namespace_declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().filter_map(|a| {
            if a.name == "xmlns" {
                Some(("", a.value.as_str()))
            } else {
                a.name
                    .strip_prefix("xmlns:")
                    .map(|prefix| (prefix, a.value.as_str()))
            }
        })
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.push(b'<');
        out.extend_from_slice(self.name.as_bytes());
        for attr in &self.attributes {
            out.push(b' ');
            out.extend_from_slice(attr.name.as_bytes());
            out.extend_from_slice(b"=\"");
            out.extend_from_slice(escape_xml(&attr.value).as_bytes());
            out.push(b'"');
        }
        if self.children.is_empty() {
            out.extend_from_slice(b"/>");
            return;
        }
        out.push(b'>');
        for child in &self.children {
            child.write_to(out);
        }
        out.extend_from_slice(b"</");
        out.extend_from_slice(self.name.as_bytes());
        out.push(b'>');
    }
}

impl Node {
    fn write_to(&self, out: &mut Vec<u8>) {
        let (open, body, close): (&[u8], &str, &[u8]) = match self {
            Node::Element(e) => return e.write_to(out),
            Node::Text(raw) => (b"", raw, b""),
            Node::CData(data) => (b"<![CDATA[", data, b"]]>"),
            Node::Comment(text) => (b"<!--", text, b"-->"),
            Node::ProcessingInstruction(content) => (b"<?", content, b"?>"),
            Node::DocType(content) => (b"<!DOCTYPE ", content, b">"),
        };
        out.extend_from_slice(open);
        out.extend_from_slice(body.as_bytes());
        out.extend_from_slice(close);
    }

    fn is_whitespace(&self) -> bool {
        matches!(self, Node::Text(t) if t.bytes().all(|b| b.is_ascii_whitespace()))
    }
}

/// A parsed XML document: declaration, prolog, root element and epilog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTree {
    declaration: Option<String>,
    prolog: Vec<Node>,
    root: Element,
    epilog: Vec<Node>,
}

impl XmlTree {
    /// Parse bytes into a tree. A leading UTF-8 byte order mark is ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(false);

        let mut builder = TreeBuilder::default();
        let mut buf = Vec::new();

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| XmlError::Malformed {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
            match event {
                Event::Decl(ref d) => {
                    if builder.is_pristine() {
                        builder.declaration = Some(std::str::from_utf8(d)?.to_string());
                    }
                },
                Event::Start(ref e) => builder.stack.push(Element::from_start(e)?),
                Event::Empty(ref e) => builder.close(Element::from_start(e)?)?,
                Event::End(_) => {
                    if let Some(element) = builder.stack.pop() {
                        builder.close(element)?;
                    }
                },
                Event::Text(ref t) => builder.text(std::str::from_utf8(t)?)?,
                Event::GeneralRef(ref r) => {
                    builder.text(&format!("&{};", std::str::from_utf8(r)?))?;
                },
                Event::CData(ref c) => {
                    builder.attach(Node::CData(std::str::from_utf8(c)?.to_string()))?;
                },
                Event::Comment(ref c) => {
                    builder.attach(Node::Comment(std::str::from_utf8(c)?.to_string()))?;
                },
                Event::PI(ref p) => {
                    builder.attach(Node::ProcessingInstruction(
                        std::str::from_utf8(p)?.to_string(),
                    ))?;
                },
                Event::DocType(ref d) => {
                    builder.attach(Node::DocType(std::str::from_utf8(d)?.to_string()))?;
                },
                Event::Eof => break,
            }
            buf.clear();
        }

        builder.finish()
    }

    /// Serialize the tree back to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4096);
        if let Some(decl) = &self.declaration {
            out.extend_from_slice(b"<?");
            out.extend_from_slice(decl.as_bytes());
            out.extend_from_slice(b"?>");
        }
        for node in &self.prolog {
            node.write_to(&mut out);
        }
        self.root.write_to(&mut out);
        for node in &self.epilog {
            node.write_to(&mut out);
        }
        out
    }

    #[inline]
    pub fn root(&self) -> &Element {
        &self.root
    }

    #[inline]
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The XML declaration content (between `<?` and `?>`), if present.
    #[inline]
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    /// Query handle positioned at the root element.
    #[inline]
    pub fn node(&self) -> XmlNode<'_> {
        XmlNode {
            element: &self.root,
            root: &self.root,
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    declaration: Option<String>,
    prolog: Vec<Node>,
    root: Option<Element>,
    epilog: Vec<Node>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn is_pristine(&self) -> bool {
        self.declaration.is_none() && self.prolog.is_empty() && self.root.is_none()
    }

    fn close(&mut self, element: Element) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None if self.root.is_some() => return Err(XmlError::MultipleRoots),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn text(&mut self, raw: &str) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            if let Some(Node::Text(prev)) = parent.children.last_mut() {
                prev.push_str(raw);
            } else {
                parent.children.push(Node::Text(raw.to_string()));
            }
            return Ok(());
        }
        self.attach(Node::Text(raw.to_string()))
    }

    fn attach(&mut self, node: Node) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        if matches!(node, Node::Text(_) | Node::CData(_)) && !node.is_whitespace() {
            return Err(XmlError::TextOutsideRoot);
        }
        if self.root.is_none() {
            self.prolog.push(node);
        } else {
            self.epilog.push(node);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<XmlTree> {
        if let Some(open) = self.stack.pop() {
            return Err(XmlError::Unclosed(open.name));
        }
        let root = self.root.ok_or(XmlError::NoRoot)?;
        Ok(XmlTree {
            declaration: self.declaration,
            prolog: self.prolog,
            root,
            epilog: self.epilog,
        })
    }
}

#[inline]
fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

fn resolve<'a>(scope: &[(&'a str, &'a str)], prefix: &str) -> Option<&'a str> {
    scope
        .iter()
        .rev()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Namespace URI bound to `prefix` on the root element.
fn root_namespace<'a>(root: &'a Element, prefix: &str) -> Option<&'a str> {
    root.namespace_declarations()
        .filter(|(p, _)| *p == prefix)
        .map(|(_, uri)| uri)
        .last()
}

/// A query name with its prefix resolved against the tree root.
struct NameMatcher<'a> {
    raw: String,
    uri: Option<&'a str>,
}

impl<'a> NameMatcher<'a> {
    fn new(query: &str, root: &'a Element) -> Self {
        let prefix = split_qname(query).0.unwrap_or("");
        Self {
            raw: query.to_string(),
            uri: root_namespace(root, prefix),
        }
    }

    fn matches(&self, element: &Element, scope: &[(&str, &str)]) -> bool {
        if element.local_name() != split_qname(&self.raw).1 {
            return false;
        }
        let element_uri = resolve(scope, element.prefix().unwrap_or(""));
        match (self.uri, element_uri) {
            (Some(query), Some(actual)) => query == actual,
            _ => element.name == self.raw,
        }
    }
}

/// A read-only cursor into a tree.
///
/// Carries the tree root alongside the element so that query prefixes are
/// always resolved against the root's namespace declarations, wherever the
/// cursor sits.
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a> {
    element: &'a Element,
    root: &'a Element,
}

impl<'a> XmlNode<'a> {
    #[inline]
    pub fn element(&self) -> &'a Element {
        self.element
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        &self.element.name
    }

    /// Attribute value by query name.
    ///
    /// A prefixed query such as `w:val` resolves its prefix against the root
    /// declarations and matches an attribute whose own prefix resolves to the
    /// same namespace. Unresolvable prefixes fall back to the literal name.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let (Some(prefix), local) = split_qname(name) else {
            return self.element.attribute(name);
        };
        let Some(query_uri) = root_namespace(self.root, prefix) else {
            return self.element.attribute(name);
        };
        let scope = self.base_scope();
        let element: &'a Element = self.element;
        element
            .attributes
            .iter()
            .find(|attr| match split_qname(&attr.name) {
                (Some(attr_prefix), attr_local) => match resolve(&scope, attr_prefix) {
                    Some(uri) => attr_local == local && uri == query_uri,
                    None => attr.name == name,
                },
                (None, _) => false,
            })
            .map(|attr| attr.value.as_str())
    }

    #[inline]
    pub fn text(&self) -> String {
        self.element.text()
    }

    fn base_scope(&self) -> Vec<(&'a str, &'a str)> {
        let mut scope: Vec<_> = self.root.namespace_declarations().collect();
        if !std::ptr::eq(self.element, self.root) {
            scope.extend(self.element.namespace_declarations());
        }
        scope
    }

    fn wrap(&self, element: &'a Element) -> XmlNode<'a> {
        XmlNode {
            element,
            root: self.root,
        }
    }

    /// Direct child elements matching `name`, in document order.
    pub fn children(&self, name: &str) -> impl Iterator<Item = XmlNode<'a>> + use<'a> {
        let matcher = NameMatcher::new(name, self.root);
        let base = self.base_scope();
        let this = *self;
        self.element.child_elements().filter_map(move |child| {
            let mut scope = base.clone();
            scope.extend(child.namespace_declarations());
            matcher.matches(child, &scope).then(|| this.wrap(child))
        })
    }

    /// First direct child element matching `name`.
    pub fn child(&self, name: &str) -> Option<XmlNode<'a>> {
        self.children(name).next()
    }

    /// All direct child elements, in document order.
    pub fn elements(&self) -> impl Iterator<Item = XmlNode<'a>> + use<'a> {
        let this = *self;
        self.element.child_elements().map(move |child| this.wrap(child))
    }

    /// Whether this element matches the query name `name`.
    pub fn is(&self, name: &str) -> bool {
        NameMatcher::new(name, self.root).matches(self.element, &self.base_scope())
    }

    /// Descendant elements (excluding this one) matching `name`, in
    /// document order. The traversal is lazy.
    pub fn descendants(&self, name: &str) -> Descendants<'a> {
        let scope = self.base_scope();
        let depth = scope.len();
        Descendants {
            root: self.root,
            matcher: NameMatcher::new(name, self.root),
            stack: self
                .element
                .child_elements()
                .rev()
                .map(|child| (child, depth))
                .collect(),
            scope,
        }
    }

    /// Follow a chain of descendant steps, like `//a//b//c`, and return the
    /// first match.
    pub fn find(&self, path: &[&str]) -> Option<XmlNode<'a>> {
        let (last, steps) = path.split_last()?;
        if steps.is_empty() {
            return self.descendants(last).next();
        }
        self.descendants(steps[0])
            .find_map(|node| node.find(&path[1..]))
    }
}

/// Lazy pre-order traversal returned by [`XmlNode::descendants`].
pub struct Descendants<'a> {
    root: &'a Element,
    matcher: NameMatcher<'a>,
    stack: Vec<(&'a Element, usize)>,
    scope: Vec<(&'a str, &'a str)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = XmlNode<'a>;

    fn next(&mut self) -> Option<XmlNode<'a>> {
        while let Some((element, depth)) = self.stack.pop() {
            self.scope.truncate(depth);
            self.scope.extend(element.namespace_declarations());
            let inner = self.scope.len();
            self.stack
                .extend(element.child_elements().rev().map(|child| (child, inner)));
            if self.matcher.matches(element, &self.scope) {
                return Some(XmlNode {
                    element,
                    root: self.root,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        "\r\n",
        r#"<w:document xmlns:w="urn:wml"><w:body>"#,
        r#"<w:p><w:r><w:t xml:space="preserve">Fish &amp; chips</w:t></w:r></w:p>"#,
        r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        r#"<w:p/>"#,
        "</w:body></w:document>"
    );

    #[test]
    fn test_serialize_unmodified_tree_is_stable() {
        let tree = XmlTree::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(String::from_utf8(tree.to_bytes()).unwrap(), SAMPLE);
        assert_eq!(
            tree.declaration(),
            Some(r#"xml version="1.0" encoding="UTF-8" standalone="yes""#)
        );
    }

    #[test]
    fn test_text_is_unescaped_on_read() {
        let tree = XmlTree::parse(SAMPLE.as_bytes()).unwrap();
        let first = tree.node().descendants("w:t").next().unwrap();
        assert_eq!(first.text(), "Fish & chips");
        assert_eq!(first.attribute("xml:space"), Some("preserve"));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let tree = XmlTree::parse(SAMPLE.as_bytes()).unwrap();
        let texts: Vec<String> = tree.node().descendants("w:t").map(|n| n.text()).collect();
        assert_eq!(texts, vec!["Fish & chips", "cell"]);

        let body = tree.node().child("w:body").unwrap();
        assert_eq!(body.children("w:p").count(), 2);
        assert_eq!(body.descendants("w:p").count(), 3);
        let kinds: Vec<bool> = body.elements().map(|n| n.is("w:tbl")).collect();
        assert_eq!(kinds, vec![false, true, false]);
    }

    #[test]
    fn test_query_prefix_resolves_through_namespace() {
        let xml = r#"<ns0:document xmlns:ns0="urn:wml" xmlns:w="urn:wml"><ns0:body><ns0:p/></ns0:body></ns0:document>"#;
        let tree = XmlTree::parse(xml.as_bytes()).unwrap();
        assert_eq!(tree.node().descendants("w:p").count(), 1);
        assert!(tree.node().find(&["w:body", "w:p"]).is_some());
    }

    #[test]
    fn test_prefix_bound_elsewhere_does_not_match() {
        let xml = r#"<w:root xmlns:w="urn:a"><x:p xmlns:x="urn:b"/><w:p/></w:root>"#;
        let tree = XmlTree::parse(xml.as_bytes()).unwrap();
        let hits: Vec<&str> = tree.node().descendants("w:p").map(|n| n.name()).collect();
        assert_eq!(hits, vec!["w:p"]);
    }

    #[test]
    fn test_attribute_prefix_resolves_through_namespace() {
        let xml = concat!(
            r#"<ns0:styles xmlns:ns0="urn:wml" xmlns:w="urn:wml" xmlns:o="urn:other">"#,
            r#"<ns0:sz ns0:val="24" o:val="7" plain="1"/>"#,
            r#"<w:sz o:val="9" xml:space="preserve"/>"#,
            "</ns0:styles>"
        );
        let tree = XmlTree::parse(xml.as_bytes()).unwrap();
        let sizes: Vec<XmlNode<'_>> = tree.node().descendants("w:sz").collect();
        assert_eq!(sizes[0].attribute("w:val"), Some("24"));
        assert_eq!(sizes[0].attribute("ns0:val"), Some("24"));
        assert_eq!(sizes[0].attribute("plain"), Some("1"));
        // Bound to another namespace, so not a match
        assert_eq!(sizes[1].attribute("w:val"), None);
        // Undeclared prefix falls back to the literal name
        assert_eq!(sizes[1].attribute("xml:space"), Some("preserve"));
    }

    #[test]
    fn test_mutation_shows_in_serialized_output() {
        let mut tree = XmlTree::parse(SAMPLE.as_bytes()).unwrap();
        tree.root_mut().visit_mut(&mut |el| {
            if el.name() == "w:t" && el.text() == "cell" {
                el.set_text("a < b");
            }
        });
        tree.root_mut().set_attribute("w:custom", "1");
        let out = String::from_utf8(tree.to_bytes()).unwrap();
        assert!(out.contains("<w:t>a &lt; b</w:t>"));
        assert!(out.contains(r#"<w:document xmlns:w="urn:wml" w:custom="1">"#));
    }

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut el = Element::new("a");
        el.set_attribute("x", "1");
        el.set_attribute("y", "2");
        el.set_attribute("x", "3");
        assert_eq!(el.attributes().len(), 2);
        assert_eq!(el.attributes()[0].value, "3");
        assert_eq!(el.remove_attribute("y").as_deref(), Some("2"));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(matches!(
            XmlTree::parse(b"<a><b></a>"),
            Err(XmlError::Malformed { .. })
        ));
        assert!(matches!(
            XmlTree::parse(b"<a><b>"),
            Err(XmlError::Unclosed(_) | XmlError::Malformed { .. })
        ));
        assert!(matches!(XmlTree::parse(b"   "), Err(XmlError::NoRoot)));
        assert!(matches!(
            XmlTree::parse(b"<a/><b/>"),
            Err(XmlError::MultipleRoots)
        ));
        assert!(matches!(
            XmlTree::parse(b"<a/>junk"),
            Err(XmlError::TextOutsideRoot)
        ));
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"<root/>");
        let tree = XmlTree::parse(&bytes).unwrap();
        assert_eq!(tree.root().name(), "root");
    }
}
