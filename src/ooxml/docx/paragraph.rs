//! Paragraph and run projections.
//!
//! Both types are read views over `w:p` / `w:r` elements of a loaded part.
//! They borrow the part's tree and own no content of their own, so they are
//! cheap to create and always reflect the current state of the tree.

use crate::common::xml::{XmlNode, escape_xml};
use crate::ooxml::docx::styles::{DocumentProperties, half_points, toggle};

/// A paragraph in a Word document.
///
/// Represents a `<w:p>` element. Paragraphs contain runs of text, either
/// directly or wrapped in `<w:hyperlink>` elements.
///
/// # Examples
///
/// ```rust,no_run
/// use opcedit::{Document, PackageModel};
///
/// let doc = Document::open("document.docx")?;
/// for para in doc.paragraphs() {
///     println!("{:?} {}", para.alignment(), para.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    node: XmlNode<'a>,
    properties: DocumentProperties,
}

impl<'a> Paragraph<'a> {
    pub(crate) fn new(node: XmlNode<'a>, properties: DocumentProperties) -> Self {
        Self { node, properties }
    }

    /// The underlying `w:p` element.
    #[inline]
    pub fn node(&self) -> XmlNode<'a> {
        self.node
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs().iter().map(TextRun::text).collect()
    }

    /// Text runs in document order, including runs inside hyperlinks.
    pub fn runs(&self) -> Vec<TextRun<'a>> {
        let size = self.font_size();
        let mut runs = Vec::new();
        for child in self.node.elements() {
            if child.is("w:r") {
                runs.push(TextRun::new(child, size));
            } else if child.is("w:hyperlink") {
                runs.extend(child.children("w:r").map(|r| TextRun::new(r, size)));
            }
        }
        runs
    }

    fn paragraph_properties(&self) -> Option<XmlNode<'a>> {
        self.node.child("w:pPr")
    }

    /// Font size in points.
    ///
    /// Uses the size in the paragraph properties when present, otherwise the
    /// document default.
    pub fn font_size(&self) -> Option<u32> {
        self.paragraph_properties()
            .and_then(|ppr| ppr.descendants("w:sz").next())
            .and_then(half_points)
            .or(self.properties.font_size)
    }

    /// Justification value (`w:jc`), e.g. `center` or `both`.
    pub fn alignment(&self) -> Option<&'a str> {
        self.paragraph_properties()?
            .descendants("w:jc")
            .next()?
            .attribute("w:val")
    }

    /// Paragraph-level text color as a hex string without the `#`.
    pub fn font_color(&self) -> Option<&'a str> {
        self.paragraph_properties()?
            .descendants("w:color")
            .next()?
            .attribute("w:val")
    }

    /// Render the paragraph as a `<p>` element with inline styles.
    pub fn to_html(&self) -> String {
        let content: String = self.runs().iter().map(TextRun::to_html).collect();
        let mut styles = Vec::new();
        if let Some(size) = self.font_size() {
            styles.push(("font-size", format!("{size}pt")));
        }
        if let Some(color) = self.font_color() {
            styles.push(("color", format!("#{color}")));
        }
        if let Some(align) = self.alignment() {
            styles.push(("text-align", align.to_string()));
        }
        html_tag("p", &content, &styles)
    }
}

/// A run of text within a paragraph.
///
/// Represents a `<w:r>` element. Formatting toggles are read from the run's
/// own `<w:rPr>`; styles inherited from the paragraph or a named style are
/// not resolved.
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    node: XmlNode<'a>,
    paragraph_size: Option<u32>,
}

impl<'a> TextRun<'a> {
    pub(crate) fn new(node: XmlNode<'a>, paragraph_size: Option<u32>) -> Self {
        Self {
            node,
            paragraph_size,
        }
    }

    /// The underlying `w:r` element.
    #[inline]
    pub fn node(&self) -> XmlNode<'a> {
        self.node
    }

    /// Text of the run's `w:t` elements.
    pub fn text(&self) -> String {
        self.node.children("w:t").map(|t| t.text()).collect()
    }

    fn run_properties(&self) -> Option<XmlNode<'a>> {
        self.node.child("w:rPr")
    }

    /// Explicit bold setting, `None` when the run does not set it.
    pub fn bold(&self) -> Option<bool> {
        toggle(self.run_properties(), "w:b")
    }

    pub fn italic(&self) -> Option<bool> {
        toggle(self.run_properties(), "w:i")
    }

    /// Explicit underline setting; `w:val="none"` counts as off.
    pub fn underline(&self) -> Option<bool> {
        toggle(self.run_properties(), "w:u")
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold().unwrap_or(false)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.italic().unwrap_or(false)
    }

    #[inline]
    pub fn is_underlined(&self) -> bool {
        self.underline().unwrap_or(false)
    }

    /// Font size in points, falling back to the enclosing paragraph's size.
    pub fn font_size(&self) -> Option<u32> {
        self.run_properties()
            .and_then(|rpr| rpr.child("w:sz"))
            .and_then(half_points)
            .or(self.paragraph_size)
    }

    /// Render the run as HTML.
    ///
    /// Italic wraps in `<em>`, bold in `<strong>`; underline and a size that
    /// differs from the paragraph's go into a `<span>` style.
    pub fn to_html(&self) -> String {
        let mut html = escape_xml(&self.text());
        if self.is_italic() {
            html = html_tag("em", &html, &[]);
        }
        if self.is_bold() {
            html = html_tag("strong", &html, &[]);
        }
        let mut styles = Vec::new();
        if self.is_underlined() {
            styles.push(("text-decoration", "underline".to_string()));
        }
        if let Some(size) = self.font_size().filter(|s| Some(*s) != self.paragraph_size) {
            styles.push(("font-size", format!("{size}pt")));
        }
        if !styles.is_empty() {
            html = html_tag("span", &html, &styles);
        }
        html
    }
}

fn html_tag(tag: &str, content: &str, styles: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(content.len() + tag.len() * 2 + 5);
    out.push('<');
    out.push_str(tag);
    if !styles.is_empty() {
        out.push_str(" style=\"");
        for (key, value) in styles {
            out.push_str(key);
            out.push(':');
            out.push_str(value);
            out.push(';');
        }
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::XmlTree;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn paragraph_tree(inner: &str) -> XmlTree {
        XmlTree::parse(format!(r#"<w:p xmlns:w="{W}">{inner}</w:p>"#).as_bytes()).unwrap()
    }

    fn defaults(size: Option<u32>) -> DocumentProperties {
        DocumentProperties { font_size: size }
    }

    #[test]
    fn test_text_includes_hyperlink_runs() {
        let tree = paragraph_tree(concat!(
            r#"<w:r><w:t>Visit </w:t></w:r>"#,
            r#"<w:hyperlink><w:r><w:t>our site</w:t></w:r></w:hyperlink>"#,
            r#"<w:r><w:t xml:space="preserve"> &amp; more</w:t></w:r>"#,
        ));
        let para = Paragraph::new(tree.node(), defaults(None));
        assert_eq!(para.runs().len(), 3);
        assert_eq!(para.text(), "Visit our site & more");
    }

    #[test]
    fn test_font_size_falls_back_to_default() {
        let tree = paragraph_tree(r#"<w:r><w:t>a</w:t></w:r>"#);
        assert_eq!(Paragraph::new(tree.node(), defaults(Some(11))).font_size(), Some(11));
        assert_eq!(Paragraph::new(tree.node(), defaults(None)).font_size(), None);

        let tree = paragraph_tree(
            r#"<w:pPr><w:jc w:val="center"/><w:rPr><w:sz w:val="32"/></w:rPr></w:pPr>"#,
        );
        let para = Paragraph::new(tree.node(), defaults(Some(11)));
        assert_eq!(para.font_size(), Some(16));
        assert_eq!(para.alignment(), Some("center"));
    }

    #[test]
    fn test_run_formatting() {
        let tree = paragraph_tree(concat!(
            r#"<w:r><w:rPr><w:b/><w:i w:val="false"/><w:u w:val="none"/><w:sz w:val="20"/></w:rPr>"#,
            r#"<w:t>x</w:t></w:r>"#,
        ));
        let para = Paragraph::new(tree.node(), defaults(Some(12)));
        let run = para.runs()[0];
        assert!(run.is_bold());
        assert!(!run.is_italic());
        assert_eq!(run.italic(), Some(false));
        assert!(!run.is_underlined());
        assert_eq!(run.font_size(), Some(10));
    }

    #[test]
    fn test_html_rendering() {
        let tree = paragraph_tree(concat!(
            r#"<w:pPr><w:jc w:val="right"/></w:pPr>"#,
            r#"<w:r><w:t>plain &lt;tag&gt; </w:t></w:r>"#,
            r#"<w:r><w:rPr><w:b/><w:i/><w:u w:val="single"/></w:rPr><w:t>loud</w:t></w:r>"#,
            r#"<w:r><w:rPr><w:sz w:val="28"/></w:rPr><w:t>big</w:t></w:r>"#,
        ));
        let html = Paragraph::new(tree.node(), defaults(Some(12))).to_html();
        assert_eq!(
            html,
            concat!(
                r#"<p style="font-size:12pt;text-align:right;">"#,
                "plain &lt;tag&gt; ",
                r#"<span style="text-decoration:underline;"><strong><em>loud</em></strong></span>"#,
                r#"<span style="font-size:14pt;">big</span>"#,
                "</p>"
            )
        );
    }

    #[test]
    fn test_empty_paragraph_html() {
        let tree = paragraph_tree("");
        assert_eq!(Paragraph::new(tree.node(), defaults(None)).to_html(), "<p></p>");
        assert_eq!(Paragraph::new(tree.node(), defaults(None)).text(), "");
    }
}
