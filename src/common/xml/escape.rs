use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<Option<AhoCorasick>> =
    Lazy::new(|| AhoCorasick::builder().build(["&", "<", ">", "\"", "'"]).ok());

const ESCAPED: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use opcedit::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    match XML_ESCAPER.as_ref() {
        Some(escaper) => escaper.replace_all(s, &ESCAPED),
        None => escape_slow(s),
    }
}

fn escape_slow(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Unescape XML entity and character references.
///
/// Handles the five predefined entities plus decimal (`&#65;`) and
/// hexadecimal (`&#x41;`) character references. Unknown or malformed
/// references are left unchanged.
///
/// # Examples
///
/// ```
/// use opcedit::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&#65;&#x42;"), "AB");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// assert_eq!(unescape_xml("&amp"), "&amp");
/// ```
pub fn unescape_xml(s: &str) -> String {
    let bytes = s.as_bytes();
    let Some(first) = memchr::memchr(b'&', bytes) else {
        return s.to_string();
    };

    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..first]);
    let mut pos = first;

    while pos < s.len() {
        let rest = &s[pos..];
        if !rest.starts_with('&') {
            let next = memchr::memchr(b'&', rest.as_bytes()).unwrap_or(rest.len());
            out.push_str(&rest[..next]);
            pos += next;
            continue;
        }

        match memchr::memchr(b';', rest.as_bytes()).and_then(|end| {
            resolve_reference(&rest[1..end]).map(|c| (c, end))
        }) {
            Some((c, end)) => {
                out.push(c);
                pos += end + 1;
            },
            None => {
                out.push('&');
                pos += 1;
            },
        }
    }

    out
}

fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok()?,
            };
            char::from_u32(code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(escape_xml(r#"<foo & "bar">"#), "&lt;foo &amp; &quot;bar&quot;&gt;");
        assert_eq!(escape_slow(r#"<foo & 'bar'>"#), "&lt;foo &amp; &apos;bar&apos;&gt;");
    }

    #[test]
    fn test_unescape_mixed_references() {
        assert_eq!(unescape_xml("Tom &amp; Jerry &#8212; &#x2603;"), "Tom & Jerry \u{2014} \u{2603}");
        assert_eq!(unescape_xml("no refs"), "no refs");
        assert_eq!(unescape_xml("a & b ; c"), "a & b ; c");
        assert_eq!(unescape_xml("&#xZZ;"), "&#xZZ;");
    }
}
