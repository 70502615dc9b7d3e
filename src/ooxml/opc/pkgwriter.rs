//! Package writer for OPC packages.
//!
//! A save is always a full archive rewrite: every entry of the source archive
//! is emitted in its original order, either substituted from the
//! [`EditBuffer`] or copied raw from the source. Entries are never added or
//! removed.

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::phys_pkg::{PhysPkgReader, PhysPkgWriter};
use std::collections::BTreeMap;
use std::io::{Seek, Write};
use tracing::{debug, trace};
use zip::CompressionMethod;

/// Pending replacement bytes keyed by archive path.
///
/// Setting a path twice keeps the last bytes. Contents are not validated.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    entries: BTreeMap<String, Vec<u8>>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record replacement bytes for `path`, overwriting any earlier entry.
    pub fn set(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(path.into(), bytes);
    }

    #[inline]
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths with pending replacements, in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Compression applied to entries substituted from the edit buffer.
///
/// Entries copied from the source archive always keep their original
/// compressed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveCompression {
    /// Store substituted entries when the original was stored, deflate
    /// otherwise.
    #[default]
    Preserve,
    Deflated,
    Stored,
}

impl SaveCompression {
    fn method_for(self, original: CompressionMethod) -> CompressionMethod {
        match self {
            SaveCompression::Preserve if original == CompressionMethod::Stored => {
                CompressionMethod::Stored
            },
            SaveCompression::Preserve | SaveCompression::Deflated => CompressionMethod::Deflated,
            SaveCompression::Stored => CompressionMethod::Stored,
        }
    }
}

/// Streams a source archive to a sink, substituting edited entries.
pub struct PackageWriter;

impl PackageWriter {
    /// Write every entry of `reader` to `sink` in original order.
    ///
    /// Entries with a pending replacement in `edits` are written from those
    /// bytes; all others are copied without recompression. Edits for paths
    /// the source archive does not contain are ignored.
    pub fn write<W: Write + Seek>(
        reader: &mut PhysPkgReader,
        edits: &EditBuffer,
        sink: W,
        compression: SaveCompression,
    ) -> Result<W> {
        let mut writer = PhysPkgWriter::new(sink);
        let names = reader.member_names();
        let mut substituted = 0usize;

        for (index, name) in names.iter().enumerate() {
            match edits.get(name) {
                Some(bytes) => {
                    let method = compression.method_for(reader.compression_at(index)?);
                    trace!(entry = %name, len = bytes.len(), "substituting entry");
                    writer.write(name, bytes, method)?;
                    substituted += 1;
                },
                None => {
                    trace!(entry = %name, "copying entry");
                    writer.raw_copy(reader, index)?;
                },
            }
        }

        for orphan in edits.paths().filter(|p| !names.iter().any(|n| n.as_str() == *p)) {
            debug!(entry = %orphan, "edit has no matching archive entry; ignored");
        }
        debug!(entries = names.len(), substituted, "package written");

        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> PhysPkgReader {
        let mut writer = PhysPkgWriter::in_memory();
        writer
            .write("a.xml", b"<a/>", CompressionMethod::Deflated)
            .unwrap();
        writer
            .write("b.bin", b"\x00\x01\x02", CompressionMethod::Stored)
            .unwrap();
        writer
            .write("c.xml", b"<c/>", CompressionMethod::Deflated)
            .unwrap();
        PhysPkgReader::from_bytes(writer.finish().unwrap().into_inner()).unwrap()
    }

    fn rewrite(edits: &EditBuffer, compression: SaveCompression) -> PhysPkgReader {
        let mut reader = source();
        let out = PackageWriter::write(
            &mut reader,
            edits,
            std::io::Cursor::new(Vec::new()),
            compression,
        )
        .unwrap();
        PhysPkgReader::from_bytes(out.into_inner()).unwrap()
    }

    #[test]
    fn test_last_write_wins() {
        let mut edits = EditBuffer::new();
        edits.set("a.xml", b"<first/>".to_vec());
        edits.set("a.xml", b"<second/>".to_vec());
        assert_eq!(edits.len(), 1);
        assert_eq!(edits.get("a.xml"), Some(&b"<second/>"[..]));
    }

    #[test]
    fn test_untouched_rewrite_keeps_everything() {
        let mut out = rewrite(&EditBuffer::new(), SaveCompression::Preserve);
        assert_eq!(out.member_names(), vec!["a.xml", "b.bin", "c.xml"]);
        assert_eq!(out.blob_for("a.xml").unwrap(), b"<a/>");
        assert_eq!(out.blob_for("b.bin").unwrap(), b"\x00\x01\x02");
        assert_eq!(out.compression_at(1).unwrap(), CompressionMethod::Stored);
    }

    #[test]
    fn test_substitution_without_adding_entries() {
        let mut edits = EditBuffer::new();
        edits.set("c.xml", b"<changed/>".to_vec());
        edits.set("b.bin", b"raw".to_vec());
        edits.set("new.xml", b"<never/>".to_vec());

        let mut out = rewrite(&edits, SaveCompression::Preserve);
        assert_eq!(out.member_names(), vec!["a.xml", "b.bin", "c.xml"]);
        assert_eq!(out.blob_for("a.xml").unwrap(), b"<a/>");
        assert_eq!(out.blob_for("b.bin").unwrap(), b"raw");
        assert_eq!(out.blob_for("c.xml").unwrap(), b"<changed/>");
        assert_eq!(out.compression_at(1).unwrap(), CompressionMethod::Stored);
        assert!(!out.contains("new.xml"));
    }

    #[test]
    fn test_forced_compression() {
        let mut edits = EditBuffer::new();
        edits.set("a.xml", b"<a2/>".to_vec());
        let mut out = rewrite(&edits, SaveCompression::Stored);
        assert_eq!(out.compression_at(0).unwrap(), CompressionMethod::Stored);
        assert_eq!(out.compression_at(2).unwrap(), CompressionMethod::Deflated);
    }
}
