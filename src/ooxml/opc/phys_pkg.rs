//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! This module handles the low-level reading and writing of OPC packages as
//! ZIP archives. The reader keeps the archive handle open for the lifetime of
//! a package session so that untouched entries can later be copied to a new
//! archive without being decompressed.

use crate::ooxml::opc::error::Result;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Byte source behind an open archive: a file on disk or an owned buffer.
pub enum ArchiveSource {
    File(BufReader<File>),
    Memory(Cursor<Vec<u8>>),
}

impl Read for ArchiveSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            ArchiveSource::File(f) => f.read(buf),
            ArchiveSource::Memory(c) => c.read(buf),
        }
    }
}

impl Seek for ArchiveSource {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match self {
            ArchiveSource::File(f) => f.seek(pos),
            ArchiveSource::Memory(c) => c.seek(pos),
        }
    }
}

/// Upper bound on the buffer reserved up front for an entry.
///
/// The declared size comes from the archive's directory and is untrusted;
/// larger entries still read fully, growing the buffer as they go.
const MAX_PREALLOC: usize = 16 * 1024 * 1024;

#[inline]
fn initial_capacity(declared: u64) -> usize {
    usize::try_from(declared).unwrap_or(usize::MAX).min(MAX_PREALLOC)
}

/// Physical package reader that provides access to entries in a ZIP-based
/// OPC package.
pub struct PhysPkgReader {
    archive: ZipArchive<ArchiveSource>,
    source_path: Option<PathBuf>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not a valid ZIP
    /// archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let archive = ZipArchive::new(ArchiveSource::File(BufReader::new(file)))?;
        Ok(Self {
            archive,
            source_path: Some(path.to_path_buf()),
        })
    }

    /// Open an OPC package held in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(ArchiveSource::Memory(Cursor::new(data)))?;
        Ok(Self {
            archive,
            source_path: None,
        })
    }

    /// Path the archive was opened from, if it came from disk.
    #[inline]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Number of entries, directories included.
    #[inline]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Entry names in central-directory order.
    pub fn member_names(&self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.name_for_index(i))
            .map(String::from)
            .collect()
    }

    /// Check whether an entry with exactly this name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read and decompress one entry.
    pub fn blob_for(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self.archive.by_name(name)?;
        let mut content = Vec::with_capacity(initial_capacity(entry.size()));
        entry.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Compression method of the entry at `index`.
    pub fn compression_at(&mut self, index: usize) -> Result<CompressionMethod> {
        Ok(self.archive.by_index_raw(index)?.compression())
    }

    #[inline]
    pub(crate) fn archive_mut(&mut self) -> &mut ZipArchive<ArchiveSource> {
        &mut self.archive
    }
}

/// Physical package writer.
///
/// Entries are either written from fresh bytes or copied raw, compressed data
/// and all, from an open [`PhysPkgReader`].
pub struct PhysPkgWriter<W: Write + Seek> {
    archive: ZipWriter<W>,
}

impl<W: Write + Seek> PhysPkgWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            archive: ZipWriter::new(sink),
        }
    }

    /// Write an entry with the given compression method.
    pub fn write(&mut self, name: &str, blob: &[u8], method: CompressionMethod) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(method);
        self.archive.start_file(name, options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Copy the entry at `index` from `reader` without recompressing it.
    pub fn raw_copy(&mut self, reader: &mut PhysPkgReader, index: usize) -> Result<()> {
        let entry = reader.archive_mut().by_index_raw(index)?;
        self.archive.raw_copy_file(entry)?;
        Ok(())
    }

    /// Write the central directory and return the sink.
    pub fn finish(self) -> Result<W> {
        Ok(self.archive.finish()?)
    }
}

impl PhysPkgWriter<Cursor<Vec<u8>>> {
    /// Create a package writer that writes to memory.
    pub fn in_memory() -> Self {
        Self::new(Cursor::new(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_archive() -> Vec<u8> {
        let mut writer = PhysPkgWriter::in_memory();
        writer
            .write("[Content_Types].xml", b"<Types/>", CompressionMethod::Deflated)
            .unwrap();
        writer
            .write("word/document.xml", b"<document/>", CompressionMethod::Stored)
            .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_round_trip() {
        let mut reader = PhysPkgReader::from_bytes(sample_archive()).unwrap();
        assert_eq!(reader.len(), 2);
        assert_eq!(
            reader.member_names(),
            vec!["[Content_Types].xml", "word/document.xml"]
        );
        assert!(reader.contains("word/document.xml"));
        assert!(!reader.contains("word/styles.xml"));
        assert_eq!(reader.blob_for("word/document.xml").unwrap(), b"<document/>");
        assert_eq!(reader.compression_at(1).unwrap(), CompressionMethod::Stored);
        assert!(reader.source_path().is_none());
    }

    #[test]
    fn test_raw_copy_preserves_entries() {
        let mut reader = PhysPkgReader::from_bytes(sample_archive()).unwrap();
        let mut writer = PhysPkgWriter::in_memory();
        for index in 0..reader.len() {
            writer.raw_copy(&mut reader, index).unwrap();
        }
        let copied = writer.finish().unwrap().into_inner();

        let mut copy = PhysPkgReader::from_bytes(copied).unwrap();
        assert_eq!(copy.blob_for("[Content_Types].xml").unwrap(), b"<Types/>");
        assert_eq!(copy.compression_at(0).unwrap(), CompressionMethod::Deflated);
    }

    #[test]
    fn test_not_a_zip() {
        assert!(PhysPkgReader::from_bytes(b"plainly not a zip".to_vec()).is_err());
    }

    #[test]
    fn test_declared_size_caps_preallocation() {
        assert_eq!(initial_capacity(10), 10);
        assert_eq!(initial_capacity(u64::MAX), MAX_PREALLOC);

        // Content beyond the reservation is still read in full
        let big = vec![b'a'; MAX_PREALLOC + 1];
        let mut writer = PhysPkgWriter::in_memory();
        writer.write("big.bin", &big, CompressionMethod::Deflated).unwrap();
        let mut reader = PhysPkgReader::from_bytes(writer.finish().unwrap().into_inner()).unwrap();
        assert_eq!(reader.blob_for("big.bin").unwrap().len(), MAX_PREALLOC + 1);
    }
}
