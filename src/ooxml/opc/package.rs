//! The package session shared by document and workbook models.
//!
//! A [`Package`] owns the open archive, the parsed manifest, every loaded
//! part and the pending edits. It is single-owner mutable state: callers that
//! share one across threads must serialize access themselves.

use crate::ooxml::opc::constants::CONTENT_TYPES_PATH;
use crate::ooxml::opc::content_types::ManifestIndex;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::part::{OptionalRole, Part, PartLoader, PartMut, PartRole, RequiredPart};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgwriter::{EditBuffer, PackageWriter, SaveCompression};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Which parts a package kind requires and which optional roles it discovers.
#[derive(Debug, Clone, Copy)]
pub struct PackageLayout {
    pub required: &'static [RequiredPart],
    pub optional: &'static [OptionalRole],
}

/// Options controlling how a package is opened and saved.
///
/// # Examples
///
/// ```rust
/// use opcedit::ooxml::opc::{OpenOptions, SaveCompression};
///
/// let options = OpenOptions::default()
///     .atomic_save(false)
///     .compression(SaveCompression::Deflated);
/// assert!(options.normalize_namespaces);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    /// Write the canonical namespace declarations onto each loaded part.
    pub normalize_namespaces: bool,
    /// Save through a temporary file that is renamed over the destination.
    pub atomic_save: bool,
    /// Compression for substituted entries.
    pub compression: SaveCompression,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            normalize_namespaces: true,
            atomic_save: true,
            compression: SaveCompression::Preserve,
        }
    }
}

impl OpenOptions {
    pub fn normalize_namespaces(mut self, on: bool) -> Self {
        self.normalize_namespaces = on;
        self
    }

    pub fn atomic_save(mut self, on: bool) -> Self {
        self.atomic_save = on;
        self
    }

    pub fn compression(mut self, compression: SaveCompression) -> Self {
        self.compression = compression;
        self
    }
}

/// An open OPC package with its loaded parts.
pub struct Package {
    reader: PhysPkgReader,
    entries: Vec<String>,
    manifest: ManifestIndex,
    required: Vec<Part>,
    optional: Vec<Part>,
    skipped: Vec<String>,
    edits: EditBuffer,
    options: OpenOptions,
}

impl Package {
    /// Open a package from disk.
    pub fn open<P: AsRef<Path>>(
        path: P,
        layout: &PackageLayout,
        options: OpenOptions,
    ) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "opening package");
        Self::load(PhysPkgReader::open(path)?, layout, options)
    }

    /// Open a package held in memory.
    pub fn from_bytes(data: Vec<u8>, layout: &PackageLayout, options: OpenOptions) -> Result<Self> {
        debug!(len = data.len(), "opening package from memory");
        Self::load(PhysPkgReader::from_bytes(data)?, layout, options)
    }

    fn load(mut reader: PhysPkgReader, layout: &PackageLayout, options: OpenOptions) -> Result<Self> {
        let manifest_bytes = PartLoader::load(&mut reader, CONTENT_TYPES_PATH)?
            .ok_or_else(|| OpcError::MissingPart(CONTENT_TYPES_PATH.to_string()))?;
        let manifest = ManifestIndex::parse(&manifest_bytes)?;

        let required = layout
            .required
            .iter()
            .map(|req| {
                PartLoader::load_required(&mut reader, req, options.normalize_namespaces)
                    .map(|part| part.with_content_type(manifest.content_type_for(req.path)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut optional: Vec<Part> = Vec::new();
        let mut skipped: Vec<String> = Vec::new();
        for role in layout.optional {
            for part_path in PartLoader::discover(&manifest, |name| role.matches(name)) {
                let claimed = required.iter().chain(optional.iter()).any(|p| p.path() == part_path)
                    || skipped.iter().any(|s| s == part_path);
                if claimed {
                    continue;
                }
                match PartLoader::load_optional(
                    &mut reader,
                    part_path,
                    role,
                    options.normalize_namespaces,
                )? {
                    Some(part) => {
                        optional.push(part.with_content_type(manifest.content_type_for(part_path)))
                    },
                    None => {
                        warn!(
                            part = %part_path,
                            role = ?role.role,
                            content_type = ?manifest.content_type_for(part_path),
                            "declared part missing from archive; skipped"
                        );
                        skipped.push(part_path.to_string());
                    },
                }
            }
        }

        let entries = reader.member_names();
        debug!(
            entries = entries.len(),
            overrides = manifest.overrides().len(),
            defaults = manifest.defaults().len(),
            required = required.len(),
            optional = optional.len(),
            skipped = skipped.len(),
            "package loaded"
        );

        Ok(Self {
            reader,
            entries,
            manifest,
            required,
            optional,
            skipped,
            edits: EditBuffer::new(),
            options,
        })
    }

    /// The required part in layout slot `slot`.
    ///
    /// Required parts are loaded in layout order and their absence fails the
    /// open, so every slot of the layout is populated.
    #[inline]
    pub(crate) fn required(&self, slot: usize) -> &Part {
        &self.required[slot]
    }

    #[inline]
    pub(crate) fn required_mut(&mut self, slot: usize) -> PartMut<'_> {
        PartMut::new(&mut self.required[slot])
    }

    /// Every loaded part, required parts first, then optional parts in
    /// discovery order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.required.iter().chain(self.optional.iter())
    }

    /// Loaded parts with the given role, in manifest order.
    pub fn parts_with_role(&self, role: PartRole) -> impl Iterator<Item = &Part> {
        self.parts().filter(move |p| p.role() == role)
    }

    /// Look up a loaded part by archive path.
    pub fn part(&self, path: &str) -> Option<&Part> {
        self.parts().find(|p| p.path() == path)
    }

    /// Tracked mutable access to a loaded part.
    pub fn part_mut(&mut self, path: &str) -> Option<PartMut<'_>> {
        self.required
            .iter_mut()
            .chain(self.optional.iter_mut())
            .find(|p| p.path() == path)
            .map(PartMut::new)
    }

    #[inline]
    pub fn manifest(&self) -> &ManifestIndex {
        &self.manifest
    }

    /// Archive entry names in original order.
    #[inline]
    pub fn entry_names(&self) -> &[String] {
        &self.entries
    }

    /// Optional parts declared in the manifest but absent from the archive.
    #[inline]
    pub fn skipped_parts(&self) -> &[String] {
        &self.skipped
    }

    #[inline]
    pub fn options(&self) -> &OpenOptions {
        &self.options
    }

    /// Pending replacements recorded so far.
    #[inline]
    pub fn edits(&self) -> &EditBuffer {
        &self.edits
    }

    /// Override the bytes written for an archive entry on the next save.
    ///
    /// If the entry is also a part mutated through [`PartMut`], the part's
    /// serialization at save time takes precedence.
    pub fn replace_entry(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.edits.set(path, bytes);
    }

    /// Read the original bytes of any archive entry.
    pub fn read_entry(&mut self, path: &str) -> Result<Vec<u8>> {
        self.reader.blob_for(path)
    }

    fn flush_dirty_parts(&mut self) {
        let dirty: Vec<(String, Vec<u8>)> = self
            .parts()
            .filter(|p| p.is_dirty())
            .map(|p| (p.path().to_string(), p.to_bytes()))
            .collect();
        for (path, bytes) in dirty {
            debug!(part = %path, "serializing modified part");
            self.edits.set(path, bytes);
        }
    }

    /// Write the package to any seekable sink and return the sink.
    pub fn write_to<W: Write + Seek>(&mut self, sink: W) -> Result<W> {
        self.flush_dirty_parts();
        PackageWriter::write(&mut self.reader, &self.edits, sink, self.options.compression)
    }

    /// Save the package to `path`.
    ///
    /// With [`OpenOptions::atomic_save`] the archive is written to a
    /// temporary file in the destination directory and renamed into place,
    /// so a failed save never leaves a truncated file behind. Saving over
    /// the file the package was opened from, under any spelling of its
    /// path, always goes through this route.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let over_source = self.is_source(path);

        if self.options.atomic_save || over_source {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            let sink = self.write_to(BufWriter::new(tmp.as_file_mut()))?;
            sink.into_inner().map_err(|e| e.into_error())?;
            tmp.persist(path)?;
        } else {
            let sink = self.write_to(BufWriter::new(File::create(path)?))?;
            sink.into_inner().map_err(|e| e.into_error())?;
        }

        debug!(path = %path.display(), "package saved");
        Ok(())
    }

    /// Whether `path` names the file the archive is read from.
    ///
    /// Spellings are compared after canonicalization, so `a/../doc.docx`
    /// and symlinks resolve to the source too. A destination that does not
    /// exist yet cannot be the source.
    fn is_source(&self, path: &Path) -> bool {
        let Some(source) = self.reader.source_path() else {
            return false;
        };
        if source == path {
            return true;
        }
        match (std::fs::canonicalize(source), std::fs::canonicalize(path)) {
            (Ok(source), Ok(path)) => source == path,
            _ => false,
        }
    }

    /// Write the package into a new in-memory buffer.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>> {
        Ok(self.write_to(Cursor::new(Vec::new()))?.into_inner())
    }

    /// Release the archive handle.
    pub fn close(self) {
        debug!("package closed");
    }
}
