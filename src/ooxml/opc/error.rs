/// Error types for OPC package operations
use crate::common::xml::XmlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Manifest parse error: {0}")]
    ManifestParse(String),

    #[error("Required part missing from package: {0}")]
    MissingPart(String),

    #[error("XML error in part {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: XmlError,
    },

    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OpcError {
    /// Attach the archive path of the part that failed to parse.
    pub(crate) fn xml(part: &str, source: XmlError) -> Self {
        OpcError::Xml {
            part: part.to_string(),
            source,
        }
    }
}

impl From<tempfile::PersistError> for OpcError {
    fn from(err: tempfile::PersistError) -> Self {
        OpcError::IoError(err.error)
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
