use std::fmt;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Closed set of document classifications accepted by the intake endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Docx,
    Image,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [Self::Pdf, Self::Docx, Self::Image];

    /// Value sent in the `docType` form field.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Image => "image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Image => "Image",
        }
    }

    /// File dialog filter extensions for this type.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Docx => &["doc", "docx"],
            Self::Image => &["png", "jpg", "jpeg", "gif", "webp"],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user has picked so far. Captured from the widgets, consumed
/// at submission time, never persisted.
#[derive(Debug, Clone, Default)]
pub struct UploadSelection {
    pub document_type: Option<DocumentType>,
    pub file: Option<PathBuf>,
    pub file_size: Option<u64>,
}

impl UploadSelection {
    pub fn set_file(&mut self, path: PathBuf) {
        self.file_size = fs::metadata(&path).map(|m| m.len()).ok();
        self.file = Some(path);
    }

    pub fn file_name(&self) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a document type.")]
    MissingDocumentType,
    #[error("Please select a file to upload.")]
    MissingFile,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Upload failed. {message}")]
    Rejected { status: u16, message: String },
    #[error("Network error. Please try again.")]
    Network(#[source] reqwest::Error),
    #[error("Could not read {name}. Please try again.")]
    File {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returned by the client on a 2xx response. The timestamp for the
/// history row is stamped by the UI thread on receipt.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub file_name: String,
    pub document_type: DocumentType,
}

pub type UploadResult = Result<UploadReceipt, UploadError>;
