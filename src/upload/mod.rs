mod client;
mod types;

pub use client::{interpret_response, validate, UploadClient};
pub use types::{
    DocumentType, UploadError, UploadReceipt, UploadResult, UploadSelection, ValidationError,
};
