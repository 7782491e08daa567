use std::fs;
use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, error, info};

use super::types::{
    DocumentType, UploadError, UploadReceipt, UploadResult, UploadSelection, ValidationError,
};

pub const UPLOAD_PATH: &str = "/api/upload";

const UNKNOWN_ERROR: &str = "Unknown error occurred";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Checks the selection preconditions in fixed order: document type
/// first, then file. Never touches the network.
pub fn validate(selection: &UploadSelection) -> Result<(DocumentType, PathBuf), ValidationError> {
    let document_type = selection
        .document_type
        .ok_or(ValidationError::MissingDocumentType)?;
    let file = selection
        .file
        .clone()
        .ok_or(ValidationError::MissingFile)?;
    Ok((document_type, file))
}

/// Maps a completed HTTP exchange to an upload outcome. Pure over the
/// status code and body text so response handling is testable without
/// a server.
pub fn interpret_response(status: u16, body: &str) -> Result<(), UploadError> {
    if (200..300).contains(&status) {
        debug!(status, body, "upload accepted");
        return Ok(());
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    Err(UploadError::Rejected { status, message })
}

#[derive(Clone)]
pub struct UploadClient {
    server_url: String,
}

impl UploadClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server_url, UPLOAD_PATH)
    }

    /// Issues exactly one upload request for an already validated
    /// selection and interprets the result.
    pub async fn upload(&self, document_type: DocumentType, path: &Path) -> UploadResult {
        let file_name = file_name_of(path)?;

        let bytes = fs::read(path).map_err(|source| {
            error!("failed to read {}: {source}", path.display());
            UploadError::File {
                name: file_name.clone(),
                source,
            }
        })?;

        info!(
            file = %file_name,
            doc_type = document_type.wire_value(),
            size = bytes.len(),
            "uploading document"
        );

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.clone()))
            .text("docType", document_type.wire_value());

        let client = reqwest::Client::new();
        let response = client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("upload request failed: {e}");
                UploadError::Network(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        interpret_response(status, &body).map(|_| UploadReceipt {
            file_name,
            document_type,
        })
    }
}

fn file_name_of(path: &Path) -> Result<String, UploadError> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| UploadError::File {
            name: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validation_checks_document_type_before_file() {
        let empty = UploadSelection::default();
        assert_eq!(
            validate(&empty),
            Err(ValidationError::MissingDocumentType)
        );
    }

    #[test]
    fn validation_requires_a_file() {
        let selection = UploadSelection {
            document_type: Some(DocumentType::Pdf),
            ..Default::default()
        };
        assert_eq!(validate(&selection), Err(ValidationError::MissingFile));
    }

    #[test]
    fn validation_passes_a_complete_selection() {
        let mut selection = UploadSelection::default();
        selection.document_type = Some(DocumentType::Image);
        selection.file = Some(PathBuf::from("scan.png"));

        let (doc_type, file) = validate(&selection).unwrap();
        assert_eq!(doc_type, DocumentType::Image);
        assert_eq!(file, PathBuf::from("scan.png"));
    }

    #[test]
    fn any_2xx_is_a_success() {
        assert!(interpret_response(200, "{}").is_ok());
        assert!(interpret_response(201, r#"{"id": 7}"#).is_ok());
        assert!(interpret_response(204, "").is_ok());
    }

    #[test]
    fn server_message_is_surfaced() {
        let err = interpret_response(413, r#"{"message": "too large"}"#).unwrap_err();
        assert!(err.to_string().contains("too large"));
        match err {
            UploadError::Rejected { status, .. } => assert_eq!(status, 413),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_message() {
        let err = interpret_response(500, "<html>Internal Server Error</html>").unwrap_err();
        assert!(err.to_string().contains("Unknown error occurred"));
    }

    #[test]
    fn missing_message_field_falls_back_to_generic_message() {
        let err = interpret_response(400, r#"{"detail": "nope"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown error occurred"));

        let err = interpret_response(502, "").unwrap_err();
        assert!(err.to_string().contains("Unknown error occurred"));
    }

    #[test]
    fn endpoint_joins_server_url_and_upload_path() {
        let client = UploadClient::new("http://intake.example:8000/");
        assert_eq!(client.endpoint(), "http://intake.example:8000/api/upload");
    }

    #[test]
    fn unreadable_file_never_reaches_the_network() {
        let client = UploadClient::new("http://127.0.0.1:1");
        let rt = tokio::runtime::Runtime::new().unwrap();

        let result = rt.block_on(client.upload(
            DocumentType::Pdf,
            Path::new("/definitely/not/here/report.pdf"),
        ));
        match result {
            Err(UploadError::File { name, .. }) => assert_eq!(name, "report.pdf"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 test").unwrap();

        // Port 1 is reserved and closed on any sane machine.
        let client = UploadClient::new("http://127.0.0.1:1");
        let rt = tokio::runtime::Runtime::new().unwrap();

        let result = rt.block_on(client.upload(DocumentType::Pdf, file.path()));
        let err = result.unwrap_err();
        assert!(matches!(err, UploadError::Network(_)));
        assert_eq!(err.to_string(), "Network error. Please try again.");
    }
}
