use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local};
use egui::Color32;

use crate::upload::{DocumentType, UploadResult};
use crate::utils::color::ColorExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ready,
    Uploading,
    Success,
    Error,
    Warning,
}

/// Visual treatment of a status kind. Pure data so the mapping is
/// testable without spinning up a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: Color32,
    pub foreground: Color32,
    pub pulsing: bool,
}

impl StatusKind {
    pub fn style(&self) -> StatusStyle {
        let (background, foreground, pulsing) = match self {
            Self::Ready => ("#f3f4f6", "#1f2937", false),
            Self::Uploading => ("#dbeafe", "#1e40af", true),
            Self::Success => ("#d1fae5", "#065f46", false),
            Self::Error => ("#fee2e2", "#991b1b", false),
            Self::Warning => ("#fef3c7", "#92400e", false),
        };
        StatusStyle {
            background: hex(background),
            foreground: hex(foreground),
            pulsing,
        }
    }
}

/// The single active feedback line. Overwritten whole on every
/// validation or submission event, never queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            kind: StatusKind::Ready,
            message: "Ready to upload".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUploadEntry {
    pub file_name: String,
    pub document_type: DocumentType,
    pub uploaded_at: String,
}

impl RecentUploadEntry {
    pub fn new(
        file_name: String,
        document_type: DocumentType,
        uploaded_at: DateTime<Local>,
    ) -> Self {
        Self {
            file_name,
            document_type,
            uploaded_at: uploaded_at.format("%H:%M:%S").to_string(),
        }
    }

    /// Renderable form of the history row, kept apart from the egui
    /// calls that draw it.
    pub fn row(&self) -> RecentUploadRow {
        let (badge_background, badge_foreground) = badge_palette(self.document_type);
        RecentUploadRow {
            title: self.file_name.clone(),
            subtitle: format!("Uploaded at {}", self.uploaded_at),
            badge: self.document_type.label(),
            badge_background,
            badge_foreground,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUploadRow {
    pub title: String,
    pub subtitle: String,
    pub badge: &'static str,
    pub badge_background: Color32,
    pub badge_foreground: Color32,
}

fn badge_palette(document_type: DocumentType) -> (Color32, Color32) {
    match document_type {
        DocumentType::Pdf => (hex("#fee2e2"), hex("#991b1b")),
        DocumentType::Docx => (hex("#e0e7ff"), hex("#3730a3")),
        DocumentType::Image => (hex("#fef3c7"), hex("#92400e")),
    }
}

fn hex(code: &str) -> Color32 {
    Color32::from_hex(code).unwrap_or(Color32::GRAY)
}

#[derive(Default)]
pub struct AppState {
    pub status: StatusLine,
    pub recent_uploads: Vec<RecentUploadEntry>,
    pub is_uploading: bool,
    pub result_receiver: Option<Receiver<UploadResult>>,
}

impl AppState {
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = StatusLine {
            kind,
            message: message.into(),
        };
    }

    /// Prepends a history entry; newest first, unbounded.
    pub fn record_upload(&mut self, entry: RecentUploadEntry) {
        self.recent_uploads.insert(0, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 14, 30, 5).unwrap()
    }

    #[test]
    fn initial_status_is_ready() {
        let state = AppState::default();
        assert_eq!(state.status.kind, StatusKind::Ready);
        assert_eq!(state.status.message, "Ready to upload");
        assert!(state.recent_uploads.is_empty());
        assert!(!state.is_uploading);
    }

    #[test]
    fn set_status_is_idempotent() {
        let mut state = AppState::default();
        state.set_status(StatusKind::Error, "Please select a file to upload.");
        let first = state.status.clone();
        state.set_status(StatusKind::Error, "Please select a file to upload.");
        assert_eq!(state.status, first);
        assert_eq!(state.status.kind.style(), first.kind.style());
    }

    #[test]
    fn only_uploading_pulses() {
        assert!(StatusKind::Uploading.style().pulsing);
        for kind in [
            StatusKind::Ready,
            StatusKind::Success,
            StatusKind::Error,
            StatusKind::Warning,
        ] {
            assert!(!kind.style().pulsing);
        }
    }

    #[test]
    fn each_kind_has_a_distinct_fixed_style() {
        let kinds = [
            StatusKind::Ready,
            StatusKind::Uploading,
            StatusKind::Success,
            StatusKind::Error,
            StatusKind::Warning,
        ];
        for (i, a) in kinds.iter().enumerate() {
            assert_eq!(a.style(), a.style());
            for b in &kinds[i + 1..] {
                assert_ne!(a.style().background, b.style().background);
            }
        }
    }

    #[test]
    fn recent_uploads_are_newest_first() {
        let mut state = AppState::default();
        state.record_upload(RecentUploadEntry::new(
            "first.pdf".into(),
            DocumentType::Pdf,
            fixed_time(),
        ));
        state.record_upload(RecentUploadEntry::new(
            "second.docx".into(),
            DocumentType::Docx,
            fixed_time(),
        ));

        assert_eq!(state.recent_uploads.len(), 2);
        assert_eq!(state.recent_uploads[0].file_name, "second.docx");
        assert_eq!(state.recent_uploads[1].file_name, "first.pdf");
    }

    #[test]
    fn history_row_carries_name_time_and_badge() {
        let entry =
            RecentUploadEntry::new("scan.png".into(), DocumentType::Image, fixed_time());
        let row = entry.row();

        assert_eq!(row.title, "scan.png");
        assert_eq!(row.subtitle, "Uploaded at 14:30:05");
        assert_eq!(row.badge, "Image");
    }

    #[test]
    fn badge_colors_differ_per_document_type() {
        let pdf = RecentUploadEntry::new("a.pdf".into(), DocumentType::Pdf, fixed_time()).row();
        let docx = RecentUploadEntry::new("a.docx".into(), DocumentType::Docx, fixed_time()).row();
        let image = RecentUploadEntry::new("a.png".into(), DocumentType::Image, fixed_time()).row();

        assert_ne!(pdf.badge_background, docx.badge_background);
        assert_ne!(docx.badge_background, image.badge_background);
        assert_ne!(pdf.badge_background, image.badge_background);
    }
}
