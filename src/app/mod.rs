mod state;
mod ui;

use std::sync::mpsc::{channel, TryRecvError};

use chrono::Local;
use eframe::{egui, App};
use tracing::{info, warn};

use crate::config::Settings;
use crate::upload::{validate, UploadClient, UploadSelection};
pub use state::{AppState, RecentUploadEntry, StatusKind};

pub struct DocDrop {
    selection: UploadSelection,
    state: AppState,
    client: UploadClient,
}

impl DocDrop {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!(server = %settings.server_url, "starting DocDrop");
        Self {
            selection: UploadSelection::default(),
            state: AppState::default(),
            client: UploadClient::new(settings.server_url),
        }
    }

    /// Validates the current selection and, if it passes, hands the
    /// upload to a worker thread. Exactly one request per call; the
    /// outcome comes back over the channel drained in `update_state`.
    pub fn submit(&mut self) {
        let (document_type, path) = match validate(&self.selection) {
            Ok(validated) => validated,
            Err(e) => {
                warn!("submission rejected: {e}");
                self.state.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };

        self.state.is_uploading = true;
        self.state
            .set_status(StatusKind::Uploading, "Uploading your document...");

        let (sender, receiver) = channel();
        self.state.result_receiver = Some(receiver);

        let client = self.client.clone();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(client.upload(document_type, &path));
            sender.send(result).unwrap_or_default();
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.state.result_receiver else {
            return;
        };

        // Keep repainting while a request is in flight so the result
        // is picked up without waiting for user input.
        ctx.request_repaint();

        match receiver.try_recv() {
            Ok(Ok(receipt)) => {
                info!(file = %receipt.file_name, "upload complete");
                self.state.result_receiver = None;
                self.state.is_uploading = false;
                self.state
                    .set_status(StatusKind::Success, "File processed successfully!");
                self.state.record_upload(RecentUploadEntry::new(
                    receipt.file_name,
                    receipt.document_type,
                    Local::now(),
                ));
                self.selection.clear();
            }
            Ok(Err(e)) => {
                self.state.result_receiver = None;
                self.state.is_uploading = false;
                self.state.set_status(StatusKind::Error, e.to_string());
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("upload worker exited without a result");
                self.state.result_receiver = None;
                self.state.is_uploading = false;
                self.state
                    .set_status(StatusKind::Error, "Network error. Please try again.");
            }
        }
    }

    /// Window-level drag-and-drop. Dropping a file replaces the current
    /// file selection; the document type stays as picked.
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(path) = dropped.into_iter().find_map(|f| f.path) else {
            return;
        };

        if self.state.is_uploading {
            self.state.set_status(
                StatusKind::Warning,
                "Please wait for the current upload to finish.",
            );
            return;
        }

        info!(file = %path.display(), "file dropped onto window");
        self.selection.set_file(path);
    }
}

impl App for DocDrop {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.update_state(ctx);
        self.render(ctx);
    }
}
