use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

use super::state::StatusKind;
use super::DocDrop;
use crate::upload::DocumentType;
use crate::utils::file_size::format_size;

const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);

impl DocDrop {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("DocDrop");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Send documents to the intake service")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_form(ctx, ui);
                    ui.add_space(20.0);

                    ui.vertical_centered(|ui| {
                        ui.add_enabled_ui(!self.state.is_uploading, |ui| {
                            let button = egui::Button::new("📤 Upload Document")
                                .min_size(egui::vec2(200.0, 40.0));
                            if ui.add(button).clicked() {
                                self.submit();
                            }
                        });
                    });

                    ui.add_space(20.0);
                    self.render_status(ui);
                    ui.add_space(15.0);
                    self.render_recent_uploads(ui);
                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_form(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label("Document type");
            ui.add_space(4.0);

            egui::ComboBox::from_id_source("document_type")
                .width(200.0)
                .selected_text(
                    self.selection
                        .document_type
                        .map(|t| t.label())
                        .unwrap_or("Select a type..."),
                )
                .show_ui(ui, |ui| {
                    for doc_type in DocumentType::ALL {
                        ui.selectable_value(
                            &mut self.selection.document_type,
                            Some(doc_type),
                            doc_type.label(),
                        );
                    }
                });

            ui.add_space(12.0);

            let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
            let stroke = if hovering_files {
                egui::Stroke::new(2.0, ACCENT)
            } else {
                egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
            };

            egui::Frame::none()
                .stroke(stroke)
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(16.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(if hovering_files {
                            "Drop it here"
                        } else {
                            "Drag a file anywhere in this window, or"
                        });
                        ui.add_space(6.0);
                        if ui.button("📁 Browse Files").clicked() {
                            self.pick_file();
                        }
                    });
                });

            if let Some(name) = self.selection.file_name() {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("🗋");
                    ui.label(RichText::new(name).strong());
                    if let Some(size) = self.selection.file_size {
                        ui.label(
                            RichText::new(format_size(size))
                                .color(ui.visuals().text_color().gamma_multiply(0.6)),
                        );
                    }
                });
            }
        });
    }

    fn pick_file(&mut self) {
        if self.state.is_uploading {
            self.state.set_status(
                StatusKind::Warning,
                "Please wait for the current upload to finish.",
            );
            return;
        }

        let mut dialog = FileDialog::new();
        if let Some(doc_type) = self.selection.document_type {
            dialog = dialog.add_filter(doc_type.label(), doc_type.extensions());
        }
        if let Some(path) = dialog.pick_file() {
            self.selection.set_file(path);
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let style = self.state.status.kind.style();
        egui::Frame::none()
            .fill(style.background)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if style.pulsing {
                        ui.add(egui::Spinner::new().color(style.foreground));
                    }
                    ui.label(RichText::new(&self.state.status.message).color(style.foreground));
                });
            });
    }

    fn render_recent_uploads(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Recent uploads").strong());
            ui.add_space(6.0);

            if self.state.recent_uploads.is_empty() {
                ui.label(
                    RichText::new("No uploads yet")
                        .italics()
                        .color(ui.visuals().text_color().gamma_multiply(0.5)),
                );
                return;
            }

            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    for entry in &self.state.recent_uploads {
                        let row = entry.row();
                        ui.horizontal(|ui| {
                            ui.label("🗋");
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&row.title).strong());
                                ui.label(
                                    RichText::new(&row.subtitle)
                                        .small()
                                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                                );
                            });
                            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                                egui::Frame::none()
                                    .fill(row.badge_background)
                                    .rounding(egui::Rounding::same(10.0))
                                    .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                                    .show(ui, |ui| {
                                        ui.label(
                                            RichText::new(row.badge)
                                                .small()
                                                .color(row.badge_foreground),
                                        );
                                    });
                            });
                        });
                        ui.add_space(4.0);
                    }
                });
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let footer_width = 320.0;
        let indent = (ui.available_width() - footer_width) / 2.0;

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.scope(|ui| {
                ui.set_width(footer_width);
                ui.horizontal_centered(|ui| {
                    ui.label("Sending to");
                    if ui
                        .add(
                            egui::Label::new(RichText::new(self.client.endpoint()).color(ACCENT))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        let _ = open::that(self.client.server_url());
                    }
                });
            });
        });
    }
}
