mod app;
mod config;
mod upload;
mod utils;

use eframe::CreationContext;
use tracing_subscriber::EnvFilter;

use app::DocDrop;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load_settings();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "DocDrop",
        options,
        Box::new(move |cc: &CreationContext| Box::new(DocDrop::new(cc, settings))),
    ) {
        tracing::error!("failed to start the UI: {e}");
    }
}
