//! Application entry point for the GeoJSON viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod canvas;
mod viewer;

use std::path::PathBuf;

use clap::Parser;
use geojson_core::config::RenderConfig;
use viewer::Viewer;

/// Desktop viewer for GeoJSON feature collections.
#[derive(Parser, Debug)]
#[command(name = "geojson_viewer", version)]
struct Args {
    /// GeoJSON files to open at start-up, one tab each.
    files: Vec<PathBuf>,
}

/// Starts the native eframe application.
///
/// Log output goes to stderr and defaults to `info`; override it with
/// `RUST_LOG`.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("GeoJSON Viewer")
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GeoJSON Viewer",
        options,
        Box::new(move |_cc| {
            let mut viewer = Viewer::new(RenderConfig::default());
            // A file that fails to load is reported in the window, not fatal.
            for path in &args.files {
                viewer.open_path(path);
            }
            Ok(Box::new(viewer))
        }),
    )
}
