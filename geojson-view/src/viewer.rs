//! Main window of the GeoJSON viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the open tabs (through a
//! [`Workspace`]) and implements [`eframe::App`] to draw the menu, toolbar,
//! tab strip, canvas and status bar.

use std::path::Path;

use eframe::App;
use geojson_core::{
    config::RenderConfig,
    loader,
    workspace::{Tab, WELCOME_TEXT, Workspace},
};
use glam::DVec2;

use crate::canvas;

const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const EXIT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

/// Text shown in the status bar for a pointer position.
pub fn coordinate_text(pointer: Option<DVec2>) -> String {
    match pointer {
        Some(p) => format!("Coordinates: X: {:.2}, Y: {:.2}", p.x, p.y),
        None => "Coordinates: None".to_string(),
    }
}

/// Main application state.
///
/// ### Fields
/// - `workspace` - Open tabs and the active-tab handle.
/// - `cfg` - Rendering defaults shared by every document.
/// - `pointer_world` - Pointer position over the active canvas, in world
///   units; `None` while the pointer is elsewhere.
/// - `last_error` - Message of the last failed load, until dismissed.
pub struct Viewer {
    workspace: Workspace,
    cfg: RenderConfig,
    pointer_world: Option<DVec2>,
    last_error: Option<String>,
}

impl Viewer {
    /// Creates a viewer showing only the Home tab.
    pub fn new(cfg: RenderConfig) -> Self {
        Self {
            workspace: Workspace::new(),
            cfg,
            pointer_world: None,
            last_error: None,
        }
    }

    /// Loads `path` into a new tab and activates it.
    ///
    /// A failed load is logged and kept for the error window; the open tabs
    /// are left as they were.
    ///
    /// ### Returns
    /// `true` if a tab was opened.
    pub fn open_path(&mut self, path: &Path) -> bool {
        match loader::load_file(path, &self.cfg) {
            Ok(doc) => {
                self.workspace.open_document(doc);
                true
            }
            Err(e) => {
                log::error!("failed to open {}: {e}", path.display());
                self.last_error = Some(format!("{}: {e}", path.display()));
                false
            }
        }
    }

    /// Asks the user for a `.geojson` file and opens it.
    fn open_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Open GeoJSON File")
            .add_filter("GeoJSON Files", &["geojson"])
            .pick_file()
        {
            self.open_path(&path);
        }
    }

    fn zoom_in(&mut self) {
        if !self.workspace.zoom_in(&self.cfg) {
            log::debug!("zoom in: no active document");
        }
    }

    fn zoom_out(&mut self) {
        if !self.workspace.zoom_out(&self.cfg) {
            log::debug!("zoom out: no active document");
        }
    }

    fn rotate(&mut self) {
        if !self.workspace.rotate() {
            log::debug!("rotate: no active document");
        }
    }

    fn fit(&mut self) {
        if !self.workspace.fit() {
            log::debug!("fit: no active document");
        }
    }

    /// Switches tabs. The pointer position belonged to the previous canvas.
    fn activate_tab(&mut self, index: usize) {
        if self.workspace.activate(index) {
            self.pointer_world = None;
        }
    }

    fn close_tab(&mut self, index: usize) {
        if let Some(tab) = self.workspace.close(index) {
            self.pointer_world = None;
            if let Tab::Document(doc) = tab {
                log::info!("closed {}", doc.title);
            }
        }
    }

    fn status_text(&self) -> String {
        coordinate_text(self.pointer_world)
    }

    /// Counts shown next to the coordinates for the active document.
    fn document_summary(&self) -> Option<String> {
        let doc = self.workspace.active_document()?;
        Some(format!(
            "features = {}  shapes = {}  skipped = {}  rotation = {}°",
            doc.feature_count,
            doc.shapes.len(),
            doc.skipped,
            doc.view.rotation_degrees()
        ))
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.open_dialog();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&EXIT_SHORTCUT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Builds the menu bar (File: Open, Exit).
    fn ui_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add(
                            egui::Button::new("Open GeoJSON File")
                                .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT)),
                        )
                        .clicked()
                    {
                        self.open_dialog();
                    }
                    if ui
                        .add(
                            egui::Button::new("Exit")
                                .shortcut_text(ctx.format_shortcut(&EXIT_SHORTCUT)),
                        )
                        .clicked()
                    {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    /// Builds the toolbar (zoom and rotate for the active document).
    fn ui_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Zoom In").clicked() {
                    self.zoom_in();
                }
                if ui.button("Zoom Out").clicked() {
                    self.zoom_out();
                }
                if ui.button("Rotate 90 degrees").clicked() {
                    self.rotate();
                }
                if ui.button("Fit to View").clicked() {
                    self.fit();
                }
            });
        });
    }

    /// Builds the tab strip with one close button per tab.
    fn ui_tab_bar(&mut self, ctx: &egui::Context) {
        let mut to_activate = None;
        let mut to_close = None;

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (i, tab) in self.workspace.tabs().iter().enumerate() {
                    let selected = self.workspace.active_index() == Some(i);
                    if ui.selectable_label(selected, tab.title()).clicked() {
                        to_activate = Some(i);
                    }
                    if ui.small_button("×").on_hover_text("Close tab").clicked() {
                        to_close = Some(i);
                    }
                    ui.separator();
                }
            });
        });

        if let Some(i) = to_activate {
            self.activate_tab(i);
        }
        if let Some(i) = to_close {
            self.close_tab(i);
        }
    }

    /// Builds the bottom status bar (pointer coordinates, document counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_text());
                if let Some(summary) = self.document_summary() {
                    ui.separator();
                    ui.label(summary);
                }
            });
        });
    }

    /// Builds the central panel: the active document's canvas, or the
    /// welcome page.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let has_tab = self.workspace.active_tab().is_some();
            match self.workspace.active_document_mut() {
                Some(doc) => {
                    self.pointer_world = canvas::show(ui, doc, &self.cfg);
                }
                None if has_tab => {
                    self.pointer_world = None;
                    ui.centered_and_justified(|ui| {
                        ui.heading(WELCOME_TEXT);
                    });
                }
                None => {
                    self.pointer_world = None;
                    ui.centered_and_justified(|ui| {
                        ui.label("Open a GeoJSON file from the File menu.");
                    });
                }
            }
        });
    }

    /// Shows the last load error until the user dismisses it.
    fn ui_error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.last_error.as_deref() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Could not open file")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.last_error = None;
        }
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.ui_menu_bar(ctx);
        self.ui_toolbar(ctx);
        self.ui_tab_bar(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
        self.ui_error_window(ctx);
    }
}
