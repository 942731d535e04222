//! Tabs and the active-document handle.
//!
//! The shell never asks the GUI toolkit which widget is current; it asks
//! the [`Workspace`], which owns every tab and knows which one is active.

use crate::{config::RenderConfig, document::Document};

pub const HOME_TITLE: &str = "Home";
pub const WELCOME_TEXT: &str = "Welcome to GeoJSON Visualizer!";

#[derive(Clone, Debug)]
pub enum Tab {
    /// The welcome page. Has no canvas.
    Home,
    Document(Box<Document>),
}

impl Tab {
    pub fn title(&self) -> &str {
        match self {
            Tab::Home => HOME_TITLE,
            Tab::Document(doc) => &doc.title,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Tab::Home => None,
            Tab::Document(doc) => Some(doc.as_ref()),
        }
    }

    pub fn document_mut(&mut self) -> Option<&mut Document> {
        match self {
            Tab::Home => None,
            Tab::Document(doc) => Some(doc.as_mut()),
        }
    }
}

/// All open tabs plus the index of the active one.
#[derive(Clone, Debug)]
pub struct Workspace {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// A workspace showing only the Home tab.
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab::Home],
            active: Some(0),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    /// The active document, or `None` when Home or nothing is active.
    pub fn active_document(&self) -> Option<&Document> {
        self.active_tab().and_then(Tab::document)
    }

    pub fn active_document_mut(&mut self) -> Option<&mut Document> {
        let i = self.active?;
        self.tabs.get_mut(i).and_then(Tab::document_mut)
    }

    /// Makes tab `index` active.
    ///
    /// ### Returns
    /// `false` if `index` is out of range.
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    /// Adds a document tab at the end and activates it.
    ///
    /// ### Returns
    /// The index of the new tab.
    pub fn open_document(&mut self, doc: Document) -> usize {
        self.tabs.push(Tab::Document(Box::new(doc)));
        let index = self.tabs.len() - 1;
        self.active = Some(index);
        index
    }

    /// Removes tab `index`.
    ///
    /// If the active tab is closed, the tab that slides into its place
    /// becomes active, or the new last tab if it was the last one. Closing
    /// the only tab leaves nothing active.
    ///
    /// ### Returns
    /// The removed tab, or `None` if `index` is out of range.
    pub fn close(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);

        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(a) if a > index => Some(a - 1),
            Some(a) if a == index => Some(a.min(self.tabs.len() - 1)),
            other => other,
        };
        Some(tab)
    }

    /// Zooms the active document in. No-op without one.
    pub fn zoom_in(&mut self, cfg: &RenderConfig) -> bool {
        self.with_active_view(|doc| doc.view.zoom_in(cfg))
    }

    /// Zooms the active document out. No-op without one.
    pub fn zoom_out(&mut self, cfg: &RenderConfig) -> bool {
        self.with_active_view(|doc| doc.view.zoom_out(cfg))
    }

    /// Rotates the active document 90 degrees clockwise. No-op without one.
    pub fn rotate(&mut self) -> bool {
        self.with_active_view(|doc| doc.view.rotate_quarter())
    }

    /// Refits the active document to its shapes on the next frame. No-op
    /// without one.
    pub fn fit(&mut self) -> bool {
        self.with_active_view(Document::request_fit)
    }

    fn with_active_view(&mut self, f: impl FnOnce(&mut Document)) -> bool {
        match self.active_document_mut() {
            Some(doc) => {
                f(doc);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::Style,
        types::{Coord, Feature, Geometry},
        view::ViewTransform,
    };

    fn doc(title: &str) -> Document {
        let features = [Feature::new(
            Geometry::Point(Coord::new(1.0, 1.0)),
            Style::default(),
        )];
        Document::from_features(title, None, &features, 0, &RenderConfig::default())
    }

    fn titles(ws: &Workspace) -> Vec<&str> {
        ws.tabs().iter().map(Tab::title).collect()
    }

    #[test]
    fn starts_with_active_home() {
        let ws = Workspace::new();
        assert_eq!(titles(&ws), vec![HOME_TITLE]);
        assert_eq!(ws.active_index(), Some(0));
        assert!(ws.active_document().is_none());
    }

    #[test]
    fn open_document_activates_new_tab() {
        let mut ws = Workspace::new();
        let i = ws.open_document(doc("a.geojson"));

        assert_eq!(i, 1);
        assert_eq!(ws.active_index(), Some(1));
        assert_eq!(ws.active_document().unwrap().title, "a.geojson");
    }

    #[test]
    fn transforms_without_document_are_noops() {
        let cfg = RenderConfig::default();
        let mut ws = Workspace::new();

        assert!(!ws.zoom_in(&cfg));
        assert!(!ws.zoom_out(&cfg));
        assert!(!ws.rotate());
        assert!(!ws.fit());

        ws.close(0);
        assert!(ws.is_empty());
        assert!(!ws.rotate());
    }

    #[test]
    fn transforms_touch_only_the_active_document() {
        let cfg = RenderConfig::default();
        let mut ws = Workspace::new();
        ws.open_document(doc("a"));
        ws.open_document(doc("b"));

        assert!(ws.zoom_in(&cfg));
        assert!(ws.rotate());

        let b = ws.tabs()[2].document().unwrap();
        assert!((b.view.zoom - 1.1).abs() < 1e-12);
        assert_eq!(b.view.quarter_turns, 1);

        let a = ws.tabs()[1].document().unwrap();
        assert_eq!(a.view, ViewTransform::default());
    }

    #[test]
    fn fit_requests_refit_of_active_document() {
        let cfg = RenderConfig::default();
        let viewport = glam::DVec2::new(200.0, 100.0);
        let mut ws = Workspace::new();
        ws.open_document(doc("a"));
        ws.open_document(doc("b"));
        for i in 1..=2 {
            ws.activate(i);
            assert!(ws.active_document_mut().unwrap().fit_if_needed(viewport, &cfg));
        }

        ws.zoom_in(&cfg);
        assert!(ws.fit());

        let b = ws.active_document_mut().unwrap();
        assert!(b.needs_fit());
        assert!(b.fit_if_needed(viewport, &cfg));
        assert!(!ws.tabs()[1].document().unwrap().needs_fit());
    }

    #[test]
    fn close_moves_active_to_neighbour() {
        let mut ws = Workspace::new();
        ws.open_document(doc("a"));
        ws.open_document(doc("b"));
        ws.open_document(doc("c"));

        // Close an earlier tab: active index shifts with its tab.
        ws.close(1);
        assert_eq!(titles(&ws), vec![HOME_TITLE, "b", "c"]);
        assert_eq!(ws.active_tab().unwrap().title(), "c");

        // Close the active last tab: the new last becomes active.
        ws.close(2);
        assert_eq!(ws.active_tab().unwrap().title(), "b");

        // Close the active middle tab: the right neighbour takes over.
        ws.open_document(doc("d"));
        ws.activate(1);
        ws.close(1);
        assert_eq!(ws.active_tab().unwrap().title(), "d");

        // Close a later, inactive tab.
        ws.activate(0);
        ws.close(1);
        assert_eq!(ws.active_index(), Some(0));

        ws.close(0);
        assert_eq!(ws.active_index(), None);
        assert!(ws.close(0).is_none());
    }

    #[test]
    fn activate_rejects_out_of_range() {
        let mut ws = Workspace::new();
        assert!(!ws.activate(3));
        assert_eq!(ws.active_index(), Some(0));
    }
}
