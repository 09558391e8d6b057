//! Page model
//!
//! The elements the dashboard logic mutates: section containers, nav links,
//! page title, sidebar and overlay markers, the device tier marker and the
//! chart canvases. The renderer reads it back.

use crate::charts::{CanvasHost, CanvasId};
use crate::device::{DeviceTier, TierMarker};
use crate::layout::LayoutSurface;
use crate::navigation::{Section, SectionHost};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    containers: BTreeSet<Section>,
    visible: BTreeSet<Section>,
    nav_active: BTreeSet<Section>,
    page_title: String,
    tier_marker: Option<DeviceTier>,
    sidebar_collapsed: bool,
    sidebar_open: bool,
    overlay: Option<bool>,
    overlays_created: usize,
    scroll_locked: bool,
    canvases: BTreeMap<CanvasId, Section>,
}

impl Document {
    /// Every section container, with the dashboard and analytics charts.
    pub fn standard() -> Self {
        let mut canvases = BTreeMap::new();
        canvases.insert(CanvasId::Sales, Section::Dashboard);
        canvases.insert(CanvasId::Products, Section::Dashboard);
        canvases.insert(CanvasId::Revenue, Section::Analytics);
        canvases.insert(CanvasId::Category, Section::Analytics);

        Self {
            containers: Section::ALL.into_iter().collect(),
            visible: [Section::Dashboard].into_iter().collect(),
            nav_active: [Section::Dashboard].into_iter().collect(),
            page_title: Section::Dashboard.title().to_string(),
            canvases,
            ..Self::default()
        }
    }

    pub fn remove_container(&mut self, section: Section) {
        self.containers.remove(&section);
    }

    pub fn remove_canvas(&mut self, canvas: CanvasId) {
        self.canvases.remove(&canvas);
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(&section)
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> {
        self.visible.iter()
    }

    pub fn is_nav_active(&self, section: Section) -> bool {
        self.nav_active.contains(&section)
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn tier_marker(&self) -> Option<DeviceTier> {
        self.tier_marker
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the overlay exists and carries the active marker.
    pub fn is_overlay_active(&self) -> bool {
        self.overlay == Some(true)
    }

    pub fn overlays_created(&self) -> usize {
        self.overlays_created
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn canvases_in(&self, section: Section) -> Vec<CanvasId> {
        self.canvases
            .iter()
            .filter(|(_, owner)| **owner == section)
            .map(|(canvas, _)| *canvas)
            .collect()
    }
}

impl SectionHost for Document {
    fn has_section(&self, section: Section) -> bool {
        self.containers.contains(&section)
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        if !self.containers.contains(&section) {
            return;
        }
        if visible {
            self.visible.insert(section);
        } else {
            self.visible.remove(&section);
        }
    }

    fn clear_nav_active(&mut self) {
        self.nav_active.clear();
    }

    fn set_nav_active(&mut self, section: Section) {
        self.nav_active.insert(section);
    }

    fn set_page_title(&mut self, title: &str) {
        self.page_title = title.to_string();
    }
}

impl LayoutSurface for Document {
    fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    fn create_overlay(&mut self) {
        self.overlay = Some(false);
        self.overlays_created += 1;
    }

    fn set_mobile_open(&mut self, open: bool) {
        self.sidebar_open = open;
        if let Some(active) = self.overlay.as_mut() {
            *active = open;
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

impl TierMarker for Document {
    fn set_tier_marker(&mut self, tier: DeviceTier) {
        self.tier_marker = Some(tier);
    }
}

impl CanvasHost for Document {
    fn has_canvas(&self, canvas: CanvasId) -> bool {
        self.canvases.contains_key(&canvas)
    }

    /// A canvas is in view while its section is shown.
    fn is_in_viewport(&self, canvas: CanvasId) -> bool {
        self.canvases
            .get(&canvas)
            .is_some_and(|section| self.visible.contains(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvases_follow_section_visibility() {
        let mut document = Document::standard();
        assert!(document.is_in_viewport(CanvasId::Sales));
        assert!(!document.is_in_viewport(CanvasId::Revenue));

        document.set_section_visible(Section::Dashboard, false);
        document.set_section_visible(Section::Analytics, true);
        assert!(document.is_in_viewport(CanvasId::Category));
        assert!(!document.is_in_viewport(CanvasId::Products));
    }

    #[test]
    fn overlay_marker_tracks_menu() {
        let mut document = Document::standard();
        document.set_mobile_open(true);
        assert!(!document.has_overlay());

        document.create_overlay();
        document.set_mobile_open(true);
        assert!(document.is_overlay_active());
        assert!(document.is_sidebar_open());

        document.set_mobile_open(false);
        assert!(!document.is_overlay_active());
        assert_eq!(document.overlays_created(), 1);
    }

    #[test]
    fn removed_canvas_is_absent() {
        let mut document = Document::standard();
        document.remove_canvas(CanvasId::Revenue);
        assert!(!document.has_canvas(CanvasId::Revenue));
        assert_eq!(document.canvases_in(Section::Analytics), vec![CanvasId::Category]);
    }
}
