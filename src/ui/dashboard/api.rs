//! Public dashboard operations and the initialisation lifecycle.

use super::state::{Dashboard, Deferred};
use crate::consts::cli_consts::timers::refresh_delay;
use crate::device::{DeviceTier, apply_device_tier};
use crate::live_data::update_recent_orders;
use crate::navigation::{Section, SectionHost};
use crate::notifications::{NotificationKind, ToastId};
use crate::tables::DataTable;

/// Operations other components may call on a running dashboard.
pub trait DashboardApi {
    fn show_section(&mut self, name: &str) -> bool;
    fn notify(&mut self, message: &str, kind: &str) -> ToastId;
    fn toggle_sidebar(&mut self);
    fn load_section_data(&mut self, name: &str);
    fn refresh_dashboard(&mut self);
    fn cleanup(&mut self);
}

impl Dashboard {
    /// Startup sequence: device tier, dashboard section and data, stored
    /// sidebar preference, charts, then resize handling and live updates.
    pub fn initialize(&mut self) {
        let tier = apply_device_tier(&mut self.state, &mut self.document, self.viewport.width_px);
        self.charts.set_container_height(tier);
        self.initialize_dashboard();
        self.charts.initialize(tier, &self.document);
        self.attach_listeners();
        log::info!("Dashboard ready ({} tier, {}px)", tier, self.viewport.width_px);
    }

    pub fn tier(&self) -> DeviceTier {
        if self.state.is_mobile {
            DeviceTier::Mobile
        } else if self.state.is_tablet {
            DeviceTier::Tablet
        } else {
            DeviceTier::Desktop
        }
    }

    fn initialize_dashboard(&mut self) {
        self.router
            .show_section(&mut self.state, &mut self.document, Section::Dashboard.as_ref());
        self.document.clear_nav_active();
        self.document.set_nav_active(Section::Dashboard);
        self.document.set_page_title(Section::Dashboard.title());
        self.interaction.nav_cursor = 0;
        self.interaction.row_cursor = 0;

        self.load_dashboard_data();

        if !self.state.sidebar_collapsed {
            self.layout.restore_preference(
                &mut self.state,
                &mut self.document,
                self.viewport.width_px,
            );
        }
    }

    fn load_dashboard_data(&mut self) {
        for card in self.stats.iter_mut() {
            card.counter.restart();
        }
        self.update_live_statuses();
    }

    /// Feeds every table that carries status badges.
    pub(super) fn update_live_statuses(&mut self) -> usize {
        let feed = self.live_feed.as_mut();
        self.tables
            .values_mut()
            .map(|table| update_recent_orders(table, &mut *feed))
            .sum()
    }

    fn attach_listeners(&mut self) {
        self.resize_attached = true;
        if self.live_updates {
            self.live_interval.start(self.now);
        }
    }

    /// Second half of a refresh, run once the refresh delay has elapsed.
    pub(super) fn reinitialize(&mut self) {
        self.initialize_dashboard();
        let tier = self.tier();
        self.charts.set_container_height(tier);
        self.charts.initialize(tier, &self.document);
        self.attach_listeners();
        self.notify("Dashboard atualizado!", "success");
    }

    pub fn table(&self, section: Section) -> Option<&DataTable> {
        self.tables.get(&section)
    }
}

impl DashboardApi for Dashboard {
    fn show_section(&mut self, name: &str) -> bool {
        let shown = self
            .router
            .show_section(&mut self.state, &mut self.document, name);
        if shown {
            self.interaction.row_cursor = 0;
            self.interaction.filter_input = None;
        }
        shown
    }

    fn notify(&mut self, message: &str, kind: &str) -> ToastId {
        self.notifications
            .notify(message, NotificationKind::parse_lenient(kind), self.now)
    }

    fn toggle_sidebar(&mut self) {
        self.layout.toggle_sidebar(&mut self.state, &mut self.document);
    }

    fn load_section_data(&mut self, name: &str) {
        self.router.load_section_data(name);
    }

    fn refresh_dashboard(&mut self) {
        self.cleanup();
        self.timers
            .schedule(self.now, refresh_delay(), Deferred::Reinitialize);
    }

    /// Destroys the charts, stops reacting to resizes and clears the live
    /// update interval and pending timers.
    fn cleanup(&mut self) {
        let destroyed = self.charts.destroy_all();
        self.resize_attached = false;
        self.live_interval.clear();
        self.timers.clear();
        self.interaction.touching = None;
        log::debug!("Cleanup destroyed {} charts", destroyed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::CanvasId;
    use crate::config::{Config, MemoryPreferenceStore};
    use crate::live_data::MockLiveDataFeed;
    use ratatui::layout::Rect;
    use std::time::{Duration, Instant};

    fn quiet_feed() -> Box<MockLiveDataFeed> {
        let mut feed = MockLiveDataFeed::new();
        feed.expect_next_status().returning(|_| None);
        Box::new(feed)
    }

    /// 150 columns of 8px: a 1200px desktop viewport.
    fn dashboard(cols: u16, store: MemoryPreferenceStore, now: Instant) -> Dashboard {
        let mut dashboard = Dashboard::new(
            &Config::default(),
            Box::new(store),
            quiet_feed(),
            Rect::new(0, 0, cols, 50),
            now,
        );
        dashboard.initialize();
        dashboard
    }

    #[test]
    fn desktop_startup_creates_all_charts_and_starts_interval() {
        let now = Instant::now();
        let dashboard = dashboard(150, MemoryPreferenceStore::default(), now);

        assert_eq!(dashboard.tier(), DeviceTier::Desktop);
        assert_eq!(dashboard.charts.live_count(), 4);
        assert!(dashboard.is_live_interval_running());
        assert!(dashboard.is_resize_attached());
        assert_eq!(dashboard.document.page_title(), "Dashboard");
    }

    #[test]
    fn stored_collapse_is_restored_on_startup() {
        let now = Instant::now();
        let store = MemoryPreferenceStore::with_value("sidebarCollapsed", "true");
        let dashboard = dashboard(150, store, now);
        assert!(dashboard.state.sidebar_collapsed);
        assert!(dashboard.document.is_sidebar_collapsed());
    }

    #[test]
    fn refresh_tears_down_then_reinitializes_after_delay() {
        let now = Instant::now();
        let store = MemoryPreferenceStore::with_value("sidebarCollapsed", "true");
        let mut dashboard = dashboard(150, store, now);
        dashboard.show_section("orders");

        dashboard.refresh_dashboard();
        assert_eq!(dashboard.charts.live_count(), 0);
        assert!(!dashboard.is_live_interval_running());
        assert!(!dashboard.is_resize_attached());
        assert!(dashboard.has_pending(Deferred::Reinitialize));

        dashboard.update(now + Duration::from_millis(50));
        assert_eq!(dashboard.charts.live_count(), 0);

        dashboard.update(now + Duration::from_millis(100));
        assert_eq!(dashboard.charts.live_count(), 4);
        assert!(dashboard.is_live_interval_running());
        assert_eq!(dashboard.state.active_section, Section::Dashboard);
        // Already collapsed: the stored preference is not applied twice.
        assert!(dashboard.state.sidebar_collapsed);
        let toast = &dashboard.notifications.toasts()[0];
        assert_eq!(toast.message, "Dashboard atualizado!");
        assert_eq!(toast.kind, NotificationKind::Success);
    }

    #[test]
    fn show_section_keeps_current_one_for_unknown_names() {
        let mut dashboard = dashboard(150, MemoryPreferenceStore::default(), Instant::now());
        assert!(dashboard.show_section("analytics"));
        assert!(!dashboard.show_section("reports"));
        assert_eq!(dashboard.state.active_section, Section::Analytics);
        assert_eq!(dashboard.document.visible_sections().count(), 1);
    }

    #[test]
    fn notify_parses_kind_leniently() {
        let mut dashboard = dashboard(150, MemoryPreferenceStore::default(), Instant::now());
        dashboard.notify("Falha", "error");
        dashboard.notify("Olá", "shout");
        let kinds: Vec<_> = dashboard.notifications.toasts().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Error, NotificationKind::Info]);
    }

    #[test]
    fn mobile_startup_defers_charts_until_visible() {
        let now = Instant::now();
        // 62 columns of 8px: 496px wide.
        let mut dashboard = dashboard(62, MemoryPreferenceStore::default(), now);
        assert_eq!(dashboard.tier(), DeviceTier::Mobile);
        assert_eq!(dashboard.charts.live_count(), 0);

        dashboard.update(now + Duration::from_millis(100));
        assert!(dashboard.charts.instance(CanvasId::Sales).is_some());
        assert!(dashboard.charts.instance(CanvasId::Revenue).is_none());
        assert_eq!(dashboard.charts.container_height_px(), 180);

        dashboard.show_section("analytics");
        dashboard.update(now + Duration::from_millis(200));
        assert_eq!(dashboard.charts.live_count(), 4);
    }
}
