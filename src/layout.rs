//! Layout coordination
//!
//! Owns the sidebar collapse and mobile menu transitions, the persisted
//! sidebar preference, the resize policy and swipe gestures.

use crate::config::PreferenceStore;
use crate::consts::cli_consts::breakpoints::MOBILE_MAX_WIDTH_PX;
use crate::consts::cli_consts::layout::{
    SIDEBAR_COLLAPSED_KEY, SWIPE_THRESHOLD_PX, double_tap_window,
};
use crate::device::{DeviceTier, TierMarker, apply_device_tier};
use crate::ui::dashboard::state::DashboardState;
use std::time::Instant;

/// Page elements the layout coordinator mutates.
pub trait LayoutSurface {
    fn set_sidebar_collapsed(&mut self, collapsed: bool);
    fn has_overlay(&self) -> bool;
    fn create_overlay(&mut self);
    /// Sets the open marker on both the sidebar and the overlay.
    fn set_mobile_open(&mut self, open: bool);
    fn set_scroll_lock(&mut self, locked: bool);
}

/// What a resize changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub tier: DeviceTier,
    pub closed_mobile_menu: bool,
    pub collapsed_sidebar: bool,
}

pub struct LayoutCoordinator {
    store: Box<dyn PreferenceStore>,
}

impl LayoutCoordinator {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn toggle_sidebar(&mut self, state: &mut DashboardState, surface: &mut dyn LayoutSurface) {
        state.sidebar_collapsed = !state.sidebar_collapsed;
        surface.set_sidebar_collapsed(state.sidebar_collapsed);

        let value = if state.sidebar_collapsed { "true" } else { "false" };
        if let Err(e) = self.store.set(SIDEBAR_COLLAPSED_KEY, value) {
            log::warn!("Could not persist sidebar preference: {}", e);
        }
    }

    pub fn toggle_mobile_menu(
        &mut self,
        state: &mut DashboardState,
        surface: &mut dyn LayoutSurface,
    ) {
        if !surface.has_overlay() {
            surface.create_overlay();
        }
        state.mobile_menu_open = !state.mobile_menu_open;
        surface.set_mobile_open(state.mobile_menu_open);
        surface.set_scroll_lock(state.mobile_menu_open);
    }

    /// Re-applies a stored collapsed preference on wide viewports.
    pub fn restore_preference(
        &mut self,
        state: &mut DashboardState,
        surface: &mut dyn LayoutSurface,
        width_px: u32,
    ) -> bool {
        let stored = self.store.get(SIDEBAR_COLLAPSED_KEY);
        if stored.as_deref() == Some("true") && width_px > MOBILE_MAX_WIDTH_PX {
            self.toggle_sidebar(state, surface);
            return true;
        }
        false
    }

    /// Resize policy: leaving mobile closes the menu, entering tablet
    /// collapses the sidebar. Leaving tablet never expands it again.
    pub fn handle_resize<S>(
        &mut self,
        state: &mut DashboardState,
        surface: &mut S,
        width_px: u32,
    ) -> ResizeOutcome
    where
        S: TierMarker + LayoutSurface,
    {
        let tier = apply_device_tier(state, surface, width_px);

        let closed_mobile_menu = width_px > MOBILE_MAX_WIDTH_PX && state.mobile_menu_open;
        if closed_mobile_menu {
            self.toggle_mobile_menu(state, surface);
        }

        let collapsed_sidebar = tier == DeviceTier::Tablet && !state.sidebar_collapsed;
        if collapsed_sidebar {
            log::debug!("Auto-collapsing sidebar for tablet width {}px", width_px);
            self.toggle_sidebar(state, surface);
        }

        ResizeOutcome {
            tier,
            closed_mobile_menu,
            collapsed_sidebar,
        }
    }

    /// Applies a recognised swipe. Only meaningful in the mobile tier.
    pub fn handle_swipe(
        &mut self,
        state: &mut DashboardState,
        surface: &mut dyn LayoutSurface,
        swipe: Swipe,
    ) -> bool {
        if !state.is_mobile {
            return false;
        }
        let should_toggle = match swipe {
            Swipe::Rightward => !state.mobile_menu_open,
            Swipe::Leftward => state.mobile_menu_open,
        };
        if should_toggle {
            self.toggle_mobile_menu(state, surface);
        }
        should_toggle
    }
}

/// Direction of a recognised horizontal swipe.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved toward the right: opens the menu.
    Rightward,
    /// Finger moved toward the left: closes the menu.
    Leftward,
}

/// Turns touch start/move/end positions into swipes.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    scrolling: bool,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
        self.scrolling = false;
    }

    pub fn touch_move(&mut self, x: i32, y: i32) {
        if let Some((start_x, start_y)) = self.start {
            if (y - start_y).abs() > (x - start_x).abs() {
                self.scrolling = true;
            }
        }
    }

    pub fn touch_end(&mut self, x: i32, y: i32) -> Option<Swipe> {
        let (start_x, start_y) = self.start.take()?;
        let scrolling = std::mem::take(&mut self.scrolling);
        let diff_x = start_x - x;
        let diff_y = start_y - y;
        if scrolling || diff_y.abs() > diff_x.abs() {
            return None;
        }
        if diff_x < -SWIPE_THRESHOLD_PX {
            Some(Swipe::Rightward)
        } else if diff_x > SWIPE_THRESHOLD_PX {
            Some(Swipe::Leftward)
        } else {
            None
        }
    }
}

/// Suppresses the second tap of a double tap.
#[derive(Debug, Default)]
pub struct TapGuard {
    last_tap: Option<Instant>,
}

impl TapGuard {
    /// Records a tap and reports whether it should be handled.
    pub fn accept(&mut self, now: Instant) -> bool {
        let accepted = match self.last_tap {
            Some(last) => now.duration_since(last) > double_tap_window(),
            None => true,
        };
        self.last_tap = Some(now);
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryPreferenceStore;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeSurface {
        collapsed: bool,
        overlay_creations: usize,
        mobile_open: bool,
        scroll_locked: bool,
        tier: Option<DeviceTier>,
        collapse_calls: usize,
    }

    impl LayoutSurface for FakeSurface {
        fn set_sidebar_collapsed(&mut self, collapsed: bool) {
            self.collapsed = collapsed;
            self.collapse_calls += 1;
        }
        fn has_overlay(&self) -> bool {
            self.overlay_creations > 0
        }
        fn create_overlay(&mut self) {
            self.overlay_creations += 1;
        }
        fn set_mobile_open(&mut self, open: bool) {
            self.mobile_open = open;
        }
        fn set_scroll_lock(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }
    }

    impl TierMarker for FakeSurface {
        fn set_tier_marker(&mut self, tier: DeviceTier) {
            self.tier = Some(tier);
        }
    }

    fn coordinator() -> LayoutCoordinator {
        LayoutCoordinator::new(Box::new(MemoryPreferenceStore::default()))
    }

    #[test]
    fn toggle_sidebar_twice_round_trips_and_persists() {
        let mut layout = coordinator();
        let mut state = DashboardState::default();
        let mut surface = FakeSurface::default();

        layout.toggle_sidebar(&mut state, &mut surface);
        assert!(state.sidebar_collapsed);
        assert!(surface.collapsed);
        assert_eq!(layout.store().get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));

        layout.toggle_sidebar(&mut state, &mut surface);
        assert!(!state.sidebar_collapsed);
        assert!(!surface.collapsed);
        assert_eq!(layout.store().get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn mobile_menu_round_trip_creates_overlay_once() {
        let mut layout = coordinator();
        let mut state = DashboardState::default();
        let mut surface = FakeSurface::default();

        layout.toggle_mobile_menu(&mut state, &mut surface);
        assert!(state.mobile_menu_open);
        assert!(surface.mobile_open && surface.scroll_locked);

        layout.toggle_mobile_menu(&mut state, &mut surface);
        assert!(!state.mobile_menu_open);
        assert!(!surface.mobile_open && !surface.scroll_locked);

        layout.toggle_mobile_menu(&mut state, &mut surface);
        layout.toggle_mobile_menu(&mut state, &mut surface);
        assert_eq!(surface.overlay_creations, 1);
    }

    #[test]
    fn stored_preference_restored_only_on_wide_viewports() {
        let store = MemoryPreferenceStore::with_value(SIDEBAR_COLLAPSED_KEY, "true");
        let mut layout = LayoutCoordinator::new(Box::new(store.clone()));
        let mut state = DashboardState::default();
        let mut surface = FakeSurface::default();

        assert!(!layout.restore_preference(&mut state, &mut surface, 700));
        assert!(!state.sidebar_collapsed);

        assert!(layout.restore_preference(&mut state, &mut surface, 1300));
        assert!(state.sidebar_collapsed);
        assert_eq!(layout.store().get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));

        let mut layout = LayoutCoordinator::new(Box::new(MemoryPreferenceStore::default()));
        let mut state = DashboardState::default();
        assert!(!layout.restore_preference(&mut state, &mut surface, 1300));
    }

    #[test]
    fn entering_tablet_collapses_sidebar_exactly_once() {
        let mut layout = coordinator();
        let mut state = DashboardState::default();
        let mut surface = FakeSurface::default();

        let outcome = layout.handle_resize(&mut state, &mut surface, 1200);
        assert_eq!(outcome.tier, DeviceTier::Desktop);
        assert!(!outcome.collapsed_sidebar);

        let outcome = layout.handle_resize(&mut state, &mut surface, 900);
        assert_eq!(outcome.tier, DeviceTier::Tablet);
        assert!(outcome.collapsed_sidebar);
        assert!(state.sidebar_collapsed);
        assert_eq!(surface.collapse_calls, 1);

        // Staying in tablet does nothing more, and leaving it does not expand.
        layout.handle_resize(&mut state, &mut surface, 1000);
        layout.handle_resize(&mut state, &mut surface, 1400);
        assert!(state.sidebar_collapsed);
        assert_eq!(surface.collapse_calls, 1);
        assert_eq!(surface.tier, Some(DeviceTier::Desktop));
    }

    #[test]
    fn leaving_mobile_closes_open_menu() {
        let mut layout = coordinator();
        let mut state = DashboardState::default();
        let mut surface = FakeSurface::default();

        layout.handle_resize(&mut state, &mut surface, 500);
        layout.toggle_mobile_menu(&mut state, &mut surface);
        assert!(state.mobile_menu_open);

        let outcome = layout.handle_resize(&mut state, &mut surface, 1300);
        assert!(outcome.closed_mobile_menu);
        assert!(!state.mobile_menu_open);
        assert!(!surface.scroll_locked);
    }

    #[test]
    fn swipe_recognition() {
        let mut tracker = SwipeTracker::default();

        tracker.touch_start(10, 100);
        tracker.touch_move(40, 102);
        assert_eq!(tracker.touch_end(80, 104), Some(Swipe::Rightward));

        tracker.touch_start(200, 100);
        assert_eq!(tracker.touch_end(120, 90), Some(Swipe::Leftward));

        // Too short.
        tracker.touch_start(100, 100);
        assert_eq!(tracker.touch_end(140, 100), None);

        // Vertical movement during the drag marks it as a scroll.
        tracker.touch_start(100, 100);
        tracker.touch_move(102, 160);
        assert_eq!(tracker.touch_end(200, 170), None);

        // End without a start.
        assert_eq!(tracker.touch_end(0, 0), None);
    }

    #[test]
    fn swipes_only_act_in_mobile_tier() {
        let mut layout = coordinator();
        let mut state = DashboardState::default();
        let mut surface = FakeSurface::default();

        layout.handle_resize(&mut state, &mut surface, 1300);
        assert!(!layout.handle_swipe(&mut state, &mut surface, Swipe::Rightward));
        assert!(!state.mobile_menu_open);

        layout.handle_resize(&mut state, &mut surface, 600);
        assert!(!layout.handle_swipe(&mut state, &mut surface, Swipe::Leftward));
        assert!(layout.handle_swipe(&mut state, &mut surface, Swipe::Rightward));
        assert!(state.mobile_menu_open);
        assert!(!layout.handle_swipe(&mut state, &mut surface, Swipe::Rightward));
        assert!(layout.handle_swipe(&mut state, &mut surface, Swipe::Leftward));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn double_tap_is_suppressed() {
        let start = Instant::now();
        let mut guard = TapGuard::default();
        assert!(guard.accept(start));
        assert!(!guard.accept(start + Duration::from_millis(200)));
        assert!(guard.accept(start + Duration::from_millis(600)));
    }
}
