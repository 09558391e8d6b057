//! Device classification from viewport width.

use crate::consts::cli_consts::breakpoints::{MOBILE_MAX_WIDTH_PX, TABLET_MAX_WIDTH_PX};
use crate::ui::dashboard::state::DashboardState;

/// Device tier derived solely from the viewport width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DeviceTier {
    Mobile,
    Tablet,
    Desktop,
}

/// Classifies a viewport width in pixels.
pub fn classify(width_px: u32) -> DeviceTier {
    if width_px <= MOBILE_MAX_WIDTH_PX {
        DeviceTier::Mobile
    } else if width_px <= TABLET_MAX_WIDTH_PX {
        DeviceTier::Tablet
    } else {
        DeviceTier::Desktop
    }
}

/// Page surface capable of carrying the exclusive tier marker.
pub trait TierMarker {
    fn set_tier_marker(&mut self, tier: DeviceTier);
}

/// Re-classifies the viewport, records the result in the dashboard state and
/// replaces the tier marker on the page surface.
pub fn apply_device_tier(
    state: &mut DashboardState,
    surface: &mut dyn TierMarker,
    width_px: u32,
) -> DeviceTier {
    let tier = classify(width_px);
    state.is_mobile = tier == DeviceTier::Mobile;
    state.is_tablet = tier == DeviceTier::Tablet;
    surface.set_tier_marker(tier);
    tier
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Viewport size in pixels, derived from the terminal size in cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
}

impl Viewport {
    pub fn from_cells(cols: u16, rows: u16, cell_width_px: u32, cell_height_px: u32) -> Self {
        Self {
            width_px: u32::from(cols) * cell_width_px,
            height_px: u32::from(rows) * cell_height_px,
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.width_px >= self.height_px {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn tier(&self) -> DeviceTier {
        classify(self.width_px)
    }

    /// Replaces the width with a pinned one scaled to `cols`.
    pub fn pinned(mut self, pin: Option<PinnedWidth>, cols: u16) -> Self {
        if let Some(pin) = pin {
            self.width_px = pin.at(cols);
        }
        self
    }
}

/// A viewport width fixed by the user for a given terminal width in columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinnedWidth {
    pub width_px: u32,
    pub cols: u16,
}

impl PinnedWidth {
    pub fn new(width_px: u32, cols: u16) -> Self {
        Self {
            width_px,
            cols: cols.max(1),
        }
    }

    /// The pinned width scaled to a terminal `cols` columns wide.
    pub fn at(&self, cols: u16) -> u32 {
        if cols == self.cols {
            return self.width_px;
        }
        let scaled = u64::from(self.width_px) * u64::from(cols) / u64::from(self.cols.max(1));
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Markers(Vec<DeviceTier>);

    impl TierMarker for Markers {
        fn set_tier_marker(&mut self, tier: DeviceTier) {
            self.0.clear();
            self.0.push(tier);
        }
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(0), DeviceTier::Mobile);
        assert_eq!(classify(500), DeviceTier::Mobile);
        assert_eq!(classify(768), DeviceTier::Mobile);
        assert_eq!(classify(769), DeviceTier::Tablet);
        assert_eq!(classify(1024), DeviceTier::Tablet);
        assert_eq!(classify(1025), DeviceTier::Desktop);
        assert_eq!(classify(u32::MAX), DeviceTier::Desktop);
    }

    #[test]
    fn exactly_one_tier_holds_for_every_width() {
        for width in (0..2000).step_by(7) {
            let tier = classify(width);
            let mobile = width <= 768;
            let tablet = width > 768 && width <= 1024;
            let desktop = width > 1024;
            assert_eq!(
                [mobile, tablet, desktop].iter().filter(|b| **b).count(),
                1
            );
            assert_eq!(tier == DeviceTier::Mobile, mobile);
            assert_eq!(tier == DeviceTier::Tablet, tablet);
            assert_eq!(tier == DeviceTier::Desktop, desktop);
        }
    }

    #[test]
    fn apply_updates_state_and_single_marker() {
        let mut state = DashboardState::default();
        let mut markers = Markers::default();

        apply_device_tier(&mut state, &mut markers, 900);
        assert!(state.is_tablet && !state.is_mobile);
        assert_eq!(markers.0, vec![DeviceTier::Tablet]);

        apply_device_tier(&mut state, &mut markers, 400);
        assert!(state.is_mobile && !state.is_tablet);
        assert_eq!(markers.0, vec![DeviceTier::Mobile]);
    }

    #[test]
    fn viewport_from_cells() {
        let viewport = Viewport::from_cells(80, 24, 8, 16);
        assert_eq!(viewport.width_px, 640);
        assert_eq!(viewport.height_px, 384);
        assert_eq!(viewport.tier(), DeviceTier::Mobile);
        assert_eq!(viewport.orientation(), Orientation::Landscape);

        let tall = Viewport::from_cells(40, 60, 8, 16);
        assert_eq!(tall.orientation(), Orientation::Portrait);
    }

    #[test]
    fn pinned_width_is_exact_then_scales_with_columns() {
        let pin = PinnedWidth::new(1025, 150);
        let viewport = Viewport::from_cells(150, 50, 8, 16).pinned(Some(pin), 150);
        assert_eq!(viewport.width_px, 1025);
        assert_eq!(viewport.tier(), DeviceTier::Desktop);

        let viewport = Viewport::from_cells(200, 50, 8, 16).pinned(Some(PinnedWidth::new(1100, 200)), 200);
        assert_eq!(viewport.tier(), DeviceTier::Desktop);

        // Fewer pixels than columns stays as requested.
        let narrow = Viewport::from_cells(600, 50, 8, 16).pinned(Some(PinnedWidth::new(500, 600)), 600);
        assert_eq!(narrow.width_px, 500);

        assert_eq!(pin.at(75), 512);
        assert_eq!(pin.at(300), 2050);
        assert_eq!(Viewport::from_cells(80, 24, 8, 16).pinned(None, 80).width_px, 640);
    }
}
