//! Chart provisioning
//!
//! Decides when each chart is instantiated: all at once on larger screens,
//! lazily on first sight on mobile. Refresh and teardown go through the
//! registry adapter of the backend.

use super::registry::ChartBackend;
use super::{CanvasId, ChartInstance, builders};
use crate::consts::cli_consts::charts::{
    DESKTOP_CONTAINER_HEIGHT_PX, MOBILE_CONTAINER_HEIGHT_PX, TABLET_CONTAINER_HEIGHT_PX,
};
use crate::device::DeviceTier;
use std::collections::BTreeSet;

/// Page elements the provisioner looks at.
pub trait CanvasHost {
    fn has_canvas(&self, canvas: CanvasId) -> bool;

    /// Whether the canvas is currently inside the viewport.
    fn is_in_viewport(&self, canvas: CanvasId) -> bool;
}

/// Height of a chart container for the tier.
pub fn chart_container_height(tier: DeviceTier) -> u16 {
    match tier {
        DeviceTier::Mobile => MOBILE_CONTAINER_HEIGHT_PX,
        DeviceTier::Tablet => TABLET_CONTAINER_HEIGHT_PX,
        DeviceTier::Desktop => DESKTOP_CONTAINER_HEIGHT_PX,
    }
}

pub struct ChartProvisioner {
    backend: Box<dyn ChartBackend>,
    observed: BTreeSet<CanvasId>,
    container_height_px: u16,
}

impl ChartProvisioner {
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        Self {
            backend,
            observed: BTreeSet::new(),
            container_height_px: DESKTOP_CONTAINER_HEIGHT_PX,
        }
    }

    /// Startup provisioning. Mobile only observes the canvases present on the
    /// page; other tiers instantiate every chart right away.
    pub fn initialize(&mut self, tier: DeviceTier, host: &dyn CanvasHost) {
        self.container_height_px = chart_container_height(tier);

        if tier == DeviceTier::Mobile {
            self.observed = CanvasId::ALL
                .into_iter()
                .filter(|canvas| host.has_canvas(*canvas))
                .collect();
            log::debug!("Observing {} chart canvases", self.observed.len());
            return;
        }

        for canvas in CanvasId::ALL {
            self.instantiate(canvas, tier, host);
        }
    }

    /// Creates the chart for `canvas`, replacing a live one. Absent canvases
    /// are skipped.
    pub fn instantiate(&mut self, canvas: CanvasId, tier: DeviceTier, host: &dyn CanvasHost) -> bool {
        if !host.has_canvas(canvas) {
            return false;
        }

        let registry = self.backend.registry_mut();
        if registry.find(canvas).is_some() {
            registry.for_each_instance(&mut |instance| {
                if instance.canvas() == canvas && !instance.is_destroyed() {
                    if let Err(e) = instance.destroy() {
                        log::debug!("Replacing chart: {}", e);
                    }
                }
            });
            registry.prune_destroyed();
        }

        let config = builders::build(canvas, tier);
        match self.backend.create(canvas, config, self.container_height_px) {
            Ok(()) => {
                log::debug!("Chart {} created ({})", canvas, tier);
                true
            }
            Err(e) => {
                log::debug!("Chart {} not created: {}", canvas, e);
                false
            }
        }
    }

    /// One-shot trigger: the first intersection of an observed canvas creates
    /// its chart and stops observing it.
    pub fn handle_intersection(
        &mut self,
        canvas: CanvasId,
        tier: DeviceTier,
        host: &dyn CanvasHost,
    ) -> bool {
        if !self.observed.remove(&canvas) {
            return false;
        }
        self.instantiate(canvas, tier, host)
    }

    /// Checks every observed canvas against the viewport.
    pub fn poll_intersections(&mut self, tier: DeviceTier, host: &dyn CanvasHost) -> usize {
        let visible: Vec<CanvasId> = self
            .observed
            .iter()
            .copied()
            .filter(|canvas| host.is_in_viewport(*canvas))
            .collect();
        visible
            .into_iter()
            .filter(|canvas| self.handle_intersection(*canvas, tier, host))
            .count()
    }

    pub fn is_observing(&self, canvas: CanvasId) -> bool {
        self.observed.contains(&canvas)
    }

    /// Whether any canvas still waits for its first intersection.
    pub fn has_observed(&self) -> bool {
        !self.observed.is_empty()
    }

    pub fn container_height_px(&self) -> u16 {
        self.container_height_px
    }

    /// Applies the container height of the tier to later refreshes.
    pub fn set_container_height(&mut self, tier: DeviceTier) {
        self.container_height_px = chart_container_height(tier);
    }

    /// Resizes every live chart. Returns how many succeeded.
    pub fn refresh_all(&mut self) -> usize {
        let height_px = self.container_height_px;
        let mut resized = 0;
        self.backend.registry_mut().for_each_instance(&mut |instance| {
            match instance.resize(height_px) {
                Ok(()) => resized += 1,
                Err(e) => log::debug!("Chart resize error: {}", e),
            }
        });
        resized
    }

    /// Destroys every live chart and forgets pending observations.
    pub fn destroy_all(&mut self) -> usize {
        let mut destroyed = 0;
        let registry = self.backend.registry_mut();
        registry.for_each_instance(&mut |instance| match instance.destroy() {
            Ok(()) => destroyed += 1,
            Err(e) => log::debug!("Chart destroy error: {}", e),
        });
        registry.prune_destroyed();
        self.observed.clear();
        destroyed
    }

    pub fn instance(&self, canvas: CanvasId) -> Option<&dyn ChartInstance> {
        self.backend.registry().find(canvas)
    }

    pub fn live_count(&self) -> usize {
        self.backend.registry().len()
    }
}
