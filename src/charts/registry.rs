//! Chart instance registry
//!
//! The rendering backend owns the live chart instances. Two registry
//! layouts exist in the wild: a legacy one keyed by numeric id and a modern
//! one that is simply iterable. [`InstanceRegistry`] hides the difference so
//! refresh and cleanup never care which one they are talking to.

use super::{CanvasId, ChartConfig};
use crate::config::RegistryFlavor;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("chart on {0} was already destroyed")]
    Destroyed(CanvasId),

    #[error("chart on {canvas} cannot be resized to {height_px}px")]
    InvalidSize { canvas: CanvasId, height_px: u16 },
}

/// A live chart drawn on a canvas.
pub trait ChartInstance: std::fmt::Debug {
    fn canvas(&self) -> CanvasId;
    fn config(&self) -> &ChartConfig;
    fn height_px(&self) -> u16;
    fn resize(&mut self, height_px: u16) -> Result<(), ChartError>;
    fn destroy(&mut self) -> Result<(), ChartError>;
    fn is_destroyed(&self) -> bool;
}

/// Uniform access to the live instances of a backend.
pub trait InstanceRegistry: std::fmt::Debug {
    fn insert(&mut self, instance: Box<dyn ChartInstance>);

    /// Visits every registered instance in registration order.
    fn for_each_instance(&mut self, visit: &mut dyn FnMut(&mut dyn ChartInstance));

    fn find(&self, canvas: CanvasId) -> Option<&dyn ChartInstance>;

    /// Drops destroyed instances and returns how many were removed.
    fn prune_destroyed(&mut self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the registry selected in the configuration.
pub fn registry_for(flavor: RegistryFlavor) -> Box<dyn InstanceRegistry> {
    match flavor {
        RegistryFlavor::Keyed => Box::new(KeyedRegistry::default()),
        RegistryFlavor::Iterable => Box::new(IterableRegistry::default()),
    }
}

/// Legacy layout: an object keyed by a monotonically increasing id.
#[derive(Debug, Default)]
pub struct KeyedRegistry {
    next_id: u64,
    instances: BTreeMap<u64, Box<dyn ChartInstance>>,
}

impl InstanceRegistry for KeyedRegistry {
    fn insert(&mut self, instance: Box<dyn ChartInstance>) {
        self.instances.insert(self.next_id, instance);
        self.next_id += 1;
    }

    fn for_each_instance(&mut self, visit: &mut dyn FnMut(&mut dyn ChartInstance)) {
        for instance in self.instances.values_mut() {
            visit(instance.as_mut());
        }
    }

    fn find(&self, canvas: CanvasId) -> Option<&dyn ChartInstance> {
        self.instances
            .values()
            .find(|instance| instance.canvas() == canvas && !instance.is_destroyed())
            .map(|instance| instance.as_ref())
    }

    fn prune_destroyed(&mut self) -> usize {
        let before = self.instances.len();
        self.instances.retain(|_, instance| !instance.is_destroyed());
        before - self.instances.len()
    }

    fn len(&self) -> usize {
        self.instances.len()
    }
}

/// Modern layout: an insertion-ordered collection.
#[derive(Debug, Default)]
pub struct IterableRegistry {
    instances: Vec<Box<dyn ChartInstance>>,
}

impl InstanceRegistry for IterableRegistry {
    fn insert(&mut self, instance: Box<dyn ChartInstance>) {
        self.instances.push(instance);
    }

    fn for_each_instance(&mut self, visit: &mut dyn FnMut(&mut dyn ChartInstance)) {
        for instance in self.instances.iter_mut() {
            visit(instance.as_mut());
        }
    }

    fn find(&self, canvas: CanvasId) -> Option<&dyn ChartInstance> {
        self.instances
            .iter()
            .find(|instance| instance.canvas() == canvas && !instance.is_destroyed())
            .map(|instance| instance.as_ref())
    }

    fn prune_destroyed(&mut self) -> usize {
        let before = self.instances.len();
        self.instances.retain(|instance| !instance.is_destroyed());
        before - self.instances.len()
    }

    fn len(&self) -> usize {
        self.instances.len()
    }
}

/// A rendering backend able to create charts and expose its registry.
pub trait ChartBackend {
    fn create(
        &mut self,
        canvas: CanvasId,
        config: ChartConfig,
        height_px: u16,
    ) -> Result<(), ChartError>;

    fn registry(&self) -> &dyn InstanceRegistry;

    fn registry_mut(&mut self) -> &mut dyn InstanceRegistry;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::builders;
    use crate::charts::terminal::TerminalChart;
    use crate::device::DeviceTier;

    fn chart(canvas: CanvasId) -> Box<dyn ChartInstance> {
        Box::new(TerminalChart::new(
            canvas,
            builders::build(canvas, DeviceTier::Desktop),
            300,
        ))
    }

    fn exercise(registry: &mut dyn InstanceRegistry) {
        registry.insert(chart(CanvasId::Sales));
        registry.insert(chart(CanvasId::Products));
        registry.insert(chart(CanvasId::Revenue));

        let mut seen = Vec::new();
        registry.for_each_instance(&mut |instance| seen.push(instance.canvas()));
        assert_eq!(seen, vec![CanvasId::Sales, CanvasId::Products, CanvasId::Revenue]);

        registry.for_each_instance(&mut |instance| {
            if instance.canvas() == CanvasId::Products {
                instance.destroy().unwrap();
            }
        });
        assert!(registry.find(CanvasId::Products).is_none());
        assert_eq!(registry.prune_destroyed(), 1);
        assert_eq!(registry.len(), 2);
        assert!(registry.find(CanvasId::Sales).is_some());
    }

    #[test]
    fn keyed_registry_behaves_like_iterable_one() {
        exercise(&mut KeyedRegistry::default());
        exercise(&mut IterableRegistry::default());
    }

    #[test]
    fn flavor_selects_registry() {
        let keyed = registry_for(RegistryFlavor::Keyed);
        assert!(format!("{:?}", keyed).starts_with("KeyedRegistry"));
        let iterable = registry_for(RegistryFlavor::Iterable);
        assert!(iterable.is_empty());
    }
}
