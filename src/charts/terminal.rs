//! Terminal chart backend. Instances only hold their configuration and
//! size; drawing happens in the dashboard chart component.

use super::registry::{ChartBackend, ChartError, ChartInstance, InstanceRegistry, registry_for};
use super::{CanvasId, ChartConfig};
use crate::config::RegistryFlavor;

#[derive(Debug, Clone)]
pub struct TerminalChart {
    canvas: CanvasId,
    config: ChartConfig,
    height_px: u16,
    destroyed: bool,
}

impl TerminalChart {
    pub fn new(canvas: CanvasId, config: ChartConfig, height_px: u16) -> Self {
        Self {
            canvas,
            config,
            height_px,
            destroyed: false,
        }
    }
}

impl ChartInstance for TerminalChart {
    fn canvas(&self) -> CanvasId {
        self.canvas
    }

    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn height_px(&self) -> u16 {
        self.height_px
    }

    fn resize(&mut self, height_px: u16) -> Result<(), ChartError> {
        if self.destroyed {
            return Err(ChartError::Destroyed(self.canvas));
        }
        if height_px == 0 {
            return Err(ChartError::InvalidSize {
                canvas: self.canvas,
                height_px,
            });
        }
        self.height_px = height_px;
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), ChartError> {
        if self.destroyed {
            return Err(ChartError::Destroyed(self.canvas));
        }
        self.destroyed = true;
        Ok(())
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[derive(Debug)]
pub struct TerminalChartBackend {
    registry: Box<dyn InstanceRegistry>,
}

impl TerminalChartBackend {
    pub fn new(flavor: RegistryFlavor) -> Self {
        Self {
            registry: registry_for(flavor),
        }
    }
}

impl ChartBackend for TerminalChartBackend {
    fn create(
        &mut self,
        canvas: CanvasId,
        config: ChartConfig,
        height_px: u16,
    ) -> Result<(), ChartError> {
        if height_px == 0 {
            return Err(ChartError::InvalidSize { canvas, height_px });
        }
        self.registry
            .insert(Box::new(TerminalChart::new(canvas, config, height_px)));
        Ok(())
    }

    fn registry(&self) -> &dyn InstanceRegistry {
        self.registry.as_ref()
    }

    fn registry_mut(&mut self) -> &mut dyn InstanceRegistry {
        self.registry.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::builders;
    use crate::device::DeviceTier;

    #[test]
    fn destroyed_chart_rejects_further_calls() {
        let mut chart = TerminalChart::new(
            CanvasId::Sales,
            builders::sales_chart(DeviceTier::Mobile),
            180,
        );
        chart.resize(220).unwrap();
        assert_eq!(chart.height_px(), 220);

        chart.destroy().unwrap();
        assert_eq!(chart.destroy(), Err(ChartError::Destroyed(CanvasId::Sales)));
        assert_eq!(chart.resize(300), Err(ChartError::Destroyed(CanvasId::Sales)));
    }

    #[test]
    fn backend_registers_created_charts() {
        let mut backend = TerminalChartBackend::new(RegistryFlavor::Keyed);
        backend
            .create(
                CanvasId::Revenue,
                builders::revenue_chart(DeviceTier::Desktop),
                300,
            )
            .unwrap();
        assert_eq!(backend.registry().len(), 1);
        assert!(backend.registry().find(CanvasId::Revenue).is_some());

        let err = backend
            .create(CanvasId::Sales, builders::sales_chart(DeviceTier::Desktop), 0)
            .unwrap_err();
        assert!(err.to_string().contains("salesChart"));
    }
}
