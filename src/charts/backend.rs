//! Seam between chart configs and whatever draws them.

use crate::charts::config::ChartConfig;
use crate::error::DashboardResult;
use crate::page::RenderTarget;

/// A live chart occupying a render target.
///
/// Destroying consumes the handle, so a dead chart cannot be touched again.
pub trait ChartHandle {
    /// Release the chart and whatever resources back it.
    fn destroy(self);
}

/// Turns a chart config into a live chart on a render target.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn create_chart(
        &mut self,
        target: &RenderTarget,
        config: &ChartConfig,
    ) -> DashboardResult<Self::Handle>;
}
