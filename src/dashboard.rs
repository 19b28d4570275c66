//! Chart lifecycle orchestration for the dashboard page.

use tracing::debug;

use crate::charts::backend::{ChartBackend, ChartHandle};
use crate::charts::{macros_chart_config, weekly_chart_config};
use crate::error::DashboardResult;
use crate::page::{DashboardPage, MACROS_CHART_ID, WEEKLY_CHART_ID};
use crate::types::{DayCalories, MacroBreakdown};

/// What a render call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A chart was created on the target, replacing any previous one.
    Rendered,
    /// The page has no such target; nothing was drawn or destroyed.
    TargetMissing,
}

/// Owns the two dashboard chart slots and their live handles.
///
/// Each render destroys the slot's previous chart before creating the next,
/// so at most one chart is ever live per slot. A page without the requested
/// target reports [`RenderOutcome::TargetMissing`] and leaves both slots
/// untouched. If the backend fails after the old chart was destroyed, the
/// slot is left empty and the error propagates.
pub struct DashboardCharts<B: ChartBackend> {
    backend: B,
    macros_chart: Option<B::Handle>,
    weekly_chart: Option<B::Handle>,
}

impl<B: ChartBackend> DashboardCharts<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            macros_chart: None,
            weekly_chart: None,
        }
    }

    /// Render the macro breakdown doughnut into the `macrosChart` target.
    pub fn render_macros(
        &mut self,
        page: &DashboardPage,
        macros: &MacroBreakdown,
    ) -> DashboardResult<RenderOutcome> {
        let target = match page.target(MACROS_CHART_ID) {
            Some(target) => target,
            None => {
                debug!(target_id = MACROS_CHART_ID, "render target missing, skipping");
                return Ok(RenderOutcome::TargetMissing);
            }
        };

        if let Some(previous) = self.macros_chart.take() {
            previous.destroy();
        }

        let config = macros_chart_config(macros);
        self.macros_chart = Some(self.backend.create_chart(target, &config)?);
        Ok(RenderOutcome::Rendered)
    }

    /// Render the weekly calorie trend into the `weeklyChart` target.
    pub fn render_weekly(
        &mut self,
        page: &DashboardPage,
        days: &[DayCalories],
    ) -> DashboardResult<RenderOutcome> {
        let target = match page.target(WEEKLY_CHART_ID) {
            Some(target) => target,
            None => {
                debug!(target_id = WEEKLY_CHART_ID, "render target missing, skipping");
                return Ok(RenderOutcome::TargetMissing);
            }
        };

        if let Some(previous) = self.weekly_chart.take() {
            previous.destroy();
        }

        let config = weekly_chart_config(days);
        self.weekly_chart = Some(self.backend.create_chart(target, &config)?);
        Ok(RenderOutcome::Rendered)
    }

    /// Live macros chart, if one has been rendered.
    pub fn macros_chart(&self) -> Option<&B::Handle> {
        self.macros_chart.as_ref()
    }

    /// Live weekly chart, if one has been rendered.
    pub fn weekly_chart(&self) -> Option<&B::Handle> {
        self.weekly_chart.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::charts::config::ChartConfig;
    use crate::error::DashboardError;
    use crate::page::RenderTarget;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BackendEvent {
        Created(u32),
        Destroyed(u32),
    }

    /// Fake backend that logs create/destroy order and can fail on demand.
    #[derive(Default)]
    struct RecordingBackend {
        next_id: u32,
        log: Rc<RefCell<Vec<BackendEvent>>>,
        fail_next: Rc<Cell<bool>>,
    }

    struct RecordedChart {
        id: u32,
        target_id: String,
        config: ChartConfig,
        log: Rc<RefCell<Vec<BackendEvent>>>,
    }

    impl ChartHandle for RecordedChart {
        fn destroy(self) {
            self.log.borrow_mut().push(BackendEvent::Destroyed(self.id));
        }
    }

    impl ChartBackend for RecordingBackend {
        type Handle = RecordedChart;

        fn create_chart(
            &mut self,
            target: &RenderTarget,
            config: &ChartConfig,
        ) -> DashboardResult<RecordedChart> {
            if self.fail_next.get() {
                self.fail_next.set(false);
                return Err(DashboardError::Backend("injected failure".to_string()));
            }

            self.next_id += 1;
            self.log.borrow_mut().push(BackendEvent::Created(self.next_id));
            Ok(RecordedChart {
                id: self.next_id,
                target_id: target.id.clone(),
                config: config.clone(),
                log: Rc::clone(&self.log),
            })
        }
    }

    fn recording_charts() -> (
        DashboardCharts<RecordingBackend>,
        Rc<RefCell<Vec<BackendEvent>>>,
        Rc<Cell<bool>>,
    ) {
        let backend = RecordingBackend::default();
        let log = Rc::clone(&backend.log);
        let fail_next = Rc::clone(&backend.fail_next);
        (DashboardCharts::new(backend), log, fail_next)
    }

    fn week() -> Vec<DayCalories> {
        let calories = [1800.0, 2100.0, 1950.0, 2200.0, 1700.0, 2400.0, 2000.0];
        calories
            .iter()
            .enumerate()
            .map(|(i, &kcal)| {
                let date = chrono::NaiveDate::from_ymd_opt(2023, 1, 2 + i as u32).unwrap();
                DayCalories::new(date, kcal)
            })
            .collect()
    }

    #[test]
    fn test_renders_macros_into_its_target() {
        let (mut charts, _, _) = recording_charts();
        let page = DashboardPage::with_default_targets();

        let outcome = charts
            .render_macros(&page, &MacroBreakdown::new(96.0, 210.0, 58.0))
            .unwrap();

        assert_eq!(outcome, RenderOutcome::Rendered);
        let handle = charts.macros_chart().unwrap();
        assert_eq!(handle.target_id, MACROS_CHART_ID);
        assert_eq!(handle.config.data.labels, vec!["Protein", "Carbs", "Fats"]);
        assert_eq!(handle.config.data.datasets[0].values, vec![96.0, 210.0, 58.0]);
    }

    #[test]
    fn test_rerender_destroys_previous_chart_first() {
        let (mut charts, log, _) = recording_charts();
        let page = DashboardPage::with_default_targets();
        let macros = MacroBreakdown::new(96.0, 210.0, 58.0);

        charts.render_macros(&page, &macros).unwrap();
        charts.render_macros(&page, &macros).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                BackendEvent::Created(1),
                BackendEvent::Destroyed(1),
                BackendEvent::Created(2),
            ]
        );
        let survivor = charts.macros_chart().unwrap();
        assert_eq!(survivor.id, 2);
        assert_eq!(survivor.config, macros_chart_config(&macros));
    }

    #[test]
    fn test_empty_week_renders_without_error() {
        let (mut charts, _, _) = recording_charts();
        let page = DashboardPage::with_default_targets();

        let outcome = charts.render_weekly(&page, &[]).unwrap();

        assert_eq!(outcome, RenderOutcome::Rendered);
        let handle = charts.weekly_chart().unwrap();
        assert!(handle.config.data.labels.is_empty());
        assert!(handle.config.data.datasets[0].values.is_empty());
    }

    #[test]
    fn test_weekly_chart_keeps_caller_order() {
        let (mut charts, _, _) = recording_charts();
        let page = DashboardPage::with_default_targets();

        charts.render_weekly(&page, &week()).unwrap();

        let handle = charts.weekly_chart().unwrap();
        assert_eq!(handle.target_id, WEEKLY_CHART_ID);
        assert_eq!(
            handle.config.data.labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(
            handle.config.data.datasets[0].values,
            vec![1800.0, 2100.0, 1950.0, 2200.0, 1700.0, 2400.0, 2000.0]
        );
    }

    #[test]
    fn test_missing_target_skips_without_touching_other_slot() {
        let (mut charts, log, _) = recording_charts();
        let mut page = DashboardPage::with_default_targets();
        page.remove_target(WEEKLY_CHART_ID).unwrap();

        charts
            .render_macros(&page, &MacroBreakdown::new(1.0, 2.0, 3.0))
            .unwrap();
        let outcome = charts.render_weekly(&page, &week()).unwrap();

        assert_eq!(outcome, RenderOutcome::TargetMissing);
        assert!(charts.weekly_chart().is_none());
        assert_eq!(charts.macros_chart().unwrap().id, 1);
        assert_eq!(*log.borrow(), vec![BackendEvent::Created(1)]);
    }

    #[test]
    fn test_missing_target_keeps_previous_chart_alive() {
        let (mut charts, log, _) = recording_charts();
        let mut page = DashboardPage::with_default_targets();

        charts.render_weekly(&page, &week()).unwrap();
        page.remove_target(WEEKLY_CHART_ID).unwrap();
        let outcome = charts.render_weekly(&page, &week()).unwrap();

        assert_eq!(outcome, RenderOutcome::TargetMissing);
        assert_eq!(charts.weekly_chart().unwrap().id, 1);
        assert_eq!(*log.borrow(), vec![BackendEvent::Created(1)]);
    }

    #[test]
    fn test_backend_failure_empties_the_slot_and_propagates() {
        let (mut charts, log, fail_next) = recording_charts();
        let page = DashboardPage::with_default_targets();
        let macros = MacroBreakdown::new(96.0, 210.0, 58.0);

        charts.render_macros(&page, &macros).unwrap();
        fail_next.set(true);
        let err = charts.render_macros(&page, &macros).unwrap_err();

        assert!(matches!(err, DashboardError::Backend(_)));
        assert!(charts.macros_chart().is_none());

        // The next successful render recovers the slot.
        charts.render_macros(&page, &macros).unwrap();
        assert_eq!(charts.macros_chart().unwrap().id, 2);
        assert_eq!(
            *log.borrow(),
            vec![
                BackendEvent::Created(1),
                BackendEvent::Destroyed(1),
                BackendEvent::Created(2),
            ]
        );
    }
}
