use crate::chart::{ChartSlot, ChartSpec};
use crate::period::Period;
use crate::surface::{ChartHandle, DashboardSurface, Header, KpiView, Panel};
use crate::table::TransactionRow;

/// Retained dashboard state that the terminal and browser front ends draw from.
///
/// `panel` is `None` until the first refresh starts.
#[derive(Debug, Default)]
pub struct DashboardView {
    panel: Option<Panel>,
    active_period: Period,
    header: Option<Header>,
    kpis: Option<KpiView>,
    charts: Vec<(ChartHandle, ChartSpec)>,
    table: Option<Vec<TransactionRow>>,
    next_handle: u64,
}

impl DashboardView {
    pub fn new(active_period: Period) -> Self {
        Self {
            active_period,
            ..Self::default()
        }
    }

    pub const fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.panel == Some(Panel::Loading)
    }

    pub const fn active_period(&self) -> Period {
        self.active_period
    }

    pub const fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub const fn kpis(&self) -> Option<&KpiView> {
        self.kpis.as_ref()
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.charts
            .iter()
            .find(|(_, spec)| spec.slot == slot)
            .map(|(_, spec)| spec)
    }

    pub fn mounted_charts(&self) -> usize {
        self.charts.len()
    }

    pub fn table(&self) -> Option<&[TransactionRow]> {
        self.table.as_deref()
    }
}

impl DashboardSurface for DashboardView {
    fn set_panel(&mut self, panel: Panel) {
        self.panel = Some(panel);
    }

    fn set_active_period(&mut self, period: Period) {
        self.active_period = period;
    }

    fn set_header(&mut self, header: Header) {
        self.header = Some(header);
    }

    fn set_kpis(&mut self, kpis: KpiView) {
        self.kpis = Some(kpis);
    }

    fn mount_chart(&mut self, spec: ChartSpec) -> ChartHandle {
        let existing = self
            .charts
            .iter()
            .position(|(_, mounted)| mounted.slot == spec.slot);
        if let Some(position) = existing {
            let (stale, _) = self.charts.remove(position);
            tracing::warn!(
                handle = stale.id(),
                slot = ?spec.slot,
                "chart mounted over one that was never disposed"
            );
        }

        self.next_handle += 1;
        let handle = ChartHandle::new(self.next_handle);
        self.charts.push((handle, spec));
        handle
    }

    fn dispose_chart(&mut self, handle: ChartHandle) {
        let before = self.charts.len();
        self.charts.retain(|(mounted, _)| *mounted != handle);
        if self.charts.len() == before {
            tracing::debug!(handle = handle.id(), "dispose of unknown chart ignored");
        }
    }

    fn mount_table(&mut self, rows: Option<Vec<TransactionRow>>) {
        self.table = rows;
    }
}
