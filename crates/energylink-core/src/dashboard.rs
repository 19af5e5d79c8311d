//! Dashboard filters and the two-query data load.
//!
//! The dashboard filter set is independent of the invoice picker: it is edited
//! as a draft and only reaches the loader once committed.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::months::sort_by_month;
use crate::records::{DetailRow, FilterOptions, Invoice, InvoiceSummary, MonthlyRollup};

// ── Filters ───────────────────────────────────────────────────────────────────

/// Which multi-select list a toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterList {
    Operators,
    Properties,
    Categories,
}

/// Committed dashboard filters. Empty lists and `None` dates mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilters {
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub date_end: Option<String>,
}

impl DashboardFilters {
    pub fn list(&self, which: FilterList) -> &[String] {
        match which {
            FilterList::Operators => &self.operators,
            FilterList::Properties => &self.properties,
            FilterList::Categories => &self.categories,
        }
    }

    fn list_mut(&mut self, which: FilterList) -> &mut Vec<String> {
        match which {
            FilterList::Operators => &mut self.operators,
            FilterList::Properties => &mut self.properties,
            FilterList::Categories => &mut self.categories,
        }
    }

    pub fn is_selected(&self, which: FilterList, value: &str) -> bool {
        self.list(which).iter().any(|v| v == value)
    }

    /// Add `value` to the list if absent, remove it if present.
    pub fn toggle(&mut self, which: FilterList, value: &str) {
        let list = self.list_mut(which);
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
    }

    /// Set a date bound from a select value; an empty value clears it.
    pub fn set_date_start(&mut self, value: &str) {
        self.date_start = (!value.is_empty()).then(|| value.to_string());
    }

    pub fn set_date_end(&mut self, value: &str) {
        self.date_end = (!value.is_empty()).then(|| value.to_string());
    }

    /// Query parameters, with multi-valued filters as repeated keys.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        pairs.extend(self.operators.iter().map(|o| ("operators", o.clone())));
        pairs.extend(self.properties.iter().map(|p| ("properties", p.clone())));
        pairs.extend(self.categories.iter().map(|c| ("categories", c.clone())));
        if let Some(ds) = self.date_start.as_ref().filter(|d| !d.is_empty()) {
            pairs.push(("date_start", ds.clone()));
        }
        if let Some(de) = self.date_end.as_ref().filter(|d| !d.is_empty()) {
            pairs.push(("date_end", de.clone()));
        }
        pairs
    }
}

// ── API seam ──────────────────────────────────────────────────────────────────

/// The royalty backend, as seen by the viewer.
///
/// Futures are `Send` so implementations can be driven from server handlers.
pub trait RoyaltyApi {
    fn filter_options(&self) -> impl Future<Output = Result<FilterOptions>> + Send;

    fn monthly(&self, filters: &DashboardFilters) -> impl Future<Output = Result<Vec<MonthlyRollup>>> + Send;

    fn details(&self, filters: &DashboardFilters) -> impl Future<Output = Result<Vec<DetailRow>>> + Send;

    fn invoices(&self) -> impl Future<Output = Result<Vec<InvoiceSummary>>> + Send;

    /// A full invoice; `Ok(None)` when the backend has no such id.
    fn invoice(&self, invoice_id: &str) -> impl Future<Output = Result<Option<Invoice>>> + Send;
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Everything the dashboard charts and tables render from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub monthly: Vec<MonthlyRollup>,
    pub details: Vec<DetailRow>,
}

/// Fetch rollup and detail rows concurrently from one filter snapshot.
///
/// Either failure fails the whole load, so callers never render half a result.
/// Rollup rows come back in chronological order.
pub async fn load_dashboard<A: RoyaltyApi>(api: &A, filters: &DashboardFilters) -> Result<DashboardData> {
    let snapshot = filters.clone();

    let (mut monthly, details) = futures::try_join!(api.monthly(&snapshot), api.details(&snapshot)).map_err(|e| {
        tracing::warn!(error = %e, "dashboard load failed");
        e
    })?;

    monthly.sort_by(|a, b| sort_by_month(&a.production_date, &b.production_date));

    tracing::debug!(
        months = monthly.len(),
        detail_rows = details.len(),
        "dashboard loaded"
    );

    Ok(DashboardData { monthly, details })
}
