#[cfg(feature = "ssr")]
mod client;
#[cfg(feature = "ssr")]
mod http;

use energylink_core::dashboard::{DashboardData, DashboardFilters};
use energylink_core::records::{FilterOptions, Invoice, InvoiceSummary};
use leptos::prelude::*;

#[cfg(feature = "ssr")]
pub use client::ApiClient;

// Server functions: the browser never talks to the royalty API directly.

#[server(FetchFilterOptions)]
pub async fn fetch_filter_options() -> Result<FilterOptions, ServerFnError> {
    use energylink_core::dashboard::RoyaltyApi;

    ApiClient.filter_options().await.map_err(ServerFnError::new)
}

/// Rollup and detail rows for one committed filter set.
#[server(LoadDashboard)]
pub async fn load_dashboard(filters: DashboardFilters) -> Result<DashboardData, ServerFnError> {
    energylink_core::dashboard::load_dashboard(&ApiClient, &filters)
        .await
        .map_err(ServerFnError::new)
}

#[server(FetchInvoiceList)]
pub async fn fetch_invoice_list() -> Result<Vec<InvoiceSummary>, ServerFnError> {
    use energylink_core::dashboard::RoyaltyApi;

    ApiClient.invoices().await.map_err(ServerFnError::new)
}

/// A full invoice, or `None` when the id is unknown to the backend.
#[server(FetchInvoice)]
pub async fn fetch_invoice(invoice_id: String) -> Result<Option<Invoice>, ServerFnError> {
    use energylink_core::dashboard::RoyaltyApi;

    ApiClient.invoice(&invoice_id).await.map_err(ServerFnError::new)
}
