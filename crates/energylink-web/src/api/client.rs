use energylink_core::dashboard::{DashboardFilters, RoyaltyApi};
use energylink_core::records::{DetailRow, FilterOptions, Invoice, InvoiceSummary, MonthlyRollup};
use energylink_core::{FetchError, Result};

use super::http::{api_url, get_json};

/// [`RoyaltyApi`] backed by the configured HTTP endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiClient;

impl RoyaltyApi for ApiClient {
    async fn filter_options(&self) -> Result<FilterOptions> {
        get_json(api_url("/api/dashboard/filters", &[])?).await
    }

    async fn monthly(&self, filters: &DashboardFilters) -> Result<Vec<MonthlyRollup>> {
        get_json(api_url("/api/dashboard/monthly", &filters.query_pairs())?).await
    }

    async fn details(&self, filters: &DashboardFilters) -> Result<Vec<DetailRow>> {
        get_json(api_url("/api/dashboard/details", &filters.query_pairs())?).await
    }

    async fn invoices(&self) -> Result<Vec<InvoiceSummary>> {
        get_json(api_url("/api/invoices/", &[])?).await
    }

    async fn invoice(&self, invoice_id: &str) -> Result<Option<Invoice>> {
        let mut url = api_url("/api/invoices/", &[])?;
        let base = url.to_string();
        url.path_segments_mut()
            .map_err(|()| FetchError::Transport {
                url: base,
                message: "API base URL cannot hold a path".into(),
            })?
            .pop_if_empty()
            .push(invoice_id);

        match get_json(url).await {
            Ok(invoice) => Ok(Some(invoice)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
