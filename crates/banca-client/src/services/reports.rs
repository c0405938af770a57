//! # Report Service
//!
//! Aggregated transaction reports over a date range.

use banca_core::page::DateRange;
use banca_core::TransactionsByType;

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Service for the `/reports` resource.
#[derive(Debug, Clone)]
pub struct ReportService {
    api: ApiClient,
}

impl ReportService {
    pub(crate) fn new(api: ApiClient) -> Self {
        ReportService { api }
    }

    /// GET /reports/transactions/by-type?startDate=..&endDate=.. -
    /// deposit/withdrawal totals and shares for the range.
    pub async fn transactions_by_type(
        &self,
        range: &DateRange,
    ) -> ClientResult<Vec<TransactionsByType>> {
        self.api
            .get_with_query("reports/transactions/by-type", &range.query_params())
            .await
    }
}
