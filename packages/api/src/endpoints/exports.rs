use chrono::NaiveDate;
use serde::Serialize;
use store::KeyValueStore;

use crate::client::{ApiClient, CsvFile};
use crate::error::Result;
use crate::models::{ReportQuery, Scope};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub scope: Scope,
}

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn export_transactions_csv(&self, query: &ExportQuery) -> Result<CsvFile> {
        let fallback = format!("kakepple_transactions_{}.csv", query.scope.as_str());
        self.get_file("/exports/csv", query, &fallback).await
    }

    pub async fn export_monthly_report_csv(&self, query: &ReportQuery) -> Result<CsvFile> {
        let fallback = format!(
            "kakepple_monthly_report_{}_{}_{:02}.csv",
            query.scope.as_str(),
            query.year,
            query.month.unwrap_or(1)
        );
        self.get_file("/exports/csv/report/monthly", query, &fallback)
            .await
    }

    pub async fn export_yearly_report_csv(&self, query: &ReportQuery) -> Result<CsvFile> {
        let fallback = format!(
            "kakepple_yearly_report_{}_{}.csv",
            query.scope.as_str(),
            query.year
        );
        self.get_file("/exports/csv/report/yearly", query, &fallback)
            .await
    }
}
