use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    CategoryAnalysis, CategoryAnalysisQuery, MonthlyTrend, MonthlyTrendsQuery, ReportData,
    ReportQuery, SavingsData, YearlyTrend, YearlyTrendsQuery,
};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn category_analysis(&self, query: &CategoryAnalysisQuery) -> Result<CategoryAnalysis> {
        self.get_cached("/analytics/category-analysis", query).await
    }

    pub async fn monthly_trends(&self, query: &MonthlyTrendsQuery) -> Result<Vec<MonthlyTrend>> {
        self.get_cached("/analytics/monthly-trends", query).await
    }

    pub async fn yearly_trends(&self, query: &YearlyTrendsQuery) -> Result<Vec<YearlyTrend>> {
        self.get_cached("/analytics/yearly-trends", query).await
    }

    /// `query.month` must be set.
    pub async fn monthly_report(&self, query: &ReportQuery) -> Result<ReportData> {
        self.get_cached("/analytics/report/monthly", query).await
    }

    pub async fn yearly_report(&self, query: &ReportQuery) -> Result<ReportData> {
        self.get_cached("/analytics/report/yearly", query).await
    }

    pub async fn savings(&self) -> Result<SavingsData> {
        self.get_cached("/analytics/savings", &()).await
    }
}
