use serde::{Deserialize, Serialize};

/// Headline figures shown on the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: u32,
    pub active_customers: u32,
    pub active_projects: u32,
    pub open_offers: u32,
    pub monthly_revenue: f64,
    /// Month-over-month change in percent.
    pub revenue_growth: f64,
    /// Share of offers turned into orders, in percent.
    pub conversion_rate: f64,
}
