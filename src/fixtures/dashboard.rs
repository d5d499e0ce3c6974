use crate::domain::dashboard::DashboardStats;

pub fn fixture_dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_customers: 25,
        active_customers: 18,
        active_projects: 12,
        open_offers: 7,
        monthly_revenue: 186_400.0,
        revenue_growth: 8.3,
        conversion_rate: 34.5,
    }
}
