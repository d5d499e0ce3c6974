use crate::domain::dashboard::DashboardStats;
use crate::services::{ApiService, ServiceResult};
use crate::transport::Transport;

pub struct DashboardService<'a, T> {
    api: &'a ApiService<T>,
}

impl<'a, T: Transport> DashboardService<'a, T> {
    pub fn new(api: &'a ApiService<T>) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> ServiceResult<DashboardStats> {
        self.api
            .get::<DashboardStats>("/dashboard/stats", Vec::new())
            .await?
            .into_data()
    }
}
