use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, ProjectId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    NewBuild,
    Renovation,
    Maintenance,
    Consulting,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub customer_id: CustomerId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub budget: f64,
    /// Completion in percent, `0..=100`.
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Project {
    pub fn belongs_to(&self, customer_id: CustomerId) -> bool {
        self.customer_id == customer_id
    }
}
