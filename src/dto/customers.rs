//! Query and result types for the customer and project listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, CustomerStatus};
use crate::domain::types::CustomerId;
use crate::forms::customers::CustomerForm;
use crate::pagination::PageMeta;

/// Query parameters accepted by `GET /customers`.
#[derive(Debug, Default, Clone)]
pub struct CustomersQuery {
    /// Optional free-form search string applied to name, company, email and city.
    pub search: Option<String>,
    /// Optional status filter.
    pub status: Option<CustomerStatus>,
    /// Optional page number; the full list is returned when absent.
    pub page: Option<usize>,
    /// Optional page size, only meaningful together with `page`.
    pub per_page: Option<usize>,
}

impl CustomersQuery {
    /// Encodes the query as URL parameters, skipping unset and blank values.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("perPage".to_string(), per_page.to_string()));
        }
        pairs
    }
}

/// Customers returned by [`crate::services::CustomerService::list`].
#[derive(Debug)]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    /// Present only when a page was requested.
    pub pagination: Option<PageMeta>,
}

/// Body echoed by `PUT /customers/:id`: the submitted fields stamped with the
/// path id and a fresh contact time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub id: CustomerId,
    #[serde(flatten)]
    pub fields: CustomerForm,
    pub last_contact: DateTime<Utc>,
}

/// Query parameters accepted by `GET /projects`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectsQuery {
    pub customer_id: Option<CustomerId>,
}

impl ProjectsQuery {
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
        }
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.customer_id
            .map(|id| vec![("customerId".to_string(), id.to_string())])
            .unwrap_or_default()
    }
}
