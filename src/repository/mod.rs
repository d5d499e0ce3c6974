//! Read access to the fixture data behind the mock endpoints.

use crate::domain::customer::{Customer, CustomerStatus};
use crate::domain::dashboard::DashboardStats;
use crate::domain::project::Project;
use crate::domain::types::{CustomerId, ProjectId};
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod fixtures;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use fixtures::FixtureRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListQuery {
    pub search: Option<String>,
    pub status: Option<CustomerStatus>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListQuery {
    pub customer_id: Option<CustomerId>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: CustomerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl ProjectListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}

pub trait CustomerReader {
    /// Fixture plus generated customers matching the query, with the total
    /// count before pagination.
    fn list_customers(&self, query: &CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
    /// Looks up a customer in the static fixture only.
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    /// Number of customers `list_customers` can return, generated ones included.
    fn listed_customer_count(&self) -> RepositoryResult<usize>;
}

pub trait ProjectReader {
    fn list_projects(&self, query: &ProjectListQuery) -> RepositoryResult<Vec<Project>>;
    fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
}

pub trait DashboardReader {
    fn get_dashboard_stats(&self) -> RepositoryResult<DashboardStats>;
}

pub trait UserReader {
    fn find_user_by_credentials(&self, username: &str, password: &str)
    -> RepositoryResult<Option<User>>;
    /// The account a valid mock token resolves to.
    fn get_demo_user(&self) -> RepositoryResult<Option<User>>;
}
