//! Mock repository implementations for isolating handlers and services in tests.

use mockall::mock;

use crate::domain::customer::Customer;
use crate::domain::dashboard::DashboardStats;
use crate::domain::project::Project;
use crate::domain::types::{CustomerId, ProjectId};
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerListQuery, CustomerReader, DashboardReader, ProjectListQuery, ProjectReader,
    UserReader,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn list_customers(
            &self,
            query: &CustomerListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn listed_customer_count(&self) -> RepositoryResult<usize>;
    }

    impl ProjectReader for Repository {
        fn list_projects(&self, query: &ProjectListQuery) -> RepositoryResult<Vec<Project>>;
        fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
    }

    impl DashboardReader for Repository {
        fn get_dashboard_stats(&self) -> RepositoryResult<DashboardStats>;
    }

    impl UserReader for Repository {
        fn find_user_by_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> RepositoryResult<Option<User>>;
        fn get_demo_user(&self) -> RepositoryResult<Option<User>>;
    }
}
