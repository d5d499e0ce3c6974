use crate::domain::customer::Customer;
use crate::domain::dashboard::DashboardStats;
use crate::domain::project::Project;
use crate::domain::types::{CustomerId, ProjectId};
use crate::domain::user::User;
use crate::fixtures::{
    DEMO_USERNAME, FixtureUser, GENERATED_CUSTOMER_COUNT, MockCustomerGenerator,
    fixture_customers, fixture_dashboard_stats, fixture_projects, fixture_users,
};
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerListQuery, CustomerReader, DashboardReader, ProjectListQuery, ProjectReader,
    UserReader,
};

/// In-memory repository over the static fixtures.
///
/// Nothing is ever written back: created or updated customers are only echoed
/// by the handlers.
#[derive(Clone, Debug)]
pub struct FixtureRepository {
    customers: Vec<Customer>,
    projects: Vec<Project>,
    stats: DashboardStats,
    users: Vec<FixtureUser>,
    generator: MockCustomerGenerator,
}

impl FixtureRepository {
    /// Repository with a random generator seed.
    pub fn new() -> Self {
        let customers = fixture_customers();
        let generator = MockCustomerGenerator::from_entropy(next_customer_id(&customers));
        Self::with_generator(customers, generator)
    }

    /// Repository whose generated customers are fully reproducible.
    pub fn seeded(seed: u64) -> Self {
        let customers = fixture_customers();
        let generator = MockCustomerGenerator::new(seed, next_customer_id(&customers));
        Self::with_generator(customers, generator)
    }

    fn with_generator(customers: Vec<Customer>, generator: MockCustomerGenerator) -> Self {
        Self {
            customers,
            projects: fixture_projects(),
            stats: fixture_dashboard_stats(),
            users: fixture_users(),
            generator,
        }
    }
}

impl Default for FixtureRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn next_customer_id(customers: &[Customer]) -> CustomerId {
    customers
        .iter()
        .map(|customer| customer.id)
        .max()
        .map(|id| id.offset(1))
        .unwrap_or(CustomerId::MIN)
}

fn matches_search(customer: &Customer, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        Some(customer.name.as_str()),
        customer.company.as_deref(),
        Some(customer.email.as_str()),
        Some(customer.city.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

impl CustomerReader for FixtureRepository {
    fn list_customers(
        &self,
        query: &CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<Customer>)> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        let matching: Vec<Customer> = self
            .customers
            .iter()
            .cloned()
            .chain(self.generator.generate_many(GENERATED_CUSTOMER_COUNT))
            .filter(|customer| search.is_none_or(|term| matches_search(customer, term)))
            .filter(|customer| query.status.is_none_or(|status| customer.status == status))
            .collect();

        let total = matching.len();
        let items = match &query.pagination {
            Some(pagination) => {
                Paginated::from_items(matching, pagination.page, pagination.per_page).items
            }
            None => matching,
        };

        Ok((total, items))
    }

    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        Ok(self.customers.iter().find(|customer| customer.id == id).cloned())
    }

    fn listed_customer_count(&self) -> RepositoryResult<usize> {
        Ok(self.customers.len() + GENERATED_CUSTOMER_COUNT)
    }
}

impl ProjectReader for FixtureRepository {
    fn list_projects(&self, query: &ProjectListQuery) -> RepositoryResult<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|project| query.customer_id.is_none_or(|id| project.belongs_to(id)))
            .cloned()
            .collect())
    }

    fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        Ok(self.projects.iter().find(|project| project.id == id).cloned())
    }
}

impl DashboardReader for FixtureRepository {
    fn get_dashboard_stats(&self) -> RepositoryResult<DashboardStats> {
        Ok(self.stats.clone())
    }
}

impl UserReader for FixtureRepository {
    fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|fixture| {
                fixture
                    .credentials
                    .as_ref()
                    .is_some_and(|credentials| credentials.matches(username, password))
            })
            .map(|fixture| fixture.user.clone()))
    }

    fn get_demo_user(&self) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|fixture| fixture.user.username == DEMO_USERNAME)
            .map(|fixture| fixture.user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerStatus;
    use crate::fixtures::DEMO_PASSWORD;

    #[test]
    fn list_appends_generated_customers() {
        let repo = FixtureRepository::seeded(11);
        let (total, customers) = repo.list_customers(&CustomerListQuery::new()).unwrap();
        assert_eq!(total, 25);
        assert_eq!(customers.len(), 25);
        assert_eq!(customers[5].id.get(), 6);
    }

    #[test]
    fn get_by_id_ignores_generated_customers() {
        let repo = FixtureRepository::seeded(11);
        let found = repo
            .get_customer_by_id(CustomerId::new(2).unwrap())
            .unwrap();
        assert_eq!(found.map(|c| c.name), Some("Thomas Weber".to_string()));
        assert!(
            repo.get_customer_by_id(CustomerId::new(6).unwrap())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn list_filters_by_search_and_status() {
        let repo = FixtureRepository::seeded(11);
        let (total, customers) = repo
            .list_customers(&CustomerListQuery::new().search("  schmidt "))
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(customers[0].id.get(), 1);

        let (_, inactive) = repo
            .list_customers(&CustomerListQuery::new().status(CustomerStatus::Inactive))
            .unwrap();
        assert!(inactive.iter().all(|c| c.status == CustomerStatus::Inactive));
        assert!(inactive.iter().any(|c| c.id.get() == 5));
    }

    #[test]
    fn list_paginates_after_filtering() {
        let repo = FixtureRepository::seeded(11);
        let (total, page) = repo
            .list_customers(&CustomerListQuery::new().paginate(3, 10))
            .unwrap();
        assert_eq!(total, 25);
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id.get(), 21);
    }

    #[test]
    fn projects_filter_by_customer() {
        let repo = FixtureRepository::seeded(11);
        let projects = repo
            .list_projects(&ProjectListQuery::new().customer_id(CustomerId::new(1).unwrap()))
            .unwrap();
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| p.customer_id.get() == 1));
        assert_eq!(repo.list_projects(&ProjectListQuery::new()).unwrap().len(), 6);
    }

    #[test]
    fn only_demo_credentials_are_accepted() {
        let repo = FixtureRepository::seeded(11);
        assert!(
            repo.find_user_by_credentials(DEMO_USERNAME, DEMO_PASSWORD)
                .unwrap()
                .is_some()
        );
        assert!(repo.find_user_by_credentials("demo", "wrong").unwrap().is_none());
        assert!(repo.find_user_by_credentials("k.neumann", "").unwrap().is_none());
    }
}
