use crate::domain::project::Project;
use crate::domain::types::ProjectId;
use crate::dto::customers::ProjectsQuery;
use crate::services::{ApiService, ServiceResult};
use crate::transport::Transport;

pub struct ProjectService<'a, T> {
    api: &'a ApiService<T>,
}

impl<'a, T: Transport> ProjectService<'a, T> {
    pub fn new(api: &'a ApiService<T>) -> Self {
        Self { api }
    }

    /// All projects, or those of a single customer.
    pub async fn list(&self, query: ProjectsQuery) -> ServiceResult<Vec<Project>> {
        self.api
            .get::<Vec<Project>>("/projects", query.to_pairs())
            .await?
            .into_data()
    }

    pub async fn get(&self, id: ProjectId) -> ServiceResult<Option<Project>> {
        self.api
            .get::<Project>(&format!("/projects/{id}"), Vec::new())
            .await?
            .into_optional()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::types::CustomerId;
    use crate::mock::MockRouter;
    use crate::repository::FixtureRepository;

    fn api() -> ApiService<MockRouter<FixtureRepository>> {
        ApiService::new(MockRouter::new(FixtureRepository::seeded(2), Duration::ZERO))
    }

    #[tokio::test]
    async fn list_filters_by_customer() {
        let api = api();
        let customer_id = CustomerId::new(1).expect("valid id");

        let all = api
            .projects()
            .list(ProjectsQuery::default())
            .await
            .expect("projects");
        let owned = api
            .projects()
            .list(ProjectsQuery::for_customer(customer_id))
            .await
            .expect("projects");

        assert_eq!(all.len(), 6);
        assert_eq!(owned.len(), 3);
        assert!(owned.iter().all(|project| project.belongs_to(customer_id)));
    }

    #[tokio::test]
    async fn missing_project_reads_as_none() {
        let project = api()
            .projects()
            .get(ProjectId::new(999).expect("valid id"))
            .await
            .expect("lookup");
        assert!(project.is_none());
    }
}
