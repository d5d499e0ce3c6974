use log::warn;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::CustomerId;
use crate::dto::customers::{CustomerPage, CustomerUpdate, CustomersQuery};
use crate::forms::customers::CustomerForm;
use crate::services::{ApiService, ServiceResult};
use crate::transport::Transport;

/// Customer endpoints: listing, lookup and the create/edit/delete dialogs.
pub struct CustomerService<'a, T> {
    api: &'a ApiService<T>,
}

impl<'a, T: Transport> CustomerService<'a, T> {
    pub fn new(api: &'a ApiService<T>) -> Self {
        Self { api }
    }

    /// Lists customers matching `query`, with page metadata when a page was
    /// requested.
    pub async fn list(&self, query: &CustomersQuery) -> ServiceResult<CustomerPage> {
        let outcome = self
            .api
            .get::<Vec<Customer>>("/customers", query.to_pairs())
            .await?;
        let pagination = outcome.response.pagination.clone();
        let customers = outcome.into_data()?;

        Ok(CustomerPage {
            customers,
            pagination,
        })
    }

    pub async fn get(&self, id: CustomerId) -> ServiceResult<Option<Customer>> {
        self.api
            .get::<Customer>(&format!("/customers/{id}"), Vec::new())
            .await?
            .into_optional()
    }

    /// Validates the form locally before submitting it.
    pub async fn create(&self, form: &CustomerForm) -> ServiceResult<Customer> {
        if let Err(err) = NewCustomer::try_from(form.clone()) {
            warn!("Customer form rejected before submit: {err}");
            return Err(err.into());
        }

        self.api
            .post::<_, Customer>("/customers", form)
            .await?
            .into_data()
    }

    /// Submits edited fields; the reply echoes them with the id applied.
    pub async fn update(
        &self,
        id: CustomerId,
        form: &CustomerForm,
    ) -> ServiceResult<CustomerUpdate> {
        if let Err(err) = NewCustomer::try_from(form.clone()) {
            warn!("Customer form rejected before submit: {err}");
            return Err(err.into());
        }

        self.api
            .put::<_, CustomerUpdate>(&format!("/customers/{id}"), form)
            .await?
            .into_data()
    }

    pub async fn delete(&self, id: CustomerId) -> ServiceResult<()> {
        self.api
            .delete::<serde_json::Value>(&format!("/customers/{id}"))
            .await?
            .into_unit()
    }
}
